use super::{read_sheet, write_sheet};
use clap::Args;
use tracing::{info, warn};
use vptranspose::api::parse_offset;
use vptranspose::config::{OutputParams, RangeParams, Settings};
use vptranspose::transposer::{OobPolicy, Transposer};
use vptranspose::{scorer, sheet, VpResult};

#[derive(Args, Debug, Clone)]
pub struct TransposeArgs {
    /// Sheet file, or - for stdin
    pub input: String,

    /// Semitones to shift by (negative moves down)
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    pub offset: String,

    #[command(flatten)]
    pub range: RangeParams,

    #[command(flatten)]
    pub output: OutputParams,
}

pub fn run(args: TransposeArgs, settings: &Settings) -> VpResult<()> {
    let offset = parse_offset(&args.offset)?;
    let range = args.range.key_range(settings)?;
    let policy = args.range.policy(settings);
    let transposer = Transposer::new(range, policy)?;

    let text = read_sheet(&args.input)?;
    info!(
        "🎹 Transposing by {:+} within {}..={} ({})",
        offset,
        range.min(),
        range.max(),
        policy
    );

    let missed = scorer::count_out_of_range_keys(&sheet::body(&text), offset, range);
    if missed > 0 && policy != OobPolicy::Mark {
        warn!(
            "⚠️  {} note(s) fall outside the playable range and were handled with '{}'",
            missed, policy
        );
    }

    let rendered = sheet::render(&text, offset, &transposer, args.output.with_header(settings));
    write_sheet(&args.input, args.output.output.as_deref(), &rendered)
}

use super::{read_sheet, write_sheet};
use crate::reports;
use clap::Args;
use tracing::info;
use vptranspose::config::{OutputParams, Settings};
use vptranspose::ranges::KnownRange;
use vptranspose::scorer::score_known_ranges;
use vptranspose::transposer::{OobPolicy, Transposer};
use vptranspose::{sheet, VpResult};

#[derive(Args, Debug, Clone)]
pub struct CompressArgs {
    /// Sheet file, or - for stdin
    pub input: String,

    /// Target range: 1-s, 8-l or t-m. Without it the ranges are only scored.
    #[arg(short, long)]
    pub range: Option<KnownRange>,

    /// Out-of-range note handling
    #[arg(short, long, value_enum)]
    pub policy: Option<OobPolicy>,

    #[command(flatten)]
    pub output: OutputParams,
}

pub fn run(args: CompressArgs, settings: &Settings) -> VpResult<()> {
    let text = read_sheet(&args.input)?;

    let Some(known) = args.range else {
        reports::print_range_scores(&score_known_ranges(&sheet::body(&text)));
        return Ok(());
    };

    let range = known.key_range();
    let policy = args.policy.unwrap_or(settings.policy);
    info!(
        "🗜️  Compressing into {} ({}..={}) with '{}'",
        known,
        range.min(),
        range.max(),
        policy
    );

    let transposer = Transposer::new(range, policy)?;
    let rendered = sheet::render(&text, 0, &transposer, args.output.with_header(settings));
    write_sheet(&args.input, args.output.output.as_deref(), &rendered)
}

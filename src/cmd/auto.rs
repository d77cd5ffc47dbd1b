use super::{read_sheet, write_sheet};
use crate::reports;
use clap::Args;
use tracing::info;
use vptranspose::config::{OutputParams, RangeParams, Settings, WindowParams};
use vptranspose::search::{best_of, evaluate_window};
use vptranspose::transposer::Transposer;
use vptranspose::{sheet, VpResult};

#[derive(Args, Debug, Clone)]
pub struct AutoArgs {
    /// Sheet file, or - for stdin
    pub input: String,

    #[command(flatten)]
    pub window: WindowParams,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Write the sheet transposed by the preferred offset
    #[arg(long, default_value_t = false)]
    pub apply: bool,

    #[command(flatten)]
    pub range: RangeParams,

    #[command(flatten)]
    pub output: OutputParams,
}

pub fn run(args: AutoArgs, settings: &Settings) -> VpResult<()> {
    let window = args.window.window(settings)?;
    let text = read_sheet(&args.input)?;

    info!(
        "🔎 Scoring {} offsets ({:+}..={:+})",
        window.offsets().count(),
        window.min(),
        window.max()
    );
    let candidates = evaluate_window(&sheet::body(&text), window);
    let result = best_of(&candidates);

    if !args.apply {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            reports::print_candidates(&candidates, &result);
            reports::print_search_summary(&result);
        }
        return Ok(());
    }

    let offset = result.preferred();
    if result.is_already_best() {
        info!("This sheet is already at the best transposition possible.");
    } else {
        info!(
            "🏆 Best offsets {:?} ({} bad notes); applying {:+}",
            result.offsets, result.badness, offset
        );
    }

    let transposer = Transposer::new(args.range.key_range(settings)?, args.range.policy(settings))?;
    let rendered = sheet::render(&text, offset, &transposer, args.output.with_header(settings));
    write_sheet(&args.input, args.output.output.as_deref(), &rendered)
}

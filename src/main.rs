use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};
use vptranspose::config::Settings;
use vptranspose::VpResult;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON settings file (policy, key range, search window, header)
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Shift every key of a sheet by a number of semitones
    Transpose(cmd::transpose::TransposeArgs),
    /// Find the offsets with the fewest accidentals and out-of-range notes
    Auto(cmd::auto::AutoArgs),
    /// Fit a sheet into one of the three-octave ranges
    Compress(cmd::compress::CompressArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> VpResult<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::default(),
    };

    match cli.command {
        Commands::Transpose(args) => cmd::transpose::run(args, &settings),
        Commands::Auto(args) => cmd::auto::run(args, &settings),
        Commands::Compress(args) => cmd::compress::run(args, &settings),
    }
}

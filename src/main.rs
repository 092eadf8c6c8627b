use access_log_stats::input::{self, InputSource};
use access_log_stats::model::Accumulator;
use access_log_stats::{Result, logging, render};

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "access-log-stats")]
#[command(about = "Web server access log analyzer", long_about = None)]
struct Cli {
    /// Log file, or directory of `*.log` files.
    input: PathBuf,

    /// Where to write the JSON summary.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    // 1) Classify input; a bad path is reported here, not as an I/O failure.
    let source = match InputSource::resolve(&cli.input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {}", err);
            return Ok(ExitCode::FAILURE);
        }
    };

    // 2) Stream every log line through one accumulator.
    let mut acc = Accumulator::new();
    input::analyze(&source, &mut acc)?;

    // 3) Summarize + persist.
    let summary = acc.build_summary();
    let out = cli.output.unwrap_or_else(|| source.default_output());
    let json = render::write_summary(&out, &summary)?;

    println!("{}", json);
    println!("Wrote {}", out.display());

    Ok(ExitCode::SUCCESS)
}

//! errdex CLI binary entry point.
//! Resolves settings, runs the extraction, and prints the summary.

use clap::Parser;
use errdex::cli::Cli;
use errdex::{config, extract, output, utils};

fn main() {
    utils::init_tracing();
    let cli = Cli::parse();

    let root = config::tool_root(cli.root.as_deref());
    let cfg = match config::load_config(&root) {
        config::Loaded::Found(cfg) => cfg,
        config::Loaded::Missing => config::ErrdexConfig::default(),
        config::Loaded::Invalid { path, reason } => {
            eprintln!(
                "{} {}",
                utils::note_prefix(),
                format!(
                    "Ignoring invalid config {}: {}",
                    path.to_string_lossy(),
                    reason
                )
            );
            config::ErrdexConfig::default()
        }
    };
    let eff = config::resolve_effective(
        cli.root.as_deref(),
        &cli.logs,
        cli.errors_dir.as_deref(),
        cli.output.as_deref(),
        cfg,
    );

    let run = match extract::run_extract(&eff.candidates, &eff.errors_dir) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(e.exit_code());
        }
    };
    if let Err(e) = output::print_summary(&run.index, &eff.output) {
        eprintln!("{} {}", utils::error_prefix(), e);
        std::process::exit(e.exit_code());
    }
}

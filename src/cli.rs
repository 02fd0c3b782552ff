//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "errdex",
    version,
    about = "Extract MSBuild diagnostics into per-file reports and a JSON index",
    long_about = "errdex: parse logs/msbuild.errors.log (or logs/msbuild.log) and write one <file>.err.txt per source file plus errors/index.json.\n\nConfiguration precedence: CLI > errdex.toml > defaults.",
    after_help = "Examples:\n  errdex\n  errdex --root build/cpp\n  errdex --log logs/ci.log --errors-dir out/errors --output json"
)]
/// Top-level CLI options. Every flag is optional.
pub struct Cli {
    #[arg(long, help = "Tool root containing logs/ (default: current dir)")]
    pub root: Option<String>,
    #[arg(
        long = "log",
        value_name = "PATH",
        help = "Candidate log, repeatable; first existing wins (default: logs/msbuild.errors.log, logs/msbuild.log)"
    )]
    pub logs: Vec<String>,
    #[arg(long, help = "Output directory relative to root (default: errors)")]
    pub errors_dir: Option<String>,
    #[arg(
        long,
        value_parser = crate::config::OUTPUT_MODES,
        help = "Stdout mode: human|json (default: human)"
    )]
    pub output: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_is_valid() {
        let cli = Cli::try_parse_from(["errdex"]).unwrap();
        assert!(cli.root.is_none());
        assert!(cli.logs.is_empty());
    }

    #[test]
    fn test_repeatable_log_keeps_order() {
        let cli =
            Cli::try_parse_from(["errdex", "--log", "b.log", "--log", "a.log", "--output", "json"])
                .unwrap();
        assert_eq!(cli.logs, vec!["b.log", "a.log"]);
        assert_eq!(cli.output.as_deref(), Some("json"));
    }

    #[test]
    fn test_unknown_output_mode_rejected() {
        let err = Cli::try_parse_from(["errdex", "--output", "xml"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}

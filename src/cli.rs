use crate::message::OutputFormat;
use crate::types::WorkoutKind;
use clap::{ArgAction, Parser};
use std::fmt::Write;
use std::path::PathBuf;

/// Code table shown after `--help`.
pub fn codes_help() -> String {
    let mut help = String::from("Workout codes:\n");
    for kind in WorkoutKind::ALL {
        let _ = writeln!(
            help,
            "  {}  {:<14} {} parameters",
            kind.code(),
            kind.display_name(),
            kind.arity()
        );
    }
    help
}

#[derive(Parser, Debug)]
#[command(
    name = "fitcalc",
    about = "Print distance, speed and calories for workout sensor packages",
    after_help = codes_help()
)]
pub struct Cli {
    /// JSON batch file: `[["RUN", [15000, 1, 75]], ["SWM", [...]], ...]`.
    ///
    /// Use `-` for stdin. Without it the built-in sample batch is processed.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output format for each summary line.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fail on the first invalid package instead of skipping it.
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn help_lists_every_code() {
        let help = Cli::command().render_help().to_string();
        for kind in WorkoutKind::ALL {
            assert!(help.contains(kind.code()), "missing {} in help", kind.code());
        }
        assert!(codes_help().contains("SWM  Swimming       5 parameters"));
    }

    #[test]
    fn defaults_to_demo_text_output() {
        let cli = Cli::parse_from(["fitcalc"]);
        assert!(cli.input.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.strict);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["fitcalc", "-", "--format", "json", "--strict", "-vv"]);
        assert_eq!(cli.input, Some(PathBuf::from("-")));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.strict);
        assert_eq!(cli.verbose, 2);
    }
}

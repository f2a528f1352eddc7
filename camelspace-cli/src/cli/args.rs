use camelspace_core::WalkOptions;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Rename camelCase files to space separated words, recursively
///
/// Operates on the current working directory. Nothing is renamed unless
/// --pretend=false is given.
#[derive(Parser, Debug)]
#[command(name = "camelspace")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Rename files recursively
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub recursive: bool,

    /// Print what would be done but don't do it
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub pretend: bool,

    /// Output more information, including files that need no rename
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub verbose: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Format of the report printed when the walk finishes
    #[arg(long, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            recursive: self.recursive,
            pretend: self.pretend,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["camelspace"]).unwrap();
        assert_eq!(cli.walk_options(), WalkOptions::default());
        assert_eq!(cli.output, OutputFormat::Summary);
        assert!(cli.directory.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_boolean_flag_spellings() {
        let cli = Cli::try_parse_from(["camelspace", "--pretend=false"]).unwrap();
        assert!(!cli.pretend);

        let cli = Cli::try_parse_from(["camelspace", "--recursive", "false"]).unwrap();
        assert!(!cli.recursive);

        let cli = Cli::try_parse_from(["camelspace", "--verbose"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["camelspace", "--pretend", "--verbose=false"]).unwrap();
        assert!(cli.pretend);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["camelspace", "somewhere"]).is_err());
    }

    #[test]
    fn test_rejects_non_boolean_values() {
        assert!(Cli::try_parse_from(["camelspace", "--pretend=maybe"]).is_err());
    }
}

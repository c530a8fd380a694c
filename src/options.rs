// ============================================================================
// options.rs — Command-line arguments (CLI)
// ============================================================================

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the icon set (default when no subcommand is given)
    Generate(GenerateArgs),

    /// Remove previously generated icon files
    Clean {
        /// Output directory (default: extension/images)
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Icon size in pixels; repeat for several sizes (default: 16 32 48 128)
        #[arg(short, long = "size", value_name = "N")]
        sizes: Vec<u32>,

        /// Configuration file path (default: iconsmith.toml if present)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// List each removed file
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Output directory (default: extension/images)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Icon size in pixels; repeat for several sizes (default: 16 32 48 128)
    #[arg(short, long = "size", value_name = "N")]
    pub sizes: Vec<u32>,

    /// Configuration file path (default: iconsmith.toml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Render every size even if one fails, then report all failures
    #[arg(short, long)]
    pub keep_going: bool,

    /// Verbose output (scale factor and stroke width per icon)
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode: only errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl GenerateArgs {
    /// If both verbose and quiet are set, quiet takes precedence
    pub fn show_verbose_output(&self) -> bool {
        self.verbose && !self.quiet
    }
}

#[derive(Parser, Debug)]
#[command(name = "iconsmith", version)]
#[command(about = "iconsmith - Renders the browser-window icon set as PNG files", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct CliOptions {
    #[command(subcommand)]
    pub command: Option<Command>,

    // Running without a subcommand behaves like `generate` with these flags.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl CliOptions {
    /// The subcommand to run, with a bare invocation mapped to `generate`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Generate(self.generate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        CliOptions::try_parse_from(args).unwrap().into_command()
    }

    #[test]
    fn test_no_arguments_means_default_generate() {
        match parse(&["iconsmith"]) {
            Command::Generate(args) => {
                assert!(args.out_dir.is_none());
                assert!(args.sizes.is_empty());
                assert!(!args.keep_going);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_generate_flags() {
        match parse(&["iconsmith", "generate", "-o", "out", "-s", "16", "--size", "64", "-k", "-v"]) {
            Command::Generate(args) => {
                assert_eq!(args.out_dir, Some(PathBuf::from("out")));
                assert_eq!(args.sizes, vec![16, 64]);
                assert!(args.keep_going);
                assert!(args.show_verbose_output());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_top_level_flags_without_subcommand() {
        match parse(&["iconsmith", "--size", "24", "-q", "-v"]) {
            Command::Generate(args) => {
                assert_eq!(args.sizes, vec![24]);
                assert!(!args.show_verbose_output());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_clean_subcommand() {
        match parse(&["iconsmith", "clean", "--out-dir", "x", "-v"]) {
            Command::Clean { out_dir, sizes, verbose, .. } => {
                assert_eq!(out_dir, Some(PathBuf::from("x")));
                assert!(sizes.is_empty());
                assert!(verbose);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_top_level_flags_cannot_mix_with_subcommand() {
        assert!(CliOptions::try_parse_from(["iconsmith", "-o", "x", "clean"]).is_err());
        assert!(CliOptions::try_parse_from(["iconsmith", "-s", "16", "generate"]).is_err());
        // The same flags after the subcommand are fine.
        match parse(&["iconsmith", "clean", "-o", "x"]) {
            Command::Clean { out_dir, .. } => assert_eq!(out_dir, Some(PathBuf::from("x"))),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_size_rejected() {
        assert!(CliOptions::try_parse_from(["iconsmith", "-s", "big"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        CliOptions::command().debug_assert();
    }
}

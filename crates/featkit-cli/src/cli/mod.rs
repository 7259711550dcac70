//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "featkit",
    bin_name = "featkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Feature module scaffolding",
    long_about = "featkit generates a feature module (services, schema, types, \
                  hooks, store, forms) under src/features/<name>/ and never \
                  overwrites files that already exist.",
    after_help = "EXAMPLES:\n\
        \x20 featkit userProfile\n\
        \x20 featkit billing --dry-run\n\
        \x20 featkit orders -C ../web-app --atomic\n\
        \x20 featkit billing --output-format json",
)]
pub struct Cli {
    /// Logging and presentation flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to generate and where.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

// ── generation ────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Raw feature name, e.g. `userProfile` or `user-profile`.
    ///
    /// Optional at the parser level so a missing name is reported by featkit
    /// itself (with exit code 1) instead of by clap.
    #[arg(value_name = "NAME", help = "Feature name (letters, digits and '-')")]
    pub name: Option<String>,

    /// Workspace root. Defaults to the current directory.
    #[arg(
        short = 'C',
        long = "root",
        value_name = "DIR",
        help = "Workspace root (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Print what would be created without writing anything.
    #[arg(long = "dry-run", help = "Show what would be created, write nothing")]
    pub dry_run: bool,

    /// Remove everything this run created if any step fails.
    #[arg(long = "atomic", help = "Roll back this run's changes on failure")]
    pub atomic: bool,
}

/// Rendered usage line, for errors raised after parsing.
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_name_and_flags() {
        let cli = Cli::parse_from(["featkit", "userProfile", "--dry-run", "-C", "/tmp/app"]);
        assert_eq!(cli.generate.name.as_deref(), Some("userProfile"));
        assert!(cli.generate.dry_run);
        assert!(!cli.generate.atomic);
        assert_eq!(cli.generate.root, Some(PathBuf::from("/tmp/app")));
    }

    #[test]
    fn name_is_optional_for_the_parser() {
        let cli = Cli::parse_from(["featkit"]);
        assert!(cli.generate.name.is_none());
    }

    #[test]
    fn output_format_parses() {
        let cli = Cli::parse_from(["featkit", "billing", "--output-format", "json"]);
        assert_eq!(cli.global.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["featkit", "--quiet", "--verbose", "billing"]);
        assert!(result.is_err());
    }

    #[test]
    fn usage_mentions_name() {
        let usage = usage();
        assert!(usage.contains("featkit"));
        assert!(usage.contains("[NAME]"));
    }
}

//! Output management and formatting.
//!
//! Stdout carries the report only: one line per created entry and a
//! summary, or a single JSON document. Logs and errors go to stderr.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;

use featkit_core::application::{EntryKind, MaterializationResult, MaterializedEntry, Outcome};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = args.output_format.unwrap_or(config.output.format);
        let no_color = args.no_color || config.output.no_color;

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() && !no_color => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: no_color || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Print a materialization (or dry-run) report in the resolved format.
    ///
    /// Paths are shown relative to `root` when they live under it.
    pub fn report(&self, result: &MaterializationResult, root: &Path) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.resolved_format == OutputFormat::Json {
            let json = serde_json::to_string_pretty(result).map_err(io::Error::other)?;
            return self.term.write_line(&json);
        }

        for entry in &result.entries {
            if let Some(line) = self.entry_line(entry, root, result.dry_run) {
                self.term.write_line(&line)?;
            }
        }

        let feature_root = display_path(&result.feature_root, root);
        let counts = format!(
            "{} created, {} skipped",
            result.created_count(),
            result.skipped_count()
        );

        if result.dry_run {
            self.info(&format!(
                "Dry run for '{}' at {feature_root}: {counts}; nothing was written",
                result.feature
            ))
        } else if result.is_noop() {
            self.info(&format!(
                "Feature '{}' is up to date at {feature_root}: {counts}",
                result.feature
            ))
        } else {
            self.success(&format!(
                "Feature '{}' scaffolded at {feature_root}: {counts}",
                result.feature
            ))
        }
    }

    /// Created entries always get a line; skipped ones only in a dry run.
    fn entry_line(&self, entry: &MaterializedEntry, root: &Path, dry_run: bool) -> Option<String> {
        let verb = match (entry.outcome, dry_run) {
            (Outcome::Created, false) => "created",
            (Outcome::Created, true) => "would create",
            (Outcome::Skipped, true) => "exists",
            (Outcome::Skipped, false) => return None,
        };
        let kind = match entry.kind {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
        };
        let path = display_path(&entry.path, root);

        Some(if self.no_color {
            format!("{verb} {kind} {path}")
        } else if entry.outcome == Outcome::Created {
            format!("{} {kind} {}", verb.green(), path.bold())
        } else {
            format!("{} {kind} {}", verb.dimmed(), path.dimmed())
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use featkit_core::application::MaterializationCounts;

    fn make_manager(quiet: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color: true,
            config: None,
            output_format: Some(format),
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn entry(path: &str, kind: EntryKind, outcome: Outcome) -> MaterializedEntry {
        MaterializedEntry {
            path: PathBuf::from(path),
            kind,
            outcome,
            role: None,
        }
    }

    fn sample(dry_run: bool) -> MaterializationResult {
        MaterializationResult {
            feature: "billing".into(),
            feature_root: PathBuf::from("/work/src/features/billing"),
            dry_run,
            counts: MaterializationCounts {
                directories_created: 1,
                files_skipped: 1,
                ..Default::default()
            },
            entries: vec![
                entry("/work/src/features/billing", EntryKind::Directory, Outcome::Created),
                entry(
                    "/work/src/features/billing/index.ts",
                    EntryKind::File,
                    Outcome::Skipped,
                ),
            ],
        }
    }

    #[test]
    fn created_entries_are_listed_relative_to_root() {
        let out = make_manager(false, OutputFormat::Plain);
        let result = sample(false);
        let line = out
            .entry_line(&result.entries[0], Path::new("/work"), false)
            .unwrap();
        assert_eq!(line, "created directory src/features/billing");
    }

    #[test]
    fn skipped_entries_only_show_in_dry_run() {
        let out = make_manager(false, OutputFormat::Plain);
        let result = sample(false);
        assert!(out
            .entry_line(&result.entries[1], Path::new("/work"), false)
            .is_none());
        assert_eq!(
            out.entry_line(&result.entries[1], Path::new("/work"), true)
                .unwrap(),
            "exists file src/features/billing/index.ts"
        );
    }

    #[test]
    fn paths_outside_root_are_shown_whole() {
        assert_eq!(
            display_path(Path::new("/elsewhere/x"), Path::new("/work")),
            "/elsewhere/x"
        );
    }

    #[test]
    fn quiet_report_is_ok() {
        let out = make_manager(true, OutputFormat::Plain);
        assert!(out.report(&sample(false), Path::new("/work")).is_ok());
    }

    #[test]
    fn flag_format_beats_config() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            output_format: Some(OutputFormat::Json),
        };
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Plain;
        assert_eq!(OutputManager::new(&args, &config).format(), OutputFormat::Json);
    }

    #[test]
    fn config_format_applies_without_flag() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: None,
        };
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;
        assert_eq!(OutputManager::new(&args, &config).format(), OutputFormat::Json);
    }

    #[test]
    fn plain_format_disables_color() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: Some(OutputFormat::Plain),
        };
        let out = OutputManager::new(&args, &AppConfig::default());
        let line = out
            .entry_line(&sample(false).entries[0], Path::new("/work"), false)
            .unwrap();
        assert!(!line.contains('\u{1b}'));
    }
}

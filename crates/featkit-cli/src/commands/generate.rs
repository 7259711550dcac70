//! Implementation of `featkit <NAME>`.
//!
//! Responsibility: resolve the workspace, call the core scaffold service,
//! and display the report. Name rules and the generated layout live in
//! `featkit-core`.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use featkit_adapters::LocalFilesystem;
use featkit_core::application::{MaterializeMode, ScaffoldService, Workspace};

use crate::{
    cli::{self, GenerateArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the generation.
///
/// 1. Require a name (usage error otherwise, before any filesystem access)
/// 2. Resolve and check the workspace root
/// 3. Preview (`--dry-run`) or materialize through `ScaffoldService`
/// 4. Print the report
#[instrument(skip_all, fields(feature = args.name.as_deref().unwrap_or("")))]
pub fn execute(args: GenerateArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let name = args.name.ok_or_else(|| CliError::MissingArgument {
        usage: cli::usage(),
    })?;

    let root = resolve_root(args.root)?;
    let mode = resolve_mode(args.atomic, config);
    debug!(root = %root.display(), ?mode, dry_run = args.dry_run, format = ?output.format(), "Workspace resolved");

    let workspace = Workspace::new(root.clone(), Box::new(LocalFilesystem::new()));
    let service = ScaffoldService::new(workspace).with_mode(mode);

    let result = if args.dry_run {
        service.preview(&name)?
    } else {
        service.scaffold(&name)?
    };

    info!(
        feature = %result.feature,
        created = result.created_count(),
        skipped = result.skipped_count(),
        dry_run = result.dry_run,
        "Generation finished"
    );

    output.report(&result, &root)?;
    Ok(())
}

/// `--root` if given, else the current directory. Must be a directory.
fn resolve_root(flag: Option<PathBuf>) -> CliResult<PathBuf> {
    let root = match flag {
        Some(path) => path,
        None => std::env::current_dir().with_cli_context(|| "Cannot read current directory")?,
    };
    check_root(&root)?;
    Ok(root)
}

fn check_root(root: &Path) -> CliResult<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(CliError::WorkspaceNotFound {
            path: root.to_path_buf(),
        })
    }
}

/// `--atomic` or `materialize.atomic` selects rollback on failure.
fn resolve_mode(flag: bool, config: &AppConfig) -> MaterializeMode {
    if flag || config.materialize.atomic {
        MaterializeMode::Atomic
    } else {
        MaterializeMode::BestEffort
    }
}

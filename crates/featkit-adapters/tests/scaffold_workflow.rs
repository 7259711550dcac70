//! End-to-end scaffolding through the real adapters.

use std::path::{Path, PathBuf};

use featkit_adapters::{LocalFilesystem, MemoryFilesystem};
use featkit_core::domain::FEATURE_SUBDIRECTORIES;
use featkit_core::error::ErrorCategory;
use featkit_core::prelude::*;

const ROOT: &str = "/work";

fn memory_service(fs: &MemoryFilesystem) -> ScaffoldService {
    ScaffoldService::new(Workspace::new(ROOT, Box::new(fs.clone())))
}

fn feature_path(kebab: &str, rel: &str) -> PathBuf {
    Path::new(ROOT).join("src/features").join(kebab).join(rel)
}

#[test]
fn user_profile_generates_full_tree() {
    let fs = MemoryFilesystem::new().with_directory(ROOT);
    let report = memory_service(&fs).scaffold("userProfile").unwrap();

    assert_eq!(report.feature, "user-profile");
    assert_eq!(report.counts.directories_created, 14);
    assert_eq!(report.counts.files_created, 9);

    for sub in FEATURE_SUBDIRECTORIES {
        assert!(
            fs.is_dir(&feature_path("user-profile", sub)),
            "missing {sub}"
        );
    }

    let service = fs
        .read_file(&feature_path("user-profile", "services/user-profile.service.ts"))
        .unwrap();
    for accessor in [
        "getUserProfile",
        "createUserProfile",
        "updateUserProfile",
        "deleteUserProfile",
    ] {
        assert!(service.contains(accessor), "service lacks {accessor}");
    }

    assert!(fs.exists(&feature_path("user-profile", "hooks/use-user-profile.ts")));
    assert!(fs.exists(&feature_path("user-profile", "forms/action-form.tsx")));
    assert!(fs.exists(Path::new("/work/src/components/ui/FormInput.tsx")));
}

#[test]
fn second_run_creates_nothing() {
    let fs = MemoryFilesystem::new().with_directory(ROOT);
    let service = memory_service(&fs);

    service.scaffold("billing").unwrap();
    let before = fs.list_files();

    let second = service.scaffold("billing").unwrap();
    assert!(second.is_noop());
    assert_eq!(second.created().count(), 0);
    assert_eq!(second.skipped_count(), 23);
    assert_eq!(fs.list_files(), before);
}

#[test]
fn manual_edits_survive_rerun() {
    let fs = MemoryFilesystem::new().with_directory(ROOT);
    let service = memory_service(&fs);
    service.scaffold("billing").unwrap();

    let edited = feature_path("billing", "types/billing.types.ts");
    assert!(fs.edit_file(&edited, "// hand written"));

    service.scaffold("billing").unwrap();
    assert_eq!(fs.read_file(&edited).as_deref(), Some("// hand written"));
}

#[test]
fn shared_component_is_kept_across_features() {
    let fs = MemoryFilesystem::new()
        .with_directory(ROOT)
        .with_file("/work/src/components/ui/FormInput.tsx", "custom input");
    let report = memory_service(&fs).scaffold("orders").unwrap();

    assert_eq!(report.counts.files_created, 8);
    assert_eq!(report.counts.files_skipped, 1);
    assert_eq!(
        fs.read_file(Path::new("/work/src/components/ui/FormInput.tsx"))
            .as_deref(),
        Some("custom input")
    );
}

#[test]
fn only_missing_entries_are_filled_in() {
    let fs = MemoryFilesystem::new()
        .with_directory(ROOT)
        .with_file(feature_path("billing", "schema/billing.schema.ts"), "keep");
    let report = memory_service(&fs).scaffold("billing").unwrap();

    assert_eq!(report.counts.files_created, 8);
    assert_eq!(report.counts.files_skipped, 1);
    assert_eq!(
        fs.read_file(&feature_path("billing", "schema/billing.schema.ts"))
            .as_deref(),
        Some("keep")
    );
}

#[test]
fn best_effort_leaves_partial_tree() {
    let fs = MemoryFilesystem::new().with_directory(ROOT);
    fs.fail_on(feature_path("billing", "store/billing.store.ts"), "Permission denied");

    let err = memory_service(&fs).scaffold("billing").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Filesystem);
    assert!(fs.exists(&feature_path("billing", "index.ts")));
    assert!(!fs.exists(&feature_path("billing", "forms/action-form.tsx")));
}

#[test]
fn atomic_failure_restores_workspace() {
    let fs = MemoryFilesystem::new()
        .with_directory(ROOT)
        .with_file("/work/package.json", "{}");
    fs.fail_on(feature_path("billing", "store/billing.store.ts"), "Permission denied");
    let dirs_before = fs.list_directories();
    let files_before = fs.list_files();

    let err = memory_service(&fs)
        .with_mode(MaterializeMode::Atomic)
        .scaffold("billing")
        .unwrap_err();

    assert!(err.to_string().contains("Permission denied"));
    assert_eq!(fs.list_directories(), dirs_before);
    assert_eq!(fs.list_files(), files_before);
}

/// Creates the file and then fails, the way a write into a full disk does.
struct FullDisk {
    inner: MemoryFilesystem,
    full_at: PathBuf,
}

impl Filesystem for FullDisk {
    fn create_dir_all(&self, path: &Path) -> FeatkitResult<()> {
        self.inner.create_dir_all(path)
    }

    fn write_new_file(&self, path: &Path, content: &str) -> FeatkitResult<()> {
        if path != self.full_at {
            return self.inner.write_new_file(path, content);
        }
        self.inner.write_new_file(path, "")?;
        Err(ApplicationError::Materialization {
            path: path.to_path_buf(),
            operation: "write file",
            reason: "No space left on device".into(),
        }
        .into())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn remove_file(&self, path: &Path) -> FeatkitResult<()> {
        self.inner.remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> FeatkitResult<()> {
        self.inner.remove_dir(path)
    }
}

#[test]
fn atomic_failure_removes_partially_written_file() {
    let fs = MemoryFilesystem::new().with_directory(ROOT);
    let dirs_before = fs.list_directories();
    let disk = FullDisk {
        inner: fs.clone(),
        full_at: feature_path("billing", "services/billing.service.ts"),
    };

    let err = ScaffoldService::new(Workspace::new(ROOT, Box::new(disk)))
        .with_mode(MaterializeMode::Atomic)
        .scaffold("billing")
        .unwrap_err();

    assert!(err.to_string().contains("No space left on device"));
    assert!(!err.to_string().contains("Rollback failed"));
    assert!(fs.list_files().is_empty());
    assert_eq!(fs.list_directories(), dirs_before);
}

#[test]
fn atomic_rollback_spares_preexisting_entries() {
    let fs = MemoryFilesystem::new()
        .with_directory(ROOT)
        .with_file(feature_path("billing", "index.ts"), "existing");
    fs.fail_on(feature_path("billing", "hooks/use-billing.ts"), "Disk full");

    memory_service(&fs)
        .with_mode(MaterializeMode::Atomic)
        .scaffold("billing")
        .unwrap_err();

    assert_eq!(
        fs.read_file(&feature_path("billing", "index.ts")).as_deref(),
        Some("existing")
    );
    assert!(!fs.exists(&feature_path("billing", "services")));
}

#[test]
fn invalid_name_leaves_filesystem_untouched() {
    let fs = MemoryFilesystem::new().with_directory(ROOT);
    let err = memory_service(&fs).scaffold("9lives").unwrap_err();

    assert!(err.is_invalid_name());
    assert_eq!(fs.list_directories().len(), 2);
    assert!(fs.list_files().is_empty());
}

#[test]
fn preview_writes_nothing() {
    let fs = MemoryFilesystem::new().with_directory(ROOT);
    let report = memory_service(&fs).preview("billing").unwrap();

    assert!(report.dry_run);
    assert_eq!(report.created_count(), 23);
    assert!(fs.list_files().is_empty());
    assert!(!fs.exists(Path::new("/work/src")));
}

#[test]
fn local_filesystem_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let service = ScaffoldService::new(Workspace::new(dir.path(), Box::new(LocalFilesystem::new())));

    let first = service.scaffold("userProfile").unwrap();
    assert_eq!(first.created_count(), 23);

    let feature_root = dir.path().join("src/features/user-profile");
    assert!(feature_root.join("components/details").is_dir());
    let store = std::fs::read_to_string(feature_root.join("store/user-profile.store.ts")).unwrap();
    assert!(store.contains("UserProfile"));

    let types = feature_root.join("types/user-profile.types.ts");
    std::fs::write(&types, "// edited").unwrap();

    let second = service.scaffold("userProfile").unwrap();
    assert!(second.is_noop());
    assert_eq!(std::fs::read_to_string(&types).unwrap(), "// edited");
}

#[test]
fn local_file_in_directory_slot_is_a_collision() {
    let dir = tempfile::tempdir().unwrap();
    let features = dir.path().join("src/features");
    std::fs::create_dir_all(&features).unwrap();
    std::fs::write(features.join("billing"), "oops").unwrap();

    let service = ScaffoldService::new(Workspace::new(dir.path(), Box::new(LocalFilesystem::new())));
    let err = service.scaffold("billing").unwrap_err();

    assert!(matches!(
        err,
        FeatkitError::Application(ApplicationError::PathCollision {
            expected: EntryKind::Directory,
            ..
        })
    ));
}

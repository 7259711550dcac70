//! Scaffold plans: the ordered directories and files a feature consists of.
//!
//! A [`ScaffoldPlan`] is pure data built by [`DirectoryPlanner::plan`]. It
//! knows nothing about what already exists on disk; deciding what to create
//! and what to skip is the materializer's job.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::{
    error::DomainError,
    identifier::FeatureIdentifier,
    templates::{FileRole, RenderFn, TemplateRegistry},
};

/// Parent of every feature tree, relative to the workspace root.
pub const FEATURES_DIR: &str = "src/features";

/// Shared UI components, relative to the workspace root.
pub const SHARED_UI_DIR: &str = "src/components/ui";

/// Fixed subdirectories of every feature, in creation order.
pub const FEATURE_SUBDIRECTORIES: [&str; 12] = [
    "components",
    "components/details",
    "components/list",
    "components/mutate",
    "forms",
    "schema",
    "types",
    "utils",
    "pages",
    "hooks",
    "store",
    "services",
];

/// Which tree a plan entry's relative path hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// `<root>/src/features/<kebab>`
    Feature,
    /// `<root>/src/components/ui`
    SharedUi,
}

/// A directory that must exist after materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySpec {
    pub anchor: Anchor,
    /// Relative to the anchor; empty for the anchor itself.
    pub relative_path: PathBuf,
}

/// A file that must exist after materialization.
#[derive(Clone)]
pub struct FileSpec {
    pub anchor: Anchor,
    /// Relative to the anchor.
    pub relative_path: PathBuf,
    pub role: FileRole,
    render: RenderFn,
}

impl FileSpec {
    fn new(anchor: Anchor, relative_path: impl Into<PathBuf>, role: FileRole) -> Self {
        Self {
            anchor,
            relative_path: relative_path.into(),
            role,
            render: TemplateRegistry::renderer(role),
        }
    }

    /// Produce the file body for `identifier`.
    pub fn render(&self, identifier: &FeatureIdentifier) -> String {
        (self.render)(identifier)
    }
}

impl fmt::Debug for FileSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSpec")
            .field("anchor", &self.anchor)
            .field("relative_path", &self.relative_path)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// The ordered set of directories and files for one feature.
///
/// Built fresh for every invocation and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    root: PathBuf,
    identifier: FeatureIdentifier,
    directories: Vec<DirectorySpec>,
    files: Vec<FileSpec>,
}

impl ScaffoldPlan {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn identifier(&self) -> &FeatureIdentifier {
        &self.identifier
    }

    pub fn directories(&self) -> &[DirectorySpec] {
        &self.directories
    }

    pub fn files(&self) -> &[FileSpec] {
        &self.files
    }

    /// `<root>/src/features/<kebab>`
    pub fn feature_root(&self) -> PathBuf {
        self.anchor_path(Anchor::Feature)
    }

    /// `<root>/src/components/ui`
    pub fn shared_ui_root(&self) -> PathBuf {
        self.anchor_path(Anchor::SharedUi)
    }

    /// Absolute location of a directory entry.
    pub fn directory_path(&self, dir: &DirectorySpec) -> PathBuf {
        join_relative(self.anchor_path(dir.anchor), &dir.relative_path)
    }

    /// Absolute location of a file entry.
    pub fn file_path(&self, file: &FileSpec) -> PathBuf {
        join_relative(self.anchor_path(file.anchor), &file.relative_path)
    }

    fn anchor_path(&self, anchor: Anchor) -> PathBuf {
        match anchor {
            Anchor::Feature => self.root.join(FEATURES_DIR).join(self.identifier.kebab()),
            Anchor::SharedUi => self.root.join(SHARED_UI_DIR),
        }
    }

    /// Check the structural invariants every plan must hold.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();

        let relatives = self
            .directories
            .iter()
            .map(|d| (d.anchor, &d.relative_path))
            .chain(self.files.iter().map(|f| (f.anchor, &f.relative_path)));

        for (anchor, relative) in relatives {
            if relative.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: relative.display().to_string(),
                });
            }
            if !seen.insert((anchor, relative.clone())) {
                return Err(DomainError::DuplicatePath {
                    path: relative.display().to_string(),
                });
            }
        }

        Ok(())
    }
}

fn join_relative(base: PathBuf, relative: &Path) -> PathBuf {
    if relative.as_os_str().is_empty() {
        base
    } else {
        base.join(relative)
    }
}

/// Builds the plan for a feature. Pure: the same root and identifier always
/// produce the same plan.
pub struct DirectoryPlanner;

impl DirectoryPlanner {
    #[instrument(level = "debug", skip_all, fields(root = %root.as_ref().display(), feature = %identifier))]
    pub fn plan(
        root: impl AsRef<Path>,
        identifier: &FeatureIdentifier,
    ) -> Result<ScaffoldPlan, DomainError> {
        let mut directories = Vec::with_capacity(FEATURE_SUBDIRECTORIES.len() + 2);
        directories.push(DirectorySpec {
            anchor: Anchor::Feature,
            relative_path: PathBuf::new(),
        });
        directories.extend(FEATURE_SUBDIRECTORIES.iter().map(|sub| DirectorySpec {
            anchor: Anchor::Feature,
            relative_path: PathBuf::from(sub),
        }));
        directories.push(DirectorySpec {
            anchor: Anchor::SharedUi,
            relative_path: PathBuf::new(),
        });

        let files = FileRole::ALL
            .into_iter()
            .map(|role| {
                let (anchor, path) = file_location(role, identifier);
                FileSpec::new(anchor, path, role)
            })
            .collect();

        let plan = ScaffoldPlan {
            root: root.as_ref().to_path_buf(),
            identifier: identifier.clone(),
            directories,
            files,
        };
        plan.validate()?;

        debug!(
            directories = plan.directories.len(),
            files = plan.files.len(),
            "scaffold plan built"
        );
        Ok(plan)
    }
}

/// Where each role's file lives. Shared roles hang off the UI directory.
fn file_location(role: FileRole, id: &FeatureIdentifier) -> (Anchor, PathBuf) {
    let kebab = id.kebab();
    let anchor = if role.is_shared() {
        Anchor::SharedUi
    } else {
        Anchor::Feature
    };

    let relative = match role {
        FileRole::Index => String::from("index.ts"),
        FileRole::Service => format!("services/{kebab}.service.ts"),
        FileRole::Schema => format!("schema/{kebab}.schema.ts"),
        FileRole::Types => format!("types/{kebab}.types.ts"),
        FileRole::Utils => format!("utils/{kebab}.utils.ts"),
        FileRole::Hook => format!("hooks/use-{kebab}.ts"),
        FileRole::Store => format!("store/{kebab}.store.ts"),
        FileRole::ActionForm => "forms/action-form.tsx".into(),
        FileRole::SharedInput => "FormInput.tsx".into(),
    };

    (anchor, PathBuf::from(relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identifier::NameNormalizer;

    fn plan_for(raw: &str) -> ScaffoldPlan {
        let id = NameNormalizer::normalize(raw).unwrap();
        DirectoryPlanner::plan("/work", &id).unwrap()
    }

    #[test]
    fn plan_has_fixed_shape() {
        for raw in ["a", "billing", "userProfile", "a-very-long-feature-name-with-many-parts"] {
            let plan = plan_for(raw);
            assert_eq!(plan.directories().len(), 14, "input {raw:?}");
            assert_eq!(plan.files().len(), 9, "input {raw:?}");

            let subdirs = plan
                .directories()
                .iter()
                .filter(|d| d.anchor == Anchor::Feature && !d.relative_path.as_os_str().is_empty())
                .count();
            assert_eq!(subdirs, 12);
        }
    }

    #[test]
    fn every_role_appears_exactly_once() {
        let plan = plan_for("billing");
        let roles: Vec<_> = plan.files().iter().map(|f| f.role).collect();
        assert_eq!(roles, FileRole::ALL);
    }

    #[test]
    fn directory_set_only_varies_by_feature_segment() {
        let a = plan_for("billing");
        let b = plan_for("userProfile");
        assert_eq!(a.directories(), b.directories());
    }

    #[test]
    fn feature_paths_use_kebab() {
        let plan = plan_for("userProfile");
        assert_eq!(
            plan.feature_root(),
            PathBuf::from("/work/src/features/user-profile")
        );

        let service = plan
            .files()
            .iter()
            .find(|f| f.role == FileRole::Service)
            .unwrap();
        assert_eq!(
            plan.file_path(service),
            PathBuf::from("/work/src/features/user-profile/services/user-profile.service.ts")
        );
    }

    #[test]
    fn shared_input_lives_outside_feature_tree() {
        let plan = plan_for("billing");
        let shared = plan
            .files()
            .iter()
            .find(|f| f.role == FileRole::SharedInput)
            .unwrap();
        let path = plan.file_path(shared);
        assert_eq!(path, PathBuf::from("/work/src/components/ui/FormInput.tsx"));
        assert!(!path.starts_with(plan.feature_root()));
    }

    #[test]
    fn only_shared_roles_use_the_shared_anchor() {
        for file in plan_for("billing").files() {
            let expected = if file.role.is_shared() {
                Anchor::SharedUi
            } else {
                Anchor::Feature
            };
            assert_eq!(file.anchor, expected, "role {}", file.role);
        }
    }

    #[test]
    fn directories_come_in_stable_order() {
        let plan = plan_for("billing");
        let paths: Vec<_> = plan
            .directories()
            .iter()
            .map(|d| plan.directory_path(d))
            .collect();

        assert_eq!(paths.first(), Some(&PathBuf::from("/work/src/features/billing")));
        assert_eq!(paths.last(), Some(&PathBuf::from("/work/src/components/ui")));
        assert_eq!(
            paths[1..4],
            [
                PathBuf::from("/work/src/features/billing/components"),
                PathBuf::from("/work/src/features/billing/components/details"),
                PathBuf::from("/work/src/features/billing/components/list"),
            ]
        );
    }

    #[test]
    fn every_file_parent_is_planned_before_files() {
        let plan = plan_for("orderItem");
        let dirs: HashSet<_> = plan
            .directories()
            .iter()
            .map(|d| plan.directory_path(d))
            .collect();

        for file in plan.files() {
            let path = plan.file_path(file);
            let parent = path.parent().unwrap().to_path_buf();
            assert!(dirs.contains(&parent), "{} has no planned parent", path.display());
        }
    }

    #[test]
    fn all_paths_stay_inside_the_two_subtrees() {
        let plan = plan_for("billing");
        let feature_root = plan.feature_root();
        let shared_root = plan.shared_ui_root();

        let all = plan
            .directories()
            .iter()
            .map(|d| plan.directory_path(d))
            .chain(plan.files().iter().map(|f| plan.file_path(f)));

        for path in all {
            assert!(path.starts_with(&feature_root) || path.starts_with(&shared_root));
        }
    }

    #[test]
    fn file_spec_renders_its_role() {
        let id = NameNormalizer::normalize("billing").unwrap();
        let plan = DirectoryPlanner::plan("/work", &id).unwrap();
        for file in plan.files() {
            assert_eq!(file.render(&id), TemplateRegistry::render(file.role, &id));
        }
    }

    #[test]
    fn planning_is_deterministic() {
        let a = plan_for("userProfile");
        let b = plan_for("user-profile");
        let paths = |p: &ScaffoldPlan| -> Vec<PathBuf> {
            p.files().iter().map(|f| p.file_path(f)).collect()
        };
        assert_eq!(paths(&a), paths(&b));
        assert_eq!(a.directories(), b.directories());
    }
}

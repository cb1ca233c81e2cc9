//! Resolved output locations for an OpenCode bundle
//!
//! The output root's final path segment selects the layout mode: a root
//! already named `.opencode` is used as the hidden directory itself, any
//! other root gets a `.opencode/` subdirectory for the resource trees.
//! The config file sits directly under the output root in both modes.

use std::path::{Path, PathBuf};

/// Directory name that marks a hidden-root output layout
pub const OPENCODE_DIR: &str = ".opencode";

/// File name of the bundle configuration file
pub const CONFIG_FILE: &str = "opencode.json";

/// Resolved target paths for one bundle write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub agents_dir: PathBuf,
    pub plugins_dir: PathBuf,
    pub skills_dir: PathBuf,
}

impl BundleLayout {
    /// Resolve the concrete target paths for an output root.
    ///
    /// Pure path computation; nothing is checked against the filesystem.
    /// Invalid paths surface later as I/O errors from the writer.
    pub fn resolve(output_root: &Path) -> Self {
        let root = output_root.to_path_buf();

        let resource_root = if is_opencode_root(output_root) {
            root.clone()
        } else {
            root.join(OPENCODE_DIR)
        };

        BundleLayout {
            config_path: root.join(CONFIG_FILE),
            agents_dir: resource_root.join("agents"),
            plugins_dir: resource_root.join("plugins"),
            skills_dir: resource_root.join("skills"),
            root,
        }
    }
}

fn is_opencode_root(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == OPENCODE_DIR)
}

//! Materialize a bundle descriptor onto disk
//!
//! Emits the config file, agent files, plugin files and skill directory
//! copies under the layout resolved from the output root. Target
//! directories are created on demand by the individual writes; nothing is
//! created for a resource list that is empty.

use std::path::Path;

use crate::bundle::OpenCodeBundle;
use crate::common::fs;
use crate::error::Result;
use crate::layout::BundleLayout;

/// Write a bundle under the output root.
///
/// Re-running with the same bundle overwrites the prior output file by
/// file. There is no rollback: a failed write leaves earlier files on
/// disk, and the error propagates to the caller unchanged.
pub fn write_bundle(output_root: &Path, bundle: &OpenCodeBundle) -> Result<()> {
    let layout = BundleLayout::resolve(output_root);

    fs::ensure_dir(&layout.root)?;

    fs::write_text(&layout.config_path, &config_json(&bundle.config)?)?;

    for agent in &bundle.agents {
        let target = layout.agents_dir.join(format!("{}.md", agent.name));
        fs::write_text(&target, &format!("{}\n", agent.content))?;
    }

    // Plugin names carry their own extension; used verbatim
    for plugin in &bundle.plugins {
        let target = layout.plugins_dir.join(&plugin.name);
        fs::write_text(&target, &format!("{}\n", plugin.content))?;
    }

    for skill in &bundle.skills {
        let target = layout.skills_dir.join(&skill.name);
        fs::copy_dir_recursive(&skill.source_dir, &target)?;
    }

    Ok(())
}

fn config_json(config: &serde_json::Value) -> Result<String> {
    let json = serde_json::to_string_pretty(config)?;
    Ok(format!("{json}\n"))
}

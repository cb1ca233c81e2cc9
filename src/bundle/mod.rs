//! Bundle domain types
//!
//! Contains the in-memory descriptor of everything written for one output
//! generation pass: config, agents, plugins and skills.

use std::path::PathBuf;

pub mod frontmatter;
pub mod loader;

pub use loader::load_bundle;

/// A named block of prompt text destined for a `.md` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentFile {
    pub name: String,
    pub content: String,
}

/// A named text artifact written verbatim under the plugins directory.
/// The name is used as the full file name, extension included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginFile {
    pub name: String,
    pub content: String,
}

/// A named source directory to be copied recursively into the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDir {
    pub name: String,
    pub source_dir: PathBuf,
}

/// Everything to be written for one output generation pass.
///
/// Constructed by the caller, consumed once. Name uniqueness within the
/// agent and plugin lists is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct OpenCodeBundle {
    pub config: serde_json::Value,
    pub agents: Vec<AgentFile>,
    pub plugins: Vec<PluginFile>,
    pub skills: Vec<SkillDir>,
}

impl OpenCodeBundle {
    /// Format resource counts for display, e.g. "3 agents, 1 plugin, 2 skills"
    pub fn format_counts(&self) -> Option<String> {
        let parts = [
            ("agent", self.agents.len()),
            ("plugin", self.plugins.len()),
            ("skill", self.skills.len()),
        ];

        let non_zero: Vec<String> = parts
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(name, count)| match *count {
                1 => format!("1 {name}"),
                _ => format!("{count} {name}s"),
            })
            .collect();

        if non_zero.is_empty() {
            None
        } else {
            Some(non_zero.join(", "))
        }
    }
}

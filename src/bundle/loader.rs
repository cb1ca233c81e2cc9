//! Build a bundle descriptor from a source directory
//!
//! A bundle source is a plain directory tree:
//! - `opencode.json`: configuration, copied into the output verbatim
//! - `agents/*.md`: agent prompt files
//! - `plugins/*`: plugin files, written under their own file names
//! - `skills/*/`: skill directories, copied recursively
//!
//! Missing resource directories yield empty lists; only a missing source
//! directory itself is an error.

use std::path::Path;

use crate::bundle::{AgentFile, OpenCodeBundle, PluginFile, SkillDir};
use crate::error::{Result, bundle_source_not_found, config_parse_failed, file_read_failed};
use crate::layout::CONFIG_FILE;

/// Load a bundle descriptor from a source directory.
///
/// Entries within each resource list are ordered by file name so repeated
/// runs produce the bundle in a stable order.
pub fn load_bundle(source_dir: &Path) -> Result<OpenCodeBundle> {
    if !source_dir.is_dir() {
        return Err(bundle_source_not_found(source_dir.display().to_string()));
    }

    Ok(OpenCodeBundle {
        config: load_config(source_dir)?,
        agents: load_agents(&source_dir.join("agents"))?,
        plugins: load_plugins(&source_dir.join("plugins"))?,
        skills: load_skills(&source_dir.join("skills"))?,
    })
}

fn load_config(source_dir: &Path) -> Result<serde_json::Value> {
    let config_path = source_dir.join(CONFIG_FILE);
    if !config_path.is_file() {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }

    let content = read_file(&config_path)?;
    serde_json::from_str(&content)
        .map_err(|e| config_parse_failed(config_path.display().to_string(), e.to_string()))
}

fn load_agents(agents_dir: &Path) -> Result<Vec<AgentFile>> {
    let mut agents = Vec::new();
    for path in files_in_dir(agents_dir)? {
        let is_markdown = path.extension().is_some_and(|ext| ext == "md");
        let stem = path.file_stem().and_then(|s| s.to_str());
        if let (true, Some(name)) = (is_markdown, stem) {
            agents.push(AgentFile {
                name: name.to_string(),
                content: strip_trailing_newline(read_file(&path)?),
            });
        }
    }
    Ok(agents)
}

fn load_plugins(plugins_dir: &Path) -> Result<Vec<PluginFile>> {
    let mut plugins = Vec::new();
    for path in files_in_dir(plugins_dir)? {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            plugins.push(PluginFile {
                name: name.to_string(),
                content: strip_trailing_newline(read_file(&path)?),
            });
        }
    }
    Ok(plugins)
}

fn load_skills(skills_dir: &Path) -> Result<Vec<SkillDir>> {
    if !skills_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut skills = Vec::new();
    for entry in sorted_entries(skills_dir)? {
        if entry.is_dir() {
            if let Some(name) = entry.file_name().and_then(|n| n.to_str()) {
                skills.push(SkillDir {
                    name: name.to_string(),
                    source_dir: entry,
                });
            }
        }
    }
    Ok(skills)
}

/// List plain files directly under a directory, sorted by name.
/// A missing directory yields an empty list.
fn files_in_dir(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|p| p.is_file())
        .collect())
}

fn sorted_entries(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    let mut entries: Vec<std::path::PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| file_read_failed(dir.display().to_string(), e.to_string()))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .collect();
    entries.sort();
    Ok(entries)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))
}

/// The writer appends exactly one trailing newline per file, so a single
/// trailing newline in the source is folded away here to round-trip.
fn strip_trailing_newline(content: String) -> String {
    match content.strip_suffix('\n') {
        Some(stripped) => stripped.to_string(),
        None => content,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_bundle_full_source() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "opencode.json", r#"{"version":1}"#);
        write(temp.path(), "agents/lint.md", "do lint\n");
        write(temp.path(), "agents/review.md", "do review");
        write(temp.path(), "plugins/formatter.ts", "export {}\n");
        write(temp.path(), "skills/deploy/SKILL.md", "deploy steps\n");

        let bundle = load_bundle(temp.path()).unwrap();

        assert_eq!(bundle.config, serde_json::json!({"version": 1}));
        assert_eq!(bundle.agents.len(), 2);
        assert_eq!(bundle.agents[0].name, "lint");
        assert_eq!(bundle.agents[0].content, "do lint");
        assert_eq!(bundle.agents[1].name, "review");
        assert_eq!(bundle.agents[1].content, "do review");
        assert_eq!(bundle.plugins.len(), 1);
        assert_eq!(bundle.plugins[0].name, "formatter.ts");
        assert_eq!(bundle.skills.len(), 1);
        assert_eq!(bundle.skills[0].name, "deploy");
        assert_eq!(bundle.skills[0].source_dir, temp.path().join("skills/deploy"));
    }

    #[test]
    fn test_load_bundle_missing_source() {
        let temp = TempDir::new().unwrap();
        let result = load_bundle(&temp.path().join("missing"));
        assert!(matches!(
            result.unwrap_err(),
            crate::error::OcpackError::BundleSourceNotFound { .. }
        ));
    }

    #[test]
    fn test_load_bundle_empty_source() {
        let temp = TempDir::new().unwrap();
        let bundle = load_bundle(temp.path()).unwrap();

        assert_eq!(bundle.config, serde_json::json!({}));
        assert!(bundle.agents.is_empty());
        assert!(bundle.plugins.is_empty());
        assert!(bundle.skills.is_empty());
    }

    #[test]
    fn test_load_bundle_invalid_config() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "opencode.json", "{not json");

        let result = load_bundle(temp.path());
        assert!(matches!(
            result.unwrap_err(),
            crate::error::OcpackError::ConfigParseFailed { .. }
        ));
    }

    #[test]
    fn test_load_agents_skips_non_markdown() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "agents/lint.md", "do lint");
        write(temp.path(), "agents/notes.txt", "not an agent");

        let bundle = load_bundle(temp.path()).unwrap();
        assert_eq!(bundle.agents.len(), 1);
        assert_eq!(bundle.agents[0].name, "lint");
    }

    #[test]
    fn test_load_skills_skips_plain_files() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "skills/README.md", "not a skill");
        write(temp.path(), "skills/deploy/SKILL.md", "deploy");

        let bundle = load_bundle(temp.path()).unwrap();
        assert_eq!(bundle.skills.len(), 1);
        assert_eq!(bundle.skills[0].name, "deploy");
    }

    #[test]
    fn test_strip_trailing_newline_only_one() {
        assert_eq!(strip_trailing_newline("a\n\n".to_string()), "a\n");
        assert_eq!(strip_trailing_newline("a\n".to_string()), "a");
        assert_eq!(strip_trailing_newline("a".to_string()), "a");
    }
}

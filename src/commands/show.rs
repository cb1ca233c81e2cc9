//! Show command implementation
//!
//! Displays what a bundle source contains without writing anything:
//! resource counts plus per-resource descriptions read from YAML
//! frontmatter when present.

use std::path::PathBuf;

use console::Style;

use crate::bundle::{frontmatter, load_bundle};
use crate::cli::ShowArgs;
use crate::error::Result;

/// Run the show command
pub fn run(args: ShowArgs) -> Result<()> {
    let source = args.source.unwrap_or_else(|| PathBuf::from("."));
    let bundle = load_bundle(&source)?;

    println!(
        "{} {}",
        Style::new().bold().apply_to("Bundle source:"),
        source.display()
    );

    match bundle.format_counts() {
        Some(counts) => println!("{} {}", Style::new().bold().apply_to("Resources:"), counts),
        None => {
            println!("No resources found.");
            return Ok(());
        }
    }

    if !bundle.agents.is_empty() {
        println!("{}", Style::new().bold().apply_to("Agents:"));
        for agent in &bundle.agents {
            print_entry(&agent.name, frontmatter::description_of(&agent.content));
        }
    }

    if !bundle.plugins.is_empty() {
        println!("{}", Style::new().bold().apply_to("Plugins:"));
        for plugin in &bundle.plugins {
            print_entry(&plugin.name, None);
        }
    }

    if !bundle.skills.is_empty() {
        println!("{}", Style::new().bold().apply_to("Skills:"));
        for skill in &bundle.skills {
            print_entry(&skill.name, skill_description(skill));
        }
    }

    Ok(())
}

fn print_entry(name: &str, description: Option<String>) {
    match description {
        Some(description) => println!(
            "  {} - {}",
            Style::new().yellow().apply_to(name),
            description
        ),
        None => println!("  {}", Style::new().yellow().apply_to(name)),
    }
}

fn skill_description(skill: &crate::bundle::SkillDir) -> Option<String> {
    let skill_md = skill.source_dir.join("SKILL.md");
    let content = std::fs::read_to_string(skill_md).ok()?;
    frontmatter::description_of(&content)
}

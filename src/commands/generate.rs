//! Generate command implementation
//!
//! The generation process:
//! 1. Load the bundle descriptor from the source directory
//! 2. Resolve the output layout from the output root
//! 3. Write config, agents, plugins and skill copies (or print targets
//!    with --dry-run)

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use crate::bundle::{OpenCodeBundle, load_bundle};
use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::layout::BundleLayout;
use crate::writer::write_bundle;

/// Run the generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    let source = args.source.unwrap_or_else(|| PathBuf::from("."));
    let out = args.out.unwrap_or_else(|| PathBuf::from("."));

    let bundle = load_bundle(&source)?;

    if args.dry_run {
        print_dry_run(&out, &bundle);
        return Ok(());
    }

    let pb = create_progress_spinner("Writing bundle");
    let result = write_bundle(&out, &bundle);
    finish_progress_bar(pb);
    result?;

    match bundle.format_counts() {
        Some(counts) => println!("Wrote {} to {}", counts, out.display()),
        None => println!("Wrote empty bundle to {}", out.display()),
    }

    Ok(())
}

fn print_dry_run(out: &Path, bundle: &OpenCodeBundle) {
    let layout = BundleLayout::resolve(out);

    println!("[DRY RUN] Would write {}", layout.config_path.display());
    for agent in &bundle.agents {
        let target = layout.agents_dir.join(format!("{}.md", agent.name));
        println!("[DRY RUN] Would write {}", target.display());
    }
    for plugin in &bundle.plugins {
        let target = layout.plugins_dir.join(&plugin.name);
        println!("[DRY RUN] Would write {}", target.display());
    }
    for skill in &bundle.skills {
        let target = layout.skills_dir.join(&skill.name);
        println!(
            "[DRY RUN] Would copy {} -> {}",
            skill.source_dir.display(),
            target.display()
        );
    }
}

fn create_progress_spinner(message: &str) -> Option<ProgressBar> {
    let style = ProgressStyle::default_spinner()
        .template(&format!("{{spinner}} {message}..."))
        .ok()?;
    let pb = ProgressBar::new_spinner();
    pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    Some(pb)
}

fn finish_progress_bar(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}

//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - generate: Generate command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod generate;
pub mod show;

pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;
pub use show::ShowArgs;

/// ocpack - OpenCode bundle generator
///
/// Materialize agent bundles (config, agents, plugins, skills) into the
/// OpenCode directory layout.
#[derive(Parser, Debug)]
#[command(
    name = "ocpack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Generate OpenCode agent bundles from a source directory",
    long_about = "ocpack reads a bundle source directory (opencode.json, agents/, plugins/, \
                  skills/) and writes it out in the OpenCode layout, either into a project \
                  root or directly into a .opencode directory.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  ocpack generate                        \x1b[90m# Bundle current directory into ./\x1b[0m\n   \
                  ocpack generate ./bundle --out ~/proj \x1b[90m# Write bundle under a project root\x1b[0m\n   \
                  ocpack generate --dry-run              \x1b[90m# Show target paths without writing\x1b[0m\n   \
                  ocpack show ./bundle                   \x1b[90m# List bundle contents\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an OpenCode bundle from a source directory
    Generate(GenerateArgs),

    /// Show the contents of a bundle source
    Show(ShowArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

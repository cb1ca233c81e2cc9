use std::path::PathBuf;

use clap::Parser;

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Bundle the current directory into ./:\n    ocpack generate\n\n\
                   Bundle a source into a project root:\n    ocpack generate ./bundle --out ~/projects/app\n\n\
                   Write directly into a .opencode directory:\n    ocpack generate ./bundle --out ~/projects/app/.opencode\n\n\
                   Preview without writing:\n    ocpack generate ./bundle --dry-run")]
pub struct GenerateArgs {
    /// Bundle source directory. Defaults to the current directory.
    pub source: Option<PathBuf>,

    /// Output root. A root named .opencode is written into directly;
    /// any other root gets a .opencode/ subdirectory.
    #[arg(long, short = 'o', value_name = "DIR", env = "OCPACK_OUT")]
    pub out: Option<PathBuf>,

    /// Show what would be written without actually writing
    #[arg(long)]
    pub dry_run: bool,
}

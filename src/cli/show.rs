use std::path::PathBuf;

use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Show the current directory as a bundle source:\n    ocpack show\n\n\
                   Show a specific bundle source:\n    ocpack show ./bundle")]
pub struct ShowArgs {
    /// Bundle source directory. Defaults to the current directory.
    pub source: Option<PathBuf>,
}

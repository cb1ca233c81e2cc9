//! ocpack - OpenCode bundle generator
//!
//! A command line tool that reads a bundle source directory (config, agent
//! prompts, plugins, skills) and materializes it in the OpenCode directory
//! layout.

use clap::Parser;

mod bundle;
mod cli;
mod commands;
mod common;
mod error;
mod layout;
mod writer;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

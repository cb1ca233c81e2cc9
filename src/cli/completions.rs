use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    ocpack completions bash > ~/.bash_completion.d/ocpack\n\n\
                  Generate zsh completions:\n    ocpack completions zsh > ~/.zfunc/_ocpack\n\n\
                  Generate fish completions:\n    ocpack completions fish > ~/.config/fish/completions/ocpack.fish\n\n\
                  Generate PowerShell completions:\n    ocpack completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}

use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    blogshift completions bash > ~/.bash_completion.d/blogshift\n\n\
                  Generate zsh completions:\n    blogshift completions zsh > ~/.zfunc/_blogshift\n\n\
                  Generate fish completions:\n    blogshift completions fish > ~/.config/fish/completions/blogshift.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}

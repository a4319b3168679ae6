//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, and PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::MinopError;

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, MinopError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "minop", &mut buf);
    String::from_utf8(buf).map_err(|e| MinopError::InvalidInput(format!("UTF-8 error: {e}")))
}

/// Get shell from string name.
#[must_use]
pub fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

/// Get installation instructions for shell completions.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc:
source <(minop completions bash)
"
        .to_string(),
        Shell::Zsh => r"# Save to a directory on your fpath:
minop completions zsh > ~/.zsh/completions/_minop
"
        .to_string(),
        Shell::Fish => r"# Save to fish completions directory:
minop completions fish > ~/.config/fish/completions/minop.fish
"
        .to_string(),
        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
minop completions powershell | Out-String | Invoke-Expression
"
        .to_string(),
        _ => format!("# Redirect the output of `minop completions {shell}` to your shell's completion directory\n"),
    }
}

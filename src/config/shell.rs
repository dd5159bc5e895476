use std::env;
use std::fmt;
use std::path::PathBuf;

/// Shells quco knows how to integrate with. Anything else can still use
/// the generate flow but cannot host the config or autofill blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Zsh,
    Bash,
    Unknown,
}

impl ShellType {
    /// Detect the user's login shell from `$SHELL`.
    pub fn current() -> Self {
        match env::var("SHELL") {
            Ok(shell) if shell.ends_with("/zsh") || shell == "zsh" => ShellType::Zsh,
            Ok(shell) if shell.ends_with("/bash") || shell == "bash" => ShellType::Bash,
            _ => ShellType::Unknown,
        }
    }

    /// Startup file for this shell under `$HOME`, or `None` for unknown
    /// shells and when `$HOME` is unset.
    pub fn rc_path(&self) -> Option<PathBuf> {
        let file = match self {
            ShellType::Zsh => ".zshrc",
            ShellType::Bash => ".bashrc",
            ShellType::Unknown => return None,
        };
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(file))
    }
}

impl fmt::Display for ShellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShellType::Zsh => "zsh",
            ShellType::Bash => "bash",
            ShellType::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rc_path_by_shell() {
        unsafe {
            env::set_var("HOME", "/home/tester");
        }
        assert_eq!(
            ShellType::Zsh.rc_path(),
            Some(PathBuf::from("/home/tester/.zshrc"))
        );
        assert_eq!(
            ShellType::Bash.rc_path(),
            Some(PathBuf::from("/home/tester/.bashrc"))
        );
        assert_eq!(ShellType::Unknown.rc_path(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ShellType::Zsh.to_string(), "zsh");
        assert_eq!(ShellType::Bash.to_string(), "bash");
        assert_eq!(ShellType::Unknown.to_string(), "unknown");
    }
}

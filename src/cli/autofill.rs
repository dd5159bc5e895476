use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{ConfigError, ShellType};
use crate::error::AppResult;
use crate::rcfile::{BlockInstaller, locate_markers, snippets};

/// Install the autofill function into the user's rc file.
pub fn enable() -> AppResult<()> {
    let (shell, rc_path) = supported_shell()?;

    println!("\n🔧 Autofill Setup\n");
    println!("This adds a shell function to your shell configuration so generated");
    println!("commands can be loaded directly into your shell buffer.\n");
    println!("Target file: {}\n", rc_path.display());

    let mut replace_existing = false;
    if rc_path.exists() {
        let content = fs::read_to_string(&rc_path)?;
        if locate_markers(&content, &snippets::AUTOFILL_MARKERS)
            .start
            .is_some()
        {
            println!("Autofill is already enabled.");
            if !confirm("Do you want to reinstall it?", false)? {
                println!("✗ Cancelled.");
                return Ok(());
            }
            replace_existing = true;
        }
    }

    if !confirm(&format!("Enable autofill in {}?", rc_path.display()), true)? {
        println!("✗ Cancelled.");
        return Ok(());
    }

    let block = match shell {
        ShellType::Zsh => snippets::zsh_autofill_block(),
        _ => snippets::bash_autofill_block(),
    };

    let installer = BlockInstaller::new();
    let backup = installer.install(&rc_path, &block, &snippets::AUTOFILL_MARKERS, replace_existing)?;
    if let Some(backup) = backup {
        println!("Backup created: {}", backup.display());
    }

    println!("\n✓ Autofill enabled successfully!\n");
    println!(
        "Please restart your terminal or run: source {}",
        rc_path.display()
    );
    Ok(())
}

/// Remove the autofill function from the user's rc file.
pub fn disable() -> AppResult<()> {
    let (_, rc_path) = supported_shell()?;

    println!("\n🔧 Autofill Removal\n");
    println!("Target file: {}\n", rc_path.display());

    if !rc_path.exists() {
        eprintln!("Shell configuration file not found.");
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} does not exist", rc_path.display()),
        )
        .into());
    }

    let content = fs::read_to_string(&rc_path)?;
    if locate_markers(&content, &snippets::AUTOFILL_MARKERS)
        .start
        .is_none()
    {
        println!("Autofill is not currently enabled.");
        return Ok(());
    }

    if !confirm(&format!("Disable autofill in {}?", rc_path.display()), true)? {
        println!("✗ Cancelled.");
        return Ok(());
    }

    let installer = BlockInstaller::new();
    let backup = installer.remove(&rc_path, &snippets::AUTOFILL_MARKERS)?;
    println!("Backup created: {}", backup.display());

    println!("\n✓ Autofill disabled successfully!\n");
    println!(
        "Please restart your terminal or run: source {}",
        rc_path.display()
    );
    Ok(())
}

/// Autofill only works for shells whose rc file we know.
fn supported_shell() -> Result<(ShellType, PathBuf), ConfigError> {
    let shell = ShellType::current();
    if shell == ShellType::Unknown {
        eprintln!("Warning: could not detect shell type (zsh or bash).");
        eprintln!("Autofill is only supported for zsh and bash.");
        return Err(ConfigError::UnsupportedShell);
    }
    let rc_path = shell.rc_path().ok_or(ConfigError::MissingHome)?;
    Ok((shell, rc_path))
}

/// `[y/N]`-style confirmation on stdin. EOF counts as "no".
fn confirm(message: &str, default_yes: bool) -> io::Result<bool> {
    let hint = if default_yes { "[Y/n]" } else { "[y/N]" };
    print!("{message} {hint} ");
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(false);
    }
    Ok(match input.trim().to_lowercase().as_str() {
        "" => default_yes,
        "y" | "yes" => true,
        _ => false,
    })
}

use std::io::Write;
use std::process::{Command, Stdio};

/// Show a validated command to the user.
///
/// In autofill mode the bare command goes to stdout for the installed
/// shell function to capture. Otherwise it is printed with a `$ ` prefix
/// and copied to the clipboard when a clipboard tool is available.
pub fn emit_command(command: &str, autofill_active: bool) {
    if autofill_active {
        println!("{command}");
    } else {
        println!("$ {command}");
        if copy_to_clipboard(command) {
            println!("✓ Copied to clipboard");
        }
    }
}

/// Pipe `text` into the first clipboard tool that accepts it. The text
/// goes straight to the child's stdin, so no shell quoting is involved.
fn copy_to_clipboard(text: &str) -> bool {
    const TOOLS: &[(&str, &[&str])] = &[
        ("pbcopy", &[]),
        ("xclip", &["-selection", "clipboard"]),
        ("wl-copy", &[]),
    ];

    for (tool, args) in TOOLS {
        let spawned = Command::new(tool)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        let Ok(mut child) = spawned else { continue };

        let wrote = child
            .stdin
            .take()
            .map(|mut stdin| stdin.write_all(text.as_bytes()).is_ok())
            .unwrap_or(false);
        if wrote && matches!(child.wait(), Ok(status) if status.success()) {
            return true;
        }
    }

    false
}

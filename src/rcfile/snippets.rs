//! Marker lines and block bodies written into the user's rc file.
//!
//! The marker strings are the on-disk format: changing a single byte
//! orphans every block installed by an earlier version.

use super::scanner::BlockMarkers;

pub const CONFIG_BLOCK_START: &str =
    "# The following lines have been added by Quco for configuration.";
pub const CONFIG_BLOCK_END: &str =
    "# End of Quco configuration - Do not modify this manually.";

pub const AUTOFILL_BLOCK_START: &str =
    "# The following function has been added by Quco to enable command autofill.";
pub const AUTOFILL_BLOCK_DESCRIPTION: &str =
    "# This allows generated commands to be loaded directly into your shell buffer.";
pub const AUTOFILL_BLOCK_END: &str =
    "# End of Quco autofill - Do not modify this manually.";

pub const CONFIG_MARKERS: BlockMarkers = BlockMarkers {
    start: CONFIG_BLOCK_START,
    end: CONFIG_BLOCK_END,
};

pub const AUTOFILL_MARKERS: BlockMarkers = BlockMarkers {
    start: AUTOFILL_BLOCK_START,
    end: AUTOFILL_BLOCK_END,
};

// Flag and empty invocations fall through to the real binary; prompt
// invocations run with QUCO_SHELL_AUTOFILL set so the binary prints the
// bare command for capture.
const ZSH_AUTOFILL_FN: &str = r#"quco() {
  case "$1" in
    --*)
      command quco "$@"
      ;;
    "")
      command quco "$@"
      ;;
    *)
      local cmd
      cmd=$(QUCO_SHELL_AUTOFILL=true command quco "$@")
      if [ $? -eq 0 ] && [ -n "$cmd" ]; then
        print -z "$cmd"
      fi
      ;;
  esac
}"#;

// Bash has no `print -z`; a transient readline binding on the DSR escape
// sequence injects the command into the line buffer instead.
const BASH_AUTOFILL_FN: &str = r#"quco() {
  case "$1" in
    --*)
      command quco "$@"
      ;;
    "")
      command quco "$@"
      ;;
    *)
      local cmd
      cmd=$(QUCO_SHELL_AUTOFILL=true command quco "$@")
      if [ $? -eq 0 ] && [ -n "$cmd" ]; then
        bind '"\e[0n": "'"$cmd"'"'
        printf '\e[0n'
        bind -r '\e[0n'
      fi
      ;;
  esac
}"#;

/// Autofill block for zsh, markers included.
pub fn zsh_autofill_block() -> String {
    format!(
        "{AUTOFILL_BLOCK_START}\n{AUTOFILL_BLOCK_DESCRIPTION}\n{ZSH_AUTOFILL_FN}\n{AUTOFILL_BLOCK_END}"
    )
}

/// Autofill block for bash, markers included.
pub fn bash_autofill_block() -> String {
    format!(
        "{AUTOFILL_BLOCK_START}\n{AUTOFILL_BLOCK_DESCRIPTION}\n{BASH_AUTOFILL_FN}\n{AUTOFILL_BLOCK_END}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rcfile::remover::remove_blocks;

    #[test]
    fn test_zsh_block_is_marker_delimited() {
        let block = zsh_autofill_block();
        assert!(block.starts_with(AUTOFILL_BLOCK_START));
        assert!(block.ends_with(AUTOFILL_BLOCK_END));
        assert!(block.contains("print -z"));
        assert!(block.contains("QUCO_SHELL_AUTOFILL=true"));
    }

    #[test]
    fn test_bash_block_is_marker_delimited() {
        let block = bash_autofill_block();
        assert!(block.starts_with(AUTOFILL_BLOCK_START));
        assert!(block.ends_with(AUTOFILL_BLOCK_END));
        assert!(block.contains("bind"));
        assert!(block.contains("QUCO_SHELL_AUTOFILL=true"));
    }

    #[test]
    fn test_installed_blocks_round_trip_through_remover() {
        for block in [zsh_autofill_block(), bash_autofill_block()] {
            let text = format!("user content\n\n{block}\n");
            let cleaned = remove_blocks(&text, &AUTOFILL_MARKERS);
            assert_eq!(cleaned, "user content\n");
        }
    }

    #[test]
    fn test_marker_pairs_are_distinct() {
        // Config and autofill blocks coexist in one rc file; their
        // markers must never match each other.
        assert!(!AUTOFILL_BLOCK_START.contains(CONFIG_BLOCK_START));
        assert!(!CONFIG_BLOCK_START.contains(AUTOFILL_BLOCK_START));
        assert!(!AUTOFILL_BLOCK_END.contains(CONFIG_BLOCK_END));
        assert!(!CONFIG_BLOCK_END.contains(AUTOFILL_BLOCK_END));
    }
}

use std::sync::OnceLock;

use regex::Regex;

/// A single denylist entry: the compiled pattern and why it is blocked.
/// The description is logged on a match, never shown to the caller.
pub struct DestructivePattern {
    pub regex: Regex,
    pub description: &'static str,
}

/// Raw pattern table, in match order. A denylist, not an allowlist: the
/// guarantee is "blocks a known set of catastrophic operations", nothing
/// stronger.
///
/// The `rm` pattern is anchored to the filesystem root; rm against
/// deeper paths is left to the privileged-combination checks.
const PATTERN_TABLE: &[(&str, &str)] = &[
    (
        r"rm\s+(-[rf]+\s+)?/(\s|\*|$)",
        "recursive removal of the filesystem root",
    ),
    (
        r"dd\s+.*of=/dev/(sd|hd|disk)",
        "dd write to a raw disk device",
    ),
    (r"mkfs", "filesystem format utility"),
    (r":\(\)\{.*:\|:.*&.*\};:", "fork bomb"),
    (r"shutdown", "system shutdown"),
    (r"reboot", "system reboot"),
    (r"\bhalt\b", "system halt"),
    (r"init\s+0", "init runlevel switch to halt"),
    (r"init\s+6", "init runlevel switch to reboot"),
    (
        r":\(\)\s*\{\s*:\|:\s*&\s*\}\s*;\s*:",
        "fork bomb (spaced variant)",
    ),
    (r"mv\s+.*\s+/dev/null", "move into the null device"),
    (r">\s*/dev/(sd|hd|disk)", "redirect to a raw disk device"),
    (r"chmod\s+-R\s+000", "recursive permission wipe"),
    (
        r"chown\s+-R\s+.*\s+/",
        "recursive ownership change at the root",
    ),
];

/// The process-wide destructive pattern set, compiled once on first use.
/// Immutable thereafter, so concurrent validator calls can share it.
pub fn destructive_patterns() -> &'static [DestructivePattern] {
    static PATTERNS: OnceLock<Vec<DestructivePattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        PATTERN_TABLE
            .iter()
            .map(|&(pattern, description)| DestructivePattern {
                regex: Regex::new(pattern).expect("destructive pattern must compile"),
                description,
            })
            .collect()
    })
}

/// First matching pattern for `command`, if any.
pub fn first_match(command: &str) -> Option<&'static DestructivePattern> {
    destructive_patterns()
        .iter()
        .find(|p| p.regex.is_match(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(destructive_patterns().len(), PATTERN_TABLE.len());
    }

    #[test]
    fn test_root_removal_variants_match() {
        for cmd in ["rm -rf /", "rm -rf / ", "rm -rf /*", "rm -fr /", "rm /"] {
            assert!(first_match(cmd).is_some(), "should match: {cmd}");
        }
    }

    #[test]
    fn test_scoped_removal_does_not_match() {
        // rm against a real path is not in the denylist; the sudo
        // combination checks cover the privileged case.
        for cmd in ["rm -rf /var/log", "rm -rf ./build", "rm file.txt"] {
            assert!(first_match(cmd).is_none(), "should not match: {cmd}");
        }
    }

    #[test]
    fn test_raw_device_writes_match() {
        assert!(first_match("dd if=/dev/zero of=/dev/sda").is_some());
        assert!(first_match("echo x > /dev/sda1").is_some());
        assert!(first_match("cat data >/dev/disk0").is_some());
    }

    #[test]
    fn test_format_and_power_commands_match() {
        for cmd in [
            "mkfs.ext4 /dev/sdb1",
            "shutdown -h now",
            "reboot",
            "halt",
            "init 0",
            "init 6",
        ] {
            assert!(first_match(cmd).is_some(), "should match: {cmd}");
        }
    }

    #[test]
    fn test_fork_bomb_variants_match() {
        assert!(first_match(":(){:|:&};:").is_some());
        assert!(first_match(":(){ :|:& };:").is_some());
    }

    #[test]
    fn test_null_device_move_matches() {
        assert!(first_match("mv important.txt /dev/null").is_some());
    }

    #[test]
    fn test_recursive_permission_and_ownership_match() {
        assert!(first_match("chmod -R 000 .").is_some());
        assert!(first_match("chown -R nobody /").is_some());
    }

    #[test]
    fn test_everyday_commands_do_not_match() {
        for cmd in [
            "ls -la",
            "git status",
            "find . -name '*.log' -mtime -1",
            "kill $(lsof -t -i :8000)",
            "df -h",
            "tar -czf backup.tar.gz src/",
        ] {
            assert!(first_match(cmd).is_none(), "should not match: {cmd}");
        }
    }

    #[test]
    fn test_descriptions_are_present() {
        for pattern in destructive_patterns() {
            assert!(!pattern.description.is_empty());
        }
    }
}

use clap::Parser;

const AFTER_HELP: &str = "\
Examples:
  quco show my ip address
  quco kill process running on port 8000
  quco show last 5 commits
  quco \"download youtube video https://youtu.be/AbCd\"

Notes:
  - Quote prompts containing special characters (?, *, &, |)
  - Generated commands are never executed automatically
  - History is stored in ~/.quco/history.json";

/// Turn natural language into shell commands using AI.
#[derive(Parser, Debug)]
#[command(
    name = "quco",
    version,
    about = "Turn natural language into shell commands using AI",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Natural language description of the command to generate
    #[arg(trailing_var_arg = true)]
    pub prompt: Vec<String>,

    /// Interactive setup and configuration
    #[arg(long)]
    pub setup: bool,

    /// Show current configuration
    #[arg(long)]
    pub config: bool,

    /// Enable autofill (commands are loaded into the shell buffer)
    #[arg(long = "autofill-on")]
    pub autofill_on: bool,

    /// Disable autofill (commands are copied to the clipboard)
    #[arg(long = "autofill-off")]
    pub autofill_off: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_words_collect() {
        let args = Args::parse_from(["quco", "show", "my", "ip", "address"]);
        assert_eq!(args.prompt, ["show", "my", "ip", "address"]);
        assert!(!args.setup);
    }

    #[test]
    fn test_flags_parse() {
        assert!(Args::parse_from(["quco", "--setup"]).setup);
        assert!(Args::parse_from(["quco", "--config"]).config);
        assert!(Args::parse_from(["quco", "--autofill-on"]).autofill_on);
        assert!(Args::parse_from(["quco", "--autofill-off"]).autofill_off);
    }

    #[test]
    fn test_empty_invocation() {
        let args = Args::parse_from(["quco"]);
        assert!(args.prompt.is_empty());
    }
}

use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "wordly", bin_name = "wordly", version = get_version())]
#[command(about = "Weekly vocabulary lists, flashcards and spelling practice", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable speech
    #[arg(short, long, global = true)]
    pub mute: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List weeks
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only show weeks whose name contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Show the words of a week
    #[command(display_order = 2)]
    Show { name: String },

    /// Create or replace a week
    #[command(display_order = 3)]
    Save {
        name: String,

        /// Words; each argument may also hold a comma-separated list.
        /// Read from piped stdin when omitted.
        #[arg(num_args = 0..)]
        words: Vec<String>,
    },

    /// Delete a week
    #[command(alias = "rm", display_order = 4)]
    Delete { name: String },

    /// Practice a week with flashcards
    #[command(display_order = 10)]
    Flash {
        name: String,

        /// Start with the deck shuffled
        #[arg(short, long)]
        shuffle: bool,
    },

    /// Spelling quiz for a week
    #[command(display_order = 11)]
    Spell { name: String },

    /// Show the last quiz score
    #[command(display_order = 12)]
    Stats,

    /// Export all weeks as JSON
    #[command(display_order = 20)]
    Export {
        /// Output file (defaults to wordlywise_weeks.json in the current directory)
        path: Option<String>,

        /// Write the document to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },

    /// Replace all weeks from a JSON export
    #[command(display_order = 21)]
    Import { path: String },

    /// Import one week from a CSV file
    #[command(name = "import-csv", display_order = 22)]
    ImportCsv { path: String },

    /// Import one week from a published spreadsheet CSV link
    #[command(display_order = 23)]
    Fetch { url: String },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (e.g., voice, prompt-delay-ms)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_save_with_many_words() {
        let cli = Cli::try_parse_from(["wordly", "save", "Week 1", "apple", "banana"]).unwrap();
        match cli.command {
            Some(Commands::Save { name, words }) => {
                assert_eq!(name, "Week 1");
                assert_eq!(words, vec!["apple", "banana"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn save_words_are_optional() {
        let cli = Cli::try_parse_from(["wordly", "save", "Week 1"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Save { ref words, .. }) if words.is_empty()));
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["wordly", "spell", "Week 1", "--mute", "-v"]).unwrap();
        assert!(cli.mute);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Spell { .. })));
    }

    #[test]
    fn bare_invocation_has_no_command() {
        let cli = Cli::try_parse_from(["wordly"]).unwrap();
        assert!(cli.command.is_none());
    }
}

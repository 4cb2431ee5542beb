use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "createmeta",
    version,
    about = "Show the fields Jira expects when creating an issue"
)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "CREATEMETA_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Jira instance URL (overrides config file)
    #[arg(long)]
    pub url: Option<String>,

    /// Jira username or email (overrides config file)
    #[arg(long, short = 'u')]
    pub username: Option<String>,

    /// Jira password or API token (overrides config file)
    #[arg(long, short = 'p')]
    pub password: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Project key (e.g. "PC")
    pub project: String,

    /// Issue type name, matched case-insensitively (e.g. "Help")
    pub issue_type: String,

    /// Field name to check against the issue type; repeat for each field
    #[arg(long = "field", short = 'f', value_name = "NAME")]
    pub fields: Vec<String>,

    /// Entities to expand in the metadata responses
    #[arg(long)]
    pub expand: Option<String>,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fields() {
        let cli = Cli::try_parse_from([
            "createmeta",
            "PC",
            "Help",
            "--field",
            "Summary",
            "-f",
            "Epic Link",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.project, "PC");
        assert_eq!(cli.issue_type, "Help");
        assert_eq!(cli.fields, vec!["Summary", "Epic Link"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, OutputFormat::Text);
    }
}

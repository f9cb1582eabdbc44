mod serve;
mod graphql;

pub use serve::ServeCommands;
pub use graphql::GraphqlCommands;

use clap::{Parser, Subcommand, ValueEnum, Args};

// ══════════════════════════════════════════════════════════════════════════════
// GLOBAL OPTIONS
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Parser)]
#[command(name = "roster-cli")]
#[command(author = "roster contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "In-memory student and course registry served over GraphQL")]
#[command(long_about = r#"
roster keeps two in-memory collections, students and courses, and exposes
lookups, a major search, and add/update/delete mutations over GraphQL.
Nothing is persisted: every process starts from the seed data.

EXAMPLES:
  # Start the GraphQL server
  roster-cli serve http --port 4000

  # Run a query against a fresh store
  roster-cli graphql query '{ getAllStudent { id name major } }'

  # Start from your own records
  roster-cli --seed ./seed.json serve http

ENVIRONMENT VARIABLES:
  ROSTER_SEED     JSON seed file (default: built-in records)
  ROSTER_LOG      Log level (trace, debug, info, warn, error)
  ROSTER_HOST     Server host (default: 127.0.0.1)
  ROSTER_PORT     Server port (default: 4000)
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// JSON file with initial students and courses
    #[arg(short, long, env = "ROSTER_SEED", global = true)]
    pub seed: Option<String>,

    /// Start with empty collections; takes precedence over --seed
    #[arg(long, global = true)]
    pub empty: bool,

    /// Log level
    #[arg(short, long, env = "ROSTER_LOG", global = true)]
    #[arg(value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

// ══════════════════════════════════════════════════════════════════════════════
// VALUE ENUMS
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Elvish,
    PowerShell,
}

// ══════════════════════════════════════════════════════════════════════════════
// COMMANDS
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Subcommand)]
pub enum Commands {
    /// Start GraphQL server
    #[command(visible_alias = "srv")]
    Serve {
        #[command(subcommand)]
        command: ServeCommands,
    },

    /// GraphQL operations against a fresh store
    #[command(visible_alias = "gql")]
    Graphql {
        #[command(subcommand)]
        command: GraphqlCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print version information
    Version {
        /// Show detailed version info
        #[arg(short, long)]
        verbose: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["roster-cli", "serve", "http"]).unwrap();
        assert_eq!(cli.global.log_level, LogLevel::Info);
        assert!(!cli.global.empty);
        match cli.command {
            Commands::Serve { command: ServeCommands::Http { host, port } } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 4000);
            }
            _ => panic!("expected serve http"),
        }
    }

    #[test]
    fn test_empty_accepted_alongside_seed_from_env() {
        std::env::set_var("ROSTER_SEED", "seed.json");
        let result = Cli::try_parse_from(["roster-cli", "--empty", "version"]);
        std::env::remove_var("ROSTER_SEED");

        let cli = result.unwrap();
        assert!(cli.global.empty);
        assert_eq!(cli.global.seed.as_deref(), Some("seed.json"));
    }

    #[test]
    fn test_empty_accepted_alongside_seed_flag() {
        let cli = Cli::try_parse_from([
            "roster-cli", "--seed", "seed.json", "--empty", "version",
        ])
        .unwrap();
        assert!(cli.global.empty);
    }

    #[test]
    fn test_parse_graphql_query() {
        let cli = Cli::try_parse_from([
            "roster-cli", "gql", "query", "{ getAllStudent { id } }", "--pretty",
        ])
        .unwrap();
        match cli.command {
            Commands::Graphql { command: GraphqlCommands::Query { query, pretty, variables } } => {
                assert_eq!(query, "{ getAllStudent { id } }");
                assert!(pretty);
                assert!(variables.is_none());
            }
            _ => panic!("expected graphql query"),
        }
    }
}

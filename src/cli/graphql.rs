use clap::Subcommand;

#[derive(Subcommand)]
pub enum GraphqlCommands {
    /// Print the schema in SDL form
    Schema {
        /// Output file (- for stdout)
        #[arg(default_value = "-")]
        output: String,
    },

    /// Execute a query (prefix with @ to read it from a file)
    Query {
        query: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,

        /// Pretty print the response
        #[arg(short, long)]
        pretty: bool,
    },

    /// Execute a mutation (prefix with @ to read it from a file)
    Mutate {
        mutation: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,

        /// Show what would be executed without running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Check a document against the schema
    Validate {
        query: String,
    },
}

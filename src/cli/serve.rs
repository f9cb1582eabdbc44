use clap::Subcommand;

#[derive(Subcommand)]
pub enum ServeCommands {
    /// Serve GraphQL over HTTP, with GraphiQL on GET /graphql
    Http {
        /// Port to listen on
        #[arg(short, long, env = "ROSTER_PORT", default_value = "4000")]
        port: u16,

        /// Host to bind
        #[arg(long, env = "ROSTER_HOST", default_value = "127.0.0.1")]
        host: String,
    },
}

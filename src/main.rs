//! roster CLI entrypoint

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell as ClapShell};
use std::sync::Arc;

use roster::{build_schema, MemoryStore, RosterSchema, Seed};

mod cli;
use cli::*;

// ══════════════════════════════════════════════════════════════════════════════
// UTILITIES
// ══════════════════════════════════════════════════════════════════════════════

fn tracing_level(level: LogLevel) -> tracing::Level {
    match level {
        LogLevel::Trace => tracing::Level::TRACE,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Error => tracing::Level::ERROR,
    }
}

fn open_store(global: &GlobalOptions) -> Result<Arc<MemoryStore>> {
    let store = if global.empty {
        MemoryStore::new()
    } else if let Some(path) = &global.seed {
        MemoryStore::from_seed(Seed::from_path(path)?)?
    } else {
        MemoryStore::seeded()
    };
    Ok(Arc::new(store))
}

/// Inline document, or `@path` to read it from a file
fn read_document(arg: String) -> Result<String> {
    if let Some(path) = arg.strip_prefix('@') {
        return std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read {}: {}", path, e));
    }
    Ok(arg)
}

async fn execute_document(
    schema: &RosterSchema,
    document: String,
    variables: Option<String>,
) -> Result<async_graphql::Response> {
    let mut request = async_graphql::Request::new(document);
    if let Some(vars) = variables {
        let vars: serde_json::Value = serde_json::from_str(&vars)
            .map_err(|e| anyhow!("Invalid variables JSON: {}", e))?;
        request = request.variables(async_graphql::Variables::from_json(vars));
    }
    Ok(schema.execute(request).await)
}

/// Parse and schema errors for `document`; resolver failures do not count.
///
/// Runs against a throwaway empty store, so mutations in the document never
/// touch caller data.
async fn validation_errors(document: String) -> Vec<String> {
    let schema = build_schema(Arc::new(MemoryStore::new()));
    let response = schema.execute(document).await;
    response
        .errors
        .into_iter()
        .filter(|e| e.path.is_empty())
        .map(|e| e.message)
        .collect()
}

fn print_response(response: &async_graphql::Response, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(response)?
    } else {
        serde_json::to_string(response)?
    };
    println!("{}", output);
    Ok(())
}

// ══════════════════════════════════════════════════════════════════════════════
// MAIN
// ══════════════════════════════════════════════════════════════════════════════

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing_level(cli.global.log_level))
        .with_writer(std::io::stderr)
        .init();

    let quiet = cli.global.quiet;

    match cli.command {
        Commands::Serve { command } => {
            let store = open_store(&cli.global)?;
            handle_serve_command(command, store, quiet).await?;
        }

        Commands::Graphql { command } => {
            let store = open_store(&cli.global)?;
            handle_graphql_command(command, store).await?;
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let clap_shell = match shell {
                Shell::Bash => ClapShell::Bash,
                Shell::Zsh => ClapShell::Zsh,
                Shell::Fish => ClapShell::Fish,
                Shell::Elvish => ClapShell::Elvish,
                Shell::PowerShell => ClapShell::PowerShell,
            };
            generate(clap_shell, &mut cmd, "roster-cli", &mut std::io::stdout());
        }

        Commands::Version { verbose } => {
            println!("roster-cli {}", env!("CARGO_PKG_VERSION"));
            if verbose {
                println!("  GraphQL: async-graphql 7");
                println!("  HTTP:    axum 0.7");
                println!("  Storage: in-memory (not persisted)");
            }
        }
    }

    Ok(())
}

async fn handle_serve_command(
    command: ServeCommands,
    store: Arc<MemoryStore>,
    quiet: bool,
) -> Result<()> {
    match command {
        ServeCommands::Http { port, host } => {
            use async_graphql::http::GraphiQLSource;
            use async_graphql_axum::GraphQL;
            use axum::{response::Html, routing::get, Router};

            let schema = build_schema(store);

            let graphiql_handler = || async {
                Html(GraphiQLSource::build().endpoint("/graphql").finish())
            };

            let health_handler = || async { "OK" };

            let app = Router::new()
                .route(
                    "/graphql",
                    get(graphiql_handler).post_service(GraphQL::new(schema)),
                )
                .route("/health", get(health_handler));

            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, "listening");
            if !quiet {
                println!("GraphQL server running at http://{}/graphql", addr);
                println!("GraphiQL playground at http://{}/graphql", addr);
            }

            axum::serve(listener, app).await?;
        }
    }
    Ok(())
}

async fn handle_graphql_command(command: GraphqlCommands, store: Arc<MemoryStore>) -> Result<()> {
    let schema = build_schema(store);

    match command {
        GraphqlCommands::Schema { output } => {
            let sdl = schema.sdl();
            if output == "-" {
                println!("{}", sdl);
            } else {
                std::fs::write(&output, sdl)?;
                println!("Schema written to {}", output);
            }
        }
        GraphqlCommands::Query { query, variables, pretty } => {
            let response = execute_document(&schema, read_document(query)?, variables).await?;
            print_response(&response, pretty)?;
        }
        GraphqlCommands::Mutate { mutation, variables, dry_run } => {
            let document = read_document(mutation)?;
            if dry_run {
                println!("Would execute:\n{}", document);
                if let Some(vars) = variables {
                    println!("Variables: {}", vars);
                }
            } else {
                let response = execute_document(&schema, document, variables).await?;
                print_response(&response, true)?;
            }
        }
        GraphqlCommands::Validate { query } => {
            let errors = validation_errors(read_document(query)?).await;
            if errors.is_empty() {
                println!("Document is valid");
            } else {
                println!("Validation errors:");
                for message in errors {
                    println!("  - {}", message);
                }
            }
        }
    }
    Ok(())
}

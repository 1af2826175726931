// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rag_tools::utils::logging;
use rag_tools::utils::Validator;
use rag_tools::{Config, DocumentSearch, QuestionAnswer, RagToolsMcp, ToolMetadata};
use rmcp::{transport::stdio, ServiceExt};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "rag_tools")]
#[command(version = "0.1.0")]
#[command(about = "MCP tools for retrieval-augmented document search and Q&A", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP (Model Context Protocol) server for agentic tool integration
    Mcp {
        #[arg(long, default_value = "stdio")]
        transport: String,
    },

    /// Search the documentation from the command line
    Search {
        /// Search query text
        query: String,
    },

    /// Ask a question from the command line
    Ask {
        /// Question text
        question: String,
    },

    /// Print the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());
    if !cli.config.exists() {
        warn!(
            "Config file {} not found, using environment and defaults",
            cli.config.display()
        );
    }

    let config =
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?;

    match cli.command {
        Commands::Mcp { transport } => {
            cmd_mcp(&config, &transport).await?;
        }
        Commands::Search { query } => {
            cmd_search(&config, &query).await;
        }
        Commands::Ask { question } => {
            cmd_ask(&config, &question).await;
        }
        Commands::Config => {
            cmd_config(&config);
        }
    }

    Ok(())
}

async fn cmd_mcp(config: &Config, transport: &str) -> Result<()> {
    info!("Starting MCP server (transport: {})", transport);

    if transport != "stdio" {
        eprintln!(
            "{}",
            logging::format_error(&format!("Unsupported transport: {}", transport))
        );
        error!("Only stdio transport is currently supported");
        return Err(anyhow::anyhow!("Unsupported transport: {}", transport));
    }

    let server = RagToolsMcp::new(config);

    info!("MCP server ready. Available tools:");
    for tool in server.tool_definitions() {
        info!(
            "  - {}: {}",
            tool.name,
            tool.description.as_deref().unwrap_or("No description")
        );
    }

    let running = server
        .serve(stdio())
        .await
        .context("Failed to start MCP server")?;
    running
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;

    Ok(())
}

async fn cmd_search(config: &Config, query: &str) {
    info!("Searching for: {}", query);

    let search = DocumentSearch::new(config);
    let snippets = search.run(query).await;

    if snippets.is_empty() {
        println!(
            "{}",
            logging::format_warning(&format!("No results found for query: \"{}\"", query))
        );
        println!("Check that API_KEY is set and the query is specific enough.");
        return;
    }

    println!("\nSearch results for: \"{}\"\n", query);
    println!("{}", "=".repeat(80));

    for (idx, snippet) in snippets.iter().enumerate() {
        println!("\n{}. {}", idx + 1, Validator::truncate_text(&snippet.text, 600));
    }

    println!("\n{}", "=".repeat(80));
    println!(
        "{}",
        logging::format_success(&format!("{} result(s)", snippets.len()))
    );
}

async fn cmd_ask(config: &Config, question: &str) {
    info!("Answering: {}", question);

    let qa = QuestionAnswer::new(config);

    match qa.run(question).await {
        Some(answer) => {
            println!("\n{}\n", answer);
        }
        None => {
            println!(
                "{}",
                logging::format_warning("No answer available for this question.")
            );
        }
    }
}

fn cmd_config(config: &Config) {
    let metadata = ToolMetadata::from_product(&config.product);

    println!(
        "{}",
        logging::format_info("Resolved rag_tools configuration:")
    );
    println!(
        "\nUpstream:\n\
         - Base URL: {}\n\
         - API key: {}\n\
         - Search model: {}\n\
         - Answer model: {}\n\
         \n\
         Product:\n\
         - Slug: {}\n\
         - Name: {}\n\
         \n\
         Tools:\n\
         - {}\n\
         - {}",
        config.upstream.base_url,
        if config.upstream.api_key.is_some() {
            "set"
        } else {
            "unset"
        },
        config.upstream.search_model,
        config.upstream.answer_model,
        config.product.slug,
        config.product.name,
        metadata.search_name,
        metadata.answer_name
    );
}

//! SimplQ CLI - Command-line interface for the SimplQ daemon

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9640";

#[derive(Parser)]
#[command(name = "simplq")]
#[command(about = "SimplQ virtual queue CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "SIMPLQ_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a queue
    Create {
        /// Queue name
        name: String,
    },

    /// Show a queue and its tokens
    Show {
        /// Queue ID
        queue_id: String,
    },

    /// Pause a queue
    Pause {
        /// Queue ID
        queue_id: String,
    },

    /// Resume a paused queue
    Resume {
        /// Queue ID
        queue_id: String,
    },

    /// Delete a queue (its tokens are kept)
    Delete {
        /// Queue ID
        queue_id: String,
    },

    /// Join a queue and receive a token number
    Enroll {
        /// Queue ID
        queue_id: String,

        /// Holder name
        #[arg(short, long)]
        name: String,

        /// Contact number
        #[arg(short, long)]
        contact: Option<String>,

        /// Email address
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Show a token
    Token {
        /// Token ID
        token_id: String,
    },

    /// Leave a queue
    Remove {
        /// Token ID
        token_id: String,
    },
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize)]
struct QueueResult {
    queue_id: String,
    name: String,
    state: String,
    tokens: Vec<TokenResult>,
}

#[derive(Deserialize, Tabled)]
struct TokenResult {
    #[tabled(rename = "#")]
    token_number: u32,
    name: String,
    #[tabled(display_with = "display_opt")]
    contact_number: Option<String>,
    #[tabled(display_with = "display_opt")]
    email_id: Option<String>,
    token_id: String,
}

#[derive(Deserialize, Tabled)]
struct EnrollResult {
    token_id: String,
    queue_id: String,
    token_number: u32,
}

fn display_opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

async fn set_paused(url: &str, queue_id: &str, is_paused: bool) -> Result<()> {
    let params = json!({ "queue_id": queue_id, "is_paused": is_paused });
    call_rpc(url, "queue.pause.v1", params).await?;

    let verb = if is_paused { "paused" } else { "resumed" };
    println!("{}", format!("✓ Queue {} {}", queue_id, verb).green().bold());
    Ok(())
}

async fn remove_token(url: &str, token_id: &str) -> Result<()> {
    call_rpc(url, "token.remove.v1", json!({ "token_id": token_id }))
        .await
        .with_context(|| format!("Failed to remove token {}", token_id))?;

    println!("{}", format!("✓ Token {} removed", token_id).green().bold());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Create { name } => {
            let result = call_rpc(&cli.rpc_url, "queue.create.v1", json!({ "name": name })).await?;
            let queue_id = result["queue_id"].as_str().unwrap_or_default();

            println!("{}", "✓ Queue created".green().bold());
            println!("  {} {}", "ID:".bold(), queue_id);
        }

        Commands::Show { queue_id } => {
            let result =
                call_rpc(&cli.rpc_url, "queue.get.v1", json!({ "queue_id": queue_id })).await?;
            let queue: QueueResult =
                serde_json::from_value(result).context("Unexpected queue shape")?;

            let state = match queue.state.as_str() {
                "PAUSED" => queue.state.yellow(),
                _ => queue.state.green(),
            };
            println!("{} [{}]", queue.name.cyan().bold(), state);
            println!("  {} {}", "ID:".bold(), queue.queue_id);
            println!();

            if queue.tokens.is_empty() {
                println!("{}", "No tokens yet".yellow());
            } else {
                println!("{}", Table::new(queue.tokens));
            }
        }

        Commands::Pause { queue_id } => set_paused(&cli.rpc_url, &queue_id, true).await?,

        Commands::Resume { queue_id } => set_paused(&cli.rpc_url, &queue_id, false).await?,

        Commands::Delete { queue_id } => {
            call_rpc(&cli.rpc_url, "queue.delete.v1", json!({ "queue_id": queue_id })).await?;

            println!("{}", format!("✓ Queue {} deleted", queue_id).green().bold());
        }

        Commands::Enroll {
            queue_id,
            name,
            contact,
            email,
        } => {
            let params = json!({
                "queue_id": queue_id,
                "name": name,
                "contact_number": contact,
                "email_id": email,
            });

            let result = call_rpc(&cli.rpc_url, "token.enroll.v1", params).await?;
            let enrolled: EnrollResult = serde_json::from_value(result)?;

            println!(
                "{}",
                format!("✓ Enrolled with token #{}", enrolled.token_number)
                    .green()
                    .bold()
            );
            println!();
            println!("{}", Table::new(vec![enrolled]));
        }

        Commands::Token { token_id } => {
            let result =
                call_rpc(&cli.rpc_url, "token.get.v1", json!({ "token_id": token_id })).await?;
            let token: TokenResult = serde_json::from_value(result)?;

            println!("{}", Table::new(vec![token]));
        }

        Commands::Remove { token_id } => remove_token(&cli.rpc_url, &token_id).await?,
    }

    Ok(())
}

//! Pulse - CLI shim over the task tracking tools
//!
//! Thin registration surface: each subcommand maps to one tool and prints
//! the OperationResult as JSON. Exit code 1 on a failed result.

use clap::Parser;
use pulse::client::create_client;
use pulse::config::ClientConfig;
use pulse::tools::{GetTaskArgs, GetTaskHistoryArgs, HealthCheckArgs, UpdateTaskArgs};
use pulse::{log_info, logging, ToolRegistry};
use rig::tool::Tool;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pulse", version, about = "Report and query agent task status against a Task Manager service")]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use the in-memory mock client instead of HTTP
    #[arg(long, global = true)]
    mock: bool,

    /// Task Manager host override
    #[arg(long, global = true)]
    host: Option<String>,

    /// Task Manager port override
    #[arg(long, global = true)]
    port: Option<u16>,

    /// Request timeout override in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Report a task status change for a session
    Update {
        #[arg(long)]
        session_id: String,
        #[arg(long)]
        jira_ticket: String,
        /// running, success or failed
        #[arg(long)]
        status: String,
        #[arg(long)]
        current_action: String,
        #[arg(long)]
        message: String,
        /// Progress percentage (0-100)
        #[arg(long, default_value_t = 0.0)]
        progress: f64,
        /// Additional details as a JSON object
        #[arg(long)]
        details: Option<String>,
    },
    /// Get the current task snapshot for a session
    Get {
        session_id: String,
    },
    /// Get the status history and logs of a session's task
    History {
        session_id: String,
        #[arg(long, default_value_t = 100)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Check Task Manager service health
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    logging::init_logger()?;

    let cli = Cli::parse();

    let mut config = ClientConfig::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if cli.mock {
        config.use_mock = true;
    }
    config.validate()?;

    let client = create_client(&config);
    log_info!("Using {} client ({})", client.kind(), config.base_url());
    let registry = ToolRegistry::new(client);

    let (tool_name, result) = match cli.command {
        Command::Update {
            session_id,
            jira_ticket,
            status,
            current_action,
            message,
            progress,
            details,
        } => {
            let details = match details {
                Some(raw) => Some(
                    serde_json::from_str(&raw)
                        .map_err(|e| anyhow::anyhow!("--details must be a JSON object: {}", e))?,
                ),
                None => None,
            };

            let result = registry
                .update_task
                .call(UpdateTaskArgs {
                    session_id,
                    jira_ticket,
                    status,
                    current_action,
                    message,
                    progress_percentage: progress,
                    details,
                })
                .await;
            ("update_task", result)
        }
        Command::Get { session_id } => (
            "get_task",
            registry.get_task.call(GetTaskArgs { session_id }).await,
        ),
        Command::History {
            session_id,
            limit,
            offset,
        } => (
            "get_task_history",
            registry
                .get_task_history
                .call(GetTaskHistoryArgs {
                    session_id,
                    limit,
                    offset,
                })
                .await,
        ),
        Command::Health => (
            "health_check",
            registry.health_check.call(HealthCheckArgs {}).await,
        ),
    };
    let result = result.unwrap_or_else(|never| match never {});

    logging::log_operation(tool_name, &result);
    println!("{}", serde_json::to_string_pretty(&result)?);

    if result.success {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

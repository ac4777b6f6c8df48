//! Planam server and planner chat client.

use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use eyre::{Context, Result};
use futures::StreamExt;
use secrecy::Secret;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use planam::adapters::ai::{GatewayConfig, OpenAICompatibleGateway, RelayClient};
use planam::adapters::http::{build_router, AppState};
use planam::adapters::memory::InMemoryPlannerStore;
use planam::adapters::postgres::{
    self, PostgresEventRepository, PostgresMessageRepository, PostgresTaskRepository,
    PostgresVendorRepository,
};
use planam::cli::{Cli, Command};
use planam::config::{AppConfig, Storage};
use planam::domain::foundation::EventId;
use planam::domain::plan::{extract_tasks, extract_vendors, PlanCache};
use planam::domain::planner::{PlannerAction, PlannerState};

fn setup_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    setup_logging(&config);

    match cli.command {
        None | Some(Command::Serve) => cmd_serve(config).await,
        Some(Command::Chat { relay_url, token }) => cmd_chat(&config, &relay_url, token).await,
    }
}

async fn cmd_serve(config: AppConfig) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let state = build_state(&config).await?;
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, environment = ?config.server.environment, "Planam listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Planam stopped");
    Ok(())
}

async fn build_state(config: &AppConfig) -> Result<AppState> {
    let mut gateway_config = GatewayConfig::new(&config.ai.base_url)
        .with_model(&config.ai.model)
        .with_connect_timeout(config.ai.connect_timeout());
    match config.ai.gateway_api_key.clone() {
        Some(key) if config.ai.has_gateway_key() => {
            gateway_config = gateway_config.with_api_key(key);
        }
        _ => warn!("AI gateway API key is not configured; chat relay requests will fail"),
    }
    let gateway = Arc::new(OpenAICompatibleGateway::new(gateway_config)?);

    let validator = config.auth.token_validator()?;
    if validator.is_empty() {
        warn!("No API tokens configured; every authenticated route will answer 401");
    }

    let plans = Arc::new(PlanCache::default());

    let state = match config.database.storage() {
        Storage::Postgres(url) => {
            let pool = postgres::connect(url, &config.database).await?;
            info!("Using PostgreSQL storage");
            AppState {
                events: Arc::new(PostgresEventRepository::new(pool.clone())),
                messages: Arc::new(PostgresMessageRepository::new(pool.clone())),
                tasks: Arc::new(PostgresTaskRepository::new(pool.clone())),
                vendors: Arc::new(PostgresVendorRepository::new(pool)),
                gateway,
                session_validator: Arc::new(validator),
                plans,
            }
        }
        Storage::Memory => {
            warn!("No database URL configured; data is kept in memory only");
            let store = Arc::new(InMemoryPlannerStore::new());
            AppState {
                events: store.clone(),
                messages: store.clone(),
                tasks: store.clone(),
                vendors: store,
                gateway,
                session_validator: Arc::new(validator),
                plans,
            }
        }
    };

    Ok(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Line-based planner chat. `/plan` prints what would be imported from the
/// latest reply.
async fn cmd_chat(config: &AppConfig, relay_url: &str, token: String) -> Result<()> {
    let client = RelayClient::new(relay_url, Secret::new(token), config.ai.connect_timeout())?;
    let mut state = PlannerState::new();
    let mut event_id = None;

    if let Some(welcome) = state.messages().first() {
        println!("{}\n", welcome.content);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "/plan" {
            print_plan(&state);
            continue;
        }
        if line == "/save" {
            event_id = save_chat(&client, &state, event_id).await;
            continue;
        }

        state = state.reduce(PlannerAction::Submit(line.to_string()));
        state = stream_reply(&client, state).await?;

        if let Some(notice) = state.notice() {
            println!("\n[{}] {}", notice.title, notice.description);
        }
        println!();
    }

    Ok(())
}

async fn stream_reply(client: &RelayClient, mut state: PlannerState) -> Result<PlannerState> {
    let mut deltas = match client.stream_chat(state.messages()).await {
        Ok(deltas) => deltas,
        Err(e) => {
            warn!(error = %e, "Relay request failed");
            return Ok(state.reduce(PlannerAction::Failed(e.failure())));
        }
    };

    while let Some(delta) = deltas.next().await {
        match delta {
            Ok(text) => {
                print!("{}", text);
                std::io::stdout().flush()?;
                state = state.reduce(PlannerAction::Delta(text));
            }
            Err(e) => {
                warn!(error = %e, "Relay stream failed");
                return Ok(state.reduce(PlannerAction::Failed(e.failure())));
            }
        }
    }

    Ok(state.reduce(PlannerAction::Finished))
}

async fn save_chat(
    client: &RelayClient,
    state: &PlannerState,
    event_id: Option<EventId>,
) -> Option<EventId> {
    let messages = state.saveable_messages();
    if messages.is_empty() {
        println!("Nothing to save yet.");
        return event_id;
    }

    match client.save_conversation(event_id, messages).await {
        Ok(saved) => {
            info!(event_id = %saved.event_id, saved = saved.messages_saved, "Conversation saved");
            println!("Saved to event {}.", saved.event_id);
            Some(saved.event_id)
        }
        Err(e) => {
            warn!(error = %e, "Saving conversation failed");
            println!("Could not save: {}", e);
            event_id
        }
    }
}

fn print_plan(state: &PlannerState) {
    let tasks = extract_tasks(state.messages());
    let vendors = extract_vendors(state.messages());

    if tasks.is_empty() && vendors.is_empty() {
        println!("No plan yet.");
        return;
    }
    println!("Tasks:");
    for task in &tasks {
        println!("  [ ] {}", task);
    }
    println!("Vendor categories:");
    for vendor in &vendors {
        println!("  - {}", vendor);
    }
}

mod logging;
mod settings;

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use settings::Settings;
use tcgcollector_api::{Client, Request};

/// Command line client for the TCG Collector API.
#[derive(Debug, clap::Parser)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Check that the service is up
    Health,
    /// Show the authenticated user
    Me,
    /// Show user and premium statistics
    Statistics,
    Cards {
        #[command(subcommand)]
        command: CardsCommand,
    },
    Sets {
        #[command(subcommand)]
        command: SetsCommand,
    },
    #[clap(alias = "col")]
    Collections {
        #[command(subcommand)]
        command: CollectionsCommand,
    },
}

#[derive(Debug, clap::Subcommand)]
enum CardsCommand {
    /// List cards, optionally filtered
    #[clap(alias = "ls")]
    List {
        #[arg(long)]
        set_id: Option<i64>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        rarity: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Show a single card
    Get { id: i64 },
}

#[derive(Debug, clap::Subcommand)]
enum SetsCommand {
    /// List sets, optionally filtered
    #[clap(alias = "ls")]
    List {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Show a single set
    Get { id: i64 },
}

#[derive(Debug, clap::Subcommand)]
enum CollectionsCommand {
    /// List collections, optionally filtered
    #[clap(alias = "ls")]
    List {
        #[arg(long)]
        user_id: Option<i64>,
        #[arg(long)]
        public: Option<bool>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = <Args as clap::Parser>::parse();
    logging::init_logging();

    let settings = Settings::new().context("failed to load settings")?;
    settings
        .validate()
        .map_err(|e| anyhow!("invalid settings: {e}"))?;
    if settings.api_key.is_empty() {
        tracing::warn!("no API key configured, requests will be unauthenticated");
    }

    let client = Client::builder(&settings.api_key)
        .base_url(&settings.base_url)
        .timeout(settings.timeout())
        .build();
    tracing::debug!(base_url = %client.base_url(), "client ready");

    run(&client, args.command).await
}

async fn run(client: &Client, command: Command) -> Result<()> {
    match command {
        Command::Health => {
            let health = client
                .send(Request::system().health())
                .await
                .context("failed to check health")?;
            print_json(&health)
        }
        Command::Me => {
            let user = client
                .send(Request::users().me())
                .await
                .context("failed to fetch current user")?;
            print_json(&user)
        }
        Command::Statistics => {
            let statistics = client
                .send(Request::system().statistics())
                .await
                .context("failed to fetch statistics")?;
            print_json(&statistics)
        }
        Command::Cards { command } => run_cards(client, command).await,
        Command::Sets { command } => run_sets(client, command).await,
        Command::Collections { command } => run_collections(client, command).await,
    }
}

async fn run_cards(client: &Client, command: CardsCommand) -> Result<()> {
    match command {
        CardsCommand::List {
            set_id,
            name,
            rarity,
            page,
            page_size,
        } => {
            let mut request = Request::cards().list();
            if let Some(set_id) = set_id {
                request = request.set_id(set_id);
            }
            if let Some(name) = name {
                request = request.name(name);
            }
            if let Some(rarity) = rarity {
                request = request.rarity(rarity);
            }
            if let Some(page) = page {
                request = request.page(page);
            }
            if let Some(page_size) = page_size {
                request = request.page_size(page_size);
            }

            let cards = client.send(request).await.context("failed to list cards")?;
            print_json(&cards)
        }
        CardsCommand::Get { id } => {
            let card = client
                .send(Request::cards().get(id))
                .await
                .with_context(|| format!("failed to fetch card {id}"))?;
            print_json(&card)
        }
    }
}

async fn run_sets(client: &Client, command: SetsCommand) -> Result<()> {
    match command {
        SetsCommand::List {
            name,
            code,
            page,
            page_size,
        } => {
            let mut request = Request::sets().list();
            if let Some(name) = name {
                request = request.name(name);
            }
            if let Some(code) = code {
                request = request.code(code);
            }
            if let Some(page) = page {
                request = request.page(page);
            }
            if let Some(page_size) = page_size {
                request = request.page_size(page_size);
            }

            let sets = client.send(request).await.context("failed to list sets")?;
            print_json(&sets)
        }
        SetsCommand::Get { id } => {
            let set = client
                .send(Request::sets().get(id))
                .await
                .with_context(|| format!("failed to fetch set {id}"))?;
            print_json(&set)
        }
    }
}

async fn run_collections(client: &Client, command: CollectionsCommand) -> Result<()> {
    match command {
        CollectionsCommand::List {
            user_id,
            public,
            page,
            page_size,
        } => {
            let mut request = Request::collections().list();
            if let Some(user_id) = user_id {
                request = request.user_id(user_id);
            }
            if let Some(public) = public {
                request = request.is_public(public);
            }
            if let Some(page) = page {
                request = request.page(page);
            }
            if let Some(page_size) = page_size {
                request = request.page_size(page_size);
            }

            let collections = client
                .send(request)
                .await
                .context("failed to list collections")?;
            print_json(&collections)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{json}");
    Ok(())
}

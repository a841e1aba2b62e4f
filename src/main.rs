use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use rubixscan::{
    client::RubixClient,
    domain::{CustomNetwork, FetchError, NetworkConfig, TokenInfo},
    state::{AppConfig, AppPaths, FileHistoryStore, HistoryStore, SearchHint, SearchRouter},
};

// rubixscan version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// rubixscan - explore DIDs, tokens and transactions on the Rubix network
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Network to use for this run (mainnet, testnet, localnet or a custom name)
    #[arg(short, long, global = true)]
    network: Option<String>,

    /// Explorer API base URL, overriding the selected network
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a search query and print the explorer route
    Search {
        /// DID, token id, transaction hash or block number
        query: String,
        /// Restrict the search to one resource type
        #[arg(short = 't', long = "type", value_enum, default_value_t = SearchType::All)]
        search_type: SearchType,
        /// Also look the query up through the explorer API
        #[arg(short, long)]
        fetch: bool,
    },
    /// Look up an identifier and print its token information
    Lookup {
        /// Identifier to look up
        id: String,
    },
    /// Show recent searches
    History {
        /// Forget all recent searches
        #[arg(long)]
        clear: bool,
    },
    /// Show or change the saved network selection
    Network {
        #[command(subcommand)]
        action: Option<NetworkAction>,
    },
    /// Display version
    Version,
}

#[derive(Subcommand)]
enum NetworkAction {
    /// List built-in and custom networks
    List,
    /// Select and save a network
    Use {
        /// Network name
        name: String,
    },
    /// Register a custom network
    Add {
        /// Display name
        name: String,
        /// Explorer API base URL
        api_url: String,
    },
    /// Remove a custom network
    Remove {
        /// Display name
        name: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SearchType {
    All,
    Did,
    Token,
    Transaction,
    Block,
}

impl From<SearchType> for SearchHint {
    fn from(value: SearchType) -> Self {
        match value {
            SearchType::All => Self::All,
            SearchType::Did => Self::Did,
            SearchType::Token => Self::Token,
            SearchType::Transaction => Self::Transaction,
            SearchType::Block => Self::Block,
        }
    }
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging FIRST
    init_tracing();
    color_eyre::install()?;

    let cli = Cli::parse();
    let mut config = AppConfig::load();

    match cli.command {
        Commands::Search {
            ref query,
            search_type,
            fetch,
        } => {
            let store = FileHistoryStore::from_paths(&AppPaths::new())?;
            let router = SearchRouter::new(store);
            let target = router
                .route_text(query, Some(search_type.into()))
                .map_err(FetchError::into_report)?;

            println!("kind:  {}", target.resource_kind);
            println!("route: {}", target.route_path);

            if fetch {
                let network = resolve_network(&cli, &config)?;
                let client = RubixClient::from_config(&network).map_err(FetchError::into_report)?;
                print_lookup(&client, query.trim()).await?;
            }
        }
        Commands::Lookup { ref id } => {
            let network = resolve_network(&cli, &config)?;
            let client = RubixClient::from_config(&network).map_err(FetchError::into_report)?;
            print_lookup(&client, id.trim()).await?;
        }
        Commands::History { clear } => {
            let store = FileHistoryStore::from_paths(&AppPaths::new())?;
            if clear {
                store.clear()?;
                println!("Search history cleared.");
            } else {
                let history = store.load()?;
                if history.is_empty() {
                    println!("No recent searches.");
                }
                for (i, entry) in history.iter().enumerate() {
                    println!("{:>2}. {entry}", i + 1);
                }
            }
        }
        Commands::Network { ref action } => match action {
            None => {
                let network = resolve_network(&cli, &config)?;
                println!("{} ({})", network.name(), network.api_url());
            }
            Some(NetworkAction::List) => {
                for network in config.all_networks() {
                    let marker = if network == config.network { "*" } else { " " };
                    println!("{marker} {:<10} {}", network.name(), network.api_url());
                }
            }
            Some(NetworkAction::Use { name }) => {
                config.select_network(name)?;
                config.save()?;
                println!("Using {}", config.network.name());
            }
            Some(NetworkAction::Add { name, api_url }) => {
                config.add_custom_network(CustomNetwork::new(name, api_url))?;
                config.save()?;
                println!("Added network '{name}'");
            }
            Some(NetworkAction::Remove { name }) => {
                config.delete_custom_network(name)?;
                config.save()?;
                println!("Removed network '{name}'");
            }
        },
        Commands::Version => {
            println!("rubixscan v{VERSION}");
            println!("A command-line explorer for the Rubix network");
        }
    }

    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Picks the network for this run: `--api-url`, then `--network`, then the
/// saved selection.
fn resolve_network(cli: &Cli, config: &AppConfig) -> Result<NetworkConfig> {
    if let Some(api_url) = &cli.api_url {
        return Ok(NetworkConfig::Custom(CustomNetwork::new("custom", api_url)));
    }
    if let Some(name) = &cli.network {
        let mut selected = config.clone();
        selected.select_network(name)?;
        return Ok(selected.network);
    }
    Ok(config.network.clone())
}

async fn print_lookup(client: &RubixClient, id: &str) -> Result<()> {
    tracing::debug!("Looking up '{id}' on {}", client.api_url());
    let info = match client.lookup(id).await {
        Ok(info) => info,
        Err(FetchError::NotFound { .. }) => {
            println!("'{id}' was not found on this network.");
            return Ok(());
        }
        Err(e) => return Err(color_eyre::eyre::eyre!("Failed to load '{id}': {e}")),
    };

    if let TokenInfo::Unknown { .. } = info {
        println!("No detailed information available for '{id}'.");
    } else {
        println!("{}", serde_json::to_string_pretty(&info)?);
    }
    Ok(())
}

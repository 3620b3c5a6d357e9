use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use pricescout::api::{self, Backend, MockCatalog, ProductSource, SearchClient};
use pricescout::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use pricescout::models::{AppState, ProductId, SearchQuery};
use pricescout::presenter::{ResultsKind, SearchPresenter, TerminalView};
use pricescout::routes::build_router;
use pricescout::utils::new_table;

fn fail(msg: &str, detail: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", yansi::Paint::new(msg).red(), detail);
    process::exit(1);
}

fn build_backend(mock: bool) -> Backend {
    if mock {
        return Backend::Mock(MockCatalog::new());
    }
    match SearchClient::from_base_url(config::get_search_api_base_url()) {
        Ok(client) => Backend::Remote(client),
        Err(e) => fail("Failed to create HTTP client", e),
    }
}

fn build_state_from_env(env_file: Option<&str>, mock: bool) -> AppState {
    config::load_env_file(env_file);
    let empty_query = config::get_empty_query_policy().unwrap_or_else(|e| fail("Invalid configuration", e));
    let stale = config::get_stale_policy().unwrap_or_else(|e| fail("Invalid configuration", e));

    let mut state = AppState::new(build_backend(mock));
    state.public_base_url = config::get_public_base_url();
    state.empty_query = empty_query;
    state.stale = stale;
    state
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                fail(&format!("Failed to read custom stylesheet at {}", path), e);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            fail("Invalid host/port format", e);
        }
    };
    let backend_label = if state.backend.is_mock() { "mock catalog".to_string() } else { state.backend_hostname() };
    let app = build_router(state);
    tracing::info!(%addr, backend = %backend_label, "Starting pricescout server");
    println!(
        "{} {} ({})",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan(),
        backend_label
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                fail("Server error", e);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Stop the process using this port, or pass a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

#[derive(Parser)]
#[command(
    name = "pricescout",
    author,
    version,
    about = "Search the price tracker catalog",
    long_about = r#"pricescout: search the price tracker's product catalog from the browser or the terminal.

The search backend is configured with SEARCH_API_BASE_URL (environment or `--env-file`).
Pass `--mock` to any command to use the built-in demo catalog instead.

Examples:
  1) Run the web front end:
      pricescout serve --host 127.0.0.1 --port 8080
  2) One-off search:
      pricescout search "wireless headphones"
  3) Price history of a product:
      pricescout history 42
"#,
    after_help = "Use `pricescout <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
    /// Use the built-in mock catalog instead of the backend
    #[arg(long, global = true)]
    mock: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Search products and print the results
    #[command(long_about = "Run one search through the same presenter the web page uses. Exits with status 1 when the search ends in an error.")]
    Search {
        /// Query text (an empty query lists everything unless PRESENTER_EMPTY_QUERY=ignore)
        #[arg(default_value = "")]
        query: String,
    },
    /// Print autocomplete suggestions for a prefix
    Suggest { q: String },
    /// Print the recorded price history of a product
    History { product_id: String },
    /// Validate configuration and backend connectivity
    #[command(long_about = "Validate the presenter settings and check that the search backend answers a query with a well-formed response.")]
    CheckConfig,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }
    if cli.silent {
        api::set_silent(true);
    }

    let state = build_state_from_env(cli.env_file.as_deref(), cli.mock);

    // No subcommand: serve with defaults
    let command = cli.command.unwrap_or(Commands::Serve {
        host: DEFAULT_HOST.to_string(),
        port: DEFAULT_PORT,
        stylesheet: None,
    });

    match command {
        Commands::Serve { host, port, stylesheet } => {
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::Search { query } => {
            let presenter = SearchPresenter::new(state.backend.clone(), TerminalView::new())
                .with_diagnostics(state.diagnostics.clone())
                .with_empty_query_policy(state.empty_query);
            presenter.search(&query).await;
            match presenter.view().last_kind() {
                ResultsKind::Error => {
                    if let Some(d) = presenter.diagnostics().latest() {
                        eprintln!("{}", yansi::Paint::new(d.cause).dim());
                    }
                    process::exit(1);
                }
                ResultsKind::Blank => {
                    eprintln!("{}", yansi::Paint::new("Empty query ignored").yellow());
                }
                _ => {}
            }
        }
        Commands::Suggest { q } => match state.backend.suggest(&q).await {
            Ok(s) if s.suggestions.is_empty() => println!("{}", yansi::Paint::new("(no suggestions)").dim()),
            Ok(s) => {
                for name in s.suggestions {
                    println!("{}", name);
                }
            }
            Err(e) => fail("Failed to fetch suggestions", e),
        },
        Commands::History { product_id } => {
            let id = ProductId::from(product_id.as_str());
            match state.backend.price_history(&id).await {
                Ok(h) if !h.success => fail("Error", h.error.unwrap_or_default()),
                Ok(h) if h.history.is_empty() => {
                    println!("{}", yansi::Paint::new(format!("No price history for product {}", id)).yellow())
                }
                Ok(h) => {
                    let mut table = new_table();
                    table.set_header(vec!["Date", "Price"]);
                    for point in &h.history {
                        table.add_row(vec![point.date.clone(), format!("${:.2}", point.price)]);
                    }
                    println!("\n{table}\n");
                }
                Err(e) => fail("Failed to fetch price history", e),
            }
        }
        Commands::CheckConfig => {
            if let Backend::Remote(client) = state.backend.as_ref() {
                if std::env::var("SEARCH_API_BASE_URL").map(|v| v.trim().is_empty()).unwrap_or(true) {
                    eprintln!(
                        "{} {}",
                        yansi::Paint::new("SEARCH_API_BASE_URL is not configured; using").yellow(),
                        client.base_url()
                    );
                }
            }
            println!("empty queries: {:?}, superseded results: {:?}", state.empty_query, state.stale);
            match state.backend.search(&SearchQuery::new("")).await {
                Ok(resp) if resp.success => {
                    println!(
                        "{}",
                        yansi::Paint::new(format!("Configuration looks valid ({} products listed)", resp.products.len())).green()
                    );
                }
                Ok(resp) => fail("Backend reported an error", resp.error.unwrap_or_default()),
                Err(e) => fail("Configuration appears invalid", e),
            }
        }
    }
}

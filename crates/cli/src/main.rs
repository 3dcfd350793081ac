//! Chapter 2 CLI - storefront state from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! c2-cli catalog products --category Hoodies
//! c2-cli catalog look 5
//!
//! # Cart and wishlist
//! c2-cli cart add 12 --color '#2D2D2D' --size M
//! c2-cli cart add-look 5 --color 10=#A0826E
//! c2-cli wishlist toggle 8
//!
//! # Account
//! c2-cli auth login --email demo@example.com --password secret
//! c2-cli prefs set Hoodies
//! ```
//!
//! # Commands
//!
//! - `catalog` - Products, featured listing, categories and looks
//! - `cart` - Cart line items
//! - `wishlist` - Saved products
//! - `auth` - Mock login, signup and logout
//! - `prefs` - Preferred category
//! - `review` - Submit a product review
//! - `newsletter` - Subscribe to the newsletter
//! - `contact` - Send the contact form

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chapter_two_core::{LookId, ProductId};
use chapter_two_storefront::{
    AppError, AppState, RecordingNotifier, SharedNotifier, StorefrontConfig,
};

mod commands;

use commands::ColorChoice;

#[derive(Parser)]
#[command(name = "c2-cli")]
#[command(author, version, about = "Chapter 2 storefront CLI")]
struct Cli {
    /// Directory holding saved state (overrides `CHAPTER_TWO_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse products and looks
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Sign in, sign up or sign out
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Manage shopper preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
    /// Submit a review as the signed-in shopper
    Review {
        /// Product ID
        product_id: ProductId,

        /// Stars, 1-5
        #[arg(short, long)]
        rating: u8,

        /// Review text
        #[arg(short, long)]
        comment: String,
    },
    /// Subscribe to the newsletter
    Newsletter {
        /// Email address
        email: String,
    },
    /// Send a message through the contact form
    Contact {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        subject: String,

        #[arg(short, long)]
        message: String,
    },
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List products, optionally in one category
    Products {
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one product with its reviews
    Product { id: ProductId },
    /// Featured listing ordered by the preferred category
    Featured,
    /// List categories
    Categories,
    /// List looks
    Looks,
    /// Show a look with its products and sizes
    Look { id: LookId },
}

#[derive(Subcommand)]
pub enum CartAction {
    /// Show the cart
    Show,
    /// Add one unit of a product
    Add {
        id: ProductId,

        #[arg(short, long)]
        color: Option<String>,

        #[arg(short, long)]
        size: Option<String>,
    },
    /// Remove every line of a product
    Remove { id: ProductId },
    /// Set the quantity of a product (0 or less removes it)
    Set {
        id: ProductId,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
    /// Add every product of a look
    AddLook {
        id: LookId,

        /// Colour for one product, as `<product-id>=<colour>`
        #[arg(short, long = "color")]
        colors: Vec<ColorChoice>,
    },
    /// Toggle the cart sidebar
    Toggle,
}

#[derive(Subcommand)]
pub enum WishlistAction {
    /// Show the wishlist
    Show,
    /// Save a product
    Add { id: ProductId },
    /// Remove a saved product
    Remove { id: ProductId },
    /// Save a product, or remove it if already saved
    Toggle { id: ProductId },
    /// Move a saved product into the cart
    MoveToCart { id: ProductId },
    /// Remove every saved product
    Clear,
}

#[derive(Subcommand)]
pub enum AuthAction {
    /// Sign in
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long, default_value = "")]
        password: String,
    },
    /// Create an account
    Signup {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long, default_value = "")]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in shopper
    Whoami,
}

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Show preferences
    Show,
    /// Set the preferred category (`All` clears it)
    Set { category: String },
    /// Clear the preferred category
    Clear,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "chapter_two_storefront=info,chapter_two_cli=info".into());

    // Logs go to stderr so command output stays clean
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = StorefrontConfig::from_env();
    let _sentry_guard = config.as_ref().ok().and_then(init_sentry);
    init_tracing();

    let mut config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let notifier = Arc::new(RecordingNotifier::new());
    let result = run(cli.command, config, &notifier).await;
    commands::output::print_notices(&notifier.take());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.report();
            tracing::error!("Command failed: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: Commands,
    config: StorefrontConfig,
    notifier: &Arc<RecordingNotifier>,
) -> Result<(), AppError> {
    let shared: SharedNotifier = Arc::<RecordingNotifier>::clone(notifier);
    let mut state = AppState::open_with_notifier(config, shared)?;

    match command {
        Commands::Catalog { action } => commands::catalog::run(&state, action)?,
        Commands::Cart { action } => commands::cart::run(&mut state, action)?,
        Commands::Wishlist { action } => commands::wishlist::run(&mut state, action)?,
        Commands::Auth { action } => commands::account::auth(&mut state, action).await?,
        Commands::Prefs { action } => commands::account::prefs(&mut state, action),
        Commands::Review {
            product_id,
            rating,
            comment,
        } => commands::forms::review(&mut state, product_id, rating, &comment).await?,
        Commands::Newsletter { email } => commands::forms::newsletter(&state, &email).await?,
        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => {
            commands::forms::contact(&state, name, email, subject, message).await?;
        }
    }
    Ok(())
}

//! Cosmic Cart CLI - Browse the catalog, manage the cart, price the order.
//!
//! # Usage
//!
//! ```bash
//! # List catalog products
//! cosmic-cart products
//!
//! # Add product 3 to the cart (run twice for quantity 2)
//! cosmic-cart add 3
//!
//! # Remove one unit of product 3
//! cosmic-cart remove 3
//!
//! # Show the cart and price details, optionally with a coupon
//! cosmic-cart show --coupon SAVE10
//!
//! # List available coupons
//! cosmic-cart coupons
//!
//! # Empty the cart
//! cosmic-cart clear
//! ```
//!
//! The cart is persisted under `COSMIC_CART_STORAGE_DIR` after every change.
//! Coupons apply to a single `show` and are never saved.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use cosmic_cart_core::ProductId;
use cosmic_cart_storefront::config::StorefrontConfig;
use cosmic_cart_storefront::error::AppError;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "cosmic-cart")]
#[command(author, version, about = "Cosmic Cart storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Products,
    /// Add one unit of a product to the cart
    Add {
        /// Catalog product ID
        id: ProductId,
    },
    /// Remove one unit of a product from the cart
    Remove {
        /// Catalog product ID
        id: ProductId,
    },
    /// Empty the cart
    Clear,
    /// Show the cart with its price details
    Show {
        /// Coupon code to apply (e.g. SAVE10)
        #[arg(short, long)]
        coupon: Option<String>,
    },
    /// List available coupons
    Coupons,
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
    // Logs go to stderr so command output stays clean on stdout
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cosmic_cart_storefront=warn,cosmic_cart_cli=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing();
            std::process::exit(fail(&AppError::from(e)));
        }
    };

    // Sentry must be initialized before the tracing subscriber
    let sentry_guard = init_sentry(&config);
    init_tracing();

    let code = match run(cli, &config).await {
        Ok(()) => 0,
        Err(e) => fail(&e),
    };

    // Flush pending Sentry events before exiting
    drop(sentry_guard);
    std::process::exit(code);
}

/// Report a failed command and return its exit code.
#[allow(clippy::print_stderr)]
fn fail(err: &AppError) -> i32 {
    err.report();
    eprintln!("error: {err}");
    err.exit_code()
}

async fn run(cli: Cli, config: &StorefrontConfig) -> Result<(), AppError> {
    match cli.command {
        Commands::Products => commands::catalog::products(config).await?,
        Commands::Add { id } => commands::cart::add(config, id).await?,
        Commands::Remove { id } => commands::cart::remove(config, id)?,
        Commands::Clear => commands::cart::clear(config)?,
        Commands::Show { coupon } => commands::cart::show(config, coupon.as_deref()),
        Commands::Coupons => commands::cart::coupons(),
    }
    Ok(())
}

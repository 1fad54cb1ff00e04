//! Corner Market CLI - Cart inspection and mutation tools.
//!
//! # Usage
//!
//! ```bash
//! # Add a product to the cart
//! cornermarket add --id prod-1 --title "Beanie" --price 12.99
//!
//! # Change quantities
//! cornermarket increment prod-1
//! cornermarket decrement prod-1
//!
//! # Print the floating cart summary
//! cornermarket show
//! ```
//!
//! The cart is persisted under `CART_STORAGE_DIR` (default:
//! `~/.cornermarket`), so state carries across invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cornermarket")]
#[command(author, version, about = "Corner Market cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a product to the cart
    Add {
        /// Product identifier
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(long)]
        title: String,

        /// Display image URL
        #[arg(long, default_value = "")]
        image_url: String,

        /// Unit price in dollars (e.g., 12.99)
        #[arg(long)]
        price: String,
    },
    /// Increase a product's quantity by one
    Increment {
        /// Product identifier
        id: String,
    },
    /// Decrease a product's quantity by one (removes it at zero)
    Decrement {
        /// Product identifier
        id: String,
    },
    /// Print the floating cart summary
    Show,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Add {
            id,
            title,
            image_url,
            price,
        } => commands::add(&id, &title, &image_url, &price).await?,
        Commands::Increment { id } => commands::increment(&id).await?,
        Commands::Decrement { id } => commands::decrement(&id).await?,
        Commands::Show => commands::show().await?,
    }

    Ok(())
}

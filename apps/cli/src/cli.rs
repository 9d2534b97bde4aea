//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "angelica")]
#[command(author, version, about = "Angelica Shop cart and wishlist")]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Slot directory, overriding config and environment
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Build the WhatsApp order message and link
    Checkout,
}

#[derive(Debug, Subcommand)]
pub enum CartAction {
    /// Show lines, item count and total
    Show,
    /// Add one unit of a product variant
    Add {
        #[command(flatten)]
        item: ItemArgs,

        /// Size label
        #[arg(short, long)]
        size: String,

        /// Color label
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Add one unit from a CMS product record (JSON file)
    AddProduct {
        /// Path to the product JSON
        product: PathBuf,

        #[arg(short, long)]
        size: String,

        #[arg(short, long)]
        color: Option<String>,
    },
    /// Remove lines for a product and size (one color only with --color)
    Remove {
        id: String,

        #[arg(short, long)]
        size: String,

        #[arg(short, long)]
        color: Option<String>,
    },
    /// Change the quantity of a product and size by DELTA
    Update {
        id: String,

        #[arg(short, long)]
        size: String,

        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Empty the cart
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum WishlistAction {
    /// Show saved products
    Show,
    /// Save a product
    Add {
        #[command(flatten)]
        item: ItemArgs,
    },
    /// Forget a saved product
    Remove { id: String },
    /// Save a product, or forget it if already saved
    Toggle {
        #[command(flatten)]
        item: ItemArgs,
    },
    /// Move a saved product into the cart
    Move {
        id: String,

        /// Size label (defaults to the configured size)
        #[arg(short, long)]
        size: Option<String>,
    },
}

/// Product snapshot given on the command line.
#[derive(Debug, Clone, Args)]
pub struct ItemArgs {
    /// Product id
    #[arg(long)]
    pub id: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    /// Unit price in currency units, e.g. 129.90
    #[arg(long)]
    pub price: f64,

    /// Image URL
    #[arg(long, default_value = "")]
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_delta() {
        let cli = Cli::parse_from(["angelica", "cart", "update", "p1", "--size", "M", "-1"]);
        match cli.command {
            Commands::Cart {
                action: CartAction::Update { id, size, delta },
            } => {
                assert_eq!(id, "p1");
                assert_eq!(size, "M");
                assert_eq!(delta, -1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from([
            "angelica", "wishlist", "move", "p1", "--json", "--data-dir", "/tmp/x",
        ]);
        assert!(cli.json);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(
            cli.command,
            Commands::Wishlist {
                action: WishlistAction::Move { size: None, .. }
            }
        ));
    }
}

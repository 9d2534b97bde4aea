//! # Angelica CLI Library
//!
//! The `angelica` binary's logic: argument types, configuration, errors
//! and one function per command.
//!
//! ## Module Organization
//! ```text
//! angelica_cli/
//! ├── lib.rs          ◄─── You are here (run & tracing setup)
//! ├── cli.rs          ◄─── clap argument types
//! ├── config.rs       ◄─── AppConfig (defaults → TOML → env)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Report trait, argument parsing
//! │   ├── cart.rs     ◄─── Cart commands
//! │   ├── wishlist.rs ◄─── Wishlist commands
//! │   └── checkout.rs ◄─── WhatsApp hand-off
//! └── error.rs        ◄─── AppError for commands
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use angelica_store::{FileStorage, SlotStorage, Storefront};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{CartAction, Cli, Commands, WishlistAction};
use commands::Report;
use config::AppConfig;
use error::{AppError, AppResult};

/// Runs one CLI invocation and returns the text to print.
///
/// ## Steps
/// 1. Load `AppConfig` (`--data-dir` wins over file and environment)
/// 2. Open a `Storefront` over the slot directory (hydrates both stores)
/// 3. Execute the command and render its result
pub fn run(cli: Cli) -> AppResult<String> {
    let mut config = AppConfig::load(cli.config.clone())?;
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = Some(dir);
    }

    let data_dir = config.resolve_data_dir()?;
    info!(data_dir = %data_dir.display(), "Opening storefront");

    let mut storefront = Storefront::open(FileStorage::new(data_dir));
    execute(&mut storefront, &config, cli.command, cli.json)
}

/// Executes a parsed command against any slot backend.
pub fn execute<S: SlotStorage + Clone>(
    storefront: &mut Storefront<S>,
    config: &AppConfig,
    command: Commands,
    json: bool,
) -> AppResult<String> {
    debug!(?command, "Executing command");

    match command {
        Commands::Cart { action } => match action {
            CartAction::Show => output(&commands::cart::show(storefront), config, json),
            CartAction::Add { item, size, color } => output(
                &commands::cart::add(storefront, &item, &size, color)?,
                config,
                json,
            ),
            CartAction::AddProduct {
                product,
                size,
                color,
            } => output(
                &commands::cart::add_product(storefront, &product, &size, color.as_deref())?,
                config,
                json,
            ),
            CartAction::Remove { id, size, color } => output(
                &commands::cart::remove(storefront, &id, &size, color)?,
                config,
                json,
            ),
            CartAction::Update { id, size, delta } => output(
                &commands::cart::update(storefront, &id, &size, delta)?,
                config,
                json,
            ),
            CartAction::Clear => output(&commands::cart::clear(storefront)?, config, json),
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => output(&commands::wishlist::show(storefront), config, json),
            WishlistAction::Add { item } => {
                output(&commands::wishlist::add(storefront, &item)?, config, json)
            }
            WishlistAction::Remove { id } => {
                output(&commands::wishlist::remove(storefront, &id)?, config, json)
            }
            WishlistAction::Toggle { item } => {
                output(&commands::wishlist::toggle(storefront, &item)?, config, json)
            }
            WishlistAction::Move { id, size } => {
                let size = size.unwrap_or_else(|| config.default_size.clone());
                output(
                    &commands::wishlist::move_to_cart(storefront, &id, &size)?,
                    config,
                    json,
                )
            }
        },
        Commands::Checkout => output(
            &commands::checkout::checkout(storefront, config)?,
            config,
            json,
        ),
    }
}

fn output<R: Report>(report: &R, config: &AppConfig, json: bool) -> AppResult<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(report.render(config))
    }
}

/// Text printed for a failed command.
///
/// With `--json` this is the serialized [`AppError`] (printed on stdout,
/// like a successful result); otherwise a one-line message for stderr.
pub fn render_error(err: &AppError, json: bool) -> String {
    if json {
        if let Ok(body) = serde_json::to_string_pretty(err) {
            return body;
        }
    }
    format!("Error: {}", err)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=angelica_store=trace` - Trace slot reads and writes only
/// - Default: INFO, DEBUG for the angelica crates
///
/// Logs go to stderr so command output stays pipeable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,angelica=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use angelica_store::MemoryStorage;
    use clap::Parser;

    fn exec(storefront: &mut Storefront<MemoryStorage>, args: &[&str]) -> AppResult<String> {
        let cli = Cli::parse_from(std::iter::once("angelica").chain(args.iter().copied()));
        execute(storefront, &AppConfig::default(), cli.command, cli.json)
    }

    #[test]
    fn test_wishlist_to_checkout_flow() {
        let mut sf = Storefront::open(MemoryStorage::new());

        exec(
            &mut sf,
            &["wishlist", "add", "--id", "p1", "--name", "Vestido Lino", "--price", "129.9"],
        )
        .unwrap();
        exec(&mut sf, &["wishlist", "move", "p1"]).unwrap();

        // The configured default size was used.
        assert_eq!(sf.cart().cart().lines()[0].size, "M");
        assert_eq!(sf.wishlist().wishlist_count(), 0);

        let out = exec(&mut sf, &["checkout"]).unwrap();
        assert!(out.contains("▪️ 1x Vestido Lino (Talla: M)"));
        assert!(out.contains("https://wa.me/51906005773?text="));
    }

    #[test]
    fn test_json_output() {
        let mut sf = Storefront::open(MemoryStorage::new());
        let out = exec(
            &mut sf,
            &[
                "cart", "add", "--id", "p1", "--name", "Top", "--price", "49.9", "-s", "S",
                "--json",
            ],
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["size"], "S");
    }

    #[test]
    fn test_errors_propagate() {
        let mut sf = Storefront::open(MemoryStorage::new());
        let err = exec(&mut sf, &["checkout"]).unwrap_err();
        assert_eq!(err.code, error::ErrorCode::EmptyCart);

        let err = exec(&mut sf, &["wishlist", "move", "p1"]).unwrap_err();
        assert_eq!(err.code, error::ErrorCode::NotFound);
    }

    #[test]
    fn test_missing_line_is_not_an_error() {
        let mut sf = Storefront::open(MemoryStorage::new());
        let out = exec(&mut sf, &["cart", "update", "p1", "-s", "M", "1", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["count"], 0);

        exec(&mut sf, &["cart", "remove", "p1", "-s", "M"]).unwrap();
        exec(&mut sf, &["wishlist", "remove", "p1"]).unwrap();
    }

    #[test]
    fn test_render_error() {
        let mut sf = Storefront::open(MemoryStorage::new());
        let err = exec(&mut sf, &["checkout", "--json"]).unwrap_err();

        let value: serde_json::Value = serde_json::from_str(&render_error(&err, true)).unwrap();
        assert_eq!(value["code"], "EMPTY_CART");
        assert_eq!(value["message"], "Cannot check out an empty cart");

        assert_eq!(
            render_error(&err, false),
            "Error: EMPTY_CART: Cannot check out an empty cart"
        );
    }

    #[test]
    fn test_run_uses_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().to_str().unwrap();
        let config_path = dir.path().join("missing.toml");
        let config = config_path.to_str().unwrap();

        let add = Cli::parse_from([
            "angelica", "--config", config, "--data-dir", data_dir, "wishlist", "toggle",
            "--id", "p3", "--name", "Falda", "--price", "70",
        ]);
        run(add).unwrap();
        assert!(dir.path().join("angelica-wishlist.json").exists());

        let show = Cli::parse_from([
            "angelica", "--config", config, "--data-dir", data_dir, "wishlist", "show",
        ]);
        assert!(run(show).unwrap().contains("Falda [p3]"));
    }
}

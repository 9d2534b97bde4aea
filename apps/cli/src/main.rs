//! Angelica Shop CLI - cart, wishlist and WhatsApp checkout from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add a dress in size M to the cart
//! angelica cart add --id p1 --name "Vestido Lino" --price 129.90 --size M
//!
//! # Add from a CMS product record, checking sizes and stock
//! angelica cart add-product product.json --size S --color Rosa
//!
//! # Save for later, then move it to the cart
//! angelica wishlist add --id p2 --name "Top Seda" --price 49.90
//! angelica wishlist move p2 --size S
//!
//! # Print the WhatsApp order message and link
//! angelica checkout
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::Parser;

use angelica_cli::cli::Cli;

fn main() {
    angelica_cli::init_tracing();

    let cli = Cli::parse();
    let json = cli.json;

    match angelica_cli::run(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("Command failed: {e}");
            if json {
                println!("{}", angelica_cli::render_error(&e, true));
            } else {
                eprintln!("{}", angelica_cli::render_error(&e, false));
            }
            std::process::exit(1);
        }
    }
}

//! # CLI Adapter
//!
//! The clap-facing layer: translates subcommands into store operations and
//! prints the published state. This is the only module that knows the app
//! is a terminal program; no business rules live here, and a different
//! front end could replace it without touching `core`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::achievements;
use crate::core::coin::{Coin, ImageRef};
use crate::core::input::CoinForm;
use crate::core::store::CollectionStore;

#[derive(Parser)]
#[command(name = "numis", about = "Personal coin collecting catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the reference catalog
    Catalog,
    /// Show or edit the owned collection
    Collection {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Show or edit the wishlist
    Wishlist {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Add a new coin to the collection from field values
    Add(AddArgs),
    /// Show aggregate statistics
    Stats,
    /// Show achievement progress
    Achievements,
}

#[derive(Subcommand)]
pub enum ListAction {
    /// List entries
    List,
    /// Add a known coin by id (a unique prefix is enough)
    Add { id: String },
    /// Remove a coin by id (a unique prefix is enough)
    Remove { id: String },
}

/// The add-coin form as flags. Year and price stay text here; validation
/// is the form's job, not the argument parser's.
#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub country: String,
    #[arg(long)]
    pub denomination: String,
    #[arg(long)]
    pub year: String,
    #[arg(long)]
    pub material: String,
    #[arg(long = "price")]
    pub market_price: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long = "place", default_value = "")]
    pub purchase_place: String,
    #[arg(long, default_value = "")]
    pub condition: String,
    /// Bundled asset name for the coin picture
    #[arg(long, conflicts_with = "image_path")]
    pub image_name: Option<String>,
    /// Path to an imported photo (the file is referenced, never read)
    #[arg(long)]
    pub image_path: Option<PathBuf>,
}

pub fn run(store: &mut CollectionStore, command: Command) -> Result<(), String> {
    match command {
        Command::Catalog => {
            print_coins(store.catalog());
        }
        Command::Collection { action } => match action {
            ListAction::List => print_coins(store.collection()),
            ListAction::Add { id } => {
                // Promote a catalog coin; wished coins can be promoted too.
                let coin = find_coin(store.catalog(), &id)
                    .or_else(|_| find_coin(store.wishlist(), &id))?
                    .clone();
                report_add(store.add_to_collection(coin), "collection");
            }
            ListAction::Remove { id } => {
                let coin = find_coin(store.collection(), &id)?.clone();
                report_remove(store.remove_from_collection(&coin), "collection");
            }
        },
        Command::Wishlist { action } => match action {
            ListAction::List => print_coins(store.wishlist()),
            ListAction::Add { id } => {
                let coin = find_coin(store.catalog(), &id)
                    .or_else(|_| find_coin(store.collection(), &id))?
                    .clone();
                report_add(store.add_to_wishlist(coin), "wishlist");
            }
            ListAction::Remove { id } => {
                let coin = find_coin(store.wishlist(), &id)?.clone();
                report_remove(store.remove_from_wishlist(&coin), "wishlist");
            }
        },
        Command::Add(args) => {
            let form = form_from_args(args);
            let coin = form.build().ok_or_else(|| {
                "invalid coin: country, denomination and material are required; \
                 year must be a positive integer and price a non-negative number"
                    .to_string()
            })?;
            println!("Added {}", coin_line(&coin));
            store.add_to_collection(coin);
        }
        Command::Stats => {
            println!("Collected Coins:     {}", store.collection().len());
            println!("Coins in Wishlist:   {}", store.wishlist().len());
            println!("Total Market Price:  ${:.2}", store.total_market_price());
            println!("Unique Countries:    {}", store.unique_countries());
        }
        Command::Achievements => {
            for a in achievements::evaluate(store) {
                let mark = if a.achieved { "x" } else { " " };
                println!("[{mark}] {}", a.title);
            }
        }
    }
    Ok(())
}

/// Resolve an id prefix against a list of coins. Requires exactly one match.
fn find_coin<'a>(coins: &'a [Coin], id_prefix: &str) -> Result<&'a Coin, String> {
    let matches: Vec<&Coin> = coins
        .iter()
        .filter(|c| c.id.to_string().starts_with(id_prefix))
        .collect();
    match matches.as_slice() {
        [] => Err(format!("no coin matches id '{id_prefix}'")),
        [only] => Ok(*only),
        _ => Err(format!(
            "id '{id_prefix}' is ambiguous ({} matches)",
            matches.len()
        )),
    }
}

fn form_from_args(args: AddArgs) -> CoinForm {
    let image = match (args.image_name, args.image_path) {
        (Some(name), _) => ImageRef::Bundled(name),
        (None, Some(path)) => ImageRef::Imported(path),
        (None, None) => ImageRef::None,
    };
    CoinForm {
        country: args.country,
        denomination: args.denomination,
        year: args.year,
        material: args.material,
        market_price: args.market_price,
        description: args.description,
        purchase_place: args.purchase_place,
        condition: args.condition,
        image,
    }
}

fn short_id(coin: &Coin) -> String {
    coin.id.to_string()[..8].to_string()
}

fn coin_line(coin: &Coin) -> String {
    format!(
        "{}  {:<14} {:>4}  {:<14} {:>9}  {}",
        short_id(coin),
        coin.country,
        coin.year,
        coin.denomination,
        format!("${:.2}", coin.market_price),
        coin.condition,
    )
}

fn print_coins(coins: &[Coin]) {
    if coins.is_empty() {
        println!("(empty)");
        return;
    }
    for coin in coins {
        println!("{}", coin_line(coin));
    }
}

fn report_add(changed: bool, list: &str) {
    if changed {
        println!("Added to {list}.");
    } else {
        println!("Already in {list}.");
    }
}

fn report_remove(changed: bool, list: &str) {
    if changed {
        println!("Removed from {list}.");
    } else {
        println!("Not in {list}.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::static_catalog;
    use crate::test_support::coin;

    #[test]
    fn test_find_coin_by_unique_prefix() {
        let coins = static_catalog();
        let wanted = &coins[3];
        let prefix = &wanted.id.to_string()[..8];
        assert_eq!(find_coin(&coins, prefix).unwrap().id, wanted.id);
    }

    #[test]
    fn test_find_coin_rejects_unknown_and_ambiguous_prefixes() {
        let coins = static_catalog();
        assert!(find_coin(&coins, "zzzzzz").is_err());
        // Every v4/v5 uuid string starts with some hex digit; the empty
        // prefix matches all 20.
        assert!(find_coin(&coins, "").is_err());
    }

    #[test]
    fn test_find_coin_full_id_matches() {
        let c = coin("France", 1.0);
        let list = vec![c.clone()];
        assert_eq!(find_coin(&list, &c.id.to_string()).unwrap().id, c.id);
    }

    #[test]
    fn test_form_from_args_maps_image_flags() {
        let base = AddArgs {
            country: "France".to_string(),
            denomination: "10 Euro".to_string(),
            year: "2014".to_string(),
            material: "Silver".to_string(),
            market_price: "68.5".to_string(),
            description: String::new(),
            purchase_place: String::new(),
            condition: String::new(),
            image_name: Some("france_2014_gallic_rooster".to_string()),
            image_path: None,
        };
        let form = form_from_args(base);
        assert_eq!(
            form.image,
            ImageRef::Bundled("france_2014_gallic_rooster".to_string())
        );
        assert!(form.is_valid());
    }
}

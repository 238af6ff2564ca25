use crate::models::Category;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "critterpedia", version, about = "Track museum donations of bugs, fish, sea creatures and umbrellas")]
pub struct Cli {
    /// Config file to use instead of ~/.config/critterpedia/config.json
    #[arg(long, global = true, env = "CRITTERPEDIA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the checklist for this month
    List {
        /// Only show one category
        #[arg(long, short)]
        category: Option<Category>,
        /// Include critters that are out of season
        #[arg(long)]
        all_months: bool,
        /// Also show already donated rows of a category (repeatable)
        #[arg(long = "show-donated", value_name = "CATEGORY")]
        show_donated: Vec<Category>,
        /// Month to show, 1-12 (defaults to the current month)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        /// Hour of day for availability, 0-23 (defaults to the current hour)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
        hour: Option<u32>,
    },
    /// Mark an item as donated
    Donate { category: Category, name: String },
    /// Clear an item's donated mark
    Undonate { category: Category, name: String },
    /// Manage the critter catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Read or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// Add entries interactively until end of input
    Add { category: Category },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    Get { key: String },
    Set { key: String, value: String },
    Unset { key: String },
    List,
}

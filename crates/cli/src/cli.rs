use clap::{Parser, Subcommand};
use std::path::PathBuf;

use coin_dashboard_core::models::price::ChartRange;
use coin_dashboard_core::models::query::{GalleryFilter, SortField, SortOrder};

#[derive(Parser, Debug)]
#[command(author, version, about = "Cryptocurrency market overview", long_about = None)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Market table with search and sorting
    List {
        /// Case-insensitive match on name or symbol
        #[arg(short, long, default_value = "")]
        search: String,

        /// name, price, cap, change, rank or volume
        #[arg(long, default_value = "market_cap")]
        sort: SortField,

        /// asc or desc
        #[arg(long, default_value = "desc")]
        order: SortOrder,
    },

    /// Card gallery
    Gallery {
        /// all, gainers, losers, high-volume or top-cap
        #[arg(short, long, default_value = "all")]
        filter: GalleryFilter,
    },

    /// One coin with its price history
    Detail {
        /// CoinGecko id, e.g. "bitcoin"
        id: String,

        /// Chart range in days: 1, 7, 30 or 90
        #[arg(short, long, default_value = "7")]
        days: ChartRange,
    },

    /// Known coin categories
    Categories,
}

use clap::{Parser, Subcommand};
use orderdesk_order::{SortDirection, SortField};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "orderdesk", version, about = "Query and update a list of store orders")]
pub struct Cli {
    /// Order data file, overrides `source.path` from config
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Sort before querying: total, date, customer_name or address
    #[arg(long, global = true, value_name = "FIELD")]
    pub sort: Option<SortField>,

    /// ascending or descending
    #[arg(long, global = true, value_name = "DIRECTION")]
    pub direction: Option<SortDirection>,

    /// Print JSON instead of the text summary
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Every order
    List,
    /// Orders not yet fulfilled
    Unfulfilled,
    /// Orders already fulfilled
    Fulfilled,
    /// Orders whose customer name contains NAME (case-insensitive)
    Customer { name: String },
    /// Orders whose line item contains ITEM (case-insensitive)
    Item { item: String },
    /// Set an order's fulfillment status, then list all orders
    SetStatus {
        /// fulfilled or unfulfilled
        status: String,
        id: String,
    },
}

pub mod cli;

use anyhow::Context;
use cli::{Cli, Command};
use orderdesk_order::{render_summary, OrderCollection, SortDirection, SortField};
use orderdesk_store::{Config, JsonFileSource};

/// Load orders, apply the requested sort and command, and render the result.
/// The output ends with exactly one newline. Status changes only live for
/// this run.
pub fn run(cli: &Cli, config: &Config) -> anyhow::Result<String> {
    let path = cli.data.clone().unwrap_or_else(|| config.source.path.clone());
    let source = JsonFileSource::new(&path);
    let mut orders = OrderCollection::load(&source)
        .with_context(|| format!("Failed to load orders from {}", path.display()))?;

    if let Some((direction, field)) = resolve_sort(cli, config)? {
        orders.sort_by(direction, field);
    }

    let view = match &cli.command {
        Command::List => orders,
        Command::Unfulfilled => orders.unfulfilled(),
        Command::Fulfilled => orders.fulfilled(),
        Command::Customer { name } => orders.by_customer_name(name),
        Command::Item { item } => orders.by_item_name(item),
        Command::SetStatus { status, id } => {
            orders.change_status_str(status, id)?;
            tracing::info!("Order {} marked {}", id, status);
            orders
        }
    };

    if cli.json {
        let mut json = serde_json::to_string_pretty(&view)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(render_summary(&view)?)
    }
}

/// Command-line sort flags win over the configured default
fn resolve_sort(cli: &Cli, config: &Config) -> anyhow::Result<Option<(SortDirection, SortField)>> {
    let field = match cli.sort {
        Some(field) => Some(field),
        None => config
            .display
            .default_sort_field
            .as_deref()
            .map(str::parse::<SortField>)
            .transpose()
            .context("Invalid display.default_sort_field")?,
    };

    let Some(field) = field else {
        return Ok(None);
    };

    let direction = match cli.direction {
        Some(direction) => direction,
        None => config
            .display
            .default_sort_direction
            .parse::<SortDirection>()
            .context("Invalid display.default_sort_direction")?,
    };

    Ok(Some((direction, field)))
}

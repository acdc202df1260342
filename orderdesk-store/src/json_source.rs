use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use orderdesk_core::{OrderSource, SourceError, SourceResult};
use orderdesk_shared::{FulfillmentStatus, Order};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Reads orders from a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderSource for JsonFileSource {
    fn fetch_all(&self) -> SourceResult<Vec<Order>> {
        info!("Loading orders from {}", self.path.display());

        let contents = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        let orders = parse_orders(&contents)?;
        info!("Read {} orders from {}", orders.len(), self.path.display());
        Ok(orders)
    }
}

// Accepts both our own field names and the storefront export headers
#[derive(Debug, Deserialize)]
struct RawOrder {
    #[serde(default, alias = "Name")]
    id: Option<String>,
    #[serde(default, alias = "Shipping Name")]
    customer_name: Option<String>,
    #[serde(default, alias = "Total")]
    total: Option<RawTotal>,
    #[serde(default, alias = "Shipping Address1")]
    address: Option<String>,
    #[serde(default, alias = "Created at")]
    created_at: Option<String>,
    #[serde(default, alias = "Lineitem name")]
    item_name: Option<String>,
    #[serde(default, alias = "Fulfillment Status")]
    fulfillment_status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTotal {
    Number(f64),
    Text(String),
}

/// Parse a JSON array of order records.
///
/// The first record with a blank id ends the data; it and everything after
/// it are dropped without being looked at.
pub fn parse_orders(json: &str) -> SourceResult<Vec<Order>> {
    let raw: Vec<Value> = serde_json::from_str(json)?;
    let count = raw.len();

    let mut orders = Vec::with_capacity(count);
    for (index, value) in raw.into_iter().enumerate() {
        if !value.is_object() {
            return Err(SourceError::Malformed {
                index,
                reason: "record is not an object".to_string(),
            });
        }
        if is_end_marker(&value) {
            if index + 1 < count {
                warn!(
                    "Record {} has no id, ignoring {} remaining records",
                    index,
                    count - index - 1
                );
            }
            break;
        }

        let record: RawOrder =
            serde_json::from_value(value).map_err(|e| SourceError::Malformed {
                index,
                reason: e.to_string(),
            })?;
        orders.push(convert(index, record)?);
    }

    Ok(orders)
}

/// No id under either key, or only null/blank ones
fn is_end_marker(record: &Value) -> bool {
    ["id", "Name"]
        .iter()
        .filter_map(|key| record.get(*key))
        .all(|id| match id {
            Value::Null => true,
            Value::String(id) => id.trim().is_empty(),
            _ => false,
        })
}

fn convert(index: usize, record: RawOrder) -> SourceResult<Order> {
    let malformed = |reason: String| SourceError::Malformed { index, reason };

    let total = match record.total {
        Some(RawTotal::Number(n)) => n,
        Some(RawTotal::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| malformed(format!("total {:?} is not a number", text)))?,
        None => return Err(malformed("missing total".to_string())),
    };
    if !total.is_finite() {
        return Err(malformed(format!("total {} is not finite", total)));
    }

    let created_raw = record
        .created_at
        .ok_or_else(|| malformed("missing created_at".to_string()))?;
    let created_at = parse_timestamp(&created_raw)
        .ok_or_else(|| malformed(format!("unrecognized timestamp {:?}", created_raw)))?;

    let fulfillment_status = match record.fulfillment_status.as_deref().map(str::trim) {
        None | Some("") => FulfillmentStatus::Unfulfilled,
        Some(status) => status
            .parse::<FulfillmentStatus>()
            .map_err(|e| malformed(e.to_string()))?,
    };

    Ok(Order {
        id: record.id.unwrap_or_default(),
        customer_name: record.customer_name.unwrap_or_default(),
        total,
        address: record.address.unwrap_or_default(),
        created_at,
        item_name: record.item_name.unwrap_or_default(),
        fulfillment_status,
    })
}

/// RFC 3339, `YYYY-MM-DD HH:MM:SS ±zzzz`, naive `YYYY-MM-DD HH:MM:SS` (UTC)
/// or a bare date (midnight UTC)
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z") {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(ts.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc())
}

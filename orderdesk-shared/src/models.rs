use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fulfillment state of an order. Only these two values exist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentStatus {
    Fulfilled,
    Unfulfilled,
}

impl FulfillmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FulfillmentStatus::Fulfilled => "fulfilled",
            FulfillmentStatus::Unfulfilled => "unfulfilled",
        }
    }
}

impl fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown fulfillment status: {0:?}")]
pub struct ParseStatusError(pub String);

impl FromStr for FulfillmentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fulfilled" => Ok(FulfillmentStatus::Fulfilled),
            "unfulfilled" => Ok(FulfillmentStatus::Unfulfilled),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// A single purchase record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub total: f64,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub item_name: String,
    pub fulfillment_status: FulfillmentStatus,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_name: impl Into<String>,
        total: f64,
        address: impl Into<String>,
        created_at: DateTime<Utc>,
        item_name: impl Into<String>,
        fulfillment_status: FulfillmentStatus,
    ) -> Self {
        Self {
            id: id.into(),
            customer_name: customer_name.into(),
            total,
            address: address.into(),
            created_at,
            item_name: item_name.into(),
            fulfillment_status,
        }
    }

    /// A blank id marks the end of real data
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }

    pub fn is_fulfilled(&self) -> bool {
        self.fulfillment_status == FulfillmentStatus::Fulfilled
    }

    /// Update fulfillment status
    pub fn update_status(&mut self, new_status: FulfillmentStatus) {
        self.fulfillment_status = new_status;
    }
}

use orderdesk_shared::Order;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

type Comparator = fn(&Order, &Order) -> Ordering;

/// Field an [`OrderCollection`](crate::OrderCollection) can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Total,
    Date,
    CustomerName,
    Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Total,
        SortField::Date,
        SortField::CustomerName,
        SortField::Address,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Total => "total",
            SortField::Date => "date",
            SortField::CustomerName => "customer name",
            SortField::Address => "address",
        }
    }

    /// Ascending comparator for this field. Name and address compare raw
    /// strings, no case folding.
    fn comparator(self) -> Comparator {
        match self {
            SortField::Total => |a: &Order, b: &Order| a.total.total_cmp(&b.total),
            SortField::Date => |a: &Order, b: &Order| a.created_at.cmp(&b.created_at),
            SortField::CustomerName => |a: &Order, b: &Order| a.customer_name.cmp(&b.customer_name),
            SortField::Address => |a: &Order, b: &Order| a.address.cmp(&b.address),
        }
    }
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Stable in-place sort. Equal keys keep their relative order in both
/// directions.
pub(crate) fn sort_orders(orders: &mut [Order], direction: SortDirection, field: SortField) {
    let cmp = field.comparator();
    match direction {
        SortDirection::Ascending => orders.sort_by(cmp),
        SortDirection::Descending => orders.sort_by(|a, b| cmp(b, a)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort key: {0:?}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortField {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total" => Ok(SortField::Total),
            "date" => Ok(SortField::Date),
            "customer name" | "customer_name" | "customer-name" => Ok(SortField::CustomerName),
            "address" => Ok(SortField::Address),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

impl FromStr for SortDirection {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(SortDirection::Ascending),
            "descending" => Ok(SortDirection::Descending),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

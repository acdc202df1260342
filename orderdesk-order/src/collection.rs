use crate::predicates;
use crate::sort::{self, SortDirection, SortField};
use orderdesk_core::{OrderSource, SourceError};
use orderdesk_shared::{FulfillmentStatus, Order, ParseStatusError};
use serde::Serialize;
use tracing::{debug, info};

/// Ordered set of orders loaded from an [`OrderSource`].
///
/// Filters return new collections and leave the receiver alone. Sorting and
/// status changes mutate the receiver in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OrderCollection {
    orders: Vec<Order>,
}

impl OrderCollection {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Fetch every order from the source. Failures are returned as-is; there
    /// is no retry and no empty fallback.
    pub fn load<S: OrderSource + ?Sized>(source: &S) -> Result<Self, SourceError> {
        let orders = source.fetch_all()?;
        info!("Loaded {} orders", orders.len());
        Ok(Self::new(orders))
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }

    pub fn as_slice(&self) -> &[Order] {
        &self.orders
    }

    pub fn into_inner(self) -> Vec<Order> {
        self.orders
    }

    /// Get an order by id
    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Every order matching `predicate`, in their current relative order
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&Order) -> bool,
    {
        self.orders
            .iter()
            .filter(|&order| predicate(order))
            .cloned()
            .collect()
    }

    pub fn unfulfilled(&self) -> Self {
        self.filter(predicates::unfulfilled())
    }

    pub fn fulfilled(&self) -> Self {
        self.filter(predicates::fulfilled())
    }

    pub fn by_customer_name(&self, name: &str) -> Self {
        self.filter(predicates::by_customer_name(name))
    }

    pub fn by_item_name(&self, item: &str) -> Self {
        self.filter(predicates::by_item_name(item))
    }

    /// Stable in-place sort, returns the receiver for chaining
    pub fn sort_by(&mut self, direction: SortDirection, field: SortField) -> &mut Self {
        debug!("Sorting {} orders by {} {}", self.orders.len(), field, direction);
        sort::sort_orders(&mut self.orders, direction, field);
        self
    }

    /// Sort using textual keys. An unknown field or direction leaves the
    /// collection untouched.
    pub fn sort_by_name(&mut self, direction: &str, field: &str) -> &mut Self {
        match (direction.parse::<SortDirection>(), field.parse::<SortField>()) {
            (Ok(direction), Ok(field)) => self.sort_by(direction, field),
            _ => {
                debug!("Ignoring sort request {:?} {:?}", field, direction);
                self
            }
        }
    }

    /// Set the status of the first order whose id matches
    pub fn change_status(
        &mut self,
        new_status: FulfillmentStatus,
        id: &str,
    ) -> Result<(), OrderError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;

        debug!("Order {}: {} -> {}", id, order.fulfillment_status, new_status);
        order.update_status(new_status);
        Ok(())
    }

    /// Like [`change_status`](Self::change_status), but the status is parsed
    /// first. Nothing is touched if parsing fails.
    pub fn change_status_str(&mut self, new_status: &str, id: &str) -> Result<(), OrderError> {
        let status = new_status.parse::<FulfillmentStatus>()?;
        self.change_status(status, id)
    }
}

impl From<Vec<Order>> for OrderCollection {
    fn from(orders: Vec<Order>) -> Self {
        Self::new(orders)
    }
}

impl FromIterator<Order> for OrderCollection {
    fn from_iter<I: IntoIterator<Item = Order>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for OrderCollection {
    type Item = Order;
    type IntoIter = std::vec::IntoIter<Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.into_iter()
    }
}

impl<'a> IntoIterator for &'a OrderCollection {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("There are no orders to print")]
    EmptyCollection,

    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Invalid fulfillment status: {0:?}")]
    InvalidStatus(String),
}

impl From<ParseStatusError> for OrderError {
    fn from(err: ParseStatusError) -> Self {
        OrderError::InvalidStatus(err.0)
    }
}

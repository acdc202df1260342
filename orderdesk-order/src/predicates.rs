//! Canonical filters for [`OrderCollection::filter`](crate::OrderCollection::filter).
//!
//! Combine them by chaining `filter` calls or by writing a closure.

use orderdesk_shared::{FulfillmentStatus, Order};

pub fn unfulfilled() -> impl Fn(&Order) -> bool {
    |order: &Order| order.fulfillment_status == FulfillmentStatus::Unfulfilled
}

pub fn fulfilled() -> impl Fn(&Order) -> bool {
    |order: &Order| order.fulfillment_status == FulfillmentStatus::Fulfilled
}

/// Case-insensitive substring match on the customer name
pub fn by_customer_name(needle: &str) -> impl Fn(&Order) -> bool {
    let needle = needle.to_lowercase();
    move |order: &Order| order.customer_name.to_lowercase().contains(&needle)
}

/// Case-insensitive substring match on the line item name
pub fn by_item_name(needle: &str) -> impl Fn(&Order) -> bool {
    let needle = needle.to_lowercase();
    move |order: &Order| order.item_name.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn order(customer: &str, item: &str, status: FulfillmentStatus) -> Order {
        Order::new(
            "#1",
            customer,
            1.0,
            "1 Main St",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            item,
            status,
        )
    }

    #[test]
    fn test_status_predicates() {
        let open = order("A", "B", FulfillmentStatus::Unfulfilled);
        let done = order("A", "B", FulfillmentStatus::Fulfilled);

        assert!(unfulfilled()(&open));
        assert!(!unfulfilled()(&done));
        assert!(fulfilled()(&done));
        assert!(!fulfilled()(&open));
    }

    #[test]
    fn test_customer_name_is_case_insensitive() {
        let pred = by_customer_name("jo");
        assert!(pred(&order("John Smith", "Mug", FulfillmentStatus::Fulfilled)));
        assert!(pred(&order("Jolene", "Mug", FulfillmentStatus::Fulfilled)));
        assert!(pred(&order("MARJORIE", "Mug", FulfillmentStatus::Fulfilled)));
        assert!(!pred(&order("Anna", "Jo-jo yarn", FulfillmentStatus::Fulfilled)));
    }

    #[test]
    fn test_item_name_is_case_insensitive() {
        let pred = by_item_name("MUG");
        assert!(pred(&order("Anna", "Blue mug", FulfillmentStatus::Unfulfilled)));
        assert!(!pred(&order("Mugsy", "Teapot", FulfillmentStatus::Unfulfilled)));
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        assert!(by_customer_name("")(&order("", "", FulfillmentStatus::Fulfilled)));
        assert!(by_item_name("")(&order("Anna", "Mug", FulfillmentStatus::Fulfilled)));
    }
}

use crate::collection::{OrderCollection, OrderError};
use orderdesk_shared::Order;

/// Text listing of the collection, one block per order. Enumeration stops at
/// the first order with a blank id.
pub fn render_summary(orders: &OrderCollection) -> Result<String, OrderError> {
    if orders.is_empty() {
        return Err(OrderError::EmptyCollection);
    }

    Ok(orders
        .iter()
        .take_while(|order| order.has_id())
        .map(render_order)
        .collect())
}

fn render_order(order: &Order) -> String {
    format!(
        "ID: {}\n\tCustomer name: {}\n\tTotal: ${:.2}\n\tAddress: {}\n\tFulfillmentStatus: {}\n",
        order.id, order.customer_name, order.total, order.address, order.fulfillment_status,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use orderdesk_shared::FulfillmentStatus;

    fn order(id: &str, total: f64) -> Order {
        Order::new(
            id,
            "Jolene Park",
            total,
            "12 Pine Ave",
            Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap(),
            "Candle",
            FulfillmentStatus::Unfulfilled,
        )
    }

    #[test]
    fn test_render_single_order() {
        let orders = OrderCollection::new(vec![order("#1001", 19.5)]);
        let text = render_summary(&orders).unwrap();

        assert_eq!(
            text,
            "ID: #1001\n\tCustomer name: Jolene Park\n\tTotal: $19.50\n\tAddress: 12 Pine Ave\n\tFulfillmentStatus: unfulfilled\n"
        );
    }

    #[test]
    fn test_render_stops_at_blank_id() {
        let orders = OrderCollection::new(vec![order("#1", 1.0), order("", 2.0), order("#3", 3.0)]);
        let text = render_summary(&orders).unwrap();

        assert!(text.contains("ID: #1\n"));
        assert!(!text.contains("ID: #3"));
        assert_eq!(text.matches("ID: ").count(), 1);
    }

    #[test]
    fn test_render_rounds_to_cents() {
        let orders = OrderCollection::new(vec![order("#7", 7.126)]);
        assert!(render_summary(&orders).unwrap().contains("Total: $7.13\n"));
    }

    #[test]
    fn test_render_empty_collection() {
        let err = render_summary(&OrderCollection::default()).unwrap_err();
        assert_eq!(err, OrderError::EmptyCollection);
    }

    #[test]
    fn test_render_blank_first_id_is_not_an_error() {
        let orders = OrderCollection::new(vec![order("", 1.0)]);
        assert_eq!(render_summary(&orders).unwrap(), "");
    }
}

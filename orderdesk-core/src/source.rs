use orderdesk_shared::Order;
use std::path::PathBuf;

/// Supplies the initial set of orders.
///
/// Implementations either return every record, fully populated and in a
/// deterministic order, or fail. Returning a partial or empty set in place of
/// a failure is not allowed.
pub trait OrderSource {
    fn fetch_all(&self) -> SourceResult<Vec<Order>>;
}

impl<S: OrderSource + ?Sized> OrderSource for &S {
    fn fetch_all(&self) -> SourceResult<Vec<Order>> {
        (**self).fetch_all()
    }
}

impl<S: OrderSource + ?Sized> OrderSource for Box<S> {
    fn fetch_all(&self) -> SourceResult<Vec<Order>> {
        (**self).fetch_all()
    }
}

/// In-memory source, mostly for tests and callers that already hold the data
impl OrderSource for Vec<Order> {
    fn fetch_all(&self) -> SourceResult<Vec<Order>> {
        Ok(self.clone())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read order source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Order source is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Malformed order record at index {index}: {reason}")]
    Malformed {
        index: usize,
        reason: String,
    },
}

pub type SourceResult<T> = Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use orderdesk_shared::FulfillmentStatus;

    struct FailingSource;

    impl OrderSource for FailingSource {
        fn fetch_all(&self) -> SourceResult<Vec<Order>> {
            Err(SourceError::Io {
                path: PathBuf::from("orders.json"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            })
        }
    }

    #[test]
    fn test_vec_source_returns_copy() {
        let orders = vec![Order::new(
            "#1001",
            "Jolene",
            10.0,
            "2 Elm St",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            "Tea",
            FulfillmentStatus::Fulfilled,
        )];

        let fetched = orders.fetch_all().unwrap();
        assert_eq!(fetched, orders);
    }

    #[test]
    fn test_boxed_source_forwards_errors() {
        let source: Box<dyn OrderSource> = Box::new(FailingSource);
        let err = source.fetch_all().unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert_eq!(err.to_string(), "Failed to read order source orders.json: gone");
    }
}

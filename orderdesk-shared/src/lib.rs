pub mod models;

pub use models::{FulfillmentStatus, Order, ParseStatusError};

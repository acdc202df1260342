pub mod collection;
pub mod predicates;
pub mod sort;
pub mod summary;

pub use collection::{OrderCollection, OrderError};
pub use sort::{SortDirection, SortField, UnknownSortKey};
pub use summary::render_summary;

pub mod source;

pub use source::{OrderSource, SourceError, SourceResult};

mod aggregation;

pub use aggregation::{aggregate, AggregateError};

//! Remote instance list: fetching, validation and ordering.

pub mod errors;
pub mod operations;
pub mod source;
pub mod types;

pub use errors::FetchError;
pub use operations::{count_label, numeric_id, sort_by_numeric_id};
pub use source::InstanceDataSource;
pub use types::{Instance, InstanceList, InstanceSnapshot, InstancesPayload};

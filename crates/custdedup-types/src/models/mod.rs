//! Core domain models for the customer deduplication service.

mod analysis;
mod customer;
mod message;
mod source;

pub use analysis::{DeduplicationResult, SourceComparisonResult};
pub use customer::{CustomerBulkUpload, CustomerCreate, CustomerRecord, NewCustomer};
pub use message::MessageResponse;
pub use source::SourceSystem;

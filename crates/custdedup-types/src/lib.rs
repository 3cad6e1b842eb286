//! # Custdedup Types
//!
//! Core types, models, and error definitions for the customer deduplication
//! service.
//!
//! - **`error`** - Typed error hierarchy for record validation and source tags
//! - **`models`** - Domain models (customer records, analysis results)
//!
//! ## Architecture Role
//!
//! `custdedup-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!          custdedup-types (this crate)
//!                  │
//!                  ▼
//!           custdedup-core
//!                  │
//!                  ▼
//!          custdedup-server
//! ```
//!
//! All types are serializable via serde, `Clone` for sharing across async
//! boundaries, and `PartialEq` for testing.

pub mod error;
pub mod models;

pub use error::{CustomerError, Result};

pub use models::{
    CustomerBulkUpload, CustomerCreate, CustomerRecord, DeduplicationResult, MessageResponse,
    NewCustomer, SourceComparisonResult, SourceSystem,
};

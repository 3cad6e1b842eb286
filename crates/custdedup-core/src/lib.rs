//! # Custdedup Core
//!
//! Core logic for the customer deduplication service.
//!
//! ```text
//! custdedup-core/src/
//! ├── engine/           # Pure set engines (dedup, source comparison)
//! └── modules/
//!     ├── repository.rs # CustomerRepository trait (storage seam)
//!     ├── memory_store  # In-process store
//!     ├── customer_pg*  # PostgreSQL store
//!     ├── service.rs    # Validation + engines over an injected store
//!     └── seed.rs       # Fixture loading
//! ```
//!
//! The engines never touch storage. The service reads a fresh snapshot from
//! the injected repository on every call and hands it to the engines.

#![cfg_attr(
    test,
    allow(clippy::panic, clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)
)]

pub mod engine;
pub mod error;
pub mod modules;

pub use engine::{analyze, compare, SourcePartition};
pub use error::{AppError, AppResult};
pub use modules::memory_store::InMemoryCustomerRepository;
pub use modules::repository::{CustomerRepository, RepoResult, RepositoryError};
pub use modules::service::CustomerService;

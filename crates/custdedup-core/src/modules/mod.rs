//! Record storage, service layer and seeding modules.

pub mod customer_pg;
pub(crate) mod customer_pg_crud;
pub(crate) mod customer_pg_helpers;
pub(crate) mod customer_pg_query;
pub mod memory_store;
pub mod repository;
pub mod seed;
pub mod service;

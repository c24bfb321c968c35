//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes tools only; each tool maps onto one call of the
//! test-management REST API.

pub mod tools;

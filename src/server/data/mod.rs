//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! entity models (or entity tuples with their resolved user relations) to the service
//! layer. All database queries, inserts, and lookups are performed through these
//! repositories; referential-integrity enforcement beyond pre-resolution belongs to the
//! storage layer.

pub mod calendar_event;
pub mod client;
pub mod document;
pub mod hr;
pub mod meeting;
pub mod okr;
pub mod org;
pub mod policy;
pub mod task;
pub mod user;

#[cfg(test)]
mod test;

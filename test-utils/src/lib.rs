//! Teamdesk Test Utils
//!
//! Shared testing utilities for building integration and unit tests. This
//! crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus per-entity factories
//! for concise test data setup.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::User;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(User)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application:
//! API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guards over the session layer
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to the controller
//! 2. **Controller** resolves the session user, converts DTOs to params, calls the service
//! 3. **Service** validates invariants, resolves referenced records, orchestrates data operations
//! 4. **Data** queries the database and returns entity models
//! 5. **Controller** converts the resulting domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

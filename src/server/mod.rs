//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Entity construction and board/card linking rules
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, identifiers, and parameter types
//! - **Error Layer** (`error/`) - Application error taxonomy and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (connection pool, request deadline)
//! - **Startup** (`startup`) - Tracing setup, database connection, and migrations
//! - **Router** (`router`) - Axum route configuration and CORS
//! - **Util** (`util/`) - Request body extraction, deadlines, and identifier parsing
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** decodes the body and runs the service call under the deadline
//! 3. **Service** builds entities and orchestrates repository calls
//! 4. **Data** validates identifiers, queries the database, converts rows to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

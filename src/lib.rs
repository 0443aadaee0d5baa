//! # Rental Marketplace Library
//!
//! A small rental marketplace served as HTML forms:
//! - account registration, login and profile updates
//! - property listings with validated titles, descriptions and prices
//! - bookings that pay the listing owner from the booker's balance
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core business entities, field rules and repository traits
//! - **Application Layer**: Business logic services and form DTOs
//! - **Infrastructure Layer**: Database, repositories and metrics
//! - **Presentation Layer**: HTTP handlers, HTML views and middleware
//!
//! ## Module Structure
//!
//! ```text
//! rental_marketplace/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities, value objects, rules and traits
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database, repository and metrics implementations
//! +-- presentation/   HTTP routes, views and middleware
//! +-- shared/         Common utilities (errors, validation, snowflake IDs)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers and views
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;

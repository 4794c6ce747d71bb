//! Products Domain
//!
//! A complete domain implementation for a product catalog backed by
//! PostgreSQL.
//!
//! Layered top to bottom:
//! - [`extractors`]: check chains over path and body inputs
//! - [`handlers`]: HTTP endpoints and their OpenAPI annotations
//! - [`service`]: business rules
//! - [`repository`]: data access trait plus the SeaORM and in-memory
//!   implementations
//! - [`models`]: domain types, payloads and response envelopes
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers,
//!     repository::InMemoryProductRepository,
//!     service::ProductService,
//! };
//!
//! let repository = InMemoryProductRepository::new();
//! let service = ProductService::new(repository);
//! let router = handlers::router(service);
//! ```

pub mod checks;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    AvailabilityUpdatedResponse, CreateProduct, MessageResponse, Product, ProductCreatedResponse,
    ProductDeletedResponse, ProductListResponse, ProductResponse, ReplaceProduct,
    ServerErrorResponse,
};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;

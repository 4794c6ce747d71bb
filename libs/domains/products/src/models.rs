use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product entity - a single catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier (assigned by the store)
    pub id: i32,
    /// Display name, at most 100 characters
    pub name: String,
    /// Unit price, must be positive
    pub price: f64,
    /// Whether the product can currently be ordered
    pub availability: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
    /// Defaults to `true` when omitted
    #[serde(default = "default_availability")]
    pub availability: bool,
}

fn default_availability() -> bool {
    true
}

/// DTO for replacing every mutable field of a product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReplaceProduct {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

/// Response envelope for the list endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
}

/// Response envelope for single-product reads and replacements
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

/// Response envelope for a successful creation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductCreatedResponse {
    pub message: String,
    pub product: Product,
}

/// Response envelope for a successful availability update
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityUpdatedResponse {
    pub message: String,
    pub data: Product,
}

/// Response envelope for a successful deletion
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductDeletedResponse {
    /// Always the literal `"Product deleted"`
    pub data: String,
}

/// Bare-message body, used for the 404 and the missing-availability 400
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Body returned when persistence fails unexpectedly
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServerErrorResponse {
    pub error: String,
    pub details: String,
}

impl Product {
    /// Create a new product from its creation DTO and a store-assigned id
    pub fn new(id: i32, input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            price: input.price,
            availability: input.availability,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every mutable field from a replacement DTO
    pub fn apply_replace(&mut self, input: ReplaceProduct) {
        self.name = input.name;
        self.price = input.price;
        self.availability = input.availability;
        self.updated_at = Utc::now();
    }

    /// Overwrite the availability flag only
    pub fn apply_availability(&mut self, availability: bool) {
        self.availability = availability;
        self.updated_at = Utc::now();
    }
}

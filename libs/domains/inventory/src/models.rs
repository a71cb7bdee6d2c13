use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::validation::not_blank;

/// Product entity
///
/// The `id` is assigned by the storage collaborator on first write and is
/// immutable afterwards; every other field may change over the record's
/// lifetime. Categories are free-form strings, not a closed enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    /// Unique identifier, system-assigned
    pub id: i64,
    /// Product name
    #[validate(custom(function = not_blank))]
    pub name: String,
    /// Units currently on the shelf
    #[validate(range(min = 0))]
    pub quantity: i32,
    /// Unit price; must be strictly positive
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    /// Free-form category label
    #[validate(custom(function = not_blank))]
    pub category: String,
}

/// DTO for creating a new product (no id yet)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(custom(function = not_blank))]
    pub name: String,
    #[validate(range(min = 0))]
    pub quantity: i32,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[validate(custom(function = not_blank))]
    pub category: String,
}

impl Product {
    /// Materialize a stored product from a create DTO and an assigned id.
    pub fn from_create(id: i64, input: CreateProduct) -> Self {
        Self {
            id,
            name: input.name,
            quantity: input.quantity,
            price: input.price,
            category: input.category,
        }
    }
}

/// Request body for a stock-quantity update
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct StockUpdate {
    /// Replacement quantity; must not be negative
    #[validate(range(min = 0))]
    pub quantity: i32,
}

/// Query parameters for name search
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct NameQuery {
    /// Fragment to match anywhere in the product name, case-insensitively
    pub name: String,
}

/// Query parameters for the low-stock report
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct LowStockQuery {
    /// Products with `quantity <= threshold` are reported
    pub threshold: i32,
}

//! Product Models

use sqlx::FromRow;

/// New Product Model
///
/// An identity-less draft, used both for creation and as the full-replace
/// payload of an update. The store assigns the identity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Display name of the product
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Reference/URL to an image asset
    pub image: String,

    /// Monetary value, no currency or bound enforced
    pub price: f64,
}

/// Product Model
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    /// Store-assigned identity
    pub id: i64,

    /// Display name of the product
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Reference/URL to an image asset
    pub image: String,

    /// Monetary value, no currency or bound enforced
    pub price: f64,
}

impl Product {
    /// Stamp `id` onto a draft, discarding any identity the payload carried.
    #[must_use]
    pub fn from_draft(id: i64, draft: NewProduct) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            image: draft.image,
            price: draft.price,
        }
    }
}

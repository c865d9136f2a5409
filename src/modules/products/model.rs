//! Product catalog models.
//!
//! A product has a handful of well-known fields; everything else the client
//! sends rides along as opaque catalog attributes, flattened into the same
//! document.

use mongodb::bson::{Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::pagination::ListParams;

/// A product document in the `products` collection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    #[validate(length(min = 1))]
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Catalog attributes not constrained by the schema (brand, stock,
    /// image URLs, ...), passed through as-is.
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub attributes: Document,
}

/// DTO for partial product updates: the id must be present, and exactly the
/// other fields that are present get written.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProductDto {
    pub id: String,
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub attributes: Document,
}

impl UpdateProductDto {
    /// The `$set` document for this update: exactly the fields present.
    pub fn set_document(&self) -> Document {
        let mut set = doc! {};
        if let Some(name) = &self.name {
            set.insert("name", name.as_str());
        }
        if let Some(price) = self.price {
            set.insert("price", price);
        }
        if let Some(description) = &self.description {
            set.insert("description", description.as_str());
        }
        for (key, value) in &self.attributes {
            set.insert(key, value.clone());
        }
        set
    }
}

/// Query parameters on the product listing endpoint. A present `id` turns
/// the request into a single-document lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListQuery {
    pub id: Option<String>,
    pub sort: Option<String>,
    pub filter: Option<String>,
    #[serde(flatten)]
    pub pagination: ListParams,
}

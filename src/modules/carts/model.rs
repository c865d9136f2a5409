//! Shopping cart models. No endpoint manipulates carts yet; the documents
//! are defined ahead of the checkout feature. Note that `product_id` is not
//! referentially checked against the catalog.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub user_id: ObjectId,
    pub items: Vec<CartItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ObjectId,
    pub quantity: i32,
}

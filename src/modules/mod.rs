pub mod auth;
pub mod carts;
pub mod products;
pub mod users;

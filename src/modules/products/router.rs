use crate::modules::products::controller::{
    admin_products_page, create_product, delete_product, get_products, update_product,
};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_products_router() -> Router<AppState> {
    Router::new().route(
        "/products",
        get(get_products)
            .post(create_product)
            .put(update_product)
            .delete(delete_product),
    )
}

/// Routes nested under the role-gated `/admin` tree. Create and delete are
/// the same handlers as the public catalog routes.
pub fn init_admin_products_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(admin_products_page)
            .post(create_product)
            .delete(delete_product),
    )
}

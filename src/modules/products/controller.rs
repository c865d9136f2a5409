use askama::Template;
use axum::Json;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::StatusResponse;
use crate::modules::users::model::IdQuery;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{Product, ProductListQuery, UpdateProductDto};
use super::service::ProductService;

#[derive(Template)]
#[template(path = "admin_products.html")]
struct AdminProductsPage {
    products: Vec<ProductRow>,
}

struct ProductRow {
    id: String,
    name: String,
    price: f64,
    description: String,
}

impl From<Product> for ProductRow {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: product.name,
            price: product.price,
            description: product.description.unwrap_or_default(),
        }
    }
}

/// Admin listing page: the whole catalog rendered as HTML.
#[instrument(skip(state))]
pub async fn admin_products_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let products =
        ProductService::list_products(&state.products, &ProductListQuery::default()).await?;

    let page = AdminProductsPage {
        products: products.into_iter().map(ProductRow::from).collect(),
    };
    let html = page.render().map_err(AppError::internal)?;

    Ok(Html(html))
}

/// Browse the catalog, or fetch one product with `?id=`
#[utoipa::path(
    get,
    path = "/products",
    params(
        ("id" = Option<String>, Query, description = "Fetch a single product by id"),
        ("page" = Option<i64>, Query, description = "1-based page number"),
        ("limit" = Option<i64>, Query, description = "Page size; absent means unbounded"),
        ("sort" = Option<String>, Query, description = "Field to sort by, ascending"),
        ("filter" = Option<String>, Query, description = "Case-insensitive substring match on name")
    ),
    responses(
        (status = 200, description = "Matching products, or the single product", body = [Product]),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No product with that id", body = ErrorResponse)
    ),
    tag = "Products"
)]
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Response, AppError> {
    if let Some(id) = &query.id {
        let product = ProductService::get_product(&state.products, id).await?;
        return Ok(Json(product).into_response());
    }

    let products = ProductService::list_products(&state.products, &query).await?;
    Ok(Json(products).into_response())
}

/// Add a product to the catalog
#[utoipa::path(
    post,
    path = "/products",
    request_body = Product,
    responses(
        (status = 200, description = "Product created", body = StatusResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse)
    ),
    tag = "Products"
)]
#[instrument(skip(state, product))]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(product): ValidatedJson<Product>,
) -> Result<Json<StatusResponse>, AppError> {
    ProductService::create_product(&state.products, product).await?;
    Ok(Json(StatusResponse::success("Product added successfully")))
}

/// Update the fields present in the body, by embedded id
#[utoipa::path(
    put,
    path = "/products",
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = StatusResponse),
        (status = 400, description = "Malformed body or id", body = ErrorResponse),
        (status = 404, description = "No product with that id", body = ErrorResponse)
    ),
    tag = "Products"
)]
#[instrument(skip(state, dto))]
pub async fn update_product(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpdateProductDto>,
) -> Result<Json<StatusResponse>, AppError> {
    ProductService::update_product(&state.products, dto).await?;
    Ok(Json(StatusResponse::success("Product updated successfully")))
}

/// Remove a product by id
#[utoipa::path(
    delete,
    path = "/products",
    params(IdQuery),
    responses(
        (status = 200, description = "Product deleted (idempotent)", body = StatusResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse)
    ),
    tag = "Products"
)]
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<StatusResponse>, AppError> {
    ProductService::delete_product(&state.products, &query.id).await?;
    Ok(Json(StatusResponse::success("Product deleted successfully")))
}

use mongodb::bson::oid::ObjectId;
use tracing::instrument;

use crate::store::{Collection, Filter, ListQuery};
use crate::utils::errors::AppError;

use super::model::{Product, ProductListQuery, UpdateProductDto};

pub struct ProductService;

impl ProductService {
    /// Translates the listing query parameters into a store query:
    /// `filter` becomes a case-insensitive substring match on the name,
    /// `sort` a single-field ascending sort, `page`/`limit` an offset.
    pub async fn list_products(
        products: &Collection<Product>,
        query: &ProductListQuery,
    ) -> Result<Vec<Product>, AppError> {
        let filter = match query.filter.as_deref() {
            Some(needle) if !needle.is_empty() => Filter::NameContains(needle.to_string()),
            _ => Filter::All,
        };

        let list_query = ListQuery {
            filter,
            sort_by: query.sort.clone().filter(|s| !s.is_empty()),
            skip: query.pagination.skip(),
            limit: query.pagination.limit(),
        };

        products.find(&list_query).await.map_err(AppError::database)
    }

    pub async fn get_product(
        products: &Collection<Product>,
        id: &str,
    ) -> Result<Product, AppError> {
        let id = ObjectId::parse_str(id)
            .map_err(|_| AppError::bad_request(anyhow::anyhow!("Invalid product ID")))?;

        products
            .find_by_id(id)
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Product not found")))
    }

    #[instrument(skip(products, product))]
    pub async fn create_product(
        products: &Collection<Product>,
        mut product: Product,
    ) -> Result<(), AppError> {
        // The store assigns identity; a client-supplied id is ignored.
        product.id = None;
        products
            .insert_one(&product)
            .await
            .map_err(AppError::database)?;
        Ok(())
    }

    #[instrument(skip(products, dto))]
    pub async fn update_product(
        products: &Collection<Product>,
        dto: UpdateProductDto,
    ) -> Result<(), AppError> {
        let id = ObjectId::parse_str(&dto.id)
            .map_err(|_| AppError::bad_request(anyhow::anyhow!("Invalid product ID")))?;

        let set = dto.set_document();
        if set.is_empty() {
            return Ok(());
        }

        let matched = products
            .update_by_id(id, set)
            .await
            .map_err(AppError::database)?;
        if matched == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Product not found")));
        }

        Ok(())
    }

    pub async fn delete_product(products: &Collection<Product>, id: &str) -> Result<(), AppError> {
        let id = ObjectId::parse_str(id)
            .map_err(|_| AppError::bad_request(anyhow::anyhow!("Invalid product ID")))?;
        products
            .delete_by_id(id)
            .await
            .map_err(AppError::database)?;
        Ok(())
    }
}

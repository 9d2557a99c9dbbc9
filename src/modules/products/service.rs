use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::products::model::{
    CreateProductDto, PaginatedProductsResponse, Product, ProductFilterParams, UpdateProductDto,
};
use crate::utils::errors::{AppError, is_foreign_key_violation};
use crate::utils::pagination::PaginationMeta;

const PRODUCT_COLUMNS: &str =
    "id, name, price, description, stock, category_id, attributes, image_url, featured, \
     created_at, updated_at";

pub struct ProductService;

impl ProductService {
    pub async fn list_products(
        db: &PgPool,
        params: ProductFilterParams,
    ) -> Result<PaginatedProductsResponse, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM products WHERE ($1::uuid IS NULL OR category_id = $1)",
        )
        .bind(params.category_id)
        .fetch_one(db)
        .await?;

        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products
             WHERE ($1::uuid IS NULL OR category_id = $1)
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        ))
        .bind(params.category_id)
        .bind(params.pagination.limit())
        .bind(params.pagination.offset())
        .fetch_all(db)
        .await?;

        Ok(PaginatedProductsResponse {
            data: products,
            meta: PaginationMeta::new(total, &params.pagination),
        })
    }

    pub async fn get_featured(db: &PgPool) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products
             WHERE featured = true
             ORDER BY created_at DESC
             LIMIT 12"
        ))
        .fetch_all(db)
        .await?;

        Ok(products)
    }

    pub async fn get_product(db: &PgPool, id: Uuid) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

        Ok(product)
    }

    pub async fn create_product(db: &PgPool, dto: CreateProductDto) -> Result<Product, AppError> {
        if dto.price < Decimal::ZERO {
            return Err(AppError::bad_request("Price must not be negative"));
        }

        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products
                 (name, price, description, stock, category_id, attributes, image_url, featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(dto.price)
        .bind(&dto.description)
        .bind(dto.stock)
        .bind(dto.category_id)
        .bind(&dto.attributes)
        .bind(&dto.image_url)
        .bind(dto.featured)
        .fetch_one(db)
        .await?;

        Ok(product)
    }

    /// Partial-field merge: absent fields keep their stored value.
    pub async fn update_product(
        db: &PgPool,
        id: Uuid,
        dto: UpdateProductDto,
    ) -> Result<Product, AppError> {
        if let Some(price) = dto.price {
            if price < Decimal::ZERO {
                return Err(AppError::bad_request("Price must not be negative"));
            }
        }

        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET
                 name = COALESCE($2, name),
                 price = COALESCE($3, price),
                 description = COALESCE($4, description),
                 stock = COALESCE($5, stock),
                 category_id = COALESCE($6, category_id),
                 attributes = COALESCE($7, attributes),
                 image_url = COALESCE($8, image_url),
                 featured = COALESCE($9, featured),
                 updated_at = now()
             WHERE id = $1
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .bind(dto.name)
        .bind(dto.price)
        .bind(dto.description)
        .bind(dto.stock)
        .bind(dto.category_id)
        .bind(dto.attributes)
        .bind(dto.image_url)
        .bind(dto.featured)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

        Ok(product)
    }

    pub async fn delete_product(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    AppError::bad_request("Product is referenced by existing orders")
                } else {
                    AppError::database(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Product not found"));
        }

        Ok(())
    }
}

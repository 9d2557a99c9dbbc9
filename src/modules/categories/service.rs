use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::categories::model::{Category, CreateCategoryDto, UpdateCategoryDto};
use crate::utils::errors::{AppError, is_unique_violation};

pub struct CategoryService;

impl CategoryService {
    pub async fn list_categories(db: &PgPool) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, created_at FROM categories ORDER BY name",
        )
        .fetch_all(db)
        .await?;

        Ok(categories)
    }

    pub async fn create_category(
        db: &PgPool,
        dto: CreateCategoryDto,
    ) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(dto.name.trim())
        .fetch_one(db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::bad_request("Category already exists")
            } else {
                AppError::database(e)
            }
        })?;

        Ok(category)
    }

    pub async fn update_category(
        db: &PgPool,
        id: Uuid,
        dto: UpdateCategoryDto,
    ) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = COALESCE($2, name)
             WHERE id = $1
             RETURNING id, name, created_at",
        )
        .bind(id)
        .bind(dto.name.map(|n| n.trim().to_string()))
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Category not found"))?;

        Ok(category)
    }

    pub async fn delete_category(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Category not found"));
        }

        Ok(())
    }
}

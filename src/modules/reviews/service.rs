use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::reviews::model::{CreateReviewDto, Review, ReviewWithAuthor};
use crate::utils::errors::AppError;

pub struct ReviewService;

impl ReviewService {
    pub async fn create_review(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateReviewDto,
    ) -> Result<Review, AppError> {
        // The product must exist up front; the FK would catch it too,
        // but a 404 reads better than a constraint error.
        let product_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(dto.product_id)
                .fetch_one(db)
                .await?;

        if !product_exists {
            return Err(AppError::not_found("Product not found"));
        }

        let review = sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (user_id, product_id, rating, comment)
             VALUES ($1, $2, $3, $4)
             RETURNING id, user_id, product_id, rating, comment, created_at",
        )
        .bind(user_id)
        .bind(dto.product_id)
        .bind(dto.rating)
        .bind(&dto.comment)
        .fetch_one(db)
        .await?;

        Ok(review)
    }

    pub async fn get_product_reviews(
        db: &PgPool,
        product_id: Uuid,
    ) -> Result<Vec<ReviewWithAuthor>, AppError> {
        let reviews = sqlx::query_as::<_, ReviewWithAuthor>(
            "SELECT r.id, r.user_id, r.product_id, r.rating, r.comment,
                    u.name AS author_name, r.created_at
             FROM reviews r
             JOIN users u ON u.id = r.user_id
             WHERE r.product_id = $1
             ORDER BY r.created_at DESC",
        )
        .bind(product_id)
        .fetch_all(db)
        .await?;

        Ok(reviews)
    }
}

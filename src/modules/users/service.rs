use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::users::model::{
    AdminUpdateUserDto, PaginatedUsersResponse, UpdateProfileDto, UserFilterParams, UserResponse,
};
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;

const USER_COLUMNS: &str = "id, email, name, role, created_at";

pub struct UserService;

impl UserService {
    pub async fn get_profile(db: &PgPool, user_id: Uuid) -> Result<UserResponse, AppError> {
        let user = sqlx::query_as::<_, UserResponse>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

        Ok(user)
    }

    pub async fn update_profile(
        db: &PgPool,
        user_id: Uuid,
        dto: UpdateProfileDto,
    ) -> Result<UserResponse, AppError> {
        let name = match dto.name {
            Some(name) => {
                let trimmed = name.trim().to_string();
                if trimmed.chars().count() < 2 {
                    return Err(AppError::bad_request("Name must be at least 2 characters"));
                }
                Some(trimmed)
            }
            None => None,
        };

        let user = sqlx::query_as::<_, UserResponse>(&format!(
            "UPDATE users
             SET name = COALESCE($2, name), updated_at = now()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user_id)
        .bind(name)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

        Ok(user)
    }

    pub async fn list_users(
        db: &PgPool,
        params: UserFilterParams,
    ) -> Result<PaginatedUsersResponse, AppError> {
        let email_filter = params.email.as_ref().map(|e| format!("%{}%", e));

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users
             WHERE ($1::text IS NULL OR email ILIKE $1)
               AND ($2::user_role IS NULL OR role = $2)",
        )
        .bind(&email_filter)
        .bind(params.role)
        .fetch_one(db)
        .await?;

        let users = sqlx::query_as::<_, UserResponse>(&format!(
            "SELECT {USER_COLUMNS} FROM users
             WHERE ($1::text IS NULL OR email ILIKE $1)
               AND ($2::user_role IS NULL OR role = $2)
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        ))
        .bind(&email_filter)
        .bind(params.role)
        .bind(params.pagination.limit())
        .bind(params.pagination.offset())
        .fetch_all(db)
        .await?;

        Ok(PaginatedUsersResponse {
            data: users,
            meta: PaginationMeta::new(total, &params.pagination),
        })
    }

    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<UserResponse, AppError> {
        let user = sqlx::query_as::<_, UserResponse>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

        Ok(user)
    }

    pub async fn admin_update_user(
        db: &PgPool,
        id: Uuid,
        dto: AdminUpdateUserDto,
    ) -> Result<UserResponse, AppError> {
        let user = sqlx::query_as::<_, UserResponse>(&format!(
            "UPDATE users
             SET name = COALESCE($2, name),
                 role = COALESCE($3, role),
                 updated_at = now()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(dto.name.map(|n| n.trim().to_string()))
        .bind(dto.role)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

        Ok(user)
    }
}

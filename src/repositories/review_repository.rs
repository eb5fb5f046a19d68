use crate::models::review::Review;
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Fila de review con autor resuelto, para la proyección pública
#[derive(Debug, sqlx::FromRow)]
pub struct PublicReviewRow {
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: String,
}

/// Fila de review con referencias completas, para moderación
#[derive(Debug, sqlx::FromRow)]
pub struct ModerationReviewRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub vehicle_id: Uuid,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub rating: i32,
    pub comment: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

const MODERATION_SELECT: &str = r#"
    SELECT r.id, r.user_id, u.name AS user_name, u.email AS user_email,
           r.vehicle_id, v.make AS vehicle_make, v.model AS vehicle_model,
           r.rating, r.comment, r.approved, r.created_at
    FROM reviews r
    JOIN users u ON u.id = r.user_id
    JOIN vehicles v ON v.id = r.vehicle_id
"#;

pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Toda review nace sin aprobar
    pub async fn create(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
        rating: i32,
        comment: String,
    ) -> Result<Review, AppError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (id, user_id, vehicle_id, rating, comment, approved, created_at)
            VALUES ($1, $2, $3, $4, $5, FALSE, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(vehicle_id)
        .bind(rating)
        .bind(comment)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(review)
    }

    /// Aprobar una review; idempotente sobre reviews ya aprobadas
    pub async fn approve(&self, id: Uuid) -> Result<Option<Review>, AppError> {
        let review = sqlx::query_as::<_, Review>(
            "UPDATE reviews SET approved = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(review)
    }

    /// Reviews aprobadas de un vehículo, más recientes primero,
    /// reducidas a la proyección pública
    pub async fn find_approved_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<PublicReviewRow>, AppError> {
        let reviews = sqlx::query_as::<_, PublicReviewRow>(
            r#"
            SELECT u.name AS reviewer_name, r.rating, r.comment
            FROM reviews r
            JOIN users u ON u.id = r.user_id
            WHERE r.vehicle_id = $1 AND r.approved = TRUE
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }

    pub async fn find_all_detailed(&self) -> Result<Vec<ModerationReviewRow>, AppError> {
        let sql = format!("{} ORDER BY r.created_at DESC", MODERATION_SELECT);
        let reviews = sqlx::query_as::<_, ModerationReviewRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(reviews)
    }

    /// Variante admin: aprobadas de un vehículo con referencias completas
    pub async fn find_approved_detailed_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<ModerationReviewRow>, AppError> {
        let sql = format!(
            "{} WHERE r.vehicle_id = $1 AND r.approved = TRUE ORDER BY r.created_at DESC",
            MODERATION_SELECT
        );
        let reviews = sqlx::query_as::<_, ModerationReviewRow>(&sql)
            .bind(vehicle_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(reviews)
    }
}

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, make, model, year, price_per_day, image, available, category, location, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.make)
        .bind(request.model)
        .bind(request.year)
        .bind(request.price_per_day)
        .bind(request.image)
        .bind(request.available.unwrap_or(true))
        .bind(request.category)
        .bind(request.location)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Listado filtrado del catálogo
    ///
    /// Substring case-insensitive para category/location, rango inclusivo
    /// para el precio por día. Un filtro NULL no restringe esa dimensión.
    pub async fn find_filtered(&self, filters: &VehicleFilters) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE ($1::text IS NULL OR category ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR location ILIKE '%' || $2 || '%')
              AND ($3::numeric IS NULL OR price_per_day >= $3)
              AND ($4::numeric IS NULL OR price_per_day <= $4)
            ORDER BY created_at DESC
            "#,
        )
        .bind(filters.category.as_deref())
        .bind(filters.location.as_deref())
        .bind(filters.min_price)
        .bind(filters.max_price)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual para los campos no enviados
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET make = $2, model = $3, year = $4, price_per_day = $5,
                image = $6, available = $7, category = $8, location = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.make.unwrap_or(current.make))
        .bind(request.model.unwrap_or(current.model))
        .bind(request.year.unwrap_or(current.year))
        .bind(request.price_per_day.unwrap_or(current.price_per_day))
        .bind(request.image.or(current.image))
        .bind(request.available.unwrap_or(current.available))
        .bind(request.category.unwrap_or(current.category))
        .bind(request.location.unwrap_or(current.location))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Approve/reject: solo cambia el flag 'available', desacoplado de reservas
    pub async fn set_available(
        &self,
        id: Uuid,
        available: bool,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "UPDATE vehicles SET available = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(available)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }
}

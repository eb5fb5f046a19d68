use crate::models::booking::{
    compute_total_price, rental_window, Booking, STATUS_BOOKED,
};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use futures::stream::BoxStream;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Fila de reserva con usuario y vehículo resueltos vía LEFT JOIN
///
/// No hay integridad referencial en el store: el usuario o el vehículo
/// pueden haber sido borrados después de crear la reserva, y entonces
/// sus columnas vienen NULL. La reserva huérfana se devuelve igual.
#[derive(Debug, sqlx::FromRow)]
pub struct BookingDetailRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: Decimal,
    pub paid: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_role: Option<String>,
    pub user_created_at: Option<DateTime<Utc>>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_year: Option<i32>,
    pub price_per_day: Option<Decimal>,
    pub vehicle_image: Option<String>,
    pub vehicle_available: Option<bool>,
    pub vehicle_category: Option<String>,
    pub vehicle_location: Option<String>,
    pub vehicle_created_at: Option<DateTime<Utc>>,
}

/// Fila del historial de alquileres de un vehículo
#[derive(Debug, sqlx::FromRow)]
pub struct RentalHistoryRow {
    pub id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: Decimal,
    pub status: String,
}

const DETAIL_SELECT: &str = r#"
    SELECT b.id, b.user_id, b.vehicle_id, b.start_date, b.end_date,
           b.total_price, b.paid, b.status, b.created_at,
           u.name AS user_name, u.email AS user_email, u.role AS user_role,
           u.created_at AS user_created_at,
           v.make AS vehicle_make, v.model AS vehicle_model, v.year AS vehicle_year,
           v.price_per_day, v.image AS vehicle_image, v.available AS vehicle_available,
           v.category AS vehicle_category, v.location AS vehicle_location,
           v.created_at AS vehicle_created_at
    FROM bookings b
    LEFT JOIN users u ON u.id = b.user_id
    LEFT JOIN vehicles v ON v.id = b.vehicle_id
"#;

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear una reserva con check de solapamiento serializado
    ///
    /// Todo el check-then-write corre dentro de una transacción que toma
    /// un lock FOR UPDATE sobre la fila del vehículo, de modo que dos
    /// creaciones concurrentes para el mismo vehículo no puedan pasar
    /// ambas el check de solapamiento.
    pub async fn create(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
        days: i64,
    ) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await?;

        // Integridad referencial a nivel de aplicación
        let user_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(user_id)
                .fetch_one(&mut *tx)
                .await?;

        if !user_exists {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1 FOR UPDATE")
            .bind(vehicle_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let (start_date, end_date) = rental_window(Utc::now(), days).ok_or_else(|| {
            AppError::Validation("Cantidad de días fuera de rango".to_string())
        })?;

        // Solapamiento inclusivo en ambos extremos:
        // existing.start <= candidate.end AND existing.end >= candidate.start
        let overlaps: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE vehicle_id = $1 AND start_date <= $2 AND end_date >= $3
            )
            "#,
        )
        .bind(vehicle_id)
        .bind(end_date)
        .bind(start_date)
        .fetch_one(&mut *tx)
        .await?;

        if overlaps {
            return Err(AppError::Conflict("El vehículo ya está reservado".to_string()));
        }

        // total_price se congela al crear: cambios posteriores de tarifa
        // no afectan reservas existentes
        let total_price = compute_total_price(vehicle.price_per_day, days);

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (id, user_id, vehicle_id, start_date, end_date,
                                  total_price, paid, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, FALSE, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(vehicle_id)
        .bind(start_date)
        .bind(end_date)
        .bind(total_price)
        .bind(STATUS_BOOKED)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Marcar como pagada, sin guardas sobre el estado actual
    pub async fn set_paid(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET paid = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    pub async fn find_all_detailed(&self) -> Result<Vec<BookingDetailRow>, AppError> {
        let sql = format!("{} ORDER BY b.created_at DESC", DETAIL_SELECT);
        let bookings = sqlx::query_as::<_, BookingDetailRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(bookings)
    }

    pub async fn find_detail_by_id(&self, id: Uuid) -> Result<Option<BookingDetailRow>, AppError> {
        let sql = format!("{} WHERE b.id = $1", DETAIL_SELECT);
        let booking = sqlx::query_as::<_, BookingDetailRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    /// Stream perezoso del historial de un vehículo, más reciente primero
    pub fn rental_history(
        &self,
        vehicle_id: Uuid,
    ) -> BoxStream<'_, Result<RentalHistoryRow, sqlx::Error>> {
        sqlx::query_as::<_, RentalHistoryRow>(
            r#"
            SELECT b.id, u.name AS user_name, u.email AS user_email,
                   b.start_date, b.end_date, b.total_price, b.status
            FROM bookings b
            JOIN users u ON u.id = b.user_id
            WHERE b.vehicle_id = $1
            ORDER BY b.start_date DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch(&self.pool)
    }

    /// Fechas de fin de las reservas de un usuario sobre un vehículo
    ///
    /// El caller decide la eligibilidad para review con `rental_finished`.
    pub async fn booking_end_dates(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
    ) -> Result<Vec<DateTime<Utc>>, AppError> {
        let end_dates: Vec<DateTime<Utc>> = sqlx::query_scalar(
            "SELECT end_date FROM bookings WHERE user_id = $1 AND vehicle_id = $2",
        )
        .bind(user_id)
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(end_dates)
    }
}

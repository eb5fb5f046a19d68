//! Modelo de Booking
//!
//! Este módulo contiene el struct Booking y las reglas puras del ciclo de
//! vida de una reserva: ventana de alquiler, detección de solapamiento,
//! precio total y duración en días.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estados permitidos para una reserva
pub const STATUS_BOOKED: &str = "booked";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";
pub const BOOKING_STATUSES: [&str; 3] = [STATUS_BOOKED, STATUS_COMPLETED, STATUS_CANCELLED];

/// Booking principal - mapea exactamente a la tabla bookings
///
/// user_id y vehicle_id son referencias sin integridad referencial en el
/// store: la existencia se verifica en el momento de la escritura.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: Decimal,
    pub paid: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Calcular la ventana de alquiler a partir de "ahora" y la cantidad de días
///
/// Devuelve None si la cantidad de días no cabe en el calendario; el
/// caller lo traduce a un error de validación.
pub fn rental_window(now: DateTime<Utc>, days: i64) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let end = now.checked_add_signed(Duration::try_days(days)?)?;
    Some((now, end))
}

/// Una reserva se puede cancelar salvo que ya esté completada
pub fn can_cancel(status: &str) -> bool {
    status != STATUS_COMPLETED
}

/// Una reserva ya terminó, inclusivo en el borde: habilita reseñar el vehículo
pub fn rental_finished(end_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    end_date <= now
}

/// Test de solapamiento de intervalos, inclusivo en ambos extremos
///
/// Dos reservas del mismo vehículo chocan si
/// existing.start <= candidate.end AND existing.end >= candidate.start.
/// Inclusivo a propósito: es más estricto que el test semiabierto.
pub fn intervals_overlap(
    existing_start: DateTime<Utc>,
    existing_end: DateTime<Utc>,
    candidate_start: DateTime<Utc>,
    candidate_end: DateTime<Utc>,
) -> bool {
    existing_start <= candidate_end && existing_end >= candidate_start
}

/// Precio total de la reserva: price_per_day × days, congelado al crear
pub fn compute_total_price(price_per_day: Decimal, days: i64) -> Decimal {
    price_per_day * Decimal::from(days)
}

/// Duración en días de una reserva: ceil((end − start) / 1 día)
pub fn duration_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let seconds = (end - start).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    (seconds + 86_399) / 86_400
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    fn ts(offset_days: i64) -> DateTime<Utc> {
        Utc::now() + Duration::days(offset_days)
    }

    #[test]
    fn test_rental_window() {
        let now = Utc::now();
        let (start, end) = rental_window(now, 3).unwrap();
        assert_eq!(start, now);
        assert_eq!(end, now + Duration::days(3));
    }

    #[test]
    fn test_rental_window_rejects_calendar_overflow() {
        // Cantidades absurdas de días no deben reventar la aritmética de fechas
        assert!(rental_window(Utc::now(), 100_000_000).is_none());
        assert!(rental_window(Utc::now(), i64::MAX).is_none());
    }

    #[test]
    fn test_can_cancel() {
        assert!(can_cancel(STATUS_BOOKED));
        assert!(can_cancel(STATUS_CANCELLED));
        assert!(!can_cancel(STATUS_COMPLETED));
    }

    #[test]
    fn test_rental_finished_inclusive_boundary() {
        let now = Utc::now();
        assert!(rental_finished(now - Duration::days(1), now));
        // Termina exactamente ahora: cuenta como terminada
        assert!(rental_finished(now, now));
        assert!(!rental_finished(now + Duration::days(1), now));
    }

    #[test]
    fn test_intervals_overlap_basic() {
        // [0, 3] vs [1, 2] - contenido
        assert!(intervals_overlap(ts(0), ts(3), ts(1), ts(2)));
        // [0, 3] vs [2, 5] - parcial
        assert!(intervals_overlap(ts(0), ts(3), ts(2), ts(5)));
        // [0, 3] vs [4, 6] - disjunto
        assert!(!intervals_overlap(ts(0), ts(3), ts(4), ts(6)));
    }

    #[test]
    fn test_intervals_overlap_inclusive_both_ends() {
        let boundary = Utc::now();
        // existing termina exactamente donde empieza el candidato: choca
        assert!(intervals_overlap(
            boundary - Duration::days(2),
            boundary,
            boundary,
            boundary + Duration::days(2),
        ));
        // existing empieza exactamente donde termina el candidato: choca
        assert!(intervals_overlap(
            boundary,
            boundary + Duration::days(2),
            boundary - Duration::days(2),
            boundary,
        ));
    }

    #[test]
    fn test_compute_total_price() {
        let price = Decimal::from_f64(50.0).unwrap();
        assert_eq!(compute_total_price(price, 3), Decimal::from(150));
        assert_eq!(compute_total_price(price, 1), Decimal::from(50));

        let fractional = Decimal::from_f64(19.99).unwrap();
        assert_eq!(
            compute_total_price(fractional, 2),
            Decimal::from_f64(39.98).unwrap()
        );
    }

    #[test]
    fn test_duration_days_exact() {
        let start = Utc::now();
        assert_eq!(duration_days(start, start + Duration::days(3)), 3);
        assert_eq!(duration_days(start, start + Duration::days(1)), 1);
    }

    #[test]
    fn test_duration_days_rounds_up() {
        let start = Utc::now();
        let end = start + Duration::days(2) + Duration::hours(5);
        assert_eq!(duration_days(start, end), 3);

        let short = start + Duration::hours(1);
        assert_eq!(duration_days(start, short), 1);
    }

    #[test]
    fn test_duration_days_degenerate() {
        let start = Utc::now();
        assert_eq!(duration_days(start, start), 0);
    }

    #[test]
    fn test_booking_statuses() {
        assert!(BOOKING_STATUSES.contains(&STATUS_BOOKED));
        assert!(BOOKING_STATUSES.contains(&STATUS_COMPLETED));
        assert!(BOOKING_STATUSES.contains(&STATUS_CANCELLED));
        assert!(!BOOKING_STATUSES.contains(&"refunded"));
    }
}

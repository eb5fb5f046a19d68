use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters};
use crate::dto::ApiResponse;
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_positive;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: VehicleFilters) -> Result<Vec<Vehicle>, AppError> {
        self.repository.find_filtered(&filters).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Vehicle, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if validate_positive(request.price_per_day).is_err() {
            return Err(AppError::Validation(
                "El precio por día debe ser positivo".to_string(),
            ));
        }

        let vehicle = self.repository.create(request).await?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(price) = request.price_per_day {
            if validate_positive(price).is_err() {
                return Err(AppError::Validation(
                    "El precio por día debe ser positivo".to_string(),
                ));
            }
        }

        let vehicle = self.repository.update(id, request).await?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(ApiResponse::message_only("Vehículo eliminado".to_string()))
    }

    /// Approve: marca el vehículo como disponible en el catálogo
    pub async fn approve(&self, id: Uuid) -> Result<ApiResponse<Vehicle>, AppError> {
        let vehicle = self
            .repository
            .set_available(id, true)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehículo aprobado".to_string(),
        ))
    }

    /// Reject: retira el vehículo del catálogo disponible
    pub async fn reject(&self, id: Uuid) -> Result<ApiResponse<Vehicle>, AppError> {
        let vehicle = self
            .repository
            .set_available(id, false)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehículo rechazado".to_string(),
        ))
    }
}

use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::dto::ApiResponse;
use crate::models::user::{UserResponse, ROLE_USER, USER_ROLES};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::{validate_email, validate_enum, validate_not_empty};
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use validator::Validate;

pub struct AuthController {
    repository: UserRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // Validar campos
        if validate_not_empty(&request.name).is_err() {
            return Err(AppError::Validation("El nombre es requerido".to_string()));
        }

        if validate_email(&request.email).is_err() {
            return Err(AppError::Validation("Email inválido".to_string()));
        }

        if validate_not_empty(&request.password).is_err() {
            return Err(AppError::Validation("La contraseña es requerida".to_string()));
        }

        // Rol por defecto: user
        let role = request.role.unwrap_or_else(|| ROLE_USER.to_string());
        if validate_enum(role.as_str(), &USER_ROLES).is_err() {
            return Err(AppError::Validation(format!("Rol desconocido: {}", role)));
        }

        // Verificar que el email no exista
        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        // Hash de la contraseña
        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let user = self
            .repository
            .create(request.name, request.email, password_hash, role)
            .await?;

        Ok(ApiResponse::success_with_message(
            UserResponse::from(user),
            "Registro exitoso".to_string(),
        ))
    }

    pub async fn login(
        &self,
        request: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        // Buscar usuario por email
        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        // Si el cliente pide un rol, el rol almacenado debe coincidir
        if let Some(ref role) = request.role {
            if user.role != *role {
                return Err(AppError::Forbidden(format!("No tienes el rol '{}'", role)));
            }
        }

        // Verificar contraseña
        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(user.id, &user.role, jwt_config)?;

        Ok(LoginResponse {
            token,
            user: UserResponse::from(user),
        })
    }
}

#[cfg(test)]
mod tests {
    use bcrypt::{hash, verify};

    // Cost mínimo para no ralentizar la suite
    #[test]
    fn test_bcrypt_roundtrip() {
        let hashed = hash("hunter2", 4).unwrap();
        assert!(verify("hunter2", &hashed).unwrap());
        assert!(!verify("hunter3", &hashed).unwrap());
    }
}

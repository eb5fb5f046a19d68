use crate::models::user::UserResponse;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct AdminController {
    users: UserRepository,
}

impl AdminController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Listado de usuarios sin credenciales
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.users.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}

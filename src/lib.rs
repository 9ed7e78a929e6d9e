mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, list_field, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{auth, db, media};

use auth::jwt::JwtService;
use media::MediaStore;
use repositories::sqlx_repo::{
    SqlxCertificationRepo, SqlxContactRepo, SqlxExperienceRepo, SqlxProfileRepo,
    SqlxProjectRepo, SqlxSkillRepo, SqlxUserRepo,
};
use use_cases::auth::AuthHandler;

pub type AppAuthHandler = AuthHandler<SqlxUserRepo, JwtService>;

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub profile_repo: SqlxProfileRepo,
    pub experience_repo: SqlxExperienceRepo,
    pub skill_repo: SqlxSkillRepo,
    pub project_repo: SqlxProjectRepo,
    pub certification_repo: SqlxCertificationRepo,
    pub contact_repo: SqlxContactRepo,
    pub media: MediaStore,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::SqlitePool) -> Self {
        let jwt_service = JwtService::new(config);
        let user_repo = SqlxUserRepo::new(pool.clone());
        let auth_handler = AuthHandler::new(user_repo, jwt_service);

        AppState {
            auth_handler,
            profile_repo: SqlxProfileRepo::new(pool.clone()),
            experience_repo: SqlxExperienceRepo::new(pool.clone()),
            skill_repo: SqlxSkillRepo::new(pool.clone()),
            project_repo: SqlxProjectRepo::new(pool.clone()),
            certification_repo: SqlxCertificationRepo::new(pool.clone()),
            contact_repo: SqlxContactRepo::new(pool),
            media: MediaStore::new(&config.upload_dir),
        }
    }
}

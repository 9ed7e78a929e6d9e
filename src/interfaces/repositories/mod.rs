pub mod certification;
pub mod contact;
pub mod experience;
pub mod profile;
pub mod project;
pub mod skill;
pub mod sqlx_repo;
pub mod token;
pub mod user;

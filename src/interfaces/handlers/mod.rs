pub mod auth;
pub mod certifications;
pub mod experiences;
pub mod json_error;
pub mod messages;
pub mod profile;
pub mod projects;
pub mod public;
pub mod skills;
pub mod system;
pub mod uploads;

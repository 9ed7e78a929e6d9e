pub mod certification;
pub mod contact;
pub mod experience;
pub mod profile;
pub mod project;
pub mod skill;
pub mod token;
pub mod user;

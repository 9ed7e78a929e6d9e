pub mod entities;
pub mod list_field;
pub mod use_cases;

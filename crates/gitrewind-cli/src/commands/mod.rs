//! CLI command implementations

pub mod compose;
pub mod generate;
pub mod layout;
pub mod params;
pub mod validate;

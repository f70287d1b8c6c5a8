pub mod context;
pub mod definition;
pub mod error;

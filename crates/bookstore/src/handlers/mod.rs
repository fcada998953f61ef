pub mod error;
pub mod health;
pub mod resolve;

pub use error::AppError;

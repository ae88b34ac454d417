pub mod health_handler;
pub mod home_handler;
pub mod oauth;

pub use health_handler::health_handler;
pub use home_handler::home_handler;

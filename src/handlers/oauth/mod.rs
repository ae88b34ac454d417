pub mod callback_handler;
pub mod exchange;

pub use callback_handler::callback_handler;

pub mod extractor;
pub mod naming;
pub mod parameter_error_handler;

pub use extractor::SafeIDI64;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;

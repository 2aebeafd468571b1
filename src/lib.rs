pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod location;
pub mod metrics;
pub mod validation;

pub use error::RequestValidationError;
pub use handlers::response::{ErrorEnvelope, NormalizedDetail, respond};
pub use location::{Location, Segment, normalize};
pub use validation::RawError;

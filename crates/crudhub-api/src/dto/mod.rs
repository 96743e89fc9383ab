//! Data transfer objects: submitted forms, form view state, and JSON
//! responses.

pub mod form;
pub mod request;
pub mod response;

pub use form::{FieldErrors, FormView, form_level_error, validate_form};
pub use request::SecurityForm;
pub use response::HealthResponse;

pub mod errors;
pub mod quiz;
pub mod response;
pub mod validate;
pub mod views;

pub use errors::ApiError;
pub use response::{AssetKind, Body, Response};

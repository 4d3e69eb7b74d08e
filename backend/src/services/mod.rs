pub mod generate;
pub mod meta;

use crate::error::GenerateError;
use actix_web::web;
use common::requests::ValidationError;

/// JSON extractor settings shared by every endpoint.
///
/// Bodies that cannot be decoded get the same `INVALID_REQUEST` error body as
/// requests that fail validation.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            GenerateError::from(ValidationError::MalformedBody(err.to_string())).into()
        })
}

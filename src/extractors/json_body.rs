//! Lenient JSON body extractor: any unreadable or unparseable body becomes a validation error
//! instead of axum's own rejection, so create endpoints keep a single error shape.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;

/// Raw JSON body. Content-Type is not checked.
#[derive(Clone, Debug)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(format!("unreadable body: {}", e)))?;
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Validation(format!("invalid JSON: {}", e)))?;
        Ok(JsonBody(value))
    }
}

//! Request body extractor for the rate and comment endpoints.
//!
//! Accepts JSON and `application/x-www-form-urlencoded` bodies. An empty body
//! yields `T::default()`, so missing fields surface as validation errors
//! rather than parse failures.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body limit shared by both encodings. Oversized or unreadable bodies become
/// generic server errors.
pub fn payload_config(limit: usize) -> web::PayloadConfig {
    web::PayloadConfig::new(limit)
}

/// A request body decoded from JSON or a urlencoded form.
#[derive(Debug)]
pub struct FormOrJson<T>(pub T);

impl<T> FormOrJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for FormOrJson<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let is_form = req.content_type() == FORM_CONTENT_TYPE;
        let body = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let bytes = body
                .await
                .map_err(|e| AppError::Unhandled(format!("Unreadable body: {}", e)))?;
            Ok(FormOrJson(decode(&bytes, is_form)?))
        })
    }
}

fn decode<T: DeserializeOwned + Default>(body: &[u8], is_form: bool) -> AppResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    if is_form {
        let form = std::str::from_utf8(body)
            .map_err(|e| AppError::Unhandled(format!("Invalid form body: {}", e)))?;
        web::Query::<T>::from_query(form)
            .map(web::Query::into_inner)
            .map_err(|e| AppError::Unhandled(format!("Invalid form body: {}", e)))
    } else {
        serde_json::from_slice(body)
            .map_err(|e| AppError::Unhandled(format!("Invalid JSON body: {}", e)))
    }
}

//! Stateless request builder and reply parser for the connector endpoint.
//!
//! # Design
//! `Dispatcher` holds only the token and the endpoint. `build_call` turns a
//! method name and parameters into an `HttpRequest`; `parse_reply` turns an
//! `HttpResponse` into a `Reply`. Neither touches the network, so both are
//! covered by plain unit tests and test vectors.

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, FORM_CONTENT_TYPE, TOKEN_HEADER};
use crate::types::{Envelope, Params, Reply, Token};

#[derive(Debug, Clone)]
pub struct Dispatcher {
    token: Token,
    endpoint: String,
}

impl Dispatcher {
    pub fn new(token: Token, config: &ClientConfig) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self {
            token,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the `POST` for one remote call.
    pub fn build_call(&self, method: &str, params: &Params) -> Result<HttpRequest, ApiError> {
        let envelope = Envelope::new(method, params)?;
        debug!(
            method = %envelope.method,
            has_parameters = envelope.parameters.is_some(),
            "building connector call"
        );
        Ok(HttpRequest {
            url: self.endpoint.clone(),
            headers: vec![
                (TOKEN_HEADER.to_string(), self.token.expose().to_string()),
                ("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()),
            ],
            body: envelope.to_form(),
        })
    }

    /// Decode a connector reply.
    ///
    /// The status code is ignored: the connector reports its own failures
    /// inside the JSON body, and anything that is not a JSON object (an
    /// intermediary's HTML error page, say) fails decoding.
    pub fn parse_reply(&self, response: HttpResponse) -> Result<Reply, ApiError> {
        Reply::try_from(self.parse_reply_value(response)?)
    }

    /// Decode any JSON document, object or not.
    pub fn parse_reply_value(&self, response: HttpResponse) -> Result<serde_json::Value, ApiError> {
        let text = String::from_utf8(response.body).map_err(|e| {
            debug!(status = response.status, "reply body is not UTF-8");
            ApiError::Decode(e.to_string())
        })?;
        let value: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
            debug!(status = response.status, "reply body is not JSON");
            ApiError::Decode(e.to_string())
        })?;
        Ok(value)
    }
}

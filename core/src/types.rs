//! Values that flow through a connector call.
//!
//! # Design
//! `Params` wraps an insertion-ordered JSON object so the wire order matches
//! the order the caller built it in. `Reply` wraps the decoded JSON object and
//! exposes read-only helpers for the fields the connector always sends; it
//! never turns a remote `"ERROR"` status into a Rust error.

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Environment variable read by `Token::from_env`.
pub const TOKEN_ENV: &str = "BASELINKER_TOKEN";

/// Opaque API token sent in the `X-BLToken` header.
///
/// Never empty. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ApiError::Configuration(
                "API token must be set; generate one in the BaseLinker panel under My account > API".to_string(),
            ));
        }
        Ok(Self(token))
    }

    /// Build a token from an optional value, failing when it is absent.
    pub fn from_option(token: Option<String>) -> Result<Self, ApiError> {
        match token {
            Some(token) => Self::new(token),
            None => Err(ApiError::Configuration("API token is missing".to_string())),
        }
    }

    /// Read the token from `BASELINKER_TOKEN`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_option(std::env::var(TOKEN_ENV).ok())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

impl TryFrom<&str> for Token {
    type Error = ApiError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Token {
    type Error = ApiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Named parameters of a remote call, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert any serializable value. Replaces an existing value under `key`.
    pub fn insert_serialized<T: Serialize + ?Sized>(&mut self, key: impl Into<String>, value: &T) -> Result<(), ApiError> {
        let value = serde_json::to_value(value).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.0.insert(key.into(), value);
        Ok(())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Params {
    type Error = ApiError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ApiError::Encode(format!("parameters must be a JSON object, got {other}"))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for Params {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Build `Params` from `key => value` pairs.
///
/// ```
/// let params = baselinker_core::params! { "order_id" => 123, "status_id" => 7 };
/// assert_eq!(params.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
    () => { $crate::Params::new() };
    ( $( $key:expr => $value:expr ),+ $(,)? ) => {
        $crate::Params::new() $( .with($key, $value) )+
    };
}

/// The outbound envelope: remote method name plus optional JSON-encoded
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub method: String,
    /// `None` when the call has no parameters; the connector treats an absent
    /// field differently from an empty object.
    pub parameters: Option<String>,
}

impl Envelope {
    pub fn new(method: &str, params: &Params) -> Result<Self, ApiError> {
        if method.is_empty() {
            return Err(ApiError::InvalidMethod);
        }
        let parameters = if params.is_empty() {
            None
        } else {
            Some(encode_parameters(params)?)
        };
        Ok(Self {
            method: method.to_string(),
            parameters,
        })
    }

    /// Form-encode as `method=..[&parameters=..]`.
    pub fn to_form(&self) -> String {
        let mut form = form_urlencoded::Serializer::new(String::new());
        form.append_pair("method", &self.method);
        if let Some(parameters) = &self.parameters {
            form.append_pair("parameters", parameters);
        }
        form.finish()
    }
}

/// JSON layout the connector's reference clients produce: `", "` between
/// items, `": "` after keys, and non-ASCII characters as `\uXXXX` escapes
/// (UTF-16 surrogate pairs outside the BMP).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectorFormatter;

impl Formatter for ConnectorFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W: ?Sized + io::Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize parameters the way they travel in the `parameters` form field.
pub fn encode_parameters(params: &Params) -> Result<String, ApiError> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, ConnectorFormatter);
    params
        .serialize(&mut serializer)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Decoded reply object, returned as the connector sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reply(Map<String, Value>);

impl Reply {
    /// The `status` field, usually `"SUCCESS"` or `"ERROR"`.
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    pub fn is_success(&self) -> bool {
        self.status() == Some("SUCCESS")
    }

    pub fn error_code(&self) -> Option<&str> {
        self.0.get("error_code").and_then(Value::as_str)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.0.get("error_message").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Deserialize the whole reply into a caller-defined type.
    pub fn into_typed<T: serde::de::DeserializeOwned>(self) -> Result<T, ApiError> {
        serde_json::from_value(Value::Object(self.0)).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl From<Reply> for Value {
    fn from(reply: Reply) -> Self {
        Value::Object(reply.0)
    }
}

impl TryFrom<Value> for Reply {
    type Error = ApiError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ApiError::Decode(format!("expected a JSON object, got {other}"))),
        }
    }
}

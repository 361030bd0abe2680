//! Blocking client for the BaseLinker connector API.
//!
//! # Overview
//! Every BaseLinker operation is one `POST` to a single endpoint carrying a
//! form-encoded envelope (`method` plus optional JSON `parameters`) and an
//! `X-BLToken` header. This crate builds that envelope, sends it, and hands
//! back the decoded JSON reply without interpreting it.
//!
//! # Design
//! - `Dispatcher` is pure: `build_call` produces an `HttpRequest`,
//!   `parse_reply` consumes an `HttpResponse`.
//! - `Transport` does the I/O; `UreqTransport` is the default.
//! - `Baselinker` ties the two together and exposes `call` plus the
//!   generated `orders`, `external_storages`, and `product_catalog` facades.
//! - A reply with `"status": "ERROR"` is data, not an `Err`.

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod facade;
pub mod http;
pub mod transport;
pub mod types;

pub use client::Baselinker;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use dispatcher::Dispatcher;
pub use error::ApiError;
pub use facade::{ExternalStorages, Orders, ProductCatalog, RemoteMethod};
pub use http::{HttpRequest, HttpResponse, TOKEN_HEADER};
pub use transport::{Transport, UreqTransport};
pub use types::{Envelope, Params, Reply, Token};

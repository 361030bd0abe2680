//! The BaseLinker client: dispatcher plus transport plus facades.

use tracing::debug;

use crate::config::ClientConfig;
use crate::dispatcher::Dispatcher;
use crate::error::ApiError;
use crate::facade::{ExternalStorages, Orders, ProductCatalog};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Params, Reply, Token};

/// Blocking client for the BaseLinker connector.
///
/// Holds only immutable state, so one instance can be shared by reference
/// across threads.
///
/// ```no_run
/// use baselinker_core::{params, Baselinker};
///
/// let client = Baselinker::new("my-api-token")?;
/// let reply = client.call("getOrders", params! { "date_from" => 1_700_000_000 })?;
/// if !reply.is_success() {
///     eprintln!("connector said: {:?}", reply.error_message());
/// }
/// # Ok::<(), baselinker_core::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Baselinker<T: Transport = UreqTransport> {
    dispatcher: Dispatcher,
    transport: T,
}

impl Baselinker<UreqTransport> {
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_config(token, ClientConfig::default())
    }

    pub fn with_config(token: impl Into<String>, config: ClientConfig) -> Result<Self, ApiError> {
        let transport = UreqTransport::new(&config);
        Self::with_transport(token, config, transport)
    }

    /// Token from `BASELINKER_TOKEN`, config from `ClientConfig::from_env`.
    pub fn from_env() -> Result<Self, ApiError> {
        let token = Token::from_env()?;
        let config = ClientConfig::from_env()?;
        let transport = UreqTransport::new(&config);
        Ok(Self {
            dispatcher: Dispatcher::new(token, &config)?,
            transport,
        })
    }
}

impl<T: Transport> Baselinker<T> {
    /// Build a client over a caller-supplied transport. Fails before any I/O
    /// when the token is empty.
    pub fn with_transport(token: impl Into<String>, config: ClientConfig, transport: T) -> Result<Self, ApiError> {
        let token = Token::new(token)?;
        Ok(Self {
            dispatcher: Dispatcher::new(token, &config)?,
            transport,
        })
    }

    /// Invoke a remote method with the given parameters and return the
    /// decoded reply as-is.
    pub fn call(&self, method: &str, params: Params) -> Result<Reply, ApiError> {
        let request = self.dispatcher.build_call(method, &params)?;
        let response = self.transport.execute(&request)?;
        let reply = self.dispatcher.parse_reply(response)?;
        debug!(method, status = reply.status().unwrap_or("-"), "connector call finished");
        Ok(reply)
    }

    /// Like `call`, but returns whatever JSON document came back, including
    /// arrays and scalars.
    pub fn call_raw(&self, method: &str, params: Params) -> Result<serde_json::Value, ApiError> {
        let request = self.dispatcher.build_call(method, &params)?;
        let response = self.transport.execute(&request)?;
        self.dispatcher.parse_reply_value(response)
    }

    pub fn orders(&self) -> Orders<'_, T> {
        Orders::new(self)
    }

    pub fn external_storages(&self) -> ExternalStorages<'_, T> {
        ExternalStorages::new(self)
    }

    pub fn product_catalog(&self) -> ProductCatalog<'_, T> {
        ProductCatalog::new(self)
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

//! Typed convenience methods over `Baselinker::call`.
//!
//! # Design
//! Each resource group is a table of `rust_name => "remoteName"(required;
//! optional)` entries expanded by `remote_methods!`. Required parameters are
//! positional and always sent; optional ones arrive in a trailing `Params`
//! and are checked against the table before anything goes on the wire.
//! The tables are also exported as data (`METHODS`) so tests and tooling can
//! walk them.

/// One row of a facade table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteMethod {
    /// Rust method name on the facade.
    pub name: &'static str,
    /// Remote procedure name sent as `method`.
    pub remote: &'static str,
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

impl RemoteMethod {
    pub fn accepts(&self, key: &str) -> bool {
        self.required.contains(&key) || self.optional.contains(&key)
    }
}

macro_rules! remote_methods {
    (
        $(#[$group_meta:meta])*
        pub struct $group:ident;
        $(
            $(#[$meta:meta])*
            fn $name:ident => $remote:literal ( $($req:ident),* $(; $($opt:ident),+ )? );
        )*
    ) => {
        $(#[$group_meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $group<'a, T: $crate::transport::Transport> {
            client: &'a $crate::client::Baselinker<T>,
        }

        /// Every remote method this group exposes, in declaration order.
        pub const METHODS: &[$crate::facade::RemoteMethod] = &[
            $(
                $crate::facade::RemoteMethod {
                    name: stringify!($name),
                    remote: $remote,
                    required: &[$(stringify!($req)),*],
                    optional: &[$($(stringify!($opt)),+)?],
                },
            )*
        ];

        impl<'a, T: $crate::transport::Transport> $group<'a, T> {
            pub(crate) fn new(client: &'a $crate::client::Baselinker<T>) -> Self {
                Self { client }
            }

            $(
                remote_methods!(@method [$(#[$meta])*] $name $remote [$($req),*] $([$($opt),+])?);
            )*
        }
    };

    (@method [$(#[$meta:meta])*] $name:ident $remote:literal [$($req:ident),*]) => {
        $(#[$meta])*
        #[allow(clippy::too_many_arguments)]
        pub fn $name(
            &self,
            $($req: impl ::serde::Serialize,)*
        ) -> Result<$crate::types::Reply, $crate::error::ApiError> {
            #[allow(unused_mut)]
            let mut params = $crate::types::Params::new();
            $( params.insert_serialized(stringify!($req), &$req)?; )*
            self.client.call($remote, params)
        }
    };

    (@method [$(#[$meta:meta])*] $name:ident $remote:literal [$($req:ident),*] [$($opt:ident),+]) => {
        $(#[$meta])*
        ///
        #[doc = concat!("Optional parameters: ", $("`", stringify!($opt), "` "),+)]
        #[allow(clippy::too_many_arguments)]
        pub fn $name(
            &self,
            $($req: impl ::serde::Serialize,)*
            options: $crate::types::Params,
        ) -> Result<$crate::types::Reply, $crate::error::ApiError> {
            const ACCEPTED: &[&str] = &[$(stringify!($opt)),+];
            #[allow(unused_mut)]
            let mut params = $crate::types::Params::new();
            $( params.insert_serialized(stringify!($req), &$req)?; )*
            for (key, value) in options {
                if !ACCEPTED.contains(&key.as_str()) {
                    return Err($crate::error::ApiError::UnexpectedParameter {
                        method: $remote,
                        name: key,
                    });
                }
                params.insert(key, value);
            }
            self.client.call($remote, params)
        }
    };
}

pub mod external_storages;
pub mod orders;
pub mod product_catalog;

pub use external_storages::ExternalStorages;
pub use orders::Orders;
pub use product_catalog::ProductCatalog;

/// All facade tables, in the order the groups are exposed on the client.
pub fn all_methods() -> impl Iterator<Item = &'static RemoteMethod> {
    orders::METHODS
        .iter()
        .chain(external_storages::METHODS)
        .chain(product_catalog::METHODS)
}

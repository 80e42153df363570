//! Client-side API access and state layer for the budget tracker.
//!
//! Everything the views need to talk to the backend lives here:
//!
//! - [`api::ApiClient`]: the single choke point for outbound HTTP calls,
//!   with bearer-credential injection and error normalization
//! - [`api`] resource handles for the authentication, transaction, and
//!   budget endpoints
//! - [`credentials`]: where the bearer token lives between requests
//! - [`store`]: the composed client state tree and its slice reducers
//!
//! The view layer itself (routing, forms, rendering) is out of scope.

pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod store;

pub use api::{ApiClient, AuthApi, BudgetsApi, RequestOverrides, TransactionsApi};
pub use config::Config;
pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use error::{ApiError, Result};
pub use store::{Action, Store};

//! Form relay client.
//!
//! Wires the pure pieces of `formrelay_core` to the outside world:
//!
//! - [`RelayConfig`]: API base URL, timeout and status handling.
//! - [`Transport`]: JSON POST seam, with [`ReqwestTransport`] for real HTTP.
//! - [`FormSurface`]: what the relay needs from a page; [`MemoryForm`]
//!   implements it in memory.
//! - [`FormRelay`]: validates a form and posts it to the flow and contact
//!   endpoints.

pub mod api;
pub mod config;
pub mod submitter;
pub mod surface;
pub mod transport;

pub use config::{ConfigError, RelayConfig};
pub use submitter::{FormRelay, SubmitError};
pub use surface::{Control, FormSurface, MemoryForm};
pub use transport::{ReqwestTransport, Transport, TransportError};

//! Subnet resolution HTTP service library.
//!
//! One endpoint: `GET /subnet?<ip>&<mask>` answers with the network portion
//! of the address. The resolver core is pure and synchronous; the HTTP
//! layer is thin glue around it.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resolver;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use resolver::{ResolveError, SubnetResolver};

//! Subnet resolution subsystem.
//!
//! # Data Flow
//! ```text
//! raw resource path ("/subnet?<ip>&<mask>")
//!     → engine.rs (prefix + shape classification)
//!     → extract.rs (pull ip / mask / query out of the path)
//!     → format.rs (address and mask format checks)
//!     → mask.rs (bit-count expansion, octet-wise AND)
//!     → response body string
//! ```
//!
//! # Design Decisions
//! - The whole subsystem is pure: no I/O, no shared mutable state
//! - The HTTP layer sees one entry point, [`SubnetResolver::resolve`]
//! - Refusals are classified, not described: the caller picks the status

pub mod engine;
pub mod error;
pub mod extract;
pub mod format;
pub mod mask;

pub use engine::{SubnetResolver, INVALID_ENTRY, RESOURCE_PREFIX};
pub use error::ResolveError;

//! Resolver error taxonomy.

use thiserror::Error;

/// Classification for a request the resolver refuses.
///
/// The display text is the message the HTTP layer serves alongside the
/// matching status code. Computation itself never errors: a query that
/// validates but fails octet checks yields the `"invalid entry"` body
/// instead of a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Resource does not name the subnet endpoint.
    #[error("Resource must begin with: /subnet")]
    PrefixInvalid,

    /// Resource names the endpoint but fails shape or format validation.
    #[error("Resource is in invalid format")]
    ShapeInvalid,
}

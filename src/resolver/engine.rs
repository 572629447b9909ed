//! Query validation and subnet computation.
//!
//! # Responsibilities
//! - Validate the raw resource path shape
//! - Classify refused requests (prefix vs. format)
//! - Compute the network address for a valid query
//!
//! # Design Decisions
//! - Pure and synchronous: every operation is a function of its input string
//! - Malformed input is a classification, never a panic
//! - `"invalid entry"` is a value, not an error; it travels in a 200 body

use regex::Regex;
use std::sync::OnceLock;

use crate::config::ResolverConfig;
use crate::resolver::error::ResolveError;
use crate::resolver::extract;
use crate::resolver::format;
use crate::resolver::mask;

/// Sentinel body for a query that reaches computation but fails
/// octet-level validation.
pub const INVALID_ENTRY: &str = "invalid entry";

/// Literal prefix every resolvable resource must carry.
pub const RESOURCE_PREFIX: &str = "/subnet";

static DOTTED_SHAPE_PATTERN: OnceLock<Regex> = OnceLock::new();
static BIT_SHAPE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn dotted_shape_pattern() -> &'static Regex {
    DOTTED_SHAPE_PATTERN.get_or_init(|| {
        Regex::new(r"^/subnet\?[\d.]{7,15}&[\d.]{7,15}$").expect("Invalid Regex")
    })
}

fn bit_shape_pattern() -> &'static Regex {
    BIT_SHAPE_PATTERN.get_or_init(|| {
        Regex::new(r"^/subnet\?[\d.]{7,15}&([0-2]?[0-9]|30|31)$").expect("Invalid Regex")
    })
}

/// Resolver for `/subnet` queries.
///
/// Compiled once from [`ResolverConfig`] and shared read-only across request
/// handlers; it holds no mutable state, so concurrent use needs no
/// coordination.
#[derive(Debug)]
pub struct SubnetResolver {
    /// Address format pattern; strict mode pins the first octet to three
    /// digits.
    ip_pattern: Regex,
}

impl SubnetResolver {
    /// Build a resolver from configuration.
    pub fn from_config(config: &ResolverConfig) -> Self {
        let pattern = if config.strict_leading_octet {
            r"^[0-9]{3}\.([0-9]{1,3}\.){2}[0-9]{1,3}$"
        } else {
            r"^[0-9]{1,3}\.([0-9]{1,3}\.){2}[0-9]{1,3}$"
        };
        Self {
            ip_pattern: Regex::new(pattern).expect("Invalid Regex"),
        }
    }

    /// Returns true if `s` is shaped like a dotted-decimal IPv4 address.
    ///
    /// Octet values are not range-checked; `999.0.0.1` is shaped like an
    /// address under either mode.
    pub fn is_ip_format(&self, s: &str) -> bool {
        self.ip_pattern.is_match(s)
    }

    /// Returns true if the resource names the subnet endpoint.
    pub fn path_starts_correctly(&self, path: &str) -> bool {
        path.starts_with(RESOURCE_PREFIX)
    }

    /// Returns true if the full resource matches `/subnet?<ip>&<mask>` and
    /// both extracted pieces pass their format checks.
    pub fn path_has_valid_shape(&self, path: &str) -> bool {
        if !dotted_shape_pattern().is_match(path) && !bit_shape_pattern().is_match(path) {
            return false;
        }
        let (Some(ip), Some(mask_part)) = (extract::extract_ip(path), extract::extract_mask(path))
        else {
            return false;
        };
        self.is_ip_format(ip) && format::is_mask_format(mask_part)
    }

    /// Bitwise-AND `ip` with `mask`, octet by octet.
    ///
    /// A bit-form mask is expanded to dotted form first. Returns the
    /// [`INVALID_ENTRY`] sentinel when either side fails validation.
    pub fn apply_mask(&self, ip: &str, mask_input: &str) -> String {
        if !self.is_ip_format(ip) || !format::is_mask_format(mask_input) {
            return INVALID_ENTRY.to_string();
        }

        let full_mask = if format::is_bit_count(mask_input) {
            match mask_input.parse().ok().and_then(mask::full_mask_from_bits) {
                Some(m) => m,
                None => return INVALID_ENTRY.to_string(),
            }
        } else {
            mask_input.to_string()
        };

        mask::network_address(ip, &full_mask).unwrap_or_else(|| INVALID_ENTRY.to_string())
    }

    /// Resolve a raw resource path into a response body.
    ///
    /// Short-circuits: a bad prefix classifies before shape, and shape before
    /// computation. A path that passes both yields a body, possibly the
    /// [`INVALID_ENTRY`] sentinel.
    pub fn resolve(&self, path: &str) -> Result<String, ResolveError> {
        if !self.path_starts_correctly(path) {
            return Err(ResolveError::PrefixInvalid);
        }
        if !self.path_has_valid_shape(path) {
            return Err(ResolveError::ShapeInvalid);
        }

        let query = extract::extract_query(path).ok_or(ResolveError::ShapeInvalid)?;
        let (ip, mask_part) = query.split_once('&').ok_or(ResolveError::ShapeInvalid)?;
        Ok(self.apply_mask(ip, mask_part))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> SubnetResolver {
        SubnetResolver::from_config(&ResolverConfig {
            strict_leading_octet: true,
        })
    }

    fn lenient() -> SubnetResolver {
        SubnetResolver::from_config(&ResolverConfig {
            strict_leading_octet: false,
        })
    }

    #[test]
    fn test_strict_ip_format_requires_three_leading_digits() {
        let resolver = strict();
        assert!(resolver.is_ip_format("192.168.1.10"));
        assert!(resolver.is_ip_format("255.255.255.255"));
        // Conventionally valid, refused by the three-digit rule.
        assert!(!resolver.is_ip_format("10.0.0.1"));
        assert!(!resolver.is_ip_format("1.2.3.4"));
    }

    #[test]
    fn test_lenient_ip_format_accepts_short_first_octet() {
        let resolver = lenient();
        assert!(resolver.is_ip_format("10.0.0.1"));
        assert!(resolver.is_ip_format("192.168.1.10"));
        assert!(!resolver.is_ip_format("10.0.1"));
        assert!(!resolver.is_ip_format("10.0.0.1.2"));
        assert!(!resolver.is_ip_format("10.0.0.a"));
    }

    #[test]
    fn test_path_prefix_check() {
        let resolver = strict();
        assert!(resolver.path_starts_correctly("/subnet?192.168.1.10&24"));
        assert!(resolver.path_starts_correctly("/subnet"));
        assert!(!resolver.path_starts_correctly("/bogus"));
        assert!(!resolver.path_starts_correctly("subnet"));
    }

    #[test]
    fn test_path_shape_accepts_both_mask_forms() {
        let resolver = strict();
        assert!(resolver.path_has_valid_shape("/subnet?192.168.1.10&24"));
        assert!(resolver.path_has_valid_shape("/subnet?192.168.1.10&255.255.255.0"));
    }

    #[test]
    fn test_path_shape_rejections() {
        let resolver = strict();
        // Bit count out of range.
        assert!(!resolver.path_has_valid_shape("/subnet?192.168.1.10&32"));
        // Mask octets off the table.
        assert!(!resolver.path_has_valid_shape("/subnet?192.168.1.10&255.255.255.1"));
        // Non-monotonic mask.
        assert!(!resolver.path_has_valid_shape("/subnet?192.168.1.10&255.0.255.0"));
        // Missing mask, missing query, junk.
        assert!(!resolver.path_has_valid_shape("/subnet?192.168.1.10"));
        assert!(!resolver.path_has_valid_shape("/subnet"));
        assert!(!resolver.path_has_valid_shape("/subnet?banana&24"));
        // Two-digit first octet fails the strict address check.
        assert!(!resolver.path_has_valid_shape("/subnet?10.0.0.1&24"));
    }

    #[test]
    fn test_apply_mask_dotted_and_bit_forms_agree() {
        let resolver = strict();
        assert_eq!(resolver.apply_mask("192.168.1.10", "255.255.255.0"), "192.168.1.0");
        assert_eq!(resolver.apply_mask("192.168.1.10", "24"), "192.168.1.0");
        assert_eq!(resolver.apply_mask("192.168.1.10", "0"), "0.0.0.0");
    }

    #[test]
    fn test_apply_mask_sentinel_on_invalid_input() {
        let resolver = strict();
        assert_eq!(resolver.apply_mask("10.0.0.1", "24"), INVALID_ENTRY);
        assert_eq!(resolver.apply_mask("192.168.1.10", "33"), INVALID_ENTRY);
        assert_eq!(resolver.apply_mask("192.168.1.10", "255.0.255.0"), INVALID_ENTRY);
        assert_eq!(resolver.apply_mask("not an ip", "24"), INVALID_ENTRY);
    }

    #[test]
    fn test_apply_mask_lenient_accepts_short_first_octet() {
        let resolver = lenient();
        assert_eq!(resolver.apply_mask("10.0.0.1", "24"), "10.0.0.0");
    }

    #[test]
    fn test_resolve_classifications() {
        let resolver = strict();
        assert_eq!(
            resolver.resolve("/bogus"),
            Err(ResolveError::PrefixInvalid)
        );
        assert_eq!(
            resolver.resolve("/subnet?abc"),
            Err(ResolveError::ShapeInvalid)
        );
        assert_eq!(
            resolver.resolve("/subnet?10.0.0.1&24"),
            Err(ResolveError::ShapeInvalid)
        );
    }

    #[test]
    fn test_resolve_computes_subnet() {
        let resolver = strict();
        assert_eq!(resolver.resolve("/subnet?192.168.1.10&24").unwrap(), "192.168.1.0");
        assert_eq!(
            resolver.resolve("/subnet?192.168.1.10&255.255.255.0").unwrap(),
            "192.168.1.0"
        );
        assert_eq!(resolver.resolve("/subnet?172.16.100.200&20").unwrap(), "172.16.96.0");
    }

    #[test]
    fn test_error_messages_match_wrapper_contract() {
        assert_eq!(
            ResolveError::PrefixInvalid.to_string(),
            "Resource must begin with: /subnet"
        );
        assert_eq!(
            ResolveError::ShapeInvalid.to_string(),
            "Resource is in invalid format"
        );
    }
}

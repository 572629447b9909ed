//! Format validation for subnet masks and bit counts.
//!
//! # Responsibilities
//! - Recognize a CIDR bit count (0..=31)
//! - Recognize a dotted-decimal subnet mask
//! - Enforce the contiguous-mask octet ordering
//!
//! # Design Decisions
//! - Patterns compiled once and held in statics
//! - Mask octets come from a fixed table; anything else is not a mask
//! - Ordering is checked pairwise across adjacent octets only

use regex::Regex;
use std::sync::OnceLock;

static BIT_COUNT_PATTERN: OnceLock<Regex> = OnceLock::new();
static MASK_OCTET_PATTERN: OnceLock<Regex> = OnceLock::new();

fn bit_count_pattern() -> &'static Regex {
    BIT_COUNT_PATTERN
        .get_or_init(|| Regex::new(r"^([0-2]?[0-9]|30|31)$").expect("Invalid Regex"))
}

fn mask_octet_pattern() -> &'static Regex {
    MASK_OCTET_PATTERN.get_or_init(|| {
        Regex::new(r"^(0|128|192|224|240|248|252|254|255)(\.(0|128|192|224|240|248|252|254|255)){3}$")
            .expect("Invalid Regex")
    })
}

/// Returns true if `s` is a subnet mask in bit form: an integer in [0, 31].
pub fn is_bit_count(s: &str) -> bool {
    bit_count_pattern().is_match(s)
}

/// Returns true if `s` is a subnet mask in either accepted form.
///
/// Dotted form requires every octet to come from the contiguous-mask table
/// and octet values to be non-increasing left to right.
pub fn is_mask_format(s: &str) -> bool {
    if is_bit_count(s) {
        return true;
    }
    mask_octet_pattern().is_match(s) && octets_non_increasing(s)
}

/// A contiguous run of mask bits never produces an octet larger than the
/// one before it. Checked over adjacent pairs.
fn octets_non_increasing(mask: &str) -> bool {
    let octets: Vec<u16> = mask.split('.').filter_map(|o| o.parse().ok()).collect();
    octets.len() == 4 && octets.windows(2).all(|pair| pair[0] >= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_count_bounds() {
        assert!(is_bit_count("0"));
        assert!(is_bit_count("9"));
        assert!(is_bit_count("24"));
        assert!(is_bit_count("30"));
        assert!(is_bit_count("31"));

        assert!(!is_bit_count("32"));
        assert!(!is_bit_count("-1"));
        assert!(!is_bit_count("007"));
        assert!(!is_bit_count("24.5"));
        assert!(!is_bit_count(""));
    }

    #[test]
    fn test_dotted_masks_from_table() {
        assert!(is_mask_format("255.255.255.0"));
        assert!(is_mask_format("255.255.240.0"));
        assert!(is_mask_format("255.128.0.0"));
        assert!(is_mask_format("0.0.0.0"));
        assert!(is_mask_format("255.255.255.255"));
    }

    #[test]
    fn test_bit_form_is_a_mask() {
        assert!(is_mask_format("24"));
        assert!(is_mask_format("0"));
        assert!(!is_mask_format("32"));
    }

    #[test]
    fn test_octets_outside_table_rejected() {
        assert!(!is_mask_format("255.255.255.25"));
        assert!(!is_mask_format("255.255.100.0"));
        assert!(!is_mask_format("1.2.3.4"));
        assert!(!is_mask_format("255.255.255"));
        assert!(!is_mask_format("255.255.255.0.0"));
        assert!(!is_mask_format("banana"));
    }

    #[test]
    fn test_non_increasing_ordering_enforced() {
        // Each octet is individually valid; the 0 -> 255 step is not.
        assert!(!is_mask_format("255.0.255.0"));
        assert!(!is_mask_format("224.240.248.252"));
        assert!(!is_mask_format("0.0.0.128"));
        assert!(is_mask_format("255.255.0.0"));
    }
}

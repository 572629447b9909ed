//! Raw-path extraction.
//!
//! The resource carries its query as `?<ip>&<mask>`; these helpers pull the
//! pieces back out of the raw path string. Absence is `None`, never a marker
//! value.

use regex::Regex;
use std::sync::OnceLock;

use crate::resolver::format;
use crate::resolver::mask;

static IP_CAPTURE_PATTERN: OnceLock<Regex> = OnceLock::new();
static MASK_CAPTURE_PATTERN: OnceLock<Regex> = OnceLock::new();
static QUERY_CAPTURE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn ip_capture_pattern() -> &'static Regex {
    IP_CAPTURE_PATTERN.get_or_init(|| Regex::new(r"\?([\d.]{7,15})").expect("Invalid Regex"))
}

fn mask_capture_pattern() -> &'static Regex {
    MASK_CAPTURE_PATTERN.get_or_init(|| {
        Regex::new(r"&([\d.]{7,15}|[0-2]?[0-9]|30|31)$").expect("Invalid Regex")
    })
}

fn query_capture_pattern() -> &'static Regex {
    QUERY_CAPTURE_PATTERN
        .get_or_init(|| Regex::new(r"\?([\d.]{7,15}&[\d.]{1,15})$").expect("Invalid Regex"))
}

/// Extract the address part: the 7-15 character digit/dot run after `?`.
pub fn extract_ip(path: &str) -> Option<&str> {
    ip_capture_pattern()
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the mask part after the final `&`: a digit/dot run or a bit count.
pub fn extract_mask(path: &str) -> Option<&str> {
    mask_capture_pattern()
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract `<ip>&<mask>`, normalizing a bit-form mask to dotted form.
pub fn extract_query(path: &str) -> Option<String> {
    let caps = query_capture_pattern().captures(path)?;
    let query = caps.get(1)?.as_str();

    let mask_part = extract_mask(path)?;
    if format::is_bit_count(mask_part) {
        let ip = extract_ip(path)?;
        let full_mask = mask_part.parse().ok().and_then(mask::full_mask_from_bits)?;
        return Some(format!("{}&{}", ip, full_mask));
    }
    Some(query.to_string())
}

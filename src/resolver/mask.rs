//! Subnet mask arithmetic.

/// Dotted octet for a partial run of leading one-bits, indexed by bit count.
const PARTIAL_OCTETS: [&str; 8] = ["0", "128", "192", "224", "240", "248", "252", "254"];

/// Expand a CIDR bit count into its full dotted-decimal mask.
///
/// Octets fill left to right: a full run of eight bits becomes `255`, the
/// remainder indexes the partial-octet table. Returns `None` above 31.
pub fn full_mask_from_bits(bits: u8) -> Option<String> {
    if bits > 31 {
        return None;
    }
    let mut remaining = bits as usize;
    let mut octets = Vec::with_capacity(4);
    for _ in 0..4 {
        if remaining > 7 {
            octets.push("255");
            remaining -= 8;
        } else {
            octets.push(PARTIAL_OCTETS[remaining]);
            remaining = 0;
        }
    }
    Some(octets.join("."))
}

/// Octet-wise bitwise AND of an address and a dotted mask.
///
/// Octets parse as `u16`: the format layer accepts any three-digit value, so
/// the conjunction must too. `None` on anything that is not four octets a
/// side.
pub(crate) fn network_address(ip: &str, mask: &str) -> Option<String> {
    let ip_octets: Option<Vec<u16>> = ip.split('.').map(|o| o.parse().ok()).collect();
    let mask_octets: Option<Vec<u16>> = mask.split('.').map(|o| o.parse().ok()).collect();
    let (ip_octets, mask_octets) = (ip_octets?, mask_octets?);
    if ip_octets.len() != 4 || mask_octets.len() != 4 {
        return None;
    }

    let joined = ip_octets
        .iter()
        .zip(mask_octets.iter())
        .map(|(ip_octet, mask_octet)| (ip_octet & mask_octet).to_string())
        .collect::<Vec<_>>()
        .join(".");
    Some(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_mask_endpoints() {
        assert_eq!(full_mask_from_bits(0).unwrap(), "0.0.0.0");
        assert_eq!(full_mask_from_bits(31).unwrap(), "255.255.255.254");
    }

    #[test]
    fn test_full_mask_partial_octets() {
        assert_eq!(full_mask_from_bits(1).unwrap(), "128.0.0.0");
        assert_eq!(full_mask_from_bits(7).unwrap(), "254.0.0.0");
        assert_eq!(full_mask_from_bits(8).unwrap(), "255.0.0.0");
        assert_eq!(full_mask_from_bits(9).unwrap(), "255.128.0.0");
        assert_eq!(full_mask_from_bits(19).unwrap(), "255.255.224.0");
        assert_eq!(full_mask_from_bits(24).unwrap(), "255.255.255.0");
    }

    #[test]
    fn test_full_mask_out_of_range() {
        assert_eq!(full_mask_from_bits(32), None);
        assert_eq!(full_mask_from_bits(255), None);
    }

    #[test]
    fn test_network_address_conjunction() {
        assert_eq!(
            network_address("192.168.1.10", "255.255.255.0").unwrap(),
            "192.168.1.0"
        );
        assert_eq!(
            network_address("172.16.100.200", "255.255.240.0").unwrap(),
            "172.16.96.0"
        );
        assert_eq!(network_address("10.1.2.3", "0.0.0.0").unwrap(), "0.0.0.0");
    }

    #[test]
    fn test_network_address_requires_four_octets() {
        assert_eq!(network_address("192.168.1", "255.255.255.0"), None);
        assert_eq!(network_address("192.168.1.10", "24"), None);
        assert_eq!(network_address("a.b.c.d", "255.255.255.0"), None);
    }

    #[test]
    fn test_network_address_keeps_oversized_octets() {
        // The format layer never range-checks octets against 255.
        assert_eq!(
            network_address("999.168.1.10", "255.255.255.0").unwrap(),
            "231.168.1.0"
        );
    }
}

use std::net::Ipv4Addr;

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// What a single allow-list entry turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A dotted-decimal IPv4 address written in canonical form
    LiteralAddress(Ipv4Addr),
    /// A hostname that needs DNS resolution
    DomainName,
    Invalid,
}

/// Classify one trimmed allow-list entry
///
/// The literal address check runs first, so `1.2.3.4` is never treated as a
/// hostname even though every label would be alphanumeric. A name made only
/// of numeric labels that is not a valid address (`01.2.3.4`, `1.2.3`) is
/// invalid rather than a hostname.
///
/// # Examples
/// ```
/// use wg_allowedips::net::parser::{Classification, classify};
///
/// assert!(matches!(classify("192.0.2.1"), Classification::LiteralAddress(_)));
/// assert_eq!(classify("example.com"), Classification::DomainName);
/// assert_eq!(classify("01.2.3.4"), Classification::Invalid);
/// ```
pub fn classify(entry: &str) -> Classification {
    if let Some(addr) = parse_literal_address(entry) {
        return Classification::LiteralAddress(addr);
    }
    if !is_numeric_lookalike(entry) && is_domain_name(entry) {
        return Classification::DomainName;
    }
    Classification::Invalid
}

fn is_numeric_lookalike(entry: &str) -> bool {
    entry
        .split('.')
        .all(|segment| !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse a strict dotted-decimal IPv4 address
///
/// Exactly four segments, each made of ASCII digits in the range 0-255 with no
/// leading zero. Anything else (`1.2.3`, `1.2.3.4.5`, `01.2.3.4`, `+1.2.3.4`)
/// yields `None`.
pub fn parse_literal_address(input: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut segments = input.split('.');

    for octet in octets.iter_mut() {
        *octet = parse_octet(segments.next()?)?;
    }
    if segments.next().is_some() {
        return None;
    }

    Some(Ipv4Addr::from(octets))
}

fn parse_octet(segment: &str) -> Option<u8> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment.parse::<u8>().ok()
}

/// Check a hostname against RFC 1123 label rules
///
/// The name must be 1-253 characters, contain at least one dot, and every
/// label must be 1-63 alphanumerics or hyphens that neither start nor end with
/// a hyphen.
pub fn is_domain_name(input: &str) -> bool {
    if input.is_empty() || input.len() > MAX_DOMAIN_LEN {
        return false;
    }
    if !input.contains('.') {
        return false;
    }
    input.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return false;
    };
    if bytes.len() > MAX_LABEL_LEN {
        return false;
    }

    first.is_ascii_alphanumeric()
        && last.is_ascii_alphanumeric()
        && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}

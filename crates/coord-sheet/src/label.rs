//! Spreadsheet-style column labels.
//!
//! Column indices are encoded as bijective base-26 letter labels:
//! `A`..`Z` for 0..=25, then `AA`, `AB`, ... for 26 and up. Bijective
//! base-26 has no zero digit, which is what distinguishes it from a
//! naive base-26 conversion: the naive version produces wrong labels
//! from index 26 onward (`BA` where `AA` is expected).

/// Encode a zero-based column index as a bijective base-26 label.
///
/// ```
/// use coord_sheet::label;
///
/// assert_eq!(label::encode(0), "A");
/// assert_eq!(label::encode(25), "Z");
/// assert_eq!(label::encode(26), "AA");
/// assert_eq!(label::encode(701), "ZZ");
/// ```
pub fn encode(index: u32) -> String {
    let mut n = u64::from(index) + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let digit = ((n - 1) % 26) as u8;
        letters.push(b'A' + digit);
        n = (n - 1) / 26;
    }
    letters.iter().rev().map(|b| char::from(*b)).collect()
}

/// Decode a bijective base-26 label back to its zero-based index.
///
/// Returns `None` for the empty string, non-uppercase-ASCII input, or
/// labels whose value overflows `u32`. Inverse of [`encode`] for every
/// encodable index.
pub fn decode(label: &str) -> Option<u32> {
    if label.is_empty() {
        return None;
    }
    let mut n: u64 = 0;
    for c in label.chars() {
        if !c.is_ascii_uppercase() {
            return None;
        }
        n = n * 26 + (c as u64 - 'A' as u64 + 1);
        if n > u64::from(u32::MAX) + 1 {
            return None;
        }
    }
    u32::try_from(n - 1).ok()
}

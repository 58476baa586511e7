//! Switchport-name normalization.
//!
//! Interface names mix a textual media prefix with a slot/module/port
//! numeric path (`Gi1/0/24`, `Te2/1/1`, `Po100`, `Vl10`). The prefix is
//! replaced by a weight literal concatenated ahead of the remaining
//! digits, then the slash-separated path collapses into a single weighted
//! integer, so plain numeric comparison reproduces the order a network
//! engineer expects.

use std::borrow::Cow;

const SEG0_WEIGHT: u64 = 100_000;
const SEG1_WEIGHT: u64 = 1_000;

/// Media prefixes and the weight literal that replaces them, matched in
/// order against the start of the lower-cased name. Distinct ethernet
/// media (`Gi`, `Fa`, `Te`, `Eth`) deliberately share one weight class;
/// port-channels and VLAN interfaces sort into their own bands.
const MEDIA_WEIGHTS: [(&str, &str); 5] = [
    ("eth", "10"),
    ("te", "10"),
    ("gi", "10"),
    ("fa", "10"),
    ("po", "100000"),
];

/// Weight for VLAN-style interfaces (`Vl10`, `v10`).
const VLAN_WEIGHT: &str = "200000";

/// Maps a switchport-style name to its sort key.
///
/// Pure and infallible: unparseable segments count as 0 and still land
/// the row in a deterministic spot.
pub fn port_key(raw: &str) -> u64 {
    let name = raw.trim().to_ascii_lowercase();
    let weighted = apply_media_weight(&name);

    let mut segments = weighted.splitn(3, '/');
    let seg0 = segments.next().map_or(0, leading_number);
    let seg1 = segments.next();
    let seg2 = segments.next();

    // Fully hierarchical names carry all three levels. Anything shorter
    // collapses to the flat default of 1/1 for the trailing levels.
    let (seg1, seg2) = match seg2 {
        Some(seg2) => (seg1.map_or(0, leading_number), leading_number(seg2)),
        None => (1, 1),
    };

    seg0.saturating_mul(SEG0_WEIGHT)
        .saturating_add(seg1.saturating_mul(SEG1_WEIGHT))
        .saturating_add(seg2)
}

/// Swaps a recognized media prefix for its weight literal.
///
/// Matches only at the start of the name. The original tablesorter code
/// substituted substrings anywhere in the identifier, which made names
/// like `serv10` collide with the VLAN band.
fn apply_media_weight(name: &str) -> Cow<'_, str> {
    for (prefix, weight) in MEDIA_WEIGHTS {
        if let Some(rest) = name.strip_prefix(prefix) {
            return Cow::Owned(format!("{weight}{rest}"));
        }
    }

    // VLAN interfaces appear both as `vl10` and bare `v10`.
    for prefix in ["vl", "v"] {
        if let Some(rest) = name.strip_prefix(prefix) {
            if rest.starts_with(|c: char| c.is_ascii_digit()) {
                return Cow::Owned(format!("{VLAN_WEIGHT}{rest}"));
            }
        }
    }

    Cow::Borrowed(name)
}

/// Parses the leading decimal run of a segment.
///
/// No leading digits means 0. A run too long for `u64` saturates to the
/// maximum instead, keeping degenerate identifiers at the top end rather
/// than colliding with the unparseable bucket at 0.
fn leading_number(segment: &str) -> u64 {
    let digits = segment.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return 0;
    }

    // A run of plain digits can only fail to parse by overflowing.
    segment[..digits].parse().unwrap_or(u64::MAX)
}

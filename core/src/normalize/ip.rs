//! IPv4 address normalization.
//!
//! Dotted quads must sort by numeric octet value, not lexicographically
//! (`10.0.0.2` before `10.0.0.10`). Each address collapses into a single
//! weighted integer with the first octet dominant over every combination
//! of the remaining three.

use std::net::Ipv4Addr;

/// Key assigned to anything that is not a well-formed dotted quad.
///
/// Maximal on purpose: malformed addresses sort after every valid one
/// instead of aborting the sort or landing somewhere misleading.
pub const INVALID_IP_KEY: u64 = u64::MAX;

/// Maps a dotted-quad string to its sort key.
///
/// Parsing is strict: exactly four octets, each in 0-255. Anything else
/// yields [`INVALID_IP_KEY`].
pub fn ip_key(raw: &str) -> u64 {
    let Ok(addr) = raw.trim().parse::<Ipv4Addr>() else {
        return INVALID_IP_KEY;
    };

    let [o0, o1, o2, o3] = addr.octets();
    u64::from(o0) * 1_000_000_000
        + u64::from(o1) * 100_000
        + u64::from(o2) * 1_000
        + u64::from(o3)
}

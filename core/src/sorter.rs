//! Column-type registry.
//!
//! Maps a logical column-type tag to the normalizer every cell of that
//! column runs through. The lookup never fails: unknown tags degrade to
//! a mixed numeric-then-text comparison rather than failing the sort.

use crate::key::SortKey;
use crate::normalize::{ip, port};

/// Per-column cell normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sorter {
    /// Switchport names (`Gi1/0/24`, `Po100`).
    Port,
    /// Dotted-quad IPv4 addresses.
    Ip,
    /// Plain numbers; malformed cells count as 0.
    Numeric,
    /// Lexicographic text.
    Text,
    /// Numeric when the cell parses as a finite number, text otherwise.
    #[default]
    Auto,
}

/// Resolves a column-type tag to its sorter.
///
/// `customip` and `ipaddress` are the tags the historical table wiring
/// used for IP columns and stay accepted as aliases.
pub fn resolve(column_type: &str) -> Sorter {
    match column_type.trim().to_ascii_lowercase().as_str() {
        "port" => Sorter::Port,
        "ip" | "customip" | "ipaddress" => Sorter::Ip,
        "numeric" => Sorter::Numeric,
        "text" => Sorter::Text,
        _ => Sorter::Auto,
    }
}

impl Sorter {
    /// Computes the sort key for one cell. Pure and infallible.
    pub fn key(&self, raw: &str) -> SortKey {
        match self {
            Self::Port => SortKey::Number(port::port_key(raw) as f64),
            Self::Ip => SortKey::Number(ip::ip_key(raw) as f64),
            Self::Numeric => SortKey::Number(parse_number(raw).unwrap_or(0.0)),
            Self::Text => SortKey::Text(raw.trim().to_string()),
            Self::Auto => match parse_number(raw) {
                Some(n) => SortKey::Number(n),
                None => SortKey::Text(raw.trim().to_string()),
            },
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

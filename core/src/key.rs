use std::cmp::Ordering;
use std::fmt::{self, Display};

/// Totally-ordered key computed for one table cell.
///
/// Numeric keys compare by value via [`f64::total_cmp`] and always order
/// ahead of text keys, so numeric-parseable cells group before free text
/// when a column falls back to mixed comparison. Text keys compare
/// lexicographically.
///
/// Keys are transient: computed per sort, compared, and dropped. Nothing
/// is cached across sort operations.
#[derive(Debug, Clone)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

impl Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => write!(f, "{t}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_by_value() {
        assert!(SortKey::Number(2.0) < SortKey::Number(10.0));
        assert_eq!(SortKey::Number(5.0), SortKey::Number(5.0));
    }

    #[test]
    fn text_compares_lexicographically() {
        assert!(SortKey::Text("a".into()) < SortKey::Text("b".into()));
        assert!(SortKey::Text("10".into()) < SortKey::Text("2".into()));
    }

    #[test]
    fn numbers_order_before_text() {
        assert!(SortKey::Number(1e19) < SortKey::Text(String::new()));
    }
}

use netsort_core::sorter;

/// Prints the computed key next to each identifier, one per line.
/// Handy for checking where an odd-looking cell will land.
pub fn key(kind: &str, values: &[String]) {
    let sorter = sorter::resolve(kind);
    for value in values {
        println!("{value}\t{}", sorter.key(value));
    }
}

//! Normalizers mapping raw identifier text to numeric sort keys.
//!
//! Every normalizer is a pure function: same input, same key, no state,
//! and no failure path. Malformed input degrades to a deterministic key
//! so one bad cell can never abort a whole sort.

pub mod ip;
pub mod port;

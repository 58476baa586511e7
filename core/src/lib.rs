//! # netsort-core
//!
//! Ordering primitives for tables of network identifiers.
//!
//! Switchport names (`Gi1/0/24`, `Po100`, `Vl10`) and dotted-quad IPv4
//! addresses sort wrong as plain strings and wrong as plain numbers. This
//! crate maps both shapes to totally-ordered numeric keys, resolves a
//! column-type tag to the normalizer it needs, and stable-sorts delimited
//! rows by one or more keyed columns.

pub mod config;
pub mod key;
pub mod normalize;
pub mod sorter;
pub mod table;

pub use config::TableConfig;
pub use key::SortKey;
pub use normalize::{ip::ip_key, port::port_key};
pub use sorter::{Sorter, resolve};
pub use table::{KeySpec, Table};

//! Delimited-row table model and the sorting engine.
//!
//! The engine implements the narrow contract the presentation layer used
//! to get from its generic table sorter: extract each cell's raw text,
//! run it through the column's normalizer, and stable-sort rows by the
//! resulting keys so ties keep their original relative order.

use std::io::BufRead;
use std::str::FromStr;

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::config::TableConfig;
use crate::key::SortKey;
use crate::sorter::{self, Sorter};

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read table input")]
    Io(#[from] std::io::Error),
    #[error("no column named '{0}' in header")]
    UnknownColumn(String),
}

/// One sort key: which column to read and how to normalize its cells.
///
/// Parses from `COLUMN[:TYPE]`, e.g. `1:port`, `addr:ip` or a bare `3`.
/// The column is a 0-based index or a header name; the type defaults to
/// the mixed numeric-then-text comparison.
#[derive(Debug, Clone)]
pub struct KeySpec {
    pub column: ColumnSelector,
    pub sorter: Sorter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    Index(usize),
    Name(String),
}

impl FromStr for KeySpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, kind) = match s.split_once(':') {
            Some((column, kind)) => (column, Some(kind)),
            None => (s, None),
        };

        let column = column.trim();
        if column.is_empty() {
            return Err(format!("invalid sort key '{s}': empty column"));
        }

        let column = match column.parse::<usize>() {
            Ok(index) => ColumnSelector::Index(index),
            Err(_) => ColumnSelector::Name(column.to_string()),
        };

        Ok(Self {
            column,
            sorter: kind.map_or(Sorter::Auto, sorter::resolve),
        })
    }
}

/// Rows of delimited cells, with an optional pinned header.
#[derive(Debug, Default)]
pub struct Table {
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Reads delimited rows, splitting the first one off as the header
    /// when the config says so. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R, cfg: &TableConfig) -> Result<Self, TableError> {
        let mut header = None;
        let mut rows = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let row: Vec<String> = line.split(cfg.delimiter).map(str::to_string).collect();
            if cfg.has_header && header.is_none() && rows.is_empty() {
                header = Some(row);
            } else {
                rows.push(row);
            }
        }

        Ok(Self { header, rows })
    }

    /// Resolves a column selector against this table.
    ///
    /// Indexes pass through untouched; rows short of the column later
    /// contribute an empty cell rather than erroring. Names require a
    /// header and match case-insensitively.
    pub fn column_index(&self, selector: &ColumnSelector) -> Result<usize, TableError> {
        match selector {
            ColumnSelector::Index(index) => Ok(*index),
            ColumnSelector::Name(name) => self
                .header
                .as_ref()
                .and_then(|header| header.iter().position(|h| h.eq_ignore_ascii_case(name)))
                .ok_or_else(|| TableError::UnknownColumn(name.clone())),
        }
    }

    /// Stable-sorts rows by the given keys, applied in order.
    ///
    /// Key extraction runs in parallel; the sort itself is the stdlib
    /// stable sort, so rows whose keys tie keep their original relative
    /// order. `reverse` flips the key comparison only, which keeps tie
    /// order intact in both directions.
    pub fn sort(&mut self, keys: &[KeySpec], reverse: bool) -> Result<(), TableError> {
        let columns: Vec<(usize, Sorter)> = keys
            .iter()
            .map(|key| Ok((self.column_index(&key.column)?, key.sorter)))
            .collect::<Result<_, TableError>>()?;

        debug!(rows = self.rows.len(), keys = columns.len(), "sorting table");

        let mut keyed: Vec<(Vec<SortKey>, Vec<String>)> = std::mem::take(&mut self.rows)
            .into_par_iter()
            .map(|row| {
                let key = columns
                    .iter()
                    .map(|&(index, sorter)| {
                        sorter.key(row.get(index).map_or("", String::as_str))
                    })
                    .collect();
                (key, row)
            })
            .collect();

        if reverse {
            keyed.sort_by(|a, b| b.0.cmp(&a.0));
        } else {
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
        }

        self.rows = keyed.into_iter().map(|(_, row)| row).collect();
        Ok(())
    }
}

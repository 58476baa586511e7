use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use netsort_core::table::{KeySpec, Table};
use netsort_core::TableConfig;
use tracing::info;

pub fn sort(
    file: Option<&Path>,
    keys: &[KeySpec],
    delimiter: char,
    header: bool,
    reverse: bool,
) -> anyhow::Result<()> {
    let cfg = TableConfig {
        delimiter,
        has_header: header,
    };

    let mut table = read_table(file, &cfg)?;
    table.sort(keys, reverse)?;
    info!("sorted {} rows", table.rows.len());

    write_table(&table, delimiter)
}

fn read_table(file: Option<&Path>, cfg: &TableConfig) -> anyhow::Result<Table> {
    let table = match file {
        Some(path) => {
            let reader = BufReader::new(
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
            );
            read_from(reader, cfg, path.display())?
        }
        None => read_from(io::stdin().lock(), cfg, "stdin")?,
    };
    Ok(table)
}

fn read_from<R: BufRead>(
    reader: R,
    cfg: &TableConfig,
    source: impl std::fmt::Display,
) -> anyhow::Result<Table> {
    Table::from_reader(reader, cfg).with_context(|| format!("failed to read rows from {source}"))
}

fn write_table(table: &Table, delimiter: char) -> anyhow::Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    let sep = delimiter.to_string();

    if let Some(header) = &table.header {
        writeln!(out, "{}", header.join(&sep))?;
    }
    for row in &table.rows {
        writeln!(out, "{}", row.join(&sep))?;
    }

    Ok(out.flush()?)
}

/// Input-shape settings handed to table parsing.
#[derive(Debug, Clone, Copy)]
pub struct TableConfig {
    /// Field delimiter between cells of a row.
    pub delimiter: char,
    /// Treat the first row as a header.
    ///
    /// The header stays pinned during sorts and lets sort keys select
    /// columns by name instead of index.
    pub has_header: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            has_header: false,
        }
    }
}

// src/table.rs
//
// Raw sheet as read from disk: row 0 is the header row, the rest are data.
// Rows keep whatever length the file gave them; short rows are read through
// `cell`, which treats anything past the end as an empty string.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Total rows, header included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

/// Cell `ix` of `row`, or "" past the end of a short row.
#[inline]
pub fn cell(row: &[String], ix: usize) -> &str {
    row.get(ix).map(String::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn splits_header_from_data() {
        let t = Table::new(vec![row(&["Name", "Tags"]), row(&["Fireball", "fire"])]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.headers(), &row(&["Name", "Tags"])[..]);
        assert_eq!(t.data_rows().len(), 1);
    }

    #[test]
    fn empty_and_header_only_tables() {
        let empty = Table::default();
        assert!(empty.is_empty());
        assert!(empty.headers().is_empty());
        assert!(empty.data_rows().is_empty());

        let header_only = Table::new(vec![row(&["Name"])]);
        assert_eq!(header_only.len(), 1);
        assert!(header_only.data_rows().is_empty());
    }

    #[test]
    fn cell_past_end_reads_empty() {
        let r = row(&["a"]);
        assert_eq!(cell(&r, 0), "a");
        assert_eq!(cell(&r, 3), "");
    }
}

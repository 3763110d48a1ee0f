// src/data.rs
//
// Table data and the view layer over it.
//
// - RawTable: one parsed CSV source (header + data rows). Replaced wholesale
//             on every successful load, never patched.
// - RowView:  borrowed projection of a RawTable, held as row positions.
//             The filtered/sorted view and the current page are both RowViews.

/// A parsed CSV source. Always has at least one data row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Split parser output into header + rows. `None` if there is no data
    /// row (fewer than two parsed rows).
    pub fn from_parsed(mut parsed: Vec<Vec<String>>) -> Option<Self> {
        if parsed.len() < 2 {
            return None;
        }
        let rows = parsed.split_off(1);
        let headers = parsed.pop()?;
        Some(Self { headers, rows })
    }

    pub fn nrows(&self) -> usize { self.rows.len() }
    pub fn ncols(&self) -> usize { self.headers.len() }

    /// Position of the first header named `name`; exact match first, then
    /// ASCII case-insensitive.
    pub fn column(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.headers
            .iter()
            .position(|h| h == name)
            .or_else(|| self.headers.iter().position(|h| h.eq_ignore_ascii_case(name)))
    }

    /// Cell text; missing positions read as "".
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .map(|r| cell_at(r, Some(col)))
            .unwrap_or("")
    }
}

/// Cell of a record by optional column; absent column or short row -> "".
#[inline]
pub fn cell_at(row: &[String], col: Option<usize>) -> &str {
    col.and_then(|c| row.get(c)).map(String::as_str).unwrap_or("")
}

/// Zero-copy view: positions into a RawTable.
#[derive(Clone, Debug)]
pub struct RowView<'a> {
    pub row_ix: Vec<usize>,
    table: &'a RawTable,
}

impl<'a> RowView<'a> {
    pub fn new(table: &'a RawTable, row_ix: Vec<usize>) -> Self {
        Self { row_ix, table }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a row by view position.
    pub fn row(&self, i: usize) -> Option<&'a [String]> {
        let table = self.table;
        self.row_ix.get(i).and_then(|&ix| table.rows.get(ix).map(|r| r.as_slice()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [String]> + '_ {
        let table = self.table;
        self.row_ix.iter().filter_map(move |&ix| table.rows.get(ix).map(|r| r.as_slice()))
    }

    /// Owned rows restricted to `cols` (source column positions). Short rows
    /// are padded with "".
    pub fn project(&self, cols: &[usize]) -> Vec<Vec<String>> {
        self.iter()
            .map(|r| cols.iter().map(|&c| s!(cell_at(r, Some(c)))).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RawTable {
        RawTable::from_parsed(vec![
            row!["season", "player", "Score"],
            row!["2020", "A. One", "5.0"],
            row!["2021", "B. Two"],
        ])
        .unwrap()
    }

    #[test]
    fn header_only_is_not_a_table() {
        assert!(RawTable::from_parsed(vec![row!["a", "b"]]).is_none());
        assert!(RawTable::from_parsed(Vec::new()).is_none());
    }

    #[test]
    fn short_rows_read_as_empty() {
        let t = table();
        assert_eq!(t.cell(1, 2), "");
        assert_eq!(t.cell(9, 0), "");
        assert_eq!(t.cell(0, 1), "A. One");
    }

    #[test]
    fn column_lookup_falls_back_to_case_insensitive() {
        let t = table();
        assert_eq!(t.column("player"), Some(1));
        assert_eq!(t.column("score"), Some(2));
        assert_eq!(t.column("missing"), None);
    }

    #[test]
    fn view_projects_and_pads() {
        let t = table();
        let v = RowView::new(&t, vec![1, 0]);
        assert_eq!(v.len(), 2);
        assert_eq!(v.row(0).unwrap()[1], "B. Two");
        assert_eq!(v.project(&[1, 2]), vec![row!["B. Two", ""], row!["A. One", "5.0"]]);
    }
}

// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Single-pass CSV scanner (quotes, `""` escapes, CR / LF / CRLF). std-only.
///
/// Every cell is trimmed, quoted or not, and rows whose cells are all empty
/// are dropped. An unterminated quote swallows the rest of the input into
/// the last cell.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut cell = s!();
    let mut row: Vec<String> = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && matches!(chars.peek(), Some('"')) {
                    chars.next(); // escaped quote
                    cell.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => push_cell(&mut row, &mut cell),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                push_cell(&mut row, &mut cell);
                push_row(&mut rows, &mut row);
            }
            _ => cell.push(ch),
        }
    }

    // No trailing newline: flush what's pending.
    if !cell.is_empty() || !row.is_empty() {
        push_cell(&mut row, &mut cell);
        push_row(&mut rows, &mut row);
    }

    rows
}

#[inline]
fn push_cell(row: &mut Vec<String>, cell: &mut String) {
    let trimmed = cell.trim();
    if trimmed.len() == cell.len() {
        row.push(take(cell));
    } else {
        row.push(s!(trimmed));
        cell.clear();
    }
}

#[inline]
fn push_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if row.iter().any(|c| !c.is_empty()) {
        rows.push(take(row));
    } else {
        row.clear();
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(cell: &str) -> bool {
    cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
}

/// Append one CSV record (quoted where needed, `\n`-terminated) to `out`.
fn push_record<S: AsRef<str>>(out: &mut String, row: &[S]) {
    for (i, cell) in row.iter().enumerate() {
        let cell = cell.as_ref();
        if i > 0 { out.push(','); }
        if needs_quotes(cell) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    let mut line = String::new();
    push_record(&mut line, row);
    w.write_all(line.as_bytes())
}

/// Headers followed by rows, as one CSV string.
pub fn rows_to_string<S: AsRef<str>>(headers: &[S], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    if !headers.is_empty() {
        push_record(&mut out, headers);
    }
    for r in rows {
        push_record(&mut out, r);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_comma_stays_in_cell() {
        assert_eq!(parse_rows("a,\"b,c\",d"), vec![row!["a", "b,c", "d"]]);
    }

    #[test]
    fn doubled_quote_is_literal() {
        assert_eq!(parse_rows("\"x\"\"y\""), vec![row!["x\"y"]]);
    }

    #[test]
    fn quoted_cells_are_trimmed_too() {
        assert_eq!(parse_rows("\" x \",y"), vec![row!["x", "y"]]);
    }

    #[test]
    fn newline_inside_quotes_is_kept() {
        let rows = parse_rows("h1,h2\n\"two\nlines\",b\n");
        assert_eq!(rows, vec![row!["h1", "h2"], row!["two\nlines", "b"]]);
    }

    #[test]
    fn unterminated_quote_absorbs_rest() {
        let rows = parse_rows("a,b\n\"open,c\nd");
        assert_eq!(rows, vec![row!["a", "b"], row!["open,c\nd"]]);
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("\n\r\n\r").is_empty());
    }

    #[test]
    fn comma_only_line_is_dropped() {
        let rows = parse_rows("a,b\n,,\n1,2");
        assert_eq!(rows, vec![row!["a", "b"], row!["1", "2"]]);
    }

    #[test]
    fn trailing_empty_cell_is_kept() {
        assert_eq!(parse_rows("a,\n"), vec![row!["a", ""]]);
    }

    #[test]
    fn writer_quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["plain", "with,comma", "say \"hi\""]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "plain,\"with,comma\",\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn rows_to_string_matches_write_row() {
        let headers = row!["player", "note"];
        let rows = vec![row!["A. One", "a,b"], row!["", "x\"y"]];
        let text = rows_to_string(&headers, &rows);
        assert_eq!(text, "player,note\nA. One,\"a,b\"\n,\"x\"\"y\"\n");

        let mut buf: Vec<u8> = Vec::new();
        write_row(&mut buf, &headers).unwrap();
        for r in &rows {
            write_row(&mut buf, r).unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), text);
    }

    #[test]
    fn written_rows_parse_back() {
        let headers = ["player", "note"];
        let rows = vec![row!["A. One", "a,b"], row!["B. \"Two\"", "x"]];
        let text = rows_to_string(&headers, &rows);
        let parsed = parse_rows(&text);
        assert_eq!(parsed[0], row!["player", "note"]);
        assert_eq!(&parsed[1..], &rows[..]);
    }
}

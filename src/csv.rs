// src/csv.rs
use std::io::{self, Write};

use crate::record::Record;
use crate::sort::TableSchema;
use crate::specs;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delimiter {
    Csv,
    #[default]
    Tsv,
}

impl Delimiter {
    pub fn sep(self) -> char {
        match self {
            Delimiter::Csv => ',',
            Delimiter::Tsv => '\t',
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(Delimiter::Csv),
            "tsv" => Some(Delimiter::Tsv),
            _ => None,
        }
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Convenience: stringify rows as-is ---------------- */

pub fn rows_to_string(rows: &[Vec<String>], headers: &Option<Vec<String>>, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/// A table as shown: headers, then rows in `row_ix` order, cells formatted
/// the same way the on-screen table formats them.
pub fn table_to_string(records: &[Record], row_ix: &[usize], schema: &TableSchema, sep: char) -> String {
    let rows: Vec<Vec<String>> = row_ix
        .iter()
        .filter_map(|&i| records.get(i))
        .map(|r| specs::format_row(r, schema))
        .collect();
    rows_to_string(&rows, &Some(schema.headers()), sep)
}

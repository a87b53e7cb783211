//! Plain-text table output.

use std::io::{self, Write};

/// Writes rows under the given headers with columns padded to equal width.
pub fn table<W, I>(out: &mut W, headers: &[&str], rows: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = Vec<String>>,
{
    let rows: Vec<Vec<String>> = rows.into_iter().collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    write_row(out, &widths, &header_cells)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &widths, &rule)?;
    for row in &rows {
        write_row(out, &widths, row)?;
    }
    writeln!(out, "({} rows)", rows.len())
}

/// Writes one record as `header: value` lines.
pub fn record<W>(out: &mut W, headers: &[&str], row: &[String]) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let width = headers.iter().map(|h| h.len()).max().unwrap_or(0);
    for (header, value) in headers.iter().zip(row) {
        writeln!(out, "{:<width$}  {}", header, value, width = width)?;
    }
    Ok(())
}

fn write_row<W>(out: &mut W, widths: &[usize], cells: &[String]) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let line: Vec<String> = widths
        .iter()
        .zip(cells)
        .map(|(width, cell)| format!("{:<width$}", cell, width = *width))
        .collect();
    writeln!(out, "{}", line.join("  ").trim_end())
}

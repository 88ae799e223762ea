//! Sheet persistence: save collected rows as CSV, read them back, display.
//!
//! # Design
//! Plain CSV with a header line. Fields containing a comma, quote or line
//! break are quoted with `""` escaping; the parser accepts everything the
//! writer emits plus CRLF line endings and quoted embedded newlines. The
//! column set is whatever the caller passes; this module knows rows and
//! headers, not jokes.

use std::fmt;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

/// Cells longer than this are clipped in the displayed table (the file
/// itself always holds the full value).
const MAX_CELL_WIDTH: usize = 60;

/// I/O fault while writing or reading a sheet, naming the file and the
/// failed action. Never a silent no-op.
#[derive(Debug)]
pub struct SheetError {
    pub path: PathBuf,
    pub action: &'static str,
    pub detail: String,
}

impl SheetError {
    fn new(path: &Path, action: &'static str, detail: impl ToString) -> Self {
        Self {
            path: path.to_path_buf(),
            action,
            detail: detail.to_string(),
        }
    }
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to {} sheet '{}': {}",
            self.action,
            self.path.display(),
            self.detail
        )
    }
}

impl std::error::Error for SheetError {}

/// Write `headers` plus `rows` to `path`, creating missing parent
/// directories.
pub fn save(path: &Path, headers: &[&str], rows: &[Vec<String>]) -> Result<(), SheetError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| SheetError::new(path, "write", e))?;
        }
    }

    let mut contents = String::new();
    push_row(&mut contents, headers.iter().copied());
    for row in rows {
        push_row(&mut contents, row.iter().map(String::as_str));
    }

    fs::write(path, contents).map_err(|e| SheetError::new(path, "write", e))?;
    info!("sheet saved: {} rows at {}", rows.len(), path.display());
    Ok(())
}

/// Read `path` back into its header line and data rows.
pub fn read(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>), SheetError> {
    let text = fs::read_to_string(path).map_err(|e| SheetError::new(path, "read", e))?;
    let mut rows = parse(&text);
    if rows.is_empty() {
        return Err(SheetError::new(path, "read", "sheet has no header line"));
    }
    let headers = rows.remove(0);
    Ok((headers, rows))
}

/// Read the sheet and print it to stdout as an aligned table.
pub fn read_and_display(path: &Path) -> Result<(), SheetError> {
    let (headers, rows) = read(path)?;
    info!("sheet read back: {} rows from {}", rows.len(), path.display());

    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
    for row in &rows {
        for (i, cell) in row.iter().take(widths.len()).enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    print_row(&headers, &widths);
    let ruler: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    print_row(&ruler, &widths);
    for row in &rows {
        print_row(row, &widths);
    }
    Ok(())
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    let mut first = true;
    for cell in cells {
        if !first {
            out.push(',');
        }
        first = false;
        if cell.contains(&[',', '"', '\n', '\r'][..]) {
            let _ = write!(out, "\"{}\"", cell.replace('"', "\"\""));
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}

/// Split CSV text into rows of fields. Quoted fields may hold separators,
/// doubled quotes and line breaks; CRLF is accepted; blank lines are
/// skipped.
fn parse(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if quoted {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => quoted = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => quoted = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                if row.is_empty() && field.is_empty() {
                    continue;
                }
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }

    // Final row when the file does not end in a newline.
    if !row.is_empty() || !field.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

fn clip(cell: &str) -> String {
    if cell.chars().count() <= MAX_CELL_WIDTH {
        cell.to_string()
    } else {
        let kept: String = cell.chars().take(MAX_CELL_WIDTH - 3).collect();
        format!("{kept}...")
    }
}

fn display_width(cell: &str) -> usize {
    clip(cell).chars().count()
}

fn print_row(cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", clip(cell), width = *width))
        .collect();
    println!("{}", line.join(" | "));
}

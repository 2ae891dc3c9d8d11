use comfy_table::{presets, ContentArrangement, Row, Table};

/// Gap between two columns.
const COLUMN_GAP: u16 = 2;

/// Renders a header line followed by one line per row.
///
/// Every cell is cut or padded to exactly its column's width hint, columns are
/// separated by a two-space gap and trailing whitespace is dropped. Panics if
/// a row does not have exactly one cell per width hint.
pub fn render_table(headers: &[&str], rows: &[Vec<String>], widths: &[usize]) -> String {
    render(Some(headers), rows, widths)
}

/// Same as [`render_table`] without a header line.
pub fn render_rows(rows: &[Vec<String>], widths: &[usize]) -> String {
    render(None, rows, widths)
}

/// Cuts `value` down to at most `width` characters.
pub fn truncate(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}

/// Cuts or left-aligns `value` so it spans exactly `width` characters.
pub fn fit(value: &str, width: usize) -> String {
    format!("{:<width$}", truncate(value, width), width = width)
}

fn render(headers: Option<&[&str]>, rows: &[Vec<String>], widths: &[usize]) -> String {
    if headers.is_none() && rows.is_empty() {
        return String::new();
    }

    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Disabled);

    if let Some(headers) = headers {
        table.set_header(fit_row(headers.iter().copied(), widths));
    }
    for row in rows {
        table.add_row(fit_row(row.iter().map(String::as_str), widths));
    }

    let last = widths.len().saturating_sub(1);
    for (index, column) in table.column_iter_mut().enumerate() {
        let right = if index == last { 0 } else { COLUMN_GAP };
        column.set_padding((0, right));
    }

    let mut out = String::new();
    for line in table.to_string().lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn fit_row<'a>(cells: impl ExactSizeIterator<Item = &'a str>, widths: &[usize]) -> Row {
    assert_eq!(
        cells.len(),
        widths.len(),
        "column count does not match the number of width hints"
    );
    Row::from(
        cells
            .zip(widths)
            .map(|(cell, width)| fit(&sanitize(cell), *width))
            .collect::<Vec<_>>(),
    )
}

// Embedded line breaks would split a cell over several lines.
fn sanitize(cell: &str) -> String {
    cell.replace(['\r', '\n'], " ")
}

//! GitHub-flavored markdown pipe tables.

/// Render `rows` as a pipe table. The first row is the header.
///
/// Cells are escaped so they cannot break the row: `|` becomes `\|` and line
/// breaks fold into spaces. Short rows are padded to the header width.
/// The result has no trailing newline.
pub fn render_table<S: AsRef<str>>(rows: &[Vec<S>]) -> String {
    let Some((header, body)) = rows.split_first() else {
        return String::new();
    };
    let width = header.len();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(render_row(header.iter().map(|c| c.as_ref()), width));
    lines.push(render_row(std::iter::repeat("---").take(width), width));
    for row in body {
        lines.push(render_row(row.iter().map(|c| c.as_ref()), width));
    }
    lines.join("\n")
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, width: usize) -> String {
    let mut cells: Vec<String> = cells.take(width).map(escape_cell).collect();
    cells.resize(width, String::new());
    format!("| {} |", cells.join(" | "))
}

fn escape_cell(cell: &str) -> String {
    cell.replace("\r\n", " ")
        .replace('\n', " ")
        .replace('|', "\\|")
}

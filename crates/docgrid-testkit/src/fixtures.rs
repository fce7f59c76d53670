//! HTML fixtures with coordinate tables

/// Document without any `<table>`
pub const NO_TABLE_DOCUMENT: &str =
    "<!DOCTYPE html><html><head><title>Empty</title></head><body><p>No grid here.</p></body></html>";

/// Builds a minimal document with one `(x, char, y)` row per triple
///
/// # Examples
///
/// ```
/// use docgrid_testkit::table_document;
///
/// let html = table_document(&[("0", "H", "0")]);
/// assert!(html.contains("<td>H</td>"));
/// ```
pub fn table_document(rows: &[(&str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(x, ch, y)| format!("<tr><td>{x}</td><td>{ch}</td><td>{y}</td></tr>"))
        .collect();
    format!("<!DOCTYPE html><html><body><table>{body}</table></body></html>")
}

/// Builds a document shaped like a published word-processor page
///
/// Cells wrap their text in `<p><span>`, a heading row labels the columns
/// and a second table follows the grid table.
pub fn published_document(rows: &[(&str, &str, &str)]) -> String {
    let cell = |text: &str| format!("<td class=\"c1\"><p class=\"c2\"><span class=\"c3\">{text}</span></p></td>");
    let row = |x: &str, ch: &str, y: &str| format!("<tr class=\"c4\">{}{}{}</tr>", cell(x), cell(ch), cell(y));

    let mut body = row("x-coordinate", "Character", "y-coordinate");
    for (x, ch, y) in rows {
        body.push_str(&row(x, ch, y));
    }

    format!(
        "<html><head><meta content=\"text/html; charset=UTF-8\" http-equiv=\"content-type\"></head>\
         <body class=\"doc-content\"><p class=\"c5\"><span>Grid</span></p>\
         <table class=\"c6\"><tbody>{body}</tbody></table>\
         <table><tr><td>9</td><td>!</td><td>9</td></tr></table></body></html>"
    )
}

//! # Listing Renderer
//!
//! Renders the stored artifacts as an HTML table: one row per sidecar, with
//! the original file name linking to the digest-named payload so the static
//! root serves it directly.

use crate::store::ArtifactMetadata;

/// Render the listing table for rows of (stored digest name, metadata).
///
/// An empty slice yields the header row only. Row order follows the input
/// order, which is directory-enumeration order upstream.
pub fn render_table(rows: &[(String, ArtifactMetadata)]) -> String {
    let mut table = String::from(
        "<table border='1'><tr><th>Description</th><th>Type</th><th>architecture</th>\
         <th>scope</th><th>Version</th><th>original file name</th></tr>",
    );

    for (stored_name, metadata) in rows {
        let link = format!(
            "<a href='{}'>{}</a>",
            escape_html(stored_name),
            escape_html(&metadata.file_name)
        );
        table.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&metadata.description),
            escape_html(&metadata.file_type),
            escape_html(&metadata.architecture),
            escape_html(&metadata.scope),
            escape_html(&metadata.version),
            link,
        ));
    }

    table.push_str("</table>");
    table
}

/// Escape text for interpolation into HTML content and single-quoted
/// attributes. Sidecar fields are client-supplied and untrusted.
fn escape_html(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            c => output.push(c),
        }
    }
    output
}

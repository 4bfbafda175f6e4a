//! HTML escaping for report-supplied text.
//!
//! Every string that comes from the report or the query and ends up inside
//! generated HTML (node labels, tooltips, the summary panel) goes through
//! [`escape_html`] first.

/// Escapes the five HTML-significant characters.
///
/// Works in a single pass, so the entities it produces are never escaped
/// again within the same call.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Makes serialized JSON safe to embed inside a `<script>` element.
///
/// `<` becomes the JSON escape `\u003c`, so a report string such as
/// `</script>` cannot terminate the element. The result is still valid JSON.
pub fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

//! Directory listing generation
//!
//! Renders an HTML index of a directory when no index file is present.
//! Entry names are HTML-escaped for display and percent-encoded in hrefs;
//! directories are shown and linked with a trailing slash.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

// Characters that must not appear raw in a path segment of an href.
const HREF_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// One entry of a directory listing
#[derive(Debug, Clone)]
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Render the listing page for `display_path` (the decoded request path).
///
/// Entries are sorted case-insensitively, directories and files mixed,
/// matching the conventional auto-index layout.
pub fn render(display_path: &str, mut entries: Vec<ListingEntry>) -> String {
    entries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let title = format!("Directory listing for {}", escape_html(display_path));

    let mut items = String::new();
    for entry in &entries {
        let suffix = if entry.is_dir { "/" } else { "" };
        let href = utf8_percent_encode(&entry.name, HREF_SEGMENT).to_string();
        let label = escape_html(&entry.name);
        items.push_str(&format!(
            "<li><a href=\"{href}{suffix}\">{label}{suffix}</a></li>\n"
        ));
    }

    format!(
        "<!DOCTYPE HTML>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         <hr>\n\
         <ul>\n\
         {items}\
         </ul>\n\
         <hr>\n\
         </body>\n\
         </html>\n"
    )
}

/// Escape text for safe embedding in HTML
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, is_dir: bool) -> ListingEntry {
        ListingEntry {
            name: name.to_string(),
            is_dir,
        }
    }

    #[test]
    fn test_render_sorts_case_insensitively() {
        let html = render(
            "/",
            vec![entry("Zeta.log", false), entry("alpha.log", false)],
        );
        let alpha = html.find("alpha.log").unwrap();
        let zeta = html.find("Zeta.log").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn test_render_marks_directories_with_slash() {
        let html = render("/", vec![entry("archive", true)]);
        assert!(html.contains("<a href=\"archive/\">archive/</a>"));
    }

    #[test]
    fn test_render_escapes_display_names() {
        let html = render("/", vec![entry("a<b>.log", false)]);
        assert!(html.contains("a&lt;b&gt;.log"));
        assert!(!html.contains("<b>.log"));
    }

    #[test]
    fn test_render_percent_encodes_hrefs() {
        let html = render("/", vec![entry("app log.txt", false)]);
        assert!(html.contains("href=\"app%20log.txt\""));
    }

    #[test]
    fn test_render_includes_request_path_in_title() {
        let html = render("/logs/", Vec::new());
        assert!(html.contains("Directory listing for /logs/"));
    }
}

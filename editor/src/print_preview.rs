//! Static HTML written into the print preview window.
//!
//! The shell has one placeholder element per page; each placeholder is
//! replaced independently as its render arrives, in any order.

const PRINT_STYLES: &str = r#"
    body { margin: 0; padding: 20px; font-family: Arial, sans-serif; background: #f0f0f0; }
    .page-container { max-width: 800px; margin: 0 auto; background: white; padding: 20px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
    .header { text-align: center; margin-bottom: 20px; padding-bottom: 10px; border-bottom: 2px solid #4F46E5; }
    .header h1 { color: #4F46E5; margin: 0 0 10px 0; }
    .info { color: #666; margin-bottom: 20px; }
    .page-preview { margin: 20px 0; text-align: center; }
    .page-preview img { max-width: 100%; border: 1px solid #ddd; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
    .page-label { margin: 10px 0; font-weight: bold; color: #333; }
    .page-error { color: red; }
    .actions { text-align: center; margin-top: 20px; padding-top: 20px; border-top: 1px solid #ddd; }
    .actions button { padding: 10px 20px; margin: 0 5px; font-size: 14px; border: none; border-radius: 4px; cursor: pointer; font-weight: 600; color: white; }
    .btn-print { background: #4F46E5; }
    .btn-close { background: #6b7280; }
    @media print {
        body { background: white; padding: 0; }
        .page-container { box-shadow: none; padding: 0; max-width: 100%; }
        .header, .actions, .info, .page-label { display: none; }
        .page-preview { page-break-after: always; }
    }
"#;

pub fn placeholder_id(page: usize) -> String {
    format!("x-print-page-{page}")
}

/// Markup for the whole `<html>` element content.
pub fn shell_html(session_id: &str, num_pages: usize, current_page: usize) -> String {
    let placeholders: String = (0..num_pages)
        .map(|page| {
            format!(
                r#"<div class="page-preview" id="{}">{}</div>"#,
                placeholder_id(page),
                page_loading_html(page, num_pages)
            )
        })
        .collect();
    format!(
        r#"<head><title>Print Preview - PDF Text Editor</title><style>{PRINT_STYLES}</style></head>
<body>
<div class="page-container">
    <div class="header"><h1>Print Preview</h1><p>PDF Text Editor</p></div>
    <div class="info">
        <p><strong>Session:</strong> {session}</p>
        <p><strong>Total Pages:</strong> {num_pages}</p>
        <p><strong>Current Page:</strong> {current}</p>
    </div>
    <div id="pages-container">{placeholders}</div>
    <div class="actions">
        <button class="btn-print" onclick="window.print()">Print</button>
        <button class="btn-close" onclick="window.close()">Close</button>
    </div>
</div>
</body>"#,
        session = escape_html(&session_label(session_id)),
        current = current_page + 1,
    )
}

pub fn page_loading_html(page: usize, num_pages: usize) -> String {
    format!(
        r#"<div class="page-label">Page {} of {num_pages}</div><p>Loading page {}...</p>"#,
        page + 1,
        page + 1
    )
}

pub fn page_image_html(page: usize, num_pages: usize, image_data: &str) -> String {
    format!(
        r#"<div class="page-label">Page {} of {num_pages}</div><img src="{}" alt="Page {}" />"#,
        page + 1,
        escape_html(image_data),
        page + 1
    )
}

pub fn page_error_html(page: usize) -> String {
    format!(r#"<p class="page-error">Error loading page {}</p>"#, page + 1)
}

/// `Session: 1234abcd...` style shortening used wherever the id is displayed.
pub fn session_label(session_id: &str) -> String {
    let short: String = session_id.chars().take(8).collect();
    format!("{short}...")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_has_one_placeholder_per_page() {
        let html = shell_html("0123456789abcdef", 3, 1);
        for page in 0..3 {
            assert!(html.contains(&format!(r#"id="{}""#, placeholder_id(page))));
        }
        assert!(!html.contains(&placeholder_id(3)));
        assert!(html.contains("01234567..."));
        assert!(html.contains("<strong>Current Page:</strong> 2"));
    }

    #[test]
    fn image_markup_escapes_attribute() {
        let html = page_image_html(0, 2, "data:image/png;base64,AA\"x");
        assert!(html.contains("AA&quot;x"));
        assert!(html.contains("Page 1 of 2"));
    }
}

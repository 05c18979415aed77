/// Shown alongside the generated code.
pub const PASTE_INSTRUCTIONS: &str = "Paste this code into the `<head>` section of your website, \
or use a plugin like 'Insert Headers and Footers' for WordPress.";

/// Suggested file name for downloading the generated block.
///
/// "Joe's Plumbing" → "joe's_plumbing_schema.html"
pub fn download_filename(business_name: &str) -> String {
    format!("{}_schema.html", business_name.to_lowercase().replace(' ', "_"))
}

/// Builds a `Content-Disposition` value. Characters that cannot sit inside a quoted
/// header parameter are replaced with `_`.
pub fn attachment_disposition(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() || c == ' ') && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("attachment; filename=\"{safe}\"")
}

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::visualization::data::ChartSpec;
use crate::visualization::templates::{CENTERING_CSS, HTML_TEMPLATE, PARCOORDS_JS, STYLES_CSS};

/// Render the chart into a standalone HTML document
pub fn render_html(spec: &ChartSpec) -> Result<String> {
    // no raw `<` in the payload, so labels cannot close or re-open a <script>
    let json_data = serde_json::to_string(spec)?.replace('<', "\\u003c");

    // Inline CSS, runtime and data into HTML
    let html = HTML_TEMPLATE
        .replace("__TITLE__", &spec.title)
        .replace("/* __STYLES_PLACEHOLDER__ */", STYLES_CSS)
        .replace("/* __PARCOORDS_JS_PLACEHOLDER__ */", PARCOORDS_JS)
        .replace("\"__CHART_PLACEHOLDER__\"", &json_data);

    Ok(inject_style(&html, CENTERING_CSS))
}

/// Insert a `<style>` block immediately before `</head>`
pub fn inject_style(html: &str, css: &str) -> String {
    html.replace("</head>", &format!("<style>\n{}</style>\n</head>", css))
}

/// Generate the HTML visualization file, overwriting any existing one
pub fn generate_html(spec: &ChartSpec, output_path: &Path) -> Result<()> {
    let html = render_html(spec)?;
    std::fs::write(output_path, &html)?;
    info!(path = %output_path.display(), bytes = html.len(), "wrote chart");
    Ok(())
}

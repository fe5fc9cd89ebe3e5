/// Embedded HTML template
pub const HTML_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Embedded base stylesheet
pub const STYLES_CSS: &str = include_str!("../../templates/styles.css");

/// Embedded parallel-coordinates runtime
pub const PARCOORDS_JS: &str = include_str!("../../templates/parcoords.js");

/// Page centering and thick line strokes, injected after rendering
pub const CENTERING_CSS: &str = include_str!("../../templates/centering.css");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_tooltip_is_plain_title_text() {
        assert!(PARCOORDS_JS.contains("svgEl(\"title\", {}, path).textContent = line.diet_group;"));
        assert!(!PARCOORDS_JS.contains("svgEl(\"title\", {}, path))"));
    }
}

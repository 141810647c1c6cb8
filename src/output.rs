use crate::Snippet;

/// Render snippets as plain text (one snippet per line, no timestamps)
pub fn render_text(snippets: &[Snippet]) -> String {
    snippets
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

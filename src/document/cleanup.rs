//! Pre-processing and cleanup utilities
//!
//! Generated drafts often carry markdown residue. These helpers strip it
//! before the raw-line export heuristics look at the text.

const MARKDOWN_PREFIXES: [&str; 4] = ["### ", "## ", "# ", "- "];

/// Remove one leading markdown heading or bullet marker
pub(crate) fn strip_markdown_prefix(line: &str) -> &str {
    MARKDOWN_PREFIXES
        .iter()
        .find_map(|prefix| line.strip_prefix(prefix))
        .unwrap_or(line)
}

/// Strip markdown markers from every line, trim, and drop empty lines
pub(crate) fn clean_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| strip_markdown_prefix(line.trim_start()).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keep only characters that are safe in a file name on common platforms
pub(crate) fn sanitize_file_stem(title: &str) -> String {
    title
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

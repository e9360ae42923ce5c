//! Line classification helpers shared by the rules.

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Whether the line starts with at least `min_indent` spaces.
pub(crate) fn is_indented(line: &str, min_indent: usize) -> bool {
    line.len() >= min_indent && line.bytes().take(min_indent).all(|b| b == b' ')
}

/// Blank lines and lines indented by at least `min_indent` belong to an
/// indented block.
pub(crate) fn is_block_line(line: &str, min_indent: usize) -> bool {
    is_blank(line) || is_indented(line, min_indent)
}

pub(crate) fn indentation(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Remove up to `n` leading spaces.
pub(crate) fn strip_indent(line: &str, n: usize) -> &str {
    let n = indentation(line).min(n);
    &line[n..]
}

/// Remove the indentation common to every non-blank line. Blank lines become
/// empty.
pub(crate) fn dedent<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let common = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !is_blank(line))
        .map(indentation)
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(AsRef::as_ref)
        .map(|line| {
            if is_blank(line) {
                String::new()
            } else {
                line[common..].to_string()
            }
        })
        .collect()
}

/// Drop blank lines at both ends.
pub(crate) fn trim_blank_lines(mut lines: Vec<String>) -> Vec<String> {
    while lines.last().is_some_and(|line| is_blank(line)) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|line| is_blank(line)).count();
    lines.drain(..leading);
    lines
}

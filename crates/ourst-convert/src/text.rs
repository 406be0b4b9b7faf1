//! Text layout helpers shared by the conversion rules.

/// Layout whitespace that collapses inside a line.
///
/// Non-breaking spaces are content, not layout, and are kept.
fn is_layout_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Collapse whitespace runs to one space and trim both ends.
pub(crate) fn collapse(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        if is_layout_space(ch) {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }
    out
}

/// Split text into leading whitespace, core, and trailing whitespace.
pub(crate) fn split_spaces(text: &str) -> (&str, &str, &str) {
    let start = text.len() - text.trim_start().len();
    let core = text.trim();
    let end = start + core.len();
    (&text[..start], core, &text[end..])
}

/// Wrap `content` in inline delimiters, keeping its outer whitespace outside.
///
/// Content that is blank after trimming is returned unchanged.
pub(crate) fn wrap(content: &str, open: &str, close: &str) -> String {
    let (lead, core, trail) = split_spaces(content);
    if core.is_empty() {
        return content.to_owned();
    }
    format!("{lead}{open}{core}{close}{trail}")
}

/// Append an inline fragment, escaping the gap between two adjacent markup
/// runs so their delimiters stay separate.
pub(crate) fn append_inline(out: &mut String, fragment: &str) {
    let closes_markup = out.ends_with(['*', '`', '_']);
    let opens_markup = fragment.starts_with(['*', '`', ':']);
    if closes_markup && opens_markup {
        out.push_str("\\ ");
    }
    out.push_str(fragment);
}

/// Final segment of a source path, for either separator style.
pub(crate) fn file_name(src: &str) -> Option<&str> {
    let name = src.trim().rsplit(['\\', '/']).next()?;
    (!name.is_empty()).then_some(name)
}

/// Heading underline as long as the heading text.
pub(crate) fn underline(text: &str, ch: char) -> String {
    std::iter::repeat_n(ch, text.chars().count()).collect()
}

/// Terminate a block with one blank line unless it already ends with one.
pub(crate) fn end_block(lines: &mut Vec<String>) {
    if lines.last().is_none_or(|line| !line.is_empty()) {
        lines.push(String::new());
    }
}

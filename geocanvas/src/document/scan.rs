//! Tolerant tag-level scanning over XML-ish text.
//!
//! The document parsers do not need a conforming XML reader: they extract a
//! handful of known elements and skip everything else, so a forgiving
//! scanner keeps the "malformed input yields an empty document" contract
//! without an error path.

/// Returns the inner content of every `<tag ...>...</tag>` block, in
/// document order. Self-closing and unclosed tags are skipped.
pub(crate) fn blocks<'a>(text: &'a str, tag: &str) -> Vec<&'a str> {
    let open = format!("<{}", tag);
    let close = format!("</{}>", tag);

    let mut out = Vec::new();
    let mut pos = 0;
    while let Some(found) = text[pos..].find(&open) {
        let start = pos + found;
        let after_name = start + open.len();

        // The match must end the tag name here, otherwise we matched a
        // prefix of a longer name (e.g. <name> inside <namespace>).
        match text[after_name..].chars().next() {
            Some(c) if c == '>' || c == '/' || c.is_whitespace() => {}
            _ => {
                pos = after_name;
                continue;
            }
        }

        let Some(gt) = text[after_name..].find('>') else {
            break;
        };
        let content_start = after_name + gt + 1;
        if text[..content_start].ends_with("/>") {
            pos = content_start;
            continue;
        }

        let Some(end) = text[content_start..].find(&close) else {
            pos = content_start;
            continue;
        };
        out.push(&text[content_start..content_start + end]);
        pos = content_start + end + close.len();
    }
    out
}

/// First `<tag>` text content inside `block`, trimmed, with CDATA wrappers
/// removed and the predefined XML entities expanded.
pub(crate) fn tag_text(block: &str, tag: &str) -> Option<String> {
    let inner = blocks(block, tag).into_iter().next()?;
    Some(unescape(strip_cdata(inner).trim()))
}

fn strip_cdata(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("<![CDATA[")
        .and_then(|rest| rest.strip_suffix("]]>"))
        .unwrap_or(trimmed)
}

fn unescape(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

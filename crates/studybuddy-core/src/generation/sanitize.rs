const FENCE: &str = "```";

/// Removes surrounding whitespace and markdown code fences from a model reply.
///
/// Fences are stripped until none are left at either end, so the result is a fixed point:
/// sanitizing it again returns it unchanged. Content between the fences is never touched.
#[must_use]
pub fn sanitize_response(raw: &str) -> &str {
    let mut current = raw;
    loop {
        let next = strip_fences(current);
        if next.len() == current.len() {
            return next;
        }
        current = next;
    }
}

fn strip_fences(text: &str) -> &str {
    let text = text.trim();
    let text = match text.strip_prefix(FENCE) {
        Some(rest) => {
            // language tag such as `json` directly after the opening fence
            let tag_len = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
                .unwrap_or(rest.len());
            &rest[tag_len..]
        }
        None => text,
    };
    text.strip_suffix(FENCE).unwrap_or(text).trim()
}

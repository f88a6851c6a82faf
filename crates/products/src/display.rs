//! Display-only text transforms for product cards.

use std::borrow::Cow;

pub const TITLE_MAX_CHARS: usize = 20;
pub const DESCRIPTION_MAX_CHARS: usize = 80;

const ELLIPSIS: &str = "...";

/// Keep the first `max_chars` characters and append `...` when `text` is
/// longer than that; otherwise borrow `text` unchanged.
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], ELLIPSIS)),
        None => Cow::Borrowed(text),
    }
}

pub fn truncate_title(title: &str) -> Cow<'_, str> {
    truncate(title, TITLE_MAX_CHARS)
}

pub fn truncate_description(description: &str) -> Cow<'_, str> {
    truncate(description, DESCRIPTION_MAX_CHARS)
}

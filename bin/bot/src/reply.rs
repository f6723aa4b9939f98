//! Outgoing reply helpers.

/// Telegram's maximum message length, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Splits text into chunks of at most `limit` characters.
///
/// A chunk ends after the last newline that fits, or at the limit when the
/// window contains none. Whitespace-only chunks are dropped, since Telegram
/// rejects blank messages; everything else is kept in order.
#[must_use]
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some((end, _)) = rest.char_indices().nth(limit) else {
            push_visible(&mut chunks, rest);
            break;
        };

        let window = &rest[..end];
        let split = match window.rfind('\n') {
            Some(pos) if pos > 0 => pos + 1,
            _ => end,
        };

        push_visible(&mut chunks, &rest[..split]);
        rest = &rest[split..];
    }

    chunks
}

fn push_visible(chunks: &mut Vec<String>, chunk: &str) {
    if !chunk.trim().is_empty() {
        chunks.push(chunk.to_string());
    }
}

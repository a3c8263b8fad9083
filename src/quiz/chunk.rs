/// Word bound used by callers that do not pick their own.
pub const DEFAULT_MAX_CHUNK_WORDS: usize = 2000;

/// Splits content into chunks of at most `max_words` whitespace-separated
/// words each, re-joined with single spaces.
///
/// Words are never dropped, duplicated, or reordered; a chunk is closed
/// exactly when the next word would push it past the bound. The bound counts
/// words, not characters, so a single oversized word still lands in a chunk
/// of its own.
pub fn split_content(content: &str, max_words: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in content.split_whitespace() {
        if current.len() < max_words {
            current.push(word);
        } else {
            chunks.push(current.join(" "));
            current = vec![word];
        }
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    log::info!("content split into {} chunk(s)", chunks.len());

    chunks
}

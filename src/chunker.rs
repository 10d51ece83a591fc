use crate::error::ChunkError;

/// Split `text` into contiguous segments of at most `max_size` characters.
///
/// Segments are cut on `char` boundaries, so concatenating them yields the
/// original text exactly. Empty input produces no segments.
pub fn chunk(text: &str, max_size: usize) -> Result<Vec<String>, ChunkError> {
    if max_size < 1 {
        return Err(ChunkError::InvalidSize(max_size));
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for c in text.chars() {
        if count == max_size {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(c);
        count += 1;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    Ok(chunks)
}

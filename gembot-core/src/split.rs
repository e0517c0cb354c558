//! Length-bounded chunking: splits long reply text into platform-sized pieces
//! along line boundaries so each piece fits in one Telegram message.

/// Telegram caps message text at 4096 characters.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Splits `text` on line boundaries into the fewest chunks such that no chunk
/// exceeds `limit` characters, preserving line order. Whitespace at chunk
/// boundaries is trimmed. A line longer than `limit` is hard-split at character
/// boundaries so the length bound always holds. Empty input yields no chunks.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let line_len = line.chars().count();

        if line_len > limit {
            push_trimmed(&mut chunks, &current);
            current.clear();
            // Hard-split the oversized line; the tail starts the next chunk.
            let mut piece = String::new();
            let mut count = 0usize;
            for ch in line.chars() {
                piece.push(ch);
                count += 1;
                if count == limit {
                    push_trimmed(&mut chunks, &piece);
                    piece.clear();
                    count = 0;
                }
            }
            if !piece.is_empty() {
                current = piece;
                current.push('\n');
            }
            continue;
        }

        if current.chars().count() + line_len + 1 > limit {
            push_trimmed(&mut chunks, &current);
            current.clear();
        }
        current.push_str(line);
        current.push('\n');
    }

    push_trimmed(&mut chunks, &current);
    chunks
}

fn push_trimmed(chunks: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: a string already under the limit yields exactly one chunk.**
    #[test]
    fn short_text_single_chunk() {
        let chunks = split_message("hello world", 100);
        assert_eq!(chunks, vec!["hello world".to_string()]);
    }

    /// **Test: empty and whitespace-only input yield no chunks.**
    #[test]
    fn empty_input_no_chunks() {
        assert!(split_message("", 10).is_empty());
        assert!(split_message("   \n  \n", 10).is_empty());
    }

    /// **Test: every chunk respects the limit and line order is preserved.**
    #[test]
    fn multi_line_chunks_within_limit() {
        let text = (0..20).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let chunks = split_message(&text, 25);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 25, "chunk too long: {chunk:?}");
        }
        let rejoined = chunks.join("\n");
        let original_lines: Vec<&str> = text.lines().collect();
        let rejoined_lines: Vec<&str> = rejoined.lines().collect();
        assert_eq!(original_lines, rejoined_lines);
    }

    /// **Test: a single line longer than the limit is hard-split, never emitted oversized.**
    #[test]
    fn oversized_line_hard_split() {
        let text = "x".repeat(95);
        let chunks = split_message(&text, 30);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 30);
        }
        let total: usize = chunks.iter().map(|c| c.chars().count()).sum();
        assert_eq!(total, 95);
    }

    /// **Test: a line of exactly the limit stays intact as one chunk.**
    #[test]
    fn exact_limit_line() {
        let text = "y".repeat(30);
        let chunks = split_message(&text, 30);
        assert_eq!(chunks, vec!["y".repeat(30)]);
    }

    /// **Test: multi-byte characters are counted as characters, not bytes.**
    #[test]
    fn multibyte_chars_counted_once() {
        let text = "ü".repeat(10);
        let chunks = split_message(&text, 10);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], text);
    }
}

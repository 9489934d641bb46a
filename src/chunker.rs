//! Sentence segmentation and provider-safe chunking
//!
//! External translators cap request sizes, so long texts are cut into
//! chunks that respect sentence boundaries where possible and word
//! boundaries otherwise. Chunks are translated independently and joined back
//! with single spaces, which normalizes the whitespace between sentences.

use crate::normalize::char_len;

/// Split text into sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace; the terminator
/// stays with its sentence and the whitespace is dropped. Returned slices
/// borrow from `text` and are trimmed; empty pieces are skipped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let Some(&(next_index, next)) = chars.peek() else {
            break;
        };
        if next.is_whitespace() {
            let sentence = text[start..next_index].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = index + c.len_utf8();
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Split `text` into ordered chunks of at most `max_chunk_size` characters.
///
/// Sentences are packed greedily into chunks. A sentence longer than the
/// limit is split on word boundaries instead. A single word longer than the
/// limit cannot be split and is emitted as its own oversized chunk.
///
/// Joining the chunks with single spaces reproduces the original word
/// sequence.
pub fn split_into_chunks(text: &str, max_chunk_size: usize) -> Vec<String> {
    let max_chunk_size = max_chunk_size.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in split_sentences(text) {
        // Collapse internal whitespace so lengths match what gets sent
        let sentence = sentence.split_whitespace().collect::<Vec<_>>().join(" ");

        if char_len(&sentence) > max_chunk_size {
            flush(&mut chunks, &mut current);
            chunks.extend(split_on_words(&sentence, max_chunk_size));
            continue;
        }

        if !current.is_empty() && char_len(&current) + 1 + char_len(&sentence) > max_chunk_size {
            flush(&mut chunks, &mut current);
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&sentence);
    }

    flush(&mut chunks, &mut current);
    chunks
}

fn split_on_words(sentence: &str, max_chunk_size: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for word in sentence.split_whitespace() {
        if !current.is_empty() && char_len(&current) + 1 + char_len(word) > max_chunk_size {
            flush(&mut pieces, &mut current);
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    flush(&mut pieces, &mut current);
    pieces
}

fn flush(chunks: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        chunks.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    // ========== Sentence Splitting ==========

    #[test]
    fn test_split_sentences_basic() {
        assert_eq!(
            split_sentences("Hello there. How are you? I am fine!"),
            vec!["Hello there.", "How are you?", "I am fine!"]
        );
    }

    #[test]
    fn test_split_sentences_requires_whitespace_after_terminator() {
        assert_eq!(
            split_sentences("Version 1.5 is out. Great"),
            vec!["Version 1.5 is out.", "Great"]
        );
        assert_eq!(split_sentences("e.g.this"), vec!["e.g.this"]);
    }

    #[test]
    fn test_split_sentences_edges() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
        assert_eq!(split_sentences("No terminator"), vec!["No terminator"]);
        assert_eq!(split_sentences("Ends here."), vec!["Ends here."]);
        assert_eq!(split_sentences("Wait...  What?\n\nOk."), vec!["Wait...", "What?", "Ok."]);
    }

    #[test]
    fn test_split_sentences_multibyte() {
        assert_eq!(
            split_sentences("¿Qué tal? Está lloviendo a cántaros. Sí."),
            vec!["¿Qué tal?", "Está lloviendo a cántaros.", "Sí."]
        );
    }

    // ========== Chunking ==========

    #[test]
    fn test_short_text_is_single_chunk() {
        assert_eq!(split_into_chunks("One. Two.", 100), vec!["One. Two."]);
    }

    #[test]
    fn test_empty_text_has_no_chunks() {
        assert!(split_into_chunks("", 10).is_empty());
    }

    #[test]
    fn test_sentences_are_packed_until_limit() {
        let text = "Aaaa aaaa. Bbbb bbbb. Cccc cccc.";
        let chunks = split_into_chunks(text, 21);
        assert_eq!(chunks, vec!["Aaaa aaaa. Bbbb bbbb.", "Cccc cccc."]);
    }

    #[test]
    fn test_long_sentence_is_split_on_words() {
        let text = "Short one. This sentence is definitely much longer than the limit allows.";
        let chunks = split_into_chunks(text, 20);
        assert_eq!(chunks[0], "Short one.");
        for chunk in &chunks {
            assert!(char_len(chunk) <= 20, "chunk too long: {:?}", chunk);
        }
        assert_eq!(words(&chunks.join(" ")), words(text));
    }

    #[test]
    fn test_oversized_word_passes_through_whole() {
        let long_word = "x".repeat(30);
        let text = format!("tiny {} end", long_word);
        let chunks = split_into_chunks(&text, 10);
        assert_eq!(chunks, vec!["tiny".to_string(), long_word, "end".to_string()]);
    }

    #[test]
    fn test_round_trip_preserves_word_sequence() {
        let text = "The quick brown fox jumps over the lazy dog. It was not amused!  \
                    Neither was the cat, which watched from the fence? Then everyone went \
                    home and the evening ended quietly without further incident.";
        for max in [15, 25, 40, 80, 500] {
            let chunks = split_into_chunks(text, max);
            assert_eq!(words(&chunks.join(" ")), words(text), "max = {}", max);
            for chunk in &chunks {
                let oversized_word = words(chunk).len() == 1;
                assert!(
                    char_len(chunk) <= max || oversized_word,
                    "chunk {:?} exceeds {}",
                    chunk,
                    max
                );
            }
        }
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        let text = "ééééé ééééé";
        assert_eq!(split_into_chunks(text, 11), vec![text.to_string()]);
    }
}

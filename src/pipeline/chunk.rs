// Token chunking: split texts into fixed-size runs of words.
//
// Used to turn one long document into a sequence of comparable samples for
// drift analysis. Chunks never straddle two input texts.

use anyhow::Result;

/// Split each text on whitespace and rejoin every `size` tokens with single
/// spaces. The last chunk of a text may be shorter. Texts with no tokens
/// contribute no chunks.
pub fn chunk_texts<S: AsRef<str>>(texts: &[S], size: usize) -> Result<Vec<String>> {
    if size == 0 {
        anyhow::bail!("Chunk size must be at least 1 token");
    }

    let mut chunks = Vec::new();
    for text in texts {
        let tokens: Vec<&str> = text.as_ref().split_whitespace().collect();
        chunks.extend(tokens.chunks(size).map(|run| run.join(" ")));
    }
    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_two_texts() {
        let data = ["This is the first text.", "This is the second text."];
        let chunks = chunk_texts(&data, 3).unwrap();
        assert_eq!(
            chunks,
            vec!["This is the", "first text.", "This is the", "second text."]
        );
    }

    #[test]
    fn test_chunk_exact_multiple() {
        let chunks = chunk_texts(&["a b c d"], 2).unwrap();
        assert_eq!(chunks, vec!["a b", "c d"]);
    }

    #[test]
    fn test_chunk_zero_size_fails() {
        let err = chunk_texts(&["a b"], 0).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn test_chunk_blank_text_contributes_nothing() {
        let chunks = chunk_texts(&["", "   ", "one"], 5).unwrap();
        assert_eq!(chunks, vec!["one"]);
    }
}

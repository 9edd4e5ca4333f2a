//! Readers for the word2vec text and binary formats.
//!
//! Text: an optional `count dim` header line, then one `word v1 .. vN` line
//! per word. Binary: an ASCII `count dim` header line, then per word the
//! word bytes up to a space followed by `dim` little-endian `f32` values and
//! an optional newline.

use std::path::Path;

use tracing::{debug, warn};

use crate::embedding::store::WordVectors;
use crate::error::{Word2VecError, Word2VecResult};
use crate::models::ModelFormat;

/// Read a model file from disk.
pub fn read_vectors(path: &Path, format: ModelFormat) -> Word2VecResult<WordVectors> {
    let bytes = std::fs::read(path).map_err(|e| Word2VecError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), format = %format, "Model file read");
    parse_vectors(&bytes, format)
}

/// Parse model bytes in the given format.
pub fn parse_vectors(bytes: &[u8], format: ModelFormat) -> Word2VecResult<WordVectors> {
    match format {
        ModelFormat::Text => {
            let text = std::str::from_utf8(bytes)
                .map_err(|e| Word2VecError::Format(format!("text model is not UTF-8: {}", e)))?;
            parse_text(text)
        }
        ModelFormat::Binary => parse_binary(bytes),
        ModelFormat::Auto => match std::str::from_utf8(bytes) {
            Ok(text) => parse_text(text).or_else(|text_err| {
                parse_binary(bytes).map_err(|_| text_err)
            }),
            Err(_) => parse_binary(bytes),
        },
    }
}

pub fn parse_text(text: &str) -> Word2VecResult<WordVectors> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .peekable();

    let first = lines
        .peek()
        .copied()
        .ok_or_else(|| Word2VecError::Format("model file is empty".to_string()))?;

    let (declared, dimension) = match parse_header(first.1) {
        Some((count, dimension)) => {
            lines.next();
            (Some(count), dimension)
        }
        None => (None, first.1.split_whitespace().count().saturating_sub(1)),
    };
    if dimension == 0 {
        return Err(Word2VecError::Format(format!(
            "line {}: vectors must have at least one component",
            first.0
        )));
    }
    // A text row needs a word and a separator per component.
    let min_row_len = dimension
        .checked_mul(2)
        .and_then(|n| n.checked_add(1))
        .filter(|&n| n <= text.len())
        .ok_or_else(|| {
            Word2VecError::Format(format!(
                "header dimension {} does not fit a {} byte model",
                dimension,
                text.len()
            ))
        })?;

    let capacity = declared.unwrap_or(0).min(text.len() / min_row_len);
    let mut vectors = WordVectors::with_capacity(dimension, capacity);
    let mut values = Vec::with_capacity(dimension);
    for (number, line) in lines {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else { continue };

        values.clear();
        for token in tokens {
            let value = token.parse::<f64>().map_err(|_| {
                Word2VecError::Format(format!("line {}: invalid number '{}'", number, token))
            })?;
            values.push(value);
        }
        if values.len() != dimension {
            return Err(Word2VecError::Format(format!(
                "line {}: expected {} components, found {}",
                number,
                dimension,
                values.len()
            )));
        }
        if !vectors.push(word, &values)? {
            debug!(word, line = number, "Duplicate word ignored");
        }
    }

    finish(vectors, declared)
}

pub fn parse_binary(bytes: &[u8]) -> Word2VecResult<WordVectors> {
    let header_end = bytes
        .iter()
        .position(|&b| b == b'\n')
        .ok_or_else(|| Word2VecError::Format("binary model has no header line".to_string()))?;
    let header = std::str::from_utf8(&bytes[..header_end])
        .ok()
        .and_then(|line| parse_header(line.trim()))
        .ok_or_else(|| {
            Word2VecError::Format("binary model header must be '<count> <dimension>'".to_string())
        })?;
    let (count, dimension) = header;
    if dimension == 0 {
        return Err(Word2VecError::Format(
            "vectors must have at least one component".to_string(),
        ));
    }
    let body_len = bytes.len() - header_end - 1;
    let record_len = dimension
        .checked_mul(4)
        .filter(|&n| n < body_len)
        .ok_or_else(|| {
            Word2VecError::Format(format!(
                "header dimension {} does not fit a {} byte model",
                dimension,
                bytes.len()
            ))
        })?;

    // Each record also carries at least one word byte and a space.
    let capacity = count.min(body_len / (record_len + 2));
    let mut vectors = WordVectors::with_capacity(dimension, capacity);
    let mut values = vec![0.0f64; dimension];
    let mut pos = header_end + 1;

    for record in 0..count {
        while pos < bytes.len() && (bytes[pos] == b'\n' || bytes[pos] == b'\r') {
            pos += 1;
        }
        let word_len = bytes[pos..]
            .iter()
            .position(|&b| b == b' ')
            .ok_or_else(|| truncated(record, count))?;
        let word = String::from_utf8_lossy(&bytes[pos..pos + word_len]).into_owned();
        pos += word_len + 1;

        let raw = bytes
            .get(pos..pos + record_len)
            .ok_or_else(|| truncated(record, count))?;
        for (value, chunk) in values.iter_mut().zip(raw.chunks_exact(4)) {
            *value = f64::from(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }
        pos += record_len;

        if word.is_empty() {
            return Err(Word2VecError::Format(format!("record {}: empty word", record + 1)));
        }
        if !vectors.push(word, &values)? {
            debug!(record = record + 1, "Duplicate word ignored");
        }
    }

    finish(vectors, Some(count))
}

fn truncated(record: usize, count: usize) -> Word2VecError {
    Word2VecError::Format(format!(
        "binary model truncated at record {} of {}",
        record + 1,
        count
    ))
}

fn parse_header(line: &str) -> Option<(usize, usize)> {
    let mut tokens = line.split_whitespace();
    let count = tokens.next()?.parse().ok()?;
    let dimension = tokens.next()?.parse().ok()?;
    tokens.next().is_none().then_some((count, dimension))
}

fn finish(vectors: WordVectors, declared: Option<usize>) -> Word2VecResult<WordVectors> {
    if vectors.is_empty() {
        return Err(Word2VecError::Format("model contains no vectors".to_string()));
    }
    if let Some(declared) = declared.filter(|&d| d != vectors.len()) {
        warn!(
            declared,
            loaded = vectors.len(),
            "Vocabulary size differs from model header"
        );
    }
    Ok(vectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "3 2\nfire 1.0 0.5\nrocks -0.25 2.0\nwater 0.0 -1.0\n";

    fn binary(words: &[(&str, [f32; 2])]) -> Vec<u8> {
        let mut out = format!("{} 2\n", words.len()).into_bytes();
        for (word, vector) in words {
            out.extend_from_slice(word.as_bytes());
            out.push(b' ');
            for v in vector {
                out.extend_from_slice(&v.to_le_bytes());
            }
            out.push(b'\n');
        }
        out
    }

    #[test]
    fn test_parse_text_with_header() {
        let vectors = parse_text(TEXT).unwrap();
        assert_eq!(vectors.len(), 3);
        assert_eq!(vectors.dimension(), 2);
        assert_eq!(vectors.get("rocks"), Some(&[-0.25, 2.0][..]));
    }

    #[test]
    fn test_parse_text_without_header() {
        let vectors = parse_text("fire 1 2 3\nwater 4 5 6\n").unwrap();
        assert_eq!(vectors.dimension(), 3);
        assert_eq!(vectors.get("water"), Some(&[4.0, 5.0, 6.0][..]));
    }

    #[test]
    fn test_parse_text_rejects_short_row() {
        let err = parse_text("2 3\nfire 1 2 3\nwater 4 5\n").unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_parse_text_rejects_bad_number() {
        let err = parse_text("fire 1 x\n").unwrap_err();
        assert!(err.to_string().contains("invalid number 'x'"));
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_text("\n\n").is_err());
    }

    #[test]
    fn test_parse_binary() {
        let bytes = binary(&[("fire", [1.0, 0.5]), ("rocks", [-0.25, 2.0])]);
        let vectors = parse_binary(&bytes).unwrap();
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors.get("fire"), Some(&[1.0, 0.5][..]));
    }

    #[test]
    fn test_parse_binary_without_newlines() {
        let mut bytes = b"1 2\nfire ".to_vec();
        bytes.extend_from_slice(&1.0f32.to_le_bytes());
        bytes.extend_from_slice(&2.0f32.to_le_bytes());
        let vectors = parse_binary(&bytes).unwrap();
        assert_eq!(vectors.get("fire"), Some(&[1.0, 2.0][..]));
    }

    #[test]
    fn test_parse_binary_truncated() {
        let mut bytes = binary(&[("fire", [1.0, 0.5]), ("rocks", [-0.25, 2.0])]);
        bytes.truncate(bytes.len() - 5);
        let err = parse_binary(&bytes).unwrap_err();
        assert!(err.to_string().contains("truncated at record 2 of 2"));
    }

    #[test]
    fn test_text_and_binary_agree() {
        let text = parse_vectors(TEXT.as_bytes(), ModelFormat::Auto).unwrap();
        let bin = parse_vectors(
            &binary(&[
                ("fire", [1.0, 0.5]),
                ("rocks", [-0.25, 2.0]),
                ("water", [0.0, -1.0]),
            ]),
            ModelFormat::Auto,
        )
        .unwrap();

        for word in ["fire", "rocks", "water"] {
            assert_eq!(text.get(word), bin.get(word));
        }
    }

    #[test]
    fn test_huge_text_header_count_is_a_format_error() {
        let err = parse_text("100000000000000 300\nfire 1.0\n").unwrap_err();
        assert!(matches!(err, Word2VecError::Format(_)));
    }

    #[test]
    fn test_huge_text_header_dimension_is_a_format_error() {
        let err = parse_text("1 100000000000000\nfire 1.0\n").unwrap_err();
        assert!(matches!(err, Word2VecError::Format(_)));
        assert!(err.to_string().contains("header dimension"));
    }

    #[test]
    fn test_huge_binary_header_count_is_a_format_error() {
        let mut bytes = binary(&[("fire", [1.0, 0.5])]);
        bytes.splice(0..1, b"100000000000000".iter().copied());
        let err = parse_binary(&bytes).unwrap_err();
        assert!(err.to_string().contains("truncated at record 2 of 100000000000000"));
    }

    #[test]
    fn test_huge_binary_header_dimension_is_a_format_error() {
        let mut bytes = format!("1 {}\nfire ", usize::MAX / 2).into_bytes();
        bytes.extend_from_slice(&1.0f32.to_le_bytes());
        let err = parse_binary(&bytes).unwrap_err();
        assert!(matches!(err, Word2VecError::Format(_)));
        assert!(err.to_string().contains("header dimension"));
    }

    #[test]
    fn test_auto_with_huge_header_fails_cleanly() {
        let err = parse_vectors(b"100000000000000 300\nfire 1.0\n", ModelFormat::Auto).unwrap_err();
        assert!(matches!(err, Word2VecError::Format(_)));
    }

    #[test]
    fn test_forced_text_rejects_binary() {
        let bytes = binary(&[("fire", [1.0, 0.5])]);
        assert!(parse_vectors(&bytes, ModelFormat::Text).is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_vectors(Path::new("/nonexistent/model.bin"), ModelFormat::Auto).unwrap_err();
        assert!(matches!(err, Word2VecError::Io { .. }));
    }
}

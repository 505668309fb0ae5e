use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

/// Decoded log text plus the encoding that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLog {
    pub text: String,
    pub encoding_label: String,
}

/// Decodes raw log bytes: strict UTF-8 first, chardetng fallback for
/// the legacy "ANSI" files some Windows components still write.
pub fn decode_log(bytes: &[u8]) -> DecodedLog {
    let (text, had_errors) = decode_with(bytes, UTF_8);
    if !had_errors {
        return DecodedLog {
            text,
            encoding_label: UTF_8.name().to_string(),
        };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    let (text, _) = decode_with(bytes, enc);
    DecodedLog {
        text,
        encoding_label: enc.name().to_string(),
    }
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> (String, bool) {
    let (text, _, had_errors) = enc.decode(bytes);
    (text.into_owned(), had_errors)
}

/// Last `n` lines of `text`, in original order.
pub fn tail_lines(text: &str, n: usize) -> Vec<&str> {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].to_vec()
}

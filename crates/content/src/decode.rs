// ABOUTME: Byte-to-text decoding for stored guide HTML.
// ABOUTME: Honors a BOM, then a <meta charset> label, then UTF-8, then chardetng detection.

use encoding_rs::Encoding;
use log::warn;
use once_cell::sync::Lazy;
use regex::bytes::Regex;

// Only the head of the file is searched for a charset declaration.
const META_SNIFF_BYTES: usize = 1024;

static META_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?\s*([a-zA-Z0-9_:.-]+)"#).unwrap()
});

/// Decode raw HTML bytes into a `String`.
pub fn decode_html(bytes: &[u8]) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return decoded.into_owned();
    }

    if let Some(encoding) = declared_charset(bytes) {
        let (decoded, _, had_errors) = encoding.decode(bytes);
        if had_errors {
            warn!("content declared {} but contained invalid sequences", encoding.name());
        }
        return decoded.into_owned();
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    warn!("content is not UTF-8, decoding as detected {}", encoding.name());
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}

fn declared_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(META_SNIFF_BYTES)];
    let caps = META_CHARSET.captures(head)?;
    Encoding::for_label(caps.get(1)?.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utf8() {
        assert_eq!(decode_html("Größe".as_bytes()), "Größe");
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"<p>x</p>");
        assert_eq!(decode_html(&bytes), "<p>x</p>");
    }

    #[test]
    fn test_meta_charset_is_honored() {
        let mut bytes = b"<meta charset=\"windows-1252\"><p>".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b"t</p>");
        assert_eq!(decode_html(&bytes), "<meta charset=\"windows-1252\"><p>ét</p>");
    }

    #[test]
    fn test_http_equiv_meta() {
        let mut bytes =
            b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=ISO-8859-1\">".to_vec();
        bytes.push(0xFC);
        assert!(decode_html(&bytes).ends_with('ü'));
    }

    #[test]
    fn test_detects_legacy_bytes() {
        let bytes = [b'c', b'a', b'f', 0xE9];
        let text = decode_html(&bytes);
        assert!(text.starts_with("caf"));
        assert!(!text.contains('\u{FFFD}'));
    }
}

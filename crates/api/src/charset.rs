//! Shift_JIS conversion for the legacy wire. Responses arrive as raw
//! Shift_JIS bytes and are decoded before parsing; outgoing form fields
//! are transcoded and then percent-encoded byte by byte.

use encoding_rs::SHIFT_JIS;

pub fn encode_sjis(text: &str) -> Vec<u8> {
    let (bytes, _, _) = SHIFT_JIS.encode(text);
    bytes.into_owned()
}

/// Lossy on purpose: undecodable bytes become replacement characters
/// rather than failing the fetch.
pub fn decode_sjis(bytes: &[u8]) -> String {
    let (text, _, _) = SHIFT_JIS.decode(bytes);
    text.into_owned()
}

/// A form field value ready for an `x-www-form-urlencoded` body: the
/// text transcoded to Shift_JIS, then percent-encoded. Encoded exactly
/// once; the assembled body is not escaped again.
pub fn sjis_form_value(text: &str) -> String {
    urlencoding::encode_binary(&encode_sjis(text)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tracing_test::traced_test]
    #[test]
    fn test_ascii_round_trip() {
        let text = "hello, board! 123";
        assert_eq!(decode_sjis(&encode_sjis(text)), text);
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_japanese_round_trip() {
        let text = "書き込む前に読んでね";
        assert_eq!(decode_sjis(&encode_sjis(text)), text);
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_known_sjis_bytes() {
        assert_eq!(encode_sjis("あ"), vec![0x82, 0xa0]);
        assert_eq!(decode_sjis(&[0x82, 0xa0]), "あ");
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_form_value_percent_encodes_sjis_bytes() {
        assert_eq!(sjis_form_value("あ"), "%82%A0");
        assert_eq!(sjis_form_value("書き込む"), "%8F%91%82%AB%8D%9E%82%DE");
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_form_value_keeps_ascii_unreserved() {
        assert_eq!(sjis_form_value("sage"), "sage");
        assert_eq!(sjis_form_value("a b"), "a%20b");
    }
}

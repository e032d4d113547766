//! UTF-16 payload codec for arbitrary web-facing MIME types.
//!
//! DataTransfer consumers write custom types as raw UTF-16 code units, so the
//! pasteboard stores them that way. Units are written little-endian without a
//! byte-order mark; decoding honours a leading BOM when one is present.

const BOM_LE: [u8; 2] = [0xff, 0xfe];
const BOM_BE: [u8; 2] = [0xfe, 0xff];

pub fn encode(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Decode UTF-16 bytes, replacing unpaired surrogates with U+FFFD.
///
/// A trailing odd byte is ignored.
pub fn decode(bytes: &[u8]) -> String {
    let (body, big_endian) = if let Some(rest) = bytes.strip_prefix(&BOM_LE) {
        (rest, false)
    } else if let Some(rest) = bytes.strip_prefix(&BOM_BE) {
        (rest, true)
    } else {
        (bytes, false)
    };

    let units = body.chunks_exact(2).map(|pair| {
        let pair = [pair[0], pair[1]];
        if big_endian {
            u16::from_be_bytes(pair)
        } else {
            u16::from_le_bytes(pair)
        }
    });

    char::decode_utf16(units)
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

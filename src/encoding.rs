//! UTF-8 validation and BOM handling using `simdutf8`.

use simdutf8::basic::{from_utf8, Utf8Error};

/// Check if the given bytes are valid UTF-8.
///
/// Uses SIMD-accelerated validation for performance.
pub fn is_utf8(data: &[u8]) -> bool {
    from_utf8(data).is_ok()
}

/// Check if the data starts with a UTF-8 BOM (Byte Order Mark).
///
/// The UTF-8 BOM is the byte sequence: EF BB BF
pub fn has_utf8_bom(data: &[u8]) -> bool {
    data.len() >= 3 && data[0] == 0xEF && data[1] == 0xBB && data[2] == 0xBF
}

/// Skip the UTF-8 BOM if present and return the remaining data.
pub fn skip_bom(data: &[u8]) -> &[u8] {
    if has_utf8_bom(data) { &data[3..] } else { data }
}

/// Decode bytes as UTF-8 text, skipping a leading BOM if present.
///
/// Inputs that are not valid UTF-8 are an error; no transcoding is attempted.
pub fn decode_utf8(data: &[u8]) -> Result<&str, Utf8Error> {
    from_utf8(skip_bom(data))
}

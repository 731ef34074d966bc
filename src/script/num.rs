//! Small integers and booleans as stack items
//!
//! Integers 0..=16 are stored as a single byte. This is a deliberately
//! narrow convention and not the signed-magnitude scriptnum format.

/// Largest integer that can be pushed by a literal or OP_<n>
pub const MAX_SMALL_INT: i64 = 16;

/// Encodes `n` as a single byte holding its lowest 8 bits
///
/// Values above MAX_SMALL_INT are truncated, not rejected; range
/// checks are done when the script is tokenized
pub fn encode_int(n: i64) -> Box<[u8]> {
    Box::new([n as u8])
}

/// Returns the unsigned value of the first byte, or 0 for an empty item
///
/// Any further bytes are ignored
pub fn decode_int(bytes: &[u8]) -> i64 {
    bytes.first().map_or(0, |b| *b as i64)
}

pub fn encode_bool(value: bool) -> Box<[u8]> {
    encode_int(if value { 1 } else { 0 })
}

/// An item is true iff any of its bytes is non-zero
pub fn cast_to_bool(bytes: &[u8]) -> bool {
    bytes.iter().any(|b| *b != 0)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_encode_decode_small_ints() {
        for n in 0..=MAX_SMALL_INT {
            let encoded = encode_int(n);
            assert_eq!(1, encoded.len());
            assert_eq!(n, decode_int(&encoded));
        }
    }

    #[test]
    fn test_encode_truncates() {
        assert_eq!(&[0x01u8][..], &encode_int(257)[..]);
        assert_eq!(&[0xffu8][..], &encode_int(-1)[..]);
    }

    #[test]
    fn test_decode_int() {
        assert_eq!(0, decode_int(&[]));
        assert_eq!(200, decode_int(&[200]));

        // only the first byte counts
        assert_eq!(3, decode_int(&[3, 1, 1]));
    }

    #[test]
    fn test_cast_to_bool() {
        assert!(!cast_to_bool(&[]));
        assert!(!cast_to_bool(&[0]));
        assert!(!cast_to_bool(&[0, 0, 0]));
        assert!(cast_to_bool(&[0, 0, 1]));
        assert!(cast_to_bool(&[0x80]));
        assert!(cast_to_bool(b"text"));

        assert!(cast_to_bool(&encode_bool(true)));
        assert!(!cast_to_bool(&encode_bool(false)));
        assert_eq!(&encode_int(1)[..], &encode_bool(true)[..]);
    }
}

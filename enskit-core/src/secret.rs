//! Commitment secret encoding.
//!
//! The registration controller takes the commitment secret as a `bytes32`.
//! Secrets are percent-encoded UTF-8 (the `encodeURIComponent` alphabet),
//! right-padded with zero bytes to exactly 32. Secrets whose encoded form
//! exceeds 32 bytes are rejected outright rather than truncated: a silently
//! shortened secret would produce a commitment that `register` can never
//! match.

use alloy::primitives::B256;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::constants::SECRET_SIZE;
use crate::error::{EnsError, Result};

/// The characters `encodeURIComponent` leaves unescaped, besides
/// alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encodes a commitment secret into the controller's `bytes32` format.
///
/// # Errors
///
/// Returns [`EnsError::SecretTooLong`] when the percent-encoded secret is
/// longer than 32 bytes.
pub fn encode_secret(secret: &str) -> Result<B256> {
    let encoded = utf8_percent_encode(secret, URI_COMPONENT).to_string();
    let bytes = encoded.as_bytes();

    if bytes.len() > SECRET_SIZE {
        return Err(EnsError::SecretTooLong {
            length: bytes.len(),
        });
    }

    let mut out = [0u8; SECRET_SIZE];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(B256::from(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_ascii_is_right_padded() {
        let encoded = encode_secret("secret").unwrap();
        assert_eq!(&encoded[..6], b"secret");
        assert!(encoded[6..].iter().all(|&b| b == 0));
        assert_eq!(
            format!("0x{}", hex::encode(encoded)),
            "0x7365637265740000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_empty_secret_is_all_zeros() {
        assert_eq!(encode_secret("").unwrap(), B256::ZERO);
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        // '&' escapes to "%26"; '~' stays as-is
        let encoded = encode_secret("a&b~c").unwrap();
        assert_eq!(&encoded[..7], b"a%26b~c");
    }

    #[test]
    fn test_non_ascii_is_utf8_percent_encoded() {
        let encoded = encode_secret("é").unwrap();
        assert_eq!(&encoded[..6], b"%C3%A9");
    }

    #[test]
    fn test_exactly_32_bytes_fits() {
        let secret = "a".repeat(32);
        let encoded = encode_secret(&secret).unwrap();
        assert_eq!(encoded.as_slice(), secret.as_bytes());
    }

    #[test]
    fn test_oversized_secret_is_rejected() {
        let err = encode_secret(&"a".repeat(33)).unwrap_err();
        assert!(matches!(err, EnsError::SecretTooLong { length: 33 }));

        // Escaping can push a short secret over the limit: 11 spaces
        // percent-encode to 33 bytes.
        let err = encode_secret(&" ".repeat(11)).unwrap_err();
        assert!(matches!(err, EnsError::SecretTooLong { length: 33 }));
    }

    proptest! {
        #[test]
        fn prop_unreserved_input_roundtrips(secret in "[a-zA-Z0-9_.!~*'()-]{0,32}") {
            let encoded = encode_secret(&secret).unwrap();
            prop_assert_eq!(&encoded[..secret.len()], secret.as_bytes());
            prop_assert!(encoded[secret.len()..].iter().all(|&b| b == 0));
        }

        #[test]
        fn prop_never_truncates(secret in ".{0,64}") {
            match encode_secret(&secret) {
                Ok(encoded) => {
                    let expanded =
                        utf8_percent_encode(&secret, URI_COMPONENT).to_string();
                    prop_assert!(expanded.len() <= SECRET_SIZE);
                    prop_assert_eq!(&encoded[..expanded.len()], expanded.as_bytes());
                }
                Err(EnsError::SecretTooLong { length }) => {
                    prop_assert!(length > SECRET_SIZE);
                }
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }
    }
}

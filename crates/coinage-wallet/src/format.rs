//! The wallet record codec.
//!
//! A wallet record is a small plain-text document:
//!
//! ```text
//! coinage-wallet v1
//! <public key, 64 hex chars>
//! <private key seed, 64 hex chars>
//! ```
//!
//! The header line is a schema/version tag so the format can evolve without
//! fixed-offset guessing; every line is length-checked and failures are
//! typed errors, never line-index panics. Parsing also confirms the stored
//! public key matches the one derived from the seed, catching a record
//! spliced together from two different pairs.

use coinage_core::Keypair;
use thiserror::Error;

/// The schema/version tag on the first line of every record.
pub const HEADER_V1: &str = "coinage-wallet v1";

const KEY_BYTES: usize = 32;

/// Typed parse failures for wallet records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("wallet record is not valid UTF-8")]
    NotUtf8,

    #[error("wallet record is empty")]
    Empty,

    #[error("unrecognized wallet header: {0:?}")]
    UnrecognizedHeader(String),

    #[error("missing public key line")]
    MissingPublicKey,

    #[error("missing private key line")]
    MissingPrivateKey,

    #[error("invalid hex in {field} line")]
    InvalidHex { field: &'static str },

    #[error("{field} key has {got} bytes, expected {KEY_BYTES}")]
    InvalidKeyLength { field: &'static str, got: usize },

    #[error("stored public key does not match the private key")]
    KeyMismatch,
}

/// Encode a key pair as a wallet record.
pub fn encode_record(keypair: &Keypair) -> String {
    format!(
        "{HEADER_V1}\n{}\n{}\n",
        keypair.public_key().to_hex(),
        hex::encode(keypair.seed())
    )
}

/// Parse a wallet record back into a key pair.
pub fn parse_record(blob: &[u8]) -> Result<Keypair, FormatError> {
    let text = std::str::from_utf8(blob).map_err(|_| FormatError::NotUtf8)?;
    // `lines` strips the trailing newline from each line, including the
    // final one.
    let mut lines = text.lines();

    let header = lines.next().ok_or(FormatError::Empty)?;
    if header.trim_end() != HEADER_V1 {
        return Err(FormatError::UnrecognizedHeader(header.to_owned()));
    }

    let public_hex = lines.next().ok_or(FormatError::MissingPublicKey)?.trim_end();
    let private_hex = lines.next().ok_or(FormatError::MissingPrivateKey)?.trim_end();

    let public_bytes = decode_key(public_hex, "public")?;
    let seed = decode_key(private_hex, "private")?;

    let keypair = Keypair::from_seed(&seed);
    if keypair.public_key().as_bytes() != &public_bytes {
        return Err(FormatError::KeyMismatch);
    }

    Ok(keypair)
}

fn decode_key(hex_str: &str, field: &'static str) -> Result<[u8; KEY_BYTES], FormatError> {
    let bytes = hex::decode(hex_str).map_err(|_| FormatError::InvalidHex { field })?;
    let len = bytes.len();
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| FormatError::InvalidKeyLength { field, got: len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_parse_roundtrip() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let record = encode_record(&keypair);
        let parsed = parse_record(record.as_bytes()).unwrap();

        assert_eq!(parsed.public_key(), keypair.public_key());
        assert_eq!(parsed.seed(), keypair.seed());
    }

    #[test]
    fn test_record_layout() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let record = encode_record(&keypair);
        let lines: Vec<&str> = record.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER_V1);
        assert_eq!(lines[1], keypair.public_key().to_hex());
        assert_eq!(lines[2], hex::encode(keypair.seed()));
        assert!(record.ends_with('\n'));
    }

    #[test]
    fn test_empty_record() {
        assert_eq!(parse_record(b"").unwrap_err(), FormatError::Empty);
    }

    #[test]
    fn test_wrong_header() {
        let err = parse_record(b"coinage-wallet v9\nabc\ndef\n").unwrap_err();
        assert_eq!(
            err,
            FormatError::UnrecognizedHeader("coinage-wallet v9".into())
        );
    }

    #[test]
    fn test_missing_key_lines() {
        let header_only = format!("{HEADER_V1}\n");
        assert_eq!(
            parse_record(header_only.as_bytes()).unwrap_err(),
            FormatError::MissingPublicKey
        );

        let keypair = Keypair::from_seed(&[0x42; 32]);
        let no_private = format!("{HEADER_V1}\n{}\n", keypair.public_key().to_hex());
        assert_eq!(
            parse_record(no_private.as_bytes()).unwrap_err(),
            FormatError::MissingPrivateKey
        );
    }

    #[test]
    fn test_bad_hex_and_length() {
        let bad_hex = format!("{HEADER_V1}\nzz-not-hex\n{}\n", "00".repeat(32));
        assert_eq!(
            parse_record(bad_hex.as_bytes()).unwrap_err(),
            FormatError::InvalidHex { field: "public" }
        );

        let keypair = Keypair::from_seed(&[0x42; 32]);
        let short = format!("{HEADER_V1}\n{}\nabcd\n", keypair.public_key().to_hex());
        assert_eq!(
            parse_record(short.as_bytes()).unwrap_err(),
            FormatError::InvalidKeyLength {
                field: "private",
                got: 2
            }
        );
    }

    #[test]
    fn test_spliced_record_is_rejected() {
        let a = Keypair::from_seed(&[0x01; 32]);
        let b = Keypair::from_seed(&[0x02; 32]);
        let spliced = format!(
            "{HEADER_V1}\n{}\n{}\n",
            a.public_key().to_hex(),
            hex::encode(b.seed())
        );
        assert_eq!(
            parse_record(spliced.as_bytes()).unwrap_err(),
            FormatError::KeyMismatch
        );
    }

    #[test]
    fn test_missing_trailing_newline_is_fine() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let record = encode_record(&keypair);
        let trimmed = record.trim_end();
        let parsed = parse_record(trimmed.as_bytes()).unwrap();
        assert_eq!(parsed.seed(), keypair.seed());
    }

    #[test]
    fn test_non_utf8_blob() {
        assert_eq!(
            parse_record(&[0xff, 0xfe, 0x00]).unwrap_err(),
            FormatError::NotUtf8
        );
    }
}

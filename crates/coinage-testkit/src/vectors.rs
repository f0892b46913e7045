//! Golden vectors for canonical encoding and digests.
//!
//! Each vector pairs a record with the exact canonical text it must encode
//! to. The expectations are written by hand (sorted keys, compact JSON), so
//! any drift in the encoder shows up as a byte-level diff rather than a
//! silently changed hash.

use coinage_core::canonicalize;
use serde_json::{json, Value};

/// A known record and its expected canonical text.
pub struct GoldenVector {
    pub name: &'static str,
    pub record: Value,
    pub expected_canonical: &'static str,
}

/// All canonical-encoding vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty-block",
            record: json!({
                "index": 0,
                "previous_hash": "",
                "proof": 100,
                "transactions": [],
            }),
            // The empty transaction list is encoded, never omitted
            expected_canonical: r#"{"index":0,"previous_hash":"","proof":100,"transactions":[]}"#,
        },
        GoldenVector {
            name: "keys-sorted-not-insertion-ordered",
            record: json!({
                "zulu": 1,
                "alpha": 2,
                "mike": 3,
            }),
            expected_canonical: r#"{"alpha":2,"mike":3,"zulu":1}"#,
        },
        GoldenVector {
            name: "ordered-transaction-fields",
            record: json!({
                "sender": "00ab",
                "recipient": "B",
                "amount": 10,
                "signature": "beef",
            }),
            expected_canonical: r#"{"amount":10,"recipient":"B","sender":"00ab","signature":"beef"}"#,
        },
        GoldenVector {
            name: "block-with-transaction",
            record: json!({
                "index": 1,
                "previous_hash": "f00d",
                "proof": 7,
                "transactions": [{
                    "sender": "00ab",
                    "recipient": "B",
                    "amount": 10,
                    "signature": "beef",
                }],
            }),
            expected_canonical: r#"{"index":1,"previous_hash":"f00d","proof":7,"transactions":[{"amount":10,"recipient":"B","sender":"00ab","signature":"beef"}]}"#,
        },
        GoldenVector {
            name: "non-ascii-recipient-is-raw-utf8",
            record: json!({
                "recipient": "bö",
            }),
            expected_canonical: "{\"recipient\":\"bö\"}",
        },
    ]
}

/// Check every vector, reporting the first mismatch.
pub fn verify_all_vectors() -> Result<(), String> {
    for vector in all_vectors() {
        let bytes = canonicalize(&vector.record)
            .map_err(|e| format!("{}: encoding failed: {e}", vector.name))?;
        let text = String::from_utf8(bytes)
            .map_err(|_| format!("{}: canonical bytes are not UTF-8", vector.name))?;
        if text != vector.expected_canonical {
            return Err(format!(
                "{}: canonical text drifted\n  expected: {}\n  actual:   {}",
                vector.name, vector.expected_canonical, text
            ));
        }
    }
    Ok(())
}

/// Well-known SHA-256 digests, pinning the digest function itself.
pub const SHA256_EMPTY: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
pub const SHA256_ABC: &str =
    "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

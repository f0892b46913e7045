//! # Coinage Testkit
//!
//! Testing utilities for Coinage.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known records with expected canonical text (and
//!   known digests) for cross-platform verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up wallet scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use coinage_testkit::vectors::verify_all_vectors;
//!
//! verify_all_vectors().expect("canonical encoding drifted");
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use coinage_testkit::generators::{transaction_from_params, TxParams};
//!
//! proptest! {
//!     #[test]
//!     fn signed_transactions_verify(params: TxParams) {
//!         let tx = transaction_from_params(&params);
//!         prop_assert!(coinage_core::verify(&tx));
//!     }
//! }
//! ```
//!
//! ## Fixtures
//!
//! ```rust
//! use coinage_testkit::fixtures::WalletFixture;
//!
//! let fixture = WalletFixture::with_seed([0x42; 32]);
//! let tx = fixture.sign("recipient", 10);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, WalletFixture};
pub use generators::{transaction_from_params, TxParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};

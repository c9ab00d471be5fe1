//! Tests for the command module.
//!
//! Test organization:
//! - `changelog`: changelog generation against a mocked forge
//! - `milestone`: milestone synchronization rules and dry-run
//! - `release`: release publication and milestone closing

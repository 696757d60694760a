//! Protocol Tests
//!
//! Message framing, checksums and reserved-byte escaping.

mod codec_tests;
mod command_tests;

//! Transport Tests
//!
//! TCP and in-memory links.

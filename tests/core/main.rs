//! Integration tests for Layer 1: Core
//!
//! Tests for fragment decoding, the pending observation, and the exact
//! map store calls issued by a commit.

mod decoding;
mod properties;
mod support;

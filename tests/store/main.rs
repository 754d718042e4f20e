//! Integration tests for Layer 2: Store
//!
//! Tests for the in-memory room graph driven through the map store trait.

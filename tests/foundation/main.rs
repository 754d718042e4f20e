//! Integration tests for Layer 0: Foundation
//!
//! Tests for directions, exit sets, room identifiers, and errors.

mod directions;

//! Tests for fare pricing

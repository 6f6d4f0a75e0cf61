//! Unit tests for email delivery

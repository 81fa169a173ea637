//! Unit tests for weather kinds.

//! Property-based tests for merge and defaulting laws

mod merge_laws;

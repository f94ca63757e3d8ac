//! Property-based tests for model validation invariants.

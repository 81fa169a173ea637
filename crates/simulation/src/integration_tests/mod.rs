//! Cross-module scenario tests driven through the headless harness.

mod determinism_tests;
mod input_tests;
mod pool_invariant_tests;

//! Lock Session Integration Tests
//!
//! Exercises the public `lockgrant` API end to end: worked request
//! sequences, randomized invariant checks and independent datasets.

mod datasets;
mod properties;

//! Common utilities for generating test problems.
//!
//! This module provides helper functions used by the integration tests and
//! the experimental binary:
//!
//! - **`generate`**: Constructs random subspace bases, optionally sharing a
//!   planted common subspace of a chosen dimension, so that the expected
//!   intersection of a generated pair is known by construction.

pub mod generate;

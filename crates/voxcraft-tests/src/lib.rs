//! voxcraft end-to-end test infrastructure
//!
//! Shared helpers for the integration tests under `tests/`:
//!
//! - [`determinism`]: byte-identical output checks across repeated runs
//! - [`fixtures`]: synthetic PCM payloads and fake platform/device doubles
//!
//! ```bash
//! cargo test -p voxcraft-tests
//! ```

pub mod determinism;
pub mod fixtures;

pub use determinism::{assert_deterministic, compute_hash, verify_determinism, DeterminismResult, DiffInfo};

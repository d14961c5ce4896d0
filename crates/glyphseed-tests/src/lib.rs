//! Glyphseed Integration Test Infrastructure
//!
//! This crate checks the output contract of the generators across many
//! seeds:
//!
//! - **Golden values**: hash, RNG stream, palette and shape assignments
//! - **Determinism**: byte-identical markup across runs
//! - **Containment**: every coordinate inside the declared viewBox
//! - **Coverage and independence**: catalogs reachable, dimensions decoupled
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p glyphseed-tests
//! ```
//!
//! ## Determinism Testing
//!
//! ```rust,ignore
//! use glyphseed_tests::determinism::{verify_determinism, DeterminismFixture};
//!
//! let result = verify_determinism(|| crystal::generate("jaskier", &options), 3);
//! assert!(result.is_deterministic);
//!
//! let report = DeterminismFixture::new()
//!     .add_seeds(fixtures::known_seeds())
//!     .run(|seed| icon::generate(seed, IconCategory::Mixed, &IconOptions::default()));
//! assert!(report.all_deterministic(), "{}", report);
//! ```

pub mod determinism;
pub mod fixtures;
pub mod geometry;

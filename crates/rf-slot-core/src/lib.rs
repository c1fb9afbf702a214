//! # rf-slot-core — Reel cadence and line scanning for slot games
//!
//! Two independent, stateless tools:
//!
//! - **Cadence**: turns per-round special symbol positions into a per-column
//!   reel stop cadence (anticipation slows a column down).
//! - **Lines**: finds winning combinations on a flat line of symbol codes,
//!   with `0` acting as a wildcard.
//!
//! ## Architecture
//!
//! ```text
//! CadenceFixture (JSON / YAML)
//!     │
//!     ├── AnticipatorConfig ──┐
//!     └── GameRounds ─────────┴──> CadenceBuilder ──> RoundCadences
//!
//! &[SymbolCode] ──> LineScanner ──> ScanOutcome { matches, line }
//! ```

pub mod cadence;
pub mod config;
pub mod error;
pub mod lines;
pub mod symbols;

pub use cadence::*;
pub use config::*;
pub use error::*;
pub use lines::*;
pub use symbols::*;

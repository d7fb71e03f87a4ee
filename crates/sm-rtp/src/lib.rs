//! # sm-rtp — Theoretical RTP Evaluation Engine
//!
//! Computes the theoretical return-to-player of a slot configuration and
//! compares it against the designer's target. Three win models are
//! supported, each with its own combinatorial shape:
//!
//! - **Standard paylines**: a line hit is modeled as the symbol landing on
//!   every reel simultaneously
//! - **Ways**: same arithmetic, interpreted as per-reel presence rather
//!   than a tracked position
//! - **Clusters**: an approximate frequency heuristic, capped at size 8
//!
//! The evaluator is a pure synchronous function: it reads immutable
//! configuration snapshots, allocates a fresh [`RtpResult`], and holds no
//! state between calls, so concurrent invocation needs no locking.
//!
//! ```text
//! SymbolLibrary + ReelSet + WinModel
//!         │
//!         v
//!     evaluate() ──► RtpResult { theoretical %, target %, difference }
//! ```

pub mod bonus;
pub mod coverage;
pub mod error;
pub mod evaluate;
pub mod report;

pub use bonus::*;
pub use coverage::*;
pub use error::*;
pub use evaluate::*;
pub use report::*;

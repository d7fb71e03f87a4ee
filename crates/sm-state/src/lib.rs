//! # sm-state — Configuration Store
//!
//! A single owned store for the configuration entities the editors mutate:
//! symbol library, reel set, win model, bet settings and bonus features.
//! Editors read snapshots and write whole sections back through explicit
//! update calls; every update bumps a revision counter so collaborating
//! views re-fetch instead of sharing mutable state.
//!
//! Documents persist as versioned JSON. Loading rejects documents written
//! by a newer schema version.

pub mod document;
pub mod store;

pub use document::*;
pub use store::*;

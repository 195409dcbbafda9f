//! Slot normalization for intent requests.
//!
//! Each raw slot may carry entity-resolution verdicts from several
//! authorities. [`reduce_authority`] folds one slot into a [`CanonicalSlot`]
//! and [`normalize_slots`] does so for a whole intent.
//!
//! Precedence: only the first authority, and only its first value, is ever
//! consulted. Later authorities are ignored even when present.

pub mod error;
pub mod normalize;
pub mod reduce;

pub use {
    error::{Error, Result},
    normalize::{SlotMap, normalize_slots},
    reduce::{CanonicalSlot, ResolutionPolicy, reduce_authority},
};

//! Transactional photo organisation.
//!
//! The organiser moves every eligible photo through a two-phase protocol:
//! stage into a holding directory under the destination root, then commit
//! into the final dated directory. Committed moves are journalled so a run
//! can be undone, and per-file outcomes are persisted so an interrupted run
//! resumes where it stopped.
//!
//! # Per-file protocol
//!
//! 1. Skip names already marked processed (resume).
//! 2. Extract classification keys; an extraction failure records a failed
//!    outcome and the run continues.
//! 3. Plan the placement; a missing timestamp records a failed outcome.
//! 4. Stage the file, then commit it; the undo journal is written only
//!    after the commit rename succeeds.
//! 5. Persist the file's outcome before moving on, so a crash loses at most
//!    the in-flight file's bookkeeping.

mod config;
mod error;
mod fsops;
mod journal;
mod mover;
mod state;
mod types;
mod undo;

pub use config::OrganiserConfig;
pub use error::OrganisationError;
pub use journal::{UndoJournal, UndoRecord};
pub use mover::Organiser;
pub use state::{FileStatus, StateStore};
pub use types::{Durability, FailedFile, Summary};
pub use undo::UndoEngine;

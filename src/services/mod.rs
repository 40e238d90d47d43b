//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own board mutations and persistence concerns so route
//! handlers can stay focused on protocol translation. Every mutation follows
//! the same shape: take the board write lock, mutate, capture a snapshot, and
//! write it through to the store before releasing the lock — so a save can
//! never observe a half-applied mutation.

pub mod board;
pub mod card;
pub mod store;

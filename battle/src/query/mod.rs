//! Query helpers for battle decision making
//!
//! Utilities for analyzing element matchups between a roster and an
//! opposing creature.

mod matchup;

pub use matchup::members_with_advantage;

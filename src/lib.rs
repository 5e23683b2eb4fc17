//! Crypt Keeper - turn-based crypt crawler
//!
//! One player fights a roster of Skeletons and Liches, levels up from
//! victories, carries an inventory and persists the session to a flat
//! text save file. Every game event is appended to a line-oriented log.

pub mod combat;
pub mod command;
pub mod core;
pub mod entity;
pub mod events;
pub mod session;

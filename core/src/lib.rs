//! # Poolgen Core
//!
//! Domain library behind the `poolgen` binary. Everything the tool knows
//! about backend URL pools lives here, with no process or terminal
//! concerns.
//!
//! * **[`config`]**: the four generation constants and their defaults.
//! * **[`pool`]**: the URL list generator and the pool's textual rendering.
//! * **[`balancer`]**: round-robin selection over a generated pool.

pub mod balancer;
pub mod config;
pub mod pool;

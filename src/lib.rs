//! Staff projects with a lead and members chosen among the people who
//! declared interest, under per-project and per-person caps.
//!
//! The search enumerates every possible team per project ([`algos::enumerate_teams`]),
//! lazily combines one team per project ([`algos::compose`]), keeps the
//! combinations where everybody holds between one role and the per-person
//! cap ([`algos::filter_feasible`]) and draws a few of them at random
//! ([`algos::sample`]).

pub mod algos;
pub mod checks;
pub mod config;
pub mod display;
pub mod errors;
pub mod loaders;
pub mod model;
pub mod stats;

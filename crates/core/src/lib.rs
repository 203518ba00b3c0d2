//! Domain logic for the vitalog wellness tracker.
//!
//! Everything in this crate is pure: validation rules, constants, and
//! derivations over values handed in by the storage layer. Nothing here
//! touches the database or the network.

pub mod error;
pub mod goal_evaluation;
pub mod goals;
pub mod lung_function;
pub mod measurements;
pub mod motivation;
pub mod types;
pub mod weekly_plan;

//! Row structs (`FromRow`) and request DTOs, one module per table group.

pub mod goal;
pub mod lung_function;
pub mod measurement;
pub mod weekly_plan;

//! HTTP handlers, one module per resource.

pub mod goals;
pub mod lung_function;
pub mod measurements;
pub mod motivation;
pub mod weekly_plans;

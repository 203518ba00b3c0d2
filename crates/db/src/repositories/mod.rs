//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument and the owning user's id
//! as the second. Rows belonging to other users are invisible: lookups
//! return `None` and deletes report nothing removed.

pub mod goal_repo;
pub mod lung_function_repo;
pub mod measurement_repo;
pub mod weekly_plan_repo;

pub use goal_repo::GoalRepo;
pub use lung_function_repo::LungFunctionRepo;
pub use measurement_repo::MeasurementRepo;
pub use weekly_plan_repo::WeeklyPlanRepo;

//! Competition structure logic: preset validation, bracket and group planning, generation.

mod bracket;
mod builder;
mod groups;
mod validator;

pub use bracket::{plan_bracket, RoundPlan};
pub use builder::{build_competition, generate_stages, BuildError};
pub use groups::{allocate_groups, AllocationError, GroupPlan};
pub use validator::{is_power_of_two, validate_preset, ValidPreset};

//! Data structures for competitions: presets, generated stages, and validation errors.

mod competition;
mod params;
mod stage;
mod validation;

pub use competition::{
    Competition, CompetitionFormat, CompetitionId, CompetitionSummary, Preset, StructureState,
};
pub use params::{CompetitionParams, MAX_MATCHES_PER_FIXTURE, MAX_TEAMS};
pub use stage::{Fixture, FixtureId, FixtureLeg, Stage, StageId, TableRow};
pub use validation::{Field, ValidationErrors, Violation, ViolationKind};

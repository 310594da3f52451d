//! Competition structure engine: validates presets and generates stages, tables and fixtures.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    allocate_groups, build_competition, generate_stages, is_power_of_two, plan_bracket,
    validate_preset, AllocationError, BuildError, GroupPlan, RoundPlan, ValidPreset,
};
pub use models::{
    Competition, CompetitionFormat, CompetitionId, CompetitionParams, CompetitionSummary, Field,
    Fixture, FixtureId, FixtureLeg, Preset, Stage, StageId, StructureState, TableRow,
    ValidationErrors, Violation, ViolationKind, MAX_MATCHES_PER_FIXTURE, MAX_TEAMS,
};
pub use store::{create_competition, CompetitionListing, CompetitionStore, MemoryStore, StoreError};

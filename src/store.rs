//! Competition storage. A generated competition becomes visible in one write, or not at all.

use crate::logic::{build_competition, BuildError};
use crate::models::{Competition, CompetitionId, CompetitionSummary, StructureState};
use log::info;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::RwLock;

/// Errors from a storage backend.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreError {
    /// Lock was poisoned by a panicking writer.
    Poisoned,
    /// A competition with this id is already stored.
    Duplicate(CompetitionId),
    NotFound(CompetitionId),
    /// Only generated competitions may be stored.
    Ungenerated(CompetitionId),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Poisoned => write!(f, "lock error"),
            StoreError::Duplicate(id) => write!(f, "Competition {} already exists", id),
            StoreError::NotFound(id) => write!(f, "Competition {} not found", id),
            StoreError::Ungenerated(id) => write!(f, "Competition {} has no structure", id),
        }
    }
}

impl std::error::Error for StoreError {}

/// Persistence for generated competitions.
///
/// `insert` must be atomic: after an error, nothing of the competition is visible.
pub trait CompetitionStore {
    fn insert(&self, competition: Competition) -> Result<(), StoreError>;
    fn get(&self, id: CompetitionId) -> Result<Option<Competition>, StoreError>;
    fn list(&self) -> Result<Vec<CompetitionListing>, StoreError>;
    fn set_champion(&self, id: CompetitionId, champion: &str) -> Result<Competition, StoreError>;
}

/// One line of the competition list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CompetitionListing {
    pub id: CompetitionId,
    pub season: i32,
    pub name: String,
    pub format: String,
    pub champion: Option<String>,
    pub summary: CompetitionSummary,
}

impl CompetitionListing {
    fn from_competition(c: &Competition) -> Self {
        Self {
            id: c.id,
            season: c.season,
            name: c.name.clone(),
            format: c.format().to_string(),
            champion: c.champion.clone(),
            summary: c.summary(),
        }
    }
}

/// In-memory store: competitions by id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    competitions: RwLock<HashMap<CompetitionId, Competition>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.competitions.read().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CompetitionStore for MemoryStore {
    fn insert(&self, competition: Competition) -> Result<(), StoreError> {
        if competition.state() != StructureState::Generated {
            return Err(StoreError::Ungenerated(competition.id));
        }
        let mut g = self.competitions.write().map_err(|_| StoreError::Poisoned)?;
        if g.contains_key(&competition.id) {
            return Err(StoreError::Duplicate(competition.id));
        }
        g.insert(competition.id, competition);
        Ok(())
    }

    fn get(&self, id: CompetitionId) -> Result<Option<Competition>, StoreError> {
        let g = self.competitions.read().map_err(|_| StoreError::Poisoned)?;
        Ok(g.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<CompetitionListing>, StoreError> {
        let g = self.competitions.read().map_err(|_| StoreError::Poisoned)?;
        let mut listings: Vec<_> = g.values().map(CompetitionListing::from_competition).collect();
        listings.sort_by(|a, b| (b.season, &a.name).cmp(&(a.season, &b.name)));
        Ok(listings)
    }

    fn set_champion(&self, id: CompetitionId, champion: &str) -> Result<Competition, StoreError> {
        let mut g = self.competitions.write().map_err(|_| StoreError::Poisoned)?;
        let competition = g.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        competition.set_champion(champion);
        Ok(competition.clone())
    }
}

/// Build a competition's structure and store it as one unit.
///
/// Returns the stored competition. If building or storing fails, the store is unchanged.
pub fn create_competition<S: CompetitionStore + ?Sized>(
    store: &S,
    mut competition: Competition,
) -> Result<Competition, BuildError> {
    build_competition(&mut competition)?;
    store
        .insert(competition.clone())
        .map_err(|e| BuildError::Storage(e.to_string()))?;
    info!("Stored competition {} ('{}')", competition.id, competition.name);
    Ok(competition)
}

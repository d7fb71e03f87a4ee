//! The owned configuration store

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use sm_model::{BetSettings, BonusFeature, ReelSet, SymbolLibrary, WinModel};

use crate::document::{ConfigDocument, StoreError};

/// Single owner of the mutable configuration
///
/// Editors never hold references into the store: reads return cloned
/// snapshots and writes replace whole sections. The revision counter lets a
/// view detect that its snapshot is stale and re-fetch.
#[derive(Debug)]
pub struct ConfigStore {
    doc: RwLock<ConfigDocument>,
    revision: AtomicU64,
}

impl ConfigStore {
    /// Create a store over an existing document
    pub fn new(doc: ConfigDocument) -> Self {
        Self {
            doc: RwLock::new(doc),
            revision: AtomicU64::new(0),
        }
    }

    /// Store seeded with the classic starter document
    pub fn classic() -> Self {
        Self::new(ConfigDocument::classic())
    }

    /// Monotonic revision, bumped on every update
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    fn bump(&self) {
        self.revision.fetch_add(1, Ordering::AcqRel);
    }

    /// Snapshot of the whole document
    pub fn snapshot(&self) -> ConfigDocument {
        self.doc.read().clone()
    }

    pub fn symbols(&self) -> SymbolLibrary {
        self.doc.read().symbols.clone()
    }

    pub fn reel_set(&self) -> ReelSet {
        self.doc.read().reel_set.clone()
    }

    pub fn win_model(&self) -> WinModel {
        self.doc.read().win_model.clone()
    }

    pub fn bet(&self) -> BetSettings {
        self.doc.read().bet
    }

    pub fn bonuses(&self) -> Vec<BonusFeature> {
        self.doc.read().bonuses.clone()
    }

    pub fn update_symbols(&self, symbols: SymbolLibrary) {
        self.doc.write().symbols = symbols;
        self.bump();
    }

    pub fn update_reel_set(&self, reel_set: ReelSet) {
        self.doc.write().reel_set = reel_set;
        self.bump();
    }

    pub fn update_win_model(&self, win_model: WinModel) {
        self.doc.write().win_model = win_model;
        self.bump();
    }

    pub fn update_bet(&self, bet: BetSettings) {
        self.doc.write().bet = bet;
        self.bump();
    }

    pub fn update_bonuses(&self, bonuses: Vec<BonusFeature>) {
        self.doc.write().bonuses = bonuses;
        self.bump();
    }

    /// Replace the whole document (e.g., after a load)
    pub fn replace(&self, doc: ConfigDocument) {
        *self.doc.write() = doc;
        self.bump();
    }

    /// Persist the current document
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        self.snapshot().save(path)
    }

    /// Open a store from a persisted document
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        Ok(Self::new(ConfigDocument::load(path)?))
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(ConfigDocument::default())
    }
}

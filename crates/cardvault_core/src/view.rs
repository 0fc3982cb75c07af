//! View modes, booster phases, and the revealed-slot set

use rustc_hash::FxHashSet;

/// Which scene is mounted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Scrollable grid of the whole collection
    #[default]
    Gallery,
    /// A single selected card, free rotation
    Inspect,
    /// Pack-opening session
    Booster,
}

/// Phase of a booster session
///
/// Phases only move forward:
/// ```text
/// PACK --[tear_open]--> OPENING --[finish_opening]--> REVEALING --[last reveal]--> SUMMARY
/// any --[close_booster]--> PACK
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoosterPhase {
    #[default]
    Pack,
    Opening,
    Revealing,
    Summary,
}

impl BoosterPhase {
    /// The only phase reachable from this one without a reset
    pub fn next(self) -> Option<BoosterPhase> {
        match self {
            BoosterPhase::Pack => Some(BoosterPhase::Opening),
            BoosterPhase::Opening => Some(BoosterPhase::Revealing),
            BoosterPhase::Revealing => Some(BoosterPhase::Summary),
            BoosterPhase::Summary => None,
        }
    }

    /// Whether cards accept reveal clicks
    pub fn accepts_reveals(self) -> bool {
        matches!(self, BoosterPhase::Revealing)
    }
}

/// Booster slot indices that have been flipped face-up
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealedSet {
    indices: FxHashSet<usize>,
}

impl RevealedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an index, returning `true` if it was not already present
    pub fn insert(&mut self, index: usize) -> bool {
        self.indices.insert(index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Indices in ascending order
    pub fn sorted(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self.indices.iter().copied().collect();
        out.sort_unstable();
        out
    }
}

//! Enumerable set of constructible brains, each tagged with owner and code.

use super::{Brain, HibernationBrain, MazeBrain, RacerBrain, TastingBrain};
use crate::error::{Result, SimError};

/// Builds a fresh brain instance; one call per critter.
pub type BrainFactory = fn() -> Box<dyn Brain>;

#[derive(Debug, Clone)]
pub struct BrainEntry {
    /// Initials of whoever wrote the brain.
    pub owner: String,
    /// Short label used in critter names.
    pub code: String,
    pub factory: BrainFactory,
}

impl BrainEntry {
    #[must_use]
    pub fn build(&self) -> Box<dyn Brain> {
        (self.factory)()
    }

    /// Name of the `n`th critter driven by this brain.
    #[must_use]
    pub fn critter_name(&self, n: usize) -> String {
        format!("{}-{}{}", self.owner, self.code, n)
    }
}

/// Registration order is spawn order.
#[derive(Debug, Clone, Default)]
pub struct BrainRegistry {
    entries: Vec<BrainEntry>,
}

impl BrainRegistry {
    pub const BUILTIN_OWNER: &'static str = "Ar";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The four stock brains.
    #[must_use]
    pub fn with_builtins() -> Self {
        let owner = Self::BUILTIN_OWNER;
        let builtins: [(&str, BrainFactory); 4] = [
            (HibernationBrain::CODE, || Box::new(HibernationBrain::default())),
            (TastingBrain::CODE, || Box::new(TastingBrain)),
            (RacerBrain::CODE, || Box::new(RacerBrain)),
            (MazeBrain::CODE, || Box::new(MazeBrain::default())),
        ];
        Self {
            entries: builtins
                .into_iter()
                .map(|(code, factory)| BrainEntry {
                    owner: owner.to_string(),
                    code: code.to_string(),
                    factory,
                })
                .collect(),
        }
    }

    pub fn register(&mut self, owner: &str, code: &str, factory: BrainFactory) -> Result<()> {
        if self.entries.iter().any(|e| e.code == code) {
            return Err(SimError::DuplicateBrain(code.to_string()));
        }
        tracing::debug!(owner, code, "registered brain");
        self.entries.push(BrainEntry {
            owner: owner.to_string(),
            code: code.to_string(),
            factory,
        });
        Ok(())
    }

    pub fn get(&self, code: &str) -> Result<&BrainEntry> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .ok_or_else(|| SimError::UnknownBrain(code.to_string()))
    }

    /// Keeps only the named codes. Fails on a code nobody registered.
    pub fn retain_codes(&mut self, codes: &[String]) -> Result<()> {
        if let Some(missing) = codes.iter().find(|c| self.get(c).is_err()) {
            return Err(SimError::UnknownBrain(missing.clone()));
        }
        self.entries.retain(|e| codes.contains(&e.code));
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &BrainEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

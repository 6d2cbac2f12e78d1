//! Competence model: per-case coverage, reachability, and liability sets.

use std::collections::{BTreeSet, HashMap};

use cbm_core::errors::{CbmError, CbmResult};
use cbm_core::{Case, CaseId, ISimilarityOracle, Label};
use rayon::prelude::*;
use tracing::{debug, warn};

static EMPTY: BTreeSet<CaseId> = BTreeSet::new();

/// Competence sets of one case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompetenceSets {
    /// Cases this case helps classify correctly.
    pub coverage: BTreeSet<CaseId>,
    /// Cases that classify this case correctly as its neighbors.
    pub reachability: BTreeSet<CaseId>,
    /// Cases this case causes to be misclassified.
    pub liability: BTreeSet<CaseId>,
}

/// Leave-one-out evaluation of one case.
struct Evaluation {
    id: CaseId,
    label: Label,
    correct: bool,
    neighbors: Vec<(CaseId, Label)>,
}

/// Competence sets for every case of a fixed population.
///
/// Built against an immutable snapshot and holding only identities; rebuild
/// it whenever the population changes.
#[derive(Debug, Clone)]
pub struct CompetenceModel {
    sets: HashMap<CaseId, CompetenceSets>,
    /// Population order.
    ids: Vec<CaseId>,
    k: usize,
    initialized: bool,
}

impl CompetenceModel {
    /// Build the model, falling back to empty sets when the population is
    /// too small for the oracle.
    pub fn build(oracle: &dyn ISimilarityOracle, population: &[Case], k: usize) -> Self {
        match Self::try_build(oracle, population, k) {
            Ok(model) => model,
            Err(e) => {
                warn!(error = %e, "competence sets left empty for this cycle");
                Self::empty(population, k)
            }
        }
    }

    /// Build the model, surfacing an initialization failure.
    pub fn try_build(
        oracle: &dyn ISimilarityOracle,
        population: &[Case],
        k: usize,
    ) -> CbmResult<Self> {
        if k == 0 || population.len() <= k {
            return Err(CbmError::Initialization {
                available: population.len(),
                required: k + 1,
            });
        }

        let refs: Vec<&Case> = population.iter().collect();

        // Every query runs against the same snapshot, so this is safe to fan out.
        let evaluations: Vec<Evaluation> = population
            .par_iter()
            .map(|case| {
                let neighbors = oracle.k_nearest(case, &refs, k);
                let predicted = oracle.classify(&neighbors);
                Evaluation {
                    id: case.id(),
                    label: case.label(),
                    correct: oracle.is_correct(predicted, case),
                    neighbors: neighbors.iter().map(|n| (n.id(), n.label())).collect(),
                }
            })
            .collect();

        let mut model = Self::empty(population, k);
        model.initialized = true;
        for eval in evaluations {
            if eval.correct {
                for &(neighbor, label) in &eval.neighbors {
                    if label == eval.label {
                        model.entry(neighbor).coverage.insert(eval.id);
                        model.entry(eval.id).reachability.insert(neighbor);
                    }
                }
            } else {
                for &(neighbor, label) in &eval.neighbors {
                    if label != eval.label {
                        model.entry(neighbor).liability.insert(eval.id);
                    }
                }
            }
        }

        debug!(
            population = population.len(),
            k,
            liable = model.sets.values().filter(|s| !s.liability.is_empty()).count(),
            "competence model built"
        );
        Ok(model)
    }

    /// A model with empty sets for every case of `population`.
    pub fn empty(population: &[Case], k: usize) -> Self {
        Self {
            sets: population
                .iter()
                .map(|c| (c.id(), CompetenceSets::default()))
                .collect(),
            ids: population.iter().map(Case::id).collect(),
            k,
            initialized: false,
        }
    }

    fn entry(&mut self, id: CaseId) -> &mut CompetenceSets {
        self.sets.entry(id).or_default()
    }

    /// False when the oracle could not evaluate the population.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Population identities in population order.
    pub fn ids(&self) -> &[CaseId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn sets(&self, id: CaseId) -> Option<&CompetenceSets> {
        self.sets.get(&id)
    }

    pub fn coverage(&self, id: CaseId) -> &BTreeSet<CaseId> {
        self.sets.get(&id).map_or(&EMPTY, |s| &s.coverage)
    }

    pub fn reachability(&self, id: CaseId) -> &BTreeSet<CaseId> {
        self.sets.get(&id).map_or(&EMPTY, |s| &s.reachability)
    }

    pub fn liability(&self, id: CaseId) -> &BTreeSet<CaseId> {
        self.sets.get(&id).map_or(&EMPTY, |s| &s.liability)
    }

    /// The case's own neighborhood: itself, its coverage, and its reachability.
    pub fn related_set(&self, id: CaseId) -> BTreeSet<CaseId> {
        let mut related: BTreeSet<CaseId> = self.coverage(id).clone();
        related.extend(self.reachability(id).iter().copied());
        related.insert(id);
        related
    }
}

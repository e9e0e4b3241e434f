//! Recommendation scoring: classifier probability blended with skill similarity

use crate::catalog::{Catalog, CatalogEntry, Education, Experience, Profile};
use crate::error::{RecommenderError, Result};
use crate::processing::forest::{ForestOptions, RandomForest};
use crate::processing::similarity::SkillSimilarity;
use crate::processing::vectorizer::{FeatureSpace, ProfileVector};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const CLASSIFIER_WEIGHT: f64 = 0.7;
pub const SKILL_WEIGHT: f64 = 0.3;
pub const TOP_K: usize = 3;
pub const DEFAULT_SEED: u64 = 42;

/// A catalog entry with its blended score for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub entry: CatalogEntry,
    pub score: f64,
    pub classifier_probability: f64,
    pub skill_similarity: f64,
    pub catalog_index: usize,
}

/// Fitted feature spaces and classifier for one catalog.
///
/// Immutable once built; a query never changes the vocabularies or the model,
/// so one scorer can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct Scorer {
    catalog: Catalog,
    profile_space: FeatureSpace,
    classifier: RandomForest,
    skills: SkillSimilarity,
    seed: u64,
}

/// Handle returned by [`initialize`]
pub type ScorerHandle = Scorer;

impl Scorer {
    pub fn initialize(catalog: Catalog, seed: u64) -> Result<Self> {
        Self::with_options(catalog, seed, &ForestOptions::default())
    }

    pub fn with_options(catalog: Catalog, seed: u64, options: &ForestOptions) -> Result<Self> {
        if catalog.is_empty() {
            return Err(RecommenderError::InvalidCatalog(
                "catalog has no entries to rank".to_string(),
            ));
        }

        let profiles: Vec<String> = catalog.iter().map(|e| e.combined_profile()).collect();
        let profile_space = FeatureSpace::fit(&profiles, false);
        let matrix = profile_space.transform_matrix(&profiles);

        // Every entry is its own class.
        let labels: Vec<usize> = (0..catalog.len()).collect();
        let classifier =
            RandomForest::fit(matrix.view(), &labels, catalog.len(), options, seed)?;

        let skills = SkillSimilarity::fit(&catalog);

        info!(
            "Scorer initialized: {} entries, {} profile terms, {} skill terms, {} trees (seed {})",
            catalog.len(),
            profile_space.len(),
            skills.space().len(),
            classifier.trees().len(),
            seed
        );

        Ok(Self {
            catalog,
            profile_space,
            classifier,
            skills,
            seed,
        })
    }

    /// Probability per catalog entry that `query` matches it
    pub fn classify(&self, query: &ProfileVector) -> Vec<f64> {
        self.classifier.predict_proba(query.to_dense().view())
    }

    pub fn profile_vector(&self, profile: &Profile) -> ProfileVector {
        self.profile_space.transform(&profile.combined_profile())
    }

    pub fn skill_similarity(&self, skills: &str) -> Vec<f64> {
        self.skills.similarity(skills)
    }

    /// Every catalog entry, best first; ties keep catalog order
    pub fn rank(&self, profile: &Profile) -> Vec<ScoredEntry> {
        let query = self.profile_vector(profile);
        let probabilities = self.classify(&query);
        let similarities = self.skill_similarity(&profile.skills);

        debug!(
            "Query matched {} profile terms; best similarity {:.3}",
            query.nnz(),
            similarities.iter().copied().fold(0.0, f64::max)
        );

        let mut scored: Vec<ScoredEntry> = self
            .catalog
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let probability = probabilities[index];
                let similarity = similarities[index];
                ScoredEntry {
                    entry: entry.clone(),
                    score: CLASSIFIER_WEIGHT * probability + SKILL_WEIGHT * similarity,
                    classifier_probability: probability,
                    skill_similarity: similarity,
                    catalog_index: index,
                }
            })
            .collect();

        order_by_score(&mut scored);
        scored
    }

    /// The top `min(3, catalog size)` entries for `profile`
    pub fn recommend(&self, profile: &Profile) -> Vec<ScoredEntry> {
        let mut ranked = self.rank(profile);
        ranked.truncate(TOP_K);
        ranked
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn profile_space(&self) -> &FeatureSpace {
        &self.profile_space
    }
}

/// Descending by score; the sort is stable so equal scores keep catalog order
fn order_by_score(scored: &mut [ScoredEntry]) {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
}

pub fn initialize(catalog: Catalog, seed: u64) -> Result<ScorerHandle> {
    Scorer::initialize(catalog, seed)
}

pub fn recommend(
    handle: &ScorerHandle,
    skills: &str,
    education: Education,
    interests: &str,
    experience: Experience,
) -> Vec<ScoredEntry> {
    handle.recommend(&Profile::new(skills, education, interests, experience))
}

static SHARED: OnceLock<Scorer> = OnceLock::new();

/// Process-wide scorer over the reference catalog with the default seed
pub fn shared() -> &'static Scorer {
    SHARED.get_or_init(|| {
        Scorer::initialize(Catalog::reference(), DEFAULT_SEED)
            .expect("reference catalog is non-empty")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_entry_catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEntry::new(
                "Alpha",
                "rust",
                Education::Master,
                "systems",
                Experience::Senior,
                "",
            ),
            CatalogEntry::new(
                "Beta",
                "python",
                Education::Master,
                "data",
                Experience::Senior,
                "",
            ),
        ])
    }

    #[test]
    fn test_empty_catalog_is_invalid() {
        let err = Scorer::initialize(Catalog::new(Vec::new()), DEFAULT_SEED).unwrap_err();
        assert!(matches!(err, RecommenderError::InvalidCatalog(_)));
    }

    #[test]
    fn test_small_catalog_returns_all_entries() {
        let scorer = Scorer::initialize(two_entry_catalog(), DEFAULT_SEED).unwrap();
        let profile = Profile::new("rust", Education::Master, "", Experience::Senior);
        let results = scorer.recommend(&profile);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].entry.label, "Alpha");
    }

    #[test]
    fn test_score_is_weighted_blend() {
        let scorer = shared();
        let profile = Profile::new(
            "java, algorithms",
            Education::Bachelor,
            "coding",
            Experience::Junior,
        );

        for result in scorer.rank(&profile) {
            assert_relative_eq!(
                result.score,
                0.7 * result.classifier_probability + 0.3 * result.skill_similarity,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_classifier_distribution_sums_to_one() {
        let scorer = shared();
        let query = scorer.profile_vector(&Profile::default());
        let probabilities = scorer.classify(&query);

        assert_eq!(probabilities.len(), 10);
        assert_relative_eq!(probabilities.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let scored_entry = |label: &str, index: usize, score: f64| ScoredEntry {
            entry: CatalogEntry::new(label, "", Education::Phd, "", Experience::Mid, ""),
            score,
            classifier_probability: 0.0,
            skill_similarity: 0.0,
            catalog_index: index,
        };
        let mut scored = vec![
            scored_entry("First", 0, 0.2),
            scored_entry("Second", 1, 0.5),
            scored_entry("Third", 2, 0.2),
            scored_entry("Fourth", 3, 0.5),
        ];

        order_by_score(&mut scored);

        let labels: Vec<&str> = scored.iter().map(|s| s.entry.label.as_str()).collect();
        assert_eq!(labels, vec!["Second", "Fourth", "First", "Third"]);
    }

    #[test]
    fn test_query_does_not_change_vocabulary() {
        let scorer = Scorer::initialize(Catalog::reference(), DEFAULT_SEED).unwrap();
        assert!(!scorer.profile_space().lowercase());
        let before = scorer.profile_space().len();
        let profile = Profile::new(
            "blockchain kubernetes",
            Education::Phd,
            "space",
            Experience::Senior,
        );
        scorer.recommend(&profile);
        assert_eq!(scorer.profile_space().len(), before);
    }
}

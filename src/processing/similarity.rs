//! Cosine similarity between a query's skills and every catalog entry's skills

use crate::catalog::Catalog;
use crate::processing::vectorizer::{FeatureSpace, ProfileVector};

/// Cosine of the angle between two count vectors; 0 when either is zero
pub fn cosine_similarity(a: &ProfileVector, b: &ProfileVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Skills-only feature space and the catalog's vectors within it
#[derive(Debug, Clone)]
pub struct SkillSimilarity {
    space: FeatureSpace,
    catalog_vectors: Vec<ProfileVector>,
}

impl SkillSimilarity {
    pub fn fit(catalog: &Catalog) -> Self {
        let skills: Vec<&str> = catalog.iter().map(|e| e.skills.as_str()).collect();
        let space = FeatureSpace::fit(&skills, true);
        let catalog_vectors = skills.iter().map(|s| space.transform(s)).collect();

        Self {
            space,
            catalog_vectors,
        }
    }

    /// One score in [0, 1] per catalog entry, in catalog order
    pub fn similarity(&self, query_skills: &str) -> Vec<f64> {
        let query = self.space.transform(&query_skills.to_lowercase());
        self.catalog_vectors
            .iter()
            .map(|entry| cosine_similarity(&query, entry))
            .collect()
    }

    pub fn space(&self) -> &FeatureSpace {
        &self.space
    }

    pub fn catalog_vectors(&self) -> &[ProfileVector] {
        &self.catalog_vectors
    }
}

//! Report structures for a recommendation run

use crate::catalog::Profile;
use crate::processing::scorer::{Scorer, ScoredEntry, CLASSIFIER_WEIGHT, SKILL_WEIGHT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to render one recommendation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub profile: Profile,
    pub recommendations: Vec<ScoredEntry>,
    pub weights: ScoreWeights,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub classifier: f64,
    pub skills: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub seed: u64,
    pub catalog_size: usize,
    pub processing_time_ms: u64,
}

impl RecommendationReport {
    pub fn new(
        profile: Profile,
        recommendations: Vec<ScoredEntry>,
        scorer: &Scorer,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            profile,
            recommendations,
            weights: ScoreWeights {
                classifier: CLASSIFIER_WEIGHT,
                skills: SKILL_WEIGHT,
            },
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                seed: scorer.seed(),
                catalog_size: scorer.catalog().len(),
                processing_time_ms,
            },
        }
    }
}

//! Integration tests for the career recommender

use approx::assert_relative_eq;
use career_recommender::processing::scorer::{shared, DEFAULT_SEED};
use career_recommender::{
    initialize, recommend, Catalog, Education, Experience, Profile, RecommenderError, Scorer,
};
use std::path::Path;

fn reference_scorer() -> Scorer {
    initialize(Catalog::reference(), DEFAULT_SEED).unwrap()
}

fn assert_ranked(results: &[career_recommender::ScoredEntry]) {
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].catalog_index < pair[1].catalog_index);
        }
    }
}

#[test]
fn test_data_scientist_scenario() {
    let scorer = reference_scorer();
    let results = recommend(
        &scorer,
        "python, machine learning, statistics",
        Education::Bachelor,
        "data, analytics",
        Experience::Mid,
    );

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].entry.label, "Data Scientist");
    assert!(results[0].skill_similarity > 0.0);
    assert_ranked(&results);
}

#[test]
fn test_recommend_is_deterministic() {
    let profile = Profile::new(
        "excel, finance",
        Education::Master,
        "economics",
        Experience::Junior,
    );

    let first = reference_scorer().recommend(&profile);
    let second = reference_scorer().recommend(&profile);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.entry, b.entry);
        assert_relative_eq!(a.score, b.score, epsilon = 1e-9);
    }
}

#[test]
fn test_scores_within_bounds() {
    let scorer = shared();
    let profiles = [
        Profile::new("photoshop, creativity", Education::Associate, "art", Experience::Entry),
        Profile::new("leadership", Education::Phd, "planning", Experience::Senior),
        Profile::new("PYTHON Cryptography", Education::Highschool, "", Experience::Mid),
    ];

    for profile in &profiles {
        for result in scorer.rank(profile) {
            assert!((0.0..=1.0).contains(&result.score), "score {} out of range", result.score);
        }
    }
}

#[test]
fn test_empty_input_still_ranks() {
    let scorer = shared();
    let results = recommend(scorer, "", Education::Bachelor, "", Experience::Mid);

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.skill_similarity == 0.0));
    for result in &results {
        assert_relative_eq!(result.score, 0.7 * result.classifier_probability, epsilon = 1e-12);
    }
    assert_ranked(&results);
}

#[test]
fn test_mechanical_engineer_has_top_skill_similarity() {
    let scorer = shared();
    let similarities = scorer.skill_similarity("cad, thermodynamics");
    let engineer = scorer
        .catalog()
        .iter()
        .position(|e| e.label == "Mechanical Engineer")
        .unwrap();

    let max = similarities.iter().copied().fold(f64::MIN, f64::max);
    assert_eq!(similarities[engineer], max);
    assert!(max > 0.0);
}

#[test]
fn test_empty_catalog_rejected() {
    let result = initialize(Catalog::new(Vec::new()), DEFAULT_SEED);
    assert!(matches!(result, Err(RecommenderError::InvalidCatalog(_))));
}

#[test]
fn test_result_size_for_small_catalog() {
    let catalog = Catalog::from_path(Path::new("tests/fixtures/small_catalog.toml")).unwrap();
    assert_eq!(catalog.len(), 2);

    let scorer = initialize(catalog, 11).unwrap();
    let results = recommend(&scorer, "bread", Education::Highschool, "food", Experience::Junior);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].entry.label, "Baker");
    assert_ranked(&results);
}

#[test]
fn test_single_entry_catalog() {
    let catalog = Catalog::new(vec![Catalog::reference().get(8).unwrap().clone()]);
    let scorer = initialize(catalog, 0).unwrap();
    let results = scorer.recommend(&Profile::default());

    assert_eq!(results.len(), 1);
    assert_relative_eq!(results[0].classifier_probability, 1.0, epsilon = 1e-12);
}

#[test]
fn test_different_seeds_keep_distribution_valid() {
    let profile = Profile::new(
        "java, algorithms",
        Education::Bachelor,
        "coding",
        Experience::Junior,
    );
    for seed in [1, 2, 3] {
        let scorer = initialize(Catalog::reference(), seed).unwrap();
        let query = scorer.profile_vector(&profile);
        let total: f64 = scorer.classify(&query).iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-9);
    }
}

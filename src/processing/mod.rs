//! Featurization, classification, similarity and ranking

pub mod forest;
pub mod scorer;
pub mod similarity;
pub mod vectorizer;

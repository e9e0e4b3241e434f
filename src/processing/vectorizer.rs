//! Bag-of-words feature spaces and sparse term-count vectors

use ndarray::{Array1, Array2};
use regex::Regex;
use std::collections::{BTreeSet, HashMap};

/// Two or more word characters between word boundaries
const TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Splits text into word tokens, optionally case-folded
#[derive(Debug, Clone)]
pub struct Tokenizer {
    token_regex: Regex,
    lowercase: bool,
}

impl Tokenizer {
    pub fn new(lowercase: bool) -> Self {
        let token_regex = Regex::new(TOKEN_PATTERN).expect("Invalid token regex");
        Self {
            token_regex,
            lowercase,
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        self.token_regex
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    pub fn lowercase(&self) -> bool {
        self.lowercase
    }
}

/// Vocabulary term to column index mapping, fixed once fitted.
///
/// Columns follow sorted term order. Terms not seen during `fit` are
/// dropped by `transform`.
#[derive(Debug, Clone)]
pub struct FeatureSpace {
    tokenizer: Tokenizer,
    vocabulary: HashMap<String, usize>,
    terms: Vec<String>,
}

impl FeatureSpace {
    /// Build the vocabulary from every distinct token in `documents`
    pub fn fit<S: AsRef<str>>(documents: &[S], lowercase: bool) -> Self {
        let tokenizer = Tokenizer::new(lowercase);

        let distinct: BTreeSet<String> = documents
            .iter()
            .flat_map(|doc| tokenizer.tokenize(doc.as_ref()))
            .collect();

        let terms: Vec<String> = distinct.into_iter().collect();
        let vocabulary = terms
            .iter()
            .enumerate()
            .map(|(index, term)| (term.clone(), index))
            .collect();

        Self {
            tokenizer,
            vocabulary,
            terms,
        }
    }

    pub fn transform(&self, text: &str) -> ProfileVector {
        let mut counts: HashMap<usize, u32> = HashMap::new();
        for token in self.tokenizer.tokenize(text) {
            if let Some(&column) = self.vocabulary.get(&token) {
                *counts.entry(column).or_insert(0) += 1;
            }
        }

        let mut entries: Vec<(usize, u32)> = counts.into_iter().collect();
        entries.sort_unstable_by_key(|&(column, _)| column);

        ProfileVector {
            dim: self.terms.len(),
            entries,
        }
    }

    /// Dense document-term matrix, one row per document
    pub fn transform_matrix<S: AsRef<str>>(&self, documents: &[S]) -> Array2<f64> {
        let mut matrix = Array2::<f64>::zeros((documents.len(), self.terms.len()));
        for (row, doc) in documents.iter().enumerate() {
            for &(column, count) in self.transform(doc.as_ref()).entries() {
                matrix[[row, column]] = f64::from(count);
            }
        }
        matrix
    }

    pub fn column(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn lowercase(&self) -> bool {
        self.tokenizer.lowercase()
    }
}

/// Sparse non-negative term counts over one `FeatureSpace`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileVector {
    dim: usize,
    entries: Vec<(usize, u32)>,
}

impl ProfileVector {
    /// Non-zero `(column, count)` pairs in ascending column order
    pub fn entries(&self) -> &[(usize, u32)] {
        &self.entries
    }

    pub fn get(&self, column: usize) -> u32 {
        self.entries
            .binary_search_by_key(&column, |&(c, _)| c)
            .map(|i| self.entries[i].1)
            .unwrap_or(0)
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, count)| f64::from(count) * f64::from(count))
            .sum::<f64>()
            .sqrt()
    }

    pub fn dot(&self, other: &ProfileVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_col, a_count) = self.entries[i];
            let (b_col, b_count) = other.entries[j];
            if a_col == b_col {
                sum += f64::from(a_count) * f64::from(b_count);
                i += 1;
                j += 1;
            } else if a_col < b_col {
                i += 1;
            } else {
                j += 1;
            }
        }
        sum
    }

    pub fn to_dense(&self) -> Array1<f64> {
        let mut dense = Array1::<f64>::zeros(self.dim);
        for &(column, count) in &self.entries {
            dense[column] = f64::from(count);
        }
        dense
    }
}

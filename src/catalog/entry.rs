//! Typed catalog records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest completed education level
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Education {
    #[default]
    Highschool,
    Associate,
    Bachelor,
    Master,
    Phd,
}

/// Professional experience level
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    #[default]
    Entry,
    Junior,
    Mid,
    Senior,
}

impl Education {
    /// The word used when the level is tokenized into a profile
    pub fn as_str(&self) -> &'static str {
        match self {
            Education::Highschool => "highschool",
            Education::Associate => "associate",
            Education::Bachelor => "bachelor",
            Education::Master => "master",
            Education::Phd => "phd",
        }
    }

    pub fn capitalized(&self) -> String {
        capitalize(self.as_str())
    }
}

impl Experience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::Entry => "entry",
            Experience::Junior => "junior",
            Experience::Mid => "mid",
            Experience::Senior => "senior",
        }
    }

    pub fn capitalized(&self) -> String {
        capitalize(self.as_str())
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate career in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(alias = "job_title")]
    pub label: String,
    pub skills: String,
    pub education: Education,
    pub interests: String,
    pub experience: Experience,
    #[serde(default)]
    pub description: String,
}

impl CatalogEntry {
    pub fn new(
        label: &str,
        skills: &str,
        education: Education,
        interests: &str,
        experience: Experience,
        description: &str,
    ) -> Self {
        Self {
            label: label.to_string(),
            skills: skills.to_string(),
            education,
            interests: interests.to_string(),
            experience,
            description: description.to_string(),
        }
    }

    /// Skills, education, interests and experience joined by single spaces
    pub fn combined_profile(&self) -> String {
        combine_profile(&self.skills, self.education, &self.interests, self.experience)
    }
}

/// A user's profile as collected by a presentation layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub skills: String,
    pub education: Education,
    pub interests: String,
    pub experience: Experience,
}

impl Profile {
    pub fn new(
        skills: &str,
        education: Education,
        interests: &str,
        experience: Experience,
    ) -> Self {
        Self {
            skills: skills.to_string(),
            education,
            interests: interests.to_string(),
            experience,
        }
    }

    pub fn combined_profile(&self) -> String {
        combine_profile(&self.skills, self.education, &self.interests, self.experience)
    }
}

pub fn combine_profile(
    skills: &str,
    education: Education,
    interests: &str,
    experience: Experience,
) -> String {
    format!("{} {} {} {}", skills, education, interests, experience)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

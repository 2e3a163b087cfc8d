//! Response shapes returned by the portfolio API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Biographical summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub full_name: String,
    pub title: String,
    pub summary: String,
    pub email: String,
    pub location: String,
    pub links: Vec<String>,
    pub skills: Vec<String>,
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub highlights: Vec<String>,
}

/// A position held, newest first as served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: u32,
    pub company: String,
    pub role: String,
    pub location: String,
    pub start_date: NaiveDate,
    /// `None` while the position is ongoing.
    pub end_date: Option<NaiveDate>,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

impl Experience {
    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }
}

/// A skill with its 1-5 proficiency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub proficiency: Proficiency,
}

/// Skill level on a 1-5 scale. Out-of-range values fail deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Proficiency(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Proficiency must be between {min} and {max}, got {0}", min = Proficiency::MIN, max = Proficiency::MAX)]
pub struct InvalidProficiency(pub u8);

impl Proficiency {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> std::result::Result<Self, InvalidProficiency> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(InvalidProficiency(level))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Proficiency {
    type Error = InvalidProficiency;

    fn try_from(level: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Proficiency> for u8 {
    fn from(p: Proficiency) -> Self {
        p.0
    }
}

/// Liveness payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

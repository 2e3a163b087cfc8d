use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

/// Biographical summary shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[schema(example = "Tabitha Example")]
    pub full_name: String,
    #[schema(example = "Software Engineer")]
    pub title: String,
    pub summary: String,
    #[schema(example = "tabitha@example.com")]
    pub email: String,
    #[schema(example = "Remote / Anywhere")]
    pub location: String,
    pub links: Vec<String>,
    pub skills: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "Portfolio Website")]
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Serialized as `null` when absent
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub highlights: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Experience
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "Tech Corp")]
    pub company: String,
    #[schema(example = "Senior Developer")]
    pub role: String,
    pub location: String,
    #[schema(example = "2023-01-01")]
    pub start_date: NaiveDate,
    /// `None` while the position is ongoing
    #[schema(example = "2024-06-30")]
    pub end_date: Option<NaiveDate>,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

impl Experience {
    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }
}

//
// ──────────────────────────────────────────────────────────
// Skill
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[schema(example = "TypeScript")]
    pub name: String,
    #[schema(example = "Language")]
    pub category: String,
    pub proficiency: Proficiency,
}

/// Self-assessed skill level on a 1-5 scale, serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "u8", into = "u8")]
pub struct Proficiency(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Proficiency must be between {min} and {max}, got {0}", min = Proficiency::MIN, max = Proficiency::MAX)]
pub struct InvalidProficiency(pub u8);

impl Proficiency {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self, InvalidProficiency> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(InvalidProficiency(level))
        }
    }

    pub const fn lowest() -> Self {
        Self(Self::MIN)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Proficiency {
    type Error = InvalidProficiency;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Proficiency> for u8 {
    fn from(p: Proficiency) -> Self {
        p.0
    }
}

//
// ──────────────────────────────────────────────────────────
// Seed aggregate
// ──────────────────────────────────────────────────────────
//

/// Complete dataset served by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioSeed {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioInvariantError {
    #[error("Profile full name cannot be empty")]
    EmptyFullName,

    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(u32),

    #[error("Project {0} has an empty name")]
    EmptyProjectName(u32),

    #[error("Duplicate experience id: {0}")]
    DuplicateExperienceId(u32),

    #[error("Experience {0} has an empty company or role")]
    EmptyExperienceField(u32),

    #[error("Experience {id} ends ({end}) before it starts ({start})")]
    EndBeforeStart {
        id: u32,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Skill name cannot be empty")]
    EmptySkillName,
}

impl PortfolioSeed {
    /// Checks every data invariant, reporting the first violation found.
    pub fn validate(&self) -> Result<(), PortfolioInvariantError> {
        if self.profile.full_name.trim().is_empty() {
            return Err(PortfolioInvariantError::EmptyFullName);
        }

        let mut project_ids = HashSet::new();
        for project in &self.projects {
            if !project_ids.insert(project.id) {
                return Err(PortfolioInvariantError::DuplicateProjectId(project.id));
            }
            if project.name.trim().is_empty() {
                return Err(PortfolioInvariantError::EmptyProjectName(project.id));
            }
        }

        let mut experience_ids = HashSet::new();
        for entry in &self.experience {
            if !experience_ids.insert(entry.id) {
                return Err(PortfolioInvariantError::DuplicateExperienceId(entry.id));
            }
            if entry.company.trim().is_empty() || entry.role.trim().is_empty() {
                return Err(PortfolioInvariantError::EmptyExperienceField(entry.id));
            }
            if let Some(end) = entry.end_date {
                if end < entry.start_date {
                    return Err(PortfolioInvariantError::EndBeforeStart {
                        id: entry.id,
                        start: entry.start_date,
                        end,
                    });
                }
            }
        }

        if self.skills.iter().any(|s| s.name.trim().is_empty()) {
            return Err(PortfolioInvariantError::EmptySkillName);
        }

        Ok(())
    }
}

use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::{
    Experience, Profile, Project, Skill,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetExperienceUseCase, GetProfileUseCase, GetProjectsUseCase, GetSkillsUseCase,
};
use crate::tests::support::portfolio_test_fixtures::{
    sample_experience, sample_profile, sample_project, sample_skill,
};

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubGetProfileUseCase {
    profile: Profile,
}

impl StubGetProfileUseCase {
    pub fn returning(profile: Profile) -> Self {
        Self { profile }
    }
}

impl Default for StubGetProfileUseCase {
    fn default() -> Self {
        Self::returning(sample_profile())
    }
}

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self) -> Profile {
        self.profile.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubGetProjectsUseCase {
    projects: Vec<Project>,
}

impl StubGetProjectsUseCase {
    pub fn returning(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}

impl Default for StubGetProjectsUseCase {
    fn default() -> Self {
        Self::returning(vec![sample_project(1)])
    }
}

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Vec<Project> {
        self.projects.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Experience
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubGetExperienceUseCase {
    experience: Vec<Experience>,
}

impl StubGetExperienceUseCase {
    pub fn returning(experience: Vec<Experience>) -> Self {
        Self { experience }
    }
}

impl Default for StubGetExperienceUseCase {
    fn default() -> Self {
        Self::returning(vec![sample_experience(1)])
    }
}

#[async_trait]
impl GetExperienceUseCase for StubGetExperienceUseCase {
    async fn execute(&self) -> Vec<Experience> {
        self.experience.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Skills
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubGetSkillsUseCase {
    skills: Vec<Skill>,
}

impl StubGetSkillsUseCase {
    pub fn returning(skills: Vec<Skill>) -> Self {
        Self { skills }
    }
}

impl Default for StubGetSkillsUseCase {
    fn default() -> Self {
        Self::returning(vec![sample_skill("Rust", "Language", 4)])
    }
}

#[async_trait]
impl GetSkillsUseCase for StubGetSkillsUseCase {
    async fn execute(&self) -> Vec<Skill> {
        self.skills.clone()
    }
}

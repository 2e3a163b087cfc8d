use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::{
    Experience, Profile, Project, Skill,
};
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetExperienceUseCase, GetProfileUseCase, GetProjectsUseCase, GetSkillsUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioQuery;

// ============================================================================
// Service Implementation
// ============================================================================

/// Serves every read use case from a single `PortfolioQuery`.
#[derive(Debug, Clone)]
pub struct PortfolioReadService<Q>
where
    Q: PortfolioQuery,
{
    query: Q,
}

impl<Q> PortfolioReadService<Q>
where
    Q: PortfolioQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProfileUseCase for PortfolioReadService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self) -> Profile {
        self.query.profile().clone()
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for PortfolioReadService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self) -> Vec<Project> {
        self.query.projects().to_vec()
    }
}

#[async_trait]
impl<Q> GetExperienceUseCase for PortfolioReadService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self) -> Vec<Experience> {
        self.query.experience().to_vec()
    }
}

#[async_trait]
impl<Q> GetSkillsUseCase for PortfolioReadService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self) -> Vec<Skill> {
        self.query.skills().to_vec()
    }
}

use actix_web::web;
use std::sync::Arc;

use crate::modules::portfolio::adapter::outgoing::SeededPortfolio;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetExperienceUseCase, GetProfileUseCase, GetProjectsUseCase, GetSkillsUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    portfolio: PortfolioUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            portfolio: PortfolioUseCases {
                get_profile: Arc::new(StubGetProfileUseCase::default()),
                get_projects: Arc::new(StubGetProjectsUseCase::default()),
                get_experience: Arc::new(StubGetExperienceUseCase::default()),
                get_skills: Arc::new(StubGetSkillsUseCase::default()),
            },
        }
    }
}

impl TestAppStateBuilder {
    /// Starts from the real compiled-in dataset instead of stubs.
    pub fn seeded() -> Self {
        Self {
            portfolio: PortfolioUseCases::from_query(SeededPortfolio::shared()),
        }
    }

    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + Send + Sync + 'static) -> Self {
        self.portfolio.get_profile = Arc::new(uc);
        self
    }

    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.get_projects = Arc::new(uc);
        self
    }

    pub fn with_get_experience(
        mut self,
        uc: impl GetExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio.get_experience = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + Send + Sync + 'static) -> Self {
        self.portfolio.get_skills = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: self.portfolio,
        })
    }
}

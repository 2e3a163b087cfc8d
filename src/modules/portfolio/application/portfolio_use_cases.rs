use std::sync::Arc;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetExperienceUseCase, GetProfileUseCase, GetProjectsUseCase, GetSkillsUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioQuery;
use crate::modules::portfolio::application::services::PortfolioReadService;

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub get_projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_experience: Arc<dyn GetExperienceUseCase + Send + Sync>,
    pub get_skills: Arc<dyn GetSkillsUseCase + Send + Sync>,
}

impl PortfolioUseCases {
    /// Wires all four read use cases to one shared query.
    pub fn from_query<Q>(query: Q) -> Self
    where
        Q: PortfolioQuery + 'static,
    {
        let service = Arc::new(PortfolioReadService::new(query));

        Self {
            get_profile: service.clone(),
            get_projects: service.clone(),
            get_experience: service.clone(),
            get_skills: service,
        }
    }
}

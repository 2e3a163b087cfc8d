use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::Project;

/// Returns the projects, in display order.
#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Project>;
}

use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::Experience;

/// Returns the work experience timeline in seed order.
#[async_trait]
pub trait GetExperienceUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Experience>;
}

use async_trait::async_trait;

use crate::modules::portfolio::application::domain::entities::Profile;

/// Returns the profile metadata.
#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Profile;
}

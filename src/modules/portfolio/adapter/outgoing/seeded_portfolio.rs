use std::sync::OnceLock;

use tracing::debug;

use super::seed_data::portfolio_seed;
use crate::modules::portfolio::application::domain::entities::{
    Experience, PortfolioSeed, Profile, Project, Skill,
};
use crate::modules::portfolio::application::ports::outgoing::PortfolioQuery;

/// Process-wide seed. Written exactly once, on first access.
static PORTFOLIO_SEED: OnceLock<PortfolioSeed> = OnceLock::new();

/// In-memory `PortfolioQuery` backed by the compiled-in seed.
#[derive(Debug, Clone, Copy)]
pub struct SeededPortfolio {
    seed: &'static PortfolioSeed,
}

impl SeededPortfolio {
    /// Returns a handle to the shared seed, building it on first use.
    ///
    /// Concurrent first callers block until the single initializer finishes
    /// and all observe the same instance.
    pub fn shared() -> Self {
        let seed = PORTFOLIO_SEED.get_or_init(|| {
            debug!("Seeding portfolio dataset");
            portfolio_seed()
        });

        Self { seed }
    }

    pub fn seed(&self) -> &'static PortfolioSeed {
        self.seed
    }
}

impl PortfolioQuery for SeededPortfolio {
    fn profile(&self) -> &Profile {
        &self.seed.profile
    }

    fn projects(&self) -> &[Project] {
        &self.seed.projects
    }

    fn experience(&self) -> &[Experience] {
        &self.seed.experience
    }

    fn skills(&self) -> &[Skill] {
        &self.seed.skills
    }
}

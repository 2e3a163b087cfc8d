use crate::modules::portfolio::application::domain::entities::{
    Experience, Profile, Project, Skill,
};

/// Read access to the portfolio dataset.
///
/// Implementations hold static reference data, so every accessor is
/// infallible and returns the same content on every call.
pub trait PortfolioQuery: Send + Sync {
    fn profile(&self) -> &Profile;

    fn projects(&self) -> &[Project];

    fn experience(&self) -> &[Experience];

    fn skills(&self) -> &[Skill];
}

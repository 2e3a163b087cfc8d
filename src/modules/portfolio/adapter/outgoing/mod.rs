mod seed_data;
mod seeded_portfolio;

pub use seed_data::portfolio_seed;
pub use seeded_portfolio::SeededPortfolio;

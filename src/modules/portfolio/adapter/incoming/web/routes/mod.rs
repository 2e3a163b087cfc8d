mod get_experience;
mod get_profile;
mod get_projects;
mod get_skills;

pub use get_experience::{__path_get_experience_handler, get_experience_handler};
pub use get_profile::{__path_get_profile_handler, get_profile_handler};
pub use get_projects::{__path_get_projects_handler, get_projects_handler};
pub use get_skills::{__path_get_skills_handler, get_skills_handler};

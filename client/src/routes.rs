//! Frontend route table and the data each view loads.

use crate::client::Client;
use crate::error::Result;
use crate::types::{Experience, Profile, Project, Skill};

/// A page of the portfolio site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewRoute {
    Home,
    Projects,
    Experience,
    Contact,
}

impl ViewRoute {
    pub const ALL: [ViewRoute; 4] = [
        ViewRoute::Home,
        ViewRoute::Projects,
        ViewRoute::Experience,
        ViewRoute::Contact,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            ViewRoute::Home => "/",
            ViewRoute::Projects => "/projects",
            ViewRoute::Experience => "/experience",
            ViewRoute::Contact => "/contact",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewRoute::Home => "home",
            ViewRoute::Projects => "projects",
            ViewRoute::Experience => "experience",
            ViewRoute::Contact => "contact",
        }
    }

    /// Matches a location path. Query string, fragment and trailing slash are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// What a view renders once its requests complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewData {
    Home { profile: Profile, skills: Vec<Skill> },
    Projects(Vec<Project>),
    Experience(Vec<Experience>),
    Contact(Profile),
}

impl Client {
    /// Fetch everything `route` needs.
    ///
    /// # Errors
    ///
    /// Returns the first failing request's error.
    pub async fn load_view(&self, route: ViewRoute) -> Result<ViewData> {
        match route {
            ViewRoute::Home => Ok(ViewData::Home {
                profile: self.get_profile().await?,
                skills: self.get_skills().await?,
            }),
            ViewRoute::Projects => Ok(ViewData::Projects(self.get_projects().await?)),
            ViewRoute::Experience => Ok(ViewData::Experience(self.get_experience().await?)),
            ViewRoute::Contact => Ok(ViewData::Contact(self.get_profile().await?)),
        }
    }
}

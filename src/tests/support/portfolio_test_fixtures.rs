use chrono::NaiveDate;

use crate::modules::portfolio::application::domain::entities::{
    Experience, Proficiency, Profile, Project, Skill,
};

pub fn sample_profile() -> Profile {
    Profile {
        full_name: "Test Person".to_string(),
        title: "Engineer".to_string(),
        summary: "Builds things".to_string(),
        email: "test@example.com".to_string(),
        location: "Remote".to_string(),
        links: vec!["https://github.com/test".to_string()],
        skills: vec!["Rust".to_string(), "SQL".to_string()],
    }
}

pub fn sample_project(id: u32) -> Project {
    Project {
        id,
        name: format!("Project {id}"),
        description: "A test project".to_string(),
        technologies: vec!["Rust".to_string()],
        repo_url: None,
        demo_url: None,
        highlights: vec!["Fast".to_string()],
    }
}

pub fn sample_experience(id: u32) -> Experience {
    Experience {
        id,
        company: "Acme".to_string(),
        role: "Engineer".to_string(),
        location: "Remote".to_string(),
        start_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        end_date: None,
        achievements: vec!["Shipped".to_string()],
        technologies: vec!["Rust".to_string()],
    }
}

pub fn sample_skill(name: &str, category: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        category: category.to_string(),
        proficiency: Proficiency::new(level).unwrap(),
    }
}

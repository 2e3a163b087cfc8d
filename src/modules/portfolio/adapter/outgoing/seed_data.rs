use chrono::NaiveDate;

use crate::modules::portfolio::application::domain::entities::{
    Experience, PortfolioSeed, Proficiency, Profile, Project, Skill,
};

/// Builds the dataset compiled into the binary.
pub fn portfolio_seed() -> PortfolioSeed {
    PortfolioSeed {
        profile: seed_profile(),
        projects: seed_projects(),
        experience: seed_experience(),
        skills: seed_skills(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// Seed dates are literals; an invalid one is a programming error caught by tests.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn skill(name: &str, category: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        category: category.to_string(),
        proficiency: Proficiency::new(level).unwrap_or(Proficiency::lowest()),
    }
}

fn seed_profile() -> Profile {
    Profile {
        full_name: "Tabitha Example".to_string(),
        title: "Software Engineer".to_string(),
        summary: "Passionate about building performant web applications and crafting delightful user experiences.".to_string(),
        email: "tabitha@example.com".to_string(),
        location: "Remote / Anywhere".to_string(),
        links: strings(&[
            "https://github.com/tabitha",
            "https://www.linkedin.com/in/tabitha",
        ]),
        skills: strings(&["C#", "ASP.NET Core", "Vue", "TypeScript", "Azure"]),
    }
}

fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "Portfolio Website".to_string(),
            description: "Personal website showcasing projects, experience, and blog posts."
                .to_string(),
            technologies: strings(&["ASP.NET Core", "Vue 3", "TypeScript", "Vite"]),
            repo_url: None,
            demo_url: None,
            highlights: strings(&["Responsive design", "Accessible UI", "SEO friendly"]),
        },
        Project {
            id: 2,
            name: "Task Tracker API".to_string(),
            description: "A simple, fast REST API for managing tasks with tagging and due dates."
                .to_string(),
            technologies: strings(&["ASP.NET Core", "EF Core", "SQLite"]),
            repo_url: Some("https://github.com/tabitha/task-tracker".to_string()),
            demo_url: None,
            highlights: strings(&["CQRS pattern", "Comprehensive tests"]),
        },
    ]
}

fn seed_experience() -> Vec<Experience> {
    vec![
        Experience {
            id: 1,
            company: "Tech Corp".to_string(),
            role: "Senior Developer".to_string(),
            location: "Remote".to_string(),
            start_date: date(2023, 1, 1),
            end_date: None,
            achievements: strings(&["Led migration to .NET 8", "Improved API latency by 35%"]),
            technologies: strings(&["ASP.NET Core", "Azure", "Redis"]),
        },
        Experience {
            id: 2,
            company: "Web Studio".to_string(),
            role: "Full Stack Engineer".to_string(),
            location: "Remote".to_string(),
            start_date: date(2021, 6, 1),
            end_date: Some(date(2022, 12, 31)),
            achievements: strings(&[
                "Delivered 15+ client sites",
                "Introduced automated deployments",
            ]),
            technologies: strings(&["Vue", "Node.js", "PostgreSQL"]),
        },
    ]
}

fn seed_skills() -> Vec<Skill> {
    vec![
        skill("C#", "Language", 5),
        skill("ASP.NET Core", "Backend", 5),
        skill("Entity Framework Core", "Backend", 4),
        skill("Vue", "Frontend", 4),
        skill("TypeScript", "Language", 4),
        skill("Azure", "Cloud", 3),
    ]
}

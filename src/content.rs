//! Bundled portfolio content.
//!
//! Everything the interface shows lives here as static data baked into
//! the binary. No files are read, no network is touched.

use crate::types::{Profile, Project, ProjectCategory, Skill, SkillCategory};

/// All bundled content, built once at startup.
#[derive(Debug, Clone)]
pub struct Content {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}

impl Content {
    /// Build the bundled content.
    pub fn bundled() -> Self {
        Content {
            profile: profile(),
            projects: projects(),
            skills: skills(),
        }
    }

    /// Projects visible under a filter: the full list for `None`,
    /// otherwise only projects in the active category. Order is
    /// preserved from the bundled list.
    pub fn filtered_projects(&self, filter: Option<ProjectCategory>) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| filter.is_none_or(|c| p.category == c))
            .collect()
    }

    /// Skills in one group, in bundled order.
    pub fn skills_in(&self, category: SkillCategory) -> Vec<&Skill> {
        self.skills.iter().filter(|s| s.category == category).collect()
    }
}

// ============================================================================
// PROFILE
// ============================================================================

fn profile() -> Profile {
    Profile {
        name: "Naufal Alfan".into(),
        greeting: "Hi, World! Let me introduce myself".into(),
        headline_words: vec![
            "Fullstack Developer".into(),
            "React Specialist".into(),
            "Prompter".into(),
            "Problem Solver".into(),
            "Mobile Beginner".into(),
        ],
        bio: "Passionate about the craft: professional, tidy, inventive, \
              always up to date and never quite satisfied."
            .into(),
        location: "Bogor, Indonesia".into(),
        github_url: "https://github.com/naufaalfl".into(),
        linkedin_url: "https://www.linkedin.com/in/bangnoplek/".into(),
        email: "nalfan1418@gmail.com".into(),
    }
}

// ============================================================================
// PROJECTS
// ============================================================================

fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Perpustakaan App".into(),
            summary: "A digital library application".into(),
            details: "Library management built with React and Node.js, \
                      consuming a JWT-secured REST API for catalogue, \
                      lending and member records."
                .into(),
            technologies: vec![
                "React".into(),
                "Node.js".into(),
                "JWT".into(),
                "JavaScript".into(),
            ],
            category: ProjectCategory::Web,
            repo_url: "https://github.com/naufaalfl/PerpustakaanReact".into(),
            live_url: None,
            featured: true,
        },
        Project {
            title: "Ticket Flutter".into(),
            summary: "A ticketing app that gets out of the user's way".into(),
            details: "Dart and Flutter ticket booking, compatible with iOS, \
                      Android and the web, with live seat updates over \
                      Socket.io."
                .into(),
            technologies: vec!["Flutter".into(), "Dart".into(), "Socket.io".into()],
            category: ProjectCategory::Mobile,
            repo_url: "https://github.com/naufaalfl/TicketFlutter".into(),
            live_url: None,
            featured: true,
        },
        Project {
            title: "Pengaduan Masyarakat".into(),
            summary: "A public complaints portal anyone can reach".into(),
            details: "Community complaint tracking on Laravel with a MySQL \
                      store for filed reports and their follow-up history."
                .into(),
            technologies: vec!["Laravel".into(), "PHP".into(), "MySQL".into()],
            category: ProjectCategory::Fullstack,
            repo_url: "https://github.com/naufaalfl/Pengaduan-Masyarakat-Lumen".into(),
            live_url: None,
            featured: false,
        },
        Project {
            title: "Cuaca Live".into(),
            summary: "Live weather across many cities".into(),
            details: "Weather dashboard fed by the openweathermap.org API, \
                      showing live conditions for any city you search."
                .into(),
            technologies: vec!["React".into(), "JavaScript".into()],
            category: ProjectCategory::Web,
            repo_url: "https://github.com/naufaalfl/Cuaca".into(),
            live_url: None,
            featured: true,
        },
        Project {
            title: "Profile Interaktif".into(),
            summary: "An interactive profile app".into(),
            details: "A profile experience built entirely with Dart and \
                      Flutter."
                .into(),
            technologies: vec!["Flutter".into(), "Dart".into()],
            category: ProjectCategory::Mobile,
            repo_url: "https://github.com/naufaalfl/Profile".into(),
            live_url: None,
            featured: false,
        },
    ]
}

// ============================================================================
// SKILLS
// ============================================================================

fn skills() -> Vec<Skill> {
    fn s(name: &str, level: u8, category: SkillCategory) -> Skill {
        Skill { name: name.into(), level, category }
    }

    vec![
        // Languages
        s("PHP", 85, SkillCategory::Language),
        s("Python", 80, SkillCategory::Language),
        s("JavaScript", 90, SkillCategory::Language),
        s("Dart", 85, SkillCategory::Language),
        s("TypeScript", 85, SkillCategory::Language),
        s("HTML5", 95, SkillCategory::Language),
        s("CSS3", 90, SkillCategory::Language),
        // Frameworks
        s("Laravel", 85, SkillCategory::Framework),
        s("React", 90, SkillCategory::Framework),
        s("Flutter", 85, SkillCategory::Framework),
        s("Tailwind", 90, SkillCategory::Framework),
        s("Bootstrap", 85, SkillCategory::Framework),
        // Databases
        s("Firebase", 80, SkillCategory::Database),
        s("MySQL", 85, SkillCategory::Database),
        s("MongoDB", 80, SkillCategory::Database),
        s("PostgreSQL", 75, SkillCategory::Database),
        // UI / UX
        s("Figma", 80, SkillCategory::Design),
        s("Canva", 85, SkillCategory::Design),
        // Tools
        s("Git", 85, SkillCategory::Tools),
        s("GitHub", 85, SkillCategory::Tools),
        s("VSCode", 90, SkillCategory::Tools),
        s("Android Studio", 80, SkillCategory::Tools),
        // Cloud
        s("AWS", 70, SkillCategory::Cloud),
    ]
}

// ============================================================================
// TESTS
// ============================================================================

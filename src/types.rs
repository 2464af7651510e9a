//! Domain types for termfolio.
//!
//! Pure data: the portfolio content model, the contact-form model,
//! and the output format switch for the CLI surface.

use serde::Serialize;

// ============================================================================
// PROFILE
// ============================================================================

/// The static profile rendered on the Home section.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Short greeting line shown above the name.
    pub greeting: String,
    /// Phrases cycled by the typing animation ("I'm a ...").
    pub headline_words: Vec<String>,
    /// One-paragraph bio.
    pub bio: String,
    /// Where the author is based.
    pub location: String,
    /// GitHub profile URL.
    pub github_url: String,
    /// LinkedIn profile URL.
    pub linkedin_url: String,
    /// Contact email address.
    pub email: String,
}

// ============================================================================
// PROJECTS
// ============================================================================

/// Project category, used by the showcase filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Fullstack,
    Backend,
}

impl ProjectCategory {
    /// All categories in filter-cycle order.
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::Fullstack,
        ProjectCategory::Backend,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web",
            ProjectCategory::Mobile => "Mobile",
            ProjectCategory::Fullstack => "Fullstack",
            ProjectCategory::Backend => "Backend",
        }
    }

    /// Parse a category name (case-insensitive). Used by the CLI filter.
    pub fn parse(s: &str) -> Option<ProjectCategory> {
        match s.to_ascii_lowercase().as_str() {
            "web" => Some(ProjectCategory::Web),
            "mobile" => Some(ProjectCategory::Mobile),
            "fullstack" => Some(ProjectCategory::Fullstack),
            "backend" => Some(ProjectCategory::Backend),
            _ => None,
        }
    }
}

/// A single portfolio project.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    /// Project title.
    pub title: String,
    /// One-line summary shown in the list.
    pub summary: String,
    /// Longer description shown in the detail view.
    pub details: String,
    /// Technologies used.
    pub technologies: Vec<String>,
    /// Category for filtering.
    pub category: ProjectCategory,
    /// Repository URL.
    pub repo_url: String,
    /// Deployed URL, if the project is live somewhere.
    pub live_url: Option<String>,
    /// Highlighted on the showcase.
    pub featured: bool,
}

// ============================================================================
// SKILLS
// ============================================================================

/// Skill grouping, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Language,
    Framework,
    Database,
    Design,
    Tools,
    Cloud,
}

impl SkillCategory {
    /// All groups in the order the About section lists them.
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Language,
        SkillCategory::Framework,
        SkillCategory::Database,
        SkillCategory::Design,
        SkillCategory::Tools,
        SkillCategory::Cloud,
    ];

    /// Section heading for this group.
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Language => "Languages",
            SkillCategory::Framework => "Frameworks",
            SkillCategory::Database => "Databases",
            SkillCategory::Design => "UI / UX",
            SkillCategory::Tools => "Tools",
            SkillCategory::Cloud => "Cloud",
        }
    }
}

/// A skill with a self-assessed proficiency level.
#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    /// Skill name.
    pub name: String,
    /// Proficiency, 0-100.
    pub level: u8,
    /// Group the skill belongs to.
    pub category: SkillCategory,
}

// ============================================================================
// CONTACT FORM
// ============================================================================

/// Which form field currently has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Message,
}

impl FormField {
    /// Focus cycle: Name -> Email -> Message -> Name.
    pub fn next(self) -> FormField {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }
}

/// Submission lifecycle of the contact form.
///
/// Delivery is simulated: Sending lasts a fixed delay, then Sent,
/// then back to Idle. It never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// Contact form state: three text fields, a focus marker, a status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: FormField,
    pub status: SendStatus,
}

impl ContactForm {
    /// Mutable access to the focused field's text.
    pub fn focused_text(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// A form is submittable only when every field has content.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Clear all text fields, keeping focus and status.
    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

// ============================================================================
// OUTPUT FORMAT
// ============================================================================

/// Output format for CLI listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================

//! CLI listing output.
//!
//! Pure functions — (content, OutputFormat) → String.
//! No I/O, no side effects.

use crate::types::{OutputFormat, Project, Skill, SkillCategory};

/// Format a project listing for output.
pub fn format_projects(projects: &[&Project], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_projects_human(projects),
        OutputFormat::Json => to_json(projects),
    }
}

/// Format the skill list, grouped by category.
pub fn format_skills(skills: &[Skill], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_skills_human(skills),
        OutputFormat::Json => to_json(&skills),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_projects_human(projects: &[&Project]) -> String {
    let mut out = String::new();

    if projects.is_empty() {
        out.push_str("No projects in this category.\n");
        return out;
    }

    for project in projects {
        let star = if project.featured { " ★" } else { "" };
        out.push_str(&format!("=== {}{} ===\n", project.title, star));
        out.push_str(&format!("Category:     {}\n", project.category.label()));
        out.push_str(&format!("Summary:      {}\n", project.summary));
        out.push_str(&format!("Technologies: {}\n", project.technologies.join(", ")));
        out.push_str(&format!("Repository:   {}\n", project.repo_url));
        if let Some(live) = &project.live_url {
            out.push_str(&format!("Live:         {}\n", live));
        }
        out.push('\n');
    }

    out.push_str(&format!("{} project(s)\n", projects.len()));
    out
}

fn format_skills_human(skills: &[Skill]) -> String {
    let mut out = String::new();

    for category in SkillCategory::ALL {
        let group: Vec<&Skill> = skills.iter().filter(|s| s.category == category).collect();
        if group.is_empty() {
            continue;
        }
        out.push_str(&format!("=== {} ===\n", category.label()));
        for skill in group {
            out.push_str(&format!("  {:<16} {}\n", skill.name, level_bar(skill.level)));
        }
        out.push('\n');
    }

    out
}

/// Ten-segment proficiency bar: "████████░░ 80%".
pub(crate) fn level_bar(level: u8) -> String {
    let filled = (level as usize).min(100) / 10;
    format!("{}{} {:>3}%", "█".repeat(filled), "░".repeat(10 - filled), level)
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    // serde_json::to_string_pretty for readable output
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================

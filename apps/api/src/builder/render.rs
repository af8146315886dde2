//! Resume building — pluggable, trait-based renderer from the structured
//! form to a finished document.
//!
//! Default: `MarkdownResumeBuilder`, a deterministic markdown renderer.
//! `AppState` holds an `Arc<dyn ResumeBuilder>` so a typeset backend can be
//! swapped in behind the same seam.

use async_trait::async_trait;
use serde::Serialize;

use crate::builder::form::ResumeForm;
use crate::errors::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct BuiltResume {
    pub file_name: String,
    pub markdown: String,
}

/// The builder seam. Carried in `AppState` as `Arc<dyn ResumeBuilder>`.
#[async_trait]
pub trait ResumeBuilder: Send + Sync {
    async fn build(&self, form: &ResumeForm) -> Result<BuiltResume, AppError>;
}

pub struct MarkdownResumeBuilder;

#[async_trait]
impl ResumeBuilder for MarkdownResumeBuilder {
    async fn build(&self, form: &ResumeForm) -> Result<BuiltResume, AppError> {
        if form.personal_info.full_name.trim().is_empty() {
            return Err(AppError::Validation("full_name is required".to_string()));
        }

        Ok(BuiltResume {
            file_name: file_slug(&form.personal_info.full_name),
            markdown: render_markdown(form),
        })
    }
}

/// Renders the form as a structured markdown document. Empty sections are
/// omitted entirely.
pub fn render_markdown(form: &ResumeForm) -> String {
    let mut md = format!("# {}\n\n", form.personal_info.full_name.trim());

    let contact: Vec<&str> = [
        form.personal_info.email.as_str(),
        form.personal_info.phone.as_str(),
        form.personal_info.location.as_str(),
        form.personal_info.linkedin.as_str(),
        form.personal_info.portfolio.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();
    if !contact.is_empty() {
        md.push_str(&format!("{}\n\n", contact.join(" | ")));
    }

    if !form.summary.trim().is_empty() {
        md.push_str("## Summary\n\n");
        md.push_str(&format!("{}\n\n", form.summary.trim()));
    }

    if !form.experiences.is_empty() {
        md.push_str("## Experience\n\n");
        for exp in &form.experiences {
            md.push_str(&format!("### {} — {}\n", exp.role, exp.company));
            let end = exp.end_date.as_deref().unwrap_or("Present");
            if !exp.start_date.is_empty() {
                md.push_str(&format!("{} to {}\n", exp.start_date, end));
            }
            for highlight in &exp.highlights {
                md.push_str(&format!("- {highlight}\n"));
            }
            md.push('\n');
        }
    }

    if !form.education.is_empty() {
        md.push_str("## Education\n\n");
        for edu in &form.education {
            match &edu.year {
                Some(year) => {
                    md.push_str(&format!("- {}, {} ({})\n", edu.degree, edu.institution, year))
                }
                None => md.push_str(&format!("- {}, {}\n", edu.degree, edu.institution)),
            }
        }
        md.push('\n');
    }

    if !form.projects.is_empty() {
        md.push_str("## Projects\n\n");
        for project in &form.projects {
            md.push_str(&format!("### {}\n", project.name));
            if !project.description.is_empty() {
                md.push_str(&format!("{}\n", project.description));
            }
            if !project.technologies.is_empty() {
                md.push_str(&format!("_{}_\n", project.technologies.join(", ")));
            }
            md.push('\n');
        }
    }

    let categories = [
        ("Technical", &form.skills.technical),
        ("Soft", &form.skills.soft),
        ("Languages", &form.skills.languages),
        ("Tools", &form.skills.tools),
    ];
    if categories.iter().any(|(_, skills)| !skills.is_empty()) {
        md.push_str("## Skills\n\n");
        for (label, skills) in categories {
            if !skills.is_empty() {
                md.push_str(&format!("- **{label}:** {}\n", skills.join(", ")));
            }
        }
        md.push('\n');
    }

    md
}

fn file_slug(full_name: &str) -> String {
    let slug: String = full_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    format!("{slug}.md")
}

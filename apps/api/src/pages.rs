//! Page dispatch — the navigation surface as an enumerated variant type.
//!
//! Every page is a `Page` variant with a stable slug, and view assembly is a
//! single match. Unknown slugs are a 404; there is no string mangling of
//! display labels into routing keys.

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Analyzer,
    Builder,
    Dashboard,
    Feedback,
    About,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Analyzer,
        Page::Builder,
        Page::Dashboard,
        Page::Feedback,
        Page::About,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Analyzer => "analyzer",
            Page::Builder => "builder",
            Page::Dashboard => "dashboard",
            Page::Feedback => "feedback",
            Page::About => "about",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Analyzer => "Resume Analyzer",
            Page::Builder => "Resume Builder",
            Page::Dashboard => "Dashboard",
            Page::Feedback => "Feedback",
            Page::About => "About",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.slug() == slug)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub slug: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub nav: Vec<NavItem>,
}

/// Builds the view for one page. The single dispatch point.
pub fn page_view(page: Page) -> PageView {
    let description = match page {
        Page::Home => "Upload, analyze, and build resumes; watch usage on the dashboard.",
        Page::Analyzer => "Upload a resume to score it against applicant-tracking heuristics.",
        Page::Builder => "Assemble a resume document from a structured form.",
        Page::Dashboard => "Aggregate metrics, top skills, and submission trends.",
        Page::Feedback => "Tell us how the product is working for you.",
        Page::About => "A resume analysis service with pluggable scoring and build backends.",
    };

    PageView {
        slug: page.slug(),
        title: page.title(),
        description,
        nav: nav_items(),
    }
}

pub fn nav_items() -> Vec<NavItem> {
    Page::ALL
        .into_iter()
        .map(|page| NavItem {
            slug: page.slug(),
            title: page.title(),
        })
        .collect()
}

/// GET /api/v1/pages
pub async fn handle_list_pages() -> Json<Vec<NavItem>> {
    Json(nav_items())
}

/// GET /api/v1/pages/:slug
pub async fn handle_page(Path(slug): Path<String>) -> Result<Json<PageView>, AppError> {
    let page = Page::from_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Page '{slug}' not found")))?;
    Ok(Json(page_view(page)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()), Some(page));
        }
    }

    #[test]
    fn test_unknown_slug_is_none() {
        assert_eq!(Page::from_slug("settings"), None);
        assert_eq!(Page::from_slug(""), None);
    }

    #[test]
    fn test_nav_lists_every_page_once() {
        let nav = nav_items();
        assert_eq!(nav.len(), Page::ALL.len());
        assert_eq!(nav[0].slug, "home");
        assert_eq!(nav[3].title, "Dashboard");
    }

    #[test]
    fn test_page_view_carries_navigation() {
        let view = page_view(Page::Dashboard);
        assert_eq!(view.slug, "dashboard");
        assert_eq!(view.title, "Dashboard");
        assert_eq!(view.nav.len(), Page::ALL.len());
    }
}

//! Resume analysis — pluggable, trait-based analyzer over extracted resume
//! text.
//!
//! Default: `KeywordResumeAnalyzer` (pure-Rust, fast, deterministic, fully
//! testable). `AppState` holds an `Arc<dyn ResumeAnalyzer>`, so a smarter
//! backend can be swapped in without touching the endpoint or handlers.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Output data model (shared across all analyzer backends)
// ────────────────────────────────────────────────────────────────────────────

/// Full analysis of one resume, as returned to callers and persisted
/// alongside the resume record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// 0-100 heuristic compatibility score for applicant-tracking systems.
    pub ats_score: f64,
    /// 0-100 score for recognized skill keywords.
    pub keyword_match_score: f64,
    /// Skills detected in the text, in lexicon order.
    pub skills: Vec<String>,
    pub recommendation: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The analyzer seam. Carried in `AppState` as `Arc<dyn ResumeAnalyzer>`.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<AnalysisReport, AppError>;
}

/// Pure-Rust keyword-based analyzer. No external calls.
pub struct KeywordResumeAnalyzer;

#[async_trait]
impl ResumeAnalyzer for KeywordResumeAnalyzer {
    async fn analyze(&self, text: &str) -> Result<AnalysisReport, AppError> {
        Ok(compute_keyword_analysis(text))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword analysis
// ────────────────────────────────────────────────────────────────────────────

/// Canonical skill names matched against resume text. Single-word entries
/// match whole tokens; multi-word entries match as substrings.
const SKILL_LEXICON: &[&str] = &[
    "Python",
    "SQL",
    "Rust",
    "Java",
    "JavaScript",
    "TypeScript",
    "Go",
    "C++",
    "C#",
    "Ruby",
    "PHP",
    "Swift",
    "Kotlin",
    "Scala",
    "HTML",
    "CSS",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Django",
    "Flask",
    "Spring",
    "Docker",
    "Kubernetes",
    "Terraform",
    "AWS",
    "Azure",
    "GCP",
    "Git",
    "Linux",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "Kafka",
    "Spark",
    "Hadoop",
    "TensorFlow",
    "PyTorch",
    "Pandas",
    "NumPy",
    "Machine Learning",
    "Deep Learning",
    "Data Analysis",
    "Project Management",
    "Agile",
    "Scrum",
    "Leadership",
    "Communication",
];

/// Section headings an ATS expects to find.
const RESUME_SECTIONS: &[&str] = &[
    "summary",
    "experience",
    "education",
    "skills",
    "projects",
    "certifications",
];

const SECTION_WEIGHT: f64 = 60.0;
const CONTACT_POINTS: f64 = 10.0;

/// Detected skills needed for a full keyword_match_score.
const TARGET_SKILL_COUNT: f64 = 10.0;

/// Scores the text on section coverage, contact details, length, and
/// recognized skills. All scores land in [0, 100].
pub fn compute_keyword_analysis(text: &str) -> AnalysisReport {
    let skills = detect_skills(text);
    let keyword_match_score =
        round1(((skills.len() as f64 / TARGET_SKILL_COUNT) * 100.0).min(100.0));

    let missing = missing_sections(text);
    let present = RESUME_SECTIONS.len() - missing.len();
    let section_score = present as f64 / RESUME_SECTIONS.len() as f64 * SECTION_WEIGHT;

    let mut contact_score = 0.0;
    if has_email(text) {
        contact_score += CONTACT_POINTS;
    }
    if has_phone(text) {
        contact_score += CONTACT_POINTS;
    }

    let length_score = match text.split_whitespace().count() {
        300..=800 => 20.0,
        150..=1200 => 10.0,
        _ => 0.0,
    };

    let ats_score = round1((section_score + contact_score + length_score).clamp(0.0, 100.0));
    let recommendation = build_recommendation(ats_score, &missing);

    AnalysisReport {
        ats_score,
        keyword_match_score,
        skills,
        recommendation,
    }
}

/// Lexicon entries found in the text, in lexicon order.
pub fn detect_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let words = tokenize(&lower);

    SKILL_LEXICON
        .iter()
        .filter(|skill| {
            let needle = skill.to_lowercase();
            if needle.contains(' ') {
                lower.contains(&needle)
            } else {
                words.contains(needle.as_str())
            }
        })
        .map(|skill| skill.to_string())
        .collect()
}

/// Whole tokens of the text. '+', '#', and '.' stay inside tokens so
/// "c++", "c#", and "node.js" survive; a second dot-trimmed form covers
/// sentence-final words.
fn tokenize(lower: &str) -> HashSet<String> {
    let mut words = HashSet::new();
    for token in lower.split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#' || c == '.')) {
        if token.is_empty() {
            continue;
        }
        words.insert(token.to_string());
        let trimmed = token.trim_matches('.');
        if !trimmed.is_empty() && trimmed != token {
            words.insert(trimmed.to_string());
        }
    }
    words
}

fn missing_sections(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    RESUME_SECTIONS
        .iter()
        .filter(|section| !lower.contains(*section))
        .copied()
        .collect()
}

fn has_email(text: &str) -> bool {
    text.split_whitespace().any(|word| {
        match (word.find('@'), word.rfind('.')) {
            (Some(at), Some(dot)) => at > 0 && dot > at + 1,
            _ => false,
        }
    })
}

fn has_phone(text: &str) -> bool {
    text.split_whitespace()
        .any(|word| word.chars().filter(|c| c.is_ascii_digit()).count() >= 7)
}

fn build_recommendation(ats_score: f64, missing_sections: &[&str]) -> String {
    if ats_score >= 80.0 {
        "Strong resume. Sections, contact details, and length are well covered.".to_string()
    } else if missing_sections.is_empty() {
        format!("Decent resume ({ats_score:.0}/100). Tighten the length and surface more skills.")
    } else {
        format!(
            "Needs work ({ats_score:.0}/100). Consider adding: {}.",
            missing_sections.join(", ")
        )
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "
        Jane Doe
        jane.doe@example.com | 555-123-4567

        Summary
        Backend engineer with six years building data platforms.

        Experience
        Built streaming pipelines in Python and SQL on Kubernetes.

        Education
        B.S. Computer Science.

        Skills
        Python, SQL, Docker, Kubernetes, PostgreSQL.

        Projects
        Open-source contributor to a Rust web framework.

        Certifications
        AWS Solutions Architect.
    ";

    #[test]
    fn test_detects_skills_from_sample() {
        let skills = detect_skills(SAMPLE_RESUME);
        for expected in ["Python", "SQL", "Rust", "Docker", "Kubernetes", "AWS"] {
            assert!(skills.iter().any(|s| s == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_whole_token_matching_avoids_substring_hits() {
        let skills = detect_skills("Deep JavaScript expertise.");
        assert!(skills.iter().any(|s| s == "JavaScript"));
        assert!(!skills.iter().any(|s| s == "Java"));
    }

    #[test]
    fn test_sentence_final_skill_is_detected() {
        let skills = detect_skills("Shipped services in Rust.");
        assert!(skills.iter().any(|s| s == "Rust"));
    }

    #[test]
    fn test_symbolic_skill_names_are_detected() {
        let skills = detect_skills("Systems work in C++ and C#, plus Node.js tooling.");
        assert!(skills.iter().any(|s| s == "C++"));
        assert!(skills.iter().any(|s| s == "C#"));
        assert!(skills.iter().any(|s| s == "Node.js"));
    }

    #[test]
    fn test_multiword_skill_matches_as_substring() {
        let skills = detect_skills("Applied machine learning to fraud detection.");
        assert!(skills.iter().any(|s| s == "Machine Learning"));
    }

    #[test]
    fn test_full_sample_scores_well() {
        let report = compute_keyword_analysis(SAMPLE_RESUME);
        // All six sections plus email and phone are present.
        assert!(report.ats_score >= 80.0, "got {}", report.ats_score);
        assert!(report.keyword_match_score > 0.0);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let report = compute_keyword_analysis("");
        assert_eq!(report.ats_score, 0.0);
        assert_eq!(report.keyword_match_score, 0.0);
        assert!(report.skills.is_empty());
    }

    #[test]
    fn test_scores_stay_in_range() {
        let dense = SKILL_LEXICON.join(", ").repeat(5);
        let report = compute_keyword_analysis(&dense);
        assert!((0.0..=100.0).contains(&report.ats_score));
        assert_eq!(report.keyword_match_score, 100.0);
    }

    #[test]
    fn test_recommendation_names_missing_sections() {
        let rec = build_recommendation(40.0, &["education", "projects"]);
        assert!(rec.contains("education"));
        assert!(rec.contains("projects"));
        assert!(rec.contains("40"));
    }

    #[test]
    fn test_recommendation_high_score() {
        let rec = build_recommendation(85.0, &[]);
        assert!(rec.contains("Strong resume"));
    }

    #[tokio::test]
    async fn test_keyword_analyzer_backend() {
        let analyzer = KeywordResumeAnalyzer;
        let report = analyzer.analyze(SAMPLE_RESUME).await.unwrap();
        assert!(report.skills.iter().any(|s| s == "Python"));
    }
}

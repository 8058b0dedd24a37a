//! Recommended resource extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::extract::{LabeledBlocks, capitalize_first, extract_first_section, split_fragments};
use crate::profile::LearnerProfile;

use super::fallback;
use super::types::{Resource, SubjectResources};

const SECTION_LABELS: [&str; 2] = ["recommended resources", "resources"];

static TYPE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(book|video|course|online|website|app):").expect("type prefix pattern is valid")
});

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("url pattern is valid"));

/// Read per-subject resources from `reply`.
///
/// The result has one entry per profile subject, in profile order. A
/// subject whose block yields nothing gets the two generic resources; when
/// no subject yields anything every subject gets them.
pub fn extract_recommended_resources(reply: &str, profile: &LearnerProfile) -> Vec<SubjectResources> {
    let Some(section) = extract_first_section(reply, &SECTION_LABELS) else {
        tracing::debug!(field = "recommendedResources", "section not found, using fallback");
        return fallback::recommended_resources(profile);
    };

    let parsed = parse_resources_section(section, &profile.subjects);
    if parsed.iter().all(|s| s.resources.is_empty()) {
        tracing::debug!(field = "recommendedResources", "no resources extracted, using fallback");
        return fallback::recommended_resources(profile);
    }

    parsed
        .into_iter()
        .map(|entry| {
            if entry.resources.is_empty() {
                tracing::debug!(subject = %entry.subject, "no resources for subject, using fallback");
                fallback::subject_resources(&entry.subject)
            } else {
                entry
            }
        })
        .collect()
}

/// Parse a located resources section into one entry per subject. Entries
/// may be empty.
pub fn parse_resources_section(section: &str, subjects: &[String]) -> Vec<SubjectResources> {
    let blocks = LabeledBlocks::new(subjects);
    subjects
        .iter()
        .map(|subject| SubjectResources {
            subject: subject.clone(),
            resources: blocks
                .block(section, subject)
                .map(|block| split_fragments(block).iter().map(|f| parse_resource(f)).collect())
                .unwrap_or_default(),
        })
        .collect()
}

/// Interpret one list item such as `"Book: Calculus Vol 1 https://example.com/calc"`.
///
/// The type comes from a known leading keyword (default `"Resource"`), the
/// URL from the first `http(s)://` token, and the name is what remains once
/// both are removed. The description keeps the whole fragment.
pub fn parse_resource(fragment: &str) -> Resource {
    let (kind, rest) = match TYPE_PREFIX.captures(fragment) {
        Some(caps) => {
            let whole = caps.get(0).map_or(0, |m| m.end());
            let keyword = caps.get(1).map_or("", |m| m.as_str());
            (capitalize_first(keyword), &fragment[whole..])
        }
        None => ("Resource".to_string(), fragment),
    };

    let url = URL.find(fragment).map(|m| m.as_str().to_string());

    let without_url = match &url {
        Some(u) => rest.replacen(u.as_str(), " ", 1),
        None => rest.to_string(),
    };
    let mut name = without_url.split_whitespace().collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        name = url.clone().unwrap_or_else(|| fragment.trim().to_string());
    }

    Resource {
        kind,
        name,
        url,
        description: fragment.to_string(),
    }
}

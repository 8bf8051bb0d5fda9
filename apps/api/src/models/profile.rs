use serde::{Deserialize, Serialize};

/// Raw form values as captured by the page, before any splitting.
///
/// Missing keys deserialize to empty strings so assembly never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileFields {
    pub name: String,
    pub title: String,
    pub location: String,
    /// Newline-separated, one entry per line.
    pub experience: String,
    /// Comma-separated.
    pub skills: String,
    /// Comma-separated.
    pub soft_skills: String,
    /// Comma-separated.
    pub learning: String,
    /// Comma-separated.
    pub certifications: String,
    pub goals: String,
}

/// The structured persona handed to the completion service.
///
/// Sequence fields are always present; an empty source string yields `[""]`.
/// Serialized keys match the form's camelCase names (`softSkills`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub name: String,
    pub title: String,
    pub location: String,
    pub experience: Vec<String>,
    pub skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub learning: Vec<String>,
    pub certifications: Vec<String>,
    pub goals: String,
}

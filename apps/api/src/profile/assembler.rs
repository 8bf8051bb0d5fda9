//! Splits free-text form fields into the structured profile record.
//!
//! The splitting rules are observable behaviour and are kept as-is:
//! - `experience` splits on `\n` with no trimming.
//! - `skills` / `softSkills` split on `,` and trim each piece.
//! - `learning` / `certifications` split on `,` and keep whitespace verbatim.
//!
//! The trimming asymmetry between skills and learning/certifications is
//! deliberate until product says otherwise.

use crate::models::profile::{ProfileFields, ProfileRecord};

/// Builds a `ProfileRecord` from form values. Never fails.
pub fn assemble(fields: &ProfileFields) -> ProfileRecord {
    ProfileRecord {
        name: fields.name.clone(),
        title: fields.title.clone(),
        location: fields.location.clone(),
        experience: split_verbatim(&fields.experience, '\n'),
        skills: split_trimmed(&fields.skills, ','),
        soft_skills: split_trimmed(&fields.soft_skills, ','),
        learning: split_verbatim(&fields.learning, ','),
        certifications: split_verbatim(&fields.certifications, ','),
        goals: fields.goals.clone(),
    }
}

/// `str::split` semantics: N separators always give N + 1 pieces, so `""` -> `[""]`.
fn split_verbatim(text: &str, sep: char) -> Vec<String> {
    text.split(sep).map(str::to_string).collect()
}

fn split_trimmed(text: &str, sep: char) -> Vec<String> {
    text.split(sep).map(|s| s.trim().to_string()).collect()
}

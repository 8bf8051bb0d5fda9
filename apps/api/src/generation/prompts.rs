// Prompt fragments for answer generation.
// The profile JSON sits between the preamble and the closing directive.

use crate::models::profile::ProfileRecord;

/// Used in place of the name when the profile leaves it blank.
pub const FALLBACK_PERSONA: &str = "the candidate";

/// Builds the system instruction: persona preamble, compact profile JSON, closing directive.
pub fn build_system_prompt(profile: &ProfileRecord) -> Result<String, serde_json::Error> {
    let profile_json = serde_json::to_string(profile)?;
    let (full_name, first_name) = match profile.name.trim() {
        "" => (FALLBACK_PERSONA, FALLBACK_PERSONA),
        name => (name, name.split_whitespace().next().unwrap_or(name)),
    };

    Ok(format!(
        "You are simulating interview responses for {full_name}, based on the following profile data.\n\
         {profile_json}\n\n\
         Answer the following interview question as if you are {first_name}, in a clear and confident tone."
    ))
}

use crate::models::profile::ProfileFields;

/// Pre-filled form values shown before the user edits anything.
pub fn default_fields() -> ProfileFields {
    ProfileFields {
        name: "Roy O’Brien".to_string(),
        title: "IT Systems Technician".to_string(),
        location: "Derry, Northern Ireland".to_string(),
        experience: "- IT Systems Technician at BT Group\n\
                     - Customer IT Support at BT Group\n\
                     - Technical Customer Service at EE"
            .to_string(),
        skills: "Windows, macOS, Linux, VMware, TeamViewer".to_string(),
        soft_skills: "Problem-solving, Communication, Knowledge Sharing".to_string(),
        learning: "AWS CLF-C02, Azure AZ-900, Advanced Python".to_string(),
        certifications: "Python Programming (OpenEDG)".to_string(),
        goals: "Explore roles in cloud, cybersecurity, or DevOps with learning opportunities."
            .to_string(),
    }
}

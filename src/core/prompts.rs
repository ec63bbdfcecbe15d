//! Prompt templates sent to the text-generation model.
//!
//! Both prompts restate the district, its descriptor and the user's profile so
//! the model answers with local market context.

use crate::models::Profile;

/// Number of business ideas requested per generation
pub const IDEA_COUNT: usize = 3;

/// Sections the model is asked to cover for every idea
pub const IDEA_SECTIONS: [&str; 9] = [
    "Business Title",
    "Brief Description",
    "Required Resources",
    "Potential Challenges",
    "Marketing Strategy",
    "Estimated Timeline",
    "Growth Potential",
    "Actionable Steps to Start",
    "Suggested Budget Distribution",
];

/// Build the prompt asking for business ideas tailored to the profile
pub fn ideas_prompt(profile: &Profile) -> String {
    let district = profile.district.name();
    let sections = IDEA_SECTIONS
        .iter()
        .enumerate()
        .map(|(i, section)| format!("{}. {}", i + 1, section))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "The user is from {district}, a region known for {info}.\n\
         They have the following profile:\n\
         {profile_block}\n\
         \n\
         Please generate {count} business ideas that are highly likely to succeed in {district}. Each idea should:\n\
         1. Align with the user's qualifications and interests\n\
         2. Be feasible within the given budget\n\
         3. Leverage opportunities unique to {district}\n\
         4. Have a high probability of success based on local market conditions\n\
         \n\
         For each business idea, provide:\n\
         {sections}\n",
        district = district,
        info = profile.district.descriptor(),
        profile_block = profile_block(profile),
        count = IDEA_COUNT,
        sections = sections,
    )
}

/// Build the follow-up assistant prompt for a free-form question
pub fn assistant_prompt(profile: &Profile, question: &str) -> String {
    format!(
        "You are a helpful assistant specializing in project development and entrepreneurship in Tamil Nadu, India.\n\
         The user is from {district}, which is known for: {info}\n\
         \n\
         User's profile:\n\
         {profile_block}\n\
         \n\
         Please respond to the following question or request, taking into account the user's background and local context:\n\
         {question}\n\
         \n\
         Provide practical, actionable advice that is relevant to the user's situation and the local market conditions.\n",
        district = profile.district.name(),
        info = profile.district.descriptor(),
        profile_block = profile_block(profile),
        question = question,
    )
}

fn profile_block(profile: &Profile) -> String {
    format!(
        "- Qualifications: {}\n- Budget: {} INR\n- Interests: {}",
        profile.qualifications, profile.budget, profile.interests
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::District;

    fn profile() -> Profile {
        Profile {
            name: "Priya".to_string(),
            district: District::Erode,
            qualifications: "B.Sc Agriculture".to_string(),
            budget: 250000.0,
            interests: "organic farming".to_string(),
        }
    }

    #[test]
    fn test_ideas_prompt_contents() {
        let prompt = ideas_prompt(&profile());

        assert!(prompt.starts_with(
            "The user is from Erode, a region known for Known for turmeric production and textile industry."
        ));
        assert!(prompt.contains("- Qualifications: B.Sc Agriculture"));
        assert!(prompt.contains("- Budget: 250000 INR"));
        assert!(prompt.contains("- Interests: organic farming"));
        assert!(prompt.contains("Please generate 3 business ideas"));
        assert!(prompt.contains("3. Leverage opportunities unique to Erode"));
        assert!(prompt.contains("9. Suggested Budget Distribution"));
    }

    #[test]
    fn test_fractional_budget_kept() {
        let mut p = profile();
        p.budget = 1500.5;
        assert!(ideas_prompt(&p).contains("- Budget: 1500.5 INR"));
    }

    #[test]
    fn test_assistant_prompt_embeds_question() {
        let prompt = assistant_prompt(&profile(), "How do I get organic certification?");

        assert!(prompt.contains("entrepreneurship in Tamil Nadu, India"));
        assert!(prompt.contains("The user is from Erode, which is known for: Known for turmeric"));
        assert!(prompt.contains("How do I get organic certification?"));
        assert!(prompt.contains("- Budget: 250000 INR"));
    }

    #[test]
    fn test_name_not_sent_to_model() {
        assert!(!ideas_prompt(&profile()).contains("Priya"));
    }
}

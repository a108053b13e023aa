// Prompt constants for the job-matching endpoint.

/// Job matching prompt template.
/// Replace `{profile_json}` and `{answers}` before sending.
pub const JOB_MATCH_PROMPT_TEMPLATE: &str = r#"You are an experienced career advisor. Given a candidate profile and the candidate's answers to follow-up questions, recommend matching jobs.

CANDIDATE PROFILE:
{profile_json}

ANSWERS:
{answers}

Return a JSON object with this EXACT schema (no extra fields):
{
  "careerAnalysis": {
    "summary": "short assessment of the candidate's direction",
    "strengths": ["strength 1", "strength 2"],
    "growthAreas": ["area 1", "area 2"]
  },
  "jobMatches": [
    {
      "title": "job title",
      "matchScore": 87,
      "reasoning": "why this role fits the candidate",
      "requiredSkills": ["skill 1", "skill 2"],
      "salaryRange": "$120k - $150k",
      "growthPotential": "short note on trajectory"
    }
  ],
  "nextSteps": ["step 1", "step 2"]
}

Rules:
- "jobMatches" must contain between 5 and 8 entries, ordered by matchScore descending.
- Ground every recommendation in the profile and answers. Do not invent facts about the candidate."#;

/// Builds the job-matching prompt: the profile is embedded as JSON and the
/// answers as a numbered list, preserving input order (answer i corresponds
/// to question i).
pub fn build_job_match_prompt(profile: &serde_json::Value, answers: &[String]) -> String {
    let profile_json =
        serde_json::to_string_pretty(profile).unwrap_or_else(|_| profile.to_string());
    let numbered = answers
        .iter()
        .enumerate()
        .map(|(i, answer)| format!("Q{}: {}", i + 1, answer))
        .collect::<Vec<_>>()
        .join("\n");

    // Single left-to-right pass over the template so substituted values are
    // never rescanned: a profile containing a literal "{answers}" must stay
    // verbatim.
    let mut prompt = String::with_capacity(
        JOB_MATCH_PROMPT_TEMPLATE.len() + profile_json.len() + numbered.len(),
    );
    let mut rest = JOB_MATCH_PROMPT_TEMPLATE;
    for (placeholder, value) in [
        ("{profile_json}", profile_json.as_str()),
        ("{answers}", numbered.as_str()),
    ] {
        if let Some((head, tail)) = rest.split_once(placeholder) {
            prompt.push_str(head);
            prompt.push_str(value);
            rest = tail;
        }
    }
    prompt.push_str(rest);
    prompt
}

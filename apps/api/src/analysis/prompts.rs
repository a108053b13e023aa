// Prompt constants for the resume-analysis endpoint.

/// Resume analysis prompt template. Replace `{resume_text}` before sending.
///
/// The schema deliberately includes `careerLevel`; this is the single
/// canonical response shape for the endpoint.
pub const RESUME_ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an experienced career advisor. Analyze the following resume.

Return a JSON object with this EXACT schema (no extra fields):
{
  "analysis": {
    "name": "candidate's full name",
    "currentRole": "most recent job title",
    "careerLevel": "entry | mid | senior | executive",
    "skills": ["skill1", "skill2"],
    "experience": "2-3 sentence summary of the work history",
    "education": "1-2 sentence summary of the education"
  },
  "questions": ["question 1", "question 2", "question 3", "question 4", "question 5"]
}

Rules:
- "questions" must contain EXACTLY 5 follow-up questions that clarify the candidate's career goals, preferences, and constraints.
- Base every field on the resume text alone. Use "unknown" where the resume is silent.

RESUME:
{resume_text}"#;

pub fn build_resume_analysis_prompt(resume_text: &str) -> String {
    RESUME_ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_resume_text_verbatim() {
        let prompt =
            build_resume_analysis_prompt("Jane Doe, Software Engineer, 5 years React experience");
        assert!(prompt.contains("Jane Doe, Software Engineer, 5 years React experience"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn prompt_requests_the_documented_schema() {
        let prompt = build_resume_analysis_prompt("text");
        assert!(prompt.contains("\"analysis\""));
        assert!(prompt.contains("careerLevel"));
        assert!(prompt.contains("EXACTLY 5"));
    }
}

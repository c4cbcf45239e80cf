//! Prompt templates for statement analysis
//!
//! One fixed system instruction and one user template with the formatted
//! document embedded verbatim.

use minijinja::{Environment, context};

/// System instruction for the analysis completion
pub const SYSTEM_PROMPT: &str =
    "You are an AI trained to provide financial analysis based on financial statements.";

const ANALYZE_STATEMENTS_TEMPLATE: &str = "Please analyze the following data and provide insights:\n{{ document }}.\nWrite each section out as instructed in the summary section and then provide analysis of how it's changed over the time period.";

/// Render the analysis user message for a formatted document
pub fn analyze_statements_prompt(document: &str) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("analyst.user.analyze_statements", ANALYZE_STATEMENTS_TEMPLATE)?;
    let template = env.get_template("analyst.user.analyze_statements")?;
    template.render(context! { document })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_embedded_verbatim() {
        let document = "For the period ending 2023-12-31, the company reported the following:\nrevenue: 1";
        let prompt = analyze_statements_prompt(document).unwrap();
        assert!(prompt.contains(document));
    }

    #[test]
    fn test_fixed_directive_present() {
        let prompt = analyze_statements_prompt("data").unwrap();
        assert!(prompt.starts_with("Please analyze the following data and provide insights:"));
        assert!(prompt.contains("analysis of how it's changed over the time period"));
    }

    #[test]
    fn test_empty_document_still_renders() {
        let prompt = analyze_statements_prompt("").unwrap();
        assert!(prompt.contains("provide insights:\n.\n"));
    }
}

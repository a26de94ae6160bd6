//! Prompt templates for the solve flow
//!
//! The labeled-section layout here is a static contract with the models:
//! the reply parser recognizes exactly these headers. It is not
//! user-configurable per call.

/// Templates for generating solve prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the solve request
    pub fn solve_system() -> &'static str {
        r#"You are a careful mathematician. Solve only the specific problem you are given,
showing your work clearly. Do not reference any previous problems or solutions.
Always reply using exactly the labeled sections you are asked for."#
    }

    /// User prompt embedding the problem and the section contract
    pub fn solve_prompt(problem: &str) -> String {
        format!(
            r#"Solve the following math problem step by step:

Problem: {}

Reply using EXACTLY these three labeled sections:

Understanding:
Restate what the problem asks for and list the given information.

Steps:
1. List each solution step in order.
2. Show all calculations, including units.

Final Answer:
State ONLY the final result on this line. No explanations here.

Important:
- Keep the section labels exactly as written above.
- Do not add sections of your own.
- The Final Answer section must contain the result and nothing else."#,
            problem
        )
    }
}

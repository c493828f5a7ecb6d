//! Prompt synthesis
//!
//! Builds the system turn that opens a problem conversation, the labelled
//! code turn, and the two-message prompt of the one-shot analysis.

use std::fmt::Write;

use oncode_llm::LlmMessage;

use super::entities::{ProblemContext, Turn};

/// Instructions appended to every conversation's system turn
pub const TUTOR_GUIDANCE: &str = "\
You are a competitive programming tutor helping the user solve the problem above. \
Guide them with hints, observations, and explanations of relevant techniques rather than \
complete solutions. Point out bugs and missed edge cases in their code without rewriting it \
for them. Only provide a full solution if the user has explicitly asked for one at least twice.";

/// System prompt of the one-shot analysis
pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are a code analysis assistant. Analyze the given code and provide helpful suggestions and improvements.";

const ANALYSIS_INSTRUCTIONS: &str = "\
Please analyze the code and provide:
1. Potential logical errors
2. Missing edge cases
3. Optimization suggestions
4. Any other helpful hints

Provide your response as a list of concise points.";

fn write_problem_sections(out: &mut String, context: &ProblemContext) {
    // Writing to a String cannot fail
    let _ = write!(
        out,
        "Problem Statement:\n{}\n\nInput Specification:\n{}\n\nOutput Specification:\n{}\n",
        context.statement().trim(),
        context.input_spec().trim(),
        context.output_spec().trim(),
    );
}

fn write_samples(out: &mut String, context: &ProblemContext) {
    let Some(samples) = context.samples() else {
        return;
    };

    out.push_str("\nSample Tests:\n");
    let count = samples.inputs.len().max(samples.outputs.len());
    for i in 0..count {
        let input = samples.inputs.get(i).map(|s| s.trim()).unwrap_or("(not provided)");
        let output = samples
            .outputs
            .get(i)
            .map(|s| s.trim())
            .unwrap_or("(not provided)");
        let _ = write!(
            out,
            "Sample {n} Input:\n{input}\nSample {n} Output:\n{output}\n",
            n = i + 1
        );
    }
}

/// System turn that opens a conversation for a problem
pub fn system_turn(context: &ProblemContext) -> Turn {
    let mut content = String::new();
    write_problem_sections(&mut content, context);
    write_samples(&mut content, context);
    content.push('\n');
    content.push_str(TUTOR_GUIDANCE);
    Turn::system(content)
}

/// User turn carrying the user's current code
pub fn code_turn(code: &str) -> Turn {
    Turn::user(format!("Here is my current code:\n```\n{}\n```", code))
}

/// System and user messages for the one-shot analysis
pub fn analysis_messages(code: &str, context: &ProblemContext) -> Vec<LlmMessage> {
    let mut user = String::new();
    write_problem_sections(&mut user, context);
    let _ = write!(user, "\nUser's Code:\n{}\n\n{}", code, ANALYSIS_INSTRUCTIONS);

    vec![
        LlmMessage::system(ANALYSIS_SYSTEM_PROMPT),
        LlmMessage::user(user),
    ]
}

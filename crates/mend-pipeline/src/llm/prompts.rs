//! Prompt construction for the two LLM calls: per-batch fix fragments and
//! the full-file merge.

use mend_core::Violation;

use super::CompletionRequest;

const FRAGMENT_MAX_TOKENS: u32 = 3000;
const FRAGMENT_TEMPERATURE: f64 = 0.4;
const MERGE_MAX_TOKENS: u32 = 2000;
const MERGE_TEMPERATURE: f64 = 0.3;

/// Build the fragment-generation request for one violation batch.
pub fn fragment_prompt(violations: &[Violation]) -> CompletionRequest {
    let violations_json =
        serde_json::to_string_pretty(violations).unwrap_or_else(|_| "[]".to_string());
    let prompt = format!(
        "You are an expert React accessibility engineer. Below is a JSON array of accessibility violations \
         detected in a JSX webpage. For each violation:\n\
         - Identify the JSX element in the `html` field.\n\
         - Fix the element by adding accessibility attributes like `aria-label`, `role`, `tabIndex`, etc.\n\
         - For color-contrast violations:\n\
           - Use the `fg` (foreground), `bg` (background), and `contrast` values from the input.\n\
           - If contrast < 4.5:1, suggest a new foreground or background color to meet WCAG 2.1 AA (>= 4.5:1).\n\
           - Only update the `style={{{{ color: ..., backgroundColor: ... }}}}` part of the JSX tag or its `className` if applicable.\n\
           - Do NOT remove any styles, props, or attributes.\n\
         \n\
         Strict rules:\n\
         - ONLY modify the JSX element shown in the `html` field.\n\
         - DO NOT remove or replace any unrelated code.\n\
         - DO NOT write comments like `// logic unchanged` or `// styles unchanged`.\n\
         - DO NOT remove or rewrite styles, logic, imports, or component structure.\n\
         - DO NOT reformat or restructure surrounding JSX.\n\
         - Return ONLY valid JSX elements, one per violation.\n\
         \n\
         Violations:\n{violations_json}"
    );
    CompletionRequest {
        prompt,
        max_tokens: FRAGMENT_MAX_TOKENS,
        temperature: FRAGMENT_TEMPERATURE,
    }
}

/// Build the full-file merge request from the current source and the latest
/// fragment batch.
pub fn merge_prompt(original: &str, fragments: &str) -> CompletionRequest {
    let prompt = format!(
        "Here is a full React JSX file and some small JSX fragments that apply accessibility fixes \
         like `aria-label`, `role`, `alt`, `tabIndex`, etc.\n\
         - Your job is to patch the full JSX file by replacing matching elements with their fixed versions.\n\
         - Keep the entire JSX file intact; do NOT remove any sections like <Button>, <img>, <Table>.\n\
         - Do NOT add summaries, comments, or extra headers like 'The key changes'.\n\
         - Output only the updated JSX file, no explanations.\n\
         - Only apply the fixes provided; DO NOT invent new changes.\n\n\
         Original JSX:\n\n{original}\n\nFix Fragments:\n\n{fragments}"
    );
    CompletionRequest {
        prompt,
        max_tokens: MERGE_MAX_TOKENS,
        temperature: MERGE_TEMPERATURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mend_core::ViolationNode;

    #[test]
    fn fragment_prompt_embeds_violation_data() {
        let violations = vec![Violation {
            id: "color-contrast".to_string(),
            nodes: vec![ViolationNode {
                html: Some("<span>low contrast</span>".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }];
        let request = fragment_prompt(&violations);
        assert!(request.prompt.contains("color-contrast"));
        assert!(request.prompt.contains("low contrast"));
        assert_eq!(request.max_tokens, 3000);
        assert_eq!(request.temperature, 0.4);
    }

    #[test]
    fn merge_prompt_embeds_file_and_fragments() {
        let request = merge_prompt("const Page = () => <div/>;", "<div aria-label=\"x\"/>");
        assert!(request.prompt.contains("const Page"));
        assert!(request.prompt.contains("Fix Fragments"));
        assert_eq!(request.max_tokens, 2000);
        assert_eq!(request.temperature, 0.3);
    }
}

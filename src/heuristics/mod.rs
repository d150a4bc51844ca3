//! @acp:module "Heuristics"
//! @acp:summary "Presentation heuristics for boolean inputs and project selection"
//! @acp:domain cli
//! @acp:layer analysis
//!
//! Both classifiers only influence how generated documentation reads. They never
//! reject or validate metadata.

use crate::metadata::InputSpec;

/// Name prefixes conventionally used for boolean inputs
pub const BOOLEAN_PREFIXES: &[&str] = &["include-", "ignore-", "enable-", "disable-"];

/// Description marker for boolean inputs
pub const BOOLEAN_MARKER: &str = "(true/false)";

/// Whether an input reads as a boolean switch
pub fn looks_boolean_input(input: &InputSpec) -> bool {
    if input.description.to_lowercase().contains(BOOLEAN_MARKER) {
        return true;
    }

    let name = input.name.to_lowercase();
    BOOLEAN_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

const BY_NAME_RULES: &[&str] = &["- Use `project` to select the target project by name."];

const BY_ID_RULES: &[&str] = &["- Use `project-id` to select the target project by ID."];

const EXACTLY_ONE_RULES: &[&str] = &[
    "- Provide **exactly one** of `project` or `project-id`.",
    "- If both are supplied, the action should fail fast (ambiguous).",
];

/// How an action lets callers pick the project it operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSelection {
    /// Only a `project` input
    ByName,
    /// Only a `project-id` (or `project_id`) input
    ById,
    /// Both inputs; callers must supply exactly one
    ExactlyOne,
}

impl ProjectSelection {
    /// Rule lines, without the heading
    pub fn rules(&self) -> &'static [&'static str] {
        match self {
            ProjectSelection::ByName => BY_NAME_RULES,
            ProjectSelection::ById => BY_ID_RULES,
            ProjectSelection::ExactlyOne => EXACTLY_ONE_RULES,
        }
    }

    /// Markdown subsection documenting the selection contract
    pub fn fragment(&self) -> String {
        let mut lines = vec!["### Project selection rules", ""];
        lines.extend_from_slice(self.rules());
        lines.push("");
        lines.join("\n")
    }
}

/// Detect project-selection semantics from the declared input names
pub fn infer_project_selection<'a, I>(names: I) -> Option<ProjectSelection>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut has_project = false;
    let mut has_project_id = false;

    for name in names {
        match name.to_lowercase().as_str() {
            "project" => has_project = true,
            "project-id" | "project_id" => has_project_id = true,
            _ => {}
        }
    }

    match (has_project, has_project_id) {
        (true, true) => Some(ProjectSelection::ExactlyOne),
        (true, false) => Some(ProjectSelection::ByName),
        (false, true) => Some(ProjectSelection::ById),
        (false, false) => None,
    }
}

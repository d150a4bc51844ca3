//! @acp:module "Block Renderer"
//! @acp:summary "Builds the generated README section from action metadata"
//! @acp:domain cli
//! @acp:layer output
//!
//! The block is a pure function of the action identity, its metadata and the
//! render options. Sections appear in a fixed order:
//!
//! 1. Title and description
//! 2. Identity (namespace, action, usage reference)
//! 3. Usage example (required inputs first)
//! 4. Project selection rules, when the inputs call for them
//! 5. Inputs table
//! 6. Outputs table, or an explicit "no outputs" sentence
//! 7. Implementation details
//! 8. Notes

use super::markdown::{escape_cell, neutralize_comments, normalize_markdown, table};
use super::RenderOptions;
use crate::heuristics::{infer_project_selection, looks_boolean_input};
use crate::metadata::{ActionIdentity, ActionMetadata, InputSpec};

const RULE: &str = "---";

/// Render the documentation block (without markers)
pub fn render_block(
    identity: &ActionIdentity,
    meta: &ActionMetadata,
    options: &RenderOptions,
) -> String {
    let title = meta.title(identity);
    let usage_ref = format!(
        "{}/{}/{}@{}",
        options.repo_slug, identity.namespace, identity.action, options.version
    );

    let mut out: Vec<String> = Vec::new();

    out.push(format!("# {}", title));
    out.push(String::new());

    let description = meta.description.as_deref().unwrap_or("").trim();
    if !description.is_empty() {
        out.push(description.to_string());
        out.push(String::new());
    }

    render_identity(&mut out, identity, &usage_ref, options);
    render_usage(&mut out, identity, meta, &title, &usage_ref);

    if let Some(selection) = infer_project_selection(meta.input_names()) {
        out.push(selection.fragment());
        push_rule(&mut out);
    }

    if !meta.inputs.is_empty() {
        render_inputs(&mut out, meta);
    }

    render_outputs(&mut out, meta, options);
    render_implementation(&mut out, meta);
    render_notes(&mut out, options);

    // Metadata text is embedded verbatim, so comment openers are defused here
    normalize_markdown(&neutralize_comments(&out.join("\n")))
}

fn push_rule(out: &mut Vec<String>) {
    out.push(RULE.to_string());
    out.push(String::new());
}

fn render_identity(
    out: &mut Vec<String>,
    identity: &ActionIdentity,
    usage_ref: &str,
    options: &RenderOptions,
) {
    out.push(format!("> Namespace: `{}`", identity.namespace));
    out.push(format!("> Action: `{}`", identity.action));
    out.push(format!("> Usage: `{}`", usage_ref));
    out.push(String::new());
    out.push(format!(
        "... where `{}` is the version of the action you wish to use.",
        options.version
    ));
    out.push(String::new());
    push_rule(out);
}

fn render_usage(
    out: &mut Vec<String>,
    identity: &ActionIdentity,
    meta: &ActionMetadata,
    title: &str,
    usage_ref: &str,
) {
    let job_id = identity.job_id();

    out.push("## 🚀 Usage".to_string());
    out.push(String::new());
    out.push("Minimal example:".to_string());
    out.push(String::new());
    out.push("```yaml".to_string());
    out.push("jobs:".to_string());
    out.push(format!("  {}:", job_id));
    out.push("    runs-on: ubuntu-latest".to_string());
    out.push(String::new());
    out.push("    steps:".to_string());
    out.push("      - name: Checkout repository".to_string());
    out.push("        uses: actions/checkout@v4".to_string());
    out.push(String::new());
    out.push(format!("      - name: Run {}", title));
    out.push(format!("        id: {}", job_id));
    out.push(format!("        uses: {}", usage_ref));

    if !meta.inputs.is_empty() {
        out.push("        with:".to_string());
        for input in meta.inputs_required_first() {
            out.push(format!("          {}", usage_line(input)));
        }
    }

    out.push("```".to_string());
    out.push(String::new());
    push_rule(out);
}

/// A `with:` entry; optional inputs are commented out
fn usage_line(input: &InputSpec) -> String {
    if input.required {
        return format!("{}: <required>", input.name);
    }

    let value = match input.default.as_deref() {
        Some(default) => default,
        None if looks_boolean_input(input) => "false",
        None => "<optional>",
    };
    format!("# {}: {}", input.name, value)
}

fn render_inputs(out: &mut Vec<String>, meta: &ActionMetadata) {
    let rows: Vec<Vec<String>> = meta
        .inputs
        .iter()
        .map(|input| {
            vec![
                format!("`{}`", input.name),
                if input.required { "✅" } else { "❌" }.to_string(),
                default_cell(input),
                escape_cell(&input.description),
            ]
        })
        .collect();

    out.push("## 🔧 Inputs".to_string());
    out.push(String::new());
    out.extend(table(&["Name", "Required", "Default", "Description"], &rows));
    out.push(String::new());
    push_rule(out);
}

fn default_cell(input: &InputSpec) -> String {
    match input.default.as_deref() {
        Some(default) => escape_cell(default),
        None if looks_boolean_input(input) => "false (if omitted)".to_string(),
        None => String::new(),
    }
}

fn render_outputs(out: &mut Vec<String>, meta: &ActionMetadata, options: &RenderOptions) {
    out.push("## 📤 Outputs".to_string());
    out.push(String::new());

    if meta.outputs.is_empty() {
        out.push(no_outputs_sentence(options));
    } else {
        let rows: Vec<Vec<String>> = meta
            .outputs
            .iter()
            .map(|output| {
                vec![
                    format!("`{}`", output.name),
                    escape_cell(&output.description),
                ]
            })
            .collect();
        out.extend(table(&["Name", "Description"], &rows));
    }

    out.push(String::new());
    push_rule(out);
}

/// Sentence emitted in place of the outputs table
pub fn no_outputs_sentence(options: &RenderOptions) -> String {
    format!(
        "_This action does not declare any outputs in `{}`._",
        options.metadata_file
    )
}

fn render_implementation(out: &mut Vec<String>, meta: &ActionMetadata) {
    out.push("## 🧱 Implementation details".to_string());
    out.push(String::new());
    out.push(format!(
        "- `runs.using`: `{}`",
        meta.runs.using.as_deref().unwrap_or("N/A")
    ));
    if let Some(image) = meta.runs.image.as_deref() {
        out.push(format!("- `runs.image`: `{}`", image));
    }
    out.push(String::new());
    push_rule(out);
}

fn render_notes(out: &mut Vec<String>, options: &RenderOptions) {
    out.push("## 🧩 Notes".to_string());
    out.push(String::new());
    out.push(format!(
        "- The section above is auto-generated from `{}`.",
        options.metadata_file
    ));
    out.push(format!(
        "- To edit documentation, update `{}` (name/description/inputs/outputs).",
        options.metadata_file
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{OutputSpec, RunsSpec};
    use pretty_assertions::assert_eq;

    fn identity() -> ActionIdentity {
        ActionIdentity::new("deploy", "release")
    }

    fn deploy_metadata() -> ActionMetadata {
        ActionMetadata {
            name: Some("Deploy".to_string()),
            inputs: vec![
                InputSpec::new("target").required(),
                InputSpec::new("enable-dry-run"),
            ],
            ..Default::default()
        }
    }

    fn render(meta: &ActionMetadata) -> String {
        render_block(&identity(), meta, &RenderOptions::default())
    }

    #[test]
    fn test_deploy_example() {
        let block = render(&deploy_metadata());

        assert!(block.starts_with("# Deploy\n"));
        let target = block.find("          target: <required>").unwrap();
        let dry_run = block.find("          # enable-dry-run: false").unwrap();
        assert!(target < dry_run);
        assert!(block.contains("## 📤 Outputs\n\n_This action does not declare any outputs in `action.yml`._\n"));
    }

    #[test]
    fn test_identity_block() {
        let block = render(&deploy_metadata());
        assert!(block.contains(
            "> Namespace: `deploy`\n> Action: `release`\n> Usage: `${{ github.repository }}/deploy/release@v1`\n\n... where `v1` is the version of the action you wish to use."
        ));
    }

    #[test]
    fn test_required_inputs_listed_first() {
        let meta = ActionMetadata {
            inputs: vec![
                InputSpec::new("opt-a"),
                InputSpec::new("req-a").required(),
                InputSpec::new("opt-b").with_default("main"),
                InputSpec::new("req-b").required(),
            ],
            ..Default::default()
        };
        let block = render(&meta);
        let with = block.split("        with:\n").nth(1).unwrap();
        let lines: Vec<&str> = with.lines().take(4).map(str::trim).collect();
        assert_eq!(
            lines,
            vec![
                "req-a: <required>",
                "req-b: <required>",
                "# opt-a: <optional>",
                "# opt-b: main",
            ]
        );
    }

    #[test]
    fn test_inputs_table_uses_declaration_order() {
        let meta = ActionMetadata {
            inputs: vec![
                InputSpec::new("opt").with_description("Optional | piped"),
                InputSpec::new("req").required(),
            ],
            ..Default::default()
        };
        let block = render(&meta);
        assert!(block.contains(
            "| Name | Required | Default | Description |\n| --- | --- | --- | --- |\n| `opt` | ❌ |  | Optional \\| piped |\n| `req` | ✅ |  |  |\n"
        ));
    }

    #[test]
    fn test_boolean_default_cell() {
        let meta = ActionMetadata {
            inputs: vec![InputSpec::new("include-logs")],
            ..Default::default()
        };
        assert!(render(&meta).contains("| `include-logs` | ❌ | false (if omitted) |  |"));
    }

    #[test]
    fn test_no_inputs_omits_with_and_table() {
        let block = render(&ActionMetadata::default());
        assert!(block.starts_with("# deploy/release\n"));
        assert!(!block.contains("with:"));
        assert!(!block.contains("## 🔧 Inputs"));
        assert!(block.contains("`runs.using`: `N/A`"));
    }

    #[test]
    fn test_outputs_table() {
        let meta = ActionMetadata {
            outputs: vec![OutputSpec::new("url", "Deployed | URL")],
            ..Default::default()
        };
        let block = render(&meta);
        assert!(block.contains("| Name | Description |\n| --- | --- |\n| `url` | Deployed \\| URL |\n"));
        assert!(!block.contains("does not declare any outputs"));
    }

    #[test]
    fn test_project_selection_section() {
        let meta = ActionMetadata {
            inputs: vec![InputSpec::new("project"), InputSpec::new("project-id")],
            ..Default::default()
        };
        let block = render(&meta);
        assert!(block.contains("### Project selection rules\n\n- Provide **exactly one** of `project` or `project-id`.\n- If both are supplied, the action should fail fast (ambiguous).\n\n---\n"));
    }

    #[test]
    fn test_implementation_details_with_image() {
        let meta = ActionMetadata {
            runs: RunsSpec {
                using: Some("docker".to_string()),
                image: Some("docker://ghcr.io/acme/tool:1".to_string()),
            },
            ..Default::default()
        };
        let block = render(&meta);
        assert!(block.contains(
            "- `runs.using`: `docker`\n- `runs.image`: `docker://ghcr.io/acme/tool:1`\n"
        ));
    }

    #[test]
    fn test_custom_placeholders() {
        let options = RenderOptions {
            repo_slug: "acme/actions".to_string(),
            version: "v2".to_string(),
            metadata_file: "action.yaml".to_string(),
        };
        let block = render_block(&identity(), &ActionMetadata::default(), &options);
        assert!(block.contains("uses: acme/actions/deploy/release@v2"));
        assert!(block.contains("auto-generated from `action.yaml`"));
    }

    #[test]
    fn test_block_is_normalized() {
        let block = render(&deploy_metadata());
        assert!(block.ends_with("(name/description/inputs/outputs).\n"));
        assert!(!block.ends_with("\n\n"));
        assert!(block.lines().all(|line| !line.ends_with(' ')));
        assert_eq!(normalize_markdown(&block), block);
    }

    #[test]
    fn test_metadata_cannot_forge_markers() {
        let meta = ActionMetadata {
            name: Some("<!-- BEGIN MCIX-ACTION-DOCS -->".to_string()),
            description: Some("Wraps <!-- END MCIX-ACTION-DOCS --> markers".to_string()),
            inputs: vec![InputSpec::new("marker").with_default("<!-- END MCIX-ACTION-DOCS -->")],
            ..Default::default()
        };
        let block = render_block(&identity(), &meta, &RenderOptions::default());

        assert!(!block.contains("<!--"));
        assert!(block.contains("Wraps &lt;!-- END MCIX-ACTION-DOCS --> markers"));
    }
}

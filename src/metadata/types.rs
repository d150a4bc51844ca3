//! @acp:module "Action Metadata Types"
//! @acp:summary "Typed snapshot of an action.yml file"
//! @acp:domain cli
//! @acp:layer types

use std::path::Path;

/// Declared contents of a single action metadata file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Inputs in declaration order
    pub inputs: Vec<InputSpec>,
    /// Outputs in declaration order
    pub outputs: Vec<OutputSpec>,
    pub runs: RunsSpec,
}

/// A declared action input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSpec {
    pub name: String,
    pub required: bool,
    /// Default rendered as plain text; `None` for null or empty defaults
    pub default: Option<String>,
    pub description: String,
}

/// A declared action output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSpec {
    pub name: String,
    pub description: String,
}

/// The `runs` section of an action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunsSpec {
    pub using: Option<String>,
    pub image: Option<String>,
}

impl InputSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        let default = default.into();
        self.default = if default.is_empty() { None } else { Some(default) };
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl OutputSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl ActionMetadata {
    /// Input names in declaration order
    pub fn input_names(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(|i| i.name.as_str())
    }

    /// Required inputs first, then optional ones, each group in declaration order
    pub fn inputs_required_first(&self) -> Vec<&InputSpec> {
        let (required, optional): (Vec<&InputSpec>, Vec<&InputSpec>) =
            self.inputs.iter().partition(|i| i.required);
        required.into_iter().chain(optional).collect()
    }

    /// Display title: the declared name, or `namespace/action`
    pub fn title(&self, identity: &ActionIdentity) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => identity.to_string(),
        }
    }
}

/// Namespace/action pair derived from the directories enclosing a metadata file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionIdentity {
    pub namespace: String,
    pub action: String,
}

impl ActionIdentity {
    pub fn new(namespace: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            action: action.into(),
        }
    }

    /// Derive the identity from `<namespace>/<action>/<metadata file>`
    pub fn from_metadata_path(path: &Path) -> Option<Self> {
        let action_dir = path.parent()?;
        let action = action_dir.file_name()?.to_str()?;
        let namespace = action_dir.parent()?.file_name()?.to_str()?;
        Some(Self::new(namespace, action))
    }

    /// Job and step id used in the usage example
    pub fn job_id(&self) -> String {
        format!("{}-{}", self.namespace, self.action)
    }
}

impl std::fmt::Display for ActionIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.action)
    }
}

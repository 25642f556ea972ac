use thiserror::Error;

/// A `link_styles` configuration that does not match the model.
///
/// Always fatal to the form build that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error(
        "Field '{field}' (base: '{base}') does not exist in model {model}. \
         Check the link_styles configuration in {admin}."
    )]
    MissingField {
        field: String,
        base: String,
        model: String,
        admin: String,
    },

    #[error(
        "Field '{field}' (base: '{base}') in model {model} must be an instance of {expected}, \
         but found {found}. Check the link_styles configuration in {admin}."
    )]
    WrongCapability {
        field: String,
        base: String,
        model: String,
        admin: String,
        expected: String,
        found: String,
    },
}

impl ConfigurationError {
    /// The field name as written in the configuration.
    pub fn field(&self) -> &str {
        match self {
            ConfigurationError::MissingField { field, .. }
            | ConfigurationError::WrongCapability { field, .. } => field,
        }
    }

    pub fn base(&self) -> &str {
        match self {
            ConfigurationError::MissingField { base, .. }
            | ConfigurationError::WrongCapability { base, .. } => base,
        }
    }

    pub fn model(&self) -> &str {
        match self {
            ConfigurationError::MissingField { model, .. }
            | ConfigurationError::WrongCapability { model, .. } => model,
        }
    }
}

/// A project file that cannot be used.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("default language '{language}' is not one of the configured languages [{languages}]")]
    UnknownDefaultLanguage { language: String, languages: String },
}

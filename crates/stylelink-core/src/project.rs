//! Project files: one model, its optional translation metadata and the
//! `link_styles` configuration of the admin editing it.

use serde::{Deserialize, Serialize};

use crate::catalogs::DEFAULT_ADMIN_NAME;
use crate::error::ProjectError;
use crate::localization::FieldCatalog;
use crate::resolver::LinkResolver;
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
    pub model: ModelMeta,
    /// Absent when the host has no translation layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localization: Option<FieldCatalog>,
    #[serde(default)]
    pub link_styles: LinkSpec,
    /// Fields the form exposes; derived from the model when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_fields: Option<Vec<String>>,
    #[serde(default)]
    pub settings: LinkerSettings,
}

impl Project {
    pub fn from_yaml_str(content: &str) -> Result<Self, ProjectError> {
        let project: Self = serde_yaml::from_str(content)?;
        project.check()?;
        Ok(project)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ProjectError> {
        let project: Self = serde_json::from_str(content)?;
        project.check()?;
        Ok(project)
    }

    /// Reject localization settings the translation layer would refuse.
    pub fn check(&self) -> Result<(), ProjectError> {
        if let Some(catalog) = &self.localization {
            if let Some(language) = catalog.unsupported_default_language() {
                return Err(ProjectError::UnknownDefaultLanguage {
                    language: language.to_string(),
                    languages: catalog.languages.join(", "),
                });
            }
        }
        Ok(())
    }

    pub fn admin_name(&self) -> &str {
        self.admin.as_deref().unwrap_or(DEFAULT_ADMIN_NAME)
    }

    pub fn resolver(&self) -> LinkResolver {
        LinkResolver::new(self.localization.clone())
            .with_settings(self.settings.clone())
            .with_admin_name(self.admin_name())
    }

    /// A blank form with the configured (or derived) field list.
    pub fn build_form(&self, resolver: &LinkResolver) -> Form {
        match &self.form_fields {
            Some(names) => Form::from_names(names.iter().cloned()),
            None => Form::from_names(resolver.form_field_names(&self.model)),
        }
    }
}

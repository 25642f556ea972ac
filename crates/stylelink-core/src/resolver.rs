use tracing::warn;

use crate::catalogs::DEFAULT_ADMIN_NAME;
use crate::error::ConfigurationError;
use crate::localization::FieldCatalog;
use crate::strategy::{LinkStrategy, LocalizedLinks, PlainLinks};
use crate::types::*;
use crate::validator::{self, ValidateContext};

/// Validates `link_styles` configurations and expands them into concrete
/// form field links.
///
/// The translation layer, if any, is fixed at construction: pass `None` when
/// the host has no per-language fields.
pub struct LinkResolver {
    strategy: Box<dyn LinkStrategy>,
    settings: LinkerSettings,
    admin: String,
}

impl LinkResolver {
    pub fn new(catalog: Option<FieldCatalog>) -> Self {
        let strategy: Box<dyn LinkStrategy> = match catalog {
            Some(catalog) => {
                if let Some(lang) = catalog.unsupported_default_language() {
                    warn!(
                        default_language = lang,
                        "default language is not a configured language; \
                         untranslatable fields will not be linked"
                    );
                }
                Box::new(LocalizedLinks::new(catalog))
            }
            None => Box::new(PlainLinks),
        };
        Self {
            strategy,
            settings: LinkerSettings::default(),
            admin: DEFAULT_ADMIN_NAME.to_string(),
        }
    }

    pub fn with_settings(mut self, settings: LinkerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Name of the admin owning the configuration, used in error messages.
    pub fn with_admin_name(mut self, admin: impl Into<String>) -> Self {
        self.admin = admin.into();
        self
    }

    pub fn settings(&self) -> &LinkerSettings {
        &self.settings
    }

    pub fn catalog(&self) -> Option<&FieldCatalog> {
        self.strategy.catalog()
    }

    pub fn is_localized(&self) -> bool {
        self.catalog().is_some()
    }

    pub fn base_name<'a>(&'a self, field: &'a str) -> &'a str {
        self.strategy.base_name(field)
    }

    /// Check that every configured field exists on `model` with the right editor type.
    pub fn validate(&self, spec: &LinkSpec, model: &ModelMeta) -> Result<(), ConfigurationError> {
        let ctx = ValidateContext {
            strategy: self.strategy.as_ref(),
            model,
            settings: &self.settings,
            admin: &self.admin,
        };
        validator::validate(spec, &ctx)
    }

    /// Expand `spec` into style field → target fields.
    pub fn resolve(&self, spec: &LinkSpec) -> ResolvedLinkMap {
        self.strategy.resolve(spec)
    }

    /// Form field names a host would expose for `model` by default.
    pub fn form_field_names(&self, model: &ModelMeta) -> Vec<String> {
        match self.catalog() {
            Some(catalog) => catalog.form_field_names(model),
            None => model.fields.iter().map(|f| f.name.clone()).collect(),
        }
    }
}

impl Default for LinkResolver {
    fn default() -> Self {
        Self::new(None)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use crate::error::ConfigurationError;
use crate::strategy::LinkStrategy;
use crate::types::*;

/// Which side of a link a configured field sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRole {
    Style,
    Content,
}

impl LinkRole {
    pub fn required_capability(self) -> FieldCapability {
        match self {
            LinkRole::Style => FieldCapability::CodeEditor,
            LinkRole::Content => FieldCapability::HtmlEditor,
        }
    }
}

/// Everything a field check needs besides the field name.
pub struct ValidateContext<'a> {
    pub strategy: &'a dyn LinkStrategy,
    pub model: &'a ModelMeta,
    pub settings: &'a LinkerSettings,
    pub admin: &'a str,
}

/// Check every configured field against the model: entries in order, the
/// style field before its html fields. Stops at the first problem.
pub fn validate(spec: &LinkSpec, ctx: &ValidateContext<'_>) -> Result<(), ConfigurationError> {
    for entry in spec.entries() {
        validate_field(&entry.style_field, LinkRole::Style, ctx)?;
        for html_field in &entry.html_fields {
            validate_field(html_field, LinkRole::Content, ctx)?;
        }
    }
    Ok(())
}

fn validate_field(
    field_name: &str,
    role: LinkRole,
    ctx: &ValidateContext<'_>,
) -> Result<(), ConfigurationError> {
    let base = ctx.strategy.base_name(field_name);
    let Some(field) = ctx.model.get_field(base) else {
        return Err(ConfigurationError::MissingField {
            field: field_name.to_string(),
            base: base.to_string(),
            model: ctx.model.name.clone(),
            admin: ctx.admin.to_string(),
        });
    };

    let required = role.required_capability();
    if ctx.settings.capability_of(&field.field_type) != required {
        return Err(ConfigurationError::WrongCapability {
            field: field_name.to_string(),
            base: base.to_string(),
            model: ctx.model.name.clone(),
            admin: ctx.admin.to_string(),
            expected: ctx.settings.expected_type_name(&required),
            found: field.field_type.clone(),
        });
    }

    Ok(())
}

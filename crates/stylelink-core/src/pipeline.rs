//! Form post-processing stage: validate, resolve and stamp in one call.

use tracing::debug;

use crate::error::ConfigurationError;
use crate::resolver::LinkResolver;
use crate::stamper::{stamp, StampReport};
use crate::types::*;

/// Link the style and content widgets of a freshly built `form`.
///
/// An empty spec leaves the form untouched without consulting the model.
pub fn link_form(
    resolver: &LinkResolver,
    spec: &LinkSpec,
    model: &ModelMeta,
    form: &mut Form,
) -> Result<StampReport, ConfigurationError> {
    if spec.is_empty() {
        return Ok(StampReport::default());
    }

    resolver.validate(spec, model)?;
    let links = resolver.resolve(spec);
    let report = stamp(form, &links);
    debug!(
        model = %model.name,
        sources = report.sources,
        targets = report.targets,
        skipped = report.skipped,
        "linked style fields"
    );
    Ok(report)
}

/// Add the preview script to `media` unless it is already listed.
pub fn link_media(media: &mut Media, settings: &LinkerSettings) {
    if !media.js.iter().any(|js| js == &settings.media_js) {
        media.js.push(settings.media_js.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogs::{ATTR_SOURCE_FOR, PREVIEW_SCRIPT};
    use crate::localization::FieldCatalog;

    fn model() -> ModelMeta {
        ModelMeta::new(
            "Article",
            vec![
                ModelField::new("styles", "MonacoField"),
                ModelField::new("body", "HTMLField"),
            ],
        )
    }

    #[test]
    fn empty_spec_skips_validation() {
        let resolver = LinkResolver::default();
        let empty_model = ModelMeta::new("Empty", vec![]);
        let mut form = Form::from_names(["x"]);
        let report = link_form(&resolver, &LinkSpec::default(), &empty_model, &mut form).unwrap();
        assert_eq!(report, StampReport::default());
    }

    #[test]
    fn invalid_spec_blocks_form() {
        let resolver = LinkResolver::default();
        let spec = LinkSpec::from(vec![LinkEntry::new("body", ["styles"])]);
        let mut form = Form::from_names(["styles", "body"]);
        assert!(link_form(&resolver, &spec, &model(), &mut form).is_err());
        assert!(form.fields.iter().all(|f| f.widget.attrs.is_empty()));
    }

    #[test]
    fn localized_form_is_stamped() {
        let resolver = LinkResolver::new(Some(FieldCatalog::new(
            ["en", "fr"],
            None,
            ["styles", "body"],
        )));
        let spec = LinkSpec::from(vec![LinkEntry::new("styles", ["body"])]);
        let mut form = Form::from_names(resolver.form_field_names(&model()));

        let report = link_form(&resolver, &spec, &model(), &mut form).unwrap();

        assert_eq!(report.sources, 2);
        assert_eq!(
            form.widget_attr("styles_fr", ATTR_SOURCE_FOR),
            Some(r#"["body_fr"]"#)
        );
    }

    #[test]
    fn media_script_added_once() {
        let settings = LinkerSettings::default();
        let mut media = Media {
            js: vec!["admin/js/core.js".into()],
            css: vec![],
        };
        link_media(&mut media, &settings);
        link_media(&mut media, &settings);
        assert_eq!(media.js, vec!["admin/js/core.js", PREVIEW_SCRIPT]);
    }
}

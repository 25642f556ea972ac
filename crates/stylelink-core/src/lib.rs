//! Links code-editor (CSS) fields to the rich-text fields they style, for
//! live preview in admin forms.
//!
//! The host builds a form, then hands it to [`link_form`], which validates the
//! `link_styles` configuration against the model, expands it across languages
//! when a [`FieldCatalog`] is present, and stamps `data-style-*` attributes on
//! the widgets.

pub mod catalogs;
pub mod error;
pub mod ffi;
pub mod localization;
pub mod pipeline;
pub mod project;
pub mod resolver;
pub mod stamper;
pub mod strategy;
pub mod types;
pub mod validator;

pub use catalogs::{ATTR_SOURCE_FOR, ATTR_TARGET_OF, PREVIEW_SCRIPT};
pub use error::{ConfigurationError, ProjectError};
pub use ffi::{resolve_to_json, stamp_to_json, validate_to_json};
pub use localization::{localized_fieldname, FieldCatalog};
pub use pipeline::{link_form, link_media};
pub use project::Project;
pub use resolver::LinkResolver;
pub use stamper::{stamp, StampReport};
pub use types::*;

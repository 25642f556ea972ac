/// Model field types that back a code (CSS) editor.
pub const CODE_EDITOR_TYPES: &[&str] = &["MonacoField"];

/// Model field types that back a rich HTML editor.
pub const HTML_EDITOR_TYPES: &[&str] = &["HTMLField"];

/// Set on a style field's widget: JSON list of the content fields it styles.
pub const ATTR_SOURCE_FOR: &str = "data-style-source-for";

/// Set on a content field's widget: name of the style field previewing it.
pub const ATTR_TARGET_OF: &str = "data-style-target-of";

/// Browser script that reads the two attributes above.
pub const PREVIEW_SCRIPT: &str = "admin_style_linker/js/live_style_preview.js";

/// Admin name used in error messages when the host does not supply one.
pub const DEFAULT_ADMIN_NAME: &str = "ModelAdmin";

//! Mutation rules applied to the project tree
//!
//! Each rule is total: a missing prerequisite logs a warning (or an info
//! line on the removal side) and skips the mutation. The only failures that
//! propagate are malformed JSON documents and I/O errors.

pub mod angular_config;
pub mod assets;
pub mod component;
pub mod manifest;
pub mod stylesheet;

/// Paths managed by the rules, project-root-relative
pub mod paths {
    pub const ANGULAR_JSON: &str = "angular.json";
    pub const PACKAGE_JSON: &str = "package.json";
    pub const TAILWIND_CONFIG: &str = "tailwind.config.js";
    pub const POSTCSS_CONFIG: &str = "postcss.config.js";
    pub const STYLESHEET: &str = "src/styles.css";
    pub const SERVICES_DIR: &str = "src/app/services";
    pub const SERVICES_KEEP: &str = "src/app/services/.gitkeep";
    pub const THEME_SERVICE: &str = "src/app/services/theme.service.ts";
    pub const APP_COMPONENT: &str = "src/app/app.component.ts";
    pub const APP_CONFIG: &str = "src/app/app.config.ts";
}

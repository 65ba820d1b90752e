//! Build-time configuration for the blog: global site data for templates and the theme handed to
//! the CSS tool.
//!
//! Both providers are pure. Load an [`Environment`] once at startup and pass it in.

pub mod site;
pub mod theme;

pub use siteconf_config::BuildMode;
pub use siteconf_config::Environment;
pub use site::site_config;
pub use theme::theme_config;

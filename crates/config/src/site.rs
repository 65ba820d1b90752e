use std::fmt;

/// Identity and integration settings, exposed to templates as global data.
///
/// Field names are serialized the way templates look them up (`title`, `socialGitHub`, ...).
/// Unset optional fields are left out entirely so templates can test for their presence.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SiteConfig {
    /// Object storage base URL
    pub cloud_url: String,
    pub cloudinary_header_url: String,
    pub cloudinary_url: String,
    pub title: String,
    /// Canonical URL used to build absolute links
    pub url: String,
    /// Profile image for the sidebar
    pub image: String,
    pub image_alt: String,
    pub author: String,
    /// Rich-text description, may contain markup
    pub description: String,
    pub description_no_tags: String,
    /// Social sharing image for pages that don't set their own
    pub open_graph_default_image: String,
    #[serde(rename = "socialGitHub", skip_serializing_if = "Option::is_none")]
    pub social_github: Option<String>,
    #[serde(rename = "socialLinkedIn", skip_serializing_if = "Option::is_none")]
    pub social_linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_twitter: Option<String>,
    #[serde(rename = "socialYouTube", skip_serializing_if = "Option::is_none")]
    pub social_youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_analytics: Option<String>,
    pub algolia_search: SearchConfig,
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

/// Hosted search integration.
///
/// `enabled` is a switch of its own: credentials may be set while search is off, and search may
/// be on while credentials are missing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SearchConfig {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    /// Deployed branch
    pub branch: String,
}

impl SearchConfig {
    pub fn has_credentials(&self) -> bool {
        self.app_id.is_some() && self.search_api_key.is_some() && self.site_id.is_some()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            app_id: None,
            search_api_key: None,
            site_id: None,
            branch: "main".to_owned(),
        }
    }
}

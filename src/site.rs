use siteconf_config::Environment;
use siteconf_config::SearchConfig;
use siteconf_config::SiteConfig;

pub const ALGOLIA_APP_ID: &str = "ALGOLIA_APP_ID";
pub const ALGOLIA_SEARCH_API_KEY: &str = "ALGOLIA_SEARCH_API_KEY";
pub const ALGOLIA_SITE_ID: &str = "ALGOLIA_SITE_ID";

/// Global site data for templates.
///
/// Everything is fixed except the search credentials, which are taken verbatim from `env` and are
/// left unset when the variable is missing.
pub fn site_config(env: &Environment) -> SiteConfig {
    let algolia_search = SearchConfig {
        // Shows the search bar; independent of whether the credentials below are set.
        enabled: false,
        app_id: env.get(ALGOLIA_APP_ID).map(str::to_owned),
        search_api_key: env.get(ALGOLIA_SEARCH_API_KEY).map(str::to_owned),
        site_id: env.get(ALGOLIA_SITE_ID).map(str::to_owned),
        branch: "main".to_owned(),
    };
    if !algolia_search.has_credentials() {
        log::debug!("Search credentials incomplete, leaving unset fields out");
    }

    SiteConfig {
        cloud_url: "https://objectstorage.us-ashburn-1.oraclecloud.com/n/idmqjyw9i2ib/b/blog/o/"
            .to_owned(),
        cloudinary_header_url: "https://res.cloudinary.com/strozstuff/image/fetch/c_fit,w_650/"
            .to_owned(),
        cloudinary_url: "https://res.cloudinary.com/strozstuff/image/fetch/".to_owned(),
        title: "The Stroz".to_owned(),
        url: "https://stroz.dev".to_owned(),
        image: "opengraph.jpg".to_owned(),
        image_alt: "Scott Stroz".to_owned(),
        author: "Scott Stroz".to_owned(),
        description: "Husband. Father. Coder.<br/>Golfer. Gamer.<br />Die-hard Giants fan."
            .to_owned(),
        description_no_tags: "Husband. Father. Coder. Golfer. Gamer. Die-hard Giants fan."
            .to_owned(),
        open_graph_default_image: "opengraph.jpg".to_owned(),
        social_github: Some("boyzoid".to_owned()),
        social_linkedin: Some("scott-stroz".to_owned()),
        social_twitter: Some("@boyzoid".to_owned()),
        social_youtube: None,
        google_analytics: Some("G-060Z992R2K".to_owned()),
        algolia_search,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn credentials() -> Environment {
        [
            (ALGOLIA_APP_ID, "APP123"),
            (ALGOLIA_SEARCH_API_KEY, "search-key"),
            (ALGOLIA_SITE_ID, "site-42"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn repeated_calls_are_equal() {
        let env = credentials();
        assert_eq!(site_config(&env), site_config(&env));
    }

    #[test]
    fn literals_do_not_depend_on_env() {
        let mut with = site_config(&credentials());
        let without = site_config(&Environment::new());
        with.algolia_search = without.algolia_search.clone();
        assert_eq!(with, without);
    }

    #[test]
    fn identity_fields() {
        let site = site_config(&Environment::new());
        assert_eq!(site.title, "The Stroz");
        assert_eq!(site.url, "https://stroz.dev");
        assert_eq!(site.author, "Scott Stroz");
        assert_eq!(site.social_github.as_deref(), Some("boyzoid"));
        assert_eq!(site.social_twitter.as_deref(), Some("@boyzoid"));
        assert_eq!(site.social_youtube, None);
        assert_eq!(site.google_analytics.as_deref(), Some("G-060Z992R2K"));
    }

    #[test]
    fn missing_credentials_are_absent() {
        let search = site_config(&Environment::new()).algolia_search;
        assert_eq!(search.app_id, None);
        assert_eq!(search.search_api_key, None);
        assert_eq!(search.site_id, None);
        assert!(!search.enabled);
        assert_eq!(search.branch, "main");
    }

    #[test]
    fn credentials_come_from_env() {
        let search = site_config(&credentials()).algolia_search;
        assert_eq!(search.app_id.as_deref(), Some("APP123"));
        assert_eq!(search.search_api_key.as_deref(), Some("search-key"));
        assert_eq!(search.site_id.as_deref(), Some("site-42"));
        assert!(!search.enabled);
    }

    #[test]
    fn empty_credential_is_kept() {
        let env: Environment = [(ALGOLIA_APP_ID, "")].into_iter().collect();
        let search = site_config(&env).algolia_search;
        assert_eq!(search.app_id.as_deref(), Some(""));
    }

    #[test]
    fn json_round_trip() {
        let site = site_config(&credentials());
        let json = serde_json::to_string_pretty(&site).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, site);
    }

    #[test]
    fn json_field_names() {
        let json = serde_json::to_value(site_config(&Environment::new())).unwrap();
        for key in [
            "cloudUrl",
            "cloudinaryHeaderUrl",
            "cloudinaryUrl",
            "title",
            "url",
            "image",
            "imageAlt",
            "author",
            "description",
            "descriptionNoTags",
            "openGraphDefaultImage",
            "socialGitHub",
            "socialLinkedIn",
            "socialTwitter",
            "googleAnalytics",
            "algoliaSearch",
        ] {
            assert!(json.get(key).is_some(), "missing `{key}`");
        }
        assert!(json.get("socialYouTube").is_none());
    }
}

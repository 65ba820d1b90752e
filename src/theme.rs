use siteconf_config::BuildMode;
use siteconf_config::Declarations;
use siteconf_config::Purge;
use siteconf_config::Theme;
use siteconf_config::ThemeConfig;
use siteconf_config::ThemeExtend;
use siteconf_config::TokenExtension;
use siteconf_config::TokenValue;
use siteconf_config::UtilityMap;
use siteconf_config::UtilityPlugin;
use siteconf_config::Variants;
use siteconf_config::token_map;

/// Sources scanned for used utility classes in production builds.
pub const PURGE_GLOBS: [&str; 2] = ["./content/**/*.njk", "./src/*.js"];

/// Theme configuration for the CSS tool.
///
/// Purging only runs for production builds; every other mode keeps the full stylesheet.
pub fn theme_config(mode: BuildMode) -> ThemeConfig {
    let purge = if mode.is_production() {
        Purge::Enabled(PURGE_GLOBS.iter().map(|g| (*g).to_owned()).collect())
    } else {
        Purge::Disabled
    };
    log::debug!("Purge for {mode} build: {purge}");

    ThemeConfig {
        purge,
        plugins: vec![underline_plugin()],
        variants: variants(),
        theme: Theme { extend: extend() },
    }
}

fn underline_plugin() -> UtilityPlugin {
    let declarations: Declarations = [
        ("textDecoration", "underline"),
        ("text-decoration-color", "text-indigo-300"),
        ("text-underline-position", "under"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v.to_owned()))
    .collect();
    let mut utilities = UtilityMap::new();
    utilities.insert(".underline".to_owned(), declarations);
    UtilityPlugin::new("extend-underline", utilities)
}

fn variants() -> Variants {
    let extend = [
        "backgroundImage",
        "fill",
        "fontWeight",
        "gradientColorStops",
        "stroke",
    ]
    .into_iter()
    .map(|plugin| (plugin.to_owned(), vec!["dark".to_owned()]))
    .collect();
    Variants { extend }
}

fn extend() -> ThemeExtend {
    const SIDEBAR_GRADIENT: &str =
        "radial-gradient(circle,rgba(21, 2, 122, 1) 0%,rgba(35, 37, 46, 1) 100%)";

    ThemeExtend {
        background_color: TokenExtension::inherit(
            "colors",
            token_map([
                ("dark-nav", "#242424"),
                ("dark-body", "#1B1B1E"),
                ("dark-heading", "#27282B"),
            ]),
        ),
        background_image: TokenExtension::standalone(token_map([
            ("sidebar-dark", SIDEBAR_GRADIENT),
            ("sidebar-light", SIDEBAR_GRADIENT),
        ])),
        border_width: TokenExtension::inherit("width", token_map([("1", "1px")])),
        gradient_color_stops: TokenExtension::inherit(
            "colors",
            token_map([("dark-outer", "#1B1B1E"), ("dark-middle", "#242424")]),
        ),
        grid_template_columns: token_map([
            ("small", "0 auto"),
            // Trailing `;` is passed through to the stylesheet as written.
            ("regular", "minmax(auto, 0fr) auto;"),
            ("topbar", "auto 18rem"),
        ]),
        line_height: token_map([("pagination", "1.8rem"), ("12", "3rem")]),
        margin: token_map([("15", "3.75rem")]),
        max_width: token_map([("content", "95rem")]),
        text_color: token_map([("orange-hover", "#d2603a")]),
        colors: token_map([("myblue", TokenValue::from(myblue()))]),
        font_family: token_map([
            ("sans", font_stack(&["Graphik", "sans-serif"])),
            ("serif", font_stack(&["Merriweather", "serif"])),
        ]),
    }
}

fn myblue() -> siteconf_config::TokenMap {
    token_map([
        ("50", "#4734ac"),
        ("100", "#3d2aa2"),
        ("200", "#332098"),
        ("300", "#29168e"),
        ("400", "#1f0c84"),
        ("500", "#15027a"),
        ("600", "#0b0070"),
        ("700", "#010066"),
        ("800", "#00005c"),
        ("900", "#000052"),
    ])
}

fn font_stack(fonts: &[&str]) -> TokenValue {
    TokenValue::List(fonts.iter().map(|f| (*f).to_owned()).collect())
}

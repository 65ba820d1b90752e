use std::collections::BTreeMap;
use std::fmt;

use super::*;

/// Configuration handed to the utility-first CSS tool.
///
/// Only the delta over the tool's own tokens lives here; [`ThemeConfig::resolve`] performs the
/// merge against a [`BaseTheme`].
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ThemeConfig {
    pub purge: Purge,
    pub plugins: Vec<UtilityPlugin>,
    pub variants: Variants,
    pub theme: Theme,
}

impl ThemeConfig {
    pub fn resolve(&self, base: &BaseTheme) -> ResolvedTheme {
        let mut collector = UtilityCollector::new();
        for plugin in &self.plugins {
            plugin.register(&mut collector);
        }
        ResolvedTheme {
            purge: self.purge.clone(),
            utilities: collector.into_utilities(),
            variants: self.variants.clone(),
            theme: ResolvedExtend {
                extend: self.theme.extend.resolve(base),
            },
        }
    }
}

impl fmt::Display for ThemeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

/// Extra variants to generate, keyed by core plugin, e.g. `fill: [dark]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Variants {
    pub extend: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Theme {
    pub extend: ThemeExtend,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ThemeExtend {
    pub background_color: TokenExtension,
    pub background_image: TokenExtension,
    pub border_width: TokenExtension,
    pub gradient_color_stops: TokenExtension,
    pub grid_template_columns: TokenMap,
    pub line_height: TokenMap,
    pub margin: TokenMap,
    pub max_width: TokenMap,
    pub text_color: TokenMap,
    pub colors: TokenMap,
    pub font_family: TokenMap,
}

impl ThemeExtend {
    /// Flatten into the `theme.extend` object the CSS tool reads, evaluating every computed
    /// entry against `base`. Empty entries are left out.
    pub fn resolve(&self, base: &BaseTheme) -> TokenMap {
        let computed = [
            ("backgroundColor", self.background_color.apply(base)),
            ("backgroundImage", self.background_image.apply(base)),
            ("borderWidth", self.border_width.apply(base)),
            ("gradientColorStops", self.gradient_color_stops.apply(base)),
        ];
        let fixed = [
            ("gridTemplateColumns", &self.grid_template_columns),
            ("lineHeight", &self.line_height),
            ("margin", &self.margin),
            ("maxWidth", &self.max_width),
            ("textColor", &self.text_color),
            ("colors", &self.colors),
            ("fontFamily", &self.font_family),
        ];

        computed
            .into_iter()
            .chain(fixed.into_iter().map(|(key, map)| (key, map.clone())))
            .filter(|(_, map)| !map.is_empty())
            .map(|(key, map)| (key.to_owned(), TokenValue::Map(map)))
            .collect()
    }
}

/// [`ThemeConfig`] after plugins have registered and computed entries have been evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ResolvedTheme {
    pub purge: Purge,
    pub utilities: UtilityMap,
    pub variants: Variants,
    pub theme: ResolvedExtend,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct ResolvedExtend {
    pub extend: TokenMap,
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> ThemeConfig {
        let mut underline = UtilityMap::new();
        underline.insert(
            ".underline".to_owned(),
            [("textDecoration".to_owned(), "underline".to_owned())]
                .into_iter()
                .collect(),
        );
        ThemeConfig {
            purge: Purge::Enabled(vec!["./src/*.js".to_owned()]),
            plugins: vec![UtilityPlugin::new("underline", underline)],
            variants: Variants {
                extend: [("fill".to_owned(), vec!["dark".to_owned()])]
                    .into_iter()
                    .collect(),
            },
            theme: Theme {
                extend: ThemeExtend {
                    background_color: TokenExtension::inherit(
                        "colors",
                        token_map([("nav", "#242424")]),
                    ),
                    margin: token_map([("15", "3.75rem")]),
                    ..Default::default()
                },
            },
        }
    }

    #[test]
    fn resolve_registers_plugins() {
        let resolved = sample().resolve(&BaseTheme::default());
        assert_eq!(
            resolved.utilities[".underline"]["textDecoration"],
            "underline"
        );
    }

    #[test]
    fn resolve_skips_empty_entries() {
        let resolved = sample().resolve(&BaseTheme::default());
        let keys: Vec<_> = resolved.theme.extend.keys().cloned().collect();
        assert_eq!(keys, ["backgroundColor", "margin"]);
    }

    #[test]
    fn resolve_merges_base() {
        let base = BaseTheme::new(token_map([(
            "colors",
            TokenValue::from(token_map([("white", "#fff")])),
        )]));
        let resolved = sample().resolve(&base);
        let background = resolved.theme.extend["backgroundColor"].as_map().unwrap();
        assert_eq!(background["white"], TokenValue::from("#fff"));
        assert_eq!(background["nav"], TokenValue::from("#242424"));
    }

    #[test]
    fn json_round_trip() {
        let theme = sample();
        let json = serde_json::to_string(&theme).unwrap();
        let parsed: ThemeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, theme);
    }

    #[test]
    fn yaml_round_trip() {
        let theme = sample();
        let parsed: ThemeConfig = serde_yaml::from_str(&theme.to_string()).unwrap();
        assert_eq!(parsed, theme);
    }

    #[test]
    fn disabled_purge_serializes_false() {
        let theme = ThemeConfig::default();
        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json["purge"], serde_json::Value::Bool(false));
    }
}

use std::collections::BTreeMap;

/// CSS declarations keyed by property name.
pub type Declarations = BTreeMap<String, String>;

/// Utility classes keyed by selector, e.g. `.underline`.
pub type UtilityMap = BTreeMap<String, Declarations>;

/// Capabilities the CSS tool hands to a plugin during registration.
pub trait PluginApi {
    fn add_utilities(&mut self, utilities: UtilityMap);
}

/// A plugin that contributes a fixed set of utility classes.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct UtilityPlugin {
    pub name: String,
    pub utilities: UtilityMap,
}

impl UtilityPlugin {
    pub fn new(name: impl Into<String>, utilities: UtilityMap) -> Self {
        Self {
            name: name.into(),
            utilities,
        }
    }

    pub fn register(&self, api: &mut dyn PluginApi) {
        log::trace!("Registering plugin `{}`", self.name);
        api.add_utilities(self.utilities.clone());
    }
}

/// [`PluginApi`] that records every utility registered with it.
///
/// Later registrations of the same selector merge into the earlier declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UtilityCollector {
    utilities: UtilityMap,
}

impl UtilityCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_utilities(self) -> UtilityMap {
        self.utilities
    }
}

impl PluginApi for UtilityCollector {
    fn add_utilities(&mut self, utilities: UtilityMap) {
        for (selector, declarations) in utilities {
            self.utilities
                .entry(selector)
                .or_default()
                .extend(declarations);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn declarations(pairs: &[(&str, &str)]) -> Declarations {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn register_adds_utilities() {
        let mut utilities = UtilityMap::new();
        utilities.insert(".faded".to_owned(), declarations(&[("opacity", "0.5")]));
        let plugin = UtilityPlugin::new("faded", utilities.clone());

        let mut collector = UtilityCollector::new();
        plugin.register(&mut collector);
        assert_eq!(collector.into_utilities(), utilities);
    }

    #[test]
    fn collector_merges_selectors() {
        let mut collector = UtilityCollector::new();
        let mut first = UtilityMap::new();
        first.insert(".x".to_owned(), declarations(&[("color", "red")]));
        let mut second = UtilityMap::new();
        second.insert(".x".to_owned(), declarations(&[("margin", "0")]));
        collector.add_utilities(first);
        collector.add_utilities(second);

        let utilities = collector.into_utilities();
        assert_eq!(
            utilities[".x"],
            declarations(&[("color", "red"), ("margin", "0")])
        );
    }
}

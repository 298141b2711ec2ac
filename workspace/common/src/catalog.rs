//! Fixed crop/variety catalog and the dependent variety selection built from it.

use tracing::debug;

/// Placeholder shown as the first, disabled entry of every variety list.
pub const VARIETY_PLACEHOLDER: &str = "Select Variety";

/// Regions accepted by the prediction service.
pub const REGIONS: [&str; 6] = [
    "Punjab",
    "Maharashtra",
    "Tamil Nadu",
    "Bihar",
    "Karnataka",
    "Uttar Pradesh",
];

const CROP_VARIETIES: [(&str, [&str; 3]); 6] = [
    ("Wheat", ["HD-2967", "PBW-343", "WH-147"]),
    ("Onion", ["Nashik Red", "Pusa Red", "Agrifound Dark Red"]),
    ("Tomato", ["Local Red", "Pusa Ruby", "Hybrid Tomato"]),
    ("Maize", ["Hybrid-1", "PMH-1", "HQPM-1"]),
    ("Potato", ["Kufri Jyoti", "Kufri Sindhuri", "Kufri Chandramukhi"]),
    ("Rice", ["Basmati", "Pusa-1121", "Sona Masuri"]),
];

/// Read-only mapping from crop name to its ordered varieties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CropCatalog;

impl CropCatalog {
    /// Crop names in catalog order.
    pub fn crops(&self) -> impl Iterator<Item = &'static str> + use<> {
        CROP_VARIETIES.iter().map(|(crop, _)| *crop)
    }

    /// Varieties of `crop` in catalog order, or `None` for an unknown crop.
    pub fn varieties(&self, crop: &str) -> Option<&'static [&'static str]> {
        CROP_VARIETIES
            .iter()
            .find(|(name, _)| *name == crop)
            .map(|(_, varieties)| varieties.as_slice())
    }

    pub fn contains(&self, crop: &str) -> bool {
        self.varieties(crop).is_some()
    }
}

/// State of a variety `<select>` that depends on a crop selection.
///
/// The placeholder is not part of `options`; renderers always emit it first
/// and disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarietySelect {
    pub options: Vec<String>,
    pub enabled: bool,
    pub selected: String,
}

impl Default for VarietySelect {
    fn default() -> Self {
        Self::cleared()
    }
}

impl VarietySelect {
    /// Only the placeholder, disabled.
    pub fn cleared() -> Self {
        Self {
            options: Vec::new(),
            enabled: false,
            selected: String::new(),
        }
    }

    /// Repopulates the list for `crop`. Any previous selection is dropped.
    pub fn for_crop(catalog: &CropCatalog, crop: &str) -> Self {
        match catalog.varieties(crop) {
            Some(varieties) => Self {
                options: varieties.iter().map(|v| v.to_string()).collect(),
                enabled: true,
                selected: String::new(),
            },
            None => {
                if !crop.is_empty() {
                    debug!(crop, "crop not in catalog, variety list left disabled");
                }
                Self::cleared()
            }
        }
    }

    /// Selects `variety` if it is one of the current options; an unknown
    /// value resets the selection to the placeholder.
    pub fn select(&mut self, variety: &str) {
        if self.options.iter().any(|o| o == variety) {
            self.selected = variety.to_string();
        } else {
            self.selected.clear();
        }
    }

    /// Options as rendered, placeholder first.
    pub fn rendered_options(&self) -> Vec<&str> {
        std::iter::once(VARIETY_PLACEHOLDER)
            .chain(self.options.iter().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_crop_yields_catalog_order() {
        let select = VarietySelect::for_crop(&CropCatalog, "Onion");
        assert!(select.enabled);
        assert_eq!(select.options, vec!["Nashik Red", "Pusa Red", "Agrifound Dark Red"]);
        assert_eq!(
            select.rendered_options(),
            vec![VARIETY_PLACEHOLDER, "Nashik Red", "Pusa Red", "Agrifound Dark Red"]
        );
    }

    #[test]
    fn unknown_crop_is_disabled_with_placeholder_only() {
        for crop in ["", "Barley", "wheat", " Wheat"] {
            let select = VarietySelect::for_crop(&CropCatalog, crop);
            assert!(!select.enabled, "crop {crop:?}");
            assert_eq!(select.rendered_options(), vec![VARIETY_PLACEHOLDER]);
        }
    }

    #[test]
    fn repopulating_drops_previous_options() {
        let mut select = VarietySelect::for_crop(&CropCatalog, "Rice");
        select.select("Basmati");
        assert_eq!(select.selected, "Basmati");

        let select = VarietySelect::for_crop(&CropCatalog, "Maize");
        assert_eq!(select.selected, "");
        assert!(!select.options.iter().any(|o| o == "Basmati"));
    }

    #[test]
    fn selecting_foreign_variety_clears_selection() {
        let mut select = VarietySelect::for_crop(&CropCatalog, "Wheat");
        select.select("PBW-343");
        select.select("Pusa Ruby");
        assert_eq!(select.selected, "");
    }

    #[test]
    fn every_crop_has_three_varieties() {
        let catalog = CropCatalog;
        assert_eq!(catalog.crops().count(), 6);
        for crop in catalog.crops() {
            assert_eq!(catalog.varieties(crop).map(<[_]>::len), Some(3));
        }
    }
}

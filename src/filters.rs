//! Filter state and preset handling
//!
//! Each filter field is an independently optional string constraint. Empty
//! means "no constraint" and is never sent to the server; numeric fields are
//! forwarded as typed by the user (the server is the authority on validity).

/// Current value of every recognized filter field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: String,
    pub gearbox_type: String,
    pub manufacturer: String,
    pub min_torque: String,
    pub min_performance: String,
    pub price_range: String,
}

impl FilterState {
    /// Translate the non-empty fields into query parameters.
    ///
    /// Key order is fixed: category, type, manufacturer, min_torque,
    /// min_performance, price_range. An all-empty state yields an empty vec,
    /// which the orchestrator treats as "fetch unfiltered".
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let fields = [
            ("category", &self.category),
            ("type", &self.gearbox_type),
            ("manufacturer", &self.manufacturer),
            ("min_torque", &self.min_torque),
            ("min_performance", &self.min_performance),
            ("price_range", &self.price_range),
        ];

        // Trim only to decide emptiness; the value itself is forwarded
        // untouched. The server is the authority on validity.
        fields
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(key, value)| (key, value.clone()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Human-readable "key: value" summary of the active constraints
    pub fn describe(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A named, predefined filter assignment applied as a single action
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub id: &'static str,
    pub label: &'static str,
    /// (field key, value) pairs set on top of a cleared state
    assignments: &'static [(&'static str, &'static str)],
}

/// The closed set of presets, in display order
pub const PRESETS: &[Preset] = &[
    Preset {
        id: "high-performance",
        label: "High Performance",
        assignments: &[("min_performance", "90")],
    },
    Preset {
        id: "heavy-duty",
        label: "Heavy Duty",
        assignments: &[("min_torque", "3000")],
    },
    Preset {
        id: "automotive-planetary",
        label: "Automotive Planetary",
        assignments: &[("category", "automotive"), ("type", "planetary")],
    },
    Preset {
        id: "budget-friendly",
        label: "Budget Friendly",
        assignments: &[("price_range", "low")],
    },
    Preset {
        id: "industrial-helical",
        label: "Industrial Helical",
        assignments: &[("category", "industrial"), ("type", "helical")],
    },
];

/// Apply a preset: clear all filters, then set exactly the preset's fields.
///
/// This is a reset, not a merge. Unknown identifiers silently yield the
/// cleared state; presets are a closed, statically known set, not user input.
pub fn apply_preset(id: &str) -> FilterState {
    let mut state = FilterState::default();

    let Some(preset) = PRESETS.iter().find(|p| p.id == id) else {
        return state;
    };

    for (key, value) in preset.assignments {
        let slot = match *key {
            "category" => &mut state.category,
            "type" => &mut state.gearbox_type,
            "manufacturer" => &mut state.manufacturer,
            "min_torque" => &mut state.min_torque,
            "min_performance" => &mut state.min_performance,
            "price_range" => &mut state.price_range,
            _ => continue,
        };
        *slot = (*value).to_string();
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_yields_no_pairs() {
        assert!(FilterState::default().query_pairs().is_empty());
    }

    #[test]
    fn test_blank_fields_are_omitted() {
        let state = FilterState {
            manufacturer: "   ".to_string(),
            min_torque: "500".to_string(),
            ..Default::default()
        };
        assert_eq!(state.query_pairs(), vec![("min_torque", "500".to_string())]);
    }

    #[test]
    fn test_values_are_forwarded_as_typed() {
        // Surrounding whitespace and dubious numbers go to the server as-is.
        let state = FilterState {
            min_torque: " 500 ".to_string(),
            min_performance: "abc".to_string(),
            ..Default::default()
        };
        assert_eq!(
            state.query_pairs(),
            vec![
                ("min_torque", " 500 ".to_string()),
                ("min_performance", "abc".to_string())
            ]
        );
    }

    #[test]
    fn test_pairs_keep_fixed_key_order() {
        let state = FilterState {
            category: "automotive".to_string(),
            gearbox_type: "planetary".to_string(),
            manufacturer: "ZF".to_string(),
            min_torque: "100".to_string(),
            min_performance: "80".to_string(),
            price_range: "high".to_string(),
        };
        let keys: Vec<&str> = state.query_pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "category",
                "type",
                "manufacturer",
                "min_torque",
                "min_performance",
                "price_range"
            ]
        );
    }

    #[test]
    fn test_category_and_torque_scenario() {
        let state = FilterState {
            category: "automotive".to_string(),
            min_torque: "3000".to_string(),
            ..Default::default()
        };
        assert_eq!(
            state.query_pairs(),
            vec![
                ("category", "automotive".to_string()),
                ("min_torque", "3000".to_string())
            ]
        );
    }

    #[test]
    fn test_preset_resets_existing_filters() {
        // Applying ignores whatever was set before; heavy-duty over an
        // automotive filter leaves exactly min_torque=3000.
        let state = apply_preset("heavy-duty");
        assert_eq!(
            state,
            FilterState {
                min_torque: "3000".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_preset_assignments_match_table() {
        let state = apply_preset("automotive-planetary");
        assert_eq!(
            state.query_pairs(),
            vec![
                ("category", "automotive".to_string()),
                ("type", "planetary".to_string())
            ]
        );

        assert_eq!(
            apply_preset("high-performance").query_pairs(),
            vec![("min_performance", "90".to_string())]
        );
        assert_eq!(
            apply_preset("budget-friendly").query_pairs(),
            vec![("price_range", "low".to_string())]
        );
        assert_eq!(
            apply_preset("industrial-helical").query_pairs(),
            vec![
                ("category", "industrial".to_string()),
                ("type", "helical".to_string())
            ]
        );
    }

    #[test]
    fn test_preset_is_idempotent() {
        assert_eq!(apply_preset("heavy-duty"), apply_preset("heavy-duty"));
    }

    #[test]
    fn test_unknown_preset_clears() {
        assert_eq!(apply_preset("warp-drive"), FilterState::default());
    }

    #[test]
    fn test_describe_joins_with_commas() {
        let state = FilterState {
            category: "industrial".to_string(),
            price_range: "low".to_string(),
            ..Default::default()
        };
        assert_eq!(state.describe(), "category: industrial, price_range: low");
    }
}

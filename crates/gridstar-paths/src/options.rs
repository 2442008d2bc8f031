use crate::astar::CostModel;

/// Search configuration, e.g. loaded from a settings file.
///
/// With the `serde` feature, missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Name of a built-in heuristic. Validated by
    /// [`PathFinder::from_options`](crate::PathFinder::from_options).
    pub heuristic: String,
    pub cost_model: CostModel,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            heuristic: "manhattan".to_string(),
            cost_model: CostModel::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = SearchOptions::default();
        assert_eq!(options.heuristic, "manhattan");
        assert_eq!(options.cost_model, CostModel::Separated);
    }
}

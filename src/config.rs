use serde::{Deserialize, Serialize};

/// Click distance from a ring's first vertex that closes the ring.
pub const DEFAULT_CLOSE_THRESHOLD: f64 = 15.0;

/// Number of past snapshots retained for time travel.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Tunable editor behaviour.
///
/// Deserializes with defaults for any missing field so older settings keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// A click closer than this to the first vertex of an open ring with at
    /// least three points closes the ring.
    pub close_threshold: f64,
    /// Validate the whole hole ring (containment and disjointness) when it
    /// is committed, in addition to the per-vertex check.
    pub strict_hole_validation: bool,
    pub history_limit: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            close_threshold: DEFAULT_CLOSE_THRESHOLD,
            strict_hole_validation: false,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config: EditorConfig =
            serde_json::from_str(r#"{ "strict_hole_validation": true }"#).unwrap();
        assert!(config.strict_hole_validation);
        assert_eq!(config.close_threshold, DEFAULT_CLOSE_THRESHOLD);
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    }
}

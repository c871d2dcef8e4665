use serde::{Deserialize, Serialize};

use crate::error::SpellcheckError;

/// Runtime configuration for indexing and lookup, replacing the reference
/// implementation's process-wide globals with an explicit value that is
/// constructed, populated, then passed by reference to queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellCheckConfig {
    /// Ceiling on delete-generation depth during indexing and on accepted
    /// suggestion distance at lookup time. Referred to as `k` throughout.
    pub edit_distance_max: usize,

    /// 0 = top suggestion only; 1 = all suggestions at the minimum distance
    /// found; 2 = all suggestions with distance <= k.
    pub verbosity: u8,

    /// When set, queries go through the compound corrector; otherwise only
    /// the single-term lookup runs.
    pub enable_compound_check: bool,

    /// Minimum observed count before a term is indexed and given deletes.
    pub count_threshold: i64,

    /// Noise filter: a term whose own count is above this is always
    /// plausible regardless of length.
    pub noise_filter_min_count: i64,

    /// Noise filter: a term longer than this is plausible as long as its
    /// count is nonzero.
    pub noise_filter_min_len: usize,
}

impl Default for SpellCheckConfig {
    fn default() -> Self {
        SpellCheckConfig {
            edit_distance_max: 2,
            verbosity: 0,
            enable_compound_check: true,
            count_threshold: 1,
            noise_filter_min_count: 100,
            noise_filter_min_len: 2,
        }
    }
}

impl SpellCheckConfig {
    /// Enforces the one cross-field constraint the external-interfaces
    /// contract states: compound checking is only defined against the
    /// top-suggestion verbosity.
    pub fn validate(&self) -> Result<(), SpellcheckError> {
        if self.enable_compound_check && self.verbosity != 0 {
            return Err(SpellcheckError::InvalidConfig(
                "enable_compound_check requires verbosity == 0".to_string(),
            ));
        }
        Ok(())
    }

    /// A term is plausible as a correction candidate rather than noise
    /// picked up from a sparse corpus: either it is common outright, or it
    /// is long enough that a short match is unlikely to be an accident.
    pub fn passes_noise_filter(&self, count: i64, len: usize) -> bool {
        count > self.noise_filter_min_count
            || (len > self.noise_filter_min_len && count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SpellCheckConfig::default().validate().is_ok());
    }

    #[test]
    fn compound_check_requires_verbosity_zero() {
        let mut config = SpellCheckConfig::default();
        config.verbosity = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn noise_filter_thresholds() {
        let config = SpellCheckConfig::default();
        assert!(config.passes_noise_filter(101, 1));
        assert!(config.passes_noise_filter(1, 3));
        assert!(!config.passes_noise_filter(1, 2));
        assert!(!config.passes_noise_filter(0, 5));
    }
}

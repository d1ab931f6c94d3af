use crate::eligibility::EligibilityLimits;
use crate::error::{Result, SlaError};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// SlaConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlaConfig {
    /// Remaining hours at or below which a running SLA counts as `warning`.
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold_hours: f64,
    /// Include at-risk (warning) rows in breach tables, not just overdue ones.
    #[serde(default = "default_include_at_risk")]
    pub include_at_risk: bool,
    #[serde(default)]
    pub eligibility: EligibilityLimits,
}

fn default_warning_threshold() -> f64 {
    2.0
}

fn default_include_at_risk() -> bool {
    true
}

impl Default for SlaConfig {
    fn default() -> Self {
        Self {
            warning_threshold_hours: default_warning_threshold(),
            include_at_risk: default_include_at_risk(),
            eligibility: EligibilityLimits::default(),
        }
    }
}

impl SlaConfig {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(SlaError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: SlaConfig = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Load the project config, or the defaults when `.sla/config.yaml` is absent.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        match Self::load(root) {
            Err(SlaError::NotInitialized) => Ok(Self::default()),
            other => other,
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::replace_file(&path, &data)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if !self.warning_threshold_hours.is_finite() || self.warning_threshold_hours < 0.0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!(
                    "warning_threshold_hours must be a non-negative number, got {}",
                    self.warning_threshold_hours
                ),
            });
        } else if self.warning_threshold_hours == 0.0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "warning_threshold_hours is 0: SLAs go straight from ok to overdue"
                    .to_string(),
            });
        }

        let limits = [
            ("eligibility.max_dbr_percent", self.eligibility.max_dbr_percent),
            ("eligibility.max_ltv_percent", self.eligibility.max_ltv_percent),
        ];
        for (name, value) in limits {
            if !value.is_finite() || value <= 0.0 {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("{name} must be greater than 0, got {value}"),
                });
            } else if value > 100.0 {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("{name} is above 100% ({value})"),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

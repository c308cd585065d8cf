//! Solver configuration
//!
//! Plain numbers supplied by the host's settings panel. The solver copies the
//! struct at construction and treats it as read-only between `set_config`
//! calls; there is no global config singleton.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// How the linear solves (diffusion, pressure) relax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelaxationScheme {
    /// In-place sweeps; reads neighbours already updated this sweep.
    #[default]
    GaussSeidel,
    /// Double-buffered sweeps. Converges slower per sweep but rows are
    /// independent, so it runs row-parallel under the `parallel` feature.
    Jacobi,
}

/// What `step` does when it finds NaN/inf in density or velocity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InstabilityPolicy {
    Ignore,
    #[default]
    Warn,
    /// Warn, then zero the grid (keeping its size) so the tool keeps running.
    Reset,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolverConfig {
    pub viscosity: f32,
    pub diffusion: f32,
    /// Per-step density multiplier (1.0 = no decay).
    pub dissipation: f32,
    /// Per-step velocity multiplier (1.0 = no decay).
    pub velocity_dissipation: f32,
    pub buoyancy_force: f32,
    /// Relaxation sweeps per linear solve.
    pub iter: u32,
    /// Vorticity confinement strength; 0 disables the pass.
    pub vorticity: f32,
    pub relaxation: RelaxationScheme,
    pub instability_policy: InstabilityPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            viscosity: 0.0001,
            diffusion: 0.0001,
            dissipation: 0.995,
            velocity_dissipation: 0.99,
            buoyancy_force: 0.0,
            iter: 20,
            vorticity: 0.0,
            relaxation: RelaxationScheme::GaussSeidel,
            instability_policy: InstabilityPolicy::Warn,
        }
    }
}

impl SolverConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: SolverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Reject values that make the solver meaningless. Values that are merely
    /// unstable (huge viscosity, tiny `iter`) are the caller's business.
    pub fn validate(&self) -> Result<(), EngineError> {
        let scalars = [
            ("viscosity", self.viscosity),
            ("diffusion", self.diffusion),
            ("dissipation", self.dissipation),
            ("velocityDissipation", self.velocity_dissipation),
            ("buoyancyForce", self.buoyancy_force),
            ("vorticity", self.vorticity),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(EngineError::InvalidConfig(format!("{} must be finite", name)));
            }
        }
        if self.viscosity < 0.0 || self.diffusion < 0.0 {
            return Err(EngineError::InvalidConfig(
                "viscosity and diffusion must be non-negative".to_string(),
            ));
        }
        if self.vorticity < 0.0 {
            return Err(EngineError::InvalidConfig(
                "vorticity must be non-negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.dissipation)
            || !(0.0..=1.0).contains(&self.velocity_dissipation)
        {
            return Err(EngineError::InvalidConfig(
                "dissipation factors must be within [0, 1]".to_string(),
            ));
        }
        if self.iter == 0 {
            return Err(EngineError::InvalidConfig("iter must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SolverConfig::default().validate().is_ok());
    }

    #[test]
    fn parses_camel_case_keys_and_fills_missing_with_defaults() {
        let json = r#"{
            "viscosity": 0.0,
            "velocityDissipation": 1.0,
            "buoyancyForce": 2.5,
            "iter": 8,
            "relaxation": "jacobi"
        }"#;
        let config = SolverConfig::from_json(json).unwrap();
        assert_eq!(config.viscosity, 0.0);
        assert_eq!(config.velocity_dissipation, 1.0);
        assert_eq!(config.buoyancy_force, 2.5);
        assert_eq!(config.iter, 8);
        assert_eq!(config.relaxation, RelaxationScheme::Jacobi);
        assert_eq!(config.diffusion, SolverConfig::default().diffusion);
        assert_eq!(config.instability_policy, InstabilityPolicy::Warn);
    }

    #[test]
    fn rejects_zero_iterations() {
        let err = SolverConfig::from_json(r#"{"iter": 0}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_negative_viscosity_and_out_of_range_dissipation() {
        let mut config = SolverConfig::default();
        config.viscosity = -1.0;
        assert!(config.validate().is_err());

        let mut config = SolverConfig::default();
        config.dissipation = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_vorticity() {
        let err = SolverConfig::from_json(r#"{"vorticity": -0.5}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));

        let config = SolverConfig { vorticity: 0.0, ..SolverConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn malformed_json_is_invalid_config() {
        assert!(matches!(
            SolverConfig::from_json("not json"),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn json_round_trip_keeps_values() {
        let mut config = SolverConfig::default();
        config.vorticity = 0.35;
        config.instability_policy = InstabilityPolicy::Reset;
        let back = SolverConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(back, config);
    }
}

//! Heat pump cycle estimator.
//!
//! DESIGN
//! ======
//! A steady-state, single-point estimate of a vapor-compression cycle:
//! Carnot CoP between source and sink, derated by compressor and heat
//! exchanger efficiency, then an energy balance across evaporator,
//! compressor, and condenser. Temperatures come in as °C and are converted
//! to Kelvin before any arithmetic.
//!
//! Cycle stages, in order: evaporation (heat absorption), compression,
//! condensation (heat rejection), expansion.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub const ABSOLUTE_ZERO_C: f64 = -273.15;
pub const DEFAULT_MASS_FLOW_RATE: f64 = 0.05;
pub const DEFAULT_COMPRESSOR_EFFICIENCY: f64 = 0.85;
pub const DEFAULT_HEAT_EXCHANGER_EFFICIENCY: f64 = 0.75;
pub const DEFAULT_SOURCE_TEMP_C: f64 = 5.0;
pub const DEFAULT_SINK_TEMP_C: f64 = 20.0;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SimulationError {
    #[error("unknown refrigerant: {0}")]
    UnknownRefrigerant(String),
    #[error("unknown mode: {0} (expected 'heating' or 'cooling')")]
    UnknownMode(String),
    #[error("temperature {0} °C is not a finite value above absolute zero")]
    InvalidTemperature(f64),
    #[error("sink ({sink_c} °C) must be warmer than source ({source_c} °C)")]
    NonPositiveLift { source_c: f64, sink_c: f64 },
}

// =============================================================================
// REFRIGERANT
// =============================================================================

/// Thermophysical properties of a refrigerant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RefrigerantProperties {
    /// °C; above this the gas cannot be liquefied.
    pub critical_temp: f64,
    /// °C at atmospheric pressure.
    pub boiling_point: f64,
    /// kJ/(kg·K)
    pub specific_heat_liquid: f64,
    /// kJ/(kg·K)
    pub specific_heat_gas: f64,
    /// kJ/kg
    pub latent_heat: f64,
    /// g/mol
    pub molecular_weight: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Refrigerant {
    #[default]
    R410A,
    R134A,
}

impl Refrigerant {
    pub const ALL: [Refrigerant; 2] = [Self::R410A, Self::R134A];

    #[must_use]
    pub fn properties(self) -> RefrigerantProperties {
        match self {
            Self::R410A => RefrigerantProperties {
                critical_temp: 72.5,
                boiling_point: -48.5,
                specific_heat_liquid: 1.55,
                specific_heat_gas: 0.85,
                latent_heat: 240.0,
                molecular_weight: 72.58,
            },
            Self::R134A => RefrigerantProperties {
                critical_temp: 101.1,
                boiling_point: -26.1,
                specific_heat_liquid: 1.4,
                specific_heat_gas: 0.93,
                latent_heat: 215.0,
                molecular_weight: 102.03,
            },
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::R410A => "R410A",
            Self::R134A => "R134A",
        }
    }
}

impl fmt::Display for Refrigerant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Refrigerant {
    type Err = SimulationError;

    /// Case-insensitive; `R-410A` and `r410a` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.chars().filter(|c| *c != '-').collect::<String>().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == normalized)
            .ok_or_else(|| SimulationError::UnknownRefrigerant(s.to_string()))
    }
}

// =============================================================================
// MODE
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleMode {
    #[default]
    Heating,
    Cooling,
}

impl FromStr for CycleMode {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "heating" => Ok(Self::Heating),
            "cooling" => Ok(Self::Cooling),
            _ => Err(SimulationError::UnknownMode(s.to_string())),
        }
    }
}

// =============================================================================
// HEAT PUMP
// =============================================================================

/// Result of one cycle estimate. Energy rates in kW.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CycleReport {
    pub refrigerant: Refrigerant,
    pub mode: CycleMode,
    pub source_temp_c: f64,
    pub sink_temp_c: f64,
    pub carnot_cop: f64,
    pub cop: f64,
    pub q_evaporator_kw: f64,
    pub w_compressor_kw: f64,
    pub q_condenser_kw: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatPump {
    pub refrigerant: Refrigerant,
    /// kg/s
    pub mass_flow_rate: f64,
    pub compressor_efficiency: f64,
    pub heat_exchanger_efficiency: f64,
}

impl Default for HeatPump {
    fn default() -> Self {
        Self::new(Refrigerant::default())
    }
}

impl HeatPump {
    #[must_use]
    pub fn new(refrigerant: Refrigerant) -> Self {
        Self {
            refrigerant,
            mass_flow_rate: DEFAULT_MASS_FLOW_RATE,
            compressor_efficiency: DEFAULT_COMPRESSOR_EFFICIENCY,
            heat_exchanger_efficiency: DEFAULT_HEAT_EXCHANGER_EFFICIENCY,
        }
    }

    /// Ideal coefficient of performance between two Kelvin temperatures.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::NonPositiveLift`] unless `sink_k > source_k`.
    pub fn carnot_cop(source_k: f64, sink_k: f64) -> Result<f64, SimulationError> {
        if sink_k <= source_k {
            return Err(SimulationError::NonPositiveLift {
                source_c: source_k + ABSOLUTE_ZERO_C,
                sink_c: sink_k + ABSOLUTE_ZERO_C,
            });
        }
        Ok(sink_k / (sink_k - source_k))
    }

    /// Carnot CoP derated by compressor and heat exchanger efficiency.
    ///
    /// # Errors
    ///
    /// Same conditions as [`HeatPump::carnot_cop`].
    pub fn real_cop(&self, source_k: f64, sink_k: f64) -> Result<f64, SimulationError> {
        Ok(Self::carnot_cop(source_k, sink_k)? * self.compressor_efficiency * self.heat_exchanger_efficiency)
    }

    /// Estimate one cycle between a source and sink given in °C.
    ///
    /// # Errors
    ///
    /// Returns an error when a temperature is non-finite or below absolute zero, or the sink
    /// is not warmer than the source.
    pub fn simulate(&self, mode: CycleMode, source_c: f64, sink_c: f64) -> Result<CycleReport, SimulationError> {
        for t in [source_c, sink_c] {
            if t < ABSOLUTE_ZERO_C || !t.is_finite() {
                return Err(SimulationError::InvalidTemperature(t));
            }
        }
        let source_k = source_c - ABSOLUTE_ZERO_C;
        let sink_k = sink_c - ABSOLUTE_ZERO_C;
        let props = self.refrigerant.properties();

        let carnot_cop = Self::carnot_cop(source_k, sink_k)?;
        let cop = self.real_cop(source_k, sink_k)?;
        let lift_k = sink_k - source_k;

        let (q_evaporator_kw, w_compressor_kw, q_condenser_kw) = match mode {
            CycleMode::Heating => {
                let q_evap = self.mass_flow_rate * props.specific_heat_liquid * lift_k;
                let w = q_evap / cop;
                (q_evap, w, q_evap + w)
            }
            CycleMode::Cooling => {
                let q_cond = self.mass_flow_rate * props.specific_heat_gas * lift_k;
                let w = q_cond / cop;
                (q_cond - w, w, q_cond)
            }
        };

        Ok(CycleReport {
            refrigerant: self.refrigerant,
            mode,
            source_temp_c: source_c,
            sink_temp_c: sink_c,
            carnot_cop,
            cop,
            q_evaporator_kw,
            w_compressor_kw,
            q_condenser_kw,
        })
    }
}

#[cfg(test)]
#[path = "heatpump_test.rs"]
mod tests;

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::{ChartError, Result};

/// Positions handed over by the astrology calculation service.
///
/// `planets` maps a point name to `[degree, speed?]`; a negative speed marks the
/// point retrograde. `cusps` holds the twelve house start degrees, Ascendant first.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub planets: BTreeMap<String, Vec<f32>>,
    pub cusps: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub name: String,
    /// Ecliptic longitude normalized to `0..360`.
    pub degree: f32,
    pub retrograde: bool,
}

impl ChartData {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Accepts a single chart object or an array of charts.
    pub fn many_from_json(input: &str) -> Result<Vec<Self>> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        if value.is_array() {
            Ok(serde_json::from_value(value)?)
        } else {
            Ok(vec![serde_json::from_value(value)?])
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.cusps.len() != 12 {
            return Err(invalid(format!(
                "expected 12 cusps, got {}",
                self.cusps.len()
            )));
        }
        if let Some((idx, _)) = self
            .cusps
            .iter()
            .enumerate()
            .find(|(_, degree)| !degree.is_finite())
        {
            return Err(invalid(format!("cusp {} is not a finite degree", idx + 1)));
        }
        for (name, values) in &self.planets {
            let Some(degree) = values.first() else {
                return Err(invalid(format!("point `{name}` has no position")));
            };
            if !degree.is_finite() || values.iter().any(|v| !v.is_finite()) {
                return Err(invalid(format!("point `{name}` has a non-finite value")));
            }
        }
        Ok(())
    }

    pub fn points(&self) -> Vec<ChartPoint> {
        self.planets
            .iter()
            .filter_map(|(name, values)| {
                let degree = values.first()?.rem_euclid(360.0);
                Some(ChartPoint {
                    name: name.clone(),
                    degree,
                    retrograde: values.get(1).is_some_and(|speed| *speed < 0.0),
                })
            })
            .collect()
    }

    pub fn ascendant(&self) -> Option<f32> {
        self.cusps.first().copied()
    }
}

fn invalid(message: String) -> ChartError {
    ChartError::InvalidChartData { message }
}

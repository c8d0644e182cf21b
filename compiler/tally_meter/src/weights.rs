//! Per-kind work-unit weights.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{OperationKind, WeightConfigError};

/// Calibrated cost of one operation of each kind.
///
/// Weights are configuration, not semantics: swapping tables changes the
/// reported work total and nothing else.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightTable {
    weights: [f64; OperationKind::COUNT],
}

/// Default calibration, indexed by wire code.
const CALIBRATED: [f64; OperationKind::COUNT] = [
    1.0047, // add
    1.0,    // sub
    1.0025, // mul
    1.0147, // div
    1.0,    // less_than
    1.0,    // greater_than
    1.0,    // equal
    1.0,    // not_equal
    1.5261, // is_prime
    1.4841, // sin
    1.4907, // tan
    3.5527, // rand
    1.8782, // pow
    1.43,   // sqrt
    1.5093, // len
    2.4969, // fib
    1.0,    // string_concat
];

impl WeightTable {
    /// The same weight for every kind.
    pub fn uniform(weight: f64) -> Self {
        WeightTable {
            weights: [weight; OperationKind::COUNT],
        }
    }

    /// Override one kind's weight. Weights must be finite and non-negative.
    pub fn with_weight(
        mut self,
        kind: OperationKind,
        weight: f64,
    ) -> Result<Self, WeightConfigError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(WeightConfigError::InvalidWeight {
                kind: kind.name().to_owned(),
                weight,
            });
        }
        self.weights[kind.index()] = weight;
        Ok(self)
    }

    #[inline]
    pub fn weight(&self, kind: OperationKind) -> f64 {
        self.weights[kind.index()]
    }

    /// `(kind, weight)` pairs in wire-code order.
    pub fn iter(&self) -> impl Iterator<Item = (OperationKind, f64)> + '_ {
        OperationKind::ALL
            .into_iter()
            .map(|kind| (kind, self.weight(kind)))
    }

    /// Parse a JSON object of `"kind_name": weight` overrides on top of the
    /// default calibration.
    pub fn from_json_str(text: &str) -> Result<Self, WeightConfigError> {
        let overrides: BTreeMap<String, f64> = serde_json::from_str(text)?;
        let mut table = WeightTable::default();
        for (name, weight) in overrides {
            let Some(kind) = OperationKind::from_name(&name) else {
                return Err(WeightConfigError::UnknownKind(name));
            };
            table = table.with_weight(kind, weight)?;
        }
        Ok(table)
    }

    /// Load overrides from a JSON file.
    pub fn load(path: &Path) -> Result<Self, WeightConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| WeightConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        WeightTable {
            weights: CALIBRATED,
        }
    }
}

impl Serialize for WeightTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(OperationKind::COUNT))?;
        for (kind, weight) in self.iter() {
            map.serialize_entry(kind.name(), &weight)?;
        }
        map.end()
    }
}

impl fmt::Display for WeightTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, weight) in self.iter() {
            writeln!(f, "{:>2}  {:<14}{weight}", kind.code(), kind.name())?;
        }
        Ok(())
    }
}

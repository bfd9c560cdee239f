use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One result row as returned by the analytical store: column name → scalar.
pub type Row = serde_json::Map<String, Value>;

// ── Column names ────────────────────────────────────────────────────

pub const COL_SYMBOL: &str = "symbol";
pub const COL_GROWTH: &str = "obq_growth_score";
pub const COL_QUALITY: &str = "OBQ_Quality_Rank";
pub const COL_MOMENTUM: &str = "obq_momentum_score";
pub const COL_FINSTR: &str = "obq_finstr_score";
pub const COL_VALUE: &str = "obq_value_score";

pub const COL_GM: &str = "computed_obq_gm";
pub const COL_GQM: &str = "computed_obq_gqm";
pub const COL_GQV: &str = "computed_obq_gqv";
pub const COL_VQF: &str = "computed_obq_vqf";
pub const COL_COMPOSITE: &str = "computed_obq_composite";

/// The five OBQ component scores of the latest score snapshot.
/// Any of them may be missing (no snapshot, or a null column).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ObqComponents {
    pub growth: Option<f64>,
    pub quality: Option<f64>,
    pub momentum: Option<f64>,
    pub finstr: Option<f64>,
    pub value: Option<f64>,
}

impl ObqComponents {
    /// Read the component columns from a row. Numbers and numeric strings are
    /// accepted; anything else counts as null.
    pub fn from_row(row: &Row) -> Self {
        Self {
            growth: numeric(row.get(COL_GROWTH)),
            quality: numeric(row.get(COL_QUALITY)),
            momentum: numeric(row.get(COL_MOMENTUM)),
            finstr: numeric(row.get(COL_FINSTR)),
            value: numeric(row.get(COL_VALUE)),
        }
    }

    pub fn derive(&self) -> DerivedScores {
        DerivedScores::from_components(self)
    }
}

/// Composite indicators derived from [`ObqComponents`].
///
/// A score is `None` unless every one of its inputs is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedScores {
    /// avg(growth, momentum)
    pub gm: Option<f64>,
    /// avg(growth, quality, momentum)
    pub gqm: Option<f64>,
    /// avg(growth, quality, value)
    pub gqv: Option<f64>,
    /// avg(value, quality, finstr)
    pub vqf: Option<f64>,
    /// (growth + momentum + quality + 0.5·value + 0.5·finstr) / 5
    pub composite: Option<f64>,
}

impl DerivedScores {
    pub fn from_components(c: &ObqComponents) -> Self {
        let ObqComponents {
            growth,
            quality,
            momentum,
            finstr,
            value,
        } = *c;

        Self {
            gm: growth
                .zip(momentum)
                .map(|(g, m)| (g + m) / 2.0),
            gqm: growth
                .zip(quality)
                .zip(momentum)
                .map(|((g, q), m)| (g + q + m) / 3.0),
            gqv: growth
                .zip(quality)
                .zip(value)
                .map(|((g, q), v)| (g + q + v) / 3.0),
            vqf: value
                .zip(quality)
                .zip(finstr)
                .map(|((v, q), f)| (v + q + f) / 3.0),
            composite: match (growth, momentum, quality, value, finstr) {
                (Some(g), Some(m), Some(q), Some(v), Some(f)) => {
                    Some((g + m + q + 0.5 * v + 0.5 * f) / 5.0)
                }
                _ => None,
            },
        }
    }

    /// Read the `computed_obq_*` columns back from a row.
    pub fn from_row(row: &Row) -> Self {
        Self {
            gm: numeric(row.get(COL_GM)),
            gqm: numeric(row.get(COL_GQM)),
            gqv: numeric(row.get(COL_GQV)),
            vqf: numeric(row.get(COL_VQF)),
            composite: numeric(row.get(COL_COMPOSITE)),
        }
    }

    /// Overwrite the `computed_obq_*` columns of `row` with these values.
    pub fn write_into(&self, row: &mut Row) {
        row.insert(COL_GM.into(), Value::from(self.gm));
        row.insert(COL_GQM.into(), Value::from(self.gqm));
        row.insert(COL_GQV.into(), Value::from(self.gqv));
        row.insert(COL_VQF.into(), Value::from(self.vqf));
        row.insert(COL_COMPOSITE.into(), Value::from(self.composite));
    }
}

/// Fundamentals for one symbol plus its derived OBQ scores.
///
/// Serialized as the flat column map the store returned, so every
/// fundamentals column reaches the caller untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FundamentalsRecord {
    columns: Row,
}

impl FundamentalsRecord {
    /// Build a record from a store row, recomputing the derived columns from
    /// the component scores so their numeric form does not depend on how the
    /// store encodes decimals.
    pub fn from_row(mut row: Row) -> Self {
        ObqComponents::from_row(&row).derive().write_into(&mut row);
        Self { columns: row }
    }

    pub fn symbol(&self) -> Option<&str> {
        self.columns.get(COL_SYMBOL).and_then(Value::as_str)
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }

    pub fn columns(&self) -> &Row {
        &self.columns
    }

    pub fn into_columns(self) -> Row {
        self.columns
    }

    pub fn obq_components(&self) -> ObqComponents {
        ObqComponents::from_row(&self.columns)
    }

    pub fn derived_scores(&self) -> DerivedScores {
        DerivedScores::from_row(&self.columns)
    }
}

fn numeric(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok().filter(|v: &f64| v.is_finite()),
        _ => None,
    }
}

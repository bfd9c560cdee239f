use crate::models::ticker::Ticker;

/// Fundamentals dataset, one row per symbol.
pub const FUNDAMENTALS_TABLE: &str = "my_db.main.GuruFocus_Fundamentals";

/// Time-partitioned OBQ score snapshots, keyed by (symbol, calculation_date).
pub const OBQ_SCORES_TABLE: &str = "my_db.main.OBQ_Scores";

/// Buying Power / Selling Pressure history.
pub const BPSP_TABLE: &str = "my_db.main.NDR_BP_SP_history";

/// Builds SQL text for the read-only dashboard queries.
///
/// Only validated [`Ticker`] values are ever interpolated.
pub struct QueryBuilder;

impl QueryBuilder {
    /// Fundamentals for `tickers`, left-joined with the latest OBQ snapshot
    /// per symbol, plus the five derived `computed_obq_*` columns.
    ///
    /// Returns `None` for an empty ticker set (`IN ()` is not valid SQL).
    pub fn fundamentals(tickers: &[Ticker]) -> Option<String> {
        if tickers.is_empty() {
            return None;
        }

        let symbols = tickers
            .iter()
            .map(Ticker::sql_literal)
            .collect::<Vec<_>>()
            .join(", ");

        // Rows sharing the max calculation_date for one symbol are resolved by
        // the store; there is no secondary ordering key.
        Some(format!(
            "WITH latest_obq AS (
    SELECT *
    FROM {OBQ_SCORES_TABLE}
    QUALIFY ROW_NUMBER() OVER (PARTITION BY symbol ORDER BY calculation_date DESC) = 1
)
SELECT
    gf.*,
    obq.obq_growth_score,
    obq.OBQ_Quality_Rank,
    obq.obq_momentum_score,
    obq.obq_finstr_score,
    obq.obq_value_score,
    CASE
        WHEN obq.obq_growth_score IS NOT NULL AND obq.obq_momentum_score IS NOT NULL
        THEN (obq.obq_growth_score + obq.obq_momentum_score) / 2.0
        ELSE NULL
    END AS computed_obq_gm,
    CASE
        WHEN obq.obq_growth_score IS NOT NULL AND obq.OBQ_Quality_Rank IS NOT NULL AND obq.obq_momentum_score IS NOT NULL
        THEN (obq.obq_growth_score + obq.OBQ_Quality_Rank + obq.obq_momentum_score) / 3.0
        ELSE NULL
    END AS computed_obq_gqm,
    CASE
        WHEN obq.obq_value_score IS NOT NULL AND obq.obq_growth_score IS NOT NULL AND obq.OBQ_Quality_Rank IS NOT NULL
        THEN (obq.obq_growth_score + obq.OBQ_Quality_Rank + obq.obq_value_score) / 3.0
        ELSE NULL
    END AS computed_obq_gqv,
    CASE
        WHEN obq.obq_value_score IS NOT NULL AND obq.OBQ_Quality_Rank IS NOT NULL AND obq.obq_finstr_score IS NOT NULL
        THEN (obq.obq_value_score + obq.OBQ_Quality_Rank + obq.obq_finstr_score) / 3.0
        ELSE NULL
    END AS computed_obq_vqf,
    CASE
        WHEN obq.obq_value_score IS NOT NULL AND obq.obq_growth_score IS NOT NULL
             AND obq.obq_momentum_score IS NOT NULL AND obq.OBQ_Quality_Rank IS NOT NULL
             AND obq.obq_finstr_score IS NOT NULL
        THEN (obq.obq_growth_score + obq.obq_momentum_score + obq.OBQ_Quality_Rank
              + (0.5 * obq.obq_value_score) + (0.5 * obq.obq_finstr_score)) / 5.0
        ELSE NULL
    END AS computed_obq_composite
FROM {FUNDAMENTALS_TABLE} gf
LEFT JOIN latest_obq obq ON gf.symbol = obq.symbol
WHERE gf.symbol IN ({symbols})"
        ))
    }

    /// All BPSP columns for the trailing five years, oldest first.
    pub fn bpsp() -> String {
        format!(
            "SELECT *
FROM {BPSP_TABLE}
WHERE date >= CURRENT_DATE - INTERVAL '5 years'
ORDER BY date ASC"
        )
    }
}

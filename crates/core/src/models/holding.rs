use serde::{Deserialize, Serialize};

/// A position in the portfolio: ticker, average cost per share, share count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Ticker symbol, uppercased.
    pub symbol: String,

    /// Average cost per share, in USD.
    pub cost_basis: f64,

    /// Number of shares held.
    pub shares: u64,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, cost_basis: f64, shares: u64) -> Self {
        Self {
            symbol: symbol.into().trim().to_uppercase(),
            cost_basis,
            shares,
        }
    }

    /// cost_basis × shares
    pub fn total_cost(&self) -> f64 {
        self.cost_basis * self.shares as f64
    }
}

/// The static "Persistent Value" positions shown until live data is wired in.
pub fn default_holdings() -> Vec<Holding> {
    [
        ("SPMO", 97.40, 14301),
        ("ASML", 660.32, 1042),
        ("MNST", 50.01, 8234),
        ("MSCI", 342.94, 2016),
        ("COST", 655.21, 798),
        ("AVGO", 138.00, 6088),
        ("MA", 418.76, 1389),
        ("FICO", 1850.00, 778),
        ("SPGI", 427.93, 1554),
        ("IDXX", 378.01, 1570),
        ("ISRG", 322.50, 2769),
        ("V", 276.65, 2338),
        ("CAT", 287.70, 1356),
        ("ORLY", 103.00, 3566),
        ("HEI", 172.00, 1804),
        ("CPRT", 52.00, 21136),
        ("WM", 177.77, 3082),
        ("TSLA", 270.00, 5022),
        ("AAPL", 181.40, 2865),
        ("LRCX", 73.24, 18667),
        ("TSM", 99.61, 5850),
    ]
    .into_iter()
    .map(|(symbol, cost_basis, shares)| Holding::new(symbol, cost_basis, shares))
    .collect()
}

//! Economic indicators as a typed enum.
//!
//! The front end speaks short names (`gdp`, `inflation`, `unemployment`);
//! the World Bank speaks its own indicator codes. The mapping is fixed at
//! compile time and immutable for the process lifetime — resolving a name is
//! a pure lookup with no side effects.
//!
//! Unknown names are rejected at the handler level with `400 Bad Request`
//! before any upstream call is made.

use std::fmt;
use std::str::FromStr;

/// A supported economic indicator.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Indicator {
    /// Gross domestic product, current US$.
    Gdp,
    /// Consumer-price inflation, annual %.
    Inflation,
    /// Unemployment, % of total labor force.
    Unemployment,
}

impl Indicator {
    /// Returns the World Bank indicator code used in upstream URLs.
    pub fn code(self) -> &'static str {
        match self {
            Self::Gdp          => "NY.GDP.MKTP.CD",
            Self::Inflation    => "FP.CPI.TOTL.ZG",
            Self::Unemployment => "SL.UEM.TOTL.ZS",
        }
    }

    /// Returns the short lowercase name used in request paths.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gdp          => "gdp",
            Self::Inflation    => "inflation",
            Self::Unemployment => "unemployment",
        }
    }
}

/// Parses a lowercase short name (e.g. `"gdp"`). Callers lowercase the path
/// parameter before parsing; the match itself is case-sensitive.
impl FromStr for Indicator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gdp"          => Ok(Self::Gdp),
            "inflation"    => Ok(Self::Inflation),
            "unemployment" => Ok(Self::Unemployment),
            _              => Err(()),
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

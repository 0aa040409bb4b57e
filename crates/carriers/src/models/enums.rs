use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Line of business a quote request is rated under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineOfBusiness {
    #[default]
    Unknown,
    GeneralLiability,
    Property,
    Flood,
    WorkerCompensation,
}

impl LineOfBusiness {
    /// Every line that can be quoted, in detection priority order.
    pub const QUOTABLE: [LineOfBusiness; 4] = [
        LineOfBusiness::WorkerCompensation,
        LineOfBusiness::Flood,
        LineOfBusiness::Property,
        LineOfBusiness::GeneralLiability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LineOfBusiness::Unknown => "Unknown",
            LineOfBusiness::GeneralLiability => "GeneralLiability",
            LineOfBusiness::Property => "Property",
            LineOfBusiness::Flood => "Flood",
            LineOfBusiness::WorkerCompensation => "WorkerCompensation",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, LineOfBusiness::Unknown)
    }
}

impl fmt::Display for LineOfBusiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineOfBusiness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "unknown" => Ok(LineOfBusiness::Unknown),
            "generalliability" | "gl" => Ok(LineOfBusiness::GeneralLiability),
            "property" => Ok(LineOfBusiness::Property),
            "flood" => Ok(LineOfBusiness::Flood),
            "workercompensation" | "workerscompensation" | "workercomp" | "wc" => {
                Ok(LineOfBusiness::WorkerCompensation)
            }
            _ => Err(format!("Unknown line of business: {}", s)),
        }
    }
}

/// Upstream carrier aggregator a request is routed to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderType {
    #[default]
    Unknown,
    Dyad,
    Herald,
    Zywave,
}

impl ProviderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Unknown => "Unknown",
            ProviderType::Dyad => "Dyad",
            ProviderType::Herald => "Herald",
            ProviderType::Zywave => "Zywave",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ProviderType::Unknown)
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unknown" => Ok(ProviderType::Unknown),
            "dyad" => Ok(ProviderType::Dyad),
            "herald" => Ok(ProviderType::Herald),
            "zywave" => Ok(ProviderType::Zywave),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

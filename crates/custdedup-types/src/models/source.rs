//! Source system tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CustomerError;

/// Origin system a customer record was imported from.
///
/// The set is closed: every match over it is exhaustive, and an unknown tag
/// can only appear as a parse failure at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceSystem {
    Salesforce,
    Hubspot,
    Internal,
}

impl SourceSystem {
    /// Every recognized source, in reporting order.
    pub const ALL: [Self; 3] = [Self::Salesforce, Self::Hubspot, Self::Internal];

    /// Wire and storage representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Salesforce => "salesforce",
            Self::Hubspot => "hubspot",
            Self::Internal => "internal",
        }
    }

    /// Human-readable name for CLI output.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Salesforce => "Salesforce",
            Self::Hubspot => "HubSpot",
            Self::Internal => "Internal",
        }
    }
}

impl fmt::Display for SourceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceSystem {
    type Err = CustomerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "salesforce" => Ok(Self::Salesforce),
            "hubspot" => Ok(Self::Hubspot),
            "internal" => Ok(Self::Internal),
            other => Err(CustomerError::InvalidSource { value: other.to_owned() }),
        }
    }
}

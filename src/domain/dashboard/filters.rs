//! Dashboard filter selection.

use serde::Serialize;

use crate::domain::foundation::ValidationError;
use crate::domain::profile::{Contract, InternetService};

/// Select value used by the dashboard for "no filter".
pub const ALL_LABEL: &str = "All";

/// Sentinel for "no filter" on the senior-citizen select.
pub const SENIOR_CITIZEN_ALL: i32 = -1;

/// A single filter: either everything, or only one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "value")]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T> Filter<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Filter::All => None,
            Filter::Only(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Filter<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Filter::All, Filter::Only)
    }
}

/// Filters applied to the aggregate statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFilters {
    pub contract: Filter<Contract>,
    pub internet_service: Filter<InternetService>,
    pub senior_citizen: Filter<bool>,
}

impl DashboardFilters {
    /// Parses the dashboard's select values: `"All"` for the two label
    /// selects and `-1` for the senior-citizen select mean no filter.
    pub fn from_raw(contract: &str, internet_service: &str, senior_citizen: i32) -> Result<Self, ValidationError> {
        let contract = match contract.trim() {
            ALL_LABEL => Filter::All,
            label => Filter::Only(label.parse()?),
        };
        let internet_service = match internet_service.trim() {
            ALL_LABEL => Filter::All,
            label => Filter::Only(label.parse()?),
        };
        let senior_citizen = match senior_citizen {
            SENIOR_CITIZEN_ALL => Filter::All,
            0 => Filter::Only(false),
            1 => Filter::Only(true),
            other => {
                return Err(ValidationError::out_of_range(
                    "senior_citizen",
                    SENIOR_CITIZEN_ALL,
                    1,
                    other,
                ))
            }
        };
        Ok(Self {
            contract,
            internet_service,
            senior_citizen,
        })
    }

    /// Query parameters for the stats request. Unfiltered dimensions are
    /// omitted entirely.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Filter::Only(contract) = self.contract {
            params.push(("contract", contract.label().to_string()));
        }
        if let Filter::Only(service) = self.internet_service {
            params.push(("internet_service", service.label().to_string()));
        }
        if let Filter::Only(senior) = self.senior_citizen {
            params.push(("senior_citizen", u8::from(senior).to_string()));
        }
        params
    }

    pub fn is_unfiltered(&self) -> bool {
        self.contract.is_all() && self.internet_service.is_all() && self.senior_citizen.is_all()
    }
}

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

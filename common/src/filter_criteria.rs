//! Shared filter criteria models.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};


/// Four independent multi-select filters. An empty set leaves its dimension unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterCriteria {
    pub countries: BTreeSet<String>,
    pub types: BTreeSet<String>,
    #[serde(alias = "infrastructure_tags")]
    pub infrastructure: BTreeSet<String>,
    #[serde(alias = "data_tags")]
    pub data: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn is_unconstrained(&self) -> bool {
        self.countries.is_empty() && self.types.is_empty() && self.infrastructure.is_empty() && self.data.is_empty()
    }

    pub fn with_countries<I: IntoIterator<Item = S>, S: Into<String>>(mut self, countries: I) -> Self {
        self.countries = countries.into_iter().map(|s| s.into()).collect();
        self
    }

    pub fn with_types<I: IntoIterator<Item = S>, S: Into<String>>(mut self, types: I) -> Self {
        self.types = types.into_iter().map(|s| s.into()).collect();
        self
    }

    pub fn with_infrastructure<I: IntoIterator<Item = S>, S: Into<String>>(mut self, tags: I) -> Self {
        self.infrastructure = tags.into_iter().map(|s| s.into()).collect();
        self
    }

    pub fn with_data<I: IntoIterator<Item = S>, S: Into<String>>(mut self, tags: I) -> Self {
        self.data = tags.into_iter().map(|s| s.into()).collect();
        self
    }
}

//! Rate table wire types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Latest rates anchored at `base`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestRates {
    pub base: String,
    #[serde(default)]
    pub date: Option<String>,
    pub rates: HashMap<String, f64>,
}

use serde::{Deserialize, Serialize};

use crate::model::metric::{MonthMap, MonthlyMetric};
use crate::model::month::Month;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManagerRecord {
    pub name: String,
    pub income: MonthMap<MonthlyMetric>,
    pub active_partners: MonthMap<MonthlyMetric>,
}

/// Everything the dashboard shows for one load.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateView {
    pub managers: Vec<ManagerRecord>,
    pub total_income: MonthMap<MonthlyMetric>,
    pub total_active_partners: MonthMap<MonthlyMetric>,
    pub year: i32,
}

impl AggregateView {
    pub fn empty(year: i32) -> Self {
        Self {
            managers: Vec::new(),
            total_income: MonthMap::new(),
            total_active_partners: MonthMap::new(),
            year,
        }
    }

    pub fn total_income_for(&self, month: Month) -> Option<&MonthlyMetric> {
        self.total_income.get(month)
    }

    pub fn total_active_partners_for(&self, month: Month) -> Option<&MonthlyMetric> {
        self.total_active_partners.get(month)
    }
}

use serde::{Deserialize, Deserializer, Serialize};

/// Wire shape of the dashboard endpoint. Every field is optional at decode
/// time; shape checks happen in the load service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RawApiResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Option<RawData>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RawData {
    #[serde(default)]
    pub total: Vec<RawMonthData>,
    #[serde(default)]
    pub table: Option<Vec<RawManager>>,
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawMonthData {
    #[serde(default)]
    pub plan: RawMetricPair,
    #[serde(default)]
    pub fact: RawMetricPair,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawMetricPair {
    #[serde(default)]
    pub income: Option<f64>,
    #[serde(default)]
    pub active_partners: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawManager {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub admin_name: String,
    #[serde(default)]
    pub months: Vec<RawMonthData>,
}

impl RawMonthData {
    pub fn new(plan_income: f64, fact_income: f64, plan_partners: f64, fact_partners: f64) -> Self {
        Self {
            plan: RawMetricPair {
                income: Some(plan_income),
                active_partners: Some(plan_partners),
            },
            fact: RawMetricPair {
                income: Some(fact_income),
                active_partners: Some(fact_partners),
            },
        }
    }
}

// Whole numbers only, including `2024.0` and `"2024"`; anything else is
// treated as missing.
fn lenient_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    let year = match &value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(year.and_then(|y| i32::try_from(y).ok()))
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

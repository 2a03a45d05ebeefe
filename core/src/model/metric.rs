use serde::{Deserialize, Serialize};

use crate::model::month::{Month, MONTH_COUNT};

/// Planned vs. actual value of one metric in one month.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyMetric {
    pub plan: Option<f64>,
    pub fact: Option<f64>,
}

impl MonthlyMetric {
    pub fn new(plan: Option<f64>, fact: Option<f64>) -> Self {
        Self { plan, fact }
    }

    pub fn both(plan: f64, fact: f64) -> Self {
        Self {
            plan: Some(plan),
            fact: Some(fact),
        }
    }
}

/// Fixed-size map with one optional slot per month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthMap<T> {
    slots: [Option<T>; MONTH_COUNT],
}

impl<T> Default for MonthMap<T> {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }
}

impl<T> MonthMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map with every month filled by `f`.
    pub fn from_fn(mut f: impl FnMut(Month) -> T) -> Self {
        Self {
            slots: std::array::from_fn(|i| Some(f(Month::from_index(i)))),
        }
    }

    pub fn get(&self, month: Month) -> Option<&T> {
        self.slots[month.index()].as_ref()
    }

    pub fn insert(&mut self, month: Month, value: T) -> Option<T> {
        self.slots[month.index()].replace(value)
    }

    pub fn contains(&self, month: Month) -> bool {
        self.slots[month.index()].is_some()
    }

    /// Number of filled months.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_total(&self) -> bool {
        self.len() == MONTH_COUNT
    }

    /// Filled entries in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|v| (Month::from_index(i), v)))
    }

    pub fn months(&self) -> impl Iterator<Item = Month> + '_ {
        self.iter().map(|(month, _)| month)
    }
}

impl<T> FromIterator<(Month, T)> for MonthMap<T> {
    fn from_iter<I: IntoIterator<Item = (Month, T)>>(iter: I) -> Self {
        let mut map = MonthMap::new();
        for (month, value) in iter {
            map.insert(month, value);
        }
        map
    }
}

// Serialized as an object keyed by lowercase month name, absent months omitted.
impl<T: Serialize> Serialize for MonthMap<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (month, value) in self.iter() {
            map.serialize_entry(&month, value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for MonthMap<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = std::collections::BTreeMap::<Month, T>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_map_insert_and_iterate_in_order() {
        let mut map = MonthMap::new();
        map.insert(Month::March, 3);
        map.insert(Month::January, 1);
        assert_eq!(map.len(), 2);
        assert!(!map.contains(Month::February));
        let keys: Vec<Month> = map.months().collect();
        assert_eq!(keys, vec![Month::January, Month::March]);
    }

    #[test]
    fn test_month_map_json_shape() {
        let mut map = MonthMap::new();
        map.insert(Month::May, MonthlyMetric::new(Some(10.0), None));
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"may": {"plan": 10.0, "fact": null}}));

        let back: MonthMap<MonthlyMetric> = serde_json::from_value(json).unwrap();
        assert_eq!(back, map);
    }
}

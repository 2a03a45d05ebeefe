use tracing::debug;

use crate::error::ShapeError;
use crate::model::metric::{MonthMap, MonthlyMetric};
use crate::model::month::{Month, MONTH_COUNT};
use crate::model::raw::{RawData, RawManager, RawMonthData};
use crate::model::view::{AggregateView, ManagerRecord};

/// Reshapes a raw payload into the per-month view.
///
/// Position `i` of every months array is calendar month `i`. Entries past
/// December are ignored and short arrays leave the trailing months absent.
/// Never fails; validating `success`/`table` is the caller's job.
pub fn transform(raw: &RawData, fallback_year: i32) -> AggregateView {
    let (total_income, total_active_partners) = split_months(&raw.total);

    let managers: Vec<ManagerRecord> = raw
        .table
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(to_manager_record)
        .collect();

    debug!(
        managers = managers.len(),
        total_months = total_income.len(),
        "transformed raw payload"
    );

    AggregateView {
        managers,
        total_income,
        total_active_partners,
        year: resolve_year(raw.year, fallback_year),
    }
}

/// Same as [`transform`] but rejects any months array that is not exactly
/// 12 entries long.
pub fn transform_checked(raw: &RawData, fallback_year: i32) -> Result<AggregateView, ShapeError> {
    if raw.total.len() != MONTH_COUNT {
        return Err(ShapeError::TotalMonths {
            found: raw.total.len(),
        });
    }
    for manager in raw.table.as_deref().unwrap_or_default() {
        if manager.months.len() != MONTH_COUNT {
            return Err(ShapeError::ManagerMonths {
                name: manager.admin_name.clone(),
                found: manager.months.len(),
            });
        }
    }
    Ok(transform(raw, fallback_year))
}

fn to_manager_record(raw: &RawManager) -> ManagerRecord {
    let (income, active_partners) = split_months(&raw.months);
    ManagerRecord {
        name: raw.admin_name.clone(),
        income,
        active_partners,
    }
}

fn split_months(months: &[RawMonthData]) -> (MonthMap<MonthlyMetric>, MonthMap<MonthlyMetric>) {
    let mut income = MonthMap::new();
    let mut partners = MonthMap::new();

    for (index, data) in months.iter().enumerate() {
        let Some(month) = Month::at_position(index) else {
            break;
        };
        income.insert(month, MonthlyMetric::new(data.plan.income, data.fact.income));
        partners.insert(
            month,
            MonthlyMetric::new(data.plan.active_partners, data.fact.active_partners),
        );
    }

    (income, partners)
}

// A zero year counts as missing.
fn resolve_year(year: Option<i32>, fallback: i32) -> i32 {
    match year {
        Some(y) if y != 0 => y,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month_data(i: usize) -> RawMonthData {
        let base = i as f64;
        RawMonthData::new(1000.0 + base, 900.5 + base, 10.0 + base, 8.0 + base)
    }

    fn manager(name: &str, months: usize) -> RawManager {
        RawManager {
            admin_name: name.to_string(),
            months: (0..months).map(month_data).collect(),
        }
    }

    fn payload(total_months: usize, managers: Vec<RawManager>, year: Option<i32>) -> RawData {
        RawData {
            total: (0..total_months).map(month_data).collect(),
            table: Some(managers),
            year,
        }
    }

    #[test]
    fn test_full_year_maps_every_month_verbatim() {
        let raw = payload(12, vec![manager("Alexandra Ivanova", 12)], Some(2024));
        let view = transform(&raw, 2000);

        assert_eq!(view.year, 2024);
        assert!(view.total_income.is_total());
        assert!(view.total_active_partners.is_total());

        let record = &view.managers[0];
        assert_eq!(record.name, "Alexandra Ivanova");
        let keys: Vec<Month> = record.income.months().collect();
        assert_eq!(keys, Month::ALL.to_vec());

        for (i, month) in Month::ALL.iter().enumerate() {
            let b = i as f64;
            assert_eq!(
                record.income.get(*month),
                Some(&MonthlyMetric::both(1000.0 + b, 900.5 + b))
            );
            assert_eq!(
                record.active_partners.get(*month),
                Some(&MonthlyMetric::both(10.0 + b, 8.0 + b))
            );
        }
    }

    #[test]
    fn test_short_months_leave_trailing_months_absent() {
        let raw = payload(3, vec![manager("Peter Petrov", 5)], None);
        let view = transform(&raw, 2025);

        let record = &view.managers[0];
        assert_eq!(record.income.len(), 5);
        assert!(record.income.contains(Month::May));
        assert!(!record.income.contains(Month::June));
        assert_eq!(view.total_income.len(), 3);
        assert_eq!(view.total_income.get(Month::April), None);
    }

    #[test]
    fn test_extra_months_are_ignored() {
        let raw = payload(14, vec![manager("Peter Petrov", 13)], None);
        let view = transform(&raw, 2025);
        assert_eq!(view.total_income.len(), 12);
        assert_eq!(view.managers[0].income.len(), 12);
        assert_eq!(
            view.total_income.get(Month::December),
            Some(&MonthlyMetric::both(1011.0, 911.5))
        );
    }

    #[test]
    fn test_null_values_stay_absent() {
        let mut raw = payload(1, vec![], None);
        raw.total[0].fact.income = None;
        let view = transform(&raw, 2025);
        assert_eq!(
            view.total_income.get(Month::January),
            Some(&MonthlyMetric::new(Some(1000.0), None))
        );
    }

    #[test]
    fn test_year_fallback() {
        assert_eq!(transform(&payload(0, vec![], None), 2031).year, 2031);
        assert_eq!(transform(&payload(0, vec![], Some(0)), 2031).year, 2031);
    }

    #[test]
    fn test_managers_keep_payload_order() {
        let raw = payload(12, vec![manager("B", 12), manager("A", 12), manager("C", 0)], None);
        let view = transform(&raw, 2025);
        let names: Vec<&str> = view.managers.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_missing_table_yields_no_managers() {
        let raw = RawData {
            total: vec![],
            table: None,
            year: None,
        };
        let view = transform(&raw, 2025);
        assert!(view.managers.is_empty());
        assert!(view.total_income.is_empty());
    }

    #[test]
    fn test_checked_rejects_wrong_lengths() {
        let raw = payload(11, vec![], None);
        assert_eq!(
            transform_checked(&raw, 2025).unwrap_err(),
            ShapeError::TotalMonths { found: 11 }
        );

        let raw = payload(12, vec![manager("Timirgaan Altanov", 13)], None);
        assert_eq!(
            transform_checked(&raw, 2025).unwrap_err(),
            ShapeError::ManagerMonths {
                name: "Timirgaan Altanov".to_string(),
                found: 13
            }
        );

        let raw = payload(12, vec![manager("Timirgaan Altanov", 12)], None);
        assert!(transform_checked(&raw, 2025).is_ok());
    }
}

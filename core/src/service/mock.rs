use rand::Rng;

use crate::model::metric::{MonthMap, MonthlyMetric};
use crate::model::month::Month;
use crate::model::view::{AggregateView, ManagerRecord};

pub const MOCK_MANAGERS: [&str; 5] = [
    "Mikhail Reshetnikov",
    "Timirgaan Altanov",
    "Alexandra Veresovich",
    "Alexandra Ivanova",
    "Peter Petrov",
];

const INCOME_PLAN: std::ops::Range<u32> = 50_000..250_000;
const INCOME_FACT: std::ops::Range<u32> = 60_000..210_000;
const PARTNERS_PLAN: std::ops::Range<u32> = 50..200;
const PARTNERS_FACT: std::ops::Range<u32> = 60..180;

/// Builds a fallback view with random per-manager values. Totals are the
/// exact per-month sums across managers.
pub fn generate_mock<R: Rng>(rng: &mut R, year: i32) -> AggregateView {
    let managers: Vec<ManagerRecord> = MOCK_MANAGERS
        .iter()
        .map(|name| ManagerRecord {
            name: name.to_string(),
            income: random_months(rng, INCOME_PLAN, INCOME_FACT),
            active_partners: random_months(rng, PARTNERS_PLAN, PARTNERS_FACT),
        })
        .collect();

    let total_income = sum_by_month(&managers, |m| &m.income);
    let total_active_partners = sum_by_month(&managers, |m| &m.active_partners);

    AggregateView {
        managers,
        total_income,
        total_active_partners,
        year,
    }
}

/// [`generate_mock`] with the thread-local RNG.
pub fn mock_view(year: i32) -> AggregateView {
    generate_mock(&mut rand::rng(), year)
}

fn random_months<R: Rng>(
    rng: &mut R,
    plan: std::ops::Range<u32>,
    fact: std::ops::Range<u32>,
) -> MonthMap<MonthlyMetric> {
    MonthMap::from_fn(|_| {
        MonthlyMetric::both(
            rng.random_range(plan.clone()) as f64,
            rng.random_range(fact.clone()) as f64,
        )
    })
}

fn sum_by_month<F>(managers: &[ManagerRecord], metric: F) -> MonthMap<MonthlyMetric>
where
    F: Fn(&ManagerRecord) -> &MonthMap<MonthlyMetric>,
{
    MonthMap::from_fn(|month: Month| {
        let mut plan = 0.0;
        let mut fact = 0.0;
        for manager in managers {
            if let Some(value) = metric(manager).get(month) {
                plan += value.plan.unwrap_or(0.0);
                fact += value.fact.unwrap_or(0.0);
            }
        }
        MonthlyMetric::both(plan, fact)
    })
}

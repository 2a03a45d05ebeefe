use planfact_core::{
    format_count, format_currency, render_cell, AggregateView, DataOrigin, MonthMap, MonthlyMetric,
    VisibleWindow,
};
use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};

type Formatter = fn(Option<f64>) -> String;

pub fn show_table(view: &AggregateView, window: &VisibleWindow, origin: DataOrigin) {
    let source = match origin {
        DataOrigin::Live => "live",
        DataOrigin::Mock => "mock data",
    };
    println!(
        "\x1b[1;36mYear {}\x1b[0m  {} - {} ({})",
        view.year,
        window.first(),
        window.last(),
        source
    );
    println!("{}", build_table(view, window));
}

pub fn build_table(view: &AggregateView, window: &VisibleWindow) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Manager".to_string(), "Metric".to_string()];
    for month in window.iter() {
        header.push(format!("{} Plan", month.display_name()));
        header.push(format!("{} Fact", month.display_name()));
    }
    builder.push_record(header);

    builder.push_record(metric_row(
        "Total",
        "Total income",
        &view.total_income,
        window,
        format_currency,
    ));
    builder.push_record(metric_row(
        "",
        "Total active partners",
        &view.total_active_partners,
        window,
        format_count,
    ));

    for manager in &view.managers {
        builder.push_record(metric_row(
            &manager.name,
            "Income",
            &manager.income,
            window,
            format_currency,
        ));
        builder.push_record(metric_row(
            "",
            "Active partners",
            &manager.active_partners,
            window,
            format_count,
        ));
    }

    let mut table = builder.build();
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

fn metric_row(
    name: &str,
    label: &str,
    values: &MonthMap<MonthlyMetric>,
    window: &VisibleWindow,
    format: Formatter,
) -> Vec<String> {
    let mut row = vec![name.to_string(), label.to_string()];
    for month in window.iter() {
        let (plan, fact) = render_cell(values.get(month), format);
        row.push(plan);
        row.push(fact);
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use planfact_core::{ManagerRecord, Month};

    #[test]
    fn test_table_shows_only_window_months() {
        let mut view = AggregateView::empty(2025);
        let mut income = MonthMap::new();
        income.insert(Month::March, MonthlyMetric::both(120000.0, 95000.0));
        view.managers.push(ManagerRecord {
            name: "Peter Petrov".to_string(),
            income,
            active_partners: MonthMap::new(),
        });

        let window = VisibleWindow::initialize(Month::February);
        let rendered = build_table(&view, &window);

        assert!(rendered.contains("February Plan"));
        assert!(rendered.contains("July Fact"));
        assert!(!rendered.contains("August"));
        assert!(rendered.contains("Peter Petrov"));
        assert!(rendered.contains("$120,000"));
        assert!(rendered.contains("$95,000"));
    }
}

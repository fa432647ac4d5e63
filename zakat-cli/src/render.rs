//! Terminal rendering of a calculation.

use colored::Colorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use zakat_calculator::prelude::*;

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Item")]
    item: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Results table in the order the calculator page shows it.
pub fn results_table(view: &ResultView) -> String {
    let rows = vec![
        Row { item: "Total Assets", amount: view.formatted_total_assets.clone() },
        Row { item: "Total Deductions", amount: view.formatted_total_deductions.clone() },
        Row { item: "Net Wealth", amount: view.formatted_net_wealth.clone() },
        Row { item: "Nisab Threshold", amount: view.formatted_nisab.clone() },
        Row { item: "Zakat Due", amount: view.formatted_zakat_due.clone() },
    ];
    Table::new(rows).with(Style::rounded()).to_string()
}

/// The entered values that the calculation actually counted.
pub fn inputs_table(inputs: &ZakatInputs, formatter: &CurrencyFormatter) -> Option<String> {
    let rows: Vec<Row> = Field::all()
        .into_iter()
        .filter_map(|field| {
            let raw = inputs.raw(field)?;
            if raw.is_empty() {
                return None;
            }
            Some(Row {
                item: field.label(),
                amount: formatter.format_currency(raw.sanitized(), true),
            })
        })
        .collect();

    if rows.is_empty() {
        return None;
    }
    Some(Table::new(rows).with(Style::rounded()).to_string())
}

pub fn print_issues(report: &ValidationReport) {
    for issue in &report.issues {
        eprintln!(
            "{} '{}' {} (entered {:?}); counted as 0",
            "warning:".yellow().bold(),
            issue.field,
            issue.kind,
            issue.raw
        );
    }
}

pub fn print_view(view: &ResultView, inputs: &ZakatInputs, formatter: &CurrencyFormatter) {
    if let Some(table) = inputs_table(inputs, formatter) {
        println!("{}", table);
    }
    println!("{}", results_table(view));

    let progress = (view.nisab_progress * 100.0).round();
    println!("{}", format!("Nisab progress: {}%", progress).dimmed());

    for (i, line) in view.messages.iter().enumerate() {
        let styled = match (view.status, i) {
            (NisabStatus::Obligatory { .. }, 0) => line.green().bold(),
            (NisabStatus::Obligatory { .. }, _) => line.green(),
            (NisabStatus::BelowNisab { .. }, 0) => line.yellow().bold(),
            (NisabStatus::BelowNisab { .. }, _) => line.yellow(),
            (NisabStatus::AwaitingInput, _) => line.dimmed(),
        };
        println!("{}", styled);
    }
}

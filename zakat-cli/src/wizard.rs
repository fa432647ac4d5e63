use colored::Colorize;
use inquire::Text;
use zakat_calculator::prelude::*;
use zakat_calculator::validation::check_amount;

/// Asks for every field of the form in order, filling `inputs`.
///
/// Answers are taken as typed: anything that is not a non-negative number is
/// flagged right away but still accepted, and counts as zero.
pub fn run_wizard_mode(inputs: &mut ZakatInputs) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n{}", "GUIDED ZAKAT CALCULATOR".bright_cyan().bold());
    println!("{}", "Leave a field empty to skip it. Press Ctrl+C at any time to exit.".dimmed());

    let mut section = None;
    for field in Field::all() {
        let heading = match field {
            Field::Asset(category) => match category.group() {
                AssetGroup::Personal => "Personal Assets",
                AssetGroup::Business => "Business Assets",
            },
            Field::Deduction(_) => "Deductions",
        };
        if section != Some(heading) {
            println!("\n{}", format!("--- {} ---", heading).bright_yellow());
            section = Some(heading);
        }

        let answer = Text::new(&format!("{}:", field.label()))
            .with_placeholder("0")
            .with_help_message(field.id())
            .prompt()?;

        let raw = RawAmount::from(answer);
        if let Some(kind) = check_amount(&raw) {
            println!("{}", format!("  '{}' {}; it will count as 0.", field.id(), kind).red());
        }
        inputs.set_field(field, raw);
    }

    println!("\n{}", "Calculating...".bold());
    Ok(())
}

//! Interactive menu loop.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tally_core::{category_summary, monthly_summary, Summary};

use crate::prompt::{collect_expense, prompt};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    MonthlySummary,
    CategorySummary,
    Exit,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum MenuError {
    #[error("unknown menu choice `{0}`")]
    UnknownChoice(String),
}

impl FromStr for MenuCommand {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuCommand::Add),
            "2" => Ok(MenuCommand::MonthlySummary),
            "3" => Ok(MenuCommand::CategorySummary),
            "4" => Ok(MenuCommand::Exit),
            other => Err(MenuError::UnknownChoice(other.to_string())),
        }
    }
}

const MENU: &str = "\nExpense Tracker\n\
1. Add an expense\n\
2. View monthly summary\n\
3. View category summary\n\
4. Exit";

fn print_summary<W: Write>(output: &mut W, title: &str, summary: &Summary) -> Result<()> {
    writeln!(output, "{}", title)?;
    write!(output, "{}", summary)?;
    Ok(())
}

/// Run the menu until the user picks Exit. Persistence and I/O errors end the session.
pub fn run<R: BufRead, W: Write>(
    state: &mut AppState,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    loop {
        writeln!(output, "{}", MENU)?;
        let choice = prompt(input, output, "Choose an option")?;

        let command = match choice.parse::<MenuCommand>() {
            Ok(command) => command,
            Err(err) => {
                log::debug!("{}", err);
                writeln!(output, "Invalid choice. Please try again.")?;
                continue;
            }
        };

        match command {
            MenuCommand::Add => {
                let expense = collect_expense(input, output)?;
                state.add(expense)?;
            }
            MenuCommand::MonthlySummary => {
                print_summary(output, "Monthly Summary", &monthly_summary(state.expenses()))?;
            }
            MenuCommand::CategorySummary => {
                print_summary(output, "Category Summary", &category_summary(state.expenses()))?;
            }
            MenuCommand::Exit => return Ok(()),
        }
    }
}

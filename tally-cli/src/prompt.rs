use anyhow::{bail, Result};
use std::io::{BufRead, Write};
use tally_core::Expense;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("invalid amount `{0}`")]
    InvalidAmount(String),
}

/// Print `label: `, then read one line without its terminator.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{}: ", label)?;
    output.flush()?;
    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        bail!("unexpected end of input");
    }
    let trimmed = s.strip_suffix('\n').unwrap_or(&s);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}

/// Parse a user-entered amount. Anything that is not a finite number is rejected.
pub fn parse_amount(raw: &str) -> Result<f64, InputError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::InvalidAmount(raw.to_string())),
    }
}

/// Keep asking until the amount parses.
pub fn read_amount<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<f64> {
    loop {
        let raw = prompt(input, output, "Enter the amount spent")?;
        match parse_amount(&raw) {
            Ok(amount) => return Ok(amount),
            Err(err) => {
                log::debug!("{}", err);
                writeln!(output, "Invalid amount. Please enter a number.")?;
            }
        }
    }
}

/// Ask for every field of an expense. Text fields are stored as entered.
pub fn collect_expense<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Expense> {
    let amount = read_amount(input, output)?;
    let description = prompt(input, output, "Enter a brief description")?;
    let category = prompt(
        input,
        output,
        "Enter the category (e.g., food, transportation, entertainment)",
    )?;
    let date = prompt(input, output, "Enter the date (YYYY-MM-DD)")?;
    Ok(Expense::new(amount, description, category, date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tally_core::monthly_summary;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), Ok(12.5));
        assert_eq!(parse_amount("  7 "), Ok(7.0));
        assert_eq!(parse_amount("-3"), Ok(-3.0));
        assert_eq!(parse_amount("0"), Ok(0.0));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(
            parse_amount("abc"),
            Err(InputError::InvalidAmount("abc".to_string()))
        );
        assert!(parse_amount("").is_err());
        assert!(parse_amount("12,50").is_err());
        assert!(parse_amount("$5").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_non_finite() {
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn test_read_amount_reprompts_once() {
        let mut input = Cursor::new("abc\n12.5\n");
        let mut output = Vec::new();
        let amount = read_amount(&mut input, &mut output).unwrap();
        assert_eq!(amount, 12.5);

        let out = String::from_utf8(output).unwrap();
        assert_eq!(out.matches("Invalid amount. Please enter a number.").count(), 1);
        assert_eq!(out.matches("Enter the amount spent: ").count(), 2);
    }

    #[test]
    fn test_prompt_eof_is_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let err = prompt(&mut input, &mut output, "Anything").unwrap_err();
        assert_eq!(err.to_string(), "unexpected end of input");
    }

    #[test]
    fn test_prompt_strips_crlf_only() {
        let mut input = Cursor::new("  Food \r\n");
        let mut output = Vec::new();
        assert_eq!(prompt(&mut input, &mut output, "x").unwrap(), "  Food ");
    }

    #[test]
    fn test_collect_expense() {
        let mut input = Cursor::new("100\nlunch\nfood\n2024-01-15\n");
        let mut output = Vec::new();
        let e = collect_expense(&mut input, &mut output).unwrap();
        assert_eq!(e, Expense::new(100.0, "lunch", "food", "2024-01-15"));
    }

    #[test]
    fn test_collect_expense_keeps_free_text_verbatim() {
        let mut input = Cursor::new("5\n\nFood \nlast tuesday\n");
        let mut output = Vec::new();
        let e = collect_expense(&mut input, &mut output).unwrap();
        assert_eq!(e.description, "");
        assert_eq!(e.category, "Food ");
        assert_eq!(e.date, "last tuesday");
    }

    #[test]
    fn test_collect_expense_blank_date_is_kept_blank() {
        let mut input = Cursor::new("5\ngum\nfood\n\n");
        let mut output = Vec::new();
        let e = collect_expense(&mut input, &mut output).unwrap();
        assert_eq!(e.date, "");

        let months = monthly_summary(&[e]);
        assert_eq!(months.get(""), Some(5.0));
        assert_eq!(months.len(), 1);
    }
}

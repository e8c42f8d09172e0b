//! Line-oriented terminal I/O with retry loops.
//!
//! Every read returns `Ok(None)` at end of input so the shell can wind down
//! cleanly instead of spinning on an empty stream.

use std::io::{self, BufRead, Write};

use stockroom_core::validation::{is_integer, parse_decimal, parse_integer};

/// Why a menu selection was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceError {
    /// Not a whole number at all.
    NotANumber,
    /// A number, but not one of the offered options.
    OutOfRange(u64),
}

/// Interpret `text` as a selection in `1..=max`.
pub fn parse_choice(text: &str, max: u8) -> Result<u8, ChoiceError> {
    let text = text.trim();
    if !is_integer(text) {
        return Err(ChoiceError::NotANumber);
    }
    // Long digit strings saturate; they are out of range either way.
    let value = text.parse::<u64>().unwrap_or(u64::MAX);
    match u8::try_from(value) {
        Ok(choice) if (1..=max).contains(&choice) => Ok(choice),
        _ => Err(ChoiceError::OutOfRange(value)),
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Next input line without its line terminator.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print `label` (no newline) and read one line.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.read_line()
    }

    /// Ask for a menu selection until one in `1..=max` is given.
    pub fn choose(&mut self, label: &str, max: u8) -> io::Result<Option<u8>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match parse_choice(&line, max) {
                Ok(choice) => return Ok(Some(choice)),
                Err(ChoiceError::NotANumber) => {
                    self.say("\nInvalid input! Please enter a number.")?;
                }
                Err(ChoiceError::OutOfRange(_)) => {
                    self.say(&format!(
                        "\nInvalid choice! Please enter a valid number between 1 and {max}."
                    ))?;
                }
            }
        }
    }

    /// Ask for a whole number greater than zero.
    pub fn read_quantity(&mut self, label: &str) -> io::Result<Option<i64>> {
        write!(self.output, "{label}")?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_integer(&line) {
                Err(_) => write!(self.output, "Invalid input! Please enter a valid integer for quantity: ")?,
                Ok(quantity) if quantity <= 0 => {
                    write!(self.output, "Quantity must be greater than 0! Please enter again: ")?
                }
                Ok(quantity) => return Ok(Some(quantity)),
            }
        }
    }

    /// Ask for a decimal number greater than zero.
    pub fn read_price(&mut self, label: &str) -> io::Result<Option<f64>> {
        write!(self.output, "{label}")?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_decimal(&line) {
                Err(_) => write!(self.output, "Invalid input! Please enter a valid price: ")?,
                Ok(price) if price <= 0.0 => {
                    write!(self.output, "Price must be greater than 0! Please enter again: ")?
                }
                Ok(price) => return Ok(Some(price)),
            }
        }
    }
}

//! The interactive prompt-and-print cycle.

use std::io::{BufRead, Write};

use crate::{
    calculator::{FareCalculator, FareQuote},
    config::Mode,
    error::{FareError, Result},
};

pub const SERVICE_PROMPT: &str = "Enter bus service number: ";
pub const BOARDING_STOP_PROMPT: &str = "Enter boarding busstop: ";
pub const ALIGHTING_STOP_PROMPT: &str = "Enter alighting busstop: ";
pub const BOARDING_STATION_PROMPT: &str = "Enter boarding MRT station: ";
pub const ALIGHTING_STATION_PROMPT: &str = "Enter alighting MRT station: ";

#[derive(Debug)]
pub struct Session<R, W> {
    calculator: FareCalculator,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(calculator: FareCalculator, input: R, output: W) -> Self {
        Self {
            calculator,
            input,
            output,
        }
    }

    /// Asks for a trip in the configured mode, prices it and prints the
    /// distance and fare lines. Nothing is printed after the prompts when
    /// any step fails.
    pub fn run(&mut self) -> Result<FareQuote> {
        let quote = match self.calculator.config().mode {
            Mode::Bus => {
                let service_no = self.prompt(SERVICE_PROMPT)?;
                let start = parse_stop_code(&self.prompt(BOARDING_STOP_PROMPT)?)?;
                let end = parse_stop_code(&self.prompt(ALIGHTING_STOP_PROMPT)?)?;
                self.calculator.bus_fare(&service_no, start, end)?
            }
            Mode::Mrt => {
                let start = self.prompt(BOARDING_STATION_PROMPT)?.to_uppercase();
                let end = self.prompt(ALIGHTING_STATION_PROMPT)?.to_uppercase();
                self.calculator.mrt_fare(&start, &end)?
            }
        };

        writeln!(self.output, "{}", quote.distance_line())?;
        writeln!(self.output, "{}", quote.fare_line())?;
        self.output.flush()?;
        Ok(quote)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // EOF reads as an empty answer.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_owned())
    }
}

pub fn parse_stop_code(input: &str) -> Result<i64> {
    input.trim().parse().map_err(|_| FareError::InvalidInput {
        input: input.to_owned(),
        expected: "bus stop code",
    })
}

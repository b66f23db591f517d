//! Interactive filter collection.
//!
//! Each question is asked until the answer parses. Only end of input stops
//! the loop early, as `AppError::InputClosed`.

use crate::errors::{AppError, AppResult};
use crate::models::{City, DayFilter, Filters, MonthFilter};
use crate::utils::formatting::separator;
use std::io::{BufRead, Write};
use tracing::debug;

const CITY_QUESTION: &str = "Type the City name? (Chicago, New York or Washington)";
const MONTH_QUESTION: &str = "Which month? (January, February, March, April, May, June, or All)";
const DAY_QUESTION: &str =
    "Which day? (Saturday, Sunday, Monday, Tuesday, Wednesday, Thursday, Friday or All)";
const RESTART_QUESTION: &str = "Would you like to restart? Enter yes or no.";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer shared with the report output.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `question` and read one line. `None` on end of input.
    fn ask(&mut self, question: &str) -> AppResult<Option<String>> {
        writeln!(self.output, "\n{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until `parse` accepts the answer.
    fn ask_until<T>(
        &mut self,
        question: &str,
        what: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> AppResult<T> {
        loop {
            let answer = self.ask(question)?.ok_or(AppError::InputClosed)?;
            if let Some(v) = parse(&answer) {
                return Ok(v);
            }
            debug!(answer = %answer, what, "rejected prompt answer");
            writeln!(
                self.output,
                "It sounds like you've chosen an invalid {} or made a spelling mistake, please try again!",
                what
            )?;
        }
    }

    pub fn ask_city(&mut self) -> AppResult<City> {
        self.ask_until(CITY_QUESTION, "City-Name", City::from_input)
    }

    pub fn ask_month(&mut self) -> AppResult<MonthFilter> {
        self.ask_until(MONTH_QUESTION, "Month-Name", MonthFilter::from_input)
    }

    pub fn ask_day(&mut self) -> AppResult<DayFilter> {
        self.ask_until(DAY_QUESTION, "Day-Name", DayFilter::from_input)
    }

    /// Collect city, month and day, then print a separator.
    pub fn get_filters(&mut self) -> AppResult<Filters> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;

        let city = self.ask_city()?;
        let month = self.ask_month()?;
        let day = self.ask_day()?;

        writeln!(self.output, "{}", separator())?;
        Ok(Filters::new(city, month, day))
    }

    /// True only for a case-insensitive "yes". End of input counts as no.
    pub fn ask_restart(&mut self) -> AppResult<bool> {
        Ok(self
            .ask(RESTART_QUESTION)?
            .is_some_and(|a| a.eq_ignore_ascii_case("yes")))
    }
}

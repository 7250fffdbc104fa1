//! Scenario driver
//!
//! Runs the selected scenarios in order and writes their transcript to an
//! output sink. The random generator is injected so that everything except
//! the scenario 1 draws stays deterministic.

use std::io::Write;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::common::Result;
use crate::exercises::{
    calculate_average, fibonacci, find_max_value, process_user_data, Grade, UserRecord,
};

use super::{Scenario, Selection};

const NUMBERS: [i64; 6] = [5, 12, 8, 23, 15, 7];
const FIB_COUNT: usize = 8;
const SCORES: [u32; 5] = [85, 92, 78, 95, 88];

/// Drives the scenarios against an output sink and a random source
pub struct Driver<W, R> {
    out: W,
    rng: R,
    draw_range: RangeInclusive<u32>,
    printed: usize,
}

impl<W: Write, R: Rng> Driver<W, R> {
    pub fn new(out: W, rng: R) -> Self {
        Self {
            out,
            rng,
            draw_range: 1..=100,
            printed: 0,
        }
    }

    /// Override the inclusive bounds of the scenario 1 draws
    pub fn with_draw_range(mut self, min: u32, max: u32) -> Self {
        self.draw_range = min..=max;
        self
    }

    /// Run every selected scenario, then print the completion banner.
    ///
    /// The first failing scenario aborts the run and its error is returned
    /// unchanged; the banner is only printed when all of them finish.
    pub fn run(&mut self, selection: &Selection) -> Result<()> {
        for scenario in selection.iter() {
            tracing::debug!(scenario = scenario.number(), "running scenario");
            self.banner(&scenario.to_string())?;
            self.run_scenario(scenario)?;
        }
        self.banner("All scenarios completed!")?;
        self.out.flush()?;
        Ok(())
    }

    /// Consume the driver, returning the output sink
    pub fn into_inner(self) -> W {
        self.out
    }

    fn banner(&mut self, label: &str) -> Result<()> {
        if self.printed > 0 {
            writeln!(self.out)?;
        }
        writeln!(self.out, "=== {label} ===")?;
        self.printed += 1;
        Ok(())
    }

    fn run_scenario(&mut self, scenario: Scenario) -> Result<()> {
        match scenario {
            Scenario::BasicVariables => self.basic_variables(),
            Scenario::ListOperations => self.list_operations(),
            Scenario::DictionaryProcessing => self.dictionary_processing(),
            Scenario::FibonacciSequence => self.fibonacci_sequence(),
            Scenario::ConditionalLogic => self.conditional_logic(),
            Scenario::ExceptionHandling => self.exception_handling(),
        }
    }

    fn basic_variables(&mut self) -> Result<()> {
        let x = self.rng.random_range(self.draw_range.clone());
        let y = self.rng.random_range(self.draw_range.clone());
        let z = u64::from(x) + u64::from(y);
        writeln!(self.out, "x={x}, y={y}, z={z}")?;
        Ok(())
    }

    fn list_operations(&mut self) -> Result<()> {
        let numbers = NUMBERS.to_vec();
        let avg = calculate_average(&numbers)?;
        let max_num = find_max_value(&numbers)?;
        writeln!(self.out, "Numbers: {numbers:?}")?;
        writeln!(self.out, "Average: {avg}")?;
        writeln!(self.out, "Maximum: {max_num}")?;
        Ok(())
    }

    fn dictionary_processing(&mut self) -> Result<()> {
        let users = [
            UserRecord::new("Alice", "Smith", 25),
            UserRecord::new("Bob", "Jones", 17),
            UserRecord::new("Charlie", "Brown", 30),
        ];
        for user in process_user_data(&users) {
            writeln!(self.out, "{user}")?;
        }
        Ok(())
    }

    fn fibonacci_sequence(&mut self) -> Result<()> {
        let fib_sequence = fibonacci(FIB_COUNT)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(self.out, "First {FIB_COUNT} Fibonacci numbers: [{fib_sequence}]")?;
        Ok(())
    }

    fn conditional_logic(&mut self) -> Result<()> {
        for (i, score) in SCORES.into_iter().enumerate() {
            let grade = Grade::from_score(score);
            writeln!(self.out, "Student {}: Score={score}, Grade={grade}", i + 1)?;
        }
        Ok(())
    }

    fn exception_handling(&mut self) -> Result<()> {
        self.out.flush()?;
        let empty_list: Vec<i64> = Vec::new();
        let result = calculate_average(&empty_list)?;
        writeln!(self.out, "Result: {result}")?;
        Ok(())
    }
}

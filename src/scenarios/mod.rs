//! Scenario catalogue and selection
//!
//! Each scenario is a labelled block of output produced by the [`Driver`].
//! Scenario 6 aborts the run on purpose and is left out unless asked for.

mod driver;

pub use driver::Driver;

use std::collections::BTreeSet;
use std::fmt;

use crate::common::{Error, Result};

/// One labelled demonstration block
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scenario {
    BasicVariables,
    ListOperations,
    DictionaryProcessing,
    FibonacciSequence,
    ConditionalLogic,
    ExceptionHandling,
}

impl Scenario {
    /// All scenarios in run order
    pub const ALL: [Scenario; 6] = [
        Scenario::BasicVariables,
        Scenario::ListOperations,
        Scenario::DictionaryProcessing,
        Scenario::FibonacciSequence,
        Scenario::ConditionalLogic,
        Scenario::ExceptionHandling,
    ];

    pub fn number(self) -> u8 {
        match self {
            Scenario::BasicVariables => 1,
            Scenario::ListOperations => 2,
            Scenario::DictionaryProcessing => 3,
            Scenario::FibonacciSequence => 4,
            Scenario::ConditionalLogic => 5,
            Scenario::ExceptionHandling => 6,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Scenario::BasicVariables => "Basic Variables",
            Scenario::ListOperations => "List Operations",
            Scenario::DictionaryProcessing => "Dictionary Processing",
            Scenario::FibonacciSequence => "Fibonacci Sequence",
            Scenario::ConditionalLogic => "Conditional Logic",
            Scenario::ExceptionHandling => "Exception Handling",
        }
    }

    pub fn from_number(number: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.number() == number)
            .ok_or(Error::InvalidScenario(number))
    }

    /// Whether a plain run includes this scenario
    pub fn enabled_by_default(self) -> bool {
        self != Scenario::ExceptionHandling
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scenario {}: {}", self.number(), self.title())
    }
}

/// The set of scenarios a run executes, always iterated in run order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    scenarios: BTreeSet<Scenario>,
}

impl Selection {
    /// Scenarios 1 through 5
    pub fn default_run() -> Self {
        Self {
            scenarios: Scenario::ALL
                .into_iter()
                .filter(|s| s.enabled_by_default())
                .collect(),
        }
    }

    /// Exactly the given scenario numbers
    pub fn only(numbers: &[u8]) -> Result<Self> {
        let scenarios = numbers
            .iter()
            .map(|&n| Scenario::from_number(n))
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self { scenarios })
    }

    /// Add the exception scenario
    pub fn with_exception(mut self) -> Self {
        self.scenarios.insert(Scenario::ExceptionHandling);
        self
    }

    pub fn contains(&self, scenario: Scenario) -> bool {
        self.scenarios.contains(&scenario)
    }

    pub fn iter(&self) -> impl Iterator<Item = Scenario> + '_ {
        self.scenarios.iter().copied()
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::default_run()
    }
}

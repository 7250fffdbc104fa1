//! Fibonacci sequence generation

use std::mem;

use num_bigint::BigUint;

/// Unbounded iterator over the Fibonacci numbers 0, 1, 1, 2, 3, ...
#[derive(Debug, Clone)]
pub struct Fibonacci {
    a: BigUint,
    b: BigUint,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self {
            a: BigUint::from(0u32),
            b: BigUint::from(1u32),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let next = &self.a + &self.b;
        let current = mem::replace(&mut self.a, mem::replace(&mut self.b, next));
        Some(current)
    }
}

/// Generate exactly the first `n` Fibonacci numbers
pub fn fibonacci(n: usize) -> Vec<BigUint> {
    Fibonacci::new().take(n).collect()
}

//! Integers - numbers, basic math, and the first taste of Result

/// A simple calculator for basic arithmetic.
#[derive(Debug, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: i64, b: i64) -> i64 {
        a + b
    }

    pub fn subtract(&self, a: i64, b: i64) -> i64 {
        a - b
    }

    pub fn multiply(&self, a: i64, b: i64) -> i64 {
        a * b
    }

    /// Divide a by b. A zero divisor is an error, not a crash.
    pub fn divide(&self, a: i64, b: i64) -> Result<f64, String> {
        if b == 0 {
            return Err("Cannot divide by zero".to_string());
        }
        Ok(a as f64 / b as f64)
    }

    pub fn power(&self, base: i64, exponent: u32) -> i64 {
        base.pow(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_two_numbers() {
        let calc = Calculator::new();
        assert_eq!(calc.add(2, 3), 5);
        assert_eq!(calc.add(-2, 2), 0);
    }

    #[test]
    fn subtracts_and_multiplies() {
        let calc = Calculator::new();
        assert_eq!(calc.subtract(10, 4), 6);
        assert_eq!(calc.multiply(6, 7), 42);
    }

    #[test]
    fn divides_cleanly() {
        let calc = Calculator::new();
        assert_eq!(calc.divide(10, 4).unwrap(), 2.5);
    }

    #[test]
    fn division_by_zero_is_an_err() {
        let calc = Calculator::new();
        let err = calc.divide(1, 0).unwrap_err();
        assert_eq!(err, "Cannot divide by zero");
    }

    #[test]
    fn raises_to_a_power() {
        let calc = Calculator::new();
        assert_eq!(calc.power(2, 10), 1024);
        assert_eq!(calc.power(5, 0), 1);
    }
}

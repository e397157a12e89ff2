//! Arithmetic over `f64`.

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Unchecked division. A zero denominator yields infinity or NaN, so
/// callers must guard it.
pub fn divide(a: f64, b: f64) -> f64 {
    a / b
}

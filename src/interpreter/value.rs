/// Represents the numeric result of an expression or sub-expression.
///
/// Literals are integers and stay integers through `+`, `-` and `*`. Division
/// is always true division, so it always produces a `Real`, and a `Real`
/// operand turns every later operation on it into a real one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Number {
    /// Returns `true` for `Number::Integer`.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns the value as an `f64`.
    ///
    /// Integers beyond `2^53` are rounded to the nearest representable real;
    /// this is the promotion used whenever an integer meets `/` or a real
    /// operand.
    ///
    /// # Example
    /// ```
    /// use reckon::Number;
    ///
    /// assert_eq!(Number::Integer(7).as_f64(), 7.0);
    /// assert_eq!(Number::Real(3.5).as_f64(), 3.5);
    /// assert_eq!(Number::Integer(9_007_199_254_740_993).as_f64(), 9_007_199_254_740_992.0);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(n) => *n as f64,
            Self::Real(r) => *r,
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => {
                let magnitude = r.abs();
                if r.is_finite() && magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
                    write_exponent(f, *r)
                } else if r.is_finite() && r.fract() == 0.0 {
                    // Integral reals print with a trailing `.0`.
                    write!(f, "{r:.1}")
                } else {
                    write!(f, "{r}")
                }
            },
        }
    }
}

/// Writes a real in exponent form with an explicit sign and at least two
/// exponent digits, e.g. `1.6e+19` or `1e-05`.
fn write_exponent(f: &mut std::fmt::Formatter<'_>, value: f64) -> std::fmt::Result {
    let formatted = format!("{value:e}");
    match formatted.split_once('e')
                   .and_then(|(mantissa, exponent)| Some((mantissa, exponent.parse::<i32>().ok()?)))
    {
        Some((mantissa, exponent)) => {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        },
        None => write!(f, "{formatted}"),
    }
}

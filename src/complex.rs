use std::ops::Add;
use std::ops::Sub;
use std::ops::Mul;
use std::ops::Div;

/// A value in the extended complex plane.
///
/// Instances are immutable. Whether a value is NaN or infinite is decided once, when it is
/// created, and stored alongside the components. NaN wins over infinity: a value with one NaN
/// component and one infinite component is NaN and not infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexNumber {
    real: f64,
    imag: f64,
    nan: bool,
    infinite: bool,
}

impl ComplexNumber {
    pub fn new(real: f64, imag: f64) -> ComplexNumber {
        let nan = real.is_nan() || imag.is_nan();
        let infinite = !nan && (real.is_infinite() || imag.is_infinite());
        ComplexNumber { real, imag, nan, infinite }
    }

    /// Creates a number with no imaginary part.
    pub fn from_real(real: f64) -> ComplexNumber {
        ComplexNumber::new(real, 0.0)
    }

    /// The point at infinity, represented as `(+∞, +∞)`.
    pub fn infinite() -> ComplexNumber {
        ComplexNumber::new(f64::INFINITY, f64::INFINITY)
    }

    pub fn nan() -> ComplexNumber {
        ComplexNumber::new(f64::NAN, f64::NAN)
    }

    pub fn zero() -> ComplexNumber {
        ComplexNumber::new(0.0, 0.0)
    }

    pub fn real(&self) -> f64 {
        self.real
    }

    pub fn imag(&self) -> f64 {
        self.imag
    }

    pub fn is_nan(&self) -> bool {
        self.nan
    }

    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    pub fn is_finite(&self) -> bool {
        !self.nan && !self.infinite
    }

    /// Componentwise sum. Infinities are left to float addition, so `∞ + -∞` gives a NaN
    /// component.
    pub fn add(self, other: ComplexNumber) -> ComplexNumber {
        if self.nan || other.nan {
            trace!("add {:?} + {:?}: NaN operand", self, other);
            return ComplexNumber::nan();
        }
        ComplexNumber::new(self.real + other.real, self.imag + other.imag)
    }

    /// Componentwise difference, with the same treatment of infinities as `add`.
    pub fn subtract(self, other: ComplexNumber) -> ComplexNumber {
        if self.nan || other.nan {
            trace!("subtract {:?} - {:?}: NaN operand", self, other);
            return ComplexNumber::nan();
        }
        ComplexNumber::new(self.real - other.real, self.imag - other.imag)
    }

    /// Complex product.
    ///
    /// If any of the four components is infinite the result is `ComplexNumber::infinite()`,
    /// whatever the signs involved. The textbook formula is only applied to finite operands.
    pub fn multiply(self, other: ComplexNumber) -> ComplexNumber {
        if self.nan || other.nan {
            trace!("multiply {:?} * {:?}: NaN operand", self, other);
            return ComplexNumber::nan();
        }
        if self.real.is_infinite()
            || self.imag.is_infinite()
            || other.real.is_infinite()
            || other.imag.is_infinite()
        {
            trace!("multiply {:?} * {:?}: infinite component", self, other);
            return ComplexNumber::infinite();
        }
        ComplexNumber::new(
            self.real * other.real - self.imag * other.imag,
            self.real * other.imag + self.imag * other.real,
        )
    }

    /// Complex quotient using Smith's method.
    ///
    /// The checks run in a fixed order: a NaN operand gives NaN, then an exact zero divisor
    /// gives NaN (even for a zero dividend), then a finite dividend over an infinite divisor
    /// gives zero. Everything else, including infinite dividends, goes through the ratio
    /// formula and takes whatever NaN or infinite components float division produces.
    pub fn divide(self, other: ComplexNumber) -> ComplexNumber {
        if self.nan || other.nan {
            trace!("divide {:?} / {:?}: NaN operand", self, other);
            return ComplexNumber::nan();
        }
        if other.real == 0.0 && other.imag == 0.0 {
            trace!("divide {:?} / {:?}: zero divisor", self, other);
            return ComplexNumber::nan();
        }
        if !self.infinite && other.infinite {
            trace!("divide {:?} / {:?}: finite over infinite", self, other);
            return ComplexNumber::zero();
        }
        // divide through by the larger of the divisor's components so the
        // denominator can't overflow when the components differ widely in magnitude
        if other.real.abs() < other.imag.abs() {
            let ratio = other.real / other.imag;
            let denom = other.real * ratio + other.imag;
            ComplexNumber::new(
                (self.real * ratio + self.imag) / denom,
                (self.imag * ratio - self.real) / denom,
            )
        } else {
            let ratio = other.imag / other.real;
            let denom = other.imag * ratio + other.real;
            ComplexNumber::new(
                (self.imag * ratio + self.real) / denom,
                (self.imag - self.real * ratio) / denom,
            )
        }
    }
}

impl Default for ComplexNumber {
    fn default() -> ComplexNumber {
        ComplexNumber::zero()
    }
}

impl From<f64> for ComplexNumber {
    fn from(real: f64) -> ComplexNumber {
        ComplexNumber::from_real(real)
    }
}

impl Add for ComplexNumber {
    type Output = ComplexNumber;

    fn add(self, other: ComplexNumber) -> ComplexNumber {
        ComplexNumber::add(self, other)
    }
}

impl Sub for ComplexNumber {
    type Output = ComplexNumber;

    fn sub(self, other: ComplexNumber) -> ComplexNumber {
        self.subtract(other)
    }
}

impl Mul for ComplexNumber {
    type Output = ComplexNumber;

    fn mul(self, other: ComplexNumber) -> ComplexNumber {
        self.multiply(other)
    }
}

impl Div for ComplexNumber {
    type Output = ComplexNumber;

    fn div(self, other: ComplexNumber) -> ComplexNumber {
        self.divide(other)
    }
}

//--------------------------------------------------------------------------------------------------

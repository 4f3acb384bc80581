//! An immutable complex number type whose arithmetic carries IEEE-754 NaN
//! and infinity through the extended complex plane.

#[macro_use]
extern crate log;
#[cfg(test)]
extern crate env_logger;

mod complex;

pub use complex::ComplexNumber;

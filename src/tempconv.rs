use std::fmt;
use std::ops::{Add, Sub};

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Celsius(f64);

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Fahrenheit(f64);

pub const ABSOLUTE_ZERO_C: Celsius = Celsius(-273.15);
pub const FREEZING_C: Celsius = Celsius(0.0);
pub const BOILING_C: Celsius = Celsius(100.0);

macro_rules! impl_temperature {
    ($name:ident, $unit:expr) => {
        impl $name {
            pub fn new(degrees: f64) -> Self {
                $name(degrees)
            }

            #[inline]
            pub fn degrees(&self) -> f64 {
                self.0
            }
        }

        impl From<f64> for $name {
            fn from(degrees: f64) -> Self {
                $name(degrees)
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                $name(self.0 - rhs.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}{}", self.0, $unit)
            }
        }
    }
}

impl_temperature!(Celsius, "°C");
impl_temperature!(Fahrenheit, "°F");

pub fn c_to_f(c: Celsius) -> Fahrenheit {
    Fahrenheit(c.0 * 9.0 / 5.0 + 32.0)
}

pub fn f_to_c(f: Fahrenheit) -> Celsius {
    Celsius((f.0 - 32.0) * 5.0 / 9.0)
}

//! Loose truthiness, made explicit.
//!
//! `false`, numeric zero, `NaN`, the empty string and absent values
//! (`None`, `()`) are falsy. Everything else is truthy.

/// Conversion of a callback result into a keep/drop decision.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! int_truthy {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

macro_rules! float_truthy {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0.0 && !self.is_nan()
            }
        })*
    };
}

int_truthy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_truthy!(f32, f64);

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_values() {
        assert!(!false.is_truthy());
        assert!(!0i32.is_truthy());
        assert!(!0u64.is_truthy());
        assert!(!0.0f64.is_truthy());
        assert!(!(-0.0f64).is_truthy());
        assert!(!f64::NAN.is_truthy());
        assert!(!"".is_truthy());
        assert!(!String::new().is_truthy());
        assert!(!None::<i32>.is_truthy());
        assert!(!().is_truthy());
    }

    #[test]
    fn truthy_values() {
        assert!(true.is_truthy());
        assert!((-1i32).is_truthy());
        assert!(0.5f32.is_truthy());
        assert!(f64::INFINITY.is_truthy());
        assert!("0".is_truthy());
        assert!(String::from("false").is_truthy());
        assert!('\0'.is_truthy());
        assert!(Some(7).is_truthy());
    }

    #[test]
    fn option_defers_to_inner() {
        assert!(!Some(0).is_truthy());
        assert!(!Some(false).is_truthy());
        assert!(!Some("").is_truthy());
    }
}

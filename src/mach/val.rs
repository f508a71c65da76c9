use crate::error;
use crate::lang::Error;
use num_complex::Complex64;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime values
///
/// A value's tag is fixed at construction. Consumers go through the
/// `as_*` accessors, which fail with `TypeMismatch` on the wrong tag.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(Complex64),
    String(Rc<str>),
    List(Vec<Complex64>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValType {
    Number,
    String,
    List,
}

impl std::fmt::Display for ValType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ValType::Number => write!(f, "NUMBER"),
            ValType::String => write!(f, "STRING"),
            ValType::List => write!(f, "LIST"),
        }
    }
}

pub fn type_mismatch(expected: ValType, actual: ValType) -> Error {
    error!(TypeMismatch; format!("EXPECTED {} GOT {}", expected, actual))
}

impl Default for Val {
    fn default() -> Self {
        Val::Number(Complex64::new(0.0, 0.0))
    }
}

impl From<Complex64> for Val {
    fn from(n: Complex64) -> Self {
        Val::Number(n)
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Self {
        Val::Number(Complex64::new(n, 0.0))
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Self {
        Val::String(s.into())
    }
}

impl From<Vec<Complex64>> for Val {
    fn from(v: Vec<Complex64>) -> Self {
        Val::List(v)
    }
}

impl Val {
    pub fn complex(re: f64, im: f64) -> Val {
        Val::Number(Complex64::new(re, im))
    }

    pub fn real_list(v: &[f64]) -> Val {
        Val::List(v.iter().map(|n| Complex64::new(*n, 0.0)).collect())
    }

    pub fn val_type(&self) -> ValType {
        match self {
            Val::Number(_) => ValType::Number,
            Val::String(_) => ValType::String,
            Val::List(_) => ValType::List,
        }
    }

    pub fn as_number(&self) -> Result<Complex64> {
        match self {
            Val::Number(n) => Ok(*n),
            _ => Err(type_mismatch(ValType::Number, self.val_type())),
        }
    }

    pub fn as_string(&self) -> Result<Rc<str>> {
        match self {
            Val::String(s) => Ok(s.clone()),
            _ => Err(type_mismatch(ValType::String, self.val_type())),
        }
    }

    pub fn as_list(&self) -> Result<&[Complex64]> {
        match self {
            Val::List(v) => Ok(v),
            _ => Err(type_mismatch(ValType::List, self.val_type())),
        }
    }

    /// A number with no imaginary part.
    pub fn as_real(&self) -> Result<f64> {
        real(self.as_number()?)
    }

    pub fn as_integer(&self) -> Result<i64> {
        let n = self.as_real()?;
        if n.fract() != 0.0 || n.abs() > 1e15 {
            return Err(error!(DomainError; "EXPECTED INTEGER"));
        }
        Ok(n as i64)
    }

    /// A 1-based list index.
    pub fn as_index(&self) -> Result<usize> {
        let n = self.as_real()?;
        if n < 1.0 || n.fract() != 0.0 || n > u32::MAX as f64 {
            return Err(error!(ArgumentError; "INVALID DIM"));
        }
        Ok(n as usize)
    }

    /// Condition truth: nonzero real part, imaginary parts rejected.
    pub fn is_true(&self) -> Result<bool> {
        Ok(self.as_real()? != 0.0)
    }
}

pub fn real(n: Complex64) -> Result<f64> {
    if n.im != 0.0 {
        return Err(error!(DomainError; "NONREAL ARGUMENT"));
    }
    Ok(n.re)
}

/// Values display with the default Float and Normal modes.
impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match super::Modes::default().format(self) {
            Ok(s) => write!(f, "{}", s),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_accessor_totality() {
        let values = [
            Val::complex(1.0, 2.0),
            Val::from("HELLO"),
            Val::real_list(&[1.0, 2.0]),
        ];
        for val in values.iter() {
            assert_eq!(val.as_number().is_ok(), val.val_type() == ValType::Number);
            assert_eq!(val.as_string().is_ok(), val.val_type() == ValType::String);
            assert_eq!(val.as_list().is_ok(), val.val_type() == ValType::List);
            for result in [
                val.as_number().err(),
                val.as_string().err(),
                val.as_list().err(),
            ] {
                if let Some(e) = result {
                    assert_eq!(e.code(), ErrorCode::TypeMismatch);
                }
            }
        }
    }

    #[test]
    fn test_type_mismatch_message() {
        let e = Val::from("A").as_number().unwrap_err();
        assert_eq!(e.text(), "EXPECTED NUMBER GOT STRING");
    }

    #[test]
    fn test_index() {
        assert_eq!(Val::from(3.0).as_index().unwrap(), 3);
        assert_eq!(
            Val::from(0.0).as_index().unwrap_err().code(),
            ErrorCode::ArgumentError
        );
        assert_eq!(
            Val::from(1.5).as_index().unwrap_err().code(),
            ErrorCode::ArgumentError
        );
        assert_eq!(
            Val::complex(1.0, 1.0).as_index().unwrap_err().code(),
            ErrorCode::DomainError
        );
    }

    #[test]
    fn test_truth() {
        assert!(Val::from(-2.0).is_true().unwrap());
        assert!(!Val::from(0.0).is_true().unwrap());
        assert!(Val::complex(0.0, 1.0).is_true().is_err());
    }
}

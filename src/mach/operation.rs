use super::val::{real, type_mismatch};
use super::{Val, ValType};
use crate::error;
use crate::lang::Error;
use num_complex::Complex64;

type Result<T> = std::result::Result<T, Error>;

/// Relative tolerance used by `=` and `≠`.
const EQUALITY_TOLERANCE: f64 = 1e-10;

/// ## Operators
///
/// Numbers broadcast over lists. Two lists combine element by element
/// and must agree in length.

pub struct Operation {}

impl Operation {
    pub fn binary<F>(lhs: &Val, rhs: &Val, f: F) -> Result<Val>
    where
        F: Fn(Complex64, Complex64) -> Result<Complex64>,
    {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(Number(f(*l, *r)?)),
            (Number(l), List(r)) => Ok(List(
                r.iter().map(|r| f(*l, *r)).collect::<Result<_>>()?,
            )),
            (List(l), Number(r)) => Ok(List(
                l.iter().map(|l| f(*l, *r)).collect::<Result<_>>()?,
            )),
            (List(l), List(r)) => {
                if l.len() != r.len() {
                    return Err(error!(DimensionMismatch));
                }
                Ok(List(
                    l.iter()
                        .zip(r.iter())
                        .map(|(l, r)| f(*l, *r))
                        .collect::<Result<_>>()?,
                ))
            }
            (String(_), _) => Err(type_mismatch(ValType::Number, ValType::String)),
            (_, String(_)) => Err(type_mismatch(ValType::Number, ValType::String)),
        }
    }

    pub fn unary<F>(val: &Val, f: F) -> Result<Val>
    where
        F: Fn(Complex64) -> Result<Complex64>,
    {
        match val {
            Val::Number(n) => Ok(Val::Number(f(*n)?)),
            Val::List(v) => Ok(Val::List(v.iter().map(|n| f(*n)).collect::<Result<_>>()?)),
            Val::String(_) => Err(type_mismatch(ValType::Number, ValType::String)),
        }
    }

    pub fn sum(lhs: &Val, rhs: &Val) -> Result<Val> {
        if let (Val::String(l), Val::String(r)) = (lhs, rhs) {
            return Ok(Val::String(format!("{}{}", l, r).into()));
        }
        Operation::binary(lhs, rhs, |l, r| finite(l + r))
    }

    pub fn subtract(lhs: &Val, rhs: &Val) -> Result<Val> {
        Operation::binary(lhs, rhs, |l, r| finite(l - r))
    }

    pub fn multiply(lhs: &Val, rhs: &Val) -> Result<Val> {
        Operation::binary(lhs, rhs, |l, r| finite(l * r))
    }

    pub fn divide(lhs: &Val, rhs: &Val) -> Result<Val> {
        Operation::binary(lhs, rhs, divide)
    }

    pub fn power(lhs: &Val, rhs: &Val) -> Result<Val> {
        Operation::binary(lhs, rhs, power)
    }

    /// `nˣ√x`, the n-th root of x.
    pub fn xroot(lhs: &Val, rhs: &Val) -> Result<Val> {
        Operation::binary(lhs, rhs, |n, x| root(x, n))
    }

    pub fn negate(val: &Val) -> Result<Val> {
        Operation::unary(val, |n| Ok(-n))
    }

    pub fn square(val: &Val) -> Result<Val> {
        Operation::unary(val, |n| finite(n * n))
    }

    pub fn cube(val: &Val) -> Result<Val> {
        Operation::unary(val, |n| finite(n * n * n))
    }

    pub fn inverse(val: &Val) -> Result<Val> {
        Operation::unary(val, |n| divide(Complex64::new(1.0, 0.0), n))
    }

    pub fn square_root(val: &Val) -> Result<Val> {
        Operation::unary(val, |n| root(n, Complex64::new(2.0, 0.0)))
    }

    pub fn cube_root(val: &Val) -> Result<Val> {
        Operation::unary(val, |n| root(n, Complex64::new(3.0, 0.0)))
    }

    pub fn factorial(val: &Val) -> Result<Val> {
        Operation::unary(val, |n| Ok(Complex64::new(factorial(real(n)?)?, 0.0)))
    }

    pub fn permutations(lhs: &Val, rhs: &Val) -> Result<Val> {
        Operation::binary(lhs, rhs, |n, r| {
            finite(Complex64::new(permutations(count(n)?, count(r)?), 0.0))
        })
    }

    pub fn combinations(lhs: &Val, rhs: &Val) -> Result<Val> {
        Operation::binary(lhs, rhs, |n, r| {
            finite(Complex64::new(combinations(count(n)?, count(r)?), 0.0))
        })
    }

    pub fn equal(lhs: &Val, rhs: &Val) -> Result<Val> {
        Operation::binary(lhs, rhs, |l, r| Ok(truth(approx_eq(l, r))))
    }

    pub fn not_equal(lhs: &Val, rhs: &Val) -> Result<Val> {
        Operation::binary(lhs, rhs, |l, r| Ok(truth(!approx_eq(l, r))))
    }

    pub fn less(lhs: &Val, rhs: &Val) -> Result<Val> {
        Operation::binary(lhs, rhs, |l, r| Ok(truth(ordered(l)? < ordered(r)?)))
    }

    pub fn less_equal(lhs: &Val, rhs: &Val) -> Result<Val> {
        Operation::binary(lhs, rhs, |l, r| Ok(truth(ordered(l)? <= ordered(r)?)))
    }

    pub fn greater(lhs: &Val, rhs: &Val) -> Result<Val> {
        Operation::binary(lhs, rhs, |l, r| Ok(truth(ordered(l)? > ordered(r)?)))
    }

    pub fn greater_equal(lhs: &Val, rhs: &Val) -> Result<Val> {
        Operation::binary(lhs, rhs, |l, r| Ok(truth(ordered(l)? >= ordered(r)?)))
    }

    pub fn and(lhs: &Val, rhs: &Val) -> Result<Val> {
        Operation::binary(lhs, rhs, |l, r| Ok(truth(logical(l)? && logical(r)?)))
    }

    pub fn or(lhs: &Val, rhs: &Val) -> Result<Val> {
        Operation::binary(lhs, rhs, |l, r| Ok(truth(logical(l)? || logical(r)?)))
    }

    pub fn xor(lhs: &Val, rhs: &Val) -> Result<Val> {
        Operation::binary(lhs, rhs, |l, r| Ok(truth(logical(l)? != logical(r)?)))
    }

    pub fn not(val: &Val) -> Result<Val> {
        Operation::unary(val, |n| Ok(truth(!logical(n)?)))
    }
}

pub fn finite(n: Complex64) -> Result<Complex64> {
    if n.re.is_finite() && n.im.is_finite() {
        Ok(n)
    } else {
        Err(error!(DomainError; "OVERFLOW"))
    }
}

fn truth(b: bool) -> Complex64 {
    Complex64::new(if b { 1.0 } else { 0.0 }, 0.0)
}

fn divide(l: Complex64, r: Complex64) -> Result<Complex64> {
    if r.re == 0.0 && r.im == 0.0 {
        return Err(error!(DivisionByZero));
    }
    finite(l / r)
}

fn power(base: Complex64, exponent: Complex64) -> Result<Complex64> {
    let zero_base = base.re == 0.0 && base.im == 0.0;
    if zero_base {
        if exponent.re == 0.0 && exponent.im == 0.0 {
            return Err(error!(DomainError; "0^0"));
        }
        if exponent.im == 0.0 && exponent.re < 0.0 {
            return Err(error!(DivisionByZero));
        }
    }
    if base.im == 0.0 && exponent.im == 0.0 && (base.re >= 0.0 || exponent.re.fract() == 0.0) {
        return finite(Complex64::new(base.re.powf(exponent.re), 0.0));
    }
    finite(base.powc(exponent))
}

fn root(x: Complex64, n: Complex64) -> Result<Complex64> {
    if n.re == 0.0 && n.im == 0.0 {
        return Err(error!(DomainError; "ZERO ROOT"));
    }
    if x.im == 0.0 && n.im == 0.0 {
        if x.re >= 0.0 {
            return finite(Complex64::new(x.re.powf(1.0 / n.re), 0.0));
        }
        let odd = n.re.fract() == 0.0 && n.re % 2.0 != 0.0;
        if odd {
            return finite(Complex64::new(-(-x.re).powf(1.0 / n.re), 0.0));
        }
        if n.re == 2.0 {
            return Ok(Complex64::new(0.0, (-x.re).sqrt()));
        }
    }
    finite(x.powc(Complex64::new(1.0, 0.0) / n))
}

/// Defined on half-integers from -0.5 to 69.5.
pub fn factorial(n: f64) -> Result<f64> {
    if !(-0.5..=69.5).contains(&n) || (n * 2.0).fract() != 0.0 {
        return Err(error!(DomainError; "FACTORIAL"));
    }
    Ok(factorial_step(n))
}

fn factorial_step(n: f64) -> f64 {
    if n == 0.0 {
        1.0
    } else if n == -0.5 {
        std::f64::consts::PI.sqrt()
    } else {
        n * factorial_step(n - 1.0)
    }
}

/// A nonnegative integer operand of nPr or nCr.
fn count(n: Complex64) -> Result<u64> {
    let n = real(n)?;
    if n < 0.0 || n.fract() != 0.0 || n > u32::MAX as f64 {
        return Err(error!(DomainError; "EXPECTED NONNEGATIVE INTEGER"));
    }
    Ok(n as u64)
}

/// Zero when choosing more than are available. Stops at infinity.
pub fn permutations(n: u64, r: u64) -> f64 {
    if r > n {
        return 0.0;
    }
    let mut acc = 1.0;
    for k in (n - r + 1)..=n {
        acc *= k as f64;
        if !acc.is_finite() {
            break;
        }
    }
    acc
}

pub fn combinations(n: u64, r: u64) -> f64 {
    if r > n {
        return 0.0;
    }
    let r = r.min(n - r);
    let mut acc = 1.0;
    for i in 1..=r {
        acc = acc * (n - r + i) as f64 / i as f64;
        if !acc.is_finite() {
            break;
        }
    }
    acc.round()
}

fn approx_eq(l: Complex64, r: Complex64) -> bool {
    let scale = l.norm().max(r.norm()).max(1.0);
    (l - r).norm() <= EQUALITY_TOLERANCE * scale
}

fn ordered(n: Complex64) -> Result<f64> {
    if n.im != 0.0 {
        return Err(error!(ImaginaryComparison));
    }
    Ok(n.re)
}

fn logical(n: Complex64) -> Result<bool> {
    if n.im != 0.0 {
        return Err(error!(DomainError; "NONREAL ARGUMENT"));
    }
    Ok(n.re != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn n(v: f64) -> Val {
        Val::from(v)
    }

    fn close(val: Val, expected: f64) -> bool {
        match val {
            Val::Number(c) => (c.re - expected).abs() < 1e-7 && c.im.abs() < 1e-7,
            _ => false,
        }
    }

    #[test]
    fn test_sum_dispatches_on_tags() {
        assert_eq!(Operation::sum(&n(2.0), &n(3.0)).unwrap(), n(5.0));
        assert_eq!(
            Operation::sum(&Val::from("AB"), &Val::from("CD")).unwrap(),
            Val::from("ABCD")
        );
        assert_eq!(
            Operation::sum(&Val::from("AB"), &n(1.0)).unwrap_err().code(),
            ErrorCode::TypeMismatch
        );
    }

    #[test]
    fn test_lists() {
        let l = Val::real_list(&[1.0, 2.0, 3.0]);
        assert_eq!(
            Operation::multiply(&l, &n(2.0)).unwrap(),
            Val::real_list(&[2.0, 4.0, 6.0])
        );
        assert_eq!(
            Operation::sum(&l, &l).unwrap(),
            Val::real_list(&[2.0, 4.0, 6.0])
        );
        assert_eq!(
            Operation::sum(&l, &Val::real_list(&[1.0])).unwrap_err().code(),
            ErrorCode::DimensionMismatch
        );
    }

    #[test]
    fn test_division() {
        assert_eq!(
            Operation::divide(&n(1.0), &n(0.0)).unwrap_err().code(),
            ErrorCode::DivisionByZero
        );
        assert!(close(Operation::divide(&n(1.0), &n(4.0)).unwrap(), 0.25));
    }

    #[test]
    fn test_powers_and_roots() {
        assert!(close(Operation::power(&n(2.0), &n(10.0)).unwrap(), 1024.0));
        assert!(close(Operation::power(&n(-8.0), &n(2.0)).unwrap(), 64.0));
        assert!(close(Operation::cube_root(&n(-8.0)).unwrap(), -2.0));
        assert!(close(Operation::xroot(&n(3.0), &n(-27.0)).unwrap(), -3.0));
        assert_eq!(
            Operation::square_root(&n(-4.0)).unwrap(),
            Val::complex(0.0, 2.0)
        );
        assert_eq!(
            Operation::power(&n(0.0), &n(0.0)).unwrap_err().code(),
            ErrorCode::DomainError
        );
    }

    #[test]
    fn test_factorial_domain() {
        assert!(close(Operation::factorial(&n(4.0)).unwrap(), 24.0));
        assert!(close(Operation::factorial(&n(5.5)).unwrap(), 287.885_277_8));
        assert!(close(
            Operation::factorial(&n(-0.5)).unwrap(),
            std::f64::consts::PI.sqrt()
        ));
        assert!(close(Operation::factorial(&n(0.0)).unwrap(), 1.0));
        for bad in [70.0, -1.0, 2.25] {
            assert_eq!(
                Operation::factorial(&n(bad)).unwrap_err().code(),
                ErrorCode::DomainError
            );
        }
    }

    #[test]
    fn test_combinatorics() {
        assert_eq!(Operation::permutations(&n(5.0), &n(2.0)).unwrap(), n(20.0));
        assert_eq!(Operation::combinations(&n(5.0), &n(2.0)).unwrap(), n(10.0));
        assert_eq!(Operation::combinations(&n(2.0), &n(5.0)).unwrap(), n(0.0));
        assert_eq!(Operation::permutations(&n(2.0), &n(5.0)).unwrap(), n(0.0));
        assert_eq!(
            Operation::combinations(&n(-1.0), &n(1.0)).unwrap_err().code(),
            ErrorCode::DomainError
        );
    }

    #[test]
    fn test_comparison() {
        let c = Val::complex(1.0, 1.0);
        for op in [
            Operation::less,
            Operation::less_equal,
            Operation::greater,
            Operation::greater_equal,
        ] {
            assert_eq!(
                op(&c, &n(1.0)).unwrap_err().code(),
                ErrorCode::ImaginaryComparison
            );
            assert_eq!(
                op(&n(1.0), &c).unwrap_err().code(),
                ErrorCode::ImaginaryComparison
            );
        }
        assert_eq!(Operation::equal(&c, &c).unwrap(), n(1.0));
        assert_eq!(Operation::not_equal(&c, &n(1.0)).unwrap(), n(1.0));
        assert_eq!(Operation::equal(&n(0.1 + 0.2), &n(0.3)).unwrap(), n(1.0));
        assert_eq!(Operation::less(&n(1.0), &n(2.0)).unwrap(), n(1.0));
    }

    #[test]
    fn test_logic() {
        assert_eq!(Operation::and(&n(2.0), &n(-1.0)).unwrap(), n(1.0));
        assert_eq!(Operation::or(&n(0.0), &n(0.0)).unwrap(), n(0.0));
        assert_eq!(Operation::xor(&n(1.0), &n(1.0)).unwrap(), n(0.0));
        assert_eq!(Operation::not(&n(0.0)).unwrap(), n(1.0));
        assert_eq!(
            Operation::and(&Val::complex(0.0, 1.0), &n(1.0)).unwrap_err().code(),
            ErrorCode::DomainError
        );
    }
}

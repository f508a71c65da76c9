use super::operation::{finite, Operation};
use super::val::real;
use super::{Command, Context, Parameter, Val};
use crate::error;
use crate::lang::Error;
use num_complex::Complex64;
use rand::Rng;
use std::ops::RangeInclusive;

type Result<T> = std::result::Result<T, Error>;

/// ## Expression functions
///
/// Pure functions of their evaluated arguments. Operators are
/// registered here too, under their token names.

pub struct Function {
    arity: RangeInclusive<usize>,
    check: fn(&[Val]) -> Result<bool>,
    call: fn(&[Val]) -> Result<Val>,
}

impl Function {
    pub fn new(arity: RangeInclusive<usize>, call: fn(&[Val]) -> Result<Val>) -> Function {
        Function {
            arity,
            check: |_| Ok(true),
            call,
        }
    }

    pub fn checked(
        arity: RangeInclusive<usize>,
        check: fn(&[Val]) -> Result<bool>,
        call: fn(&[Val]) -> Result<Val>,
    ) -> Function {
        Function { arity, check, call }
    }
}

impl Command for Function {
    fn check_arity(&self, count: usize) -> bool {
        self.arity.contains(&count)
    }

    fn check_argument_values(&self, args: &[Parameter], context: &Context) -> Result<bool> {
        (self.check)(&context.values(args)?)
    }

    fn execute(&self, args: &[Parameter], context: &mut Context) -> Result<Option<Val>> {
        Ok(Some((self.call)(&context.values(args)?)?))
    }
}

pub fn functions() -> Vec<(&'static str, Box<dyn Command>)> {
    let table: Vec<(&'static str, Function)> = vec![
        ("+", Function::new(2..=2, |v| Operation::sum(&v[0], &v[1]))),
        ("-", Function::new(2..=2, |v| Operation::subtract(&v[0], &v[1]))),
        ("*", Function::new(2..=2, |v| Operation::multiply(&v[0], &v[1]))),
        ("/", Function::new(2..=2, |v| Operation::divide(&v[0], &v[1]))),
        ("^", Function::new(2..=2, |v| Operation::power(&v[0], &v[1]))),
        ("ˣ√", Function::new(2..=2, |v| Operation::xroot(&v[0], &v[1]))),
        ("⁻", Function::new(1..=1, |v| Operation::negate(&v[0]))),
        ("!", Function::new(1..=1, |v| Operation::factorial(&v[0]))),
        ("²", Function::new(1..=1, |v| Operation::square(&v[0]))),
        ("³", Function::new(1..=1, |v| Operation::cube(&v[0]))),
        ("⁻¹", Function::new(1..=1, |v| Operation::inverse(&v[0]))),
        ("√(", Function::new(1..=1, |v| Operation::square_root(&v[0]))),
        ("³√(", Function::new(1..=1, |v| Operation::cube_root(&v[0]))),
        ("=", Function::new(2..=2, |v| Operation::equal(&v[0], &v[1]))),
        ("≠", Function::new(2..=2, |v| Operation::not_equal(&v[0], &v[1]))),
        ("<", Function::new(2..=2, |v| Operation::less(&v[0], &v[1]))),
        ("≤", Function::new(2..=2, |v| Operation::less_equal(&v[0], &v[1]))),
        (">", Function::new(2..=2, |v| Operation::greater(&v[0], &v[1]))),
        ("≥", Function::new(2..=2, |v| Operation::greater_equal(&v[0], &v[1]))),
        ("and", Function::new(2..=2, |v| Operation::and(&v[0], &v[1]))),
        ("or", Function::new(2..=2, |v| Operation::or(&v[0], &v[1]))),
        ("xor", Function::new(2..=2, |v| Operation::xor(&v[0], &v[1]))),
        ("nPr", Function::new(2..=2, |v| Operation::permutations(&v[0], &v[1]))),
        ("nCr", Function::new(2..=2, |v| Operation::combinations(&v[0], &v[1]))),
        ("not(", Function::new(1..=1, |v| Operation::not(&v[0]))),
        ("abs(", Function::new(1..=1, |v| map(&v[0], |n| Ok(n.norm().into())))),
        ("round(", Function::checked(1..=2, check_round, round)),
        ("iPart(", Function::new(1..=1, |v| map_parts(&v[0], f64::trunc))),
        ("fPart(", Function::new(1..=1, |v| map_parts(&v[0], f64::fract))),
        ("int(", Function::new(1..=1, |v| map_real(&v[0], f64::floor))),
        ("sin(", Function::new(1..=1, |v| map(&v[0], |n| finite(n.sin())))),
        ("cos(", Function::new(1..=1, |v| map(&v[0], |n| finite(n.cos())))),
        ("tan(", Function::new(1..=1, |v| map(&v[0], tan))),
        ("ln(", Function::new(1..=1, |v| map(&v[0], ln))),
        ("log(", Function::new(1..=1, |v| map(&v[0], |n| Ok(ln(n)? / 10f64.ln())))),
        ("e^(", Function::new(1..=1, |v| map(&v[0], |n| finite(n.exp())))),
        ("real(", Function::new(1..=1, |v| map(&v[0], |n| Ok(n.re.into())))),
        ("imag(", Function::new(1..=1, |v| map(&v[0], |n| Ok(n.im.into())))),
        ("conj(", Function::new(1..=1, |v| map(&v[0], |n| Ok(n.conj())))),
        ("angle(", Function::new(1..=1, |v| map(&v[0], |n| Ok(n.arg().into())))),
        ("max(", Function::new(1..=2, |v| extreme(v, f64::max))),
        ("min(", Function::new(1..=2, |v| extreme(v, f64::min))),
        ("dim(", Function::new(1..=1, |v| Ok((v[0].as_list()?.len() as f64).into()))),
        ("sum(", Function::new(1..=1, |v| Ok(Val::Number(finite(v[0].as_list()?.iter().sum())?)))),
        ("prod(", Function::new(1..=1, |v| Ok(Val::Number(finite(v[0].as_list()?.iter().product())?)))),
        ("length(", Function::new(1..=1, |v| Ok((v[0].as_string()?.chars().count() as f64).into()))),
        ("sub(", Function::checked(3..=3, check_sub, sub)),
        ("augment(", Function::new(2..=2, augment)),
        ("remainder(", Function::new(2..=2, remainder)),
        ("gcd(", Function::new(2..=2, |v| integers(v, |a, b| Some(gcd(a, b))))),
        ("lcm(", Function::new(2..=2, |v| integers(v, lcm))),
        ("randInt(", Function::checked(2..=2, check_rand_int, rand_int)),
        ("rand", Function::new(0..=0, |_| Ok(rand::thread_rng().gen::<f64>().into()))),
    ];
    table
        .into_iter()
        .map(|(name, f)| (name, Box::new(f) as Box<dyn Command>))
        .collect()
}

fn map(val: &Val, f: impl Fn(Complex64) -> Result<Complex64>) -> Result<Val> {
    Operation::unary(val, f)
}

fn map_real(val: &Val, f: fn(f64) -> f64) -> Result<Val> {
    Operation::unary(val, |n| Ok(f(real(n)?).into()))
}

/// Applies `f` to the real and imaginary parts separately.
fn map_parts(val: &Val, f: fn(f64) -> f64) -> Result<Val> {
    Operation::unary(val, |n| Ok(Complex64::new(f(n.re), f(n.im))))
}

fn tan(n: Complex64) -> Result<Complex64> {
    if n.im == 0.0 && n.re.cos() == 0.0 {
        return Err(error!(DomainError; "TAN"));
    }
    finite(n.tan())
}

fn ln(n: Complex64) -> Result<Complex64> {
    if n.re == 0.0 && n.im == 0.0 {
        return Err(error!(DomainError; "LN 0"));
    }
    if n.im == 0.0 && n.re > 0.0 {
        return Ok(n.re.ln().into());
    }
    finite(n.ln())
}

fn check_round(v: &[Val]) -> Result<bool> {
    match v.get(1) {
        Some(places) => Ok((0..=9).contains(&places.as_integer()?)),
        None => Ok(true),
    }
}

fn round(v: &[Val]) -> Result<Val> {
    let places = match v.get(1) {
        Some(places) => places.as_integer()? as i32,
        None => 9,
    };
    let scale = 10f64.powi(places);
    let nearest = |x: f64| (x * scale).round() / scale;
    Operation::unary(&v[0], |n| Ok(Complex64::new(nearest(n.re), nearest(n.im))))
}

/// `max(list)` or element-wise `max(a,b)` over reals.
fn extreme(v: &[Val], pick: fn(f64, f64) -> f64) -> Result<Val> {
    if v.len() == 1 {
        let list = v[0].as_list()?;
        let mut iter = list.iter();
        let first = match iter.next() {
            Some(n) => ordered(*n)?,
            None => return Err(error!(ArgumentError; "EMPTY LIST")),
        };
        let mut acc = first;
        for n in iter {
            acc = pick(acc, ordered(*n)?);
        }
        return Ok(acc.into());
    }
    Operation::binary(&v[0], &v[1], |l, r| Ok(pick(ordered(l)?, ordered(r)?).into()))
}

fn ordered(n: Complex64) -> Result<f64> {
    if n.im != 0.0 {
        return Err(error!(ImaginaryComparison));
    }
    Ok(n.re)
}

fn check_sub(v: &[Val]) -> Result<bool> {
    let len = v[0].as_string()?.chars().count() as i64;
    let start = v[1].as_integer()?;
    let count = v[2].as_integer()?;
    Ok(start >= 1 && count >= 0 && start - 1 + count <= len)
}

fn sub(v: &[Val]) -> Result<Val> {
    let s = v[0].as_string()?;
    let start = v[1].as_integer()? as usize - 1;
    let count = v[2].as_integer()? as usize;
    let text: String = s.chars().skip(start).take(count).collect();
    Ok(Val::String(text.into()))
}

fn augment(v: &[Val]) -> Result<Val> {
    match (&v[0], &v[1]) {
        (Val::String(l), Val::String(r)) => Ok(Val::String(format!("{}{}", l, r).into())),
        (l, r) => {
            let mut list = l.as_list()?.to_vec();
            list.extend_from_slice(r.as_list()?);
            if list.len() > super::LIST_CAPACITY {
                return Err(error!(ArgumentError; "INVALID DIM"));
            }
            Ok(Val::List(list))
        }
    }
}

fn remainder(v: &[Val]) -> Result<Val> {
    Operation::binary(&v[0], &v[1], |l, r| {
        let (l, r) = (real(l)?, real(r)?);
        if r == 0.0 {
            return Err(error!(DivisionByZero));
        }
        Ok((l - r * (l / r).floor()).into())
    })
}

/// Applies `f` to nonnegative integer operands.
fn integers(v: &[Val], f: fn(u64, u64) -> Option<u64>) -> Result<Val> {
    Operation::binary(&v[0], &v[1], |l, r| {
        let l = natural(l)?;
        let r = natural(r)?;
        match f(l, r) {
            Some(n) => Ok((n as f64).into()),
            None => Err(error!(DomainError; "OVERFLOW")),
        }
    })
}

fn natural(n: Complex64) -> Result<u64> {
    let n = real(n)?;
    if n < 0.0 || n.fract() != 0.0 || n > 1e12 {
        return Err(error!(DomainError; "EXPECTED NONNEGATIVE INTEGER"));
    }
    Ok(n as u64)
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        Some(0)
    } else {
        (a / gcd(a, b)).checked_mul(b)
    }
}

fn check_rand_int(v: &[Val]) -> Result<bool> {
    Ok(v[0].as_integer()? <= v[1].as_integer()?)
}

fn rand_int(v: &[Val]) -> Result<Val> {
    let lower = v[0].as_integer()?;
    let upper = v[1].as_integer()?;
    Ok((rand::thread_rng().gen_range(lower..=upper) as f64).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(name: &str, args: &[Val]) -> Result<Val> {
        let (_, f) = functions()
            .into_iter()
            .find(|(n, _)| *n == name)
            .unwrap();
        let mut memory = crate::mach::Memory::new();
        let mut modes = crate::mach::Modes::default();
        let mut screen = crate::mach::HomeScreen::new();
        let mut keypad = crate::mach::NoKeypad;
        let mut context = Context {
            memory: &mut memory,
            modes: &mut modes,
            screen: &mut screen,
            keypad: &mut keypad,
        };
        let params: Vec<Parameter> = args.iter().cloned().map(Parameter::Evaluated).collect();
        assert!(f.check_arity(params.len()));
        if !f.check_argument_values(&params, &context)? {
            return Err(error!(ArgumentError));
        }
        Ok(f.execute(&params, &mut context)?.unwrap())
    }

    fn n(v: f64) -> Val {
        Val::from(v)
    }

    #[test]
    fn test_rounding_family() {
        assert_eq!(call("round(", &[n(1.256), n(2.0)]).unwrap(), n(1.26));
        assert_eq!(call("iPart(", &[n(-2.5)]).unwrap(), n(-2.0));
        assert_eq!(call("fPart(", &[n(-2.5)]).unwrap(), n(-0.5));
        assert_eq!(call("int(", &[n(-2.5)]).unwrap(), n(-3.0));
        assert!(call("round(", &[n(1.0), n(12.0)]).is_err());
    }

    #[test]
    fn test_lists() {
        let l = Val::real_list(&[3.0, 1.0, 2.0]);
        assert_eq!(call("dim(", &[l.clone()]).unwrap(), n(3.0));
        assert_eq!(call("sum(", &[l.clone()]).unwrap(), n(6.0));
        assert_eq!(call("prod(", &[l.clone()]).unwrap(), n(6.0));
        assert_eq!(call("max(", &[l.clone()]).unwrap(), n(3.0));
        assert_eq!(call("min(", &[n(4.0), n(-1.0)]).unwrap(), n(-1.0));
        assert_eq!(
            call("augment(", &[l, Val::real_list(&[9.0])]).unwrap(),
            Val::real_list(&[3.0, 1.0, 2.0, 9.0])
        );
    }

    #[test]
    fn test_strings() {
        let s = Val::from("HELLO");
        assert_eq!(call("length(", &[s.clone()]).unwrap(), n(5.0));
        assert_eq!(call("sub(", &[s.clone(), n(2.0), n(3.0)]).unwrap(), Val::from("ELL"));
        assert!(call("sub(", &[s, n(4.0), n(3.0)]).is_err());
    }

    #[test]
    fn test_number_theory() {
        assert_eq!(call("gcd(", &[n(12.0), n(18.0)]).unwrap(), n(6.0));
        assert_eq!(call("lcm(", &[n(4.0), n(6.0)]).unwrap(), n(12.0));
        assert_eq!(call("remainder(", &[n(17.0), n(5.0)]).unwrap(), n(2.0));
    }

    #[test]
    fn test_lcm_overflow() {
        let big = [n(999999999989.0), n(999999999959.0)];
        assert_eq!(
            call("lcm(", &big).unwrap_err().code(),
            crate::lang::ErrorCode::DomainError
        );
        assert_eq!(call("lcm(", &[n(0.0), n(7.0)]).unwrap(), n(0.0));
    }

    #[test]
    fn test_transcendental() {
        assert_eq!(call("ln(", &[n(1.0)]).unwrap(), n(0.0));
        assert_eq!(call("abs(", &[Val::complex(3.0, 4.0)]).unwrap(), n(5.0));
        assert_eq!(call("imag(", &[Val::complex(3.0, 4.0)]).unwrap(), n(4.0));
        assert!(call("ln(", &[n(0.0)]).is_err());
        match call("log(", &[n(1000.0)]).unwrap() {
            Val::Number(c) => assert!((c.re - 3.0).abs() < 1e-9),
            v => panic!("{:?}", v),
        }
    }

    #[test]
    fn test_random() {
        for _ in 0..20 {
            let r = call("randInt(", &[n(1.0), n(6.0)]).unwrap().as_real().unwrap();
            assert!((1.0..=6.0).contains(&r) && r.fract() == 0.0);
            let r = call("rand", &[]).unwrap().as_real().unwrap();
            assert!((0.0..1.0).contains(&r));
        }
        assert!(call("randInt(", &[n(6.0), n(1.0)]).is_err());
    }
}

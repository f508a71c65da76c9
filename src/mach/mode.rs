use super::Val;
use crate::error;
use crate::lang::Error;
use num_complex::Complex64;

type Result<T> = std::result::Result<T, Error>;

/// Significant digits shown in Float mode.
const FLOAT_DIGITS: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecimalMode {
    #[default]
    Float,
    Fix(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberMode {
    #[default]
    Normal,
    Sci,
    Eng,
}

/// ## Display mode settings
///
/// Session state read by the value formatter.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modes {
    pub decimal: DecimalMode,
    pub number: NumberMode,
}

impl Modes {
    pub fn format(&self, val: &Val) -> Result<String> {
        match val {
            Val::Number(n) => self.format_complex(*n),
            Val::String(s) => Ok(s.to_string()),
            Val::List(v) => {
                let items = v
                    .iter()
                    .map(|n| self.format_complex(*n))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("{{{}}}", items.join(",")))
            }
        }
    }

    pub fn format_complex(&self, n: Complex64) -> Result<String> {
        if n.im == 0.0 {
            return self.format_real(n.re);
        }
        let im = match n.im {
            i if i == 1.0 => String::from("i"),
            i if i == -1.0 => String::from("-i"),
            i => format!("{}i", self.format_real(i)?),
        };
        if n.re == 0.0 {
            return Ok(im);
        }
        let re = self.format_real(n.re)?;
        if im.starts_with('-') {
            Ok(format!("{}{}", re, im))
        } else {
            Ok(format!("{}+{}", re, im))
        }
    }

    pub fn format_real(&self, n: f64) -> Result<String> {
        if self.number != NumberMode::Normal {
            return Err(error!(UnsupportedDisplayMode; format!("{:?}", self.number).to_uppercase()));
        }
        if !n.is_finite() {
            return Ok(n.to_string());
        }
        match self.decimal {
            DecimalMode::Fix(places) => Ok(negative_zero(format!("{:.*}", places as usize, n))),
            DecimalMode::Float => Ok(float(n)),
        }
    }
}

fn float(n: f64) -> String {
    if n == 0.0 {
        return String::from("0");
    }
    let magnitude = n.abs();
    if !(1e-3..1e10).contains(&magnitude) {
        let s = format!("{:.*e}", (FLOAT_DIGITS - 1) as usize, n);
        return match s.split_once('e') {
            Some((mantissa, exponent)) => format!("{}E{}", trim_zeros(mantissa), exponent),
            None => s,
        };
    }
    let whole_digits = magnitude.log10().floor() as i32 + 1;
    let places = (FLOAT_DIGITS - whole_digits).max(0) as usize;
    negative_zero(trim_zeros(&format!("{:.*}", places, n)).to_string())
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn negative_zero(s: String) -> String {
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn float(n: f64) -> String {
        Modes::default().format(&Val::from(n)).unwrap()
    }

    #[test]
    fn test_float_normal() {
        assert_eq!(float(5.0), "5");
        assert_eq!(float(-2.5), "-2.5");
        assert_eq!(float(0.25), "0.25");
        assert_eq!(float(1.0 / 3.0), "0.3333333333");
        assert_eq!(float(2.0 / 3.0), "0.6666666667");
        assert_eq!(float(123456.789), "123456.789");
        assert_eq!(float(1.5e10), "1.5E10");
        assert_eq!(float(0.00015), "1.5E-4");
        assert_eq!(float(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_complex() {
        let m = Modes::default();
        assert_eq!(m.format(&Val::complex(3.0, 2.0)).unwrap(), "3+2i");
        assert_eq!(m.format(&Val::complex(3.0, -2.0)).unwrap(), "3-2i");
        assert_eq!(m.format(&Val::complex(0.0, -2.0)).unwrap(), "-2i");
        assert_eq!(m.format(&Val::complex(0.0, 1.0)).unwrap(), "i");
        assert_eq!(m.format(&Val::complex(1.5, 1.0)).unwrap(), "1.5+i");
    }

    #[test]
    fn test_list_and_string() {
        let m = Modes::default();
        assert_eq!(m.format(&Val::real_list(&[1.0, 2.5, -3.0])).unwrap(), "{1,2.5,-3}");
        assert_eq!(m.format(&Val::real_list(&[])).unwrap(), "{}");
        assert_eq!(m.format(&Val::from("HI")).unwrap(), "HI");
    }

    #[test]
    fn test_fix() {
        let m = Modes {
            decimal: DecimalMode::Fix(2),
            number: NumberMode::Normal,
        };
        assert_eq!(m.format(&Val::from(3.14159)).unwrap(), "3.14");
        assert_eq!(m.format(&Val::from(2.0)).unwrap(), "2.00");
        assert_eq!(m.format(&Val::from(-0.001)).unwrap(), "0.00");
    }

    #[test]
    fn test_unsupported() {
        let m = Modes {
            decimal: DecimalMode::Float,
            number: NumberMode::Sci,
        };
        assert_eq!(
            m.format(&Val::from(1.0)).unwrap_err().code(),
            ErrorCode::UnsupportedDisplayMode
        );
        assert_eq!(m.format(&Val::from("A")).unwrap(), "A");
    }
}

use super::{Keypad, Memory, Modes, Screen, Val, Variable};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// A call-site argument. Bare variables are passed unevaluated so
/// commands can write back through them.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    Evaluated(Val),
    Unevaluated(Variable),
}

impl Parameter {
    pub fn value(&self, memory: &Memory) -> Result<Val> {
        match self {
            Parameter::Evaluated(val) => Ok(val.clone()),
            Parameter::Unevaluated(var) => memory.read(var),
        }
    }

    pub fn variable(&self) -> Result<&Variable> {
        match self {
            Parameter::Unevaluated(var) => Ok(var),
            Parameter::Evaluated(_) => Err(error!(ArgumentError; "EXPECTED VARIABLE")),
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Parameter::Unevaluated(_))
    }
}

/// Everything a command may touch while it runs.
pub struct Context<'a> {
    pub memory: &'a mut Memory,
    pub modes: &'a mut Modes,
    pub screen: &'a mut dyn Screen,
    pub keypad: &'a mut dyn Keypad,
}

impl<'a> Context<'a> {
    pub fn values(&self, args: &[Parameter]) -> Result<Vec<Val>> {
        args.iter().map(|p| p.value(&*self.memory)).collect()
    }

    /// Strings print as text, everything else as a formatted value.
    pub fn display(&mut self, val: &Val) -> Result<()> {
        match val {
            Val::String(s) => self.screen.print_text(s),
            _ => {
                let text = self.modes.format(val)?;
                self.screen.print_value(&text)
            }
        }
    }
}

/// ## Command contract
///
/// The dispatcher always calls `check_arity`, then
/// `check_argument_values`, and only then `execute`.
pub trait Command {
    fn check_arity(&self, count: usize) -> bool;

    /// May return an error of its own instead of `false`.
    fn check_argument_values(&self, _args: &[Parameter], _context: &Context) -> Result<bool> {
        Ok(true)
    }

    fn execute(&self, args: &[Parameter], context: &mut Context) -> Result<Option<Val>>;
}

use super::var::{ListVariable, NumberVariable, StringVariable};
use super::{Val, Variable, LIST_CAPACITY};
use crate::error;
use crate::lang::Error;
use num_complex::Complex64;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Number variables start at zero. String and list variables are
/// undefined until written.

#[derive(Debug, Default)]
pub struct Memory {
    numbers: [Complex64; NumberVariable::COUNT],
    strings: [Option<Rc<str>>; StringVariable::COUNT],
    lists: HashMap<Rc<str>, Vec<Complex64>>,
    ans: Val,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    pub fn clear(&mut self) {
        *self = Memory::default();
    }

    pub fn ans(&self) -> &Val {
        &self.ans
    }

    pub fn set_ans(&mut self, val: Val) {
        self.ans = val;
    }

    pub fn number(&self, var: NumberVariable) -> Complex64 {
        self.numbers[var.index()]
    }

    pub fn set_number(&mut self, var: NumberVariable, n: Complex64) {
        self.numbers[var.index()] = n;
    }

    pub fn list(&self, var: &ListVariable) -> Result<&[Complex64]> {
        match self.lists.get(var.key()) {
            Some(v) => Ok(v),
            None => Err(error!(UndefinedVariable; var.name())),
        }
    }

    pub fn read(&self, var: &Variable) -> Result<Val> {
        match var {
            Variable::Number(v) => Ok(Val::Number(self.number(*v))),
            Variable::String(v) => match &self.strings[v.index()] {
                Some(s) => Ok(Val::String(s.clone())),
                None => Err(error!(UndefinedVariable; v.name())),
            },
            Variable::List(v) => Ok(Val::List(self.list(v)?.to_vec())),
            Variable::Element(v, index) => {
                let list = self.list(v)?;
                match index.checked_sub(1).and_then(|i| list.get(i)) {
                    Some(n) => Ok(Val::Number(*n)),
                    None => Err(error!(ArgumentError; "INVALID DIM")),
                }
            }
        }
    }

    /// Lists are created on first write. An element write may extend
    /// a list by exactly one.
    pub fn write(&mut self, var: &Variable, val: Val) -> Result<()> {
        match var {
            Variable::Number(v) => {
                self.set_number(*v, val.as_number()?);
            }
            Variable::String(v) => {
                self.strings[v.index()] = Some(val.as_string()?);
            }
            Variable::List(v) => {
                let items = val.as_list()?;
                if items.len() > LIST_CAPACITY {
                    return Err(error!(ArgumentError; "INVALID DIM"));
                }
                self.lists.insert(v.key().clone(), items.to_vec());
            }
            Variable::Element(v, index) => {
                let n = val.as_number()?;
                let existed = self.lists.contains_key(v.key());
                let list = self.lists.entry(v.key().clone()).or_default();
                if *index >= 1 && *index <= list.len() {
                    list[index - 1] = n;
                } else if *index == list.len() + 1 && *index <= LIST_CAPACITY {
                    list.push(n);
                } else {
                    if !existed {
                        self.lists.remove(v.key());
                    }
                    return Err(error!(ArgumentError; "INVALID DIM"));
                }
            }
        }
        Ok(())
    }

    pub fn delete(&mut self, var: &Variable) -> Result<()> {
        match var {
            Variable::Number(v) => self.set_number(*v, Complex64::new(0.0, 0.0)),
            Variable::String(v) => self.strings[v.index()] = None,
            Variable::List(v) => {
                self.lists.remove(v.key());
            }
            Variable::Element(..) => return Err(error!(ArgumentError; "CANNOT DELETE ELEMENT")),
        }
        Ok(())
    }
}

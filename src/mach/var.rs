use crate::error;
use crate::lang::{ast, is_list_name, Error};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableType {
    Number,
    String,
    List,
}

/// `A`-`Z` then `θ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberVariable(u8);

impl NumberVariable {
    pub const COUNT: usize = 27;

    pub fn new(name: char) -> Result<NumberVariable> {
        match name {
            'A'..='Z' => Ok(NumberVariable(name as u8 - b'A')),
            'θ' => Ok(NumberVariable(26)),
            _ => Err(error!(UnknownVariableName; name.to_string())),
        }
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn name(&self) -> char {
        if self.0 == 26 {
            'θ'
        } else {
            char::from(b'A' + self.0)
        }
    }
}

/// `Str0`-`Str9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringVariable(u8);

impl StringVariable {
    pub const COUNT: usize = 10;

    pub fn new(digit: u8) -> Result<StringVariable> {
        if (digit as usize) < StringVariable::COUNT {
            Ok(StringVariable(digit))
        } else {
            Err(error!(UnknownVariableName; format!("Str{}", digit)))
        }
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn name(&self) -> String {
        format!("Str{}", self.0)
    }
}

/// `L1`-`L6` or a custom list name, stored without its `∟`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListVariable(Rc<str>);

impl ListVariable {
    pub fn new(name: &str) -> Result<ListVariable> {
        let name = name.strip_prefix('∟').unwrap_or(name);
        if is_builtin_list(name) || is_list_name(name) {
            Ok(ListVariable(name.into()))
        } else {
            Err(error!(UnknownVariableName; format!("∟{}", name)))
        }
    }

    pub fn key(&self) -> &Rc<str> {
        &self.0
    }

    pub fn name(&self) -> String {
        if is_builtin_list(&self.0) {
            self.0.to_string()
        } else {
            format!("∟{}", self.0)
        }
    }
}

/// `L1` through `L6`.
fn is_builtin_list(name: &str) -> bool {
    name.len() == 2 && name.starts_with('L') && name[1..].chars().all(|c| ('1'..='6').contains(&c))
}

/// ## Variable references
///
/// Resolved names that `Memory` reads and writes through.

#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    Number(NumberVariable),
    String(StringVariable),
    List(ListVariable),
    /// 1-based element of a list.
    Element(ListVariable, usize),
}

impl Variable {
    pub fn from_ast(var: &ast::Variable) -> Result<Variable> {
        Ok(match var {
            ast::Variable::Number(c) => Variable::Number(NumberVariable::new(*c)?),
            ast::Variable::String(n) => Variable::String(StringVariable::new(*n)?),
            ast::Variable::List(name) => Variable::List(ListVariable::new(name)?),
        })
    }

    pub fn name(&self) -> String {
        match self {
            Variable::Number(v) => v.name().to_string(),
            Variable::String(v) => v.name(),
            Variable::List(v) => v.name(),
            Variable::Element(v, index) => format!("{}({})", v.name(), index),
        }
    }

    pub fn variable_type(&self) -> VariableType {
        match self {
            Variable::Number(_) | Variable::Element(..) => VariableType::Number,
            Variable::String(_) => VariableType::String,
            Variable::List(_) => VariableType::List,
        }
    }
}

use super::Position;
use num_complex::Complex64;
use std::rc::Rc;

/// One command of the linear command stream.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Expression(Position, Expression),
    Store(Position, Expression, Target),
    If(Position, Expression),
    Then(Position),
    Else(Position),
    End(Position),
    While(Position, Expression),
    Repeat(Position, Expression),
    For(Position, char, Expression, Expression, Option<Expression>),
    Lbl(Position, Rc<str>),
    Goto(Position, Rc<str>),
    IsGreater(Position, char, Expression),
    DsLess(Position, char, Expression),
    Command(Position, Rc<str>, Vec<Expression>),
    CommandFunction(Position, Rc<str>, Vec<Expression>),
    Prgm(Position, Rc<str>),
    Return(Position),
    Stop(Position),
}

impl Statement {
    pub fn position(&self) -> Position {
        use Statement::*;
        match self {
            Expression(pos, ..)
            | Store(pos, ..)
            | If(pos, _)
            | Then(pos)
            | Else(pos)
            | End(pos)
            | While(pos, _)
            | Repeat(pos, _)
            | For(pos, ..)
            | Lbl(pos, _)
            | Goto(pos, _)
            | IsGreater(pos, ..)
            | DsLess(pos, ..)
            | Command(pos, ..)
            | CommandFunction(pos, ..)
            | Prgm(pos, _)
            | Return(pos)
            | Stop(pos) => *pos,
        }
    }

    /// Keywords that are only legal inside a stored program.
    pub fn is_control_flow(&self) -> bool {
        use Statement::*;
        matches!(
            self,
            If(..)
                | Then(_)
                | Else(_)
                | End(_)
                | While(..)
                | Repeat(..)
                | For(..)
                | Lbl(..)
                | Goto(..)
                | IsGreater(..)
                | DsLess(..)
        )
    }

    pub fn keyword(&self) -> &str {
        use Statement::*;
        match self {
            Expression(..) | Store(..) => "EXPRESSION",
            If(..) => "If",
            Then(_) => "Then",
            Else(_) => "Else",
            End(_) => "End",
            While(..) => "While",
            Repeat(..) => "Repeat",
            For(..) => "For(",
            Lbl(..) => "Lbl",
            Goto(..) => "Goto",
            IsGreater(..) => "IS>(",
            DsLess(..) => "DS<(",
            Command(_, name, _) | CommandFunction(_, name, _) => name,
            Prgm(..) => "prgm",
            Return(_) => "Return",
            Stop(_) => "Stop",
        }
    }
}

/// A variable as written in source.
#[derive(Debug, PartialEq, Clone)]
pub enum Variable {
    /// `A`-`Z` or `θ`
    Number(char),
    /// `Str0`-`Str9`
    String(u8),
    /// `L1`-`L6` or a custom name without its `∟`
    List(Rc<str>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Target {
    Var(Variable),
    Element(Rc<str>, Expression),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Number(Position, Complex64),
    String(Position, Rc<str>),
    List(Position, Vec<Expression>),
    Var(Position, Variable),
    Element(Position, Rc<str>, Box<Expression>),
    Ans(Position),
    /// Operators and functions alike, by registered name.
    Call(Position, Rc<str>, Vec<Expression>),
}

impl Expression {
    pub fn position(&self) -> Position {
        use Expression::*;
        match self {
            Number(pos, _)
            | String(pos, _)
            | List(pos, _)
            | Var(pos, _)
            | Element(pos, ..)
            | Ans(pos)
            | Call(pos, ..) => *pos,
        }
    }
}

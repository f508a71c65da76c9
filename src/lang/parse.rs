use super::{ast::*, is_label_name, is_list_name, is_program_name, lex, token::*, Error, Position};
use num_complex::Complex64;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

pub fn parse(source: &str) -> Result<Vec<Statement>> {
    let tokens = lex(source);
    Parser::parse(&tokens)
}

/// Binary operator levels from loosest to tightest.
const OR_LEVEL: usize = 0;
const AND_LEVEL: usize = 1;
const RELATIONAL_LEVEL: usize = 2;
const SUM_LEVEL: usize = 3;
const PRODUCT_LEVEL: usize = 4;
const COMBINATORIC_LEVEL: usize = 5;
const LEVELS: usize = 6;

struct Parser<'a> {
    token_stream: std::iter::Peekable<std::slice::Iter<'a, (Position, Token)>>,
    pos: Position,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [(Position, Token)]) -> Result<Vec<Statement>> {
        let mut parse = Parser {
            token_stream: tokens.iter().peekable(),
            pos: Position::new(1, 1),
        };
        let mut r: Vec<Statement> = vec![];
        loop {
            match parse.peek() {
                None => return Ok(r),
                Some(t) if t.is_separator() => {
                    parse.next();
                    continue;
                }
                _ => {}
            }
            r.push(parse.statement()?);
            match parse.peek() {
                None => {}
                Some(t) if t.is_separator() => {}
                Some(t) => {
                    return Err(error!(SyntaxError, ..parse.peek_position(); format!("UNEXPECTED {}", t)))
                }
            }
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        let (pos, t) = self.token_stream.next()?;
        self.pos = *pos;
        Some(t)
    }

    fn peek(&mut self) -> Option<&'a Token> {
        self.token_stream.peek().copied().map(|(_, t)| t)
    }

    fn peek_position(&mut self) -> Position {
        match self.token_stream.peek() {
            Some((pos, _)) => *pos,
            None => self.pos,
        }
    }

    fn at_end_of_statement(&mut self) -> bool {
        match self.peek() {
            None => true,
            Some(t) => t.is_separator(),
        }
    }

    fn unexpected(&mut self, expected: &str) -> Error {
        let position = self.peek_position();
        match self.peek() {
            None => error!(SyntaxError, ..position; format!("EXPECTED {}", expected)),
            Some(t) => error!(SyntaxError, ..position; format!("EXPECTED {} FOUND {}", expected, t.to_string().trim())),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if self.peek() == Some(&token) {
            self.next();
            return Ok(());
        }
        Err(self.unexpected(&token.to_string()))
    }

    /// Closing parentheses may be left off at the end of a statement.
    fn close(&mut self, token: Token) -> Result<()> {
        if self.at_end_of_statement() || self.peek() == Some(&Token::Store) {
            return Ok(());
        }
        self.expect(token)
    }

    fn statement(&mut self) -> Result<Statement> {
        let position = self.peek_position();
        match self.peek() {
            Some(Token::Word(word)) => {
                self.next();
                self.for_word(*word, position)
            }
            Some(Token::Name(name)) if is_command_name(name) => {
                self.next();
                self.command(name, position)
            }
            _ => {
                let expr = self.expression()?;
                if let Some(Token::Store) = self.peek() {
                    self.next();
                    let target = self.target()?;
                    Ok(Statement::Store(position, expr, target))
                } else {
                    Ok(Statement::Expression(position, expr))
                }
            }
        }
    }

    fn for_word(&mut self, word: Word, position: Position) -> Result<Statement> {
        use Word::*;
        Ok(match word {
            If => Statement::If(position, self.expression()?),
            Then => Statement::Then(position),
            Else => Statement::Else(position),
            End => Statement::End(position),
            While => Statement::While(position, self.expression()?),
            Repeat => Statement::Repeat(position, self.expression()?),
            For => {
                self.expect(Token::LParen)?;
                let var = self.letter()?;
                self.expect(Token::Comma)?;
                let start = self.expression()?;
                self.expect(Token::Comma)?;
                let end = self.expression()?;
                let step = if self.peek() == Some(&Token::Comma) {
                    self.next();
                    Some(self.expression()?)
                } else {
                    None
                };
                self.close(Token::RParen)?;
                Statement::For(position, var, start, end, step)
            }
            Lbl => Statement::Lbl(position, self.label(is_label_name, "LABEL")?),
            Goto => Statement::Goto(position, self.label(is_label_name, "LABEL")?),
            Prgm => Statement::Prgm(position, self.label(is_program_name, "PROGRAM NAME")?),
            IsGreater | DsLess => {
                let var = self.letter()?;
                self.expect(Token::Comma)?;
                let limit = self.expression()?;
                self.close(Token::RParen)?;
                if word == IsGreater {
                    Statement::IsGreater(position, var, limit)
                } else {
                    Statement::DsLess(position, var, limit)
                }
            }
            Return => Statement::Return(position),
            Stop => Statement::Stop(position),
        })
    }

    fn command(&mut self, name: &str, position: Position) -> Result<Statement> {
        if self.peek() == Some(&Token::LParen) {
            self.next();
            let args = self.arguments()?;
            return Ok(Statement::CommandFunction(
                position,
                format!("{}(", name).into(),
                args,
            ));
        }
        let mut args = vec![];
        if !self.at_end_of_statement() {
            loop {
                args.push(self.expression()?);
                if self.peek() != Some(&Token::Comma) {
                    break;
                }
                self.next();
            }
        }
        Ok(Statement::Command(position, name.into(), args))
    }

    fn letter(&mut self) -> Result<char> {
        match self.peek() {
            Some(Token::Letter(c)) => {
                let c = *c;
                self.next();
                Ok(c)
            }
            _ => Err(self.unexpected("VARIABLE")),
        }
    }

    fn label(&mut self, valid: fn(&str) -> bool, what: &str) -> Result<Rc<str>> {
        let position = self.peek_position();
        match self.peek() {
            Some(Token::Label(s)) => {
                self.next();
                if valid(s) {
                    Ok(s.as_str().into())
                } else {
                    Err(error!(SyntaxError, ..position; format!("INVALID {} {}", what, s)))
                }
            }
            _ => Err(self.unexpected(what)),
        }
    }

    fn target(&mut self) -> Result<Target> {
        let position = self.peek_position();
        match self.next() {
            Some(Token::Letter(c)) => Ok(Target::Var(Variable::Number(*c))),
            Some(Token::Name(name)) => match string_variable(name) {
                Some(n) => Ok(Target::Var(Variable::String(n))),
                None => Err(error!(SyntaxError, ..position; format!("CANNOT STORE TO {}", name))),
            },
            Some(Token::List(name)) => {
                let name = list_name(name, position)?;
                if self.peek() == Some(&Token::LParen) {
                    self.next();
                    let index = self.expression()?;
                    self.close(Token::RParen)?;
                    Ok(Target::Element(name, index))
                } else {
                    Ok(Target::Var(Variable::List(name)))
                }
            }
            _ => Err(error!(SyntaxError, ..position; "INVALID STORE TARGET")),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        self.binary(OR_LEVEL)
    }

    fn binary_operator(&mut self, level: usize) -> Option<Rc<str>> {
        let name = match (level, self.peek()?) {
            (OR_LEVEL, Token::Name(n)) if n == "or" || n == "xor" => n.to_string(),
            (AND_LEVEL, Token::Name(n)) if n == "and" => n.to_string(),
            (RELATIONAL_LEVEL, Token::Operator(op)) if op.is_relational() => op.to_string(),
            (SUM_LEVEL, Token::Operator(op @ Operator::Plus))
            | (SUM_LEVEL, Token::Operator(op @ Operator::Minus))
            | (PRODUCT_LEVEL, Token::Operator(op @ Operator::Multiply))
            | (PRODUCT_LEVEL, Token::Operator(op @ Operator::Divide)) => op.to_string(),
            (COMBINATORIC_LEVEL, Token::Name(n)) if n == "nPr" || n == "nCr" => n.to_string(),
            _ => return None,
        };
        Some(name.into())
    }

    fn binary(&mut self, level: usize) -> Result<Expression> {
        if level == LEVELS {
            return self.negation();
        }
        let mut lhs = self.binary(level + 1)?;
        loop {
            let position = self.peek_position();
            if let Some(name) = self.binary_operator(level) {
                self.next();
                let rhs = self.binary(level + 1)?;
                lhs = Expression::Call(position, name, vec![lhs, rhs]);
            } else if level == PRODUCT_LEVEL && self.starts_operand() {
                let rhs = self.binary(level + 1)?;
                lhs = Expression::Call(position, "*".into(), vec![lhs, rhs]);
            } else {
                break;
            }
        }
        Ok(lhs)
    }

    fn starts_operand(&mut self) -> bool {
        match self.peek() {
            Some(Token::Number(_))
            | Some(Token::String(_))
            | Some(Token::Letter(_))
            | Some(Token::List(_))
            | Some(Token::LParen)
            | Some(Token::LBrace)
            | Some(Token::Operator(Operator::Negate))
            | Some(Token::Operator(Operator::SquareRoot))
            | Some(Token::Operator(Operator::CubeRoot)) => true,
            Some(Token::Name(n)) => !is_operator_name(n),
            _ => false,
        }
    }

    fn negation(&mut self) -> Result<Expression> {
        match self.peek() {
            Some(Token::Operator(Operator::Negate)) | Some(Token::Operator(Operator::Minus)) => {
                let position = self.peek_position();
                self.next();
                let operand = self.negation()?;
                Ok(Expression::Call(position, "⁻".into(), vec![operand]))
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expression> {
        let mut lhs = self.postfix()?;
        loop {
            let position = self.peek_position();
            let op = match self.peek() {
                Some(Token::Operator(op @ Operator::Caret))
                | Some(Token::Operator(op @ Operator::XRoot)) => *op,
                _ => break,
            };
            self.next();
            let rhs = self.exponent()?;
            lhs = Expression::Call(position, op.to_string().into(), vec![lhs, rhs]);
        }
        Ok(lhs)
    }

    fn exponent(&mut self) -> Result<Expression> {
        match self.peek() {
            Some(Token::Operator(Operator::Negate)) | Some(Token::Operator(Operator::Minus)) => {
                let position = self.peek_position();
                self.next();
                let operand = self.exponent()?;
                Ok(Expression::Call(position, "⁻".into(), vec![operand]))
            }
            _ => self.postfix(),
        }
    }

    fn postfix(&mut self) -> Result<Expression> {
        let mut operand = self.primary()?;
        while let Some(Token::Operator(op)) = self.peek() {
            if !op.is_postfix() {
                break;
            }
            let position = self.peek_position();
            let name: Rc<str> = op.to_string().into();
            self.next();
            operand = Expression::Call(position, name, vec![operand]);
        }
        Ok(operand)
    }

    fn primary(&mut self) -> Result<Expression> {
        let position = self.peek_position();
        let token = match self.next() {
            Some(t) if !t.is_separator() => t,
            _ => return Err(error!(SyntaxError, ..position; "EXPECTED EXPRESSION")),
        };
        match token {
            Token::Number(s) => {
                let text = if s.starts_with('.') {
                    format!("0{}", s)
                } else {
                    s.clone()
                };
                match text.parse::<f64>() {
                    Ok(n) => Ok(Expression::Number(position, Complex64::new(n, 0.0))),
                    Err(_) => Err(error!(SyntaxError, ..position; format!("INVALID NUMBER {}", s))),
                }
            }
            Token::String(s) => Ok(Expression::String(position, s.as_str().into())),
            Token::Letter(c) => Ok(Expression::Var(position, Variable::Number(*c))),
            Token::List(name) => {
                let name = list_name(name, position)?;
                if self.peek() == Some(&Token::LParen) {
                    self.next();
                    let index = self.expression()?;
                    self.close(Token::RParen)?;
                    Ok(Expression::Element(position, name, Box::new(index)))
                } else {
                    Ok(Expression::Var(position, Variable::List(name)))
                }
            }
            Token::Name(name) => self.name(position, name),
            Token::LParen => {
                let expr = self.expression()?;
                self.close(Token::RParen)?;
                Ok(expr)
            }
            Token::LBrace => {
                let mut items = vec![];
                if self.peek() == Some(&Token::RBrace) {
                    self.next();
                    return Ok(Expression::List(position, items));
                }
                loop {
                    items.push(self.expression()?);
                    match self.peek() {
                        Some(Token::Comma) => {
                            self.next();
                        }
                        Some(Token::RBrace) => {
                            self.next();
                            break;
                        }
                        _ => {
                            self.close(Token::RBrace)?;
                            break;
                        }
                    }
                }
                Ok(Expression::List(position, items))
            }
            Token::Operator(op @ Operator::SquareRoot) | Token::Operator(op @ Operator::CubeRoot) => {
                let args = self.arguments()?;
                Ok(Expression::Call(position, op.to_string().into(), args))
            }
            t => Err(error!(SyntaxError, ..position; format!("UNEXPECTED {}", t.to_string().trim()))),
        }
    }

    fn name(&mut self, position: Position, name: &str) -> Result<Expression> {
        match name {
            "Ans" => return Ok(Expression::Ans(position)),
            "π" => {
                return Ok(Expression::Number(
                    position,
                    Complex64::new(std::f64::consts::PI, 0.0),
                ))
            }
            "e" => {
                return Ok(Expression::Number(
                    position,
                    Complex64::new(std::f64::consts::E, 0.0),
                ))
            }
            "i" => return Ok(Expression::Number(position, Complex64::new(0.0, 1.0))),
            _ => {}
        }
        if let Some(n) = string_variable(name) {
            return Ok(Expression::Var(position, Variable::String(n)));
        }
        if is_operator_name(name) {
            return Err(error!(SyntaxError, ..position; format!("MISSING OPERAND FOR {}", name)));
        }
        if name.starts_with(|c: char| c.is_ascii_lowercase()) {
            if self.peek() == Some(&Token::LParen) {
                self.next();
                let args = self.arguments()?;
                return Ok(Expression::Call(position, format!("{}(", name).into(), args));
            }
            return Ok(Expression::Call(position, name.into(), vec![]));
        }
        Err(error!(UnknownVariableName, ..position; name))
    }

    /// Arguments after an opening parenthesis.
    fn arguments(&mut self) -> Result<Vec<Expression>> {
        let mut v: Vec<Expression> = vec![];
        if self.peek() == Some(&Token::RParen) {
            self.next();
            return Ok(v);
        }
        loop {
            v.push(self.expression()?);
            match self.peek() {
                Some(Token::Comma) => {
                    self.next();
                }
                Some(Token::RParen) => {
                    self.next();
                    return Ok(v);
                }
                _ => {
                    self.close(Token::RParen)?;
                    return Ok(v);
                }
            }
        }
    }
}

fn is_operator_name(name: &str) -> bool {
    matches!(name, "and" | "or" | "xor" | "nPr" | "nCr")
}

fn is_command_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase())
        && name != "Ans"
        && string_variable(name).is_none()
}

fn string_variable(name: &str) -> Option<u8> {
    let digit = name.strip_prefix("Str")?;
    match digit.as_bytes() {
        [d] if d.is_ascii_digit() => Some(d - b'0'),
        _ => None,
    }
}

fn list_name(name: &str, position: Position) -> Result<Rc<str>> {
    if name.len() == 2 && name.starts_with('L') || is_list_name(name) {
        Ok(name.into())
    } else {
        Err(error!(UnknownVariableName, ..position; format!("∟{}", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn call(name: &str, args: Vec<Expression>) -> Expression {
        Expression::Call(Position::default(), name.into(), args)
    }

    fn num(n: f64) -> Expression {
        Expression::Number(Position::default(), Complex64::new(n, 0.0))
    }

    fn var(c: char) -> Expression {
        Expression::Var(Position::default(), Variable::Number(c))
    }

    /// Positions make literal trees noisy; compare with them zeroed.
    fn strip(expr: Expression) -> Expression {
        use Expression::*;
        let p = Position::default();
        match expr {
            Number(_, n) => Number(p, n),
            String(_, s) => String(p, s),
            List(_, v) => List(p, v.into_iter().map(strip).collect()),
            Var(_, v) => Var(p, v),
            Element(_, n, i) => Element(p, n, Box::new(strip(*i))),
            Ans(_) => Ans(p),
            Call(_, n, v) => Call(p, n, v.into_iter().map(strip).collect()),
        }
    }

    fn parse_expr(s: &str) -> Expression {
        match parse(s) {
            Ok(mut v) => match v.pop() {
                Some(Statement::Expression(_, e)) => strip(e),
                other => panic!("{:?}", other),
            },
            Err(e) => panic!("{} : {:?}", e, e),
        }
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            parse_expr("1+2*3"),
            call("+", vec![num(1.0), call("*", vec![num(2.0), num(3.0)])])
        );
        assert_eq!(
            parse_expr("-2²"),
            call("⁻", vec![call("²", vec![num(2.0)])])
        );
        assert_eq!(
            parse_expr("2^3^2"),
            call("^", vec![call("^", vec![num(2.0), num(3.0)]), num(2.0)])
        );
        assert_eq!(
            parse_expr("A<5 and B"),
            call("and", vec![call("<", vec![var('A'), num(5.0)]), var('B')])
        );
    }

    #[test]
    fn test_implicit_multiplication() {
        assert_eq!(
            parse_expr("2A"),
            call("*", vec![num(2.0), var('A')])
        );
        assert_eq!(
            parse_expr("3³√(54"),
            call("*", vec![call("³", vec![num(3.0)]), call("√(", vec![num(54.0)])])
        );
    }

    #[test]
    fn test_functions_and_unclosed_parens() {
        assert_eq!(
            parse_expr("round(1.25,1"),
            call("round(", vec![num(1.25), num(1.0)])
        );
        assert_eq!(parse_expr("rand"), call("rand", vec![]));
        assert_eq!(
            parse_expr("5nCr2"),
            call("nCr", vec![num(5.0), num(2.0)])
        );
    }

    #[test]
    fn test_statements() {
        let v = parse(":If A=1:Then\nDisp \"HI\",A\nEnd:Output(1,2,3:4→L1(2").unwrap();
        assert_eq!(v.len(), 6);
        assert!(matches!(v[0], Statement::If(..)));
        assert!(matches!(v[1], Statement::Then(_)));
        match &v[2] {
            Statement::Command(_, name, args) => {
                assert_eq!(&**name, "Disp");
                assert_eq!(args.len(), 2);
            }
            s => panic!("{:?}", s),
        }
        assert!(matches!(v[3], Statement::End(_)));
        match &v[4] {
            Statement::CommandFunction(_, name, args) => {
                assert_eq!(&**name, "Output(");
                assert_eq!(args.len(), 3);
            }
            s => panic!("{:?}", s),
        }
        assert!(matches!(v[5], Statement::Store(_, _, Target::Element(..))));
        assert_eq!(v[2].position(), Position::new(2, 1));
    }

    #[test]
    fn test_for_and_labels() {
        let v = parse("For(I,1,10,2):Lbl AB:Goto 1:prgmGAME").unwrap();
        assert!(matches!(v[0], Statement::For(_, 'I', _, _, Some(_))));
        assert_eq!(v[1], Statement::Lbl(Position::new(1, 15), "AB".into()));
        assert!(matches!(v[2], Statement::Goto(..)));
        assert!(matches!(v[3], Statement::Prgm(..)));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse("Lbl ABC").unwrap_err().code(), ErrorCode::SyntaxError);
        assert_eq!(parse("1+").unwrap_err().code(), ErrorCode::SyntaxError);
        assert_eq!(parse("Foo+1").unwrap_err().code(), ErrorCode::SyntaxError);
        assert_eq!(
            parse("1+Foo").unwrap_err().code(),
            ErrorCode::UnknownVariableName
        );
        assert_eq!(
            parse("∟ABCDEFG").unwrap_err().code(),
            ErrorCode::UnknownVariableName
        );
        assert_eq!(parse("1→Ans").unwrap_err().code(), ErrorCode::SyntaxError);
    }
}

use super::var::ListVariable;
use super::{CommandTable, Context, Parameter, Val, Variable};
use crate::error;
use crate::lang::{ast::Expression, Error};

type Result<T> = std::result::Result<T, Error>;

/// Evaluates an expression. Every operator and function goes through
/// the expression-function table.
pub fn evaluate(expr: &Expression, functions: &CommandTable, context: &mut Context) -> Result<Val> {
    let result = match expr {
        Expression::Number(_, n) => Ok(Val::Number(*n)),
        Expression::String(_, s) => Ok(Val::String(s.clone())),
        Expression::List(_, items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                list.push(evaluate(item, functions, context)?.as_number()?);
            }
            Ok(Val::List(list))
        }
        Expression::Var(_, var) => context.memory.read(&Variable::from_ast(var)?),
        Expression::Element(_, name, index) => {
            let var = element(name, index, functions, context)?;
            context.memory.read(&var)
        }
        Expression::Ans(_) => Ok(context.memory.ans().clone()),
        Expression::Call(_, name, args) => {
            let params = parameters(args, functions, context)?;
            match functions.dispatch(name, &params, context)? {
                Some(val) => Ok(val),
                None => Err(error!(InternalError; format!("{} RETURNED NOTHING", name))),
            }
        }
    };
    result.map_err(|e| e.at(expr.position()))
}

/// Bare variables stay unevaluated. Everything else is evaluated now.
pub fn parameters(
    args: &[Expression],
    functions: &CommandTable,
    context: &mut Context,
) -> Result<Vec<Parameter>> {
    let mut params = Vec::with_capacity(args.len());
    for arg in args {
        params.push(match arg {
            Expression::Var(pos, var) => {
                Parameter::Unevaluated(Variable::from_ast(var).map_err(|e| e.at(*pos))?)
            }
            Expression::Element(pos, name, index) => Parameter::Unevaluated(
                element(name, index, functions, context).map_err(|e| e.at(*pos))?,
            ),
            _ => Parameter::Evaluated(evaluate(arg, functions, context)?),
        });
    }
    Ok(params)
}

pub fn element(
    name: &str,
    index: &Expression,
    functions: &CommandTable,
    context: &mut Context,
) -> Result<Variable> {
    let list = ListVariable::new(name)?;
    let index = evaluate(index, functions, context)?.as_index()?;
    Ok(Variable::Element(list, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{ast::Statement, parse, ErrorCode, Position};
    use crate::mach::{HomeScreen, Memory, Modes, NoKeypad, Registry};

    fn eval(source: &str, memory: &mut Memory) -> Result<Val> {
        let registry = Registry::builtin();
        let mut modes = Modes::default();
        let mut screen = HomeScreen::new();
        let mut keypad = NoKeypad;
        let mut context = Context {
            memory,
            modes: &mut modes,
            screen: &mut screen,
            keypad: &mut keypad,
        };
        match parse(source)?.pop() {
            Some(Statement::Expression(_, expr)) => {
                evaluate(&expr, &registry.functions, &mut context)
            }
            s => panic!("{:?}", s),
        }
    }

    fn close(val: Val, expected: f64) {
        match val {
            Val::Number(n) => assert!((n.re - expected).abs() < 1e-7 && n.im == 0.0, "{}", n),
            v => panic!("{:?}", v),
        }
    }

    #[test]
    fn test_arithmetic() {
        let mut m = Memory::new();
        close(eval("1+2*3", &mut m).unwrap(), 7.0);
        close(eval("-2²", &mut m).unwrap(), -4.0);
        close(eval("2^-1", &mut m).unwrap(), 0.5);
        close(eval("(1+2)(3+4)", &mut m).unwrap(), 21.0);
        close(eval("5nCr2+5nPr2", &mut m).unwrap(), 30.0);
        close(eval("4!", &mut m).unwrap(), 24.0);
        close(eval("3ˣ√27", &mut m).unwrap(), 3.0);
        close(eval("e^(0)", &mut m).unwrap(), 1.0);
    }

    #[test]
    fn test_postfix_root_regression() {
        // Resolves as (3³)√(54); pinned, not a rule to generalize.
        let mut m = Memory::new();
        close(eval("3³√(54", &mut m).unwrap(), 27.0 * 54f64.sqrt());
    }

    #[test]
    fn test_complex() {
        let mut m = Memory::new();
        assert_eq!(eval("(1+2i)(1-2i)", &mut m).unwrap(), Val::from(5.0));
        assert_eq!(eval("√(-9)", &mut m).unwrap(), Val::complex(0.0, 3.0));
        assert_eq!(
            eval("i<1", &mut m).unwrap_err().code(),
            ErrorCode::ImaginaryComparison
        );
        close(eval("i=i", &mut m).unwrap(), 1.0);
    }

    #[test]
    fn test_lists_and_strings() {
        let mut m = Memory::new();
        assert_eq!(
            eval("{1,2,3}*2", &mut m).unwrap(),
            Val::real_list(&[2.0, 4.0, 6.0])
        );
        assert_eq!(eval("\"AB\"+\"C\"", &mut m).unwrap(), Val::from("ABC"));
        assert_eq!(
            eval("{1,2}+{1,2,3}", &mut m).unwrap_err().code(),
            ErrorCode::DimensionMismatch
        );
        assert_eq!(
            eval("\"A\"*2", &mut m).unwrap_err().code(),
            ErrorCode::TypeMismatch
        );
    }

    #[test]
    fn test_variables() {
        let mut m = Memory::new();
        m.write(
            &Variable::List(ListVariable::new("L1").unwrap()),
            Val::real_list(&[5.0, 6.0]),
        )
        .unwrap();
        close(eval("L1(2)+A", &mut m).unwrap(), 6.0);
        let e = eval("1+L1(3)", &mut m).unwrap_err();
        assert_eq!(e.code(), ErrorCode::ArgumentError);
        assert_eq!(e.position(), Some(Position::new(1, 3)));
        assert_eq!(
            eval("Str1", &mut m).unwrap_err().code(),
            ErrorCode::UndefinedVariable
        );
    }
}

use super::var::VariableType;
use super::{Command, Context, DecimalMode, NumberMode, Parameter, Val, Variable};
use crate::error;
use crate::lang::Error;
use num_complex::Complex64;

type Result<T> = std::result::Result<T, Error>;

/// ## Command statements and command functions
///
/// Commands that write variables take them as unevaluated parameters.

pub fn statements() -> Vec<(&'static str, Box<dyn Command>)> {
    vec![
        ("Disp", boxed(Disp)),
        ("ClrHome", boxed(ClrHome)),
        ("Pause", boxed(Pause)),
        ("Input", boxed(Input)),
        ("Prompt", boxed(Prompt)),
        ("ClrList", boxed(ClrList)),
        ("DelVar", boxed(DelVar)),
        ("Float", boxed(Float)),
        ("Fix", boxed(Fix)),
        ("Normal", boxed(SetNumber(NumberMode::Normal))),
        ("Sci", boxed(SetNumber(NumberMode::Sci))),
        ("Eng", boxed(SetNumber(NumberMode::Eng))),
    ]
}

pub fn command_functions() -> Vec<(&'static str, Box<dyn Command>)> {
    vec![
        ("Output(", boxed(Output)),
        ("SortA(", boxed(Sort { descending: false })),
        ("SortD(", boxed(Sort { descending: true })),
        ("Fill(", boxed(Fill)),
    ]
}

fn boxed<C: Command + 'static>(command: C) -> Box<dyn Command> {
    Box::new(command)
}

struct Disp;

impl Command for Disp {
    fn check_arity(&self, _count: usize) -> bool {
        true
    }

    fn execute(&self, args: &[Parameter], context: &mut Context) -> Result<Option<Val>> {
        for val in context.values(args)? {
            context.display(&val)?;
        }
        Ok(None)
    }
}

struct ClrHome;

impl Command for ClrHome {
    fn check_arity(&self, count: usize) -> bool {
        count == 0
    }

    fn execute(&self, _args: &[Parameter], context: &mut Context) -> Result<Option<Val>> {
        context.screen.clear()?;
        Ok(None)
    }
}

struct Pause;

impl Command for Pause {
    fn check_arity(&self, count: usize) -> bool {
        count <= 1
    }

    fn execute(&self, args: &[Parameter], context: &mut Context) -> Result<Option<Val>> {
        if let Some(val) = context.values(args)?.first() {
            context.display(val)?;
        }
        context.keypad.pause()?;
        Ok(None)
    }
}

/// Reads one line from the keypad into a variable.
fn read_into(context: &mut Context, prompt: &str, var: &Variable) -> Result<()> {
    let line = context.keypad.read_line(prompt)?;
    let val = match var.variable_type() {
        VariableType::String => Val::String(line.as_str().into()),
        _ => match line.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Val::from(n),
            _ => return Err(error!(TypeMismatch; format!("INVALID INPUT {}", line.trim()))),
        },
    };
    context.memory.write(var, val)
}

fn is_writable(var: &Variable) -> bool {
    var.variable_type() != VariableType::List
}

/// `Input V` or `Input "PROMPT",V`.
struct Input;

impl Command for Input {
    fn check_arity(&self, count: usize) -> bool {
        (1..=2).contains(&count)
    }

    fn check_argument_values(&self, args: &[Parameter], context: &Context) -> Result<bool> {
        let target = match args.last() {
            Some(p) => p.variable()?,
            None => return Ok(false),
        };
        if args.len() == 2 {
            args[0].value(&*context.memory)?.as_string()?;
        }
        Ok(is_writable(target))
    }

    fn execute(&self, args: &[Parameter], context: &mut Context) -> Result<Option<Val>> {
        let prompt = match args.len() {
            2 => args[0].value(&*context.memory)?.as_string()?.to_string(),
            _ => String::from("?"),
        };
        read_into(context, &prompt, args[args.len() - 1].variable()?)?;
        Ok(None)
    }
}

/// `Prompt A,B` asks for each variable by name.
struct Prompt;

impl Command for Prompt {
    fn check_arity(&self, count: usize) -> bool {
        count >= 1
    }

    fn check_argument_values(&self, args: &[Parameter], _context: &Context) -> Result<bool> {
        for p in args {
            if !is_writable(p.variable()?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn execute(&self, args: &[Parameter], context: &mut Context) -> Result<Option<Val>> {
        for p in args {
            let var = p.variable()?;
            read_into(context, &format!("{}=?", var.name()), var)?;
        }
        Ok(None)
    }
}

/// Empties each list, creating it if needed.
struct ClrList;

impl Command for ClrList {
    fn check_arity(&self, count: usize) -> bool {
        count >= 1
    }

    fn check_argument_values(&self, args: &[Parameter], _context: &Context) -> Result<bool> {
        for p in args {
            if p.variable()?.variable_type() != VariableType::List {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn execute(&self, args: &[Parameter], context: &mut Context) -> Result<Option<Val>> {
        for p in args {
            context.memory.write(p.variable()?, Val::List(vec![]))?;
        }
        Ok(None)
    }
}

struct DelVar;

impl Command for DelVar {
    fn check_arity(&self, count: usize) -> bool {
        count == 1
    }

    fn check_argument_values(&self, args: &[Parameter], _context: &Context) -> Result<bool> {
        Ok(!matches!(args[0].variable()?, Variable::Element(..)))
    }

    fn execute(&self, args: &[Parameter], context: &mut Context) -> Result<Option<Val>> {
        context.memory.delete(args[0].variable()?)?;
        Ok(None)
    }
}

struct Float;

impl Command for Float {
    fn check_arity(&self, count: usize) -> bool {
        count == 0
    }

    fn execute(&self, _args: &[Parameter], context: &mut Context) -> Result<Option<Val>> {
        context.modes.decimal = DecimalMode::Float;
        Ok(None)
    }
}

/// `Fix n` for n from 0 to 9.
struct Fix;

impl Command for Fix {
    fn check_arity(&self, count: usize) -> bool {
        count == 1
    }

    fn check_argument_values(&self, args: &[Parameter], context: &Context) -> Result<bool> {
        Ok((0..=9).contains(&args[0].value(&*context.memory)?.as_integer()?))
    }

    fn execute(&self, args: &[Parameter], context: &mut Context) -> Result<Option<Val>> {
        let places = args[0].value(&*context.memory)?.as_integer()?;
        context.modes.decimal = DecimalMode::Fix(places as u8);
        Ok(None)
    }
}

struct SetNumber(NumberMode);

impl Command for SetNumber {
    fn check_arity(&self, count: usize) -> bool {
        count == 0
    }

    fn execute(&self, _args: &[Parameter], context: &mut Context) -> Result<Option<Val>> {
        context.modes.number = self.0;
        Ok(None)
    }
}

/// `Output(row,column,value)`
struct Output;

impl Command for Output {
    fn check_arity(&self, count: usize) -> bool {
        count == 3
    }

    fn check_argument_values(&self, args: &[Parameter], context: &Context) -> Result<bool> {
        let row = args[0].value(&*context.memory)?.as_integer()?;
        let column = args[1].value(&*context.memory)?.as_integer()?;
        let rows = context.screen.max_rows() as i64;
        let columns = context.screen.max_columns() as i64;
        if !(1..=rows).contains(&row) || !(1..=columns).contains(&column) {
            return Err(error!(OutOfScreenBounds; format!("{},{}", row, column)));
        }
        Ok(true)
    }

    fn execute(&self, args: &[Parameter], context: &mut Context) -> Result<Option<Val>> {
        let values = context.values(args)?;
        let row = values[0].as_integer()? as usize;
        let column = values[1].as_integer()? as usize;
        let text = context.modes.format(&values[2])?;
        context.screen.print_at(&text, column, row)?;
        Ok(None)
    }
}

struct Sort {
    descending: bool,
}

impl Command for Sort {
    fn check_arity(&self, count: usize) -> bool {
        count == 1
    }

    fn check_argument_values(&self, args: &[Parameter], _context: &Context) -> Result<bool> {
        Ok(args[0].variable()?.variable_type() == VariableType::List)
    }

    fn execute(&self, args: &[Parameter], context: &mut Context) -> Result<Option<Val>> {
        let var = args[0].variable()?;
        let mut keys = context
            .memory
            .read(var)?
            .as_list()?
            .iter()
            .map(|n| match n.im {
                im if im == 0.0 => Ok(n.re),
                _ => Err(error!(ImaginaryComparison)),
            })
            .collect::<Result<Vec<f64>>>()?;
        keys.sort_by(|a, b| a.total_cmp(b));
        if self.descending {
            keys.reverse();
        }
        let sorted = keys.into_iter().map(|n| Complex64::new(n, 0.0)).collect();
        context.memory.write(var, Val::List(sorted))?;
        Ok(None)
    }
}

/// `Fill(value,list)`
struct Fill;

impl Command for Fill {
    fn check_arity(&self, count: usize) -> bool {
        count == 2
    }

    fn check_argument_values(&self, args: &[Parameter], context: &Context) -> Result<bool> {
        args[0].value(&*context.memory)?.as_number()?;
        Ok(args[1].variable()?.variable_type() == VariableType::List)
    }

    fn execute(&self, args: &[Parameter], context: &mut Context) -> Result<Option<Val>> {
        let n = args[0].value(&*context.memory)?.as_number()?;
        let var = args[1].variable()?;
        let len = context.memory.read(var)?.as_list()?.len();
        context.memory.write(var, Val::List(vec![n; len]))?;
        Ok(None)
    }
}

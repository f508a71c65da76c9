use super::eval::{self, evaluate};
use super::frame::FrameKind;
use super::val::real;
use super::var::NumberVariable;
use super::{Context, ExecutableProgram, Frame, ProgramTable, Registry, Stack, Val, Variable};
use super::FRAME_STACK_LIMIT;
use crate::error;
use crate::lang::ast::{self, Statement, Target};
use crate::lang::Error;
use num_complex::Complex64;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// One running program on the call stack.
#[derive(Debug)]
pub struct Activation {
    program: Rc<ExecutableProgram>,
    cursor: usize,
    frames: Stack<Frame>,
}

impl Activation {
    pub fn new(program: Rc<ExecutableProgram>) -> Activation {
        Activation {
            program,
            cursor: 0,
            frames: Stack::new("BLOCKS NESTED TOO DEEP", FRAME_STACK_LIMIT),
        }
    }
}

enum Flow {
    Next,
    Jump(usize),
    Call(Rc<ExecutableProgram>),
    Return,
    Stop,
}

/// ## Control-flow engine
///
/// Walks the statements of the program on top of the call stack with a
/// cursor and a stack of open blocks. Block-If versus single-line If is
/// decided by looking for `Then` right after the `If`.

pub struct Engine<'a> {
    pub registry: &'a Registry,
    pub context: Context<'a>,
    pub programs: &'a mut ProgramTable,
    pub calls: &'a mut Stack<Activation>,
    pub interrupt: &'a AtomicBool,
    /// Rejects every control-flow keyword before running.
    pub interactive: bool,
}

impl<'a> Engine<'a> {
    pub fn run(&mut self, program: Rc<ExecutableProgram>) -> Result<()> {
        if self.interactive {
            if let Some(statement) = program.statements().iter().find(|s| s.is_control_flow()) {
                return Err(error!(IllegalControlFlow, ..statement.position(); statement.keyword())
                    .in_program(program.name()));
            }
        }
        let base = self.calls.len();
        self.calls.push(Activation::new(program))?;
        let result = self.run_from(base);
        if result.is_err() {
            self.calls.truncate(base);
        }
        result
    }

    fn run_from(&mut self, base: usize) -> Result<()> {
        while self.calls.len() > base {
            let (program, index) = match self.calls.last() {
                Some(activation) => (activation.program.clone(), activation.cursor),
                None => break,
            };
            let statement = match program.statement(index) {
                Some(statement) => statement,
                None => {
                    debug!(program = &**program.name(), "end of program");
                    self.calls.pop()?;
                    continue;
                }
            };
            if self.interrupt.swap(false, Ordering::Relaxed) {
                return Err(error!(Break, ..statement.position()).in_program(program.name()));
            }
            debug!(program = &**program.name(), index, keyword = statement.keyword(), "step");
            let flow = self
                .step(&program, index, statement)
                .map_err(|e| e.at(statement.position()).in_program(program.name()))?;
            match flow {
                Flow::Next => self.activation()?.cursor = index + 1,
                Flow::Jump(to) => self.activation()?.cursor = to,
                Flow::Call(callee) => {
                    self.activation()?.cursor = index + 1;
                    debug!(program = &**callee.name(), "call");
                    self.calls
                        .push(Activation::new(callee))
                        .map_err(|e| e.at(statement.position()).in_program(program.name()))?;
                }
                Flow::Return => {
                    self.calls.pop()?;
                }
                Flow::Stop => self.calls.truncate(base),
            }
        }
        Ok(())
    }

    fn activation(&mut self) -> Result<&mut Activation> {
        match self.calls.last_mut() {
            Some(activation) => Ok(activation),
            None => Err(error!(InternalError; "NO PROGRAM")),
        }
    }

    fn frames(&mut self) -> Result<&mut Stack<Frame>> {
        Ok(&mut self.activation()?.frames)
    }

    fn push_frame(&mut self, frame: Frame) -> Result<()> {
        debug!(kind = ?frame.kind, opening = frame.opening, "push frame");
        self.frames()?.push(frame)
    }

    fn pop_frame(&mut self) -> Result<Frame> {
        let frame = self.frames()?.pop()?;
        debug!(kind = ?frame.kind, opening = frame.opening, "pop frame");
        Ok(frame)
    }

    fn evaluate(&mut self, expr: &ast::Expression) -> Result<Val> {
        evaluate(expr, &self.registry.functions, &mut self.context)
    }

    fn condition(&mut self, expr: &ast::Expression) -> Result<bool> {
        self.evaluate(expr)?.is_true()
    }

    fn real(&mut self, expr: &ast::Expression) -> Result<f64> {
        self.evaluate(expr)?.as_real()
    }

    fn step(
        &mut self,
        program: &ExecutableProgram,
        index: usize,
        statement: &Statement,
    ) -> Result<Flow> {
        use Statement::*;
        match statement {
            Expression(_, expr) => {
                let val = self.evaluate(expr)?;
                self.context.memory.set_ans(val);
                Ok(Flow::Next)
            }
            Store(_, expr, target) => {
                let val = self.evaluate(expr)?;
                let var = match target {
                    Target::Var(var) => Variable::from_ast(var)?,
                    Target::Element(name, index) => eval::element(
                        name,
                        index,
                        &self.registry.functions,
                        &mut self.context,
                    )?,
                };
                self.context.memory.write(&var, val.clone())?;
                self.context.memory.set_ans(val);
                Ok(Flow::Next)
            }
            If(pos, expr) => {
                let truth = self.condition(expr)?;
                if !matches!(program.statement(index + 1), Some(Then(_))) {
                    return Ok(if truth {
                        Flow::Next
                    } else {
                        Flow::Jump(index + 2)
                    });
                }
                let block = program.block(index);
                if truth {
                    let mut frame = Frame::new(FrameKind::If, *pos, index, block);
                    frame.resume = index + 2;
                    self.push_frame(frame)?;
                    return Ok(Flow::Jump(index + 2));
                }
                match block {
                    Some(block) => match block.else_index {
                        Some(else_index) => {
                            let position = program
                                .statement(else_index)
                                .map(|s| s.position())
                                .unwrap_or(*pos);
                            let mut frame =
                                Frame::new(FrameKind::Else, position, else_index, Some(block));
                            frame.last_condition = false;
                            self.push_frame(frame)?;
                            Ok(Flow::Jump(else_index + 1))
                        }
                        None => Ok(Flow::Jump(block.end + 1)),
                    },
                    None => Err(missing_end()),
                }
            }
            Then(_) => Err(illegal(statement)),
            Else(_) => {
                if !matches!(self.frames()?.last(), Some(f) if f.kind == FrameKind::If) {
                    return Err(illegal(statement));
                }
                let frame = self.pop_frame()?;
                match frame.block {
                    Some(block) => Ok(Flow::Jump(block.end + 1)),
                    None => Err(missing_end()),
                }
            }
            End(_) => self.end(program, statement),
            While(pos, expr) => {
                let truth = self.condition(expr)?;
                let block = program.block(index);
                if truth {
                    self.push_frame(Frame::new(FrameKind::While, *pos, index, block))?;
                    return Ok(Flow::Next);
                }
                match block {
                    Some(block) => Ok(Flow::Jump(block.end + 1)),
                    None => Err(missing_end()),
                }
            }
            Repeat(pos, _) => {
                let block = program.block(index);
                self.push_frame(Frame::new(FrameKind::Repeat, *pos, index, block))?;
                Ok(Flow::Next)
            }
            For(pos, letter, start, end, step) => {
                let var = NumberVariable::new(*letter)?;
                let start = self.real(start)?;
                let end = self.real(end)?;
                let step = match step {
                    Some(step) => self.real(step)?,
                    None => 1.0,
                };
                if step == 0.0 {
                    return Err(error!(ArgumentError; "STEP CANNOT BE 0"));
                }
                self.context
                    .memory
                    .set_number(var, Complex64::new(start, 0.0));
                let block = program.block(index);
                if in_range(start, end, step) {
                    let kind = FrameKind::For { var, end, step };
                    self.push_frame(Frame::new(kind, *pos, index, block))?;
                    return Ok(Flow::Next);
                }
                match block {
                    Some(block) => Ok(Flow::Jump(block.end + 1)),
                    None => Err(missing_end()),
                }
            }
            Lbl(..) => Ok(Flow::Next),
            Goto(_, label) => {
                let target = match program.label(label) {
                    Some(target) => target,
                    None => return Err(error!(LabelNotFound; &**label)),
                };
                loop {
                    let stays = match self.frames()?.last() {
                        Some(frame) => frame.contains(target),
                        None => true,
                    };
                    if stays {
                        break;
                    }
                    self.pop_frame()?;
                }
                Ok(Flow::Jump(target))
            }
            IsGreater(_, letter, limit) => {
                let var = NumberVariable::new(*letter)?;
                let n = real(self.context.memory.number(var))? + 1.0;
                self.context.memory.set_number(var, Complex64::new(n, 0.0));
                let limit = self.real(limit)?;
                Ok(if n > limit {
                    Flow::Jump(index + 2)
                } else {
                    Flow::Next
                })
            }
            DsLess(_, letter, limit) => {
                let var = NumberVariable::new(*letter)?;
                let n = real(self.context.memory.number(var))? - 1.0;
                self.context.memory.set_number(var, Complex64::new(n, 0.0));
                let limit = self.real(limit)?;
                Ok(if n < limit {
                    Flow::Jump(index + 2)
                } else {
                    Flow::Next
                })
            }
            Command(_, name, args) => {
                let params = eval::parameters(args, &self.registry.functions, &mut self.context)?;
                self.registry
                    .statements
                    .dispatch(name, &params, &mut self.context)?;
                Ok(Flow::Next)
            }
            CommandFunction(_, name, args) => {
                let params = eval::parameters(args, &self.registry.functions, &mut self.context)?;
                if let Some(val) =
                    self.registry
                        .command_functions
                        .dispatch(name, &params, &mut self.context)?
                {
                    self.context.memory.set_ans(val);
                }
                Ok(Flow::Next)
            }
            Prgm(_, name) => Ok(Flow::Call(self.programs.resolve(name)?)),
            Return(_) => Ok(Flow::Return),
            Stop(_) => Ok(Flow::Stop),
        }
    }

    fn end(&mut self, program: &ExecutableProgram, statement: &Statement) -> Result<Flow> {
        let (kind, opening, resume) = match self.frames()?.last() {
            Some(frame) => (frame.kind, frame.opening, frame.resume),
            None => return Err(illegal(statement)),
        };
        match kind {
            FrameKind::If | FrameKind::Else => {
                self.pop_frame()?;
                Ok(Flow::Next)
            }
            FrameKind::For { var, end, step } => {
                let n = real(self.context.memory.number(var))? + step;
                self.context.memory.set_number(var, Complex64::new(n, 0.0));
                self.repeat_if(in_range(n, end, step), resume)
            }
            FrameKind::While => {
                let truth = match program.statement(opening) {
                    Some(Statement::While(_, expr)) => self.condition(expr)?,
                    _ => return Err(error!(InternalError; "WHILE FRAME")),
                };
                self.repeat_if(truth, resume)
            }
            FrameKind::Repeat => {
                let truth = match program.statement(opening) {
                    Some(Statement::Repeat(_, expr)) => self.condition(expr)?,
                    _ => return Err(error!(InternalError; "REPEAT FRAME")),
                };
                self.repeat_if(!truth, resume)
            }
        }
    }

    fn repeat_if(&mut self, again: bool, resume: usize) -> Result<Flow> {
        if let Some(frame) = self.frames()?.last_mut() {
            frame.last_condition = again;
        }
        if again {
            Ok(Flow::Jump(resume))
        } else {
            self.pop_frame()?;
            Ok(Flow::Next)
        }
    }
}

fn in_range(n: f64, end: f64, step: f64) -> bool {
    if step > 0.0 {
        n <= end
    } else {
        n >= end
    }
}

fn illegal(statement: &Statement) -> Error {
    error!(IllegalControlFlow; statement.keyword())
}

fn missing_end() -> Error {
    error!(IllegalControlFlow; "MISSING End")
}

#[cfg(test)]
mod tests {
    use crate::lang::ErrorCode;
    use crate::mach::{Runtime, Val};

    fn run(source: &str) -> Runtime {
        let mut runtime = Runtime::new();
        runtime.load_program("T", source).unwrap();
        runtime.execute_program("T").unwrap();
        runtime
    }

    #[test]
    fn test_goto_out_of_loop_drops_frames() {
        let mut runtime = run("0→A:While 1:A+1→A:If A=3:Goto Q:End:Lbl Q:A");
        assert_eq!(runtime.memory().ans(), &Val::from(3.0));
        runtime.load_program("U", "End").unwrap();
        let e = runtime.execute_program("U").unwrap_err();
        assert_eq!(e.code(), ErrorCode::IllegalControlFlow);
    }

    #[test]
    fn test_false_loops_skip_body() {
        let runtime = run("7:While 0:1:End:For(I,5,1:2:End:Repeat 1:Ans+1:End");
        assert_eq!(runtime.memory().ans(), &Val::from(8.0));
    }

    #[test]
    fn test_missing_end() {
        let mut runtime = Runtime::new();
        runtime.load_program("T", "While 0:1").unwrap();
        let e = runtime.execute_program("T").unwrap_err();
        assert_eq!(e.code(), ErrorCode::IllegalControlFlow);
        assert_eq!(e.program(), Some("T"));
    }
}

use super::exec::{Activation, Engine};
use super::{
    preprocess, CodeProvider, Command, Context, DecimalMode, HomeScreen, Keypad, Memory, Modes,
    NoKeypad, NoPrograms, NumberMode, ProgramTable, Registry, Screen, Stack, Val,
};
use super::CALL_STACK_LIMIT;
use crate::lang::Error;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

type Result<T> = std::result::Result<T, Error>;

/// Name of the throwaway program built for each `interpret` call.
pub const HOME: &str = "HOME";

/// ## Execution environment
///
/// Owns memory, display modes, the command registries, and the program
/// table. Independent runtimes share nothing.

pub struct Runtime {
    registry: Registry,
    memory: Memory,
    modes: Modes,
    screen: Box<dyn Screen>,
    keypad: Box<dyn Keypad>,
    programs: ProgramTable,
    calls: Stack<Activation>,
    interrupt: Arc<AtomicBool>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            registry: Registry::builtin(),
            memory: Memory::new(),
            modes: Modes::default(),
            screen: Box::new(HomeScreen::new()),
            keypad: Box::new(NoKeypad),
            programs: ProgramTable::new(Box::new(NoPrograms)),
            calls: Stack::new("PROGRAMS NESTED TOO DEEP", CALL_STACK_LIMIT),
            interrupt: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn with_screen(mut self, screen: Box<dyn Screen>) -> Runtime {
        self.screen = screen;
        self
    }

    pub fn with_keypad(mut self, keypad: Box<dyn Keypad>) -> Runtime {
        self.keypad = keypad;
        self
    }

    pub fn with_code_provider(mut self, provider: Box<dyn CodeProvider>) -> Runtime {
        self.programs.set_provider(provider);
        self
    }

    /// Runs one line typed at the home screen. Control-flow keywords
    /// are rejected before anything executes.
    pub fn interpret(&mut self, text: &str) -> Result<Val> {
        let source = if text.starts_with(':') {
            text.to_string()
        } else {
            format!(":{}", text)
        };
        let program = Rc::new(preprocess(HOME, &source)?);
        self.engine(true).run(program)?;
        Ok(self.memory.ans().clone())
    }

    pub fn load_program(&mut self, name: &str, source: &str) -> Result<()> {
        self.programs.load(name, source).map(|_| ())
    }

    /// Runs a program, fetching it from the code provider if it is not
    /// resident. Returns the final `Ans`.
    pub fn execute_program(&mut self, name: &str) -> Result<Val> {
        let program = self.programs.resolve(name)?;
        info!(program = name, "executing program");
        self.engine(false).run(program)?;
        Ok(self.memory.ans().clone())
    }

    fn engine(&mut self, interactive: bool) -> Engine<'_> {
        self.interrupt.store(false, Ordering::Relaxed);
        Engine {
            registry: &self.registry,
            context: Context {
                memory: &mut self.memory,
                modes: &mut self.modes,
                screen: &mut *self.screen,
                keypad: &mut *self.keypad,
            },
            programs: &mut self.programs,
            calls: &mut self.calls,
            interrupt: &self.interrupt,
            interactive,
        }
    }

    pub fn register_expression_function(
        &mut self,
        name: &str,
        command: Box<dyn Command>,
    ) -> Result<()> {
        self.registry.functions.register(name, command)
    }

    pub fn register_command_statement(
        &mut self,
        name: &str,
        command: Box<dyn Command>,
    ) -> Result<()> {
        self.registry.statements.register(name, command)
    }

    pub fn register_command_function(
        &mut self,
        name: &str,
        command: Box<dyn Command>,
    ) -> Result<()> {
        self.registry.command_functions.register(name, command)
    }

    pub fn program_names(&self) -> Vec<Rc<str>> {
        self.programs.names()
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn modes(&self) -> Modes {
        self.modes
    }

    pub fn set_decimal_mode(&mut self, mode: DecimalMode) {
        self.modes.decimal = mode;
    }

    pub fn set_number_mode(&mut self, mode: NumberMode) {
        self.modes.number = mode;
    }

    /// Formats a value for the current display modes.
    pub fn format(&self, val: &Val) -> Result<String> {
        self.modes.format(val)
    }

    /// Raising this flag aborts the running program with `Break`.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupt.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_interpret_sets_ans() {
        let mut r = Runtime::new();
        assert_eq!(r.interpret("2+3").unwrap(), Val::from(5.0));
        assert_eq!(r.interpret("Ans*2").unwrap(), Val::from(10.0));
        assert_eq!(r.interpret(":4→A:A²").unwrap(), Val::from(16.0));
        assert!(r.program_names().is_empty());
    }

    #[test]
    fn test_interrupt() {
        let mut r = Runtime::new();
        let handle = r.interrupt_handle();
        // Cleared on entry, so a stale flag does not abort the next run.
        handle.store(true, Ordering::Relaxed);
        r.load_program("ONE", "1").unwrap();
        assert_eq!(r.execute_program("ONE").unwrap(), Val::from(1.0));
    }

    #[test]
    fn test_modes() {
        let mut r = Runtime::new();
        r.set_decimal_mode(DecimalMode::Fix(2));
        assert_eq!(r.format(&Val::from(1.5)).unwrap(), "1.50");
        r.interpret("Float").unwrap();
        assert_eq!(r.modes().decimal, DecimalMode::Float);
        r.set_number_mode(NumberMode::Sci);
        assert_eq!(
            r.format(&Val::from(1.5)).unwrap_err().code(),
            ErrorCode::UnsupportedDisplayMode
        );
    }
}

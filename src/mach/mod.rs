/*!
## Rust Machine Module

This Rust module holds the values, memory, command library and
control-flow engine that run TI-Basic programs.

*/

/// Most elements a list may hold.
pub const LIST_CAPACITY: usize = 999;
pub const SCREEN_COLUMNS: usize = 16;
pub const SCREEN_ROWS: usize = 8;
/// Deepest chain of `prgm` calls.
pub const CALL_STACK_LIMIT: usize = 64;
/// Most blocks open at once within one program.
pub const FRAME_STACK_LIMIT: usize = 128;

mod command;
mod eval;
mod exec;
mod frame;
mod function;
mod io;
mod memory;
mod mode;
mod operation;
mod preprocess;
mod program;
mod provider;
mod runtime;
mod stack;
mod statement;
mod table;
mod val;
mod var;

pub use command::{Command, Context, Parameter};
pub use eval::evaluate;
pub use frame::{Frame, FrameKind};
pub use function::Function;
pub use io::{HomeScreen, Keypad, NoKeypad, Screen};
pub use memory::Memory;
pub use mode::{DecimalMode, Modes, NumberMode};
pub use operation::Operation;
pub use preprocess::preprocess;
pub use program::{Block, ExecutableProgram, ProgramTable};
pub use provider::{CodeProvider, DirectoryProvider, NoPrograms};
pub use runtime::Runtime;
pub use stack::Stack;
pub use table::{CommandTable, Namespace, Registry};
pub use val::{Val, ValType};
pub use var::{ListVariable, NumberVariable, StringVariable, Variable, VariableType};

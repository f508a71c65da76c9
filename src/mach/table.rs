use super::{Command, Context, Parameter, Val};
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// Usable inside expressions, always returns a value.
    ExpressionFunction,
    /// Upper-case name, never returns a value.
    CommandStatement,
    /// Upper-case name ending in `(`, may return a value.
    CommandFunction,
}

impl Namespace {
    pub fn accepts(&self, name: &str) -> bool {
        let upper = name.starts_with(|c: char| c.is_ascii_uppercase());
        match self {
            Namespace::ExpressionFunction => !name.is_empty() && !upper,
            Namespace::CommandStatement => upper && !name.ends_with('('),
            Namespace::CommandFunction => upper && name.ends_with('(') && name.len() > 1,
        }
    }
}

/// ## Command registry
///
/// Commands are moved in on registration so an instance belongs to
/// exactly one table.

pub struct CommandTable {
    namespace: Namespace,
    commands: HashMap<Rc<str>, Box<dyn Command>>,
}

impl CommandTable {
    pub fn new(namespace: Namespace) -> CommandTable {
        CommandTable {
            namespace,
            commands: HashMap::new(),
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn register(&mut self, name: &str, command: Box<dyn Command>) -> Result<()> {
        if !self.namespace.accepts(name) {
            return Err(error!(ArgumentError; format!("INVALID NAME {}", name)));
        }
        if self.commands.contains_key(name) {
            return Err(error!(DuplicateCommand; name));
        }
        self.commands.insert(name.into(), command);
        Ok(())
    }

    /// Built-in names are known to be valid and distinct.
    fn insert(&mut self, name: &str, command: Box<dyn Command>) {
        debug_assert!(self.namespace.accepts(name), "{}", name);
        debug_assert!(!self.contains(name), "{}", name);
        self.commands.insert(name.into(), command);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&dyn Command> {
        match self.commands.get(name) {
            Some(command) => Ok(command.as_ref()),
            None => Err(error!(CommandNotFound; name)),
        }
    }

    pub fn dispatch(
        &self,
        name: &str,
        args: &[Parameter],
        context: &mut Context,
    ) -> Result<Option<Val>> {
        let command = self.get(name)?;
        if !command.check_arity(args.len()) {
            return Err(error!(ArgumentError; format!("{} TAKES A DIFFERENT NUMBER OF ARGUMENTS", name)));
        }
        if !command.check_argument_values(args, context)? {
            return Err(error!(ArgumentError; format!("INVALID ARGUMENT FOR {}", name)));
        }
        let result = command.execute(args, context)?;
        match self.namespace {
            Namespace::ExpressionFunction if result.is_none() => {
                Err(error!(InternalError; format!("{} RETURNED NOTHING", name)))
            }
            Namespace::CommandStatement => Ok(None),
            _ => Ok(result),
        }
    }
}

/// The three command namespaces.
pub struct Registry {
    pub functions: CommandTable,
    pub statements: CommandTable,
    pub command_functions: CommandTable,
}

impl Default for Registry {
    fn default() -> Self {
        Registry {
            functions: CommandTable::new(Namespace::ExpressionFunction),
            statements: CommandTable::new(Namespace::CommandStatement),
            command_functions: CommandTable::new(Namespace::CommandFunction),
        }
    }
}

impl Registry {
    /// A registry holding every built-in command.
    pub fn builtin() -> Registry {
        let mut registry = Registry::default();
        for (name, command) in super::function::functions() {
            registry.functions.insert(name, command);
        }
        for (name, command) in super::statement::statements() {
            registry.statements.insert(name, command);
        }
        for (name, command) in super::statement::command_functions() {
            registry.command_functions.insert(name, command);
        }
        registry
    }
}

use super::{preprocess, CodeProvider};
use crate::error;
use crate::lang::{ast::Statement, is_program_name, Error};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::info;

type Result<T> = std::result::Result<T, Error>;

/// Extent of an If/While/Repeat/For block: its `Else` (If only) and
/// its matching `End`, as statement indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub else_index: Option<usize>,
    pub end: usize,
}

/// ## Executable program
///
/// Immutable once preprocessed. Re-running a program reuses it.

#[derive(Debug)]
pub struct ExecutableProgram {
    name: Rc<str>,
    source: Rc<str>,
    statements: Vec<Statement>,
    labels: HashMap<Rc<str>, usize>,
    blocks: HashMap<usize, Block>,
}

impl ExecutableProgram {
    pub fn new(
        name: Rc<str>,
        source: Rc<str>,
        statements: Vec<Statement>,
        labels: HashMap<Rc<str>, usize>,
        blocks: HashMap<usize, Block>,
    ) -> ExecutableProgram {
        ExecutableProgram {
            name,
            source,
            statements,
            labels,
            blocks,
        }
    }

    pub fn name(&self) -> &Rc<str> {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn statement(&self, index: usize) -> Option<&Statement> {
        self.statements.get(index)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn label(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }

    /// Bounds of the block opened at `index`.
    pub fn block(&self, index: usize) -> Option<Block> {
        self.blocks.get(&index).copied()
    }
}

/// ## Program table
///
/// Resident programs by name, filled from the code provider on first
/// reference. Provided source that fails to preprocess is remembered
/// by its error so the provider is not asked again.

pub struct ProgramTable {
    programs: HashMap<Rc<str>, Rc<ExecutableProgram>>,
    rejected: HashMap<Rc<str>, Error>,
    provider: Box<dyn CodeProvider>,
}

impl ProgramTable {
    pub fn new(provider: Box<dyn CodeProvider>) -> ProgramTable {
        ProgramTable {
            programs: HashMap::new(),
            rejected: HashMap::new(),
            provider,
        }
    }

    pub fn set_provider(&mut self, provider: Box<dyn CodeProvider>) {
        self.provider = provider;
    }

    pub fn contains(&self, name: &str) -> bool {
        self.programs.contains_key(name)
    }

    pub fn names(&self) -> Vec<Rc<str>> {
        let mut names: Vec<Rc<str>> = self.programs.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn load(&mut self, name: &str, source: &str) -> Result<Rc<ExecutableProgram>> {
        if !is_program_name(name) {
            return Err(error!(ArgumentError; format!("INVALID PROGRAM NAME {}", name)));
        }
        if self.programs.contains_key(name) {
            return Err(error!(DuplicateProgram; name));
        }
        let program = Rc::new(preprocess(name, source)?);
        self.rejected.remove(name);
        info!(program = name, statements = program.len(), "loaded program");
        self.programs.insert(program.name().clone(), program.clone());
        Ok(program)
    }

    pub fn resolve(&mut self, name: &str) -> Result<Rc<ExecutableProgram>> {
        if !is_program_name(name) {
            return Err(error!(ArgumentError; format!("INVALID PROGRAM NAME {}", name)));
        }
        if let Some(program) = self.programs.get(name) {
            return Ok(program.clone());
        }
        if let Some(error) = self.rejected.get(name) {
            return Err(error.clone());
        }
        let source = self.provider.source(name)?;
        self.load(name, &source).map_err(|error| {
            self.rejected.insert(name.into(), error.clone());
            error
        })
    }
}

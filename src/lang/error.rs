use super::Position;
use std::rc::Rc;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    position: Option<Position>,
    program: Option<Rc<str>>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$pos:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at($pos)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$pos:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at($pos)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            position: None,
            program: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn program(&self) -> Option<&str> {
        self.program.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    /// Attach a source position unless one is already known.
    /// The innermost position is the most precise so it always wins.
    pub fn at(mut self, position: Position) -> Error {
        if self.position.is_none() {
            self.position = Some(position);
        }
        self
    }

    pub fn in_program(mut self, program: &Rc<str>) -> Error {
        if self.program.is_none() {
            self.program = Some(program.clone());
        }
        self
    }

    pub fn message<S: Into<String>>(mut self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        self.message = message.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    TypeMismatch,
    ArgumentError,
    DomainError,
    DivisionByZero,
    DimensionMismatch,
    ImaginaryComparison,
    UndefinedVariable,
    UnknownVariableName,
    IllegalControlFlow,
    LabelNotFound,
    DuplicateCommand,
    CommandNotFound,
    DuplicateProgram,
    ProgramNotFound,
    PreprocessError,
    UnsupportedDisplayMode,
    OutOfScreenBounds,
    OutOfMemory,
    Break,
    IoError,
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            SyntaxError => "SYNTAX",
            TypeMismatch => "DATA TYPE",
            ArgumentError => "ARGUMENT",
            DomainError => "DOMAIN",
            DivisionByZero => "DIVIDE BY 0",
            DimensionMismatch => "DIM MISMATCH",
            ImaginaryComparison => "NONREAL COMPARISON",
            UndefinedVariable => "UNDEFINED",
            UnknownVariableName => "UNKNOWN VARIABLE",
            IllegalControlFlow => "INVALID",
            LabelNotFound => "LABEL",
            DuplicateCommand => "DUPLICATE COMMAND",
            CommandNotFound => "UNKNOWN COMMAND",
            DuplicateProgram => "DUPLICATE NAME",
            ProgramNotFound => "UNDEFINED PROGRAM",
            PreprocessError => "PREPROCESS",
            UnsupportedDisplayMode => "MODE",
            OutOfScreenBounds => "SCREEN BOUNDS",
            OutOfMemory => "MEMORY",
            Break => "BREAK",
            IoError => "I/O",
            InternalError => "INTERNAL",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {:?}: {} }}", self.code, self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "ERR:{}", self.code)?;
        if let Some(program) = &self.program {
            write!(f, " IN {}", program)?;
        }
        if let Some(position) = self.position {
            write!(f, " {}", position)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = error!(LabelNotFound, ..Position::new(2, 5); "AB");
        assert_eq!(e.to_string(), "ERR:LABEL 2:5; AB");
        let e = e.in_program(&"GAME".into());
        assert_eq!(e.to_string(), "ERR:LABEL IN GAME 2:5; AB");
        assert_eq!(error!(Break).to_string(), "ERR:BREAK");
    }

    #[test]
    fn test_first_position_wins() {
        let e = error!(DomainError, ..Position::new(1, 3)).at(Position::new(9, 9));
        assert_eq!(e.position(), Some(Position::new(1, 3)));
        assert_eq!(e.code(), ErrorCode::DomainError);
    }
}

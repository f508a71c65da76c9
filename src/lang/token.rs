#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Number(String),
    String(String),
    Letter(char),
    List(String),
    Name(String),
    Word(Word),
    Label(String),
    Operator(Operator),
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Store,
    Colon,
    Newline,
}

impl Token {
    pub fn is_separator(&self) -> bool {
        matches!(self, Token::Colon | Token::Newline)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Number(s) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s),
            Letter(c) => write!(f, "{}", c),
            List(s) => {
                if s.len() == 2 && s.starts_with('L') {
                    write!(f, "{}", s)
                } else {
                    write!(f, "∟{}", s)
                }
            }
            Name(s) => write!(f, "{}", s),
            Word(w) => write!(f, "{}", w),
            Label(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            LBrace => write!(f, "{{"),
            RBrace => write!(f, "}}"),
            Comma => write!(f, ","),
            Store => write!(f, "→"),
            Colon => write!(f, ":"),
            Newline => writeln!(f),
        }
    }
}

/// Control-flow keywords. Every other name is resolved by the parser.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    If,
    Then,
    Else,
    End,
    While,
    Repeat,
    For,
    Lbl,
    Goto,
    IsGreater,
    DsLess,
    Return,
    Stop,
    Prgm,
}

impl Word {
    pub fn from_name(s: &str) -> Option<Word> {
        use Word::*;
        Some(match s {
            "If" => If,
            "Then" => Then,
            "Else" => Else,
            "End" => End,
            "While" => While,
            "Repeat" => Repeat,
            "For" => For,
            "Lbl" => Lbl,
            "Goto" => Goto,
            "IS>(" => IsGreater,
            "DS<(" => DsLess,
            "Return" => Return,
            "Stop" => Stop,
            "prgm" => Prgm,
            _ => return None,
        })
    }

    /// The next token names a label or program rather than an expression.
    pub fn takes_label(&self) -> bool {
        matches!(self, Word::Lbl | Word::Goto | Word::Prgm)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            If => write!(f, "If"),
            Then => write!(f, "Then"),
            Else => write!(f, "Else"),
            End => write!(f, "End"),
            While => write!(f, "While"),
            Repeat => write!(f, "Repeat"),
            For => write!(f, "For"),
            Lbl => write!(f, "Lbl"),
            Goto => write!(f, "Goto"),
            IsGreater => write!(f, "IS>("),
            DsLess => write!(f, "DS<("),
            Return => write!(f, "Return"),
            Stop => write!(f, "Stop"),
            Prgm => write!(f, "prgm"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Caret,
    Negate,
    Factorial,
    Square,
    Cube,
    Inverse,
    SquareRoot,
    CubeRoot,
    XRoot,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    pub fn is_postfix(&self) -> bool {
        use Operator::*;
        matches!(self, Factorial | Square | Cube | Inverse)
    }

    pub fn is_relational(&self) -> bool {
        use Operator::*;
        matches!(
            self,
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual
        )
    }
}

/// Operators display as the name they are registered under.
impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Caret => write!(f, "^"),
            Negate => write!(f, "⁻"),
            Factorial => write!(f, "!"),
            Square => write!(f, "²"),
            Cube => write!(f, "³"),
            Inverse => write!(f, "⁻¹"),
            SquareRoot => write!(f, "√("),
            CubeRoot => write!(f, "³√("),
            XRoot => write!(f, "ˣ√"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "≠"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "≤"),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, "≥"),
        }
    }
}

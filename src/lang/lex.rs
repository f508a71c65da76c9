use super::{token::*, Position};

pub fn lex(s: &str) -> Vec<(Position, Token)> {
    TiLexer::new(s).collect()
}

fn is_ti_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == 'θ'
}

const OPERATOR_NAMES: [&str; 5] = ["and", "or", "xor", "nPr", "nCr"];

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;
    fn bump(&mut self) -> Option<char>;

    fn lookahead(&mut self, s: &str) -> bool {
        let mut it = self.chars().clone();
        s.chars().all(|c| it.next() == Some(c))
    }

    fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    fn number(&mut self) -> Token {
        let mut s = String::new();
        let mut decimal = false;
        while let Some(&pk) = self.chars().peek() {
            if pk.is_ascii_digit() || (!decimal && pk == '.') {
                decimal |= pk == '.';
                s.push(pk);
                self.bump();
            } else {
                break;
            }
        }
        if let Some('ᴇ') = self.chars().peek() {
            self.bump();
            s.push('e');
            if let Some(&pk) = self.chars().peek() {
                if pk == '⁻' || pk == '-' {
                    self.bump();
                    s.push('-');
                }
            }
            while let Some(&pk) = self.chars().peek() {
                if !pk.is_ascii_digit() {
                    break;
                }
                s.push(pk);
                self.bump();
            }
        }
        Token::Number(s)
    }

    fn string(&mut self) -> Token {
        let mut s = String::new();
        self.bump();
        while let Some(&ch) = self.chars().peek() {
            if ch == '"' {
                self.bump();
                break;
            }
            if ch == '\n' || ch == '→' || self.lookahead("->") {
                break;
            }
            s.push(ch);
            self.bump();
        }
        Token::String(s)
    }

    fn upper(&mut self) -> Token {
        if self.lookahead("IS>(") {
            self.bump_n(4);
            return Token::Word(Word::IsGreater);
        }
        if self.lookahead("DS<(") {
            self.bump_n(4);
            return Token::Word(Word::DsLess);
        }
        let first = match self.bump() {
            Some(c) => c,
            None => return Token::Unknown(String::new()),
        };
        match self.chars().peek() {
            Some(&pk) if pk.is_ascii_lowercase() => {
                let mut s = String::from(first);
                while let Some(&pk) = self.chars().peek() {
                    if !pk.is_ascii_alphanumeric() {
                        break;
                    }
                    s.push(pk);
                    self.bump();
                }
                match Word::from_name(&s) {
                    Some(word) => Token::Word(word),
                    None => Token::Name(s),
                }
            }
            Some(&pk) if first == 'L' && ('1'..='6').contains(&pk) => {
                self.bump();
                Token::List(format!("L{}", pk))
            }
            _ => Token::Letter(first),
        }
    }

    fn lower(&mut self) -> Token {
        let mut s = String::new();
        while let Some(&pk) = self.chars().peek() {
            if !pk.is_ascii_alphabetic() {
                break;
            }
            s.push(pk);
            self.bump();
            if s == "prgm" {
                break;
            }
        }
        if s == "e" && self.lookahead("^(") {
            self.bump();
            s.push('^');
        }
        match Word::from_name(&s) {
            Some(word) => Token::Word(word),
            None => Token::Name(s),
        }
    }

    fn list(&mut self) -> Token {
        self.bump();
        let mut s = String::new();
        while let Some(&pk) = self.chars().peek() {
            if !is_label_char(pk) {
                break;
            }
            s.push(pk);
            self.bump();
        }
        Token::List(s)
    }

    fn label(&mut self) -> Token {
        let mut s = String::new();
        while let Some(&pk) = self.chars().peek() {
            if !is_label_char(pk) {
                break;
            }
            s.push(pk);
            self.bump();
        }
        Token::Label(s)
    }

    fn minutia(&mut self, ends_operand: bool) -> Token {
        use Operator::*;
        let (len, token) = if self.lookahead("->") {
            (2, Token::Store)
        } else if self.lookahead("<=") {
            (2, Token::Operator(LessEqual))
        } else if self.lookahead(">=") {
            (2, Token::Operator(GreaterEqual))
        } else if self.lookahead("⁻¹") {
            (2, Token::Operator(Inverse))
        } else if self.lookahead("√(") {
            (2, Token::Operator(SquareRoot))
        } else if self.lookahead("ˣ√") {
            (2, Token::Operator(XRoot))
        } else if !ends_operand && self.lookahead("³√(") {
            (3, Token::Operator(CubeRoot))
        } else {
            let ch = match self.chars().peek() {
                Some(&ch) => ch,
                None => return Token::Unknown(String::new()),
            };
            let token = match ch {
                ':' => Token::Colon,
                '\n' => Token::Newline,
                ',' => Token::Comma,
                '(' => Token::LParen,
                ')' => Token::RParen,
                '{' => Token::LBrace,
                '}' => Token::RBrace,
                '→' => Token::Store,
                '+' => Token::Operator(Plus),
                '-' => Token::Operator(Minus),
                '*' => Token::Operator(Multiply),
                '/' => Token::Operator(Divide),
                '^' => Token::Operator(Caret),
                '⁻' => Token::Operator(Negate),
                '!' => Token::Operator(Factorial),
                '²' => Token::Operator(Square),
                '³' => Token::Operator(Cube),
                '=' => Token::Operator(Equal),
                '≠' => Token::Operator(NotEqual),
                '<' => Token::Operator(Less),
                '≤' => Token::Operator(LessEqual),
                '>' => Token::Operator(Greater),
                '≥' => Token::Operator(GreaterEqual),
                'θ' => Token::Letter('θ'),
                'π' => Token::Name("π".to_string()),
                _ => Token::Unknown(ch.to_string()),
            };
            (1, token)
        };
        self.bump_n(len);
        token
    }
}

struct TiLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
    label: bool,
    operand: bool,
}

impl<'a> Tokenizers<'a> for TiLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }
}

impl<'a> TiLexer<'a> {
    fn new(s: &'a str) -> TiLexer<'a> {
        TiLexer {
            chars: s.chars().peekable(),
            line: 1,
            column: 1,
            label: false,
            operand: false,
        }
    }

    fn ends_operand(token: &Token) -> bool {
        match token {
            Token::Number(_)
            | Token::String(_)
            | Token::Letter(_)
            | Token::List(_)
            | Token::RParen
            | Token::RBrace => true,
            Token::Name(name) => !OPERATOR_NAMES.contains(&name.as_str()),
            Token::Operator(op) => op.is_postfix(),
            _ => false,
        }
    }
}

impl<'a> Iterator for TiLexer<'a> {
    type Item = (Position, Token);

    fn next(&mut self) -> Option<Self::Item> {
        while is_ti_whitespace(*self.chars.peek()?) {
            self.bump();
        }
        let position = Position::new(self.line, self.column);
        let pk = *self.chars.peek()?;
        let token = if std::mem::take(&mut self.label) && is_label_char(pk) {
            self.label()
        } else if pk.is_ascii_digit() || pk == '.' {
            self.number()
        } else if pk.is_ascii_uppercase() {
            self.upper()
        } else if pk.is_ascii_lowercase() {
            self.lower()
        } else if pk == '"' {
            self.string()
        } else if pk == '∟' {
            self.list()
        } else {
            let operand = self.operand;
            self.minutia(operand)
        };
        self.operand = TiLexer::ends_operand(&token);
        if let Token::Word(word) = &token {
            self.label = word.takes_label();
        }
        Some((position, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<Token> {
        lex(s).into_iter().map(|(_, t)| t).collect()
    }

    #[test]
    fn test_store_and_relational() {
        assert_eq!(
            tokens("A≤2->B"),
            vec![
                Token::Letter('A'),
                Token::Operator(Operator::LessEqual),
                Token::Number("2".into()),
                Token::Store,
                Token::Letter('B'),
            ]
        );
    }

    #[test]
    fn test_words_and_names() {
        assert_eq!(
            tokens("If Ans:Disp Str1"),
            vec![
                Token::Word(Word::If),
                Token::Name("Ans".into()),
                Token::Colon,
                Token::Name("Disp".into()),
                Token::Name("Str1".into()),
            ]
        );
        assert_eq!(
            tokens("5nPr2"),
            vec![
                Token::Number("5".into()),
                Token::Name("nPr".into()),
                Token::Number("2".into()),
            ]
        );
    }

    #[test]
    fn test_labels_and_programs() {
        assert_eq!(
            tokens("Lbl A1:Goto θ:prgmGAME2"),
            vec![
                Token::Word(Word::Lbl),
                Token::Label("A1".into()),
                Token::Colon,
                Token::Word(Word::Goto),
                Token::Label("θ".into()),
                Token::Colon,
                Token::Word(Word::Prgm),
                Token::Label("GAME2".into()),
            ]
        );
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            tokens("L1(2)+∟ABC"),
            vec![
                Token::List("L1".into()),
                Token::LParen,
                Token::Number("2".into()),
                Token::RParen,
                Token::Operator(Operator::Plus),
                Token::List("ABC".into()),
            ]
        );
    }

    #[test]
    fn test_exp_function() {
        assert_eq!(
            tokens("e^(2)"),
            vec![
                Token::Name("e^".into()),
                Token::LParen,
                Token::Number("2".into()),
                Token::RParen,
            ]
        );
        assert_eq!(
            tokens("e^2"),
            vec![
                Token::Name("e".into()),
                Token::Operator(Operator::Caret),
                Token::Number("2".into()),
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(tokens("1.5ᴇ⁻3"), vec![Token::Number("1.5e-3".into())]);
        assert_eq!(tokens(".5"), vec![Token::Number(".5".into())]);
    }

    #[test]
    fn test_cube_root_after_operand_is_cube() {
        use Operator::*;
        assert_eq!(
            tokens("3³√(54"),
            vec![
                Token::Number("3".into()),
                Token::Operator(Cube),
                Token::Operator(SquareRoot),
                Token::Number("54".into()),
            ]
        );
        assert_eq!(
            tokens("³√(8"),
            vec![Token::Operator(CubeRoot), Token::Number("8".into())]
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            tokens("\"HI→Str1"),
            vec![
                Token::String("HI".into()),
                Token::Store,
                Token::Name("Str1".into()),
            ]
        );
    }

    #[test]
    fn test_positions() {
        let v = lex("1\n  A");
        assert_eq!(v[0].0, Position::new(1, 1));
        assert_eq!(v[1].0, Position::new(1, 2));
        assert_eq!(v[2].0, Position::new(2, 3));
    }
}

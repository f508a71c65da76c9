use super::{Block, ExecutableProgram};
use crate::lang::{ast::Statement, parse, Error, ErrorCode};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::warn;

type Result<T> = std::result::Result<T, Error>;

/// ## Preprocessor
///
/// Parses a program and records where its labels and blocks are. A
/// parse failure becomes a `PreprocessError` naming the program.
pub fn preprocess(name: &str, source: &str) -> Result<ExecutableProgram> {
    let name: Rc<str> = name.into();
    let statements = match parse(source) {
        Ok(statements) => statements,
        Err(error) => return Err(wrap(error, &name)),
    };
    let labels = labels(&name, &statements);
    let blocks = blocks(&statements);
    Ok(ExecutableProgram::new(
        name,
        source.into(),
        statements,
        labels,
        blocks,
    ))
}

fn wrap(error: Error, name: &Rc<str>) -> Error {
    let mut wrapped = Error::new(ErrorCode::PreprocessError);
    if let Some(position) = error.position() {
        wrapped = wrapped.at(position);
    }
    let message = if error.text().is_empty() {
        error.code().to_string()
    } else {
        format!("{} {}", error.code(), error.text())
    };
    wrapped.message(message).in_program(name)
}

/// The first definition of a label wins.
fn labels(program: &str, statements: &[Statement]) -> HashMap<Rc<str>, usize> {
    let mut labels: HashMap<Rc<str>, usize> = HashMap::new();
    for (index, statement) in statements.iter().enumerate() {
        if let Statement::Lbl(position, label) = statement {
            if labels.contains_key(label) {
                warn!(program, label = &**label, %position, "duplicate label ignored");
            } else {
                labels.insert(label.clone(), index);
            }
        }
    }
    labels
}

/// Matches block openers with their `Else` and `End`. Unmatched
/// keywords are left for the engine to reject if they are reached.
fn blocks(statements: &[Statement]) -> HashMap<usize, Block> {
    let mut blocks: HashMap<usize, Block> = HashMap::new();
    let mut open: Vec<(usize, Option<usize>)> = vec![];
    for (index, statement) in statements.iter().enumerate() {
        match statement {
            Statement::If(..) => {
                if let Some(Statement::Then(_)) = statements.get(index + 1) {
                    open.push((index, None));
                }
            }
            Statement::While(..) | Statement::Repeat(..) | Statement::For(..) => {
                open.push((index, None));
            }
            Statement::Else(_) => {
                if let Some((opener, else_index)) = open.last_mut() {
                    if matches!(statements[*opener], Statement::If(..)) && else_index.is_none() {
                        *else_index = Some(index);
                    }
                }
            }
            Statement::End(_) => {
                if let Some((opener, else_index)) = open.pop() {
                    blocks.insert(
                        opener,
                        Block {
                            else_index,
                            end: index,
                        },
                    );
                }
            }
            _ => {}
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_first_wins() {
        let p = preprocess("T", "Lbl A:1:Lbl A:2:Lbl B").unwrap();
        assert_eq!(p.label("A"), Some(0));
        assert_eq!(p.label("B"), Some(4));
        assert_eq!(p.label("C"), None);
    }

    #[test]
    fn test_blocks() {
        let p = preprocess(
            "T",
            "If A:Then:1:Else:While B:2:End:End:If C:3:For(I,1,2:End",
        )
        .unwrap();
        assert_eq!(
            p.block(0),
            Some(Block {
                else_index: Some(3),
                end: 7
            })
        );
        assert_eq!(
            p.block(4),
            Some(Block {
                else_index: None,
                end: 6
            })
        );
        assert_eq!(p.block(8), None);
        assert_eq!(
            p.block(10),
            Some(Block {
                else_index: None,
                end: 11
            })
        );
    }

    #[test]
    fn test_syntax_error_names_program() {
        let e = preprocess("BAD", "1+").unwrap_err();
        assert_eq!(e.code(), ErrorCode::PreprocessError);
        assert_eq!(e.program(), Some("BAD"));
        assert!(e.text().starts_with("SYNTAX"));
    }
}

#![allow(dead_code)]
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tibasic::error;
use tibasic::lang::Error;
use tibasic::mach::{Keypad, Runtime, Screen, Val, SCREEN_COLUMNS, SCREEN_ROWS};

/// Keeps every line sent to the screen.
#[derive(Clone, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn output(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl Screen for Recorder {
    fn print_at(&mut self, text: &str, column: usize, row: usize) -> Result<(), Error> {
        if !(1..=SCREEN_ROWS).contains(&row) || !(1..=SCREEN_COLUMNS).contains(&column) {
            return Err(error!(OutOfScreenBounds));
        }
        self.log
            .borrow_mut()
            .push(format!("{},{}:{}", row, column, text));
        Ok(())
    }
    fn print_text(&mut self, text: &str) -> Result<(), Error> {
        self.log.borrow_mut().push(text.to_string());
        Ok(())
    }
    fn print_value(&mut self, text: &str) -> Result<(), Error> {
        self.log.borrow_mut().push(text.to_string());
        Ok(())
    }
    fn clear(&mut self) -> Result<(), Error> {
        self.log.borrow_mut().clear();
        Ok(())
    }
    fn max_rows(&self) -> usize {
        SCREEN_ROWS
    }
    fn max_columns(&self) -> usize {
        SCREEN_COLUMNS
    }
}

/// Answers reads from a fixed list and remembers the prompts.
#[derive(Clone, Default)]
pub struct Script {
    lines: Rc<RefCell<VecDeque<String>>>,
    prompts: Rc<RefCell<Vec<String>>>,
}

impl Script {
    pub fn new(lines: &[&str]) -> Script {
        let script = Script::default();
        script
            .lines
            .borrow_mut()
            .extend(lines.iter().map(|s| s.to_string()));
        script
    }
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Keypad for Script {
    fn read_line(&mut self, prompt: &str) -> Result<String, Error> {
        self.prompts.borrow_mut().push(prompt.to_string());
        match self.lines.borrow_mut().pop_front() {
            Some(line) => Ok(line),
            None => Err(error!(IoError; "SCRIPT EXHAUSTED")),
        }
    }
    fn pause(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

pub fn runtime() -> (Runtime, Recorder) {
    let screen = Recorder::default();
    let runtime = Runtime::new().with_screen(Box::new(screen.clone()));
    (runtime, screen)
}

/// Loads `source` as program `T` on a fresh runtime and runs it.
pub fn run(source: &str) -> Result<Val, Error> {
    let (mut runtime, _) = runtime();
    runtime.load_program("T", source)?;
    runtime.execute_program("T")
}

/// Like `run` but returns the screen output.
pub fn output(source: &str) -> Vec<String> {
    let (mut runtime, screen) = runtime();
    runtime.load_program("T", source).unwrap();
    runtime.execute_program("T").unwrap();
    screen.output()
}

pub fn assert_close(val: Val, expected: f64) {
    match val {
        Val::Number(n) => assert!(
            (n.re - expected).abs() <= 1e-7 * expected.abs().max(1.0) && n.im == 0.0,
            "{} != {}",
            n,
            expected
        ),
        val => panic!("expected a number, got {:?}", val),
    }
}

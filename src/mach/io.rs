use super::{SCREEN_COLUMNS, SCREEN_ROWS};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Home screen output
///
/// Coordinates are 1-based. Values arrive already formatted for the
/// current display modes.
pub trait Screen {
    fn print_at(&mut self, text: &str, column: usize, row: usize) -> Result<()>;
    /// Left-aligned on a new line.
    fn print_text(&mut self, text: &str) -> Result<()>;
    /// Right-aligned on a new line.
    fn print_value(&mut self, text: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
    fn max_rows(&self) -> usize;
    fn max_columns(&self) -> usize;
}

/// ## Key input
pub trait Keypad {
    fn read_line(&mut self, prompt: &str) -> Result<String>;
    fn pause(&mut self) -> Result<()>;
}

/// Fails every read. Pause returns immediately.
#[derive(Debug, Default)]
pub struct NoKeypad;

impl Keypad for NoKeypad {
    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        Err(error!(IoError; "NO INPUT DEVICE"))
    }
    fn pause(&mut self) -> Result<()> {
        Ok(())
    }
}

/// In-memory 16x8 character grid that scrolls like the calculator.
#[derive(Debug)]
pub struct HomeScreen {
    rows: Vec<Vec<char>>,
    cursor: usize,
}

impl Default for HomeScreen {
    fn default() -> Self {
        HomeScreen {
            rows: vec![vec![' '; SCREEN_COLUMNS]; SCREEN_ROWS],
            cursor: 0,
        }
    }
}

impl HomeScreen {
    pub fn new() -> HomeScreen {
        HomeScreen::default()
    }

    /// Rows with trailing blanks removed.
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    fn next_row(&mut self) -> &mut Vec<char> {
        if self.cursor == SCREEN_ROWS {
            self.rows.remove(0);
            self.rows.push(vec![' '; SCREEN_COLUMNS]);
            self.cursor -= 1;
        }
        self.cursor += 1;
        &mut self.rows[self.cursor - 1]
    }
}

impl Screen for HomeScreen {
    fn print_at(&mut self, text: &str, column: usize, row: usize) -> Result<()> {
        if !(1..=SCREEN_ROWS).contains(&row) || !(1..=SCREEN_COLUMNS).contains(&column) {
            return Err(error!(OutOfScreenBounds; format!("{},{}", row, column)));
        }
        let line = &mut self.rows[row - 1];
        for (cell, ch) in line[column - 1..].iter_mut().zip(text.chars()) {
            *cell = ch;
        }
        Ok(())
    }

    fn print_text(&mut self, text: &str) -> Result<()> {
        let row = self.next_row();
        for (cell, ch) in row.iter_mut().zip(text.chars()) {
            *cell = ch;
        }
        Ok(())
    }

    fn print_value(&mut self, text: &str) -> Result<()> {
        let row = self.next_row();
        let chars: Vec<char> = text.chars().collect();
        let width = chars.len().min(SCREEN_COLUMNS);
        let start = SCREEN_COLUMNS - width;
        row[start..].copy_from_slice(&chars[..width]);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        *self = HomeScreen::default();
        Ok(())
    }

    fn max_rows(&self) -> usize {
        SCREEN_ROWS
    }

    fn max_columns(&self) -> usize {
        SCREEN_COLUMNS
    }
}

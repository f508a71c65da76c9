use crate::Cli;
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use tibasic::error;
use tibasic::lang::{is_program_name, Error};
use tibasic::mach::{
    DirectoryProvider, Keypad, Runtime, Screen, Val, SCREEN_COLUMNS, SCREEN_ROWS,
};

type Result<T> = std::result::Result<T, Error>;

pub fn main(cli: Cli) -> i32 {
    let dir = program_dir(&cli);
    let mut runtime = Runtime::new()
        .with_screen(Box::new(ConsoleScreen))
        .with_keypad(Box::new(ConsoleKeypad::default()))
        .with_code_provider(Box::new(DirectoryProvider::new(dir)));
    let interrupted = runtime.interrupt_handle();
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let mut status = 0;
    if let Some(path) = &cli.file {
        if let Err(error) = run_file(&mut runtime, path) {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            status = 1;
        }
    }
    if cli.interactive || cli.file.is_none() {
        if let Err(error) = repl(&mut runtime) {
            eprintln!("{}", error);
            status = 1;
        }
    }
    status
}

fn program_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.program_dir {
        return dir.clone();
    }
    match cli.file.as_deref().and_then(Path::parent) {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn run_file(runtime: &mut Runtime, path: &Path) -> Result<Val> {
    let name = match path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) => stem.to_uppercase(),
        None => String::new(),
    };
    if !is_program_name(&name) {
        return Err(error!(ArgumentError; format!("INVALID PROGRAM NAME {}", path.display())));
    }
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => return Err(error!(IoError; format!("{}: {}", path.display(), error))),
    };
    runtime.load_program(&name, &source)?;
    runtime.execute_program(&name)
}

fn repl(runtime: &mut Runtime) -> std::io::Result<()> {
    let interface = Interface::new("tibasic")?;
    interface.set_prompt("> ")?;
    loop {
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") {
            break;
        }
        interface.add_history_unique(line.to_string());
        match runtime.interpret(line).and_then(|ans| show(runtime, &ans)) {
            Ok(text) => interface.write_fmt(format_args!("{}\n", text))?,
            Err(error) => interface.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint(error.to_string())
            ))?,
        }
    }
    Ok(())
}

/// Strings on the left, everything else on the right, like the home screen.
fn show(runtime: &Runtime, ans: &Val) -> Result<String> {
    let text = runtime.format(ans)?;
    Ok(match ans {
        Val::String(_) => text,
        _ => format!("{:>width$}", text, width = SCREEN_COLUMNS),
    })
}

/// Writes the home screen straight to stdout.
struct ConsoleScreen;

impl Screen for ConsoleScreen {
    fn print_at(&mut self, text: &str, column: usize, row: usize) -> Result<()> {
        if !(1..=SCREEN_ROWS).contains(&row) || !(1..=SCREEN_COLUMNS).contains(&column) {
            return Err(error!(OutOfScreenBounds; format!("{},{}", row, column)));
        }
        // Save the cursor, move, print, restore.
        print!("\x1b7\x1b[{};{}H{}\x1b8", row, column, text);
        Ok(())
    }

    fn print_text(&mut self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }

    fn print_value(&mut self, text: &str) -> Result<()> {
        println!("{:>width$}", text, width = SCREEN_COLUMNS);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        print!("\x1b[2J\x1b[H");
        Ok(())
    }

    fn max_rows(&self) -> usize {
        SCREEN_ROWS
    }

    fn max_columns(&self) -> usize {
        SCREEN_COLUMNS
    }
}

/// Reads `Input`, `Prompt` and `Pause` responses with line editing.
/// The terminal is only opened once a program asks for input.
#[derive(Default)]
struct ConsoleKeypad {
    interface: Option<Interface<DefaultTerminal>>,
}

impl ConsoleKeypad {
    fn read(&mut self, prompt: &str) -> Result<String> {
        let io_error = |error: std::io::Error| error!(IoError; error.to_string());
        if self.interface.is_none() {
            let interface = Interface::new("Input").map_err(io_error)?;
            interface.set_report_signal(Signal::Interrupt, true);
            self.interface = Some(interface);
        }
        let interface = match &self.interface {
            Some(interface) => interface,
            None => return Err(error!(IoError; "NO TERMINAL")),
        };
        interface.set_prompt(prompt).map_err(io_error)?;
        match interface.read_line().map_err(io_error)? {
            ReadResult::Input(line) => Ok(line),
            ReadResult::Signal(_) => Err(error!(Break)),
            ReadResult::Eof => Err(error!(IoError; "END OF INPUT")),
        }
    }
}

impl Keypad for ConsoleKeypad {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.read(prompt)
    }

    fn pause(&mut self) -> Result<()> {
        self.read("").map(|_| ())
    }
}

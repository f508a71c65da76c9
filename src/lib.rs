//! # TI-Basic
//!
//! The calculator programming language, on your terminal.
//!
//! Run the executable with no arguments for the home screen, where each
//! line is run as it is entered and `Ans` is shown. Give it a file to run
//! that file as a program.
//! ```text
//! tibasic GAME.tib
//! ```
//!
//! The library can be embedded. A [`mach::Runtime`] owns everything a
//! calculator has: variables, display modes, the command library and the
//! loaded programs.
//! ```
//! use tibasic::mach::{Runtime, Val};
//!
//! let mut runtime = Runtime::new();
//! runtime.load_program("COUNT", "0→A:While A<5:A+1→A:End").unwrap();
//! assert_eq!(runtime.execute_program("COUNT").unwrap(), Val::from(5.0));
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

#[path = "doc/appendix_c.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_C;

#[macro_use]
pub mod lang;
pub mod mach;

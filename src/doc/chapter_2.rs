/*!
# Statements
*/

#[path = "statements/disp.rs"]
#[allow(non_snake_case)]
pub mod Disp;

#[path = "statements/for.rs"]
#[allow(non_snake_case)]
pub mod For;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod Goto;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod If;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod Input;

#[path = "statements/is_ds.rs"]
#[allow(non_snake_case)]
pub mod IS_DS;

#[path = "statements/prgm.rs"]
#[allow(non_snake_case)]
pub mod prgm;

#[path = "statements/repeat.rs"]
#[allow(non_snake_case)]
pub mod Repeat;

#[path = "statements/while.rs"]
#[allow(non_snake_case)]
pub mod While;

mod common;
use common::*;
use tibasic::lang::ErrorCode;
use tibasic::mach::{NumberVariable, Val};

#[test]
fn test_rejects_control_flow() {
    let (mut r, _) = runtime();
    for line in [
        "If 1",
        "While 1",
        "End",
        "Goto A",
        "Then",
        "Else",
        "Repeat 1",
        "For(I,1,2",
        "Lbl A",
        "IS>(A,1",
        "1:If 1:2",
    ] {
        assert_eq!(
            r.interpret(line).unwrap_err().code(),
            ErrorCode::IllegalControlFlow,
            "{}",
            line
        );
    }
}

#[test]
fn test_rejected_line_runs_nothing() {
    let (mut r, _) = runtime();
    r.interpret("5→A:If 1:6→A").unwrap_err();
    let a = NumberVariable::new('A').unwrap();
    assert_eq!(r.memory().number(a).re, 0.0);
}

#[test]
fn test_ans_carries_over() {
    let (mut r, _) = runtime();
    assert_eq!(r.interpret("3").unwrap(), Val::from(3.0));
    assert_eq!(r.interpret("Ans²").unwrap(), Val::from(9.0));
    assert_eq!(r.interpret(":Ans+1").unwrap(), Val::from(10.0));
    // A command statement leaves Ans alone.
    assert_eq!(r.interpret("Disp 7").unwrap(), Val::from(10.0));
}

#[test]
fn test_syntax_error() {
    let (mut r, _) = runtime();
    let e = r.interpret("1+*2").unwrap_err();
    assert_eq!(e.code(), ErrorCode::PreprocessError);
    assert_eq!(e.program(), Some("HOME"));
    assert!(r.program_names().is_empty());
}

#[test]
fn test_errors_do_not_stick() {
    let (mut r, _) = runtime();
    assert_eq!(r.interpret("1/0").unwrap_err().code(), ErrorCode::DivisionByZero);
    assert_eq!(r.interpret("1+1").unwrap(), Val::from(2.0));
}

#[test]
fn test_subprogram_may_loop() {
    let (mut r, _) = runtime();
    r.load_program("LOOP", "0→A:While A<3:A+1→A:End").unwrap();
    assert_eq!(r.interpret("prgmLOOP").unwrap(), Val::from(3.0));
}

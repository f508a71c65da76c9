mod common;
use common::*;
use tibasic::lang::ErrorCode;
use tibasic::mach::Val;

#[test]
fn test_single_line_if() {
    assert_eq!(run("If 0:2:Ans+3").unwrap(), Val::from(3.0));
    assert_eq!(run("If 1:2:Ans+3").unwrap(), Val::from(5.0));
    assert_eq!(run("10:If 0:2:Ans+3").unwrap(), Val::from(13.0));
}

#[test]
fn test_block_if_else() {
    assert_eq!(
        run("If 1:Then:2:Ans+3:Else:Ans+7:End").unwrap(),
        Val::from(5.0)
    );
    assert_eq!(
        run("If 0:Then:2:Ans+3:Else:Ans+7:End").unwrap(),
        Val::from(7.0)
    );
    assert_eq!(run("5:If 0:Then:1:End:Ans").unwrap(), Val::from(5.0));
}

#[test]
fn test_nested_if() {
    assert_eq!(
        run("If 1:Then:If 0:Then:1:Else:2:End:Ans+10:End").unwrap(),
        Val::from(12.0)
    );
    assert_eq!(
        run("If 0:Then:If 1:Then:1:End:2:Else:3:End").unwrap(),
        Val::from(3.0)
    );
}

#[test]
fn test_multi_line_program() {
    let out = output("0→A\nIf A=0\nThen\nDisp \"ZERO\"\nElse\nDisp \"NONZERO\"\nEnd");
    assert_eq!(out, vec!["ZERO"]);
}

#[test]
fn test_orphans() {
    for source in ["Then", "Else", "End", "1:End", "If 1:Then:1:Else:2"] {
        assert_eq!(
            run(source).unwrap_err().code(),
            ErrorCode::IllegalControlFlow,
            "{}",
            source
        );
    }
}

#[test]
fn test_complex_condition() {
    assert_eq!(run("If i:1").unwrap_err().code(), ErrorCode::DomainError);
    assert_eq!(run("If \"A\":1").unwrap_err().code(), ErrorCode::TypeMismatch);
}

use std::io::Cursor;

use lifo_stack::{EmptyContainerError, ScriptConfig, ScriptError, ScriptRunner};

#[test]
fn test_run_reader() {
    let script = "# 构造\npush 1\npush 2\npush 3\nlen\npop\npop\ntop\nlen\npop\nlen\n";
    let mut out = Vec::new();
    let mut runner = ScriptRunner::new(&mut out, ScriptConfig::default());
    runner.run_reader(Cursor::new(script)).unwrap();
    assert_eq!(runner.stack().length(), 0);

    let summary = runner.finish().unwrap();
    assert_eq!(summary.length, 0);
    assert_eq!(String::from_utf8(out).unwrap(), "3\n3\n2\n1\n1\n1\n0\nlength: 0\n");
}

#[test]
fn test_push_keeps_spaces_and_empty_values() {
    let mut out = Vec::new();
    let mut runner = ScriptRunner::new(&mut out, ScriptConfig::default());
    runner
        .run_lines(["push hello world", "push ", "pop", "pop"])
        .unwrap();
    runner.finish().unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "\nhello world\nlength: 0\n");
}

#[test]
fn test_crlf_lines() {
    let mut out = Vec::new();
    let mut runner = ScriptRunner::new(&mut out, ScriptConfig::default());
    runner.run_reader(Cursor::new("push a\r\ntop\r\n")).unwrap();
    runner.finish().unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "a\nlength: 1\n");
}

#[test]
fn test_empty_error_surfaces() {
    let mut out = Vec::new();
    let mut runner = ScriptRunner::new(&mut out, ScriptConfig::default());
    let err = runner.run_lines(["top"]).unwrap_err();

    assert!(matches!(
        err,
        ScriptError::Empty {
            line: 1,
            source: EmptyContainerError::Top
        }
    ));
    assert_eq!(err.to_string(), "line 1: empty stack");
}

#[test]
fn test_keep_going() {
    let config = ScriptConfig {
        silent: true,
        keep_going: true,
    };
    let mut out = Vec::new();
    let mut runner = ScriptRunner::new(&mut out, config);
    runner.run_lines(["pop", "push z", "pop", "top"]).unwrap();
    let summary = runner.finish().unwrap();

    assert_eq!(summary.length, 0);
    assert_eq!(summary.failures.len(), 2);
    assert_eq!(String::from_utf8(out).unwrap(), "length: 0\n");
}

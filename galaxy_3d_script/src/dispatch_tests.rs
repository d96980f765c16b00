use super::*;
use crate::engine::Engine;
use crate::error::Error;
use crate::log::{Logger, LogEntry, LogSeverity};
use crate::script::diagnostic::CallSite;
use serial_test::serial;
use std::sync::{Arc, Mutex};

/// Keeps error entries about `Test.Fail` only
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.severity == LogSeverity::Error && entry.message.contains("Test.Fail()") {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

fn frame(function: &str, args: Vec<ScriptValue>) -> CallFrame {
    CallFrame::new(CallSite::new("dispatch.lua", 5, function), args)
}

fn library() -> ScriptLibrary {
    let mut library = ScriptLibrary::new();
    library.register("Test.Echo", |frame: &CallFrame| Ok(frame.args().to_vec())).unwrap();
    library.register("Test.Fail", |frame: &CallFrame| -> Result<Vec<ScriptValue>> {
        Err(frame.site().fail(&[&"always fails"]))
    }).unwrap();
    library
}

#[test]
fn test_register_and_list() {
    let library = library();
    assert_eq!(library.len(), 2);
    assert!(library.contains("Test.Echo"));
    assert_eq!(library.function_names(), vec!["Test.Echo", "Test.Fail"]);
}

#[test]
fn test_duplicate_registration_fails() {
    let mut library = library();
    let result = library.register("Test.Echo", |_: &CallFrame| Ok(Vec::new()));
    assert!(matches!(result, Err(Error::ConfigurationError(_))));
}

#[test]
fn test_call_routes_by_function_name() {
    let library = library();
    let values = library.call(&frame("Test.Echo", vec![ScriptValue::from(1), ScriptValue::from("a")])).unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values[1].as_text(), Some("a"));
}

#[test]
fn test_unknown_function() {
    let library = library();
    let err = library.call(&frame("Test.Missing", vec![])).unwrap_err();
    assert!(matches!(err, Error::ParseError(_)));
    assert!(err.message().contains("Unknown script function 'Test.Missing'"));
}

#[test]
#[serial]
fn test_failures_are_logged_at_the_boundary() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger { entries: entries.clone() });

    let library = library();
    assert!(library.call(&frame("Test.Echo", vec![])).is_ok());
    let err = library.call(&frame("Test.Fail", vec![])).unwrap_err();

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].source, "galaxy3d::script::ScriptLibrary");
    assert_eq!(captured[0].message, err.to_string());
    assert!(captured[0].line.is_some());
    drop(captured);
    Engine::reset_logger();
}

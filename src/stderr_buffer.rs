use std::sync::Mutex;

static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

/// Start holding warnings back. While active, `buffered_eprintln!()` stores
/// messages instead of printing them to stderr.
pub fn activate() {
    *BUFFER.lock().unwrap() = Some(Vec::new());
}

/// Whether warnings are currently being held back.
pub fn is_active() -> bool {
    BUFFER.lock().unwrap().is_some()
}

/// Stop holding warnings back and return everything collected so far.
pub fn drain() -> Vec<String> {
    BUFFER.lock().unwrap().take().unwrap_or_default()
}

/// Emit a warning. Stored if buffering is active, printed to stderr otherwise.
pub fn warn(msg: String) {
    let mut guard = BUFFER.lock().unwrap();
    if let Some(buf) = guard.as_mut() {
        buf.push(msg);
    } else {
        drop(guard);
        eprintln!("{}", msg);
    }
}

/// Works like `eprintln!` but routes through the stderr buffer when it is
/// active.
#[macro_export]
macro_rules! buffered_eprintln {
    ($($arg:tt)*) => {
        $crate::stderr_buffer::warn(format!($($arg)*))
    };
}

//! Ownership of greetings handed to C callers
//!
//! Greetings cross the C ABI as `CString::into_raw` pointers and must come back
//! through [`release_c_greeting`] exactly once.

use crate::greeting::{GreeterError, Greeting};
use libc::c_char;
use std::ffi::CString;
use std::sync::atomic::{AtomicUsize, Ordering};

static OUTSTANDING: AtomicUsize = AtomicUsize::new(0);

/// Transfer a greeting to C ownership.
pub fn greeting_into_raw(greeting: Greeting) -> Result<*mut c_char, GreeterError> {
    let c_string = greeting.into_c_string()?;
    OUTSTANDING.fetch_add(1, Ordering::Relaxed);
    Ok(c_string.into_raw())
}

/// Reclaim and drop a greeting previously returned by [`greeting_into_raw`].
///
/// # Safety
/// `ptr` must be null or a pointer obtained from [`greeting_into_raw`] that has not
/// been released yet.
pub unsafe fn release_c_greeting(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    drop(CString::from_raw(ptr));
    OUTSTANDING.fetch_sub(1, Ordering::Relaxed);
}

/// Greetings handed to C and not yet released
pub fn outstanding_greetings() -> usize {
    OUTSTANDING.load(Ordering::Relaxed)
}

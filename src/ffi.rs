// FFI bindings for the greeter
// C-compatible surface declared in include/greeter.h

use libc::{c_char, c_int};
use std::ffi::CStr;
use std::ptr;

use crate::boundary::{marshal_greeting, BoundaryError, HostStrings, NullNamePolicy};
use crate::greeting::{Greeter, GreeterError, Greeting, Salutation};
use crate::logging::{log_init, LogLevel};
use crate::memory::{greeting_into_raw, outstanding_greetings, release_c_greeting};

/// Status codes returned by `greeter_try_say_hello`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreeterStatus {
    Ok = 0,
    NullName = 1,
    OutOfMemory = 2,
    InvalidGreeting = 3,
    NullOutput = 4,
}

impl From<&BoundaryError> for GreeterStatus {
    fn from(error: &BoundaryError) -> Self {
        match error {
            BoundaryError::NullName => GreeterStatus::NullName,
            BoundaryError::Greeter(GreeterError::OutOfMemory { .. })
            | BoundaryError::Greeter(GreeterError::CapacityOverflow { .. }) => {
                GreeterStatus::OutOfMemory
            }
            _ => GreeterStatus::InvalidGreeting,
        }
    }
}

/// NUL-terminated strings owned by C code
struct CStrings;

impl HostStrings for CStrings {
    type Input = *const c_char;
    type Output = *mut c_char;

    fn is_null(&self, name: &*const c_char) -> bool {
        name.is_null()
    }

    fn decode(&mut self, name: &*const c_char) -> Result<Vec<u8>, BoundaryError> {
        // SAFETY: only reached from the exported functions below, whose callers
        // guarantee a valid NUL-terminated string when the pointer is non-null.
        Ok(unsafe { CStr::from_ptr(*name) }.to_bytes().to_vec())
    }

    fn encode(&mut self, greeting: Greeting) -> Result<*mut c_char, BoundaryError> {
        Ok(greeting_into_raw(greeting)?)
    }

    fn throw(&mut self, _error: &BoundaryError) -> Result<(), BoundaryError> {
        // C has no exceptions; the error is reported through the return value
        Ok(())
    }
}

fn build_greeter() -> Greeter {
    Greeter::new(Salutation::from_build())
}

/// Greet `name`, returning a newly allocated string.
///
/// A null `name` yields "name cannot be null". Returns null only when the
/// greeting could not be allocated.
///
/// # Safety
///
/// `name` must be null or point to a valid NUL-terminated C string. The result
/// must be released with `greeter_free`.
#[no_mangle]
pub unsafe extern "C" fn say_hello(name: *const c_char) -> *mut c_char {
    match marshal_greeting(&mut CStrings, &build_greeter(), NullNamePolicy::Sentinel, &name) {
        Ok(greeting) => greeting,
        Err(e) => {
            log::error!("say_hello: {}", e);
            ptr::null_mut()
        }
    }
}

/// Greet `name`, reporting a null name as `NullName` instead of the sentinel.
///
/// # Safety
///
/// `name` must be null or a valid NUL-terminated C string; `out` must be null or
/// writable. On `Ok`, `*out` must be released with `greeter_free`.
#[no_mangle]
pub unsafe extern "C" fn greeter_try_say_hello(
    name: *const c_char,
    out: *mut *mut c_char,
) -> GreeterStatus {
    if out.is_null() {
        return GreeterStatus::NullOutput;
    }
    *out = ptr::null_mut();

    match marshal_greeting(&mut CStrings, &build_greeter(), NullNamePolicy::Throw, &name) {
        Ok(greeting) => {
            *out = greeting;
            GreeterStatus::Ok
        }
        Err(e) => {
            log::debug!("greeter_try_say_hello: {}", e);
            GreeterStatus::from(&e)
        }
    }
}

/// Release a greeting returned by this library
///
/// # Safety
///
/// `greeting` must be null or a pointer returned by `say_hello` or
/// `greeter_try_say_hello` that has not been released yet.
#[no_mangle]
pub unsafe extern "C" fn greeter_free(greeting: *mut c_char) {
    release_c_greeting(greeting);
}

/// Salutation selected at build time (static storage)
#[no_mangle]
pub extern "C" fn greeter_salutation() -> *const c_char {
    Salutation::from_build().as_c_str().as_ptr()
}

#[no_mangle]
pub extern "C" fn greeter_outstanding_greetings() -> usize {
    outstanding_greetings()
}

#[no_mangle]
pub extern "C" fn greeter_log_init(level: c_int) {
    log_init(LogLevel::from_i32(level));
}

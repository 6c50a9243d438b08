//! Greeting check harness
//!
//! Formats a fixed name, compares it byte-for-byte with the expected literal and
//! reports pass or fail as a process exit code.

use libc::c_int;
use std::process::ExitCode;

use crate::ffi::{greeter_free, say_hello};
use crate::greeting::{Greeter, Salutation};

/// Name used by the check
pub const CHECK_NAME: &str = "Alice";

/// Expected greeting for [`CHECK_NAME`] under the build configuration
pub const EXPECTED_GREETING: &str = expected_greeting(Salutation::from_build());

pub const EXIT_PASS: u8 = 0;
pub const EXIT_FAIL: u8 = 1;

pub const fn expected_greeting(salutation: Salutation) -> &'static str {
    match salutation {
        Salutation::Hello => "Hello, Alice!",
        Salutation::Bonjour => "Bonjour, Alice!",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
}

impl CheckStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            CheckStatus::Pass => EXIT_PASS,
            CheckStatus::Fail => EXIT_FAIL,
        }
    }
}

impl From<CheckStatus> for ExitCode {
    fn from(status: CheckStatus) -> Self {
        ExitCode::from(status.exit_code())
    }
}

/// Result of one comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub status: CheckStatus,
    pub expected: String,
    /// Formatter output, or the error it returned
    pub actual: Result<String, String>,
}

/// Run the formatter on `name` and compare against `expected`.
pub fn run_check(greeter: &Greeter, name: &str, expected: &str) -> CheckOutcome {
    let actual = greeter.format(name).map_err(|e| e.to_string());
    let status = match &actual {
        Ok(greeting) if greeting.as_bytes() == expected.as_bytes() => CheckStatus::Pass,
        _ => CheckStatus::Fail,
    };
    log::debug!("run_check: {:?} -> {:?} ({:?})", name, actual, status);
    CheckOutcome {
        status,
        expected: expected.to_string(),
        actual,
    }
}

/// The default check: [`CHECK_NAME`] against [`EXPECTED_GREETING`]
pub fn run_default_check() -> CheckOutcome {
    run_check(
        &Greeter::new(Salutation::from_build()),
        CHECK_NAME,
        EXPECTED_GREETING,
    )
}

extern "C" {
    fn greeter_c_check(
        say: unsafe extern "C" fn(*const libc::c_char) -> *mut libc::c_char,
        release: unsafe extern "C" fn(*mut libc::c_char),
    ) -> c_int;
}

/// Run the C harness against the exported `say_hello`/`greeter_free`.
pub fn run_c_check() -> CheckStatus {
    // SAFETY: both function pointers match the prototypes in greeter.h
    let code = unsafe { greeter_c_check(say_hello, greeter_free) };
    if code == libc::EXIT_SUCCESS {
        CheckStatus::Pass
    } else {
        log::warn!("run_c_check: C harness returned {}", code);
        CheckStatus::Fail
    }
}

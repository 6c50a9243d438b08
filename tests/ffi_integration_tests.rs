//! Integration tests for the C ABI
//!
//! These exercise the exported functions the way a C consumer would: raw
//! pointers in, owned strings out, every greeting released with greeter_free.

use std::ffi::{CStr, CString};
use std::ptr;

use greeter::ffi::{
    greeter_free, greeter_outstanding_greetings, greeter_salutation, greeter_try_say_hello,
    say_hello, GreeterStatus,
};
use greeter::Salutation;
use serial_test::serial;

unsafe fn take_greeting(ptr: *mut libc::c_char) -> String {
    assert!(!ptr.is_null());
    let text = CStr::from_ptr(ptr).to_str().unwrap().to_string();
    greeter_free(ptr);
    text
}

#[test]
#[serial]
fn test_alice_end_to_end() {
    let name = CString::new("Alice").unwrap();
    let greeting = unsafe { take_greeting(say_hello(name.as_ptr())) };

    #[cfg(feature = "with-feature")]
    assert_eq!(greeting, "Hello, Alice!");
    #[cfg(not(feature = "with-feature"))]
    assert_eq!(greeting, "Bonjour, Alice!");
}

#[test]
#[serial]
fn test_null_name_end_to_end() {
    let greeting = unsafe { take_greeting(say_hello(ptr::null())) };
    assert_eq!(greeting, "name cannot be null");
}

#[test]
#[serial]
fn test_empty_name() {
    let name = CString::new("").unwrap();
    let greeting = unsafe { take_greeting(say_hello(name.as_ptr())) };
    assert_eq!(greeting, format!("{}!", Salutation::from_build()));
}

#[test]
#[serial]
fn test_non_utf8_name_copied_verbatim() {
    let name = CString::new(vec![0xc3u8, 0x28]).unwrap();
    unsafe {
        let ptr = say_hello(name.as_ptr());
        assert!(!ptr.is_null());
        let bytes = CStr::from_ptr(ptr).to_bytes().to_vec();
        greeter_free(ptr);

        let mut expected = Salutation::from_build().as_str().as_bytes().to_vec();
        expected.extend_from_slice(&[0xc3, 0x28, b'!']);
        assert_eq!(bytes, expected);
    }
}

#[test]
#[serial]
fn test_repeated_calls_identical() {
    let name = CString::new("Alice").unwrap();
    let first = unsafe { take_greeting(say_hello(name.as_ptr())) };
    let second = unsafe { take_greeting(say_hello(name.as_ptr())) };
    assert_eq!(first, second);
}

#[test]
#[serial]
fn test_no_leaks_across_calls() {
    let before = greeter_outstanding_greetings();
    let name = CString::new("Carol").unwrap();
    for _ in 0..16 {
        unsafe {
            greeter_free(say_hello(name.as_ptr()));
            greeter_free(say_hello(ptr::null()));
        }
    }
    assert_eq!(greeter_outstanding_greetings(), before);
}

#[test]
#[serial]
fn test_try_say_hello_statuses() {
    let name = CString::new("Dave").unwrap();
    let mut out: *mut libc::c_char = ptr::null_mut();
    unsafe {
        assert_eq!(greeter_try_say_hello(name.as_ptr(), &mut out), GreeterStatus::Ok);
        assert!(take_greeting(out).ends_with("Dave!"));

        assert_eq!(
            greeter_try_say_hello(ptr::null(), &mut out),
            GreeterStatus::NullName
        );
        assert!(out.is_null());
    }
}

#[test]
fn test_salutation_is_static() {
    let first = greeter_salutation();
    let second = greeter_salutation();
    assert_eq!(first, second);
    let text = unsafe { CStr::from_ptr(first) }.to_str().unwrap();
    assert!(text == "Hello, " || text == "Bonjour, ");
}

const PUBLIC_HEADER: &str = include_str!("../include/greeter.h");

#[test]
fn test_public_header_declares_only_exported_functions() {
    for exported in [
        "char *say_hello(const char *name);",
        "greeter_status greeter_try_say_hello(const char *name, char **greeting);",
        "void greeter_free(char *greeting);",
        "const char *greeter_salutation(void);",
        "size_t greeter_outstanding_greetings(void);",
        "void greeter_log_init(int level);",
    ] {
        assert!(PUBLIC_HEADER.contains(exported), "missing {}", exported);
    }
    // The C check harness is linked into the Rust build only
    assert!(!PUBLIC_HEADER.contains("greeter_c_check"));
    let declarations = PUBLIC_HEADER
        .lines()
        .filter(|line| line.trim_end().ends_with(");"))
        .count();
    assert_eq!(declarations, 6);
}

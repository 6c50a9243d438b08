//! Greeting formatter
//!
//! Builds `<salutation><name>!` into a freshly allocated buffer. The capacity is
//! derived with checked arithmetic and reserved fallibly, so an impossible size or
//! an exhausted allocator surfaces as a [`GreeterError`] instead of a bad buffer.

use std::ffi::{CStr, CString};
use std::fmt;

/// Trailing punctuation appended after the name
pub const PUNCTUATION: u8 = b'!';

/// Returned by the native boundary in place of a greeting when the name is null
pub const NULL_NAME_SENTINEL: &str = "name cannot be null";

/// Errors produced while building a greeting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GreeterError {
    #[error("Greeting size overflows: salutation {salutation} bytes + name {name} bytes")]
    CapacityOverflow { salutation: usize, name: usize },

    #[error("Out of memory allocating {requested} bytes for greeting")]
    OutOfMemory { requested: usize },

    #[error("Greeting length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Greeting is not valid UTF-8")]
    InvalidUtf8,

    #[error("Greeting contains an interior NUL at byte {position}")]
    InteriorNul { position: usize },
}

pub type Result<T> = std::result::Result<T, GreeterError>;

/// Greeting prefix, fixed at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Salutation {
    Hello,
    Bonjour,
}

impl Salutation {
    /// Salutation selected by the `with-feature` build flag
    pub const fn from_build() -> Self {
        if cfg!(feature = "with-feature") {
            Salutation::Hello
        } else {
            Salutation::Bonjour
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Salutation::Hello => "Hello, ",
            Salutation::Bonjour => "Bonjour, ",
        }
    }

    /// NUL-terminated form with static storage, for C callers
    pub const fn as_c_str(self) -> &'static CStr {
        match self {
            Salutation::Hello => c"Hello, ",
            Salutation::Bonjour => c"Bonjour, ",
        }
    }
}

impl Default for Salutation {
    fn default() -> Self {
        Self::from_build()
    }
}

impl fmt::Display for Salutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte counts for a single greeting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreetingLayout {
    /// Salutation + name + punctuation
    pub len: usize,
    /// `len` plus one slot for a C terminator
    pub capacity: usize,
}

impl GreetingLayout {
    pub fn new(salutation: usize, name: usize) -> Result<Self> {
        let overflow = GreeterError::CapacityOverflow { salutation, name };
        let len = salutation
            .checked_add(name)
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| overflow.clone())?;
        let capacity = len.checked_add(1).ok_or(overflow)?;
        Ok(Self { len, capacity })
    }
}

/// An owned greeting. Dropping it releases the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    bytes: Vec<u8>,
}

impl Greeting {
    /// The sentinel value returned across the boundary for a null name
    pub fn null_name_sentinel() -> Self {
        Self {
            bytes: NULL_NAME_SENTINEL.as_bytes().to_vec(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn into_string(self) -> Result<String> {
        String::from_utf8(self.bytes).map_err(|_| GreeterError::InvalidUtf8)
    }

    /// Appends the terminator; the formatter already reserved room for it.
    pub fn into_c_string(self) -> Result<CString> {
        CString::new(self.bytes).map_err(|e| GreeterError::InteriorNul {
            position: e.nul_position(),
        })
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

/// Stateless greeting formatter bound to one salutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Greeter {
    salutation: Salutation,
}

impl Greeter {
    pub const fn new(salutation: Salutation) -> Self {
        Self { salutation }
    }

    pub const fn salutation(&self) -> Salutation {
        self.salutation
    }

    /// Format a greeting from raw name bytes, copied verbatim.
    pub fn format_bytes(&self, name: &[u8]) -> Result<Greeting> {
        let salutation = self.salutation.as_str().as_bytes();
        let layout = GreetingLayout::new(salutation.len(), name.len())?;

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(layout.capacity)
            .map_err(|_| GreeterError::OutOfMemory {
                requested: layout.capacity,
            })?;
        bytes.extend_from_slice(salutation);
        bytes.extend_from_slice(name);
        bytes.push(PUNCTUATION);

        if bytes.len() != layout.len {
            return Err(GreeterError::LengthMismatch {
                expected: layout.len,
                actual: bytes.len(),
            });
        }
        Ok(Greeting { bytes })
    }

    pub fn format(&self, name: &str) -> Result<String> {
        self.format_bytes(name.as_bytes())?.into_string()
    }
}

/// Format a greeting using the salutation chosen at build time.
pub fn format_greeting(name: &str) -> Result<String> {
    Greeter::new(Salutation::from_build()).format(name)
}

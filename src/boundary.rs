//! Native boundary shim
//!
//! Marshals a host-owned string handle into a local buffer, runs the formatter and
//! hands the greeting back as a host-owned string. The host side (C ABI, JNI) plugs
//! in through [`HostStrings`].

use crate::greeting::{Greeter, GreeterError, Greeting};

/// Errors raised while crossing the native boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundaryError {
    #[error("name cannot be null")]
    NullName,

    #[error("Failed to decode host string: {0}")]
    Decode(String),

    #[error("Failed to create host string: {0}")]
    Encode(String),

    #[error("Failed to raise host exception: {0}")]
    Throw(String),

    #[error(transparent)]
    Greeter(#[from] GreeterError),
}

/// What the shim does with a null name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullNamePolicy {
    /// Return the "name cannot be null" sentinel as the greeting
    Sentinel,
    /// Raise the host's invalid-argument error
    Throw,
}

impl NullNamePolicy {
    pub const fn from_build() -> Self {
        if cfg!(feature = "throw-on-null") {
            NullNamePolicy::Throw
        } else {
            NullNamePolicy::Sentinel
        }
    }
}

impl Default for NullNamePolicy {
    fn default() -> Self {
        Self::from_build()
    }
}

/// String conversions for one host runtime
pub trait HostStrings {
    /// Handle received from the host, possibly null
    type Input;
    /// Host-owned string returned to the caller
    type Output;

    fn is_null(&self, name: &Self::Input) -> bool;

    /// Copy the host string into a locally owned buffer
    fn decode(&mut self, name: &Self::Input) -> Result<Vec<u8>, BoundaryError>;

    /// Transfer the greeting into host ownership
    fn encode(&mut self, greeting: Greeting) -> Result<Self::Output, BoundaryError>;

    /// Signal `error` through the host's own mechanism
    fn throw(&mut self, error: &BoundaryError) -> Result<(), BoundaryError>;
}

/// Produce a host-owned greeting for `name`.
///
/// A null name never reaches the formatter. Under [`NullNamePolicy::Throw`] the
/// host error is raised and [`BoundaryError::NullName`] is returned.
pub fn marshal_greeting<H: HostStrings>(
    host: &mut H,
    greeter: &Greeter,
    policy: NullNamePolicy,
    name: &H::Input,
) -> Result<H::Output, BoundaryError> {
    if host.is_null(name) {
        log::debug!("marshal_greeting: null name, policy {:?}", policy);
        return match policy {
            NullNamePolicy::Sentinel => host.encode(Greeting::null_name_sentinel()),
            NullNamePolicy::Throw => {
                let error = BoundaryError::NullName;
                host.throw(&error)?;
                Err(error)
            }
        };
    }

    let decoded = host.decode(name)?;
    let greeting = greeter.format_bytes(&decoded);
    drop(decoded);

    match greeting {
        Ok(greeting) => host.encode(greeting),
        Err(e) => {
            log::warn!("marshal_greeting: formatter failed: {}", e);
            Err(e.into())
        }
    }
}

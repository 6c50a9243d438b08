//! JNI binding for `com.example.greeter.Greeter`
//!
//! ```java
//! public class Greeter {
//!     public static native String sayHello(String name);
//! }
//! ```

use std::ffi::c_void;

use jni::objects::{JClass, JString};
use jni::sys::{jint, jstring, JNI_VERSION_1_8};
use jni::JNIEnv;

use crate::boundary::{marshal_greeting, BoundaryError, HostStrings};
use crate::config::GreeterConfig;
use crate::greeting::Greeting;
use crate::logging::{log_init, LogLevel};

const ILLEGAL_ARGUMENT: &str = "java/lang/IllegalArgumentException";
const RUNTIME_EXCEPTION: &str = "java/lang/RuntimeException";

/// `java.lang.String` conversions through a borrowed `JNIEnv`
struct JniStrings<'a, 'local> {
    env: &'a mut JNIEnv<'local>,
}

impl<'a, 'local> HostStrings for JniStrings<'a, 'local> {
    type Input = JString<'local>;
    type Output = JString<'local>;

    fn is_null(&self, name: &JString<'local>) -> bool {
        name.is_null()
    }

    fn decode(&mut self, name: &JString<'local>) -> Result<Vec<u8>, BoundaryError> {
        // The JavaStr guard releases the JVM's UTF chars when it drops here
        let chars = self
            .env
            .get_string(name)
            .map_err(|e| BoundaryError::Decode(e.to_string()))?;
        // Strict decode: an unpaired surrogate is an error, never a lossy copy
        let decoded = chars
            .to_str()
            .map(|text| text.to_owned().into_bytes())
            .map_err(|e| BoundaryError::Decode(e.to_string()));
        decoded
    }

    fn encode(&mut self, greeting: Greeting) -> Result<JString<'local>, BoundaryError> {
        let text = greeting.into_string()?;
        self.env
            .new_string(text)
            .map_err(|e| BoundaryError::Encode(e.to_string()))
    }

    fn throw(&mut self, error: &BoundaryError) -> Result<(), BoundaryError> {
        self.env
            .throw_new(ILLEGAL_ARGUMENT, error.to_string())
            .map_err(|e| BoundaryError::Throw(e.to_string()))
    }
}

#[no_mangle]
pub extern "system" fn Java_com_example_greeter_Greeter_sayHello<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    name: JString<'local>,
) -> jstring {
    let config = GreeterConfig::from_build();
    let result = {
        let mut host = JniStrings { env: &mut env };
        marshal_greeting(&mut host, &config.greeter(), config.null_policy, &name)
    };

    match result {
        Ok(greeting) => greeting.into_raw(),
        // IllegalArgumentException is already pending
        Err(BoundaryError::NullName) => std::ptr::null_mut(),
        Err(e) => {
            log::error!("Greeter.sayHello: {}", e);
            if !env.exception_check().unwrap_or(false) {
                let _ = env.throw_new(RUNTIME_EXCEPTION, e.to_string());
            }
            std::ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: *mut jni::sys::JavaVM, _reserved: *mut c_void) -> jint {
    log_init(LogLevel::Warning);
    log::debug!(
        "greeter loaded: salutation {:?}",
        GreeterConfig::from_build().salutation
    );
    JNI_VERSION_1_8
}

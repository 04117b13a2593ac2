//! Native functions installed into the global scope.

use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::callable::{Callable, NativeFunction};
use crate::environment::Environment;
use crate::Value;

const NATIVES: &[NativeFunction] = &[NativeFunction::new("clock", 0, clock)];

pub(crate) fn install(globals: &mut Environment) {
    for native in NATIVES {
        globals.define(native.name(), Value::Callable(Rc::new(*native)));
    }
}

/// Seconds since the Unix epoch, with sub-second precision.
fn clock(_arguments: &[Value]) -> Result<Value, String> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| Value::Number(elapsed.as_secs_f64()))
        .map_err(|_| "System clock is set before the Unix epoch.".to_owned())
}

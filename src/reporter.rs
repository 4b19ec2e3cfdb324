use std::io::{self, Write};

use crate::environment::Environment;

/// Variables printed after loading, with their labels.
pub const REPORTED_VARS: [(&str, &str); 3] = [
    ("Project ID", "PROJECT_ID"),
    ("Credentials Path", "GOOGLE_APPLICATION_CREDENTIALS"),
    ("Region", "REGION"),
];

pub const UNSET: &str = "(unset)";

/// Writes the load status and one line per reported variable.
pub fn report<W: Write, E: Environment>(out: &mut W, loaded: bool, env: &E) -> io::Result<()> {
    writeln!(out, "Loaded .env: {}", loaded)?;
    for (label, key) in REPORTED_VARS {
        let value = env.get(key);
        writeln!(out, "{}: {}", label, value.as_deref().unwrap_or(UNSET))?;
    }
    out.flush()
}

//! Output helpers shared by CLI code.
//!
//! Global flags are exported as environment variables by `main` so any
//! module can check them without threading booleans through every call.

/// True when `--json` was passed.
pub fn is_json() -> bool {
    std::env::var("BMN_JSON").is_ok_and(|v| v == "1")
}

/// True when `--quiet` was passed.
pub fn is_quiet() -> bool {
    std::env::var("BMN_QUIET").is_ok_and(|v| v == "1")
}

/// True when `--verbose` was passed.
pub fn is_verbose() -> bool {
    std::env::var("BMN_VERBOSE").is_ok_and(|v| v == "1")
}

/// Print a JSON value on stdout.
pub fn print_json(value: &serde_json::Value) {
    println!("{value}");
}

//! Always-on precondition checks with positional `%s` message templates.

use std::fmt::Display;

/// Substitute each `%s` in `template` with the matching argument, in order.
/// Arguments left over once the placeholders run out are appended in square
/// brackets; placeholders left over once the arguments run out stay as-is.
pub fn format_template(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + 16 * args.len());
    let mut rest = template;
    let mut next = 0usize;
    while next < args.len() {
        match rest.find("%s") {
            Some(pos) => {
                out.push_str(&rest[..pos]);
                out.push_str(&args[next].to_string());
                next += 1;
                rest = &rest[pos + 2..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    if next < args.len() {
        out.push_str(" [");
        out.push_str(&args[next].to_string());
        next += 1;
        while next < args.len() {
            out.push_str(", ");
            out.push_str(&args[next].to_string());
            next += 1;
        }
        out.push(']');
    }
    out
}

/// Panic with the formatted template when `condition` is false.
///
/// Callers treat a failed check as a programmer error, not a recoverable
/// condition.
pub fn verify(condition: bool, template: &str, args: &[&dyn Display]) {
    if !condition {
        panic!("{}", format_template(template, args));
    }
}

/// Variadic form of [`verify`].
#[macro_export]
macro_rules! verify {
    ($cond:expr, $template:expr $(,)?) => {
        $crate::verify::verify($cond, $template, &[])
    };
    ($cond:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $crate::verify::verify($cond, $template, &[$(&$arg),+])
    };
}

//! Fatal startup assertions.
//!
//! [`check!`](crate::check) is for invariants whose failure means the binary
//! itself is broken. It prints one line naming the file, line, function
//! and expression, then aborts the process. It never unwinds and never
//! returns an error.

use std::io::{self, Write};

/// Aborts the process with `[assert-fail]: file:line function(): expr` on
/// stderr when the expression is false.
#[macro_export]
macro_rules! check {
    ($($cond:tt)+) => {
        if !($($cond)+) {
            fn f() {}
            fn type_name_of<T>(_: T) -> &'static str {
                ::core::any::type_name::<T>()
            }
            $crate::check::fail(
                file!(),
                line!(),
                $crate::check::function_name(type_name_of(f)),
                stringify!($($cond)+),
            );
        }
    };
}

/// Trims the path of the marker fn `check!` declares down to the name of
/// the function that encloses it.
pub fn function_name(marker: &'static str) -> &'static str {
    let path = marker.strip_suffix("::f").unwrap_or(marker);
    path.rsplit("::")
        .find(|segment| *segment != "{{closure}}")
        .unwrap_or(path)
}

pub fn write_failure<W: Write>(
    w: &mut W,
    file: &str,
    line: u32,
    function: &str,
    expr: &str,
) -> io::Result<()> {
    writeln!(w, "[assert-fail]: {file}:{line} {function}(): {expr}")
}

#[cold]
pub fn fail(file: &str, line: u32, function: &str, expr: &str) -> ! {
    let _ = write_failure(&mut io::stderr().lock(), file, line, function, expr);
    std::process::abort()
}

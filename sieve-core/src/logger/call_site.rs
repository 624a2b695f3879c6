use std::fmt;

/// Where a log call was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.function, self.line)
    }
}

/// Strips the helper item and any closure frames from a `type_name` path.
#[doc(hidden)]
pub fn enclosing_function(type_name: &'static str) -> &'static str {
    let mut name = type_name.strip_suffix("::__here").unwrap_or(type_name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Captures the current file, enclosing function and line as a [`CallSite`].
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::logger::CallSite::new(
            file!(),
            $crate::logger::call_site::enclosing_function(__type_name_of(__here)),
            line!(),
        )
    }};
}

/// Logs through a [`Logger`](crate::logger::Logger), tagging the message
/// with the caller's location.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(&format!($($arg)+), $crate::call_site!())
    };
}

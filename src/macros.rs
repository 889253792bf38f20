//! Crate-internal macros.

/// Emits a `tracing` event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise; the arguments are not evaluated.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($lvl:ident, $($arg:tt)+) => {
        ::tracing::$lvl!(target: "tether::graph", $($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($lvl:ident, $($arg:tt)+) => {};
}

pub(crate) use trace_event;

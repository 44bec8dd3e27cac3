/// Emits a `trace` record through the `log` facade when the `logging`
/// feature is enabled. Otherwise the arguments are only type-checked.
macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        {
            log::trace!(target: "sentinel_list", $($arg)+);
        }
        #[cfg(not(feature = "logging"))]
        {
            if false {
                let _ = format!($($arg)+);
            }
        }
    };
}

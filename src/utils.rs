// a Macro to log::trace the time since $timer, and restart $timer
#[cfg(feature = "log")]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    // does nothing without log feature
    ($msg: literal, $timer: ident) => {};
}

// starts a timer for re_trace
#[cfg(feature = "log")]
macro_rules! start_timer {
    ($timer: ident) => {
        let $timer = std::time::Instant::now();
    };
}
#[cfg(not(feature = "log"))]
macro_rules! start_timer {
    ($timer: ident) => {};
}

// forwards to log::$level when the log feature is enabled
#[cfg(feature = "log")]
macro_rules! log_event {
    ($level: ident, $($arg: tt)+) => {
        log::$level!($($arg)+)
    };
}
#[cfg(not(feature = "log"))]
macro_rules! log_event {
    ($level: ident, $($arg: tt)+) => {
        ()
    };
}

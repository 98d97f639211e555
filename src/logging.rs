//! Internal logging helpers for structured predicate events.

/// Single logging target for the crate.
pub(crate) const LOG_TARGET: &str = "sindex_predicates";

macro_rules! predicate_log {
    ($level:expr, $event:expr, $fmt:expr $(, $args:expr)* $(,)?) => {{
        if log::log_enabled!(target: crate::logging::LOG_TARGET, $level) {
            log::log!(
                target: crate::logging::LOG_TARGET,
                $level,
                "event={} {}",
                $event,
                format_args!($fmt $(, $args)*)
            );
        }
    }};
}

pub(crate) use predicate_log;

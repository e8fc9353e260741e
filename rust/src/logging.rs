//! Logging macros for the scheduler with verbosity level control.
//!
//! Provides zero-cost logging when disabled (verbosity=0).
//! Levels:
//! - 0: SILENT (nothing)
//! - 1: PHASES (request size, validation failures, final outcome)
//! - 2: STEPS (every frontier pop and every task that becomes ready)
//! - 3: DEBUG (graph dump and frontier contents)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_PHASES: u8 = 1;
pub const VERBOSITY_STEPS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log at PHASES level (verbosity >= 1).
///
/// Used for: request summaries, validation failures, cycle reports.
#[macro_export]
macro_rules! log_phase {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_PHASES {
            eprintln!($($arg)*);
        }
    };
}

/// Log at STEPS level (verbosity >= 2).
///
/// Used for: placement decisions and in-degree reaching zero.
#[macro_export]
macro_rules! log_step {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_STEPS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(VERBOSITY_SILENT < VERBOSITY_PHASES);
        assert!(VERBOSITY_PHASES < VERBOSITY_STEPS);
        assert!(VERBOSITY_STEPS < VERBOSITY_DEBUG);
    }

    #[test]
    fn test_log_macros_compile() {
        let verbosity = VERBOSITY_SILENT;
        log_phase!(verbosity, "phase {}", 1);
        log_step!(verbosity, "step {}", 2);
        log_debug!(verbosity, "debug {}", 3);
    }
}

//! Configuration types for the scheduler.

use pyo3::prelude::*;

/// Configuration for a scheduling run.
///
/// The ordering rule itself is fixed; only diagnostics are tunable.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulingConfig {
    /// Verbosity level: 0=silent, 1=phases, 2=steps, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            verbosity: crate::logging::VERBOSITY_SILENT,
        }
    }
}

#[pymethods]
impl SchedulingConfig {
    #[new]
    #[pyo3(signature = (verbosity=None))]
    fn new(verbosity: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!("SchedulingConfig(verbosity={})", self.verbosity)
    }
}

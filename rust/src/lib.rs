//! Rust implementation of the task scheduling engine.
//!
//! Given tasks with due dates, time estimates and named dependencies, produces a
//! single deterministic execution order that respects every dependency, or
//! reports why no such order exists.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod config;
pub mod graph;
pub mod logging;
mod models;
pub mod scheduler;
pub mod sorting;
pub mod validation;

pub use config::SchedulingConfig;
pub use graph::DependencyGraph;
pub use models::{ScheduleErrorResponse, ScheduleRequest, ScheduleResponse, TaskInput};
pub use scheduler::{generate_schedule, ScheduleError, ScheduleResult};
pub use sorting::{priority_topological_order, FrontierKey, TopologicalOrder};
pub use validation::{validate_tasks, TaskIndex, ValidationError};

/// Generate a recommended execution order for a list of tasks.
///
/// # Arguments
/// * `tasks` - Tasks to order; `None` is treated like an empty list
/// * `config` - Scheduling configuration (defaults to silent)
///
/// # Returns
/// * ScheduleResponse with `recommended_order`
///
/// # Raises
/// * ValueError with the failure message if the tasks list is empty, has
///   duplicate titles, names an unknown dependency, or contains a cycle
#[pyfunction]
#[pyo3(name = "generate_schedule", signature = (tasks, config=None))]
fn py_generate_schedule(
    tasks: Option<Vec<TaskInput>>,
    config: Option<SchedulingConfig>,
) -> PyResult<ScheduleResponse> {
    let request = ScheduleRequest::from(tasks.unwrap_or_default());
    let config = config.unwrap_or_default();

    generate_schedule(&request, &config)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// The taskplan.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<TaskInput>()?;
    m.add_class::<ScheduleResponse>()?;

    // Config types
    m.add_class::<SchedulingConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_generate_schedule, m)?)?;

    Ok(())
}

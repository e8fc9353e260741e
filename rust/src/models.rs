//! Core data types for the scheduling engine.

use chrono::NaiveDateTime;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// A titled unit of work submitted for scheduling.
///
/// `dependencies` are titles of other tasks in the same request; they are
/// resolved by name at validation time.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskInput {
    #[pyo3(get)]
    pub title: String,
    #[pyo3(get, set)]
    pub estimated_hours: u32,
    #[pyo3(get, set)]
    pub due_date: NaiveDateTime,
    #[pyo3(get, set)]
    pub dependencies: Vec<String>,
}

impl TaskInput {
    pub fn new(
        title: impl Into<String>,
        estimated_hours: u32,
        due_date: NaiveDateTime,
        dependencies: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            estimated_hours,
            due_date,
            dependencies,
        }
    }
}

/// Reject titles that are empty or whitespace only.
fn check_title(title: &str) -> PyResult<()> {
    if title.trim().is_empty() {
        return Err(PyValueError::new_err("Task title must not be empty."));
    }
    Ok(())
}

#[pymethods]
impl TaskInput {
    #[new]
    #[pyo3(signature = (title, estimated_hours, due_date, dependencies=None))]
    fn py_new(
        title: String,
        estimated_hours: u32,
        due_date: NaiveDateTime,
        dependencies: Option<Vec<String>>,
    ) -> PyResult<Self> {
        check_title(&title)?;
        Ok(Self::new(
            title,
            estimated_hours,
            due_date,
            dependencies.unwrap_or_default(),
        ))
    }

    #[setter]
    fn set_title(&mut self, title: String) -> PyResult<()> {
        check_title(&title)?;
        self.title = title;
        Ok(())
    }

    fn __repr__(&self) -> String {
        format!(
            "TaskInput(title={:?}, estimated_hours={}, due_date={}, deps={})",
            self.title,
            self.estimated_hours,
            self.due_date,
            self.dependencies.len()
        )
    }
}

/// The tasks submitted in one scheduling call.
///
/// Submission order does not affect the computed order, only which
/// validation failure is reported first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub tasks: Vec<TaskInput>,
}

impl From<Vec<TaskInput>> for ScheduleRequest {
    fn from(tasks: Vec<TaskInput>) -> Self {
        Self { tasks }
    }
}

/// Successful scheduling result.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleResponse {
    /// Every submitted title exactly once, dependencies first.
    #[pyo3(get)]
    pub recommended_order: Vec<String>,
}

#[pymethods]
impl ScheduleResponse {
    fn __repr__(&self) -> String {
        format!("ScheduleResponse(recommended_order={:?})", self.recommended_order)
    }
}

/// Failure body handed back to the service layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleErrorResponse {
    pub error: String,
}

//! Schedule generation: validate, build the graph, sort, assemble the result.

use thiserror::Error;

use crate::config::SchedulingConfig;
use crate::graph::DependencyGraph;
use crate::models::{ScheduleErrorResponse, ScheduleRequest, ScheduleResponse};
use crate::sorting::priority_topological_order;
use crate::validation::{validate_tasks, ValidationError};
use crate::{log_debug, log_phase};

/// Errors that can occur while generating a schedule.
///
/// The display strings are returned verbatim to API consumers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("No tasks provided.")]
    NoTasksProvided,
    #[error("Unknown dependency '{dependency}' for task '{task}'.")]
    UnknownDependency { dependency: String, task: String },
    #[error("Duplicate task title '{0}'.")]
    DuplicateTitle(String),
    #[error("Cycle detected in task dependencies.")]
    CycleDetected,
}

impl From<ValidationError> for ScheduleError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::NoTasksProvided => ScheduleError::NoTasksProvided,
            ValidationError::DuplicateTitle(title) => ScheduleError::DuplicateTitle(title),
            ValidationError::UnknownDependency { dependency, task } => {
                ScheduleError::UnknownDependency { dependency, task }
            }
        }
    }
}

impl ScheduleError {
    /// Failure body for the service boundary.
    pub fn to_response(&self) -> ScheduleErrorResponse {
        ScheduleErrorResponse {
            error: self.to_string(),
        }
    }
}

pub type ScheduleResult = Result<ScheduleResponse, ScheduleError>;

/// Produce a dependency-respecting execution order for a request.
///
/// Among tasks whose dependencies are all placed, the earliest due date goes
/// first, then the smaller estimate, then the smaller title.
///
/// # Returns
/// * `Ok(ScheduleResponse)` holding every title exactly once
/// * `Err(ScheduleError::NoTasksProvided)` for an empty request
/// * `Err(ScheduleError::DuplicateTitle)` if two tasks share a title
/// * `Err(ScheduleError::UnknownDependency)` for the first unresolved dependency
/// * `Err(ScheduleError::CycleDetected)` if some tasks can never become ready
pub fn generate_schedule(request: &ScheduleRequest, config: &SchedulingConfig) -> ScheduleResult {
    let verbosity = config.verbosity;
    let tasks = request.tasks.as_slice();

    log_phase!(verbosity, "Scheduling {} tasks", tasks.len());

    let index = match validate_tasks(tasks) {
        Ok(index) => index,
        Err(err) => {
            log_phase!(verbosity, "Validation failed: {}", err);
            return Err(err.into());
        }
    };

    let graph = DependencyGraph::build(tasks);
    log_debug!(
        verbosity,
        "Graph: {} nodes, {} edges",
        graph.in_degree.len(),
        graph.edge_count()
    );

    let result = priority_topological_order(&index, graph, verbosity);

    if result.order.len() != tasks.len() {
        log_phase!(
            verbosity,
            "Cycle detected: placed {} of {} tasks, blocked: {:?}",
            result.order.len(),
            tasks.len(),
            result.blocked
        );
        return Err(ScheduleError::CycleDetected);
    }

    log_phase!(verbosity, "Recommended order: {:?}", result.order);

    Ok(ScheduleResponse {
        recommended_order: result.order.into_iter().map(str::to_string).collect(),
    })
}

//! Input validation for scheduling requests.
//!
//! Checks, in order, stopping at the first failure:
//! 1. The request contains at least one task
//! 2. No two tasks share a title
//! 3. Every dependency names a submitted task
//!
//! On success the title index built along the way is returned so later
//! phases can resolve dependencies by name without rescanning the input.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::models::TaskInput;

/// Title -> task lookup for one request.
pub type TaskIndex<'a> = FxHashMap<&'a str, &'a TaskInput>;

/// Errors detected before any graph is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No tasks provided.")]
    NoTasksProvided,
    #[error("Duplicate task title '{0}'.")]
    DuplicateTitle(String),
    #[error("Unknown dependency '{dependency}' for task '{task}'.")]
    UnknownDependency { dependency: String, task: String },
}

/// Validate a task list and index it by title.
///
/// Read-only: the tasks are only borrowed.
pub fn validate_tasks(tasks: &[TaskInput]) -> Result<TaskIndex<'_>, ValidationError> {
    if tasks.is_empty() {
        return Err(ValidationError::NoTasksProvided);
    }

    let mut index: TaskIndex<'_> =
        FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());
    for task in tasks {
        if index.insert(task.title.as_str(), task).is_some() {
            return Err(ValidationError::DuplicateTitle(task.title.clone()));
        }
    }

    for task in tasks {
        if let Some(missing) = task
            .dependencies
            .iter()
            .find(|dep| !index.contains_key(dep.as_str()))
        {
            return Err(ValidationError::UnknownDependency {
                dependency: missing.clone(),
                task: task.title.clone(),
            });
        }
    }

    Ok(index)
}

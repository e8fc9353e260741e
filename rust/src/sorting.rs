//! Priority-ordered topological sort.
//!
//! A variant of Kahn's algorithm where the ready set is an ordered set
//! rather than a FIFO queue. Among simultaneously ready tasks the one with
//! the smallest [`FrontierKey`] is placed first:
//! - earliest due date
//! - then fewest estimated hours
//! - then byte-wise smallest title
//!
//! Titles are unique within a request, so the key is a total order and the
//! output is fully deterministic.

use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::graph::DependencyGraph;
use crate::models::TaskInput;
use crate::validation::TaskIndex;
use crate::{log_debug, log_step};

/// Tie-break key for a ready task (lower = placed first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey<'a> {
    pub due_date: NaiveDateTime,
    pub estimated_hours: u32,
    pub title: &'a str,
}

impl<'a> FrontierKey<'a> {
    pub fn for_task(task: &'a TaskInput) -> Self {
        Self {
            due_date: task.due_date,
            estimated_hours: task.estimated_hours,
            title: task.title.as_str(),
        }
    }
}

impl Ord for FrontierKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due_date
            .cmp(&other.due_date)
            .then(self.estimated_hours.cmp(&other.estimated_hours))
            // str ordering is byte-wise, independent of locale
            .then_with(|| self.title.cmp(other.title))
    }
}

impl PartialOrd for FrontierKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Output of the sort: placed titles plus any left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologicalOrder<'a> {
    /// Titles in placement order.
    pub order: Vec<&'a str>,
    /// Titles whose in-degree never reached zero, sorted. Non-empty only when
    /// the graph has a cycle or depends on one.
    pub blocked: Vec<&'a str>,
}

impl TopologicalOrder<'_> {
    pub fn is_complete(&self) -> bool {
        self.blocked.is_empty()
    }
}

/// Drain the graph in priority order.
///
/// Consumes the graph since in-degrees are decremented in place.
pub fn priority_topological_order<'a>(
    index: &TaskIndex<'a>,
    mut graph: DependencyGraph<'a>,
    verbosity: u8,
) -> TopologicalOrder<'a> {
    let mut frontier: BTreeSet<FrontierKey<'a>> = graph
        .roots()
        .filter_map(|title| index.get(title).copied())
        .map(FrontierKey::for_task)
        .collect();

    log_debug!(
        verbosity,
        "Initial frontier: {:?}",
        frontier.iter().map(|k| k.title).collect::<Vec<_>>()
    );

    let mut order: Vec<&'a str> = Vec::with_capacity(index.len());

    while let Some(next) = frontier.pop_first() {
        log_step!(
            verbosity,
            "Placing '{}' (due {}, {}h) at position {}",
            next.title,
            next.due_date,
            next.estimated_hours,
            order.len()
        );
        order.push(next.title);

        let Some(dependents) = graph.dependents.get(next.title) else {
            continue;
        };

        for &dependent in dependents {
            let Some(degree) = graph.in_degree.get_mut(dependent) else {
                continue;
            };
            *degree -= 1;
            if *degree == 0 {
                if let Some(&task) = index.get(dependent) {
                    log_step!(verbosity, "  '{}' is now ready", dependent);
                    frontier.insert(FrontierKey::for_task(task));
                }
            }
        }

        log_debug!(
            verbosity,
            "  Frontier: {:?}",
            frontier.iter().map(|k| k.title).collect::<Vec<_>>()
        );
    }

    if order.len() == index.len() {
        return TopologicalOrder {
            order,
            blocked: Vec::new(),
        };
    }

    let mut blocked: Vec<&'a str> = graph
        .in_degree
        .iter()
        .filter(|(_, &degree)| degree > 0)
        .map(|(&title, _)| title)
        .collect();
    blocked.sort_unstable();

    TopologicalOrder { order, blocked }
}

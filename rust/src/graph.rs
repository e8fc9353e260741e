//! Dependency graph construction.

use rustc_hash::FxHashMap;

use crate::models::TaskInput;

/// In-degree counts and dependency -> dependent adjacency, keyed by title.
///
/// Borrows titles from the request; built per call and dropped with it.
#[derive(Debug, Clone)]
pub struct DependencyGraph<'a> {
    /// Number of unresolved dependency edges per task.
    pub in_degree: FxHashMap<&'a str, usize>,
    /// Tasks that depend on each task.
    pub dependents: FxHashMap<&'a str, Vec<&'a str>>,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph from a validated task list.
    ///
    /// Every dependency entry contributes one edge, so a dependency listed
    /// twice by the same task counts twice toward its in-degree.
    pub fn build(tasks: &'a [TaskInput]) -> Self {
        let mut in_degree: FxHashMap<&'a str, usize> =
            FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());
        let mut dependents: FxHashMap<&'a str, Vec<&'a str>> =
            FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());

        for task in tasks {
            in_degree.insert(task.title.as_str(), 0);
            dependents.insert(task.title.as_str(), Vec::new());
        }

        for task in tasks {
            for dep in &task.dependencies {
                if let Some(list) = dependents.get_mut(dep.as_str()) {
                    list.push(task.title.as_str());
                }
                if let Some(degree) = in_degree.get_mut(task.title.as_str()) {
                    *degree += 1;
                }
            }
        }

        Self {
            in_degree,
            dependents,
        }
    }

    /// Titles with no dependencies, in unspecified order.
    pub fn roots(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(&title, _)| title)
    }

    /// Total number of dependency edges.
    pub fn edge_count(&self) -> usize {
        self.dependents.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_task(title: &str, deps: &[&str]) -> TaskInput {
        let due = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        TaskInput::new(title, 1, due, deps.iter().map(|d| d.to_string()).collect())
    }

    #[test]
    fn test_isolated_tasks() {
        let tasks = vec![make_task("a", &[]), make_task("b", &[])];
        let graph = DependencyGraph::build(&tasks);

        assert_eq!(graph.in_degree.get("a"), Some(&0));
        assert_eq!(graph.in_degree.get("b"), Some(&0));
        assert!(graph.dependents.get("a").unwrap().is_empty());
        assert_eq!(graph.edge_count(), 0);

        let mut roots: Vec<&str> = graph.roots().collect();
        roots.sort_unstable();
        assert_eq!(roots, vec!["a", "b"]);
    }

    #[test]
    fn test_diamond_edges() {
        // d depends on b and c, which both depend on a
        let tasks = vec![
            make_task("a", &[]),
            make_task("b", &["a"]),
            make_task("c", &["a"]),
            make_task("d", &["b", "c"]),
        ];
        let graph = DependencyGraph::build(&tasks);

        assert_eq!(graph.in_degree.get("a"), Some(&0));
        assert_eq!(graph.in_degree.get("b"), Some(&1));
        assert_eq!(graph.in_degree.get("d"), Some(&2));
        assert_eq!(graph.dependents.get("a"), Some(&vec!["b", "c"]));
        assert_eq!(graph.dependents.get("c"), Some(&vec!["d"]));
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.roots().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_repeated_dependency_counts_each_entry() {
        let tasks = vec![make_task("a", &[]), make_task("b", &["a", "a"])];
        let graph = DependencyGraph::build(&tasks);

        assert_eq!(graph.in_degree.get("b"), Some(&2));
        assert_eq!(graph.dependents.get("a"), Some(&vec!["b", "b"]));
    }

    #[test]
    fn test_self_dependency_has_no_root() {
        let tasks = vec![make_task("a", &["a"])];
        let graph = DependencyGraph::build(&tasks);

        assert_eq!(graph.in_degree.get("a"), Some(&1));
        assert_eq!(graph.roots().count(), 0);
    }
}

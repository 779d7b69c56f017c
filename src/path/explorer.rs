//! Recursive, task-per-direction walk over the grid.
//!
//! Every branch owns its `PointSet` outright. When a branch can move in more
//! than one direction it hands a clone to each new child and moves its own
//! copy into the last one, so no two live branches ever share a set.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use super::collector::Emission;
use super::scope::ExitScope;
use crate::app::step_log;
use crate::grid::{Bounds, GridError, Point, PointSet};

/// State shared by every tree of one search.
#[derive(Debug)]
pub(crate) struct Search {
    bounds: Bounds,
    abort: CancellationToken,
    tracker: TaskTracker,
    results: UnboundedSender<Emission>,
    branches: AtomicU64,
    trace_steps: bool,
}

impl Search {
    pub(crate) fn new(
        bounds: Bounds,
        tracker: TaskTracker,
        results: UnboundedSender<Emission>,
        trace_steps: bool,
    ) -> Self {
        Self {
            bounds,
            abort: CancellationToken::new(),
            tracker,
            results,
            branches: AtomicU64::new(0),
            trace_steps,
        }
    }

    /// Number of branches that have started so far.
    pub(crate) fn branches(&self) -> u64 {
        self.branches.load(Ordering::Relaxed)
    }

    fn emit(&self, emission: Emission) {
        if self.results.send(emission).is_err() {
            // Only happens if the collector is gone, at which point the
            // result would be dropped anyway.
            crate::app::logger::log_verbose_error_args(format_args!(
                "result stream closed before the search finished"
            ));
        }
    }

    /// Reports an invariant violation and stops every tree.
    fn fault(&self, error: GridError) {
        self.emit(Err(error));
        self.abort.cancel();
    }
}

/// One exploration tree: a target (or none, for a whole-grid walk) plus the
/// scope that stops it.
#[derive(Debug)]
pub(crate) struct Walk {
    search: Arc<Search>,
    target: Option<Point>,
    scope: ExitScope,
}

impl Walk {
    /// A tree that succeeds once a complete path stands on `exit`.
    pub(crate) fn towards(search: Arc<Search>, exit: Point) -> Self {
        let scope = ExitScope::child_of(&search.abort);
        Self {
            search,
            target: Some(exit),
            scope,
        }
    }

    /// A tree that reports every boundary dead end reached by a complete path.
    pub(crate) fn whole_grid(search: Arc<Search>) -> Self {
        let scope = ExitScope::child_of(&search.abort);
        Self {
            search,
            target: None,
            scope,
        }
    }

    /// Spawns the root branch at `start` with an empty `PointSet`.
    pub(crate) fn start(self, start: Point) {
        let visited = PointSet::new(self.search.bounds);
        Branch {
            walk: Arc::new(self),
            visited,
            pos: start,
        }
        .spawn();
    }
}

/// One line of exploration: where it stands and what it has stepped on.
struct Branch {
    walk: Arc<Walk>,
    visited: PointSet,
    pos: Point,
}

impl Branch {
    fn spawn(self) {
        // TaskTracker registers the task before it is scheduled, and the
        // parent is still tracked while it spawns, so the tracker can never
        // read as empty while children are pending.
        let tracker = self.walk.search.tracker.clone();
        tracker.spawn(async move { self.explore() });
    }

    fn explore(self) {
        self.walk.search.branches.fetch_add(1, Ordering::Relaxed);
        let target = self.walk.target;
        match target {
            Some(exit) => self.explore_towards(exit),
            None => self.explore_whole_grid(),
        }
    }

    fn explore_towards(mut self, exit: Point) {
        let walk = Arc::clone(&self.walk);
        step_log!(
            walk.search.trace_steps,
            "at ({}, {}), exit at ({}, {})",
            self.pos.row,
            self.pos.column,
            exit.row,
            exit.column
        );

        if walk.scope.is_cancelled() {
            return;
        }

        if let Err(e) = self.visited.set(self.pos) {
            walk.search.fault(e);
            return;
        }

        if self.pos == exit {
            // Reaching the exit early is a dead end; only a complete path
            // counts, and only the branch that trips the scope reports it.
            if self.visited.is_complete() && !walk.scope.is_cancelled() && walk.scope.cancel()
            {
                walk.search.emit(Ok(self.pos));
            }
            return;
        }

        self.fan_out();
    }

    fn explore_whole_grid(mut self) {
        let walk = Arc::clone(&self.walk);
        step_log!(
            walk.search.trace_steps,
            "at ({}, {})",
            self.pos.row,
            self.pos.column
        );

        if walk.scope.is_cancelled() {
            return;
        }

        if let Err(e) = self.visited.set(self.pos) {
            walk.search.fault(e);
            return;
        }

        let bounds = walk.search.bounds;
        if self.visited.open_neighbours(self.pos).next().is_none() {
            if bounds.is_boundary(self.pos) && self.visited.is_complete() {
                walk.search.emit(Ok(self.pos));
            }
            return;
        }

        self.fan_out();
    }

    /// Spawns one child per open neighbour.
    fn fan_out(self) {
        let next: Vec<Point> = self.visited.open_neighbours(self.pos).collect();
        let Branch { walk, visited, .. } = self;
        if let Some((&last, rest)) = next.split_last() {
            for &pos in rest {
                Branch {
                    walk: Arc::clone(&walk),
                    visited: visited.clone(),
                    pos,
                }
                .spawn();
            }
            Branch {
                walk,
                visited,
                pos: last,
            }
            .spawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    async fn run_walks(bounds: Bounds, targets: Option<Vec<Point>>) -> (Vec<Emission>, u64) {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let tracker = TaskTracker::new();
        let search = Arc::new(Search::new(bounds, tracker.clone(), tx, false));
        match targets {
            Some(targets) => {
                for exit in targets {
                    Walk::towards(Arc::clone(&search), exit).start(Point::origin());
                }
            }
            None => Walk::whole_grid(Arc::clone(&search)).start(Point::origin()),
        }
        tracker.close();
        tracker.wait().await;
        let branches = search.branches();
        drop(search);

        let mut emissions = Vec::new();
        while let Some(emission) = rx.recv().await {
            emissions.push(emission);
        }
        (emissions, branches)
    }

    #[tokio::test]
    async fn single_row_reaches_far_end_only() {
        let bounds = Bounds::new(3, 1).unwrap();
        let (emissions, _) = run_walks(bounds, Some(bounds.boundary())).await;
        assert_eq!(emissions, vec![Ok(Point::new(0, 2))]);
    }

    #[tokio::test]
    async fn start_as_target_is_not_complete() {
        let bounds = Bounds::new(2, 1).unwrap();
        let (emissions, branches) = run_walks(bounds, Some(vec![Point::origin()])).await;
        assert!(emissions.is_empty());
        // The root stands on its own target and stops there.
        assert_eq!(branches, 1);
    }

    #[tokio::test]
    async fn each_target_emits_at_most_once() {
        let bounds = Bounds::new(3, 3).unwrap();
        let (emissions, _) = run_walks(bounds, Some(vec![Point::new(2, 2)])).await;
        assert_eq!(emissions, vec![Ok(Point::new(2, 2))]);
    }

    #[tokio::test]
    async fn whole_grid_reports_boundary_dead_ends() {
        let bounds = Bounds::new(2, 2).unwrap();
        let (emissions, branches) = run_walks(bounds, None).await;
        let mut exits: Vec<Point> = emissions.into_iter().map(|e| e.unwrap()).collect();
        exits.sort();
        // Two snakes from the corner, ending at (1,0) and (0,1).
        assert_eq!(exits, vec![Point::new(0, 1), Point::new(1, 0)]);
        assert_eq!(branches, 7);
    }

    #[tokio::test]
    async fn out_of_bounds_start_is_reported_as_fault() {
        let bounds = Bounds::new(2, 2).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let tracker = TaskTracker::new();
        let search = Arc::new(Search::new(bounds, tracker.clone(), tx, false));
        let abort = search.abort.clone();
        Walk::towards(Arc::clone(&search), Point::new(1, 1)).start(Point::new(4, 4));
        tracker.close();
        tracker.wait().await;
        drop(search);

        assert!(matches!(
            rx.recv().await,
            Some(Err(GridError::OutOfBounds { .. }))
        ));
        assert!(rx.recv().await.is_none());
        assert!(abort.is_cancelled());
    }
}

// Copyright (c) 2025 The Caliper Authors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Monitoring combinators.
//!
//! Provides [`CompositeMonitor`], a fan-out monitor that forwards every
//! event to its children in insertion order. This lets logging, metrics
//! collection, and test instrumentation coexist without coupling them to
//! the solver.

use crate::monitor::search_monitor::{Progress, SearchMonitor};
use crate::stats::SolverStatistics;
use caliper_model::problem::Problem;
use caliper_model::region::IntervalBox;
use caliper_model::solution::Classification;

/// A monitor that aggregates multiple monitors and forwards events to all
/// of them.
#[derive(Default)]
pub struct CompositeMonitor<'a> {
    monitors: Vec<Box<dyn SearchMonitor + 'a>>,
}

impl<'a> CompositeMonitor<'a> {
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a composite with pre-allocated space for `capacity` children.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a child monitor.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Returns the child monitors.
    #[inline]
    pub fn monitors(&self) -> &[Box<dyn SearchMonitor + 'a>] {
        &self.monitors
    }
}

impl SearchMonitor for CompositeMonitor<'_> {
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, problem: &Problem) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(problem);
        }
    }

    fn on_box_classified(
        &mut self,
        region: &IntervalBox,
        classification: Classification,
        statistics: &SolverStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_box_classified(region, classification, statistics);
        }
    }

    fn on_bisect(&mut self, region: &IntervalBox, dimension: usize, statistics: &SolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_bisect(region, dimension, statistics);
        }
    }

    fn on_certificate(
        &mut self,
        region: &IntervalBox,
        combination: usize,
        statistics: &SolverStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_certificate(region, combination, statistics);
        }
    }

    fn on_progress(&mut self, progress: &Progress) {
        for monitor in &mut self.monitors {
            monitor.on_progress(progress);
        }
    }

    fn on_exit_search(&mut self, statistics: &SolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct CountingMonitor {
        progress_events: Rc<RefCell<u64>>,
    }

    impl SearchMonitor for CountingMonitor {
        fn name(&self) -> &str {
            "CountingMonitor"
        }

        fn on_progress(&mut self, _progress: &Progress) {
            *self.progress_events.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_events_fan_out_to_all_children() {
        let first = Rc::new(RefCell::new(0));
        let second = Rc::new(RefCell::new(0));

        let mut composite = CompositeMonitor::new();
        composite.add_monitor(CountingMonitor {
            progress_events: Rc::clone(&first),
        });
        composite.add_monitor(CountingMonitor {
            progress_events: Rc::clone(&second),
        });

        let progress = Progress {
            precision: 0.0,
            f_min: 0.0,
            f_max: 0.0,
            explored: 1,
        };
        composite.on_progress(&progress);
        composite.on_progress(&progress);

        assert_eq!(*first.borrow(), 2);
        assert_eq!(*second.borrow(), 2);
        assert_eq!(composite.monitors().len(), 2);
    }
}

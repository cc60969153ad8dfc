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

use crate::monitor::search_monitor::{Progress, SearchMonitor};
use crate::stats::SolverStatistics;
use caliper_model::problem::Problem;
use caliper_model::region::IntervalBox;
use caliper_model::solution::Classification;
use std::time::{Duration, Instant};

/// A monitor that prints a throttled progress table to stdout.
///
/// In verbose mode every classified box is printed with its coordinates,
/// matching the per-box debug output of interactive runs.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    verbose: bool,
}

impl LogMonitor {
    /// Creates a monitor that logs at most once per `log_interval`.
    pub fn new(log_interval: Duration, verbose: bool) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            verbose,
        }
    }

    /// Creates a verbose monitor that also prints each classified box.
    pub fn verbose() -> Self {
        Self::new(Duration::from_secs(1), true)
    }

    fn print_header(&self) {
        println!(
            "{:<9} | {:<10} | {:<22} | {:<22} | {:<12}",
            "Elapsed", "Boxes", "fMin", "fMax", "Precision"
        );
        println!("{}", "-".repeat(85));
    }

    fn log_line(&mut self, progress: &Progress) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();
        let elapsed_field = format!("{:.1}s", elapsed);

        println!(
            "{:<9} | {:<10} | {:<22} | {:<22} | {:<12}",
            elapsed_field, progress.explored, progress.f_min, progress.f_max, progress.precision
        );

        self.last_log_time = now;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), false)
    }
}

impl SearchMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, problem: &Problem) {
        println!("{}", problem);
        self.print_header();
    }

    fn on_box_classified(
        &mut self,
        region: &IntervalBox,
        classification: Classification,
        statistics: &SolverStatistics,
    ) {
        if self.verbose {
            println!("{} => {} {}", statistics.boxes_explored, classification, region);
        }
    }

    fn on_progress(&mut self, progress: &Progress) {
        if self.last_log_time.elapsed() >= self.log_interval {
            self.log_line(progress);
        }
    }

    fn on_exit_search(&mut self, statistics: &SolverStatistics) {
        println!("{}", statistics);
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, verbose: {})",
            self.log_interval.as_secs(),
            self.verbose
        )
    }
}

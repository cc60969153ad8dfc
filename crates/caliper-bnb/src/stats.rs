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

//! Lightweight counters and timing for one solver run.

use std::time::Duration;

/// Statistics collected during the execution of the branch-and-bound solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverStatistics {
    /// Total boxes popped from the worklist.
    pub boxes_explored: u64,
    /// Boxes that were split into two children.
    pub bisections: u64,
    /// Boxes classified certainly feasible and retained.
    pub accepted: u64,
    /// Boxes classified infeasible or dominated and discarded.
    pub rejected: u64,
    /// Boxes retained without a definite verdict.
    pub undetermined: u64,
    /// Monotonicity certificates established by the gradient shortcut.
    pub gradient_certificates: u64,
    /// Objective evaluations at degenerate corner boxes.
    pub corner_evaluations: u64,
    /// Undefined-xlog evaluations recovered during the run.
    pub xlog_recoveries: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl Default for SolverStatistics {
    fn default() -> Self {
        Self {
            boxes_explored: 0,
            bisections: 0,
            accepted: 0,
            rejected: 0,
            undetermined: 0,
            gradient_certificates: 0,
            corner_evaluations: 0,
            xlog_recoveries: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl SolverStatistics {
    #[inline]
    pub fn on_box_explored(&mut self) {
        self.boxes_explored = self.boxes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_bisection(&mut self) {
        self.bisections = self.bisections.saturating_add(1);
    }

    #[inline]
    pub fn on_accepted(&mut self) {
        self.accepted = self.accepted.saturating_add(1);
    }

    #[inline]
    pub fn on_rejected(&mut self) {
        self.rejected = self.rejected.saturating_add(1);
    }

    #[inline]
    pub fn on_undetermined(&mut self) {
        self.undetermined = self.undetermined.saturating_add(1);
    }

    #[inline]
    pub fn on_gradient_certificate(&mut self) {
        self.gradient_certificates = self.gradient_certificates.saturating_add(1);
    }

    #[inline]
    pub fn on_corner_evaluation(&mut self) {
        self.corner_evaluations = self.corner_evaluations.saturating_add(1);
    }

    #[inline]
    pub fn set_xlog_recoveries(&mut self, count: u64) {
        self.xlog_recoveries = count;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Caliper-BnB Solver Statistics:")?;
        writeln!(f, "  Boxes explored:         {}", self.boxes_explored)?;
        writeln!(f, "  Bisections:             {}", self.bisections)?;
        writeln!(f, "  Accepted:               {}", self.accepted)?;
        writeln!(f, "  Rejected:               {}", self.rejected)?;
        writeln!(f, "  Undetermined:           {}", self.undetermined)?;
        writeln!(f, "  Gradient certificates:  {}", self.gradient_certificates)?;
        writeln!(f, "  Corner evaluations:     {}", self.corner_evaluations)?;
        writeln!(f, "  Recovered xlog calls:   {}", self.xlog_recoveries)?;
        writeln!(f, "  Total time:             {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_increment() {
        let mut stats = SolverStatistics::default();

        stats.on_box_explored();
        stats.on_box_explored();
        stats.on_bisection();
        stats.on_accepted();
        stats.on_rejected();
        stats.on_undetermined();
        stats.on_gradient_certificate();
        stats.on_corner_evaluation();
        stats.set_xlog_recoveries(7);

        assert_eq!(stats.boxes_explored, 2);
        assert_eq!(stats.bisections, 1);
        assert_eq!(stats.accepted, 1);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.undetermined, 1);
        assert_eq!(stats.gradient_certificates, 1);
        assert_eq!(stats.corner_evaluations, 1);
        assert_eq!(stats.xlog_recoveries, 7);
    }

    #[test]
    fn test_display_lists_every_counter() {
        let stats = SolverStatistics::default();
        let rendered = format!("{}", stats);

        assert!(rendered.contains("Boxes explored"));
        assert!(rendered.contains("Gradient certificates"));
        assert!(rendered.contains("Recovered xlog calls"));
    }
}

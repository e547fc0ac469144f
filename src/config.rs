// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// When [`crate::Complex::apply_matching`] verifies that the matching is
/// acyclic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcyclicityCheck {
    /// After every edge added to the matching, from the lower cell of that
    /// edge. A cycle is reported at the first edge closing it.
    #[default]
    EveryEdge,
    /// Once, over all adjacent grade pairs, after every edge has been added.
    Batch,
}

/// Options controlling how externally supplied matchings are applied.
///
/// The defaults check acyclicity after every edge and do not log cycles. The
/// type is serializable so that a driver can store it next to a persisted
/// matching.
///
/// ```rust
/// use dmorse::{AcyclicityCheck, ReductionConfig};
///
/// let config = ReductionConfig::default()
///     .with_acyclicity(AcyclicityCheck::Batch)
///     .with_trace_cycles(true);
/// assert_eq!(config.acyclicity, AcyclicityCheck::Batch);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReductionConfig {
    /// When to run the acyclicity check.
    pub acyclicity: AcyclicityCheck,
    /// Log every cell of a detected cycle at `warn` level.
    pub trace_cycles: bool,
}

impl ReductionConfig {
    /// Set the acyclicity check policy.
    #[must_use]
    pub fn with_acyclicity(mut self, acyclicity: AcyclicityCheck) -> Self {
        self.acyclicity = acyclicity;
        self
    }

    /// Enable or disable logging of the cells along a detected cycle.
    #[must_use]
    pub fn with_trace_cycles(mut self, trace_cycles: bool) -> Self {
        self.trace_cycles = trace_cycles;
        self
    }
}

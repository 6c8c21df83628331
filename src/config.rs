//! Planner flags and the tunables of the strategy selector.

/// Planning-mode flags supplied by the host planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerFlags {
    /// Consider plans that are only worth it after measuring: non-square transposes, vector
    /// loops with poor locality, large scratch buffers.
    pub allow_expensive: bool,
    /// Keep scratch buffers small even when expensive plans are allowed.
    pub conserve_memory: bool,
}

impl PlannerFlags {
    /// Cheap estimation mode: only plans that are obviously reasonable.
    pub const ESTIMATE: Self = Self {
        allow_expensive: false,
        conserve_memory: false,
    };

    /// Exhaustive mode: every structurally valid plan.
    pub const PATIENT: Self = Self {
        allow_expensive: true,
        conserve_memory: false,
    };

    pub const fn conserving_memory(self) -> Self {
        Self {
            conserve_memory: true,
            ..self
        }
    }

    /// Whether scratch buffers of any size are acceptable.
    pub(crate) const fn unbounded_buffers(self) -> bool {
        self.allow_expensive && !self.conserve_memory
    }
}

impl Default for PlannerFlags {
    fn default() -> Self {
        Self::PATIENT
    }
}

/// Tuned thresholds of the selector. The defaults are the values the strategies were tuned
/// with; nobody has shown them to be optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectorConfig {
    /// Largest scratch buffer, in elements, accepted under a conservative mode.
    pub max_buffer: usize,
    /// A larger buffer is still accepted while `buffer * buffer_fraction` stays below the
    /// total array size.
    pub buffer_fraction: usize,
    /// Square arrays with at least this many scalars per row are too big for the plain loop
    /// transposes outside of expensive mode.
    pub ugly_cutoff: usize,
}

impl SelectorConfig {
    pub const fn with_max_buffer(self, max_buffer: usize) -> Self {
        Self { max_buffer, ..self }
    }

    pub const fn with_buffer_fraction(self, buffer_fraction: usize) -> Self {
        Self {
            buffer_fraction,
            ..self
        }
    }

    pub const fn with_ugly_cutoff(self, ugly_cutoff: usize) -> Self {
        Self { ugly_cutoff, ..self }
    }

    /// Whether a scratch buffer of `nbuf` elements is acceptable for an array of `total` cells.
    pub(crate) fn buffer_ok(&self, flags: PlannerFlags, nbuf: usize, total: usize) -> bool {
        flags.unbounded_buffers()
            || nbuf <= self.max_buffer
            || nbuf.saturating_mul(self.buffer_fraction) < total
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_buffer: 65536,
            buffer_fraction: 8,
            ugly_cutoff: 2000,
        }
    }
}

//! Per-line quantity limits.

use std::num::NonZeroU32;

/// How many units of one product a cart line may hold.
///
/// Unlimited by default. With a limit set, larger requests are clamped to
/// the limit rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuantityPolicy {
    max_per_line: Option<NonZeroU32>,
}

impl QuantityPolicy {
    /// No per-line limit.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self { max_per_line: None }
    }

    /// At most `max` units per line.
    #[must_use]
    pub const fn with_max(max: NonZeroU32) -> Self {
        Self {
            max_per_line: Some(max),
        }
    }

    /// The configured limit, if any.
    #[must_use]
    pub const fn max_per_line(&self) -> Option<NonZeroU32> {
        self.max_per_line
    }

    /// Clamp a positive requested quantity to what the policy allows.
    #[must_use]
    pub fn clamp(&self, requested: u64) -> u32 {
        let ceiling = self.max_per_line.map_or(u32::MAX, NonZeroU32::get);
        u32::try_from(requested).map_or(ceiling, |q| q.min(ceiling))
    }
}

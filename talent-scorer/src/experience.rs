//! Experience fit as a coarse step function.

/// Years beyond the job's maximum a candidate may hold before being marked
/// overqualified.
pub const OVERQUALIFIED_MARGIN: u32 = 3;

/// Tier a candidate's experience falls into for a job.
///
/// The tiers map onto four fixed scores; see [`ExperienceFit::score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceFit {
    /// Meets the minimum without exceeding the maximum by more than
    /// [`OVERQUALIFIED_MARGIN`] years.
    Qualified,
    /// Exceeds the maximum by more than [`OVERQUALIFIED_MARGIN`] years.
    Overqualified,
    /// One year short of the minimum.
    SlightlyUnder,
    /// Two years short of the minimum.
    Under,
    /// Three or more years short of the minimum.
    FarUnder,
}

impl ExperienceFit {
    /// Classify `candidate` years against a `required` minimum and optional
    /// `max`.
    ///
    /// A present maximum of zero still counts as a bound, so four years
    /// against `Some(0)` is overqualified. The job store's own screening
    /// treats a zero maximum as unset; this tier function deliberately does
    /// not, and callers wanting that behaviour should pass `None`.
    ///
    /// # Examples
    /// ```
    /// use talent_scorer::ExperienceFit;
    ///
    /// assert_eq!(ExperienceFit::classify(5, 3, None), ExperienceFit::Qualified);
    /// assert_eq!(ExperienceFit::classify(14, 3, Some(10)), ExperienceFit::Overqualified);
    /// assert_eq!(ExperienceFit::classify(1, 3, None), ExperienceFit::Under);
    /// ```
    #[must_use]
    pub const fn classify(candidate: u32, required: u32, max: Option<u32>) -> Self {
        if candidate >= required {
            return match max {
                Some(limit) if candidate > limit.saturating_add(OVERQUALIFIED_MARGIN) => {
                    Self::Overqualified
                }
                _ => Self::Qualified,
            };
        }
        match required.abs_diff(candidate) {
            0 | 1 => Self::SlightlyUnder,
            2 => Self::Under,
            _ => Self::FarUnder,
        }
    }

    /// Score attached to the tier.
    #[must_use]
    pub const fn score(self) -> f32 {
        match self {
            Self::Qualified => 1.0,
            Self::Overqualified | Self::SlightlyUnder => 0.8,
            Self::Under => 0.6,
            Self::FarUnder => 0.3,
        }
    }
}

/// Score how well `candidate` years fit a job asking for `required` years
/// and at most `max` years.
///
/// Always returns one of `1.0`, `0.8`, `0.6` or `0.3`.
#[must_use]
pub const fn experience_match(candidate: u32, required: u32, max: Option<u32>) -> f32 {
    ExperienceFit::classify(candidate, required, max).score()
}

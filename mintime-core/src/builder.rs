//! Builder utilities for configuring threshold searches.
//!
//! Exposes the knobs a [`ThresholdSearch`] honours and validates them before
//! a search instance is constructed.

use std::{num::NonZeroUsize, time::Duration};

use crate::{PathCompression, Result, error::ThresholdError, search::ThresholdSearch};

/// Configures and constructs [`ThresholdSearch`] instances.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use mintime_core::{PathCompression, ThresholdSearchBuilder};
///
/// let search = ThresholdSearchBuilder::new()
///     .with_min_components(3)
///     .with_path_compression(PathCompression::SingleLevel)
///     .with_time_budget(Duration::from_secs(1))
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(search.min_components().get(), 3);
/// assert_eq!(search.path_compression(), PathCompression::SingleLevel);
/// assert_eq!(search.time_budget(), Some(Duration::from_secs(1)));
/// ```
#[derive(Debug, Clone)]
pub struct ThresholdSearchBuilder {
    min_components: usize,
    compression: PathCompression,
    time_budget: Option<Duration>,
}

impl Default for ThresholdSearchBuilder {
    fn default() -> Self {
        Self {
            min_components: 1,
            compression: PathCompression::Full,
            time_budget: None,
        }
    }
}

impl ThresholdSearchBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use mintime_core::{PathCompression, ThresholdSearchBuilder};
    ///
    /// let builder = ThresholdSearchBuilder::new();
    /// assert_eq!(builder.min_components(), 1);
    /// assert_eq!(builder.path_compression(), PathCompression::Full);
    /// assert_eq!(builder.time_budget(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of components a candidate must produce to be
    /// accepted.
    #[must_use]
    pub fn with_min_components(mut self, min_components: usize) -> Self {
        self.min_components = min_components;
        self
    }

    /// Returns the configured component target.
    #[must_use]
    pub const fn min_components(&self) -> usize {
        self.min_components
    }

    /// Selects how union-find lookups compress paths.
    #[must_use]
    pub fn with_path_compression(mut self, compression: PathCompression) -> Self {
        self.compression = compression;
        self
    }

    /// Returns the configured compression mode.
    #[must_use]
    pub const fn path_compression(&self) -> PathCompression {
        self.compression
    }

    /// Bounds the wall-clock time a single search may take.
    ///
    /// The budget is checked before every probe; an exhausted budget aborts
    /// the search with [`ThresholdError::DeadlineExceeded`].
    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Returns the configured time budget, if any.
    #[must_use]
    pub const fn time_budget(&self) -> Option<Duration> {
        self.time_budget
    }

    /// Validates the configuration and constructs a [`ThresholdSearch`].
    ///
    /// # Errors
    /// Returns [`ThresholdError::InvalidMinComponents`] when the component
    /// target is zero.
    ///
    /// # Examples
    /// ```
    /// use mintime_core::{ThresholdError, ThresholdSearchBuilder};
    ///
    /// let err = ThresholdSearchBuilder::new()
    ///     .with_min_components(0)
    ///     .build()
    ///     .unwrap_err();
    /// assert_eq!(err, ThresholdError::InvalidMinComponents { got: 0 });
    /// ```
    pub fn build(self) -> Result<ThresholdSearch> {
        let min_components = NonZeroUsize::new(self.min_components)
            .ok_or(ThresholdError::InvalidMinComponents { got: 0 })?;

        Ok(ThresholdSearch::new(
            min_components,
            self.compression,
            self.time_budget,
        ))
    }
}

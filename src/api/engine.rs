use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::{
    BreakPointSet, DateSeries, DateSource, InverseMappingPolicy, SliderGeometry,
    ensure_record_count, rebuild_end_points,
};
use crate::error::SliderResult;
use crate::extensions::SliderObserver;
use crate::interaction::{Hover, TrackingPhase, TrackingState};

use super::SliderConfig;

/// Main orchestration facade consumed by host UI layers.
///
/// `TimeSliderEngine` owns the date source, the control geometry, the current
/// break points and selection, and the tracking state. The UI layer feeds it
/// plain offsets and queries it for dates, offsets and tick kinds.
pub struct TimeSliderEngine<S: DateSource> {
    pub(super) source: S,
    pub(super) config: SliderConfig,
    pub(super) break_points: BreakPointSet,
    pub(super) selected_index: Option<usize>,
    pub(super) tracking: TrackingState,
    pub(super) observers: Vec<Box<dyn SliderObserver>>,
}

impl<S: DateSource> TimeSliderEngine<S> {
    /// Creates an engine over `source` and builds its end points.
    pub fn new(source: S, config: SliderConfig) -> SliderResult<Self> {
        let config = config.validate()?;
        ensure_record_count(&source, config.max_record_count)?;
        let break_points = rebuild_end_points(&source, config.geometry, config.max_record_count)?;
        debug!(
            date_count = source.count(),
            usable = break_points.is_usable(),
            "slider engine initialized"
        );

        Ok(Self {
            source,
            config,
            break_points,
            selected_index: None,
            tracking: TrackingState::new(config.tracking),
            observers: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> SliderConfig {
        self.config
    }

    #[must_use]
    pub fn geometry(&self) -> SliderGeometry {
        self.config.geometry
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn date_count(&self) -> usize {
        self.source.count()
    }

    #[must_use]
    pub fn break_points(&self) -> BreakPointSet {
        self.break_points
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    #[must_use]
    pub fn selected_date(&self) -> Option<DateTime<Utc>> {
        self.selected_index.map(|index| self.source.date_at(index))
    }

    /// Earliest/Latest exist, so offsets can be mapped.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.break_points.is_usable()
    }

    #[must_use]
    pub fn is_distortion_active(&self) -> bool {
        self.config.expansion.is_active(self.source.count())
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.tracking.is_expanded()
    }

    #[must_use]
    pub fn tracking_phase(&self) -> TrackingPhase {
        self.tracking.phase()
    }

    #[must_use]
    pub fn hover(&self) -> Option<Hover> {
        self.tracking.hover()
    }

    #[must_use]
    pub fn inverse_mapping(&self) -> InverseMappingPolicy {
        self.config.inverse_mapping
    }

    pub fn set_inverse_mapping(&mut self, policy: InverseMappingPolicy) {
        self.config.inverse_mapping = policy;
    }

    #[must_use]
    pub fn first_date(&self) -> Option<DateTime<Utc>> {
        (!self.source.is_empty()).then(|| self.source.date_at(0))
    }

    #[must_use]
    pub fn last_date(&self) -> Option<DateTime<Utc>> {
        self.source
            .last_index()
            .map(|index| self.source.date_at(index))
    }
}

impl TimeSliderEngine<DateSeries> {
    /// Creates an engine that owns its dates, sorting them ascending.
    pub fn with_dates(dates: Vec<DateTime<Utc>>, config: SliderConfig) -> SliderResult<Self> {
        Self::new(DateSeries::from_unsorted(dates), config)
    }
}

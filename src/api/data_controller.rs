use tracing::debug;

use crate::core::{
    BreakPointSet, DateSource, ExpansionConfig, SliderGeometry, ensure_record_count,
    rebuild_end_points, rebuild_mid_points,
};
use crate::error::{SliderError, SliderResult};
use crate::interaction::TrackingBehavior;

use super::{SliderConfig, SliderEvent, TimeSliderEngine};

impl<S: DateSource> TimeSliderEngine<S> {
    /// Replaces the date source and rebuilds every break point.
    ///
    /// A selection that no longer fits the new source is dropped. On error
    /// the engine keeps its previous source.
    pub fn set_date_source(&mut self, source: S) -> SliderResult<()> {
        ensure_record_count(&source, self.config.max_record_count)?;
        let selected_index = self
            .selected_index
            .filter(|index| *index < source.count());
        let break_points =
            Self::build_break_points(&source, self.config, selected_index)?;

        debug!(
            date_count = source.count(),
            usable = break_points.is_usable(),
            distortion_active = self.config.expansion.is_active(source.count()),
            "set date source"
        );
        self.source = source;
        self.break_points = break_points;
        let selection_dropped = selected_index != self.selected_index;
        self.selected_index = selected_index;

        self.emit_event(SliderEvent::SourceChanged {
            date_count: self.source.count(),
        });
        if selection_dropped {
            self.emit_event(SliderEvent::SelectionChanged { index: None });
        }
        Ok(())
    }

    /// Applies new frame geometry; end and mid points follow.
    pub fn set_geometry(&mut self, geometry: SliderGeometry) -> SliderResult<()> {
        let geometry = geometry.validate()?;
        let mut config = self.config;
        config.geometry = geometry;
        let break_points = Self::build_break_points(&self.source, config, self.selected_index)?;

        debug!(
            width = geometry.width,
            height = geometry.height,
            axis = ?geometry.axis,
            "set slider geometry"
        );
        self.config = config;
        self.break_points = break_points;
        self.emit_event(SliderEvent::GeometryChanged {
            extent: geometry.extent(),
        });
        Ok(())
    }

    /// Changes the magnified window and rebuilds the mid points.
    pub fn set_expansion(&mut self, expansion: ExpansionConfig) -> SliderResult<()> {
        let expansion = expansion.validate()?;
        let break_points = rebuild_mid_points(
            self.break_points,
            self.selected_index,
            &self.source,
            expansion,
        )?;

        debug!(
            range = expansion.range,
            step = expansion.step,
            "set expansion"
        );
        self.config.expansion = expansion;
        self.break_points = break_points;
        Ok(())
    }

    pub fn set_tracking_behavior(&mut self, behavior: TrackingBehavior) -> SliderResult<()> {
        let behavior = behavior.validate()?;
        self.config.tracking = behavior;
        self.tracking.set_behavior(behavior);
        Ok(())
    }

    /// Selects `index` (or clears the selection) and rebuilds the mid points.
    pub fn set_selected_index(&mut self, index: Option<usize>) -> SliderResult<()> {
        if let Some(index) = index {
            let count = self.source.count();
            if index >= count {
                return Err(SliderError::IndexOutOfRange { index, count });
            }
        }
        if index == self.selected_index {
            return Ok(());
        }

        let break_points = rebuild_mid_points(
            self.break_points,
            index,
            &self.source,
            self.config.expansion,
        )?;
        debug!(?index, "set selected index");
        self.selected_index = index;
        self.break_points = break_points;
        self.emit_event(SliderEvent::SelectionChanged { index });
        Ok(())
    }

    fn build_break_points(
        source: &S,
        config: SliderConfig,
        selected_index: Option<usize>,
    ) -> SliderResult<BreakPointSet> {
        let ends = rebuild_end_points(source, config.geometry, config.max_record_count)?;
        rebuild_mid_points(ends, selected_index, source, config.expansion)
    }
}

//! Session reducer.
//!
//! Each action is handled by a small method on [`Session`]. Handlers never fail:
//! unknown ids and unmet preconditions leave the state untouched.

use crate::action::Action;
use crate::geometry::{Position, pixel_distance};
use crate::model::{Line, LineId, LineKind, MeasurementUnit, Point, PointId, PointKind, ToolMode};
use crate::state::{ImageRef, Session};
use crate::viewport::{Viewport, clamp_zoom};

/// Pure transition: returns the state that results from applying `action`.
pub fn reduce(state: &Session, action: Action) -> Session {
    let mut next = state.clone();
    next.apply(action);
    next
}

impl Session {
    /// Apply an action in place.
    pub fn apply(&mut self, action: Action) {
        if action.is_high_frequency() {
            log::trace!("action: {:?}", action);
        } else {
            log::debug!("action: {}", action.name());
        }

        match action {
            Action::SetImage(image) => self.set_image(image),
            Action::SetMode { mode } => self.set_mode(mode),
            Action::AddPoint { x, y, kind } => self.add_point(Position::new(x, y), kind),
            Action::UpdatePoint { id, x, y } => self.update_point(id, Position::new(x, y)),
            Action::DeletePoint { id } => self.delete_point(id),
            Action::AddLine { start, end, kind } => self.add_line(start, end, kind),
            Action::DeleteLine { id } => self.delete_line(id),
            Action::SetCalibrationDistance { distance } => self.set_calibration_distance(distance),
            Action::SetUnit { unit } => self.set_unit(unit),
            Action::SetZoom { scale } => self.set_zoom(scale),
            Action::SetPan { x, y } => self.set_pan(x, y),
            Action::ClearAll => self.clear_all(),
        }
    }

    fn set_image(&mut self, image: ImageRef) {
        log::debug!(
            "🖼️ Image loaded: {} ({}x{})",
            image.name,
            image.dimensions.width,
            image.dimensions.height
        );
        self.image = Some(image);
        self.viewport = Viewport::identity();
    }

    fn set_mode(&mut self, mode: ToolMode) {
        log::debug!("🔧 Mode: {}", mode.name());
        self.active_mode = mode;
    }

    fn add_point(&mut self, position: Position, kind: PointKind) {
        let ordinal = self.count_points(kind);
        let id = PointId(self.allocate_id());
        let point = Point::new(id, position, kind, ordinal);
        log::debug!(
            "📍 Added {} at ({:.1}, {:.1})",
            point.label(),
            position.x,
            position.y
        );
        self.points.push(point);

        match kind {
            PointKind::Calibration => {
                if let Some(evicted) = self.calibration.window_mut().push(id) {
                    // The entered distance belonged to the pair that just moved on
                    self.calibration.clear_scale();
                    log::debug!("📏 {} left the calibration pair, scale cleared", evicted);
                }
                if let Some((start, end)) = self.calibration.points().pair() {
                    let line = self.push_line(start, end, LineKind::Calibration);
                    self.track_calibration_line(line);
                }
            }
            PointKind::Measurement => {
                let count = ordinal + 1;
                if count >= 2 && count % 2 == 0 {
                    let previous = self
                        .points
                        .iter()
                        .rev()
                        .filter(|p| p.kind() == PointKind::Measurement)
                        .nth(1)
                        .map(Point::id);
                    if let Some(previous) = previous {
                        self.push_line(previous, id, LineKind::Measurement);
                    }
                }
            }
        }
    }

    fn update_point(&mut self, id: PointId, position: Position) {
        // The window stores ids, so a moved point stays in it. The scale keeps
        // the value derived when the distance was entered.
        match self.point_mut(id) {
            Some(point) => {
                point.move_to(position);
                log::trace!(
                    "✋ Moved {} to ({:.1}, {:.1})",
                    point.label(),
                    position.x,
                    position.y
                );
            }
            None => log::debug!("UpdatePoint ignored: unknown point {}", id),
        }
    }

    fn delete_point(&mut self, id: PointId) {
        let Some(index) = self.points.iter().position(|p| p.id() == id) else {
            log::debug!("DeletePoint ignored: unknown point {}", id);
            return;
        };

        let removed = self.points.remove(index);
        let lines_before = self.lines.len();
        self.lines.retain(|line| !line.references(id));

        if let Some(tracked) = self.calibration.line() {
            if self.line(tracked).is_none() {
                self.calibration.detach_line();
            }
        }

        if removed.is_calibration() && self.calibration.window_mut().remove(id) {
            self.calibration.window_mut().refill(
                self.points
                    .iter()
                    .filter(|p| p.is_calibration())
                    .map(Point::id),
            );
            if !self.calibration.points().is_complete() {
                self.calibration.detach_line();
            }
        }

        log::debug!(
            "🗑️ Deleted {} and {} line(s)",
            removed.label(),
            lines_before - self.lines.len()
        );
    }

    fn add_line(&mut self, start: PointId, end: PointId, kind: LineKind) {
        if self.point(start).is_none() || self.point(end).is_none() {
            log::debug!("AddLine ignored: unknown endpoint {} or {}", start, end);
            return;
        }

        if kind == LineKind::Calibration && !self.is_calibration_pair(start, end) {
            log::debug!("AddLine ignored: {} - {} is not the calibration pair", start, end);
            return;
        }

        let line = self.push_line(start, end, kind);
        if kind == LineKind::Calibration {
            self.track_calibration_line(line);
        }
    }

    /// True if `{a, b}` is the current calibration window pair, in either order.
    fn is_calibration_pair(&self, a: PointId, b: PointId) -> bool {
        match self.calibration.points().pair() {
            Some((first, second)) => (a, b) == (first, second) || (a, b) == (second, first),
            None => false,
        }
    }

    fn delete_line(&mut self, id: LineId) {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        if self.lines.len() == before {
            log::debug!("DeleteLine ignored: unknown line {}", id);
            return;
        }

        if self.calibration.line() == Some(id) {
            self.calibration.detach_line();
            log::debug!("📏 Calibration line removed, scale cleared");
        }
    }

    fn set_calibration_distance(&mut self, distance: f64) {
        let Some((a, b)) = self.calibration.points().pair() else {
            log::debug!("SetCalibrationDistance ignored: calibration needs two points");
            return;
        };
        let (Some(start), Some(end)) = (self.point(a), self.point(b)) else {
            return;
        };

        let pixels = pixel_distance(start.position(), end.position());
        let unit = self.selected_unit;
        self.calibration.calibrate(pixels, distance, unit);

        match self.calibration.pixels_per_unit(unit) {
            Some(ppu) => log::debug!(
                "📏 Calibrated: {:.1} px = {} {} ({:.2} px/{})",
                pixels,
                distance,
                unit,
                ppu,
                unit
            ),
            None => log::debug!("📏 Calibration cleared (distance {})", distance),
        }
    }

    fn set_unit(&mut self, unit: MeasurementUnit) {
        log::debug!("📐 Unit: {}", unit);
        self.selected_unit = unit;
    }

    fn set_zoom(&mut self, scale: f64) {
        self.viewport.scale = clamp_zoom(scale);
    }

    fn set_pan(&mut self, x: f64, y: f64) {
        self.viewport.offset = Position::new(x, y);
    }

    fn clear_all(&mut self) {
        log::debug!(
            "🧹 Cleared {} point(s) and {} line(s)",
            self.points.len(),
            self.lines.len()
        );
        self.points.clear();
        self.lines.clear();
        self.calibration.reset();
    }

    fn push_line(&mut self, start: PointId, end: PointId, kind: LineKind) -> LineId {
        let id = LineId(self.allocate_id());
        self.lines.push(Line::new(id, start, end, kind));
        log::debug!("🔗 Linked {} line {} ({} -> {})", kind.name(), id, start, end);
        id
    }

    /// Make `line` the calibration line. A superseded calibration line is pruned
    /// together with the scale that was entered for its pair.
    fn track_calibration_line(&mut self, line: LineId) {
        if let Some(previous) = self.calibration.replace_line(line) {
            if previous != line {
                self.lines.retain(|l| l.id() != previous);
                self.calibration.clear_scale();
                log::debug!("✂️ Superseded calibration line {} removed", previous);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ImageDimensions;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn test_image() -> ImageRef {
        ImageRef::new("plan.png", "file:///tmp/plan.png", ImageDimensions::new(800, 600))
    }

    fn session_with_image() -> Session {
        let mut session = Session::default();
        session.apply(Action::SetImage(test_image()));
        session
    }

    fn add(session: &mut Session, x: f64, y: f64, kind: PointKind) -> PointId {
        session.apply(Action::AddPoint { x, y, kind });
        session.points().last().unwrap().id()
    }

    fn lines_of(session: &Session, kind: LineKind) -> Vec<&Line> {
        session.lines().iter().filter(|l| l.kind() == kind).collect()
    }

    fn assert_calibration_invariant(session: &Session) {
        let calibration = session.calibration();
        let expected = calibration.points().is_complete()
            && calibration.actual_distance().is_some_and(|d| d > 0.0);
        assert_eq!(calibration.is_calibrated(), expected, "{:?}", calibration);
    }

    fn assert_no_dangling_lines(session: &Session) {
        for line in session.lines() {
            assert!(session.point(line.start()).is_some(), "dangling {:?}", line);
            assert!(session.point(line.end()).is_some(), "dangling {:?}", line);
        }
    }

    fn calibrated_session() -> (Session, PointId, PointId) {
        let mut session = session_with_image();
        let c1 = add(&mut session, 100.0, 100.0, PointKind::Calibration);
        let c2 = add(&mut session, 300.0, 100.0, PointKind::Calibration);
        session.apply(Action::SetCalibrationDistance { distance: 20.0 });
        (session, c1, c2)
    }

    #[test]
    fn test_set_image_resets_viewport_only() {
        let mut session = session_with_image();
        add(&mut session, 1.0, 2.0, PointKind::Measurement);
        session.apply(Action::SetZoom { scale: 3.0 });
        session.apply(Action::SetPan { x: 40.0, y: 50.0 });

        session.apply(Action::SetImage(ImageRef::new(
            "other.jpg",
            "file:///tmp/other.jpg",
            ImageDimensions::new(10, 10),
        )));

        assert_eq!(session.viewport(), &Viewport::identity());
        assert_eq!(session.image().unwrap().name, "other.jpg");
        assert_eq!(session.points().len(), 1);
    }

    #[test]
    fn test_set_mode() {
        let mut session = Session::default();
        session.apply(Action::SetMode {
            mode: ToolMode::Measure,
        });
        assert_eq!(session.active_mode(), ToolMode::Measure);
    }

    #[test]
    fn test_calibration_points_link_on_second() {
        let mut session = session_with_image();
        let c1 = add(&mut session, 100.0, 100.0, PointKind::Calibration);
        assert_eq!(session.point(c1).unwrap().label(), "C1");
        assert!(session.lines().is_empty());
        assert_eq!(session.calibration().line(), None);

        let c2 = add(&mut session, 300.0, 100.0, PointKind::Calibration);
        assert_eq!(session.point(c2).unwrap().label(), "C2");

        let lines = lines_of(&session, LineKind::Calibration);
        assert_eq!(lines.len(), 1);
        assert_eq!((lines[0].start(), lines[0].end()), (c1, c2));
        assert_eq!(session.calibration().line(), Some(lines[0].id()));
        assert_eq!(session.calibration().points().pair(), Some((c1, c2)));
    }

    #[test]
    fn test_set_calibration_distance_derives_scale() {
        let (session, _, _) = calibrated_session();
        assert_eq!(session.calibration().actual_distance(), Some(20.0));
        assert_eq!(session.pixels_per_unit(), Some(10.0));
        assert_calibration_invariant(&session);
    }

    #[test]
    fn test_set_calibration_distance_without_pair_is_noop() {
        let mut session = session_with_image();
        add(&mut session, 100.0, 100.0, PointKind::Calibration);
        let before = session.clone();

        session.apply(Action::SetCalibrationDistance { distance: 20.0 });
        assert_eq!(session, before);
    }

    #[test]
    fn test_set_calibration_distance_zero_clears_scale() {
        let (mut session, _, _) = calibrated_session();
        session.apply(Action::SetCalibrationDistance { distance: 0.0 });
        assert!(!session.calibration().is_calibrated());
        assert_calibration_invariant(&session);
    }

    #[test]
    fn test_third_calibration_point_advances_window() {
        let (mut session, c1, c2) = calibrated_session();
        let first_line = session.calibration().line().unwrap();

        let c3 = add(&mut session, 300.0, 400.0, PointKind::Calibration);

        assert_eq!(session.point(c3).unwrap().label(), "C3");
        assert_eq!(session.calibration().points().pair(), Some((c2, c3)));

        let lines = lines_of(&session, LineKind::Calibration);
        assert_eq!(lines.len(), 1);
        assert_eq!((lines[0].start(), lines[0].end()), (c2, c3));
        assert_eq!(session.calibration().line(), Some(lines[0].id()));
        assert!(session.line(first_line).is_none());
        assert!(session.point(c1).is_some());

        // The entered distance belonged to the old pair
        assert!(!session.calibration().is_calibrated());
        assert_calibration_invariant(&session);
    }

    #[test]
    fn test_measurement_points_pair_up() {
        let mut session = session_with_image();
        let ids: Vec<PointId> = (0..6)
            .map(|i| add(&mut session, f64::from(i) * 10.0, 0.0, PointKind::Measurement))
            .collect();

        let labels: Vec<&str> = session.points().iter().map(Point::label).collect();
        assert_eq!(labels, ["M1", "M2", "M3", "M4", "M5", "M6"]);

        let lines = lines_of(&session, LineKind::Measurement);
        assert_eq!(lines.len(), 3);
        for (n, line) in lines.iter().enumerate() {
            assert_eq!(line.start(), ids[2 * n]);
            assert_eq!(line.end(), ids[2 * n + 1]);
        }
    }

    #[test]
    fn test_odd_measurement_point_waits_for_partner() {
        let mut session = session_with_image();
        for i in 0..3 {
            add(&mut session, f64::from(i), 0.0, PointKind::Measurement);
        }
        assert_eq!(lines_of(&session, LineKind::Measurement).len(), 1);
    }

    #[test]
    fn test_measurement_and_calibration_counts_are_independent() {
        let mut session = session_with_image();
        add(&mut session, 0.0, 0.0, PointKind::Measurement);
        add(&mut session, 5.0, 5.0, PointKind::Calibration);
        let m2 = add(&mut session, 0.0, 50.0, PointKind::Measurement);

        assert_eq!(session.point(m2).unwrap().label(), "M2");
        assert_eq!(lines_of(&session, LineKind::Measurement).len(), 1);
        assert!(lines_of(&session, LineKind::Calibration).is_empty());
    }

    #[test]
    fn test_labels_count_existing_points() {
        let mut session = session_with_image();
        let m1 = add(&mut session, 0.0, 0.0, PointKind::Measurement);
        add(&mut session, 1.0, 0.0, PointKind::Measurement);
        session.apply(Action::DeletePoint { id: m1 });

        let next = add(&mut session, 2.0, 0.0, PointKind::Measurement);
        assert_eq!(session.point(next).unwrap().label(), "M2");
    }

    #[test]
    fn test_delete_point_removes_referencing_lines() {
        let mut session = session_with_image();
        let m1 = add(&mut session, 0.0, 0.0, PointKind::Measurement);
        let m2 = add(&mut session, 0.0, 10.0, PointKind::Measurement);
        add(&mut session, 5.0, 5.0, PointKind::Measurement);
        add(&mut session, 5.0, 15.0, PointKind::Measurement);
        session.apply(Action::AddLine {
            start: m1,
            end: m2,
            kind: LineKind::Measurement,
        });
        assert_eq!(session.lines().len(), 3);

        session.apply(Action::DeletePoint { id: m2 });

        assert!(session.point(m2).is_none());
        assert_eq!(session.lines().len(), 1);
        assert!(session.lines().iter().all(|l| !l.references(m2)));
        assert_no_dangling_lines(&session);
    }

    #[test]
    fn test_delete_calibration_point_resets_calibration() {
        let (mut session, c1, c2) = calibrated_session();
        session.apply(Action::DeletePoint { id: c1 });

        let calibration = session.calibration();
        assert_eq!(calibration.points().len(), 1);
        assert!(calibration.points().contains(c2));
        assert_eq!(calibration.line(), None);
        assert_eq!(calibration.actual_distance(), None);
        assert_eq!(session.pixels_per_unit(), None);
        assert!(session.lines().is_empty());
    }

    #[test]
    fn test_delete_window_point_refills_from_older_points() {
        let mut session = session_with_image();
        let c1 = add(&mut session, 0.0, 0.0, PointKind::Calibration);
        add(&mut session, 10.0, 0.0, PointKind::Calibration);
        let c3 = add(&mut session, 20.0, 0.0, PointKind::Calibration);

        session.apply(Action::DeletePoint { id: c3 });

        assert_eq!(session.calibration().points().len(), 2);
        assert!(session.calibration().points().contains(c1));
        assert_eq!(session.calibration().line(), None);
        assert_no_dangling_lines(&session);
        assert_calibration_invariant(&session);
    }

    #[test]
    fn test_delete_unknown_point_is_noop() {
        let (mut session, _, _) = calibrated_session();
        let before = session.clone();
        session.apply(Action::DeletePoint { id: PointId(999) });
        assert_eq!(session, before);
    }

    #[test]
    fn test_update_point_moves_without_rescaling() {
        let (mut session, c1, _) = calibrated_session();
        session.apply(Action::UpdatePoint {
            id: c1,
            x: 200.0,
            y: 100.0,
        });

        let point = session.point(c1).unwrap();
        assert_eq!((point.x(), point.y()), (200.0, 100.0));
        assert_eq!(point.label(), "C1");
        assert_eq!(session.pixels_per_unit(), Some(10.0));
        assert!(session.calibration().points().contains(c1));
    }

    #[test]
    fn test_update_unknown_point_is_noop() {
        let mut session = session_with_image();
        add(&mut session, 1.0, 1.0, PointKind::Measurement);
        let before = session.clone();
        session.apply(Action::UpdatePoint {
            id: PointId(42),
            x: 9.0,
            y: 9.0,
        });
        assert_eq!(session, before);
    }

    #[test]
    fn test_add_line_with_missing_endpoint_is_noop() {
        let mut session = session_with_image();
        let m1 = add(&mut session, 1.0, 1.0, PointKind::Measurement);
        let before = session.clone();
        session.apply(Action::AddLine {
            start: m1,
            end: PointId(77),
            kind: LineKind::Measurement,
        });
        assert_eq!(session, before);
    }

    #[test]
    fn test_add_calibration_line_replaces_tracked_line() {
        let (mut session, c1, c2) = calibrated_session();
        let auto_line = session.calibration().line().unwrap();

        session.apply(Action::AddLine {
            start: c2,
            end: c1,
            kind: LineKind::Calibration,
        });

        let lines = lines_of(&session, LineKind::Calibration);
        assert_eq!(lines.len(), 1);
        assert_ne!(lines[0].id(), auto_line);
        assert_eq!(session.calibration().line(), Some(lines[0].id()));
        assert_calibration_invariant(&session);
    }

    #[test]
    fn test_calibration_line_for_other_points_is_ignored() {
        let (mut session, c1, _) = calibrated_session();
        let m1 = add(&mut session, 0.0, 0.0, PointKind::Measurement);
        let tracked = session.calibration().line();
        let before = session.clone();

        session.apply(Action::AddLine {
            start: c1,
            end: m1,
            kind: LineKind::Calibration,
        });

        assert_eq!(session, before);
        assert_eq!(session.calibration().line(), tracked);
        assert_eq!(lines_of(&session, LineKind::Calibration).len(), 1);
    }

    #[test]
    fn test_calibration_line_without_pair_is_ignored() {
        let mut session = session_with_image();
        let c1 = add(&mut session, 0.0, 0.0, PointKind::Calibration);
        let m1 = add(&mut session, 5.0, 0.0, PointKind::Measurement);
        let before = session.clone();

        session.apply(Action::AddLine {
            start: c1,
            end: m1,
            kind: LineKind::Calibration,
        });

        assert_eq!(session, before);
        assert_eq!(session.calibration().line(), None);
    }

    #[test]
    fn test_window_advance_clears_scale_entered_without_line() {
        let mut session = session_with_image();
        let c1 = add(&mut session, 0.0, 0.0, PointKind::Calibration);
        let c2 = add(&mut session, 100.0, 0.0, PointKind::Calibration);
        let line = session.calibration().line().unwrap();
        session.apply(Action::DeleteLine { id: line });
        session.apply(Action::SetCalibrationDistance { distance: 10.0 });
        assert_eq!(session.calibration().points().pair(), Some((c1, c2)));
        assert_eq!(session.pixels_per_unit(), Some(10.0));

        let c3 = add(&mut session, 100.0, 1000.0, PointKind::Calibration);

        assert_eq!(session.calibration().points().pair(), Some((c2, c3)));
        assert!(!session.calibration().is_calibrated());
        assert_eq!(session.calibration().actual_distance(), None);
        assert_eq!(session.pixels_per_unit(), None);
        assert_calibration_invariant(&session);
    }

    #[test]
    fn test_delete_calibration_line_clears_scale() {
        let (mut session, _, _) = calibrated_session();
        let line = session.calibration().line().unwrap();

        session.apply(Action::DeleteLine { id: line });

        assert_eq!(session.calibration().line(), None);
        assert_eq!(session.calibration().actual_distance(), None);
        assert!(!session.calibration().is_calibrated());
        assert_eq!(session.points().len(), 2);
        assert_calibration_invariant(&session);
    }

    #[test]
    fn test_delete_unknown_line_is_noop() {
        let (mut session, _, _) = calibrated_session();
        let before = session.clone();
        session.apply(Action::DeleteLine { id: LineId(1000) });
        assert_eq!(session, before);
    }

    #[test]
    fn test_set_unit_reexpresses_scale() {
        let (mut session, _, _) = calibrated_session();
        session.apply(Action::SetUnit {
            unit: MeasurementUnit::Millimeters,
        });
        assert_eq!(session.pixels_per_unit(), Some(1.0));
        assert_eq!(session.calibration().actual_distance(), Some(20.0));
        assert_eq!(
            session.calibration().distance_unit(),
            Some(MeasurementUnit::Centimeters)
        );

        session.apply(Action::SetUnit {
            unit: MeasurementUnit::Inches,
        });
        assert!(approx_eq(session.pixels_per_unit().unwrap(), 25.4));
    }

    #[test]
    fn test_set_zoom_clamps() {
        let mut session = Session::default();
        session.apply(Action::SetZoom { scale: 1000.0 });
        assert_eq!(session.viewport().scale, 10.0);
        session.apply(Action::SetZoom { scale: 0.0001 });
        assert_eq!(session.viewport().scale, 0.1);
        session.apply(Action::SetZoom { scale: 2.5 });
        assert_eq!(session.viewport().scale, 2.5);
    }

    #[test]
    fn test_set_pan_is_unclamped() {
        let mut session = Session::default();
        session.apply(Action::SetPan {
            x: -5000.0,
            y: 12345.0,
        });
        assert_eq!(session.viewport().offset, Position::new(-5000.0, 12345.0));
    }

    #[test]
    fn test_clear_all_keeps_image_and_viewport() {
        let (mut session, _, _) = calibrated_session();
        add(&mut session, 0.0, 0.0, PointKind::Measurement);
        add(&mut session, 0.0, 50.0, PointKind::Measurement);
        session.apply(Action::SetZoom { scale: 2.0 });
        session.apply(Action::SetPan { x: 10.0, y: 20.0 });
        let viewport = *session.viewport();

        session.apply(Action::ClearAll);

        assert!(session.points().is_empty());
        assert!(session.lines().is_empty());
        assert_eq!(session.calibration(), &crate::model::Calibration::new());
        assert_eq!(session.image(), Some(&test_image()));
        assert_eq!(session.viewport(), &viewport);
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let session = session_with_image();
        let next = reduce(
            &session,
            Action::AddPoint {
                x: 1.0,
                y: 2.0,
                kind: PointKind::Measurement,
            },
        );
        assert!(session.points().is_empty());
        assert_eq!(next.points().len(), 1);
    }

    #[test]
    fn test_invariants_hold_across_mixed_sequence() {
        let mut session = session_with_image();
        let c1 = add(&mut session, 0.0, 0.0, PointKind::Calibration);
        let actions = vec![
            Action::SetCalibrationDistance { distance: 5.0 },
            Action::AddPoint {
                x: 30.0,
                y: 40.0,
                kind: PointKind::Calibration,
            },
            Action::SetCalibrationDistance { distance: 5.0 },
            Action::AddPoint {
                x: 1.0,
                y: 1.0,
                kind: PointKind::Measurement,
            },
            Action::AddPoint {
                x: 9.0,
                y: 1.0,
                kind: PointKind::Measurement,
            },
            Action::UpdatePoint {
                id: c1,
                x: 3.0,
                y: 4.0,
            },
            Action::SetUnit {
                unit: MeasurementUnit::Inches,
            },
            Action::AddPoint {
                x: 60.0,
                y: 80.0,
                kind: PointKind::Calibration,
            },
            Action::SetCalibrationDistance { distance: 2.0 },
            Action::DeletePoint { id: c1 },
            Action::SetCalibrationDistance { distance: -1.0 },
            Action::SetCalibrationDistance { distance: 7.5 },
            Action::ClearAll,
            Action::SetCalibrationDistance { distance: 1.0 },
        ];

        for action in actions {
            session.apply(action);
            assert_calibration_invariant(&session);
            assert_no_dangling_lines(&session);
            assert!(lines_of(&session, LineKind::Calibration).len() <= 1);
        }
    }
}

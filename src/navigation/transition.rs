//! Fly-to transitions and the generation counter that retires them.

use glam::Vec3;
use web_time::Instant;

use crate::camera::Camera;
use crate::util::easing::EasingFunction;

/// Camera position plus look-at target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position.
    pub position: Vec3,
    /// Look-at target.
    pub target: Vec3,
}

impl CameraPose {
    /// Current pose of `camera`.
    #[must_use]
    pub fn of(camera: &Camera) -> Self {
        Self {
            position: camera.eye,
            target: camera.target,
        }
    }

    /// Componentwise interpolation of position and target by the same
    /// fraction.
    #[must_use]
    pub fn lerp(&self, to: &Self, a: f32) -> Self {
        Self {
            position: self.position.lerp(to.position, a),
            target: self.target.lerp(to.target, a),
        }
    }

    /// Move `camera` to this pose and re-derive its orientation.
    pub fn apply(&self, camera: &mut Camera) {
        camera.eye = self.position;
        camera.look_at(self.target);
    }
}

/// Outcome of advancing a [`Transition`] by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionStep {
    /// Superseded by a newer fly-to, or already finished. The camera was
    /// not touched.
    Stale,
    /// Still animating; `eased` is the eased progress applied this frame.
    InFlight {
        /// Eased fraction in `0..1`.
        eased: f32,
    },
    /// Snapped to the destination on this frame; input is re-enabled.
    Completed,
}

/// One fly-to animation, captured when it starts.
///
/// A transition only writes the camera while its `id` is the live one in
/// [`NavigationState`]. Starting another fly-to bumps the id, so an old
/// transition that is advanced afterwards returns
/// [`TransitionStep::Stale`] without touching anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    id: u64,
    start: Instant,
    duration: f32,
    from: CameraPose,
    to: CameraPose,
    easing: EasingFunction,
}

impl Transition {
    /// Generation id captured at start.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Pose the transition started from.
    #[must_use]
    pub fn start_pose(&self) -> CameraPose {
        self.from
    }

    /// Destination pose.
    #[must_use]
    pub fn end_pose(&self) -> CameraPose {
        self.to
    }

    /// Linear progress at `now` in `0..=1`. Non-positive or non-finite
    /// durations are complete immediately.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        (elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Advance this transition to `now`, writing `camera` only if this
    /// transition is still the live one.
    pub fn advance(
        &self,
        state: &mut NavigationState,
        camera: &mut Camera,
        now: Instant,
    ) -> TransitionStep {
        if !state.is_live(self.id) {
            return TransitionStep::Stale;
        }

        let p = self.progress(now);
        if p >= 1.0 {
            // Exact snap, no eased residue
            self.to.apply(camera);
            state.finish(self.id);
            return TransitionStep::Completed;
        }

        let eased = self.easing.evaluate(p);
        self.from.lerp(&self.to, eased).apply(camera);
        TransitionStep::InFlight { eased }
    }
}

/// Single-writer navigation state: the generation counter, the live
/// transition, and the input gate.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    active_transition_id: u64,
    live: Option<Transition>,
    input_suppressed: bool,
}

impl NavigationState {
    /// Fresh state: no transition, input enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new transition, retiring any in-flight one. Suppresses
    /// gesture input until the new transition completes.
    pub fn begin(
        &mut self,
        from: CameraPose,
        to: CameraPose,
        duration: f32,
        easing: EasingFunction,
        now: Instant,
    ) -> Transition {
        self.active_transition_id += 1;
        let transition = Transition {
            id: self.active_transition_id,
            start: now,
            duration,
            from,
            to,
            easing,
        };
        if let Some(prev) = self.live.replace(transition) {
            log::debug!(
                "fly-to #{} superseded by #{}",
                prev.id,
                transition.id
            );
        }
        self.input_suppressed = true;
        transition
    }

    fn finish(&mut self, id: u64) {
        if self.is_live(id) {
            self.live = None;
            self.input_suppressed = false;
        }
    }

    /// Whether `id` names the transition currently allowed to write the
    /// camera.
    #[must_use]
    pub fn is_live(&self, id: u64) -> bool {
        self.active_transition_id == id
            && self.live.is_some_and(|t| t.id == id)
    }

    /// The live transition, if any.
    #[must_use]
    pub fn live_transition(&self) -> Option<Transition> {
        self.live
    }

    /// Id of the most recently started transition (0 before the first).
    #[must_use]
    pub fn active_transition_id(&self) -> u64 {
        self.active_transition_id
    }

    /// Whether gesture input is currently gated off.
    #[must_use]
    pub fn input_suppressed(&self) -> bool {
        self.input_suppressed
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::options::CameraOptions;

    fn camera() -> Camera {
        Camera::new(
            Vec3::new(-15.0, 10.0, 0.0),
            Vec3::ZERO,
            1.0,
            &CameraOptions::default(),
        )
    }

    fn pose(position: Vec3, target: Vec3) -> CameraPose {
        CameraPose { position, target }
    }

    #[test]
    fn midpoint_uses_eased_fraction() {
        let mut cam = camera();
        let mut state = NavigationState::new();
        let t0 = Instant::now();
        let from = CameraPose::of(&cam);
        let to = pose(Vec3::new(1.0, 10.0, 0.0), Vec3::new(0.0, 0.0, 4.0));
        let tr = state.begin(from, to, 2.0, EasingFunction::QuadraticInOut, t0);

        let step = tr.advance(&mut state, &mut cam, t0 + Duration::from_millis(500));
        // p = 0.25 → eased 0.125
        assert_eq!(step, TransitionStep::InFlight { eased: 0.125 });
        let expected = from.lerp(&to, 0.125);
        assert!((cam.eye - expected.position).length() < 1e-5);
        assert!((cam.target - expected.target).length() < 1e-5);
        assert!(state.input_suppressed());
    }

    #[test]
    fn completion_snaps_and_releases_input() {
        let mut cam = camera();
        let mut state = NavigationState::new();
        let t0 = Instant::now();
        let to = pose(Vec3::new(2.8, 1.6, 2.0), Vec3::new(4.5, 1.0, 2.0));
        let tr = state.begin(
            CameraPose::of(&cam),
            to,
            1.2,
            EasingFunction::QuadraticInOut,
            t0,
        );

        let step = tr.advance(&mut state, &mut cam, t0 + Duration::from_secs(5));
        assert_eq!(step, TransitionStep::Completed);
        assert_eq!(cam.eye, to.position);
        assert_eq!(cam.target, to.target);
        assert!(!state.input_suppressed());
        assert!(state.live_transition().is_none());

        // Finished transitions are inert
        let step = tr.advance(&mut state, &mut cam, t0 + Duration::from_secs(6));
        assert_eq!(step, TransitionStep::Stale);
        assert!(!state.input_suppressed());
    }

    #[test]
    fn superseded_transition_does_not_write() {
        let mut cam = camera();
        let mut state = NavigationState::new();
        let t0 = Instant::now();
        let first = state.begin(
            CameraPose::of(&cam),
            pose(Vec3::new(-1.5, 1.8, 0.5), Vec3::new(-1.5, 1.4, -3.0)),
            1.0,
            EasingFunction::Linear,
            t0,
        );
        let second = state.begin(
            CameraPose::of(&cam),
            pose(Vec3::new(-10.0, 5.0, 5.0), Vec3::ZERO),
            1.0,
            EasingFunction::Linear,
            t0,
        );
        assert_eq!(second.id(), first.id() + 1);

        let before = CameraPose::of(&cam);
        let later = t0 + Duration::from_millis(400);
        assert_eq!(
            first.advance(&mut state, &mut cam, later),
            TransitionStep::Stale
        );
        assert_eq!(CameraPose::of(&cam), before);

        // Completing the stale one must not release input either
        assert_eq!(
            first.advance(&mut state, &mut cam, t0 + Duration::from_secs(9)),
            TransitionStep::Stale
        );
        assert!(state.input_suppressed());

        assert_eq!(
            second.advance(&mut state, &mut cam, t0 + Duration::from_secs(9)),
            TransitionStep::Completed
        );
        assert_eq!(cam.eye, Vec3::new(-10.0, 5.0, 5.0));
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut cam = camera();
        let mut state = NavigationState::new();
        let t0 = Instant::now();
        let to = pose(Vec3::new(0.0, 2.0, 6.0), Vec3::ZERO);
        let tr = state.begin(
            CameraPose::of(&cam),
            to,
            0.0,
            EasingFunction::DEFAULT,
            t0,
        );
        assert_eq!(tr.advance(&mut state, &mut cam, t0), TransitionStep::Completed);
        assert_eq!(cam.eye, to.position);
    }

    #[test]
    fn progress_before_start_is_zero() {
        let mut state = NavigationState::new();
        let t0 = Instant::now();
        let p = pose(Vec3::ONE, Vec3::ZERO);
        let tr = state.begin(p, p, 1.0, EasingFunction::Linear, t0);
        assert_eq!(tr.progress(t0), 0.0);
        assert_eq!(tr.progress(t0 + Duration::from_secs(2)), 1.0);
    }
}

//! Named viewpoints and the fly-to animator.
//!
//! [`Navigator::fly_to`] captures the camera's current pose, clamps the
//! destination into the bounding volume, and starts a timed, eased
//! [`Transition`]. [`Navigator::update`] is called once per frame and
//! drives the live transition. Starting a new fly-to retires the previous
//! one through the generation counter in [`NavigationState`]; there is no
//! explicit cancel.

mod transition;
mod viewpoint;

use web_time::Instant;

pub use transition::{CameraPose, NavigationState, Transition, TransitionStep};
pub use viewpoint::{Viewpoint, ViewpointRegistry};

use crate::camera::{BoundingVolume, Camera};
use crate::options::NavigationOptions;
use crate::util::easing::EasingFunction;

/// Viewpoint registry plus the navigation state it drives.
#[derive(Debug, Clone)]
pub struct Navigator {
    registry: ViewpointRegistry,
    state: NavigationState,
    easing: EasingFunction,
    /// Name of the viewpoint most recently flown to.
    current: Option<String>,
}

impl Navigator {
    /// Build from configured viewpoints and easing.
    #[must_use]
    pub fn new(options: &NavigationOptions) -> Self {
        Self {
            registry: ViewpointRegistry::new(options.viewpoints.clone()),
            state: NavigationState::new(),
            easing: options.easing,
            current: None,
        }
    }

    /// The viewpoint table.
    #[must_use]
    pub fn registry(&self) -> &ViewpointRegistry {
        &self.registry
    }

    /// Read-only navigation state.
    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Name of the viewpoint most recently flown to, if any.
    #[must_use]
    pub fn current_viewpoint(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether a fly-to is animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.live_transition().is_some()
    }

    /// Whether gesture input is gated off.
    #[must_use]
    pub fn input_suppressed(&self) -> bool {
        self.state.input_suppressed()
    }

    /// Start flying `camera` to the viewpoint called `name`.
    ///
    /// Unknown names are logged and ignored. Both the destination position
    /// and target are clamped into `bounds` so a misconfigured viewpoint
    /// can never lead the camera out of the legal region.
    pub fn fly_to(
        &mut self,
        name: &str,
        camera: &Camera,
        bounds: &BoundingVolume,
        now: Instant,
    ) -> Option<Transition> {
        let Some(viewpoint) = self.registry.get(name) else {
            log::warn!("fly_to: unknown viewpoint {name:?}");
            return None;
        };

        let to = CameraPose {
            position: bounds.clamp(viewpoint.position),
            target: bounds.clamp(viewpoint.target),
        };
        if to.position != viewpoint.position || to.target != viewpoint.target
        {
            log::debug!("viewpoint {name:?} clamped into bounds");
        }

        let transition = self.state.begin(
            CameraPose::of(camera),
            to,
            viewpoint.duration,
            self.easing,
            now,
        );
        log::debug!(
            "fly-to #{} → {name:?} over {:.2}s",
            transition.id(),
            viewpoint.duration
        );
        self.current = Some(name.to_owned());
        Some(transition)
    }

    /// Advance the live transition, if any, to `now`.
    pub fn update(
        &mut self,
        camera: &mut Camera,
        now: Instant,
    ) -> Option<TransitionStep> {
        let transition = self.state.live_transition()?;
        let step = transition.advance(&mut self.state, camera, now);
        if step == TransitionStep::Completed {
            log::info!(
                "arrived at {:?}",
                self.current.as_deref().unwrap_or_default()
            );
        }
        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use web_time::Duration;

    use super::*;
    use crate::options::CameraOptions;

    fn setup() -> (Navigator, Camera, BoundingVolume) {
        let options = NavigationOptions::default();
        let camera = Camera::new(
            options.start_position,
            options.start_target,
            1.0,
            &CameraOptions::default(),
        );
        (Navigator::new(&options), camera, BoundingVolume::default())
    }

    #[test]
    fn unknown_viewpoint_is_a_noop() {
        let (mut nav, camera, bounds) = setup();
        assert!(nav
            .fly_to("attic", &camera, &bounds, Instant::now())
            .is_none());
        assert!(!nav.is_animating());
        assert!(!nav.input_suppressed());
        assert_eq!(nav.state().active_transition_id(), 0);
    }

    #[test]
    fn destination_is_clamped_into_bounds() {
        let (mut nav, camera, bounds) = setup();
        // social's target x = 5.0 lies past max_x = 4.5
        let tr = nav
            .fly_to("social", &camera, &bounds, Instant::now())
            .unwrap();
        assert_eq!(tr.end_pose().position, Vec3::new(2.8, 1.6, 2.0));
        assert_eq!(tr.end_pose().target, Vec3::new(4.5, 1.0, 2.0));
    }

    #[test]
    fn misconfigured_position_is_clamped_too() {
        let mut options = NavigationOptions::default();
        let _ = options.viewpoints.insert(
            "roof".into(),
            Viewpoint {
                position: Vec3::new(0.0, 40.0, 0.0),
                target: Vec3::ZERO,
                duration: 1.0,
            },
        );
        let camera = Camera::new(
            options.start_position,
            options.start_target,
            1.0,
            &CameraOptions::default(),
        );
        let mut nav = Navigator::new(&options);
        let bounds = BoundingVolume::default();
        let tr = nav.fly_to("roof", &camera, &bounds, Instant::now()).unwrap();
        assert_eq!(tr.end_pose().position, Vec3::new(0.0, 15.0, 0.0));
    }

    #[test]
    fn second_fly_to_wins() {
        let (mut nav, mut camera, bounds) = setup();
        let t0 = Instant::now();
        let projects = nav.fly_to("projects", &camera, &bounds, t0).unwrap();
        let home = nav.fly_to("home", &camera, &bounds, t0).unwrap();
        assert_eq!(nav.current_viewpoint(), Some("home"));

        assert!(!nav.state().is_live(projects.id()));
        assert!(nav.state().is_live(home.id()));

        let end = t0 + Duration::from_secs(3);
        assert_eq!(
            nav.update(&mut camera, end),
            Some(TransitionStep::Completed)
        );
        assert_eq!(camera.eye, home.end_pose().position);
        assert_eq!(camera.target, home.end_pose().target);
        assert!(nav.update(&mut camera, end).is_none());
    }

    #[test]
    fn registry_lists_default_viewpoints() {
        let (nav, _, _) = setup();
        let names: Vec<&str> = nav.registry().names().collect();
        assert_eq!(names, ["home", "projects", "social"]);
        assert_eq!(nav.registry().len(), 3);
    }
}

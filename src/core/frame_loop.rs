use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::context::AppContext;
use crate::motion::{orbit_position, OrbitPosition};
use crate::shadow::{sync_shadow, ShadowState};
use crate::traits::{CameraControl, SceneRenderer, SurfaceErrorAction};

use super::clock::{Clock, TimeSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Schedule the next tick on the next display refresh
    Reschedule,
    /// Do not schedule again
    Stopped,
}

/// Shared stop flag, checked before every reschedule
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// State computed by the last completed tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub number: u64,
    pub elapsed: f64,
    pub orbit: OrbitPosition,
    pub shadow: ShadowState,
}

/// Drives one animation step per display refresh
///
/// Each tick reads the clock, moves the sphere, syncs its shadow, steps the
/// camera controls and renders. The host calls [`FrameLoop::tick`] from its
/// redraw callback and requests another redraw only on
/// [`TickOutcome::Reschedule`].
pub struct FrameLoop<T: TimeSource = Clock> {
    clock: T,
    state: LoopState,
    stop: StopHandle,
    frames: u64,
    last: Option<FrameSnapshot>,
}

impl<T: TimeSource> FrameLoop<T> {
    pub fn new(clock: T) -> Self {
        Self {
            clock,
            state: LoopState::Running,
            stop: StopHandle::default(),
            frames: 0,
            last: None,
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> Option<FrameSnapshot> {
        self.last
    }

    pub fn tick<C, R>(&mut self, ctx: &mut AppContext, controls: &mut C, renderer: &mut R) -> TickOutcome
    where
        C: CameraControl + ?Sized,
        R: SceneRenderer + ?Sized,
    {
        if self.state == LoopState::Stopped {
            return TickOutcome::Stopped;
        }

        let elapsed = self.clock.elapsed();

        let orbit = orbit_position(elapsed);
        ctx.apply_orbit(orbit);

        let shadow = sync_shadow(orbit);
        ctx.apply_shadow(shadow);

        controls.update(&mut ctx.camera);
        if ctx.camera.is_projection_dirty() {
            ctx.camera.update_projection_matrix();
        }

        match renderer.render(&ctx.scene, &ctx.camera) {
            Ok(()) => {
                self.last = Some(FrameSnapshot {
                    number: self.frames,
                    elapsed,
                    orbit,
                    shadow,
                });
                self.frames += 1;
            }
            Err(SurfaceErrorAction::Reconfigured) | Err(SurfaceErrorAction::SkipFrame) => {
                log::debug!("frame at t={:.3}s skipped", elapsed);
            }
            Err(SurfaceErrorAction::Fatal) => {
                log::error!("rendering surface unavailable, stopping frame loop");
                self.state = LoopState::Stopped;
                return TickOutcome::Stopped;
            }
        }

        log::trace!("t={:.3} sphere={:?} shadow={:?}", elapsed, orbit, shadow);

        if self.stop.is_stopped() {
            log::info!("frame loop stopped after {} frames", self.frames);
            self.state = LoopState::Stopped;
            return TickOutcome::Stopped;
        }

        TickOutcome::Reschedule
    }
}

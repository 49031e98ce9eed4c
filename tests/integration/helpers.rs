//! Shared helpers for integration tests.

use std::path::Path;
use std::process::Command;
use std::time::{Duration, Instant};

use starplay::player::playback::{SimulatedMedia, SimulationTiming};
use starplay::player::{ControllerOptions, MediaSurface, PlayerController, Presentation, UiEvent};

/// Timing used by the simulated media in tests.
pub fn timing() -> SimulationTiming {
    SimulationTiming {
        preload: Duration::from_millis(400),
        time_update_interval: Duration::from_millis(250),
    }
}

/// Controller over a simulated movie of `length` seconds, created at `start`.
pub fn simulated_controller<P: Presentation>(
    length: f64,
    view: P,
    start: Instant,
) -> PlayerController<SimulatedMedia, P> {
    PlayerController::new(
        SimulatedMedia::new(length, timing()),
        view,
        ControllerOptions::default(),
        start,
    )
}

/// Deliver every queued media event to the controller.
pub fn pump<P: Presentation>(controller: &mut PlayerController<SimulatedMedia, P>, now: Instant) {
    for event in controller.media_mut().drain_events() {
        controller.handle(&UiEvent::media(event), now);
    }
}

/// Advance the media clock by `elapsed`, then deliver the resulting events.
pub fn advance<P: Presentation>(
    controller: &mut PlayerController<SimulatedMedia, P>,
    elapsed: Duration,
    now: Instant,
) {
    controller.media_mut().advance(elapsed);
    pump(controller, now);
}

/// Position of the controller's media, in seconds.
pub fn position<M: MediaSurface, P: Presentation>(controller: &PlayerController<M, P>) -> f64 {
    controller.media().current_time()
}

/// Run the starplay binary with an isolated home directory.
pub fn run_starplay(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_starplay"))
        .args(args)
        .env("STARPLAY_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("STARPLAY_LOG")
        .output()
        .expect("Failed to execute starplay");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

//! Dispatcher and resolver factories for integration tests.

use std::sync::Arc;
use std::time::{Duration, Instant};

use bgtone::models::{ColorPolicy, ToneConfig};
use bgtone::services::{ColorResolver, DesignatedContext, Dispatcher, FlightPhase, Surface};

/// Generous enough that no healthy test ever hits it
pub const WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Dispatcher with the default policy on a fresh designated context
pub fn dispatcher() -> Dispatcher {
    dispatcher_with_timeout(WAIT_TIMEOUT)
}

pub fn dispatcher_with_timeout(wait_timeout: Duration) -> Dispatcher {
    let context = DesignatedContext::spawn("bgtone-test").expect("Failed to spawn context");
    Dispatcher::new(
        Arc::new(context),
        Arc::new(ColorPolicy::default()),
        wait_timeout,
    )
}

/// Resolver with the given policy on a fresh designated context
pub fn resolver(policy: ColorPolicy) -> ColorResolver {
    let mut config = ToneConfig {
        policy,
        ..Default::default()
    };
    config.dispatch.wait_timeout_ms = WAIT_TIMEOUT.as_millis() as u64;
    ColorResolver::spawn(&config).expect("Failed to spawn resolver")
}

/// Poll until the surface's flight reaches `phase`
pub fn wait_for_phase(surface: &Surface, phase: FlightPhase) {
    let deadline = Instant::now() + WAIT_TIMEOUT;
    while surface.phase() != phase {
        assert!(
            Instant::now() < deadline,
            "Surface stuck in {:?}, expected {:?}",
            surface.phase(),
            phase
        );
        std::thread::sleep(Duration::from_millis(2));
    }
}

//! Observer and cancellation hooks for `SimulationEngine::run`

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::plates::WorldState;
use crate::simulation::engine::TickReport;

/// Called once after every completed tick with a read-only view of the world.
///
/// Returning `ControlFlow::Break(())` ends the run after the current tick.
pub trait TickObserver {
    fn on_tick(&mut self, report: &TickReport, world: &WorldState) -> ControlFlow<()>;
}

impl<F> TickObserver for F
where
    F: FnMut(&TickReport, &WorldState) -> ControlFlow<()>,
{
    fn on_tick(&mut self, report: &TickReport, world: &WorldState) -> ControlFlow<()> {
        self(report, world)
    }
}

/// Observer that ignores every tick
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TickObserver for NoopObserver {
    fn on_tick(&mut self, _report: &TickReport, _world: &WorldState) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Shared flag used to cancel a run from another thread or a signal handler.
///
/// The engine only looks at it between ticks.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

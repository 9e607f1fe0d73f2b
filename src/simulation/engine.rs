//! SimulationEngine - advances the world one tick at a time
//!
//! Per plate, in world order:
//! draw offset -> collision check -> translate -> wrap -> commit
//!
//! The collision check runs against the world as it stands mid-tick: plates
//! earlier in the order have already moved, later ones have not. Results
//! therefore depend on world order, and that dependence is kept as-is.

use rand::Rng;

use crate::core::config::{MotionConfig, PlateConfig, WorldBounds};
use crate::core::error::ConfigError;
use crate::core::types::{Offset, PlateId, Tick};
use crate::geometry;
use crate::plates::WorldState;
use crate::simulation::hooks::{StopSignal, TickObserver};
use crate::simulation::wrap::{wrap_polygon, WrapShift};

/// Engine lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Stopped,
    Running,
}

/// What happened to one plate during a tick
#[derive(Debug, Clone, PartialEq)]
pub struct PlateMove {
    pub id: PlateId,
    /// Offset drawn from the motion range
    pub drawn: Offset,
    /// Offset actually applied: `drawn`, or its negation after a collision
    pub applied: Offset,
    /// First plate the drawn move would have hit
    pub collided_with: Option<PlateId>,
    pub wrap: WrapShift,
}

/// Per-plate record of a completed tick, in world order
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub tick: Tick,
    pub moves: Vec<PlateMove>,
}

impl TickReport {
    pub fn collision_count(&self) -> usize {
        self.moves.iter().filter(|m| m.collided_with.is_some()).count()
    }

    pub fn wrap_count(&self) -> usize {
        self.moves.iter().filter(|m| !m.wrap.is_none()).count()
    }

    pub fn get(&self, id: PlateId) -> Option<&PlateMove> {
        self.moves.iter().find(|m| m.id == id)
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Cancelled,
    StoppedByObserver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks_completed: u64,
    pub collisions: usize,
    pub wraps: usize,
    pub outcome: RunOutcome,
}

pub struct SimulationEngine {
    motion: MotionConfig,
    bounds: WorldBounds,
    state: EngineState,
    ticks: Tick,
    stop: StopSignal,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::with_checked(MotionConfig::default(), WorldBounds::GLOBE)
    }
}

impl SimulationEngine {
    /// Build an engine, rejecting an empty step range or a degenerate domain
    pub fn new(motion: MotionConfig, bounds: WorldBounds) -> Result<Self, ConfigError> {
        motion.validate()?;
        bounds.check("bounds")?;
        Ok(Self::with_checked(motion, bounds))
    }

    pub fn from_config(config: &PlateConfig) -> Result<Self, ConfigError> {
        Self::new(config.motion.clone(), config.bounds)
    }

    fn with_checked(motion: MotionConfig, bounds: WorldBounds) -> Self {
        Self {
            motion,
            bounds,
            state: EngineState::Stopped,
            ticks: 0,
            stop: StopSignal::new(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Ticks completed over the engine's lifetime
    pub fn ticks_elapsed(&self) -> Tick {
        self.ticks
    }

    /// Handle that cancels `run` between ticks when raised
    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    /// Advance every plate by one step, in world order
    pub fn tick<R: Rng>(&mut self, world: &mut WorldState, rng: &mut R) -> TickReport {
        let mut moves = Vec::with_capacity(world.len());

        for slot in 0..world.len() {
            let drawn = Offset::new(self.motion.step_range.sample(rng), self.motion.step_range.sample(rng));
            let plate = &world.plates()[slot];
            let id = plate.id;

            let candidate = geometry::translate(plate.polygon(), drawn.dx as f64, drawn.dy as f64);
            let collided_with = world
                .plates()
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != slot)
                .find(|(_, other)| geometry::intersects(&candidate, other.polygon()))
                .map(|(_, other)| other.id);

            let (applied, moved) = match collided_with {
                Some(other) => {
                    tracing::trace!("Plate {} would hit plate {}, reversing {:?}", id, other, drawn);
                    let reversed = drawn.negated();
                    let moved = geometry::translate(plate.polygon(), reversed.dx as f64, reversed.dy as f64);
                    (reversed, moved)
                }
                None => (drawn, candidate),
            };

            let (wrapped, wrap) = wrap_polygon(&moved, &self.bounds);
            debug_assert!(
                !geometry::is_valid(plate.polygon()) || geometry::is_valid(&wrapped),
                "plate {} became invalid during tick",
                id
            );

            world.set_polygon_at(slot, wrapped);
            moves.push(PlateMove {
                id,
                drawn,
                applied,
                collided_with,
                wrap,
            });
        }

        self.ticks += 1;
        let report = TickReport { tick: self.ticks, moves };
        tracing::debug!(
            "Tick {}: {} collision(s), {} wrap(s)",
            report.tick,
            report.collision_count(),
            report.wrap_count()
        );
        report
    }

    /// Run up to `steps` ticks, notifying `observer` after each one.
    ///
    /// Stops early when the stop signal is raised (checked before every
    /// tick) or when the observer breaks. The world is always left at the
    /// end of a fully committed tick.
    pub fn run<R, O>(&mut self, world: &mut WorldState, steps: u64, rng: &mut R, observer: &mut O) -> RunSummary
    where
        R: Rng,
        O: TickObserver + ?Sized,
    {
        self.state = EngineState::Running;
        tracing::info!("Running {} tick(s) over {}", steps, world.summary());

        let mut summary = RunSummary {
            ticks_completed: 0,
            collisions: 0,
            wraps: 0,
            outcome: RunOutcome::Completed,
        };

        for _ in 0..steps {
            if self.stop.is_raised() {
                tracing::warn!("Run cancelled after {} tick(s)", summary.ticks_completed);
                summary.outcome = RunOutcome::Cancelled;
                break;
            }

            let report = self.tick(world, rng);
            summary.ticks_completed += 1;
            summary.collisions += report.collision_count();
            summary.wraps += report.wrap_count();

            if observer.on_tick(&report, world).is_break() {
                tracing::info!("Observer stopped run at tick {}", report.tick);
                summary.outcome = RunOutcome::StoppedByObserver;
                break;
            }
        }

        self.state = EngineState::Stopped;
        tracing::info!(
            "Run finished ({:?}): {} tick(s), {} collision(s), {} wrap(s)",
            summary.outcome,
            summary.ticks_completed,
            summary.collisions,
            summary.wraps
        );
        summary
    }
}

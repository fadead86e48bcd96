//! Capability-gated vehicle hierarchy.
//!
//! `Vehicle` is the shared base and says nothing about engines. Engine control
//! lives in the separate `EnginePowered` capability, implemented only by
//! vehicles that really have an engine. Callers that start or stop engines
//! take `EnginePowered`, so an `ElectricCar` can never reach them:
//!
//! ```compile_fail
//! use solid_principles::vehicles::{run_engine_cycle, ElectricCar};
//!
//! let mut tesla = ElectricCar;
//! run_engine_cycle(&mut tesla);
//! ```
//!
//! ```compile_fail
//! use solid_principles::vehicles::{ElectricCar, EnginePowered};
//!
//! let mut tesla = ElectricCar;
//! tesla.start_engine();
//! ```
//!
//! ```
//! use solid_principles::vehicles::{run_engine_cycle, Car, EngineEvent};
//!
//! let mut car = Car::with_output(Vec::new());
//! run_engine_cycle(&mut car);
//! assert_eq!(car.events(), &[EngineEvent::Started, EngineEvent::Stopped]);
//! ```

use std::fmt;
use std::io::{self, Stdout, Write};

/// Common base for every vehicle. Carries no behavior of its own.
pub trait Vehicle: fmt::Debug {}

/// Capability: the vehicle has an engine that can be started and stopped.
pub trait EnginePowered {
    fn start_engine(&mut self);
    fn stop_engine(&mut self);
}

/// Observable effect of one engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    Started,
    Stopped,
}

impl EngineEvent {
    pub fn message(self) -> &'static str {
        match self {
            EngineEvent::Started => "Starting the car engine.",
            EngineEvent::Stopped => "Stopping the car engine.",
        }
    }
}

impl fmt::Display for EngineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Combustion car: a `Vehicle` that is also `EnginePowered`.
pub struct Car<W: Write = Stdout> {
    out: W,
    events: Vec<EngineEvent>,
}

impl Car {
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Car<W> {
    /// Car whose engine messages go to `out` instead of stdout.
    pub fn with_output(out: W) -> Self {
        Car {
            out,
            events: Vec::new(),
        }
    }

    /// Engine effects emitted so far, oldest first. The history is kept for
    /// the whole life of the car and never trimmed.
    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn emit(&mut self, event: EngineEvent) {
        // The engine operation has happened either way; a broken console only
        // loses the message.
        if let Err(err) = writeln!(self.out, "{event}").and_then(|_| self.out.flush()) {
            tracing::warn!(%event, error = %err, "could not write engine message");
        }
        self.events.push(event);
    }
}

impl<W: Write> fmt::Debug for Car<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Car").field("events", &self.events).finish()
    }
}

impl<W: Write> Vehicle for Car<W> {}

impl<W: Write> EnginePowered for Car<W> {
    fn start_engine(&mut self) {
        self.emit(EngineEvent::Started);
    }

    fn stop_engine(&mut self) {
        self.emit(EngineEvent::Stopped);
    }
}

/// Battery-powered car. A `Vehicle`, but deliberately not `EnginePowered`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ElectricCar;

impl Vehicle for ElectricCar {}

/// Starts then stops one engine.
pub fn run_engine_cycle<E: EnginePowered + ?Sized>(engine: &mut E) {
    engine.start_engine();
    engine.stop_engine();
}

/// Runs one engine cycle on every vehicle in the fleet, in order.
pub fn service_fleet(fleet: &mut [Box<dyn EnginePowered>]) {
    for engine in fleet.iter_mut() {
        run_engine_cycle(engine.as_mut());
    }
}

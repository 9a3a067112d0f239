//! Named events exchanged between behaviors, the orchestrator, and the host.
//!
//! An [`Event`] is a name plus a payload. Behaviors build events through the
//! typed constructors, so their payloads are always well formed. Events that
//! arrive from outside go through [`Event::from_parts`], which accepts the
//! loose payload shapes a host is likely to send (bare numbers and pairs)
//! and normalizes them, rejecting anything that does not fit the name.

use crate::core::Cell;
use crate::error::{Result, WandererError};
use crate::input::Mode;
use crate::platform::VelocityCommand;

/// Well-known event names.
pub mod names {
    /// Evaluate chose a cell to translate to.
    pub const MOVE: &str = "move";
    /// Evaluate (or recentering) asked for an axis alignment.
    pub const ROTATE: &str = "rotate";
    /// A motion primitive finished; evaluate again.
    pub const CONTINUE_EVALUATING: &str = "continue-evaluating";
    /// The agent translated through the maze exit.
    pub const REACHED_EXIT: &str = "reached-exit";
    /// Return to the start pose and clear memory.
    pub const RESET: &str = "reset";
    /// Hand control to the operator.
    pub const ENTER_MANUAL: &str = "enter-manual";
    /// Operator released control; recenter before exploring again.
    pub const RECENTER_REQUEST: &str = "recenter-request";
    /// Prefix of the per-agent periodic event.
    pub const TICK_PREFIX: &str = "tick_";
}

/// Rotation request for axis alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Turn a quarter turn counter-clockwise.
    CounterClockwise,
    /// Snap to the nearest axis without turning further.
    Align,
    /// Turn a quarter turn clockwise.
    Clockwise,
}

impl Rotation {
    /// Signed step count (-1, 0, +1).
    pub fn steps(self) -> i32 {
        match self {
            Rotation::CounterClockwise => -1,
            Rotation::Align => 0,
            Rotation::Clockwise => 1,
        }
    }

    /// Rotation from a signed step count.
    pub fn from_steps(steps: i64) -> Option<Self> {
        match steps {
            -1 => Some(Rotation::CounterClockwise),
            0 => Some(Rotation::Align),
            1 => Some(Rotation::Clockwise),
            _ => None,
        }
    }
}

/// Event payload.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// No payload.
    None,
    /// Target cell for a translation.
    Cell(Cell),
    /// Rotation request.
    Rotation(Rotation),
    /// Control mode.
    Mode(Mode),
    /// Operator velocity.
    Velocity(VelocityCommand),
    /// Untyped number, as delivered by a host.
    Number(f64),
    /// Untyped pair, as delivered by a host.
    Pair(f64, f64),
}

/// A named, immutable event.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    name: String,
    payload: Payload,
}

impl Event {
    /// Translate to `cell`.
    pub fn move_to(cell: Cell) -> Self {
        Self::typed(names::MOVE, Payload::Cell(cell))
    }

    /// Align with an optional quarter turn.
    pub fn rotate(rotation: Rotation) -> Self {
        Self::typed(names::ROTATE, Payload::Rotation(rotation))
    }

    /// Snap to the nearest axis (a rotate event with no turn).
    pub fn realign() -> Self {
        Self::rotate(Rotation::Align)
    }

    /// Return to evaluation.
    pub fn continue_evaluating() -> Self {
        Self::typed(names::CONTINUE_EVALUATING, Payload::None)
    }

    /// The exit translation completed.
    pub fn reached_exit() -> Self {
        Self::typed(names::REACHED_EXIT, Payload::None)
    }

    /// Reset, resuming in `mode` afterwards.
    pub fn reset(mode: Mode) -> Self {
        Self::typed(names::RESET, Payload::Mode(mode))
    }

    /// Manual drive at the given velocity.
    pub fn enter_manual(velocity: VelocityCommand) -> Self {
        Self::typed(names::ENTER_MANUAL, Payload::Velocity(velocity))
    }

    /// Recenter in the current cell before exploring.
    pub fn recenter_request() -> Self {
        Self::typed(names::RECENTER_REQUEST, Payload::None)
    }

    /// Periodic event with an agent-specific name.
    pub fn tick(name: &str) -> Self {
        Self::typed(name, Payload::None)
    }

    fn typed(name: &str, payload: Payload) -> Self {
        Self {
            name: name.to_string(),
            payload,
        }
    }

    /// Build an event from untyped parts, normalizing the payload.
    ///
    /// Known names require a matching payload shape:
    ///
    /// | name | accepted payloads |
    /// |------|-------------------|
    /// | `move` | cell, integer pair |
    /// | `rotate` | rotation, -1/0/1 |
    /// | `reset` | mode, 0/1, none (autonomous) |
    /// | `enter-manual` | velocity, pair |
    /// | others | none |
    ///
    /// Unknown names are accepted unchanged; the orchestrator ignores any
    /// event it has no transition for.
    pub fn from_parts(name: impl Into<String>, payload: Payload) -> Result<Self> {
        let name = name.into();
        let invalid = |payload: &Payload| {
            WandererError::InvalidEvent(format!("'{}' cannot carry {:?}", name, payload))
        };

        let payload = match name.as_str() {
            names::MOVE => match payload {
                Payload::Cell(_) => payload,
                Payload::Pair(c, r) if is_integral(c) && is_integral(r) => {
                    Payload::Cell(Cell::new(c as i32, r as i32))
                }
                other => return Err(invalid(&other)),
            },
            names::ROTATE => match payload {
                Payload::Rotation(_) => payload,
                Payload::Number(n) if is_integral(n) => match Rotation::from_steps(n as i64) {
                    Some(rotation) => Payload::Rotation(rotation),
                    None => return Err(invalid(&payload)),
                },
                other => return Err(invalid(&other)),
            },
            names::RESET => match payload {
                Payload::Mode(_) => payload,
                Payload::None => Payload::Mode(Mode::Autonomous),
                Payload::Number(n) if n == 0.0 => Payload::Mode(Mode::Autonomous),
                Payload::Number(n) if n == 1.0 => Payload::Mode(Mode::Manual),
                other => return Err(invalid(&other)),
            },
            names::ENTER_MANUAL => match payload {
                Payload::Velocity(_) => payload,
                Payload::Pair(v, w) if v.is_finite() && w.is_finite() => {
                    Payload::Velocity(VelocityCommand::new(v, w))
                }
                other => return Err(invalid(&other)),
            },
            names::CONTINUE_EVALUATING | names::REACHED_EXIT | names::RECENTER_REQUEST => {
                match payload {
                    Payload::None => payload,
                    other => return Err(invalid(&other)),
                }
            }
            _ => payload,
        };

        Ok(Self { name, payload })
    }

    /// Event name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Event payload.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Target cell, if this event carries one.
    pub fn cell(&self) -> Option<Cell> {
        match self.payload {
            Payload::Cell(cell) => Some(cell),
            _ => None,
        }
    }

    /// Rotation request, if this event carries one.
    pub fn rotation(&self) -> Option<Rotation> {
        match self.payload {
            Payload::Rotation(rotation) => Some(rotation),
            _ => None,
        }
    }

    /// Mode, if this event carries one.
    pub fn mode(&self) -> Option<Mode> {
        match self.payload {
            Payload::Mode(mode) => Some(mode),
            _ => None,
        }
    }

    /// Velocity, if this event carries one.
    pub fn velocity(&self) -> Option<VelocityCommand> {
        match self.payload {
            Payload::Velocity(velocity) => Some(velocity),
            _ => None,
        }
    }
}

fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value.abs() <= f64::from(i32::MAX)
}

//! Operator input translation.
//!
//! Turns discrete button and key events into orchestrator events. The
//! translator owns the control [`Mode`] and the last commanded velocity;
//! it runs whenever input arrives, independently of the tick loop.
//!
//! | Input | Effect |
//! |-------|--------|
//! | `restart` | reset, keeping the current mode |
//! | `mode-toggle-to-manual` | Autonomous → Manual, drive at (0, 0) |
//! | `mode-toggle-to-autonomous` | Manual → Autonomous, recenter first |
//! | key down `w` / `s` | linear = ±speed |
//! | key down `a` / `d` | angular = ∓speed (a turns counter-clockwise) |
//! | key up | zero the axis that key controlled |
//!
//! Key events only apply in Manual mode while the agent is inside the maze.

use log::{debug, info};

use crate::config::{ManualConfig, MazeBounds};
use crate::core::Point2D;
use crate::error::{Result, WandererError};
use crate::event::Event;
use crate::platform::VelocityCommand;

/// Input event names.
pub mod names {
    /// Restart button.
    pub const RESTART: &str = "restart";
    /// Operator takes control.
    pub const MODE_TOGGLE_TO_MANUAL: &str = "mode-toggle-to-manual";
    /// Operator releases control.
    pub const MODE_TOGGLE_TO_AUTONOMOUS: &str = "mode-toggle-to-autonomous";
    /// Key pressed.
    pub const KEY_DOWN: &str = "keydown";
    /// Key released.
    pub const KEY_UP: &str = "keyup";
}

/// Who is driving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The exploration policy drives.
    #[default]
    Autonomous,
    /// The operator drives.
    Manual,
}

impl Mode {
    /// Human-readable label for display collaborators.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Autonomous => "wandering",
            Mode::Manual => "user playing",
        }
    }
}

/// Drive keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `w`
    Forward,
    /// `s`
    Back,
    /// `a`
    TurnLeft,
    /// `d`
    TurnRight,
}

impl Key {
    /// Key for a key identifier, if it is one of the drive keys.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "w" => Some(Key::Forward),
            "s" => Some(Key::Back),
            "a" => Some(Key::TurnLeft),
            "d" => Some(Key::TurnRight),
            _ => None,
        }
    }
}

/// A discrete operator input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Restart the run.
    Restart,
    /// Switch to manual drive.
    ModeToggleToManual,
    /// Switch back to autonomous exploration.
    ModeToggleToAutonomous,
    /// Drive key pressed.
    KeyDown(Key),
    /// Drive key released.
    KeyUp(Key),
}

impl InputEvent {
    /// Parse a named input; key events need a key identifier.
    pub fn from_parts(name: &str, key: Option<&str>) -> Result<Self> {
        let drive_key = || {
            key.and_then(Key::parse).ok_or_else(|| {
                WandererError::InvalidEvent(format!("'{}' needs a drive key, got {:?}", name, key))
            })
        };
        match name {
            names::RESTART => Ok(InputEvent::Restart),
            names::MODE_TOGGLE_TO_MANUAL => Ok(InputEvent::ModeToggleToManual),
            names::MODE_TOGGLE_TO_AUTONOMOUS => Ok(InputEvent::ModeToggleToAutonomous),
            names::KEY_DOWN => Ok(InputEvent::KeyDown(drive_key()?)),
            names::KEY_UP => Ok(InputEvent::KeyUp(drive_key()?)),
            other => Err(WandererError::InvalidEvent(format!(
                "unknown input '{}'",
                other
            ))),
        }
    }
}

/// Mode holder and key-to-velocity mapper.
#[derive(Clone, Debug)]
pub struct InputTranslator {
    mode: Mode,
    velocity: VelocityCommand,
    speeds: ManualConfig,
    bounds: MazeBounds,
}

impl InputTranslator {
    /// Create a translator in Autonomous mode.
    pub fn new(speeds: ManualConfig, bounds: MazeBounds) -> Self {
        Self {
            mode: Mode::Autonomous,
            velocity: VelocityCommand::stop(),
            speeds,
            bounds,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Last commanded operator velocity.
    pub fn velocity(&self) -> VelocityCommand {
        self.velocity
    }

    /// Translate one input into at most one orchestrator event.
    ///
    /// `position` is the agent's current position, used to ignore drive
    /// keys once the agent has left the maze.
    pub fn handle(&mut self, input: InputEvent, position: Point2D) -> Option<Event> {
        match input {
            InputEvent::Restart => Some(Event::reset(self.mode)),
            InputEvent::ModeToggleToManual => {
                if self.mode != Mode::Autonomous {
                    return None;
                }
                self.mode = Mode::Manual;
                self.velocity = VelocityCommand::stop();
                info!("[Input] Mode -> {}", self.mode.label());
                Some(Event::enter_manual(self.velocity))
            }
            InputEvent::ModeToggleToAutonomous => {
                if self.mode != Mode::Manual {
                    return None;
                }
                self.mode = Mode::Autonomous;
                self.velocity = VelocityCommand::stop();
                info!("[Input] Mode -> {}", self.mode.label());
                Some(Event::recenter_request())
            }
            InputEvent::KeyDown(key) | InputEvent::KeyUp(key) => {
                if self.mode != Mode::Manual || !self.bounds.contains(position) {
                    debug!("[Input] Ignoring {:?} in {:?} mode", input, self.mode);
                    return None;
                }
                let pressed = matches!(input, InputEvent::KeyDown(_));
                self.apply_key(key, pressed);
                Some(Event::enter_manual(self.velocity))
            }
        }
    }

    fn apply_key(&mut self, key: Key, pressed: bool) {
        let linear = self.speeds.linear_speed;
        let angular = self.speeds.angular_speed;
        match (key, pressed) {
            (Key::Forward, true) => self.velocity.linear = linear,
            (Key::Back, true) => self.velocity.linear = -linear,
            (Key::TurnLeft, true) => self.velocity.angular = -angular,
            (Key::TurnRight, true) => self.velocity.angular = angular,
            (Key::Forward | Key::Back, false) => self.velocity.linear = 0.0,
            (Key::TurnLeft | Key::TurnRight, false) => self.velocity.angular = 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::names as event_names;

    fn translator() -> InputTranslator {
        InputTranslator::new(ManualConfig::default(), MazeBounds::default())
    }

    const INSIDE: Point2D = Point2D::new(0.0, 0.0);

    #[test]
    fn test_toggle_to_manual_once() {
        let mut t = translator();
        let e = t.handle(InputEvent::ModeToggleToManual, INSIDE).unwrap();
        assert_eq!(e, Event::enter_manual(VelocityCommand::stop()));
        assert_eq!(t.mode(), Mode::Manual);
        assert_eq!(t.mode().label(), "user playing");

        // Already manual: no event
        assert!(t.handle(InputEvent::ModeToggleToManual, INSIDE).is_none());
    }

    #[test]
    fn test_toggle_to_autonomous_requests_recenter() {
        let mut t = translator();
        assert!(t.handle(InputEvent::ModeToggleToAutonomous, INSIDE).is_none());

        t.handle(InputEvent::ModeToggleToManual, INSIDE);
        let e = t.handle(InputEvent::ModeToggleToAutonomous, INSIDE).unwrap();
        assert_eq!(e.name(), event_names::RECENTER_REQUEST);
        assert_eq!(t.mode(), Mode::Autonomous);
        assert_eq!(t.mode().label(), "wandering");
    }

    #[test]
    fn test_restart_carries_mode() {
        let mut t = translator();
        assert_eq!(
            t.handle(InputEvent::Restart, INSIDE),
            Some(Event::reset(Mode::Autonomous))
        );
        t.handle(InputEvent::ModeToggleToManual, INSIDE);
        assert_eq!(
            t.handle(InputEvent::Restart, INSIDE),
            Some(Event::reset(Mode::Manual))
        );
    }

    #[test]
    fn test_keys_ignored_when_autonomous() {
        let mut t = translator();
        assert!(t.handle(InputEvent::KeyDown(Key::Forward), INSIDE).is_none());
        assert!(t.velocity().is_stop());
    }

    #[test]
    fn test_key_mapping_and_release() {
        let mut t = translator();
        t.handle(InputEvent::ModeToggleToManual, INSIDE);

        let e = t.handle(InputEvent::KeyDown(Key::Forward), INSIDE).unwrap();
        assert_eq!(e.velocity(), Some(VelocityCommand::new(5.0, 0.0)));

        let e = t.handle(InputEvent::KeyDown(Key::TurnLeft), INSIDE).unwrap();
        assert_eq!(e.velocity(), Some(VelocityCommand::new(5.0, -0.5)));

        // Releasing the turn key keeps the linear axis
        let e = t.handle(InputEvent::KeyUp(Key::TurnLeft), INSIDE).unwrap();
        assert_eq!(e.velocity(), Some(VelocityCommand::new(5.0, 0.0)));

        let e = t.handle(InputEvent::KeyDown(Key::TurnRight), INSIDE).unwrap();
        assert_eq!(e.velocity(), Some(VelocityCommand::new(5.0, 0.5)));

        let e = t.handle(InputEvent::KeyUp(Key::Forward), INSIDE).unwrap();
        assert_eq!(e.velocity(), Some(VelocityCommand::new(0.0, 0.5)));

        let e = t.handle(InputEvent::KeyDown(Key::Back), INSIDE).unwrap();
        assert_eq!(e.velocity(), Some(VelocityCommand::new(-5.0, 0.5)));
    }

    #[test]
    fn test_keys_ignored_outside_maze() {
        let mut t = translator();
        t.handle(InputEvent::ModeToggleToManual, INSIDE);
        let outside = Point2D::new(300.0, 355.0);
        assert!(t.handle(InputEvent::KeyDown(Key::Forward), outside).is_none());
    }

    #[test]
    fn test_parse_inputs() {
        assert_eq!(
            InputEvent::from_parts("keydown", Some("w")).unwrap(),
            InputEvent::KeyDown(Key::Forward)
        );
        assert_eq!(
            InputEvent::from_parts("keyup", Some("a")).unwrap(),
            InputEvent::KeyUp(Key::TurnLeft)
        );
        assert_eq!(
            InputEvent::from_parts("restart", None).unwrap(),
            InputEvent::Restart
        );
        assert!(InputEvent::from_parts("keydown", Some("q")).is_err());
        assert!(InputEvent::from_parts("keydown", None).is_err());
        assert!(InputEvent::from_parts("jump", None).is_err());
    }
}

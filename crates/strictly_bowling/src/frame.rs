//! Frame progression for frames one through nine, and the frame record
//! shared by all ten frames.

use super::action::{Roll, RollError};
use super::config::BonusRack;
use super::tenth::TenthFrame;
use super::{FrameNumber, FrameOutcome, PinCount, RollPosition, PINS_PER_RACK};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Regular frame state machine
// ─────────────────────────────────────────────────────────────

/// Roll-acceptance state of a regular frame (1-9).
///
/// `Strike`, `Spare` and `Open` are terminal for roll acceptance only.
/// Strikes and spares still wait on later rolls for their score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FrameState {
    /// No rolls yet.
    Start,
    /// First roll left pins standing.
    AwaitingSecond {
        /// Pins knocked down by the first roll.
        first: PinCount,
    },
    /// Ten on the first roll. Closed after one roll.
    Strike,
    /// Ten across two rolls.
    Spare,
    /// Pins left standing after two rolls.
    Open,
}

impl FrameState {
    /// Pins standing for the next roll, or `None` once the frame is closed.
    pub fn standing(self) -> Option<u8> {
        match self {
            FrameState::Start => Some(PINS_PER_RACK),
            FrameState::AwaitingSecond { first } => Some(first.remaining()),
            FrameState::Strike | FrameState::Spare | FrameState::Open => None,
        }
    }

    /// Consumes one roll and returns the next state.
    ///
    /// A strike on the first roll closes the frame; it never asks for a
    /// second roll.
    #[instrument]
    pub fn advance(self, pins: PinCount) -> Result<Self, RollError> {
        match self {
            FrameState::Start if pins.is_strike() => Ok(FrameState::Strike),
            FrameState::Start => Ok(FrameState::AwaitingSecond { first: pins }),
            FrameState::AwaitingSecond { first } => {
                let standing = first.remaining();
                if pins.get() > standing {
                    return Err(RollError::InvalidPinCount {
                        pins: pins.get(),
                        standing,
                    });
                }
                if pins.get() == standing {
                    Ok(FrameState::Spare)
                } else {
                    Ok(FrameState::Open)
                }
            }
            FrameState::Strike | FrameState::Spare | FrameState::Open => Err(
                RollError::RollSequenceViolation(format!("frame already closed as {self}")),
            ),
        }
    }

    /// Returns true once the frame accepts no more rolls.
    pub fn is_closed(self) -> bool {
        self.standing().is_none()
    }

    /// Classifies the frame from its own rolls.
    pub fn outcome(self) -> FrameOutcome {
        match self {
            FrameState::Start | FrameState::AwaitingSecond { .. } => FrameOutcome::InProgress,
            FrameState::Strike => FrameOutcome::Strike,
            FrameState::Spare => FrameOutcome::Spare,
            FrameState::Open => FrameOutcome::Open,
        }
    }

    /// Most rolls this frame can hold given what has happened so far.
    pub fn capacity(self) -> usize {
        match self {
            FrameState::Strike => 1,
            _ => 2,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Frame record
// ─────────────────────────────────────────────────────────────

/// Which state machine drives a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Frames one through nine.
    Regular(FrameState),
    /// The tenth frame, with its own bonus rolls.
    Tenth(TenthFrame),
}

/// One of the ten scoring units of a game.
///
/// Rolls are appended only through [`Frame::bowl`], and only while the
/// frame is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    number: FrameNumber,
    rolls: Vec<PinCount>,
    progress: Progress,
}

impl Frame {
    /// Creates an empty frame. The tenth frame uses `rack` for its bonus rolls.
    #[instrument]
    pub fn new(number: FrameNumber, rack: BonusRack) -> Self {
        let progress = if number.is_tenth() {
            Progress::Tenth(TenthFrame::new(rack))
        } else {
            Progress::Regular(FrameState::Start)
        };
        Self {
            number,
            rolls: Vec::with_capacity(3),
            progress,
        }
    }

    /// Returns the frame number.
    pub fn number(&self) -> FrameNumber {
        self.number
    }

    /// Returns the pins of each roll taken in this frame.
    pub fn rolls(&self) -> &[PinCount] {
        &self.rolls
    }

    /// Returns the state machine driving this frame.
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Pins standing for the next roll, or `None` once closed.
    pub fn standing(&self) -> Option<u8> {
        match self.progress {
            Progress::Regular(state) => state.standing(),
            Progress::Tenth(tenth) => tenth.standing(),
        }
    }

    /// Returns true once the frame accepts no more rolls.
    pub fn is_closed(&self) -> bool {
        self.standing().is_none()
    }

    /// Classifies the frame from its own rolls.
    pub fn outcome(&self) -> FrameOutcome {
        match self.progress {
            Progress::Regular(state) => state.outcome(),
            Progress::Tenth(tenth) => tenth.outcome(),
        }
    }

    /// Sum of the pins knocked down in this frame's own rolls.
    pub fn pin_total(&self) -> u16 {
        self.rolls.iter().map(|pins| u16::from(pins.get())).sum()
    }

    /// Records one roll, validating it against the pins standing.
    ///
    /// On error the frame is left untouched.
    #[instrument(skip(self), fields(frame = %self.number))]
    pub fn bowl(&mut self, pins: u8) -> Result<PinCount, RollError> {
        let standing = self.standing().ok_or_else(|| {
            RollError::RollSequenceViolation(format!(
                "frame {} accepts no more rolls",
                self.number
            ))
        })?;
        let pins = PinCount::within(pins, standing)?;

        let next = match self.progress {
            Progress::Regular(state) => Progress::Regular(state.advance(pins)?),
            Progress::Tenth(tenth) => Progress::Tenth(tenth.advance(pins)?),
        };

        self.rolls.push(pins);
        self.progress = next;

        if self.is_closed() {
            debug!(outcome = %self.outcome(), pins = self.pin_total(), "Frame closed");
        }
        Ok(pins)
    }

    /// Most rolls this frame can hold given what has happened so far.
    pub fn capacity(&self) -> usize {
        match self.progress {
            Progress::Regular(state) => state.capacity(),
            Progress::Tenth(tenth) => tenth.capacity(),
        }
    }

    /// Returns the rolls taken, as roll events.
    pub fn roll_events(&self) -> impl Iterator<Item = Roll> + '_ {
        self.rolls.iter().enumerate().filter_map(|(index, pins)| {
            RollPosition::from_index(index).map(|position| Roll::played(self.number, position, *pins))
        })
    }

    /// Returns the taken rolls padded with untaken slots up to capacity.
    pub fn roll_slots(&self) -> Vec<Roll> {
        (0..self.capacity())
            .filter_map(|index| {
                let position = RollPosition::from_index(index)?;
                Some(match self.rolls.get(index) {
                    Some(pins) => Roll::played(self.number, position, *pins),
                    None => Roll::not_played(self.number, position),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pins(n: u8) -> PinCount {
        PinCount::new(n).unwrap()
    }

    fn frame(number: u8) -> Frame {
        Frame::new(FrameNumber::new(number).unwrap(), BonusRack::Standing)
    }

    #[test]
    fn test_strike_closes_after_one_roll() {
        let state = FrameState::Start.advance(pins(10)).unwrap();
        assert_eq!(state, FrameState::Strike);
        assert!(state.is_closed());
        assert!(state.advance(pins(0)).is_err());
    }

    #[test]
    fn test_spare_and_open_transitions() {
        let awaiting = FrameState::Start.advance(pins(7)).unwrap();
        assert_eq!(awaiting, FrameState::AwaitingSecond { first: pins(7) });
        assert_eq!(awaiting.standing(), Some(3));
        assert_eq!(awaiting.advance(pins(3)), Ok(FrameState::Spare));
        assert_eq!(awaiting.advance(pins(2)), Ok(FrameState::Open));
    }

    #[test]
    fn test_second_roll_bounded_by_standing_pins() {
        let awaiting = FrameState::Start.advance(pins(5)).unwrap();
        assert_eq!(
            awaiting.advance(pins(6)),
            Err(RollError::InvalidPinCount {
                pins: 6,
                standing: 5
            })
        );
    }

    #[test]
    fn test_frame_rejects_without_mutation() {
        let mut f = frame(3);
        f.bowl(5).unwrap();
        let before = f.clone();

        assert!(matches!(f.bowl(6), Err(RollError::InvalidPinCount { .. })));
        assert_eq!(f, before);
    }

    #[test]
    fn test_closed_frame_refuses_rolls() {
        let mut f = frame(1);
        f.bowl(10).unwrap();
        assert!(matches!(
            f.bowl(0),
            Err(RollError::RollSequenceViolation(_))
        ));
        assert_eq!(f.rolls(), &[pins(10)]);
    }

    #[test]
    fn test_roll_slots_pad_with_not_played() {
        let mut f = frame(2);
        f.bowl(4).unwrap();
        let slots = f.roll_slots();
        assert_eq!(slots.len(), 2);
        assert!(slots[0].is_played());
        assert!(!slots[1].is_played());

        let mut strike = frame(2);
        strike.bowl(10).unwrap();
        assert_eq!(strike.roll_slots().len(), 1);
    }

    #[test]
    fn test_state_labels() {
        assert_eq!(FrameState::Strike.to_string(), "STRIKE");
        assert_eq!(
            FrameState::AwaitingSecond { first: pins(1) }.to_string(),
            "AWAITING_SECOND"
        );
    }
}

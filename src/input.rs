//! Turning key state into game commands.
//!
//! Two flavours: [`HeldKeys`] is sampled every frame (the window front end
//! asks the platform which arrows are down), [`drain`] folds whatever key
//! presses an input thread queued since the last tick.

use std::sync::mpsc::{Receiver, TryRecvError};

use rand::Rng;

use crate::game::GameState;
use crate::snake::Direction::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Quit,
    Restart,
}

/// Arrow keys currently held down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// First held key, in up/down/left/right order, that does not reverse
    /// `current`.
    pub fn choose(&self, current: Direction) -> Option<Direction> {
        [(self.up, Up), (self.down, Down), (self.left, Left), (self.right, Right)]
            .into_iter()
            .find(|&(held, dir)| held && !dir.is_reverse_of(current))
            .map(|(_, dir)| dir)
    }
}

/// Everything the input thread asked for during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Most recent steering request.
    pub steer: Option<Direction>,
    pub quit: bool,
    pub restart: bool,
    /// The sending side hung up; no more input will arrive.
    pub disconnected: bool,
}

impl TickInput {
    pub fn record(&mut self, command: Command) {
        match command {
            Command::Steer(dir) => self.steer = Some(dir),
            Command::Quit => self.quit = true,
            Command::Restart => self.restart = true,
        }
    }

    /// Applies the tick's input. Quitting wins over steering, and the steer
    /// request still has to pass the reversal check. A finished game only
    /// listens for restart.
    pub fn apply<R: Rng + ?Sized>(&self, state: &mut GameState, rng: &mut R) {
        if self.quit {
            state.quit();
            return;
        }

        if state.is_over() {
            if self.restart {
                state.restart(rng);
            }
            return;
        }

        if let Some(dir) = self.steer {
            state.steer(dir);
        }
    }
}

/// Empties the queue without blocking.
pub fn drain(rx: &Receiver<Command>) -> TickInput {
    let mut input = TickInput::default();

    loop {
        match rx.try_recv() {
            Ok(command) => input.record(command),
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                input.disconnected = true;
                break;
            },
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rules;
    use crate::snake::Snake;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::mpsc::channel;

    #[test]
    fn held_keys_follow_priority() {
        let all = HeldKeys { up: true, down: true, left: true, right: true };
        assert_eq!(all.choose(Right), Some(Up));
        // Up reverses Down, so Down itself is next in line.
        assert_eq!(all.choose(Down), Some(Down));

        let sideways = HeldKeys { left: true, right: true, ..HeldKeys::default() };
        assert_eq!(sideways.choose(Right), Some(Right));
        assert_eq!(sideways.choose(Left), Some(Left));
        assert_eq!(sideways.choose(Up), Some(Left));
    }

    #[test]
    fn held_reversal_alone_is_ignored() {
        let back = HeldKeys { left: true, ..HeldKeys::default() };
        assert_eq!(back.choose(Right), None);
        assert_eq!(HeldKeys::default().choose(Right), None);
    }

    #[test]
    fn latest_steer_wins() {
        let (tx, rx) = channel();
        tx.send(Command::Steer(Up)).unwrap();
        tx.send(Command::Steer(Left)).unwrap();
        tx.send(Command::Steer(Down)).unwrap();

        let input = drain(&rx);
        assert_eq!(input.steer, Some(Down));
        assert!(!input.quit);
        assert!(!input.disconnected);

        assert_eq!(drain(&rx), TickInput::default());
    }

    #[test]
    fn hang_up_is_reported() {
        let (tx, rx) = channel();
        tx.send(Command::Steer(Up)).unwrap();
        drop(tx);

        let input = drain(&rx);
        assert_eq!(input.steer, Some(Up));
        assert!(input.disconnected);
    }

    #[test]
    fn quit_beats_steering() {
        let mut rng = StdRng::seed_from_u64(0);
        let rules = Rules::bordered(40, 20);
        let mut state = GameState::from_parts(rules, Snake::new((10, 10)), Right, (3, 3));

        let mut input = TickInput::default();
        input.record(Command::Quit);
        input.record(Command::Steer(Up));
        input.apply(&mut state, &mut rng);

        assert!(state.is_over());
        assert_eq!(state.direction(), Right);
    }

    #[test]
    fn latest_reversal_is_filtered() {
        let mut rng = StdRng::seed_from_u64(0);
        let rules = Rules::bordered(40, 20);
        let mut state = GameState::from_parts(rules, Snake::new((10, 10)), Right, (3, 3));

        let (tx, rx) = channel();
        tx.send(Command::Steer(Up)).unwrap();
        tx.send(Command::Steer(Left)).unwrap();
        drain(&rx).apply(&mut state, &mut rng);

        assert_eq!(state.direction(), Right);
    }

    #[test]
    fn restart_request_resets_finished_game() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut state = GameState::new(Rules::windowed(32, 24), &mut rng);
        state.quit();

        let mut input = TickInput::default();
        input.record(Command::Restart);
        input.apply(&mut state, &mut rng);

        assert!(!state.is_over());
    }
}

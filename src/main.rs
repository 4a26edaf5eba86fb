use std::process::exit;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}, mpsc::{Receiver, channel}};
use std::thread::sleep;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::{error, info, warn};

use snake::config::{FINAL_SCORE_HOLD, INPUT_POLL, TERM_HEIGHT, TERM_WIDTH, TICK_INTERVAL};
use snake::driver::{Driver, Interval, Phase};
use snake::game::GameState;
use snake::input::{self, Command};
use snake::render;
use snake::rules::Rules;
use snake::term::{self, Screen, TermManager};

fn main() {
    snake::logging::init();

    if let Err(err) = run() {
        error!("{:#}", err);
        exit(1);
    }
}

fn run() -> Result<()> {
    let width = u16::try_from(TERM_WIDTH).context("grid width does not fit a terminal")?;
    let height = u16::try_from(TERM_HEIGHT).context("grid height does not fit a terminal")?;
    // One extra row for the score line.
    term::check_size(width, height + 1)?;

    let mut term = TermManager::new();
    term.setup()?;

    let (tx, rx) = channel();
    let stop = Arc::new(AtomicBool::new(false));
    let input_thread = term::spawn_input(tx, stop.clone(), INPUT_POLL)?;

    let res = play(&mut term, &rx, Screen::new(width, height), &mut rand::thread_rng());

    stop.store(true, Ordering::Relaxed);
    if input_thread.join().is_err() {
        warn!("input thread panicked");
    }

    // Restore before main gets to log anything.
    term.restore();
    res
}

fn play<R: Rng + ?Sized>(term: &mut TermManager, rx: &Receiver<Command>, mut screen: Screen, rng: &mut R) -> Result<()> {
    let mut state = GameState::new(Rules::bordered(TERM_WIDTH, TERM_HEIGHT), rng);
    let mut driver = Driver::every_tick();
    let mut interval = Interval::new(TICK_INTERVAL, Instant::now());
    let mut quit = false;

    info!(width = TERM_WIDTH, height = TERM_HEIGHT, "game started");
    render::draw(&state, &mut screen);
    term.present(&screen)?;

    while Phase::of(&state) == Phase::Running {
        interval.wait();

        let mut tick = input::drain(rx);
        if tick.disconnected {
            warn!("input closed, ending game");
            tick.quit = true;
        }
        quit = tick.quit;

        driver.frame(&mut state, &tick, rng, &mut screen);
        term.present(&screen)?;
    }

    if quit {
        return Ok(());
    }

    render::draw_final(state.score(), &mut screen);
    term.present(&screen)?;
    sleep(FINAL_SCORE_HOLD);

    Ok(())
}

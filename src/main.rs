//! Backboard entry point
//!
//! Headless demo: drives one full timed match with seeded pseudo-random
//! shot traffic and prints everything the core asks the host to do.

use std::collections::VecDeque;
use std::env;
use std::path::PathBuf;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use backboard::GameConfig;
use backboard::consts::TICK_HZ;
use backboard::sim::{
    CHEAT_COLLIDER, GameSession, HoopEvent, SCORE_COLLIDER, TickInput,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let config = match args.next().map(PathBuf::from) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}; falling back to defaults");
                GameConfig::default()
            }
        },
        None => GameConfig::default(),
    };
    log::info!(
        "demo match: seed {seed}, {}s duration",
        config.game_duration_secs
    );

    let mut session = GameSession::new(config.clone());
    let mut rng = Pcg32::seed_from_u64(seed);

    session.tick(&TickInput {
        start: true,
        ..Default::default()
    });
    print_events(&mut session);

    let total_ticks = (config.countdown_from
        + 1
        + config.game_duration_secs
        + config.game_over_reset_secs
        + 1)
        * TICK_HZ;
    let mut pending: VecDeque<(u32, HoopEvent)> = VecDeque::new();
    let mut ball_speed = 2.0f32;

    for now in 0..total_ticks {
        let mut input = TickInput::default();

        // Roughly one shot attempt every four seconds
        if pending.is_empty() && rng.random_ratio(1, 4 * TICK_HZ) {
            input.zone_entries.push(rng.random_range(1..=3));
            queue_shot(&mut pending, now, rng.random_bool(0.7));
        }
        while let Some(&(due, _)) = pending.front() {
            if due > now {
                break;
            }
            if let Some((_, event)) = pending.pop_front() {
                input.hoop_events.push(event);
            }
        }

        // Ball mostly live, with the occasional dead stretch
        if ball_speed > 0.0 {
            if rng.random_ratio(1, 20 * TICK_HZ) {
                ball_speed = 0.0;
            }
        } else if rng.random_ratio(1, 2 * TICK_HZ) {
            ball_speed = 2.0;
        }
        input.ball_speed = Some(ball_speed);

        session.tick(&input);
        print_events(&mut session);
    }

    println!("--- leaderboard ---");
    for line in session.leaderboard().render_lines() {
        println!("{line}");
    }
    let stats = session.stats();
    println!(
        "shots: {}, best streak: {}, avg interval: {:.1}s",
        stats.total_shots(),
        stats.highest_streak(),
        stats.avg_shot_interval_secs()
    );
}

/// Queue the hoop traffic of one shot attempt. A make traverses score then
/// cheat volume top to bottom; a rim-out pops back out of the score volume.
fn queue_shot(pending: &mut VecDeque<(u32, HoopEvent)>, now: u32, made: bool) {
    pending.push_back((now + 30, HoopEvent::enter(SCORE_COLLIDER)));
    pending.push_back((now + 45, HoopEvent::exit(SCORE_COLLIDER)));
    if made {
        pending.push_back((now + 50, HoopEvent::enter(CHEAT_COLLIDER)));
        pending.push_back((now + 65, HoopEvent::exit(CHEAT_COLLIDER)));
    } else {
        pending.push_back((now + 55, HoopEvent::enter(SCORE_COLLIDER)));
        pending.push_back((now + 70, HoopEvent::exit(SCORE_COLLIDER)));
    }
}

fn print_events(session: &mut GameSession) {
    for event in session.drain_events() {
        println!("{event}");
    }
}

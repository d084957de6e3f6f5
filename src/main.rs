//! Flappy Core headless runner
//!
//! Drives the simulation at its nominal tick rate with the autopilot at the
//! controls and reports the score of each run. No window, no rendering.
//!
//! Usage:
//!   flappy-core [--config <path>] [--seed <n>] [--ticks <n>] [--runs <n>] [--json]

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use anyhow::{Context, Result, bail};
    use serde::Serialize;

    use flappy_core::ui::{RestartButton, score_label};
    use flappy_core::{Autopilot, GameConfig, GameSession, SessionStatus, Snapshot, TickInput};

    /// Command line options
    #[derive(Debug)]
    pub struct Options {
        pub config_path: Option<String>,
        pub seed: u64,
        /// Tick budget per run
        pub max_ticks: u64,
        pub runs: u32,
        pub json: bool,
    }

    impl Default for Options {
        fn default() -> Self {
            Self {
                config_path: None,
                seed: 1,
                max_ticks: 80 * 60,
                runs: 1,
                json: false,
            }
        }
    }

    pub fn parse_args(args: &[String]) -> Result<Options> {
        let mut opts = Options::default();
        let mut i = 1;
        while i < args.len() {
            let flag = args[i].as_str();
            let mut value = || {
                i += 1;
                args.get(i)
                    .cloned()
                    .with_context(|| format!("missing value for {flag}"))
            };
            match flag {
                "-c" | "--config" => opts.config_path = Some(value()?),
                "-s" | "--seed" => opts.seed = value()?.parse().context("--seed expects a number")?,
                "-t" | "--ticks" => {
                    opts.max_ticks = value()?.parse().context("--ticks expects a number")?
                }
                "-n" | "--runs" => opts.runs = value()?.parse().context("--runs expects a number")?,
                "--json" => opts.json = true,
                other => bail!("unknown argument `{other}`"),
            }
            i += 1;
        }
        Ok(opts)
    }

    #[derive(Debug, Serialize)]
    pub struct RunReport {
        pub run: u32,
        pub score: u32,
        pub ticks: u64,
        /// Run ended by a collision rather than the tick budget
        pub crashed: bool,
    }

    #[derive(Debug, Serialize)]
    pub struct Summary {
        pub seed: u64,
        pub runs: Vec<RunReport>,
        pub best: u32,
    }

    /// Input for a click in the middle of the restart button
    pub fn click_restart(button: &RestartButton, snap: &Snapshot, now_ms: u64) -> TickInput {
        let pointer = button.rect.pos + button.rect.size / 2;
        TickInput {
            now_ms,
            jump_pressed: true,
            restart_requested: button.restart_requested(snap.status, pointer, true),
        }
    }

    /// Play `opts.runs` runs back to back on one session, restarting after each crash
    pub fn play(config: &GameConfig, opts: &Options) -> Summary {
        let mut session = GameSession::new(config.clone(), opts.seed);
        let button = RestartButton::new(config);
        let frame_ms = config.frame_ms();
        let mut tick_index: u64 = 0;
        let mut runs = Vec::new();

        for run in 1..=opts.runs {
            let mut pilot = Autopilot::new();
            let mut snap = Snapshot::capture(&session);
            let mut ticks = 0;

            while ticks < opts.max_ticks && snap.status != SessionStatus::GameOver {
                let input = TickInput {
                    now_ms: (tick_index as f64 * frame_ms) as u64,
                    jump_pressed: pilot.decide(&snap, config),
                    restart_requested: false,
                };
                snap = session.tick(&input);
                tick_index += 1;
                ticks += 1;
            }

            let crashed = snap.status == SessionStatus::GameOver;
            log::info!("Run {run}: {} after {ticks} ticks", score_label(snap.score));
            log::debug!("Final frame: {}", snap.to_json());
            runs.push(RunReport {
                run,
                score: snap.score,
                ticks,
                crashed,
            });

            if crashed {
                let now_ms = (tick_index as f64 * frame_ms) as u64;
                session.tick(&click_restart(&button, &snap, now_ms));
                tick_index += 1;
            } else {
                session.reset();
            }
        }

        let best = runs.iter().map(|r| r.score).max().unwrap_or(0);
        Summary {
            seed: opts.seed,
            runs,
            best,
        }
    }

    pub fn run() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let args: Vec<String> = std::env::args().collect();
        let opts = parse_args(&args)?;
        let config = match &opts.config_path {
            Some(path) => GameConfig::load(path).with_context(|| format!("loading config {path}"))?,
            None => GameConfig::default(),
        };

        log::info!(
            "Flappy Core headless: {} run(s), seed {}, {} ticks/s",
            opts.runs,
            opts.seed,
            config.tick_rate
        );
        log::debug!("Config: {}", config.to_json());

        let summary = play(&config, &opts);

        if opts.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            for r in &summary.runs {
                let end = if r.crashed { "crashed" } else { "tick limit" };
                println!("Run {:>3}: {:>5} points  {:>6} ticks  ({end})", r.run, r.score, r.ticks);
            }
            println!("Best: {}", summary.best);
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn args(list: &[&str]) -> Vec<String> {
            std::iter::once("flappy-core")
                .chain(list.iter().copied())
                .map(String::from)
                .collect()
        }

        #[test]
        fn test_parse_defaults() {
            let opts = parse_args(&args(&[])).unwrap();
            assert_eq!(opts.seed, 1);
            assert_eq!(opts.runs, 1);
            assert!(!opts.json);
            assert!(opts.config_path.is_none());
        }

        #[test]
        fn test_parse_all_flags() {
            let opts = parse_args(&args(&[
                "--seed", "9", "-t", "500", "--runs", "3", "--json", "--config", "cfg.json",
            ]))
            .unwrap();
            assert_eq!(opts.seed, 9);
            assert_eq!(opts.max_ticks, 500);
            assert_eq!(opts.runs, 3);
            assert!(opts.json);
            assert_eq!(opts.config_path.as_deref(), Some("cfg.json"));
        }

        #[test]
        fn test_parse_rejects_bad_input() {
            assert!(parse_args(&args(&["--seed"])).is_err());
            assert!(parse_args(&args(&["--seed", "x"])).is_err());
            assert!(parse_args(&args(&["--fly"])).is_err());
        }

        #[test]
        fn test_click_restart_only_after_crash() {
            let config = GameConfig::default();
            let button = RestartButton::new(&config);
            let mut session = GameSession::new(config.clone(), 5);
            session.flying = true;
            session.player.rect.pos.y = config.ground_y;

            let flying = Snapshot::capture(&session);
            assert!(!click_restart(&button, &flying, 0).restart_requested);

            let over = session.tick(&TickInput::default());
            assert_eq!(over.status, SessionStatus::GameOver);
            let input = click_restart(&button, &over, 10);
            assert!(input.restart_requested);
            assert_eq!(session.tick(&input).status, SessionStatus::Idle);
        }

        #[test]
        fn test_play_restarts_after_crash() {
            let config = GameConfig {
                gap: 30,
                ..Default::default()
            };
            let opts = Options {
                max_ticks: 2000,
                runs: 2,
                ..Default::default()
            };
            let summary = play(&config, &opts);
            assert!(summary.runs.iter().all(|r| r.crashed));
            // The restart click returns to a fresh session, so both runs replay identically
            assert_eq!(summary.runs[0].score, summary.runs[1].score);
            assert_eq!(summary.runs[0].ticks, summary.runs[1].ticks);
        }

        #[test]
        fn test_play_restarts_between_runs() {
            let opts = Options {
                max_ticks: 400,
                runs: 3,
                ..Default::default()
            };
            let summary = play(&GameConfig::default(), &opts);
            assert_eq!(summary.runs.len(), 3);
            assert!(summary.runs.iter().all(|r| r.ticks == 400 && !r.crashed));
            // Same seed, same inputs: every run replays identically
            assert!(summary.runs.iter().all(|r| r.score == summary.runs[0].score));
            assert_eq!(summary.best, summary.runs[0].score);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly on the web
}

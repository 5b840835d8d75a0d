use std::{error::Error, thread};

use lifelike::{Simulation, rule::NAMED_RULES};

mod console;
mod options;
mod stats;

use stats::GenerationStats;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };
    if args.list_rules() {
        for (name, rule) in NAMED_RULES {
            println!("{:<20}{}", name, rule);
        }
        return Ok(());
    }

    let config = args.config()?;
    log::info!(
        "{}x{} board, rule {}, seed {}",
        config.width,
        config.height,
        config.rule,
        config.seed
    );

    let mut sim = Simulation::new(&config)?;
    log::info!("alive: {}", sim.alive_count());

    let mut console = if args.console() {
        Some(console::ConsoleRender::new()?)
    } else {
        None
    };
    let sleep = args.sleep()?;
    let threads = args.multithreading();
    let generations = args.generations()?.unwrap_or(u64::MAX);

    let mut stats = GenerationStats::new(sim.alive_count());
    'generations: while stats.generations() < generations {
        // render the console if in console mode
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                if let console::ConsoleCommand::Exit = cmd {
                    break 'generations;
                }
            }
            console.render(sim.board())?;
        }

        // report metrics every 500ms
        if stats.has_report() {
            let report = stats.report();
            if let Some(ref mut console) = console {
                console.set_report(report);
            } else {
                log::info!("{}", report);
            }
        }

        // compute the next generation
        if threads {
            sim.step_parallel();
        } else {
            sim.step();
        }
        stats.record(sim.alive_count());
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    std::mem::drop(console);

    log::info!(
        "stopped after {} generations, alive: {}",
        sim.generation(),
        sim.alive_count()
    );
    Ok(())
}

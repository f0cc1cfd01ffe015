mod cli;
mod output;

use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dial_engine::logging::{LoggingConfig, init_logging};
use dial_ui::prelude::*;

use crate::cli::{Cli, Command, RenderArgs, RunArgs};
use crate::output::{frame_to_svg, write_frame};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(match cli.log {
        Some(filter) => LoggingConfig::with_filter(filter),
        None => LoggingConfig::default(),
    });

    match cli.command {
        Command::Render(args) => render(args),
        Command::Run(args) => run(args),
    }
}

fn render(args: RenderArgs) -> anyhow::Result<()> {
    let viewport = args.clock.viewport();
    let time = match args.at {
        Some(t) => FixedClock(t).now(),
        None => LocalClock.now(),
    };

    let mut clock = args.clock.view();
    let frame = clock.frame(viewport, time);
    let svg = frame_to_svg(viewport, &frame);
    write_frame(&args.out, &svg)?;

    log::info!("rendered {time} to {}", args.out.display());
    Ok(())
}

fn run(args: RunArgs) -> anyhow::Result<()> {
    let viewport = args.clock.viewport();
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))
            .context("installing interrupt handler")?;
    }

    let source = LocalClock;
    let mut clock = args.clock.view();
    let mut ticks = TickClock::new(Duration::from_millis(args.period_ms));

    log::info!(
        "running at {:?} per tick into {}",
        ticks.period(),
        args.out_dir.display()
    );

    let mut written = 0;
    while running.load(Ordering::SeqCst) && !args.is_done(written) {
        let tick = ticks.tick();

        let time = source.now();
        let frame = clock.frame(viewport, time);
        let svg = frame_to_svg(viewport, &frame);

        let path = args.out_dir.join(format!("frame-{:06}.svg", tick.index));
        write_frame(&path, &svg)?;
        log::trace!("tick {} ({time}) -> {}", tick.index, path.display());
        written += 1;
    }

    log::info!("stopped after {} face build(s)", clock.face_builds());
    Ok(())
}

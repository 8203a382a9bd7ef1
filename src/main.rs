use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{error, info};

use darts_score_tracker::{
    io::{render, Command, HELP},
    saves::{fs::Directory, memory::Memory, Store},
    Config, Error, Tracker,
};

fn draw<S: Store>(tracker: &Tracker<S>, plain: bool) -> io::Result<()> {
    let lines = render::board(tracker.state(), tracker.direction());
    let mut out = io::stdout().lock();
    writeln!(out)?;
    if plain {
        render::write_plain(&mut out, &lines)?;
    } else {
        render::write_styled(&mut out, &lines)?;
    }
    write!(out, "> ")?;
    out.flush()
}

/// The main loop: draw, read a command, apply it. Returns once the player quits or input runs out.
fn run<S: Store>(mut tracker: Tracker<S>, plain: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        draw(&tracker, plain)?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let command = match line.parse::<Command>() {
            Ok(c) => c,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        match command {
            Command::Hit { player, value } => {
                tracker.record(player, value);
            }
            Command::Toggle => {
                tracker.toggle_direction();
            }
            Command::NewGame => tracker.new_game(),
            Command::Players { left, right } => tracker.rename(left, right),
            Command::Games => println!("games: {}", tracker.game_types().join(", ")),
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }
    println!();
    match tracker.flush() {
        Ok(true) => info!("saved on exit"),
        Ok(false) => (),
        Err(e) => error!("couldn't save on exit: {}", e),
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    let config = Config::parse();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    if config.ephemeral {
        info!("keeping this game in memory only");
        run(Tracker::open(Memory::default(), &config), config.plain)?;
        return Ok(());
    }

    if config.save_dir.exists() && !config.save_dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("save location {} isn't a directory", config.save_dir.display()),
        )
        .into());
    }
    info!("saving to {}", config.save_dir.display());
    let store = Directory::open(&config.save_dir);
    run(Tracker::open(store, &config), config.plain)?;
    Ok(())
}

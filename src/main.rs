use std::{fs::File, process::exit};

use clap::Parser;

use log::{error, info};
use simplelog::{WriteLogger, ConfigBuilder};

use gridsnake::config::Config;
use gridsnake::errors;
use gridsnake::game::{Flow, SnakeGame};

fn main() {
    let config = Config::parse();
    if let Err(e) = config.validate() {
        eprintln!("error: {}", e);
        exit(2);
    }

    if let Err(e) = run(config) {
        error!("{}", e);
        eprintln!("error: {}", e);
        exit(1);
    }
}

fn run(config: Config) -> errors::Result<()> {
    // The terminal belongs to the game, so logs go to a file
    WriteLogger::init(
        config.log_level(),
        ConfigBuilder::new().build(),
        File::create(&config.log_file)?,
    )?;
    info!("starting with {:?}", config);

    let mut game = SnakeGame::new(config)?;
    game.initialize()?;

    if game.show_intro()? == Flow::Again {
        // The main game loop returns once the player quits
        while game.play()? == Flow::Again {}
    }

    game.shutdown()?;
    info!("bye");
    Ok(())
}

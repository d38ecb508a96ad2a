use anyhow::Result;
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use snake_arcade::audio::SoundCues;
use snake_arcade::game::{FoodSpawner, Game, GameState, HighscoreFile, ScoreStore};
use snake_arcade::input;
use snake_arcade::render::{self, SCREEN_HEIGHT, SCREEN_WIDTH};
use snake_arcade::settings::{SETTINGS_PATH, Settings};

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let (settings, settings_error) = match Settings::load(SETTINGS_PATH) {
        Ok(settings) => (settings, None),
        Err(error) => (Settings::default(), Some(error)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    if let Some(error) = settings_error {
        tracing::warn!(?error, "using default settings");
    }

    if let Err(error) = run(settings).await {
        tracing::error!(?error, "snake stopped");
    }
}

async fn run(settings: Settings) -> Result<()> {
    let sounds = SoundCues::load(settings.sound_volume).await?;

    let scores = ScoreStore::load(HighscoreFile::new(&settings.highscore_path));
    let mut game = Game::new(GameState::new(FoodSpawner::from_entropy()), scores);

    loop {
        if input::quit_requested() {
            break;
        }

        let frame_input = input::poll();
        if let Some(result) = game.update(get_frame_time(), &frame_input) {
            sounds.play(result);
        }

        render::draw(&game);

        next_frame().await;
    }

    Ok(())
}

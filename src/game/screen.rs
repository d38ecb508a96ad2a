use super::grid::Direction;
use super::score::ScoreStore;
use super::state::{GameState, TickResult};

/// Seconds of accumulated frame time between two snake advances
pub const TICK_INTERVAL: f32 = 0.15;
/// Frames the logo stays up before the title screen
pub const LOGO_FRAMES: u32 = 200;
/// Frames per step of the logo animation
pub const LOGO_ANIM_STEP: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Logo,
    Title,
    Gameplay,
    Ending,
}

/// Things that can move the screen flow forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    LogoElapsed,
    Confirm,
    GameOver,
}

impl Screen {
    /// Pure transition table; events that do not apply leave the screen unchanged.
    pub fn next(self, event: ScreenEvent) -> Screen {
        match (self, event) {
            (Screen::Logo, ScreenEvent::LogoElapsed) => Screen::Title,
            (Screen::Title, ScreenEvent::Confirm) => Screen::Gameplay,
            (Screen::Gameplay, ScreenEvent::GameOver) => Screen::Ending,
            (Screen::Ending, ScreenEvent::Confirm) => Screen::Title,
            (screen, _) => screen,
        }
    }
}

/// Input sampled for one frame. Presses are edge-triggered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Directions pressed this frame, in the order they should be tried
    pub turns: Vec<Direction>,
    pub confirm: bool,
}

impl FrameInput {
    pub fn confirm() -> Self {
        Self {
            turns: Vec::new(),
            confirm: true,
        }
    }

    pub fn turn(direction: Direction) -> Self {
        Self {
            turns: vec![direction],
            confirm: false,
        }
    }
}

/// The whole game: screen flow plus the simulation and scores it drives
pub struct Game {
    screen: Screen,
    frames: u32,
    anim: i32,
    timer: f32,
    state: GameState,
    scores: ScoreStore,
}

impl Game {
    pub fn new(state: GameState, scores: ScoreStore) -> Self {
        Self {
            screen: Screen::Logo,
            frames: 0,
            anim: -1,
            timer: 0.0,
            state,
            scores,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scores(&self) -> &ScoreStore {
        &self.scores
    }

    /// Step of the logo animation, -1 before the first step
    pub fn anim_counter(&self) -> i32 {
        self.anim
    }

    /// Run one frame. Returns the simulation result when a tick fired.
    pub fn update(&mut self, dt: f32, input: &FrameInput) -> Option<TickResult> {
        match self.screen {
            Screen::Logo => {
                self.frames += 1;
                if self.frames % LOGO_ANIM_STEP == 0 {
                    self.anim += 1;
                }
                if self.frames > LOGO_FRAMES {
                    self.apply(ScreenEvent::LogoElapsed);
                }
                None
            }
            Screen::Title | Screen::Ending => {
                if input.confirm {
                    self.apply(ScreenEvent::Confirm);
                }
                None
            }
            Screen::Gameplay => self.update_gameplay(dt, input),
        }
    }

    fn update_gameplay(&mut self, dt: f32, input: &FrameInput) -> Option<TickResult> {
        self.timer += dt;
        for &direction in &input.turns {
            self.state.request_turn(direction);
        }

        if self.timer < TICK_INTERVAL {
            return None;
        }
        self.timer = 0.0;

        let result = self.state.tick(self.scores.highscore());
        match result {
            TickResult::Continue => {}
            TickResult::FoodEaten { length } => {
                tracing::debug!(length, "food eaten");
                self.scores.on_growth(length);
            }
            TickResult::GameOver { final_length, .. } => {
                let saved = self.scores.on_game_over(final_length);
                tracing::info!(
                    final_length,
                    highscore = self.scores.highscore(),
                    saved,
                    "game over"
                );
                self.apply(ScreenEvent::GameOver);
            }
        }
        Some(result)
    }

    fn apply(&mut self, event: ScreenEvent) {
        let next = self.screen.next(event);
        if next == self.screen {
            return;
        }
        tracing::debug!(from = ?self.screen, to = ?next, "screen change");
        self.screen = next;
        self.enter(next);
    }

    fn enter(&mut self, screen: Screen) {
        if screen == Screen::Gameplay {
            self.state.reset();
            self.scores.on_gameplay_enter();
            self.timer = 0.0;
        }
    }
}

use macroquad::prelude::*;

use crate::game::{Cell, Game, Screen};

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const CELL_SIZE: i32 = 50;

const BACKGROUND: Color = Color::new(0.96, 0.96, 0.96, 1.0);
const LOGO_ROW_Y: f32 = 300.0;

fn cell_rect(cell: Cell) -> Rect {
    Rect::new(
        (cell.x * CELL_SIZE) as f32,
        (cell.y * CELL_SIZE) as f32,
        CELL_SIZE as f32,
        CELL_SIZE as f32,
    )
}

fn fill_rect(rect: Rect, color: Color) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
}

fn fill_screen(color: Color) {
    draw_rectangle(0.0, 0.0, SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32, color);
}

/// Draw `text` horizontally centered with its top edge at `top`
fn draw_centered(text: &str, top: f32, font_size: u16, color: Color) {
    let dims = measure_text(text, None, font_size, 1.0);
    let x = (SCREEN_WIDTH as f32 - dims.width) * 0.5;
    draw_text(text, x, top + dims.offset_y, font_size as f32, color);
}

pub fn draw(game: &Game) {
    clear_background(BACKGROUND);
    match game.screen() {
        Screen::Logo => draw_logo(game.anim_counter()),
        Screen::Title => draw_title(),
        Screen::Gameplay => draw_gameplay(game),
        Screen::Ending => draw_ending(game),
    }
}

fn draw_logo(anim: i32) {
    draw_centered("SNAKE", 20.0, 80, LIGHTGRAY);
    draw_centered("Intro animation", 120.0, 20, LIGHTGRAY);

    let cell = CELL_SIZE as f32;
    // A red "food" square waits until the sliding snake reaches it
    if anim < 10 {
        draw_rectangle(500.0, LOGO_ROW_Y, cell, cell, RED);
    } else {
        draw_rectangle((anim - 1) as f32 * cell, LOGO_ROW_Y, cell, cell, GREEN);
    }
    draw_rectangle(anim as f32 * cell, LOGO_ROW_Y, cell, cell, GREEN);
}

fn draw_title() {
    fill_screen(GREEN);
    draw_centered("PRESS ENTER TO START", 240.0, 20, DARKGREEN);
    draw_centered("SNAKE", 20.0, 80, WHITE);
}

fn draw_gameplay(game: &Game) {
    fill_screen(GRAY);

    let state = game.state();
    for segment in state.snake.segments() {
        fill_rect(cell_rect(segment.position), GREEN);
    }
    fill_rect(cell_rect(state.food), RED);

    draw_centered(&format!("Score: {}", game.scores().current()), 20.0, 20, WHITE);
}

fn draw_ending(game: &Game) {
    fill_screen(BLUE);
    let scores = game.scores();

    draw_centered("PRESS ENTER TO RETURN TO TITLE SCREEN", 240.0, 20, DARKBLUE);
    draw_centered(&format!("Score: {}", scores.current()), 120.0, 40, WHITE);

    if scores.is_new_highscore() {
        draw_centered("NEW HIGHSCORE!", 20.0, 60, WHITE);
    } else {
        draw_centered(&format!("Score to beat: {}", scores.highscore()), 20.0, 60, WHITE);
    }
}

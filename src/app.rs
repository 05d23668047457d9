//! file: app.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:45:00 Sunday
//! brief: gpui window that draws the session and feeds it clicks and keys

use std::time::Duration;

use gpui::{
    AnyElement, App, AppContext, Application, Bounds, Context, Div, FocusHandle, Focusable,
    KeyBinding, MouseButton, MouseDownEvent, Render, Timer, Window, WindowBounds, WindowOptions,
    actions, div, prelude::*, px, rgb, rgba, size,
};
use tracing::error;

use crate::{
    config::GameConfig,
    game::{Action, GameSession, Phase, Point, Rect, ScreenLayout, resolve_click},
};

const ORANGE: u32 = 0xffa500;
const DARK_ORANGE: u32 = 0xff8c00;
const SKY: u32 = 0xadd8e6;
const BLUE: u32 = 0x87cefa;
const WHITE: u32 = 0xffffff;
const BLACK: u32 = 0x000000;
const GREEN: u32 = 0x00ff00;
const RED: u32 = 0xff0000;
const DARK_GRAY: u32 = 0x323232;

actions!(cloud_heroes, [StartRound, QuitGame]);

pub fn run(config: GameConfig, session: GameSession) {
    let layout = ScreenLayout::new(config.window.width, config.window.height);
    let frame_delay = config.window.frame_delay();

    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("enter", StartRound, None),
            KeyBinding::new("escape", QuitGame, None),
        ]);

        let bounds = Bounds::centered(
            None,
            size(px(config.window.width), px(config.window.height)),
            cx,
        );
        let window = match cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |_, cx| cx.new(|cx| QuizView::new(session, layout, frame_delay, cx)),
        ) {
            Ok(window) => window,
            Err(err) => {
                error!(%err, "failed to open window");
                cx.quit();
                return;
            }
        };

        let view = match window.update(cx, |view: &mut QuizView, window, cx| {
            window.focus(&view.focus_handle(cx));
            cx.activate(true);
            cx.entity()
        }) {
            Ok(view) => view,
            Err(err) => {
                error!(%err, "failed to focus window");
                cx.quit();
                return;
            }
        };

        spawn_game_loop(view, cx);
        cx.on_action(|_: &QuitGame, cx| cx.quit());
        cx.activate(true);
    });
}

fn spawn_game_loop(view: gpui::Entity<QuizView>, cx: &mut App) {
    cx.spawn({
        async move |cx| loop {
            let delay = match view.read_with(cx, |view, _| view.frame_delay) {
                Ok(duration) => duration,
                Err(_) => break,
            };

            Timer::after(delay).await;
            if view
                .update(cx, |view, cx| {
                    view.tick(cx);
                })
                .is_err()
            {
                break;
            }
        }
    })
    .detach();
}

pub struct QuizView {
    session: GameSession,
    layout: ScreenLayout,
    focus_handle: FocusHandle,
    frame_delay: Duration,
}

impl QuizView {
    fn new(
        session: GameSession,
        layout: ScreenLayout,
        frame_delay: Duration,
        cx: &mut Context<Self>,
    ) -> Self {
        Self {
            session,
            layout,
            focus_handle: cx.focus_handle(),
            frame_delay,
        }
    }

    fn tick(&mut self, cx: &mut Context<Self>) {
        if let Err(err) = self.session.tick() {
            error!(%err, "tick failed");
        }
        // redraw every frame; the start button pulses
        cx.notify();
    }

    fn apply(&mut self, action: Action, cx: &mut Context<Self>) {
        if let Err(err) = self.session.dispatch(action) {
            error!(%err, ?action, "action failed");
        }
        cx.notify();
    }

    fn handle_click(&mut self, event: &MouseDownEvent, cx: &mut Context<Self>) {
        let position = Point::new(f32::from(event.position.x), f32::from(event.position.y));
        let regions = self.layout.hit_regions(self.session.now_ms());
        if let Some(action) = resolve_click(self.session.phase(), position, &regions) {
            self.apply(action, cx);
        }
    }

    fn render_menu(&self) -> Vec<AnyElement> {
        let start = self.layout.start.bounds(self.session.now_ms());
        vec![
            banner(70.0, "AWS Cloud Heroes", ORANGE).text_3xl().into_any_element(),
            banner(185.0, "Learn about AWS cloud services!", BLACK).into_any_element(),
            banner(225.0, "Match the service with what it does.", BLACK).into_any_element(),
            button(start, "Start Game").into_any_element(),
        ]
    }

    fn render_round(&self) -> Vec<AnyElement> {
        let mut elements = Vec::new();
        let Some(question) = self.session.question() else {
            return elements;
        };

        elements.push(
            placed(Rect::new(20.0, 20.0, 160.0, 30.0))
                .justify_start()
                .text_color(rgb(BLACK))
                .child(format!("Time: {}s", self.session.remaining_secs()))
                .into_any_element(),
        );
        elements.push(
            placed(self.layout.score_box)
                .rounded_lg()
                .bg(rgb(WHITE))
                .text_color(rgb(BLACK))
                .child(format!("Score: {}", self.session.score()))
                .into_any_element(),
        );

        let target = question.target();
        elements.push(
            placed(self.layout.service_box)
                .rounded_lg()
                .border_4()
                .border_color(rgb(BLACK))
                .bg(rgb(target.color.to_hex()))
                .text_3xl()
                .text_color(rgb(WHITE))
                .child(target.name.clone())
                .into_any_element(),
        );

        let selected = self.session.selected_index();
        for (index, option) in question.options().iter().enumerate() {
            let color = match selected {
                Some(chosen) if chosen == index && question.is_correct(index) => GREEN,
                Some(chosen) if chosen == index => RED,
                _ => WHITE,
            };
            elements.push(
                placed(self.layout.option_box(index))
                    .rounded_lg()
                    .bg(rgb(color))
                    .text_color(rgb(BLACK))
                    .child(option.clone())
                    .into_any_element(),
            );
        }
        elements
    }

    fn render_feedback(&self) -> Option<AnyElement> {
        let (message, color) = self.session.feedback()?.message();

        Some(
            div()
                .absolute()
                .top(px(0.))
                .bottom(px(0.))
                .left(px(0.))
                .right(px(0.))
                .bg(rgba(0x000000B4))
                .child(
                    placed(self.layout.feedback_box)
                        .flex_col()
                        .gap_4()
                        .rounded_xl()
                        .bg(rgb(DARK_GRAY))
                        .border_4()
                        .border_color(rgb(color))
                        .child(div().text_3xl().text_color(rgb(color)).child(message))
                        .child(
                            div()
                                .text_xl()
                                .text_color(rgb(WHITE))
                                .child(format!("Score: {}", self.session.score())),
                        ),
                )
                .into_any_element(),
        )
    }

    fn render_game_over(&self) -> Vec<AnyElement> {
        let now = self.session.now_ms();
        vec![
            banner(70.0, "Game Over!", ORANGE).text_3xl().into_any_element(),
            banner(185.0, &format!("Your Score: {}", self.session.score()), BLACK)
                .into_any_element(),
            banner(225.0, &format!("Best: {}", self.session.best_score()), BLACK)
                .into_any_element(),
            button(self.layout.play_again.bounds(now), "Play Again").into_any_element(),
            button(self.layout.menu.bounds(now), "Main Menu").into_any_element(),
        ]
    }
}

fn placed(rect: Rect) -> Div {
    div()
        .absolute()
        .left(px(rect.x))
        .top(px(rect.y))
        .w(px(rect.width))
        .h(px(rect.height))
        .flex()
        .items_center()
        .justify_center()
}

fn banner(top: f32, text: &str, color: u32) -> Div {
    div()
        .absolute()
        .top(px(top))
        .left(px(0.))
        .right(px(0.))
        .flex()
        .justify_center()
        .text_xl()
        .text_color(rgb(color))
        .child(text.to_owned())
}

fn button(bounds: Rect, label: &'static str) -> Div {
    placed(bounds)
        .rounded_lg()
        .bg(rgb(ORANGE))
        .border_2()
        .border_color(rgb(DARK_ORANGE))
        .text_color(rgb(WHITE))
        .child(label)
}

impl Render for QuizView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let phase = self.session.phase();
        let background = if phase == Phase::Menu { SKY } else { BLUE };

        let mut elements = match phase {
            Phase::Menu => self.render_menu(),
            Phase::Playing | Phase::Feedback => self.render_round(),
            Phase::GameOver => self.render_game_over(),
        };
        if phase == Phase::Feedback {
            elements.extend(self.render_feedback());
        }

        div()
            .relative()
            .size_full()
            .bg(rgb(background))
            .track_focus(&self.focus_handle(cx))
            .key_context("cloud-heroes")
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, event: &MouseDownEvent, _, cx| this.handle_click(event, cx)),
            )
            .on_action(
                cx.listener(|this, _: &StartRound, _, cx| this.apply(Action::StartGame, cx)),
            )
            .children(elements)
    }
}

impl Focusable for QuizView {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

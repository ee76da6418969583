use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use keyword_client::{ApiSettings, ReqwestApi};
use keyword_core::{update, AppState, AppViewModel, Msg};
use keyword_logging::kw_info;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::effects::EffectRunner;
use crate::ui::{self, input::Action, Focus};

/// How long the loop waits for a key before checking for completions again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run(settings: &ApiSettings) -> anyhow::Result<()> {
    let api = ReqwestApi::new(settings).context("invalid backend settings")?;
    let runner = EffectRunner::new(Arc::new(api)).context("failed to start request engine")?;
    let mut app = App::new(runner);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    kw_info!("keyword_app exiting");
    result
}

/// Owns the only copy of [`AppState`]. Key presses and request completions are
/// applied one at a time on this thread.
struct App {
    state: AppState,
    view: AppViewModel,
    focus: Focus,
    runner: EffectRunner,
    needs_redraw: bool,
    quit: bool,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self {
            state,
            view,
            focus: Focus::default(),
            runner,
            needs_redraw: true,
            quit: false,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while !self.quit {
            for msg in self.runner.poll() {
                self.dispatch_msg(msg);
            }

            if self.needs_redraw {
                terminal.draw(|frame| ui::render::draw(frame, &self.view, self.focus))?;
                self.needs_redraw = false;
            }

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(action) = ui::input::map_key(key, self.focus, &self.view) {
                            self.apply(action);
                        }
                    }
                    Event::Resize(_, _) => self.needs_redraw = true,
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit = true,
            Action::SwitchFocus => {
                self.focus = self.focus.toggled();
                self.needs_redraw = true;
            }
            Action::Send(msg) => self.dispatch_msg(msg),
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
            self.needs_redraw = true;
        }
        self.state = state;
        self.runner.enqueue(effects);
    }
}

//! Main TUI application state and the replay loop

use crate::navigator::{Direction, ExhaustedError, Navigator};
use crate::render::{Jitter, Renderer};
use crate::ui::input::{Command, KeyMap};
use crate::ui::panes::{render_status_bar, StatusRenderData, Viewport};
use crossterm::event::{self, Event};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction as LayoutDirection, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// Replay position and the paths being replayed
    pub navigator: Navigator,

    renderer: Renderer,

    keys: KeyMap,

    /// Offsets for trail vertices; consumed only while drawing
    jitter: Box<dyn Jitter>,

    /// Time budget of one loop iteration
    frame_period: Duration,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(navigator: Navigator, renderer: Renderer, jitter: Box<dyn Jitter>, fps: u32) -> Self {
        App {
            navigator,
            renderer,
            keys: KeyMap::default(),
            jitter,
            frame_period: Duration::from_secs(1) / fps.max(1),
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the replay loop until a quit command arrives.
    ///
    /// Each iteration applies every pending event in queue order, draws one
    /// frame, advances the replay by one tick, then waits out the rest of the
    /// frame period.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.should_quit {
            let started = Instant::now();

            while event::poll(Duration::ZERO)? {
                let event = event::read()?;
                self.handle_event(&event);
            }
            if self.should_quit {
                break;
            }

            self.step(terminal)?;

            if let Some(rest) = self.frame_period.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }

        tracing::debug!("replay loop stopped");
        Ok(())
    }

    /// Draw the current state, then advance one tick.
    pub fn step<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|f| self.render(f))?;
        self.navigator.advance_tick();
        Ok(())
    }

    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: &Event) {
        let command = self.keys.dispatch(event);
        self.apply(command);
    }

    /// Apply a command to the replay state
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Quit => {
                self.should_quit = true;
            }
            Command::Reset => {
                self.navigator.reset_progress();
                self.status_message = "Replaying path".to_string();
            }
            Command::Next => {
                let result = self.navigator.select_next();
                self.report_selection(result);
            }
            Command::Previous => {
                let result = self.navigator.select_previous();
                self.report_selection(result);
            }
            Command::Unknown => {}
        }
    }

    fn report_selection(&mut self, result: Result<(), ExhaustedError>) {
        match result {
            Ok(()) => {
                let state = self.navigator.state();
                self.status_message = format!(
                    "Showing path {} ({} points)",
                    state.active_index + 1,
                    self.navigator.active_path().len()
                );
            }
            Err(e) => {
                tracing::debug!(error = %e, "navigation clamped");
                self.status_message = match e.direction {
                    Direction::Forward => "Already at last path".to_string(),
                    Direction::Backward => "Already at first path".to_string(),
                };
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let state = self.navigator.state();
        let image = self
            .renderer
            .render(self.navigator.paths(), state, self.jitter.as_mut());
        frame.render_widget(Viewport::new(&image), chunks[0]);

        let path = self.navigator.active_path();
        render_status_bar(
            frame,
            chunks[1],
            StatusRenderData {
                message: &self.status_message,
                path_index: state.active_index,
                path_count: self.navigator.paths().len(),
                progress: state.progress,
                path_len: path.len(),
                exited_world: path.get(state.progress).is_some_and(|p| p.exited_world),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::NavigatorState;
    use crate::paths::parse_paths;
    use crate::render::NoJitter;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use image::{Rgba, RgbaImage};
    use ratatui::backend::TestBackend;

    fn app() -> App {
        let paths = parse_paths("0.1,0.1\n0.5,0.5!\n0.9,0.9\n\n0.0,0.0\n1.0,1.0\n\n0.3,0.3").unwrap();
        let navigator = Navigator::new(paths).unwrap();
        let renderer = Renderer::new(RgbaImage::from_pixel(16, 8, Rgba([10, 10, 10, 255])));
        App::new(navigator, renderer, Box::new(NoJitter), 60)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_quit_keys() {
        let mut a = app();
        a.handle_event(&key(KeyCode::Esc));
        assert!(a.should_quit);

        let mut a = app();
        a.handle_event(&key(KeyCode::Char('q')));
        assert!(a.should_quit);
    }

    #[test]
    fn test_step_renders_then_ticks() {
        let mut a = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();

        a.step(&mut terminal).unwrap();
        assert_eq!(a.navigator.state().progress, 1);

        // the frame drawn before that tick showed the first point
        let text = screen_text(&terminal);
        assert!(text.contains("Path 1/3"), "{}", text);
        assert!(text.contains("Point 1/3"), "{}", text);
    }

    #[test]
    fn test_progress_holds_at_end() {
        let mut a = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        for _ in 0..10 {
            a.step(&mut terminal).unwrap();
        }
        assert_eq!(a.navigator.state().progress, 2);
    }

    #[test]
    fn test_navigation_commands() {
        let mut a = app();
        a.apply(Command::Next);
        assert_eq!(
            a.navigator.state(),
            NavigatorState {
                active_index: 1,
                progress: 0
            }
        );

        // the single-point path is never selected
        a.apply(Command::Next);
        assert_eq!(a.navigator.state().active_index, 1);
        assert_eq!(a.status_message, "Already at last path");

        a.apply(Command::Previous);
        a.apply(Command::Previous);
        assert_eq!(a.navigator.state().active_index, 0);
        assert_eq!(a.status_message, "Already at first path");
    }

    #[test]
    fn test_reset_and_unknown() {
        let mut a = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        a.step(&mut terminal).unwrap();
        a.step(&mut terminal).unwrap();

        a.handle_event(&key(KeyCode::F(1)));
        assert_eq!(a.navigator.state().progress, 2);
        assert!(!a.should_quit);

        a.handle_event(&key(KeyCode::Char('r')));
        assert_eq!(
            a.navigator.state(),
            NavigatorState {
                active_index: 0,
                progress: 0
            }
        );
    }

    #[test]
    fn test_exited_badge() {
        let mut a = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 12)).unwrap();
        a.step(&mut terminal).unwrap();
        a.step(&mut terminal).unwrap();
        // second frame showed point 2, which exited the world
        let text = screen_text(&terminal);
        assert!(text.contains("EXITED"), "{}", text);
    }
}

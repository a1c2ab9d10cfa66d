use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use haikei_anim::{Controller, parse_hex};
use haikei_config::Config;
use haikei_core::Viewport;
use haikei_theme::{PRESETS, ThemePreset};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load();
    let terminal = ratatui::init();
    let result = App::new(&config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    /// Background animation controller.
    controller: Controller,
    /// Active theme preset.
    preset: &'static ThemePreset,
    /// Time between animation frames.
    frame_interval: Duration,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded config.
    pub fn new(config: &Config) -> Self {
        let mut controller = Controller::new(Viewport::default());
        controller.set_speed(config.animation_speed());
        Self {
            running: false,
            controller,
            preset: haikei_theme::preset(&config.theme),
            frame_interval: Duration::from_millis(config.frame_interval_ms()),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;

        let size = terminal.size()?;
        self.controller.resize(size.width, size.height);
        self.apply_preset(self.preset);

        while self.running {
            self.controller.tick();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Switch to a theme preset: restart the background animation with the
    /// preset's style and accent color.
    fn apply_preset(&mut self, preset: &'static ThemePreset) {
        self.preset = preset;
        self.controller.start(preset.animation, preset.primary);
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        frame.render_widget(Paragraph::new(self.controller.lines()), area);

        let accent = parse_hex(self.preset.primary).to_color();
        let text = parse_hex(self.preset.text).to_color();
        let chunks =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);

        let help = Line::from(vec![
            Span::styled(self.preset.name, Style::new().fg(accent).bold()),
            Span::styled(
                format!(" ({})  ", self.preset.animation),
                Style::new().fg(text),
            ),
            "t".bold().fg(accent),
            " theme  ".dark_gray(),
            "1-6".bold().fg(accent),
            " select  ".dark_gray(),
            "s".bold().fg(accent),
            format!(" speed:{}  ", self.controller.speed().name()).dark_gray(),
            "q".bold().fg(accent),
            " quit".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a timeout to drive the animation frames.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.frame_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(width, height) => self.controller.resize(width, height),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('t') | KeyCode::Char(' ')) => self.next_preset(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            (_, KeyCode::Char(c @ '1'..='6')) => self.select_preset(c),
            _ => {}
        }
    }

    /// Cycle to the next theme preset.
    fn next_preset(&mut self) {
        self.apply_preset(self.preset.next());
    }

    /// Jump straight to a preset by its number key.
    fn select_preset(&mut self, key: char) {
        let idx = key as usize - '1' as usize;
        if let Some(preset) = PRESETS.get(idx) {
            self.apply_preset(preset);
        }
    }

    /// Cycle through the animation speed settings.
    fn cycle_speed(&mut self) {
        self.controller.set_speed(self.controller.speed().next());
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

use anyhow::Result;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowId};

use linkchord::winit_adapter::key_press_from_winit;
use linkchord::{Chord, EditorSession, FileStore, KeyOutcome, LinkOpener};

/// Key-press window: captures a chord for the listening row, otherwise
/// opens whatever binding matches. Status is shown in the title bar.
pub struct App {
    session: EditorSession<FileStore>,
    opener: Box<dyn LinkOpener>,
    window: Option<Window>,
    modifiers: ModifiersState,
    status: String,
}

impl App {
    pub fn new(
        mut session: EditorSession<FileStore>,
        opener: Box<dyn LinkOpener>,
        record: Option<&str>,
    ) -> Self {
        let status = match record {
            Some(link) => match session.row_for_link(link) {
                Some(row) => {
                    session.start_listening(row);
                    format!("press a chord for {}", link)
                }
                None => {
                    tracing::warn!("No binding for {}, not recording", link);
                    format!("no binding for {}", link)
                }
            },
            None => "press a shortcut".to_string(),
        };

        Self {
            session,
            opener,
            window: None,
            modifiers: ModifiersState::empty(),
            status,
        }
    }

    fn title(&self) -> String {
        format!("linkchord - {}", self.status)
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }

        let press = key_press_from_winit(&event.logical_key, self.modifiers);
        let chord = Chord::from_key_press(&press);
        self.status = match self.session.handle_chord(chord.clone(), self.opener.as_mut()) {
            KeyOutcome::Recorded { row, chord } => {
                let link = self.session.link_label(row).unwrap_or_default();
                format!("recorded {} for {}", chord, link)
            }
            KeyOutcome::NotStored(row) => {
                let link = self.session.link_label(row).unwrap_or_default();
                format!("{} is not saved yet, nothing recorded", link)
            }
            KeyOutcome::Opened(binding) => format!("opened {}", binding.link),
            KeyOutcome::NoMatch => format!("no binding for {}", chord),
        };

        if let Some(window) = &self.window {
            window.set_title(&self.title());
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(self.title())
                .with_inner_size(LogicalSize::new(480, 120));

            match event_loop.create_window(window_attributes) {
                Ok(window) => self.window = Some(window),
                Err(e) => {
                    tracing::error!("Failed to create window: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event),
            _ => {}
        }
    }
}

/// Run the key-press window until it is closed
pub fn run(
    session: EditorSession<FileStore>,
    opener: Box<dyn LinkOpener>,
    record: Option<&str>,
) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(session, opener, record);
    event_loop.run_app(&mut app)?;

    Ok(())
}

//! Input Actor: dedicated thread for polling terminal events.
//!
//! Polls crossterm with a timeout so the shutdown flag is rechecked
//! regularly, and forwards converted events over a channel.

use super::messages::{InputEvent, KeyCode, KeyModifiers};
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// # Arguments
    ///
    /// * `sender` - Channel to send input events to the main loop.
    /// * `poll_timeout` - How long to wait for events before checking shutdown.
    pub fn spawn(sender: Sender<InputEvent>, poll_timeout: Duration) -> io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("menuboard-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sender: &Sender<InputEvent>, shutdown: &AtomicBool, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.send(InputEvent::Shutdown);
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Some(input_event) = convert_event(event) {
                            if sender.send(input_event).is_err() {
                                // Receiver dropped, exit
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        let _ = sender.send(InputEvent::Error(e.to_string()));
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    let _ = sender.send(InputEvent::Error(e.to_string()));
                }
            }
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Convert a crossterm event to an [`InputEvent`].
fn convert_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key_event) => {
            // Only key presses; releases and repeats are ignored.
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            Some(InputEvent::Key {
                code: convert_key_code(key_event.code)?,
                modifiers: convert_modifiers(key_event.modifiers),
            })
        }
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        Event::Paste(text) => Some(InputEvent::Paste(text)),
        Event::FocusGained | Event::FocusLost | Event::Mouse(_) => None,
    }
}

fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
    Some(match code {
        event::KeyCode::Char(c) => KeyCode::Char(c),
        event::KeyCode::F(n) => KeyCode::F(n),
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Left => KeyCode::Left,
        event::KeyCode::Right => KeyCode::Right,
        event::KeyCode::Up => KeyCode::Up,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::Home => KeyCode::Home,
        event::KeyCode::End => KeyCode::End,
        event::KeyCode::PageUp => KeyCode::PageUp,
        event::KeyCode::PageDown => KeyCode::PageDown,
        event::KeyCode::Tab => KeyCode::Tab,
        event::KeyCode::BackTab => KeyCode::BackTab,
        event::KeyCode::Delete => KeyCode::Delete,
        event::KeyCode::Esc => KeyCode::Esc,
        _ => return None,
    })
}

fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
    KeyModifiers {
        shift: mods.contains(event::KeyModifiers::SHIFT),
        control: mods.contains(event::KeyModifiers::CONTROL),
        alt: mods.contains(event::KeyModifiers::ALT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    fn press(code: event::KeyCode, modifiers: event::KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_convert_key_press() {
        let event = convert_event(press(event::KeyCode::Char('c'), event::KeyModifiers::CONTROL));
        assert_eq!(event, Some(InputEvent::ctrl('c')));
    }

    #[test]
    fn test_release_ignored() {
        let event = Event::Key(KeyEvent {
            code: event::KeyCode::Enter,
            modifiers: event::KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(convert_event(event), None);
    }

    #[test]
    fn test_resize_and_unmapped_keys() {
        assert_eq!(
            convert_event(Event::Resize(100, 40)),
            Some(InputEvent::Resize { width: 100, height: 40 })
        );
        assert_eq!(
            convert_event(press(event::KeyCode::CapsLock, event::KeyModifiers::NONE)),
            None
        );
    }
}

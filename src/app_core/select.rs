use crossbeam_channel::{Receiver, select};
use ratatui::crossterm::event::KeyEvent;
use tracing::warn;

use crate::{REFRESH_RATE, app_core::Minitune, key_handler, ui_state::Mode};

impl Minitune {
    #[inline]
    pub fn select_shortcut(&mut self, key_rx: &Receiver<KeyEvent>) {
        let player_rx = self.player_events.clone();
        let job_rx = self.library_job.clone();
        let (no_events, no_jobs) = (never(), never());

        select! {
            recv(player_rx.as_ref().unwrap_or(&no_events)) -> event => {
                match event {
                    Ok(event) => {
                        if let Err(e) = self.ui.playback.handle_event(event, &mut self.player) {
                            self.ui.set_error(e);
                        }
                    }
                    Err(_) => {
                        warn!("Player thread has exited");
                        self.player_events = None;
                    }
                }
            }

            recv(job_rx.as_ref().unwrap_or(&no_jobs)) -> progress => {
                match progress {
                    Ok(progress) => self.handle_library_progress(progress),
                    Err(_) => self.library_job_lost(),
                }
            }

            recv(key_rx) -> key => {
                match key {
                    Ok(key) => {
                        if let Some(action) = key_handler::handle_key_event(key, &self.ui) {
                            if let Err(e) = self.handle_action(action) {
                                self.ui.set_error(e);
                            }
                        }
                    }
                    // No way to receive input anymore
                    Err(_) => self.ui.set_mode(Mode::Quit),
                }
            }

            default(REFRESH_RATE) => {}
        }
    }
}

fn never<T>() -> Receiver<T> {
    crossbeam_channel::never()
}

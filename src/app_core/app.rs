use crate::{
    Database, Settings, UiState,
    app_core::LibraryJob,
    key_handler::{self, Action, Director},
    library::ScanProgress,
    logging,
    player::{PlayerEvent, PlayerHandle},
    resolve_folder_input, tui,
    ui_state::Mode,
};
use anyhow::Result;
use crossbeam_channel::Receiver;
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

pub struct Minitune {
    pub(crate) settings: Settings,
    pub(crate) db: Database,
    pub(crate) db_path: PathBuf,
    pub(crate) ui: UiState,
    pub(crate) player: PlayerHandle,
    pub(crate) player_events: Option<Receiver<PlayerEvent>>,
    pub(crate) library_job: Option<Receiver<ScanProgress>>,
    _log_guard: Option<WorkerGuard>,
}

impl Minitune {
    pub fn new() -> Result<Self> {
        let settings = Settings::load()?;

        let log_guard = match logging::init_logging(&settings) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Logging disabled: {e:#}");
                None
            }
        };

        let db_path = settings.database_path()?;
        let db = Database::open(&db_path)?;
        info!("Library has {} songs", db.song_count()?);

        let player = PlayerHandle::spawn();
        let player_events = Some(player.events().clone());
        let ui = UiState::new(settings.restart_threshold());

        Ok(Minitune {
            settings,
            db,
            db_path,
            ui,
            player,
            player_events,
            library_job: None,
            _log_guard: log_guard,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        let result = self.main_loop(&mut terminal);
        ratatui::restore();

        if let Err(e) = self.player.stop() {
            warn!("{e}");
        }
        info!("Shutting down");

        result
    }

    fn main_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.clear()?;

        let key_rx = key_handler::spawn_input_listener();

        if self.settings.refresh_on_start {
            if let Err(e) = self.start_library_job(LibraryJob::Refresh) {
                self.ui.set_error(e);
            }
        }

        // MAIN ROUTINE
        loop {
            self.select_shortcut(&key_rx);
            self.ui.playback.sync_position(&self.player);

            terminal.draw(|f| tui::render(f, &mut self.ui))?;

            if self.ui.get_mode() == Mode::Quit {
                break;
            }
        }

        Ok(())
    }
}

impl Minitune {
    #[rustfmt::skip]
    pub(crate) fn handle_action(&mut self, action: Action) -> Result<()> {
        let step = self.settings.seek_step();

        match action {
            // Player
            Action::TogglePause     => self.ui.playback.toggle(&mut self.player)?,
            Action::PlayNext        => self.ui.playback.next(&mut self.player)?,
            Action::PlayPrev        => self.ui.playback.prev(&mut self.player)?,
            Action::SeekForward     => self.ui.playback.seek_by(step, &mut self.player)?,
            Action::SeekBack        => self.ui.playback.seek_by(-step, &mut self.player)?,
            Action::SeekTo(tenth)   => self.ui.playback.seek(tenth as f64 / 10.0, &mut self.player)?,

            // Browsing
            Action::Open            => self.ui.enter(&self.db, &mut self.player)?,
            Action::Back            => self.ui.back(),
            Action::Scroll(d)       => self.scroll(d),

            // Library
            Action::OpenFolderPrompt => self.ui.open_folder_prompt(),
            Action::PromptInput(k)  => { self.ui.popup.input.input(k); }
            Action::PromptConfirm   => self.confirm_folder()?,
            Action::RefreshLibrary  => self.start_library_job(LibraryJob::Refresh)?,
            Action::ClearLibrary    => self.clear_library()?,

            Action::ClosePopup      => self.ui.close_popup(),
            Action::QUIT            => self.ui.set_mode(Mode::Quit),
        }
        Ok(())
    }

    fn scroll(&mut self, director: Director) {
        match director {
            Director::Up(n) => self.ui.scroll(-(n as isize)),
            Director::Down(n) => self.ui.scroll(n as isize),
            Director::Top => self.ui.scroll(isize::MIN / 2),
            Director::Bottom => self.ui.scroll(isize::MAX / 2),
        }
    }

    /// An empty prompt counts as cancelling.
    fn confirm_folder(&mut self) -> Result<()> {
        let input = self.ui.take_folder_input();
        if input.trim().is_empty() {
            return Ok(());
        }

        let root = resolve_folder_input(&input)?;
        if !root.is_dir() {
            return Err(anyhow::anyhow!("Not a folder: {}", root.display()));
        }

        self.start_library_job(LibraryJob::Scan(root))
    }
}

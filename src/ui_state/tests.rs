use super::*;
use crate::{
    database::Database,
    domain::{ScannedSong, Song, SongFilter, SongTags},
    player::{PlayerEvent, Transport},
};
use anyhow::{Result, anyhow};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Load(PathBuf),
    Play,
    Pause,
    Seek(Duration),
}

#[derive(Default)]
struct FakeTransport {
    calls: Vec<Call>,
    position: Duration,
    fail_loads: bool,
}

impl Transport for FakeTransport {
    fn load(&mut self, path: &Path) -> Result<()> {
        if self.fail_loads {
            return Err(anyhow!("cannot decode"));
        }
        self.calls.push(Call::Load(path.to_path_buf()));
        self.position = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.calls.push(Call::Play);
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.calls.push(Call::Pause);
        Ok(())
    }

    fn seek(&mut self, pos: Duration) -> Result<()> {
        self.calls.push(Call::Seek(pos));
        self.position = pos;
        Ok(())
    }

    fn position(&self) -> Duration {
        self.position
    }
}

fn song(id: i64, title: &str, duration: f64) -> Arc<Song> {
    Arc::new(Song {
        id,
        path: format!("/music/{title}.mp3"),
        title: title.to_string(),
        duration,
        ..Default::default()
    })
}

fn queue() -> Vec<Arc<Song>> {
    vec![song(1, "a", 100.0), song(2, "b", 200.0), song(3, "c", 300.0)]
}

fn load(title: &str) -> Call {
    Call::Load(PathBuf::from(format!("/music/{title}.mp3")))
}

// ========================
//    PLAYBACK SESSION
// ========================

#[test]
fn play_with_context_sets_queue_and_index() {
    let mut session = PlaybackSession::default();
    let mut t = FakeTransport::default();
    let q = queue();

    session.play(Arc::clone(&q[1]), Some(q.clone()), &mut t).unwrap();

    assert_eq!(session.queue().len(), 3);
    assert_eq!(session.queue_index(), Some(1));
    assert_eq!(session.current().map(|s| s.id), Some(2));
    assert!(session.is_playing());
    assert_eq!(session.duration(), 200.0);
    assert_eq!(t.calls, vec![load("b")]);
}

#[test]
fn song_outside_context_has_no_index() {
    let mut session = PlaybackSession::default();
    let mut t = FakeTransport::default();

    session
        .play(song(9, "stray", 50.0), Some(queue()), &mut t)
        .unwrap();

    assert_eq!(session.queue_index(), None);
    session.next(&mut t).unwrap();
    assert_eq!(t.calls, vec![load("stray")]);
}

#[test]
fn playing_current_song_toggles() {
    let mut session = PlaybackSession::default();
    let mut t = FakeTransport::default();
    let q = queue();

    session.play(Arc::clone(&q[0]), Some(q.clone()), &mut t).unwrap();
    session.play(Arc::clone(&q[0]), None, &mut t).unwrap();
    assert!(!session.is_playing());

    session.play(Arc::clone(&q[0]), None, &mut t).unwrap();
    assert!(session.is_playing());

    assert_eq!(t.calls, vec![load("a"), Call::Pause, Call::Play]);
}

#[test]
fn toggle_without_song_is_a_no_op() {
    let mut session = PlaybackSession::default();
    let mut t = FakeTransport::default();

    session.toggle(&mut t).unwrap();

    assert!(!session.is_playing());
    assert!(t.calls.is_empty());
}

#[test]
fn next_wraps_around() {
    let mut session = PlaybackSession::default();
    let mut t = FakeTransport::default();
    let q = queue();

    session.play(Arc::clone(&q[2]), Some(q.clone()), &mut t).unwrap();
    session.next(&mut t).unwrap();

    assert_eq!(session.queue_index(), Some(0));
    assert_eq!(session.current().map(|s| s.id), Some(1));
    assert_eq!(t.calls, vec![load("c"), load("a")]);
}

#[test]
fn prev_wraps_around_when_near_start() {
    let mut session = PlaybackSession::default();
    let mut t = FakeTransport::default();
    let q = queue();

    session.play(Arc::clone(&q[0]), Some(q.clone()), &mut t).unwrap();
    t.position = Duration::from_secs(1);
    session.prev(&mut t).unwrap();

    assert_eq!(session.queue_index(), Some(2));
    assert_eq!(t.calls, vec![load("a"), load("c")]);
}

#[test]
fn prev_restarts_after_threshold() {
    let mut session = PlaybackSession::default();
    let mut t = FakeTransport::default();
    let q = queue();

    session.play(Arc::clone(&q[1]), Some(q.clone()), &mut t).unwrap();
    t.position = Duration::from_secs(5);
    session.prev(&mut t).unwrap();

    assert_eq!(session.queue_index(), Some(1));
    assert_eq!(session.current().map(|s| s.id), Some(2));
    assert_eq!(t.calls, vec![load("b"), Call::Seek(Duration::ZERO)]);
}

#[test]
fn prev_at_exactly_threshold_skips_back() {
    let mut session = PlaybackSession::default();
    let mut t = FakeTransport::default();
    let q = queue();

    session.play(Arc::clone(&q[1]), Some(q.clone()), &mut t).unwrap();
    t.position = DEFAULT_RESTART_THRESHOLD;
    session.prev(&mut t).unwrap();

    assert_eq!(session.queue_index(), Some(0));
}

#[test]
fn next_and_prev_need_a_queue() {
    let mut session = PlaybackSession::default();
    let mut t = FakeTransport::default();

    session.next(&mut t).unwrap();
    t.position = Duration::from_secs(10);
    session.prev(&mut t).unwrap();

    assert!(t.calls.is_empty());
    assert!(session.current().is_none());
}

#[test]
fn seek_is_clamped_to_song_length() {
    let mut session = PlaybackSession::default();
    let mut t = FakeTransport::default();
    let q = queue();

    session.play(Arc::clone(&q[1]), Some(q.clone()), &mut t).unwrap();
    session.seek(1.5, &mut t).unwrap();
    session.seek(-0.2, &mut t).unwrap();
    session.seek(0.25, &mut t).unwrap();

    assert_eq!(
        t.calls[1..],
        [
            Call::Seek(Duration::from_secs(200)),
            Call::Seek(Duration::ZERO),
            Call::Seek(Duration::from_secs(50)),
        ]
    );
    assert_eq!(session.position(), Duration::from_secs(50));
}

#[test]
fn seek_without_duration_is_a_no_op() {
    let mut session = PlaybackSession::default();
    let mut t = FakeTransport::default();

    session.seek(0.5, &mut t).unwrap();
    session
        .play(song(4, "untimed", 0.0), None, &mut t)
        .unwrap();
    session.seek(0.5, &mut t).unwrap();

    assert_eq!(t.calls, vec![load("untimed")]);
}

#[test]
fn seek_by_moves_relative_to_position() {
    let mut session = PlaybackSession::default();
    let mut t = FakeTransport::default();
    let q = queue();

    session.play(Arc::clone(&q[0]), Some(q.clone()), &mut t).unwrap();
    t.position = Duration::from_secs(20);
    session.seek_by(5.0, &mut t).unwrap();
    session.seek_by(-60.0, &mut t).unwrap();

    assert_eq!(
        t.calls[1..],
        [
            Call::Seek(Duration::from_secs(25)),
            Call::Seek(Duration::ZERO),
        ]
    );
}

#[test]
fn track_end_advances() {
    let mut session = PlaybackSession::default();
    let mut t = FakeTransport::default();
    let q = queue();

    session.play(Arc::clone(&q[0]), Some(q.clone()), &mut t).unwrap();
    session.handle_event(PlayerEvent::TrackEnded, &mut t).unwrap();

    assert_eq!(session.current().map(|s| s.id), Some(2));
    assert!(session.is_playing());
}

#[test]
fn player_error_is_returned() {
    let mut session = PlaybackSession::default();
    let mut t = FakeTransport::default();

    let err = session
        .handle_event(PlayerEvent::Error("device lost".into()), &mut t)
        .unwrap_err();
    assert_eq!(err.to_string(), "device lost");
}

#[test]
fn failed_load_keeps_previous_song() {
    let mut session = PlaybackSession::default();
    let mut t = FakeTransport::default();
    let q = queue();

    session.play(Arc::clone(&q[0]), Some(q.clone()), &mut t).unwrap();
    t.fail_loads = true;

    assert!(session.play(Arc::clone(&q[1]), None, &mut t).is_err());
    assert_eq!(session.current().map(|s| s.id), Some(1));
}

#[test]
fn stop_clears_current() {
    let mut session = PlaybackSession::default();
    let mut t = FakeTransport::default();
    let q = queue();

    session.play(Arc::clone(&q[0]), Some(q.clone()), &mut t).unwrap();
    session.stop();

    assert!(session.current().is_none());
    assert!(!session.is_playing());
    assert_eq!(session.progress(), 0.0);
}

// ==================
//    NAVIGATION
// ==================

fn seeded_db() -> Database {
    let mut db = Database::open_in_memory().unwrap();
    let rows = [
        ("/music/ann/one.mp3", "One", "Ann", "First"),
        ("/music/ann/two.mp3", "Two", "Ann", "First"),
        ("/music/bea/three.mp3", "Three", "Bea", "Second"),
    ];
    for (path, title, artist, album) in rows {
        let tags = SongTags {
            title: Some(title.into()),
            artist: Some(artist.into()),
            album: Some(album.into()),
            duration: Some(Duration::from_secs(120)),
            ..Default::default()
        };
        db.upsert_song(&ScannedSong::build(path, tags)).unwrap();
    }
    db
}

#[test]
fn navigator_starts_at_home() {
    let nav = Navigator::new();
    assert_eq!(nav.depth(), 1);
    assert_eq!(nav.current().kind, ViewKind::Home);
    assert_eq!(nav.len(), HOME_ENTRIES.len());
}

#[test]
fn navigate_pushes_and_fetches() {
    let db = seeded_db();
    let mut nav = Navigator::new();

    nav.navigate_to(&db, ViewKind::Artists, None).unwrap();
    assert_eq!(nav.depth(), 2);
    assert_eq!(nav.artists.len(), 2);

    nav.navigate_to(&db, ViewKind::Songs, Some(SongFilter::Artist(Some("Ann".into()))))
        .unwrap();
    assert_eq!(nav.depth(), 3);
    assert_eq!(nav.current().title(), "Ann");
    assert_eq!(nav.songs.len(), 2);
}

#[test]
fn songs_without_filter_lists_everything() {
    let db = seeded_db();
    let mut nav = Navigator::new();

    nav.navigate_to(&db, ViewKind::Songs, None).unwrap();
    assert_eq!(nav.songs.len(), 3);
}

#[test]
fn back_never_pops_home() {
    let db = seeded_db();
    let mut nav = Navigator::new();
    nav.navigate_to(&db, ViewKind::Albums, None).unwrap();

    assert!(nav.navigate_back());
    assert!(!nav.navigate_back());
    assert!(!nav.navigate_back());
    assert_eq!(nav.depth(), 1);
    assert_eq!(nav.current().kind, ViewKind::Home);
}

#[test]
fn reload_picks_up_new_rows() {
    let mut db = seeded_db();
    let mut nav = Navigator::new();
    nav.navigate_to(&db, ViewKind::Folders, None).unwrap();
    assert_eq!(nav.folders, ["/music/ann", "/music/bea"]);

    db.upsert_song(&ScannedSong::build("/music/cy/x.mp3", SongTags::default()))
        .unwrap();
    nav.reload(&db).unwrap();
    assert_eq!(nav.folders.len(), 3);

    db.clear().unwrap();
    nav.reload(&db).unwrap();
    assert!(nav.is_empty());
}

// ================
//    UI STATE
// ================

#[test]
fn entering_rows_walks_down_and_plays() {
    let db = seeded_db();
    let mut ui = UiState::new(DEFAULT_RESTART_THRESHOLD);
    let mut t = FakeTransport::default();

    // Home -> Albums
    ui.scroll(2);
    ui.enter(&db, &mut t).unwrap();
    assert_eq!(ui.nav.current().kind, ViewKind::Albums);
    assert_eq!(ui.selected_index(), Some(0));

    // Albums -> "First"
    ui.enter(&db, &mut t).unwrap();
    assert_eq!(
        ui.nav.current().filter,
        Some(SongFilter::Album(Some("First".into())))
    );

    // Play "Two"
    ui.scroll(1);
    ui.enter(&db, &mut t).unwrap();
    assert_eq!(ui.playback.current().map(|s| s.title.as_str()), Some("Two"));
    assert_eq!(ui.playback.queue().len(), 2);
    assert_eq!(ui.playback.queue_index(), Some(1));
    assert_eq!(t.calls, vec![Call::Load(PathBuf::from("/music/ann/two.mp3"))]);
}

#[test]
fn back_restores_previous_selection() {
    let db = seeded_db();
    let mut ui = UiState::new(DEFAULT_RESTART_THRESHOLD);
    let mut t = FakeTransport::default();

    ui.scroll(3);
    ui.enter(&db, &mut t).unwrap();
    assert_eq!(ui.nav.current().kind, ViewKind::Folders);

    ui.back();
    assert_eq!(ui.nav.current().kind, ViewKind::Home);
    assert_eq!(ui.selected_index(), Some(3));

    ui.back();
    assert_eq!(ui.nav.depth(), 1);
}

#[test]
fn scroll_stays_in_bounds() {
    let mut ui = UiState::new(DEFAULT_RESTART_THRESHOLD);

    ui.scroll(-5);
    assert_eq!(ui.selected_index(), Some(0));
    ui.scroll(50);
    assert_eq!(ui.selected_index(), Some(HOME_ENTRIES.len() - 1));
}

#[test]
fn errors_are_shown_until_dismissed() {
    let mut ui = UiState::new(DEFAULT_RESTART_THRESHOLD);

    ui.set_error(anyhow!("no such folder"));
    assert_eq!(ui.get_error(), Some("no such folder"));

    ui.dismiss_error();
    assert!(ui.get_error().is_none());
}

#[test]
fn folder_prompt_returns_typed_text() {
    let mut ui = UiState::new(DEFAULT_RESTART_THRESHOLD);

    ui.open_folder_prompt();
    assert_eq!(ui.popup.current, PopupType::FolderPrompt);
    ui.popup.input.insert_str("~/Music");

    assert_eq!(ui.take_folder_input(), "~/Music");
    assert!(!ui.popup.is_open());
}

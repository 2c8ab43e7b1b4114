use anyhow::{Context, Result};
use queries::*;
use rusqlite::{Connection, Row, params};
use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};
use tracing::{debug, info};

use crate::domain::{
    AlbumSummary, ArtistSummary, ScannedSong, Song, SongFilter, UNKNOWN_ALBUM, UNKNOWN_ARTIST,
};

mod queries;
mod tables;

const DATA_DIRECTORY: &str = "minitune";
const DATABASE_FILENAME: &str = "library.db";
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Database {
    conn: Connection,
}

impl Database {
    /// `<data dir>/minitune/library.db`
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::data_dir()
            .or_else(dirs::config_dir)
            .context("No data directory present on system!")?;
        Ok(dir.join(DATA_DIRECTORY).join(DATABASE_FILENAME))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {}", path.display()))?;

        // Library jobs write from a worker thread while the UI keeps reading
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.busy_timeout(BUSY_TIMEOUT)?;

        let mut db = Database { conn };
        db.create_tables()?;
        db.migrate()?;

        debug!("Opened library database at {}", path.display());
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let mut db = Database {
            conn: Connection::open_in_memory()?,
        };
        db.create_tables()?;
        db.migrate()?;

        Ok(db)
    }

    fn create_tables(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(tables::CREATE_TABLES)?;
        tx.commit()?;

        Ok(())
    }

    fn migrate(&mut self) -> Result<()> {
        match self.conn.execute(tables::ADD_TRACK_NO, []) {
            Ok(_) => {
                info!("Added track_no column to songs table");
                Ok(())
            }
            Err(e) if e.to_string().contains("duplicate column name") => Ok(()),
            Err(e) => Err(e).context("Failed to migrate songs table"),
        }
    }

    // ===================
    //   SONG OPERATIONS
    // ===================

    pub fn upsert_song(&mut self, song: &ScannedSong) -> Result<()> {
        let mut stmt = self.conn.prepare_cached(UPSERT_SONG)?;
        stmt.execute(params![
            &song.path,
            &song.title,
            &song.artist,
            &song.album,
            song.duration,
            &song.genre,
            song.year,
            song.track_no,
            &song.artwork,
        ])
        .with_context(|| format!("Failed to store {}", song.path))?;

        Ok(())
    }

    pub fn get_all_songs(&self) -> Result<Vec<Arc<Song>>> {
        self.query_songs(GET_ALL_SONGS, [])
    }

    pub fn get_songs_by_artist(&self, artist: Option<&str>) -> Result<Vec<Arc<Song>>> {
        self.query_songs(GET_SONGS_BY_ARTIST, [artist])
    }

    pub fn get_songs_by_album(&self, album: Option<&str>) -> Result<Vec<Arc<Song>>> {
        self.query_songs(GET_SONGS_BY_ALBUM, [album])
    }

    pub fn get_songs_by_folder(&self, folder: &str) -> Result<Vec<Arc<Song>>> {
        self.query_songs(GET_SONGS_BY_FOLDER, [folder])
    }

    pub fn get_songs(&self, filter: &SongFilter) -> Result<Vec<Arc<Song>>> {
        match filter {
            SongFilter::All => self.get_all_songs(),
            SongFilter::Artist(artist) => self.get_songs_by_artist(artist.as_deref()),
            SongFilter::Album(album) => self.get_songs_by_album(album.as_deref()),
            SongFilter::Folder(folder) => self.get_songs_by_folder(folder),
        }
    }

    pub fn get_song_by_path(&self, path: &str) -> Result<Option<Song>> {
        let mut stmt = self.conn.prepare_cached(GET_SONG_BY_PATH)?;
        let mut rows = stmt.query([path])?;

        match rows.next()? {
            Some(row) => Ok(Some(song_from_row(row)?)),
            None => Ok(None),
        }
    }

    /// Every stored `(id, path)` pair.
    pub fn get_paths(&self) -> Result<Vec<(i64, String)>> {
        let mut stmt = self.conn.prepare(GET_PATHS)?;
        let paths = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(paths)
    }

    pub fn delete_song(&mut self, id: i64) -> Result<()> {
        self.conn.execute(DELETE_SONG, [id])?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        let removed = self.conn.execute(CLEAR_SONGS, [])?;
        info!("Cleared library ({removed} songs)");
        Ok(())
    }

    pub fn song_count(&self) -> Result<u64> {
        let count: i64 = self.conn.query_row(SONG_COUNT, [], |r| r.get(0))?;
        Ok(count as u64)
    }

    fn query_songs<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<Arc<Song>>> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let songs = stmt
            .query_map(params, |row| song_from_row(row).map(Arc::new))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(songs)
    }

    // ====================
    //   BROWSE LISTINGS
    // ====================

    pub fn get_artists(&self) -> Result<Vec<ArtistSummary>> {
        let mut stmt = self.conn.prepare_cached(GET_ARTISTS)?;
        let artists = stmt
            .query_map([], |row| {
                Ok(ArtistSummary {
                    artist: row.get("artist")?,
                    count: row.get("count")?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(artists)
    }

    pub fn get_albums(&self) -> Result<Vec<AlbumSummary>> {
        let mut stmt = self.conn.prepare_cached(GET_ALBUMS)?;
        let albums = stmt
            .query_map([], |row| {
                Ok(AlbumSummary {
                    album: row.get("album")?,
                    artist: row
                        .get::<_, Option<String>>("artist")?
                        .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
                    artwork: row.get("artwork")?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(albums)
    }

    /// Distinct parent directories of every stored path, sorted.
    pub fn get_folders(&self) -> Result<Vec<String>> {
        let folders = self
            .get_paths()?
            .into_iter()
            .filter_map(|(_, path)| {
                Path::new(&path)
                    .parent()
                    .map(|p| p.to_string_lossy().into_owned())
            })
            .filter(|p| !p.is_empty())
            .collect::<BTreeSet<_>>();

        Ok(folders.into_iter().collect())
    }
}

// Legacy rows may carry NULL in any column but the path
fn song_from_row(row: &Row) -> rusqlite::Result<Song> {
    Ok(Song {
        id: row.get("id")?,
        path: row.get("path")?,
        title: row.get::<_, Option<String>>("title")?.unwrap_or_default(),
        artist: row
            .get::<_, Option<String>>("artist")?
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
        album: row
            .get::<_, Option<String>>("album")?
            .unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
        duration: row.get::<_, Option<f64>>("duration")?.unwrap_or(0.0),
        genre: row.get("genre")?,
        year: row.get("year")?,
        track_no: row.get("track_no")?,
        artwork: row.get("artwork")?,
    })
}

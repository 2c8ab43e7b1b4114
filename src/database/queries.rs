pub const UPSERT_SONG: &str = "
    INSERT INTO songs (
        path,
        title,
        artist,
        album,
        duration,
        genre,
        year,
        track_no,
        artwork
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
    ON CONFLICT(path) DO UPDATE SET
        title = excluded.title,
        artist = excluded.artist,
        album = excluded.album,
        duration = excluded.duration,
        genre = excluded.genre,
        year = excluded.year,
        track_no = excluded.track_no,
        artwork = excluded.artwork
";

pub const GET_ALL_SONGS: &str = "
    SELECT id, path, title, artist, album, duration, genre, year, track_no, artwork
    FROM songs
    ORDER BY title ASC, id ASC
";

// `IS` so a NULL filter selects the legacy rows grouped under it
pub const GET_SONGS_BY_ARTIST: &str = "
    SELECT id, path, title, artist, album, duration, genre, year, track_no, artwork
    FROM songs
    WHERE artist IS ?1
    ORDER BY title ASC, id ASC
";

pub const GET_SONGS_BY_ALBUM: &str = "
    SELECT id, path, title, artist, album, duration, genre, year, track_no, artwork
    FROM songs
    WHERE album IS ?1
    ORDER BY
        track_no IS NULL,
        track_no ASC,
        title ASC,
        id ASC
";

// Raw prefix match: '/music/Jo' also matches '/music/John/...'
pub const GET_SONGS_BY_FOLDER: &str = "
    SELECT id, path, title, artist, album, duration, genre, year, track_no, artwork
    FROM songs
    WHERE substr(path, 1, length(?1)) = ?1
    ORDER BY title ASC, id ASC
";

pub const GET_SONG_BY_PATH: &str = "
    SELECT id, path, title, artist, album, duration, genre, year, track_no, artwork
    FROM songs
    WHERE path = ?1
";

pub const GET_ARTISTS: &str = "
    SELECT artist, COUNT(*) AS count
    FROM songs
    GROUP BY artist
    ORDER BY artist ASC
";

pub const GET_ALBUMS: &str = "
    SELECT s.album, s.artist, s.artwork
    FROM songs s
    WHERE s.id = (
        SELECT MIN(id) FROM songs WHERE album IS s.album
    )
    ORDER BY s.album ASC
";

pub const GET_PATHS: &str = "
    SELECT id, path FROM songs
";

pub const DELETE_SONG: &str = "
    DELETE FROM songs WHERE id = ?1
";

pub const CLEAR_SONGS: &str = "
    DELETE FROM songs
";

pub const SONG_COUNT: &str = "
    SELECT COUNT(*) FROM songs
";

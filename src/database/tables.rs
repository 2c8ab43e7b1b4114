pub const CREATE_TABLES: &str = r"
    CREATE TABLE IF NOT EXISTS songs(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        path TEXT UNIQUE NOT NULL,
        title TEXT,
        artist TEXT,
        album TEXT,
        duration REAL,
        genre TEXT,
        year INTEGER,
        artwork BLOB
    );
";

// Databases created before track numbers were stored lack this column
pub const ADD_TRACK_NO: &str = "ALTER TABLE songs ADD COLUMN track_no INTEGER";

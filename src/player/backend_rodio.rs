use anyhow::Result;
use rodio::decoder::builder::SeekMode;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use std::{fs::File, io::BufReader, path::Path, time::Duration};

use crate::player::AudioBackend;

pub struct RodioBackend {
    sink: Sink,
    loaded: bool,
    _stream: OutputStream,
}

impl RodioBackend {
    pub fn new() -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        stream.log_on_drop(false);
        let sink = Sink::connect_new(stream.mixer());

        Ok(Self {
            sink,
            loaded: false,
            _stream: stream,
        })
    }
}

impl AudioBackend for RodioBackend {
    fn load(&mut self, path: &Path) -> Result<()> {
        let source = decode(path)?;

        self.sink.clear();
        self.sink.append(source);
        self.sink.play();
        self.loaded = true;

        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn resume(&mut self) {
        self.sink.play();
    }

    fn stop(&mut self) {
        self.sink.stop();
        self.loaded = false;
    }

    fn seek(&mut self, pos: Duration) -> Result<()> {
        self.sink.try_seek(pos)?;
        Ok(())
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn track_ended(&self) -> bool {
        self.loaded && self.sink.empty()
    }
}

fn decode(song: &Path) -> Result<Decoder<BufReader<File>>> {
    let file = File::open(song)?;
    let len = file.metadata()?.len();

    let mut builder = Decoder::builder()
        .with_data(BufReader::new(file))
        .with_byte_len(len)
        .with_seek_mode(SeekMode::Fastest)
        .with_seekable(true);

    if let Some(ext) = song.extension().and_then(|e| e.to_str()) {
        let hint = match ext.to_ascii_lowercase().as_str() {
            "m4a" => "audio/mp4",
            "ogg" => "audio/ogg",
            "mp3" => "mp3",
            "wav" => "wav",
            "flac" => "flac",
            _ => "",
        };
        if !hint.is_empty() {
            builder = builder.with_hint(hint);
        }
    }

    Ok(builder.build()?)
}

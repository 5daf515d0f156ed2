// SPDX-License-Identifier: MPL-2.0
//! Best-effort background music playback.
//!
//! One looping track, played through `rodio`. Every failure path (missing
//! file, undecodable data, no output device) is an expected outcome that
//! leaves the card silent; callers decide whether and when to retry via the
//! one-shot fallback latch in `app.rs`.

use crate::error::{AudioError, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Owns the audio output stream and the sink playing the looped track.
///
/// The sink starts paused; the caller drives it through [`MusicPlayer::play`]
/// and [`MusicPlayer::pause`]. Dropping the player stops playback.
pub struct MusicPlayer {
    // The stream must stay alive for the sink to keep producing sound.
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    sink: Sink,
    playing: bool,
}

impl std::fmt::Debug for MusicPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MusicPlayer")
            .field("playing", &self.playing)
            .finish()
    }
}

impl MusicPlayer {
    /// Opens `path`, decodes it, and prepares a paused, infinitely-looping
    /// sink for it.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|err| AudioError::FileUnreadable(format!("{:?}: {}", path, err)))?;
        let source = Decoder::new(BufReader::new(file))?;

        let (stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        sink.append(source.repeat_infinite());
        sink.pause();

        Ok(Self {
            _stream: stream,
            _handle: handle,
            sink,
            playing: false,
        })
    }

    /// Resumes playback.
    pub fn play(&mut self) {
        self.sink.play();
        self.playing = true;
    }

    /// Pauses playback.
    pub fn pause(&mut self) {
        self.sink.pause();
        self.playing = false;
    }

    /// Whether the track is currently audible.
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::path::PathBuf;

    #[test]
    fn load_of_missing_file_reports_file_unreadable() {
        let result = MusicPlayer::load(&PathBuf::from("/no/such/track.mp3"));
        match result {
            Err(Error::Audio(AudioError::FileUnreadable(msg))) => {
                assert!(msg.contains("track.mp3"));
            }
            Err(other) => panic!("expected FileUnreadable, got {:?}", other),
            Ok(_) => panic!("load of a missing file should fail"),
        }
    }
}

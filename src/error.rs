// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(String),
    Audio(AudioError),
}

/// Specific error types for music playback issues.
///
/// Playback failures are expected outcomes (no sound device, missing file)
/// and never surface to the user; the card silently stays quiet.
#[derive(Debug, Clone)]
pub enum AudioError {
    /// No usable audio output device on this system
    DeviceUnavailable(String),

    /// Music file could not be opened
    FileUnreadable(String),

    /// Music file opened but could not be decoded
    Undecodable(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::DeviceUnavailable(msg) => write!(f, "No audio device: {}", msg),
            AudioError::FileUnreadable(msg) => write!(f, "Cannot open music file: {}", msg),
            AudioError::Undecodable(msg) => write!(f, "Cannot decode music file: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Audio(e) => write!(f, "Audio Error: {}", e),
        }
    }
}

impl From<AudioError> for Error {
    fn from(err: AudioError) -> Self {
        Error::Audio(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<rodio::StreamError> for Error {
    fn from(err: rodio::StreamError) -> Self {
        Error::Audio(AudioError::DeviceUnavailable(err.to_string()))
    }
}

impl From<rodio::PlayError> for Error {
    fn from(err: rodio::PlayError) -> Self {
        Error::Audio(AudioError::DeviceUnavailable(err.to_string()))
    }
}

impl From<rodio::decoder::DecoderError> for Error {
    fn from(err: rodio::decoder::DecoderError) -> Self {
        Error::Audio(AudioError::Undecodable(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn audio_error_wraps_into_error() {
        let err: Error = AudioError::FileUnreadable("missing.mp3".into()).into();
        assert!(matches!(err, Error::Audio(AudioError::FileUnreadable(_))));
    }

    #[test]
    fn audio_error_display_mentions_cause() {
        let err = AudioError::DeviceUnavailable("no default output".into());
        assert!(format!("{}", err).contains("no default output"));
    }
}

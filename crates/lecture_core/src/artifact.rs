use bytes::Bytes;
use url::Url;

use crate::ValidationError;

const YOUTUBE_HOSTS: [&str; 4] = ["youtube.com", "www.youtube.com", "m.youtube.com", "youtu.be"];

/// The input chosen by the user for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    name: String,
    source: ArtifactSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSource {
    /// Raw audio bytes, uploaded as a file.
    Audio(Bytes),
    /// A YouTube link the service downloads itself.
    YoutubeUrl(String),
}

impl Artifact {
    pub fn audio(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            source: ArtifactSource::Audio(bytes.into()),
        }
    }

    /// Builds a YouTube artifact after checking the link points at YouTube.
    pub fn youtube(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !is_youtube_url(trimmed) {
            return Err(ValidationError::InvalidYoutubeUrl(trimmed.to_string()));
        }
        Ok(Self {
            name: trimmed.to_string(),
            source: ArtifactSource::YoutubeUrl(trimmed.to_string()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &ArtifactSource {
        &self.source
    }
}

pub fn is_youtube_url(raw: &str) -> bool {
    let Ok(url) = Url::parse(raw) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    url.host_str()
        .map(|host| {
            YOUTUBE_HOSTS
                .iter()
                .any(|allowed| host.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

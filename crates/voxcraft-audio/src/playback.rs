//! Single-active-source playback.
//!
//! The platform audio output is reached only through [`AudioPlatform`], so the
//! controller can run against real hardware or a fake in tests. At most one
//! source is ever started and not yet stopped: `play()` stops the previous
//! source before it creates the next one, and never queues.

use std::fmt;
use std::sync::Arc;

use crate::error::{AudioError, AudioResult};
use crate::pcm::{decode_synthesis_pcm, PlayableBuffer};

/// Identifies one source created by a [`PlaybackController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(pub u64);

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "source#{}", self.0)
    }
}

/// A one-shot output source bound to a buffer.
pub trait AudioSource {
    /// Begins output.
    fn start(&mut self) -> AudioResult<()>;

    /// Halts output. May fail if the source already finished.
    fn stop(&mut self) -> AudioResult<()>;
}

/// Platform audio capability.
pub trait AudioPlatform {
    /// Source type produced by this platform.
    type Source: AudioSource;

    /// Decodes raw PCM16 synthesis bytes into a buffer.
    fn decode(&mut self, bytes: &[u8]) -> AudioResult<PlayableBuffer> {
        decode_synthesis_pcm(bytes)
    }

    /// Creates a (not yet started) source for `buffer`.
    ///
    /// The platform must report natural completion by calling
    /// [`PlaybackController::on_ended`] with `id`.
    fn create_source(&mut self, buffer: Arc<PlayableBuffer>, id: SourceId) -> AudioResult<Self::Source>;
}

struct ActiveSource<S> {
    id: SourceId,
    source: S,
}

/// Owns the single active output source.
pub struct PlaybackController<P: AudioPlatform> {
    platform: P,
    active: Option<ActiveSource<P::Source>>,
    last_buffer: Option<Arc<PlayableBuffer>>,
    next_id: u64,
}

impl<P: AudioPlatform> PlaybackController<P> {
    /// Creates an idle controller.
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            active: None,
            last_buffer: None,
            next_id: 1,
        }
    }

    /// Decodes synthesis bytes through the platform.
    pub fn decode(&mut self, bytes: &[u8]) -> AudioResult<PlayableBuffer> {
        self.platform.decode(bytes)
    }

    /// Starts playing `buffer`, preempting whatever is playing.
    ///
    /// By the time this returns the previous source has been stopped.
    ///
    /// # Errors
    /// `EmptyBuffer` for a zero-frame buffer (the current source keeps
    /// playing), or whatever the platform reports when creating or starting
    /// the new source (nothing is playing afterwards).
    pub fn play(&mut self, buffer: Arc<PlayableBuffer>) -> AudioResult<SourceId> {
        if buffer.is_empty() {
            return Err(AudioError::EmptyBuffer);
        }

        self.stop();

        let id = SourceId(self.next_id);
        self.next_id += 1;
        self.last_buffer = Some(Arc::clone(&buffer));

        let mut source = self.platform.create_source(buffer, id)?;
        source.start()?;

        tracing::debug!(%id, "playback started");
        self.active = Some(ActiveSource { id, source });
        Ok(id)
    }

    /// Stops the active source, if any.
    pub fn stop(&mut self) {
        if let Some(mut active) = self.active.take() {
            match active.source.stop() {
                Ok(()) => tracing::debug!(id = %active.id, "playback stopped"),
                Err(e) => tracing::warn!(id = %active.id, error = %e, "ignoring error stopping source"),
            }
        }
    }

    /// Stops if playing, otherwise replays the last buffer.
    ///
    /// Returns whether playback is active afterwards.
    pub fn toggle(&mut self) -> AudioResult<bool> {
        if self.is_playing() {
            self.stop();
            return Ok(false);
        }
        let buffer = self.last_buffer.clone().ok_or(AudioError::NothingToReplay)?;
        self.play(buffer)?;
        Ok(true)
    }

    /// Completion notification from the platform.
    ///
    /// Clears the state only if `id` is the active source; completions from
    /// preempted sources are ignored. Returns whether the state changed.
    pub fn on_ended(&mut self, id: SourceId) -> bool {
        match &self.active {
            Some(active) if active.id == id => {
                tracing::debug!(%id, "playback finished");
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// True while a source is active.
    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    /// The active source's id.
    pub fn active_source(&self) -> Option<SourceId> {
        self.active.as_ref().map(|a| a.id)
    }

    /// The most recently played buffer.
    pub fn last_buffer(&self) -> Option<&Arc<PlayableBuffer>> {
        self.last_buffer.as_ref()
    }

    /// The underlying platform.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Mutable access to the underlying platform.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}

impl<P: AudioPlatform> Drop for PlaybackController<P> {
    fn drop(&mut self) {
        self.stop();
    }
}

//! Audio playback collaborator

/// The host's audio player.
///
/// The editor never decodes audio; it reads position snapshots and issues
/// transport commands through this trait.
pub trait Playback {
    /// Current playback position (ms)
    fn position_ms(&self) -> u64;

    /// Total length of the loaded audio (ms)
    fn duration_ms(&self) -> u64;

    fn is_playing(&self) -> bool;

    fn play(&mut self);

    fn pause(&mut self);

    fn seek(&mut self, position_ms: u64);
}

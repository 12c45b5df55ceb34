//! The host's per-participant audio configuration surface.

use crate::session::ParticipantId;

/// Live audio configuration target for connected participants.
///
/// The store pushes every confirmed override through this trait so the
/// host's audio pipeline stays in step with the override table. Values are
/// passed through unchanged: range validation and clamping belong to the
/// sink (or its caller), not to the store. The nominal ranges below are the
/// platform's documented ones.
///
/// All setters are infallible; a sink that cannot apply a value is expected
/// to absorb it the same way the store absorbs writes for departed
/// participants.
pub trait ParticipantAudioSink {
    /// Voice gain in decibels, nominal range 0–24.
    fn set_voice_gain(&mut self, id: ParticipantId, gain: f32);

    /// Distance in meters where voice volume begins to fall off, nominal
    /// range 0–1,000,000. Zero is recommended for effective spatialization.
    fn set_voice_distance_near(&mut self, id: ParticipantId, near: f32);

    /// End of the audible range for the participant's voice in meters,
    /// nominal range 0–1,000,000. Zero effectively mutes the participant.
    fn set_voice_distance_far(&mut self, id: ParticipantId, far: f32);

    /// Apparent size of the voice source in meters, nominal range 0–1,000.
    /// Should stay below the far distance.
    fn set_voice_volumetric_radius(&mut self, id: ParticipantId, radius: f32);

    /// Enables the distance low-pass filter on the participant's voice.
    fn set_voice_lowpass(&mut self, id: ParticipantId, enabled: bool);

    /// Maximum gain allowed on avatar audio in decibels, nominal range 0–10.
    fn set_avatar_audio_gain(&mut self, id: ParticipantId, gain: f32);

    /// End of the audible range for avatar audio in meters, nominal range
    /// 0–40. Compared against each source's own max distance; the smaller
    /// value wins.
    fn set_avatar_audio_far_radius(&mut self, id: ParticipantId, radius: f32);

    /// Start of the audible range for avatar audio in meters, nominal range
    /// 0–40. Compared against each source's own min distance; the smaller
    /// value wins.
    fn set_avatar_audio_near_radius(&mut self, id: ParticipantId, radius: f32);

    /// Apparent size of avatar audio sources in meters, nominal range 0–40.
    /// Should stay below the far radius.
    fn set_avatar_audio_volumetric_radius(&mut self, id: ParticipantId, radius: f32);

    /// Forces spatialization on avatar audio sources.
    fn set_avatar_audio_force_spatial(&mut self, id: ParticipantId, enabled: bool);

    /// Lets avatar audio sources use their pre-configured custom rolloff curve.
    fn set_avatar_audio_custom_curve(&mut self, id: ParticipantId, enabled: bool);
}

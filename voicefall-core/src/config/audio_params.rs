/// Voice channel parameters for one participant.
///
/// The defaults are the platform's stock values; a store configured with
/// `VoiceParams::default()` behaves exactly like an untouched session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceParams {
    /// Boost applied to the participant's voice in decibels, nominal range
    /// 0–24. Default is 15.
    pub gain: f32,
    /// Distance in meters where voice volume begins to fall off, nominal
    /// range 0–1,000,000. Leaving this at zero is strongly recommended for
    /// realism and effective spatialization. Default is 0.
    pub distance_near: f32,
    /// End of the audible range for the voice in meters, nominal range
    /// 0–1,000,000. Lowering it shortens how far the voice carries, all the
    /// way to 0 to effectively mute the participant. Default is 25.
    pub distance_far: f32,
    /// Apparent size of the voice source in meters, nominal range 0–1,000.
    /// A voice is normally a point source; raising this makes it sound
    /// "large" when passing by at a distance. Should stay below
    /// `distance_far`. Default is 0.
    pub volumetric_radius: f32,
    /// Whether distant voices pass through a low-pass filter. Turn this off
    /// for a voice channel carrying high-quality program material (e.g. a
    /// DJ mix). Default is on.
    pub lowpass: bool,
}

impl Default for VoiceParams {
    fn default() -> Self {
        Self {
            gain: 15.0,
            distance_near: 0.0,
            distance_far: 25.0,
            volumetric_radius: 0.0,
            lowpass: true,
        }
    }
}

/// Avatar audio parameters for one participant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarAudioParams {
    /// Maximum gain allowed on avatar audio in decibels, nominal range
    /// 0–10. Default is 10.
    pub gain: f32,
    /// End of the audible range for avatar audio in meters, nominal range
    /// 0–40. Compared against each source's max distance; the smaller value
    /// wins. Default is 40.
    pub far_radius: f32,
    /// Start of the audible range for avatar audio in meters, nominal range
    /// 0–40. Compared against each source's min distance; the smaller value
    /// wins. Default is 40.
    pub near_radius: f32,
    /// Apparent size of avatar audio sources in meters, nominal range 0–40.
    /// Should stay below `far_radius`. Default is 40.
    pub volumetric_radius: f32,
    /// Forces spatialization on avatar audio sources. Default is off.
    pub force_spatial: bool,
    /// Lets avatar audio sources use their pre-configured custom rolloff
    /// curve. Default is on.
    pub custom_curve: bool,
}

impl Default for AvatarAudioParams {
    fn default() -> Self {
        Self {
            gain: 10.0,
            far_radius: 40.0,
            near_radius: 40.0,
            volumetric_radius: 40.0,
            force_spatial: false,
            custom_curve: true,
        }
    }
}

/// The full per-participant audio record: voice channel plus avatar audio.
///
/// One value of this type serves two roles. Configured once at store
/// construction it is the immutable set of defaults every participant
/// starts from; stored in the override table it is a participant's current
/// overrides. Keeping all eleven attributes in a single record means a
/// participant is either present with every attribute or absent entirely;
/// the table cannot hold a partial entry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AudioParams {
    pub voice: VoiceParams,
    pub avatar: AvatarAudioParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_defaults() {
        let params = AudioParams::default();
        assert_eq!(params.voice.gain, 15.0);
        assert_eq!(params.voice.distance_near, 0.0);
        assert_eq!(params.voice.distance_far, 25.0);
        assert_eq!(params.voice.volumetric_radius, 0.0);
        assert!(params.voice.lowpass);
        assert_eq!(params.avatar.gain, 10.0);
        assert_eq!(params.avatar.far_radius, 40.0);
        assert_eq!(params.avatar.near_radius, 40.0);
        assert_eq!(params.avatar.volumetric_radius, 40.0);
        assert!(!params.avatar.force_spatial);
        assert!(params.avatar.custom_curve);
    }
}

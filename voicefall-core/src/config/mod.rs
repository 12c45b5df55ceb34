//! Configuration for VoiceFall

mod audio_params;

pub use audio_params::{AudioParams, AvatarAudioParams, VoiceParams};

//! # VoiceFall Core
//!
//! Per-participant voice and avatar audio attenuation overrides for shared
//! virtual-world sessions.
//!
//! Each connected observer runs its own [`VoiceFallStore`]: a table mapping
//! participant ids to audio parameter records (voice gain, falloff
//! distances, volumetric radius, low-pass; avatar audio gain, radii and
//! spatialization flags). Reads fall back to the configured defaults when a
//! participant has no override; confirmed writes are pushed to the host's
//! live audio configuration. Records are seeded when participants join and
//! dropped when they leave.
//!
//! ## Quick Start
//!
//! ```
//! use voicefall_core::*;
//!
//! // The host platform supplies session membership...
//! struct Host;
//!
//! impl SessionMembership for Host {
//!     fn local_id(&self) -> ParticipantId {
//!         ParticipantId::new(1)
//!     }
//!     fn participant_ids(&self) -> Vec<ParticipantId> {
//!         vec![ParticipantId::new(1), ParticipantId::new(2)]
//!     }
//!     fn is_connected(&self, id: ParticipantId) -> bool {
//!         id.raw() <= 2
//!     }
//! }
//!
//! // ...and the live per-participant audio configuration target.
//! struct Pipeline;
//!
//! impl ParticipantAudioSink for Pipeline {
//!     fn set_voice_gain(&mut self, _id: ParticipantId, _gain: f32) {}
//!     fn set_voice_distance_near(&mut self, _id: ParticipantId, _near: f32) {}
//!     fn set_voice_distance_far(&mut self, _id: ParticipantId, _far: f32) {}
//!     fn set_voice_volumetric_radius(&mut self, _id: ParticipantId, _radius: f32) {}
//!     fn set_voice_lowpass(&mut self, _id: ParticipantId, _enabled: bool) {}
//!     fn set_avatar_audio_gain(&mut self, _id: ParticipantId, _gain: f32) {}
//!     fn set_avatar_audio_far_radius(&mut self, _id: ParticipantId, _radius: f32) {}
//!     fn set_avatar_audio_near_radius(&mut self, _id: ParticipantId, _radius: f32) {}
//!     fn set_avatar_audio_volumetric_radius(&mut self, _id: ParticipantId, _radius: f32) {}
//!     fn set_avatar_audio_force_spatial(&mut self, _id: ParticipantId, _enabled: bool) {}
//!     fn set_avatar_audio_custom_curve(&mut self, _id: ParticipantId, _enabled: bool) {}
//! }
//!
//! let mut store = VoiceFallStore::new(AudioParams::default(), Host, Pipeline);
//!
//! // The local observer joins a session that already holds participant 2;
//! // both records are seeded from the defaults.
//! store.on_participant_joined(ParticipantId::new(1));
//!
//! // Shorten how far participant 2's voice carries and read it back.
//! store.set_voice_distance_far(ParticipantId::new(2), 10.0);
//! assert_eq!(store.voice_distance_far(ParticipantId::new(2)), 10.0);
//!
//! // Departed participants fall back to the defaults.
//! store.on_participant_left(ParticipantId::new(2));
//! assert_eq!(store.voice_distance_far(ParticipantId::new(2)), 25.0);
//! ```
//!
//! ## Key Components
//!
//! - **[`VoiceFallStore`]**: the override table, its guarded setters and
//!   default-fallback getters
//! - **[`AudioParams`]**: the eleven-attribute record, doubling as the
//!   store's configured defaults
//! - **[`SessionMembership`]** / **[`ParticipantAudioSink`]**: the host
//!   seams the store is driven through
//! - **[`SessionEvent`]**: queued join/leave notifications for hosts that
//!   deliver events through a channel rather than direct callbacks
//! - **[`LateJoinSync`]**: owner-side re-serialization for participants who
//!   join after the last state broadcast
//!
//! ## Execution model
//!
//! Everything runs synchronously on the host's logic-update callback; the
//! store holds no locks and spawns no threads. Each observer's table is
//! process-local. Observers converge because they seed identical defaults
//! and consume the same join/leave stream, not because the table is
//! replicated.

pub mod config;
pub mod error;
pub mod events;
pub mod resync;
pub mod session;
pub mod sink;
pub mod store;

pub use config::{AudioParams, AvatarAudioParams, VoiceParams};
pub use error::VoiceFallError;
pub use events::SessionEvent;
pub use resync::{LateJoinSync, SyncedObject};
pub use session::{ParticipantId, SessionMembership};
pub use sink::ParticipantAudioSink;
pub use store::VoiceFallStore;

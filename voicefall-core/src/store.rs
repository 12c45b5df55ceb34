use crate::config::AudioParams;
use crate::events::SessionEvent;
use crate::session::{ParticipantId, SessionMembership};
use crate::sink::ParticipantAudioSink;
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::collections::HashMap;

/// Per-participant audio attenuation override store.
///
/// `VoiceFallStore` is the central API for VoiceFall. It runs on the host's
/// logic-update callback and maps each connected participant to an
/// [`AudioParams`] record that overrides the configured defaults. Reads fall
/// back to the defaults when no override is present; confirmed writes are
/// pushed to the host's live audio configuration through the injected
/// [`ParticipantAudioSink`].
///
/// # Write contract
///
/// Every setter resolves the participant against the injected
/// [`SessionMembership`] first. When the participant is no longer connected
/// the whole write is dropped: the table is left unchanged, the sink is not
/// called, and the setter returns `false`. No store operation ever fails
/// louder than that; a transient inconsistency in a live session (a target
/// departing mid-frame) must never raise a visible fault.
///
/// # Lifecycle
///
/// Join and leave notifications arrive either through the direct handlers
/// ([`on_participant_joined`](Self::on_participant_joined) /
/// [`on_participant_left`](Self::on_participant_left)) or through the
/// store's event channel, drained by [`pump_events`](Self::pump_events) on
/// the frame callback. When the local observer joins a session that already
/// has participants present, their records are seeded retroactively in one
/// pass.
pub struct VoiceFallStore<M, S> {
    defaults: AudioParams,
    overrides: HashMap<ParticipantId, AudioParams>,
    membership: M,
    sink: S,
    event_sender: Sender<SessionEvent>,
    event_receiver: Receiver<SessionEvent>,
}

impl<M: SessionMembership, S: ParticipantAudioSink> VoiceFallStore<M, S> {
    /// Creates a store with the given defaults and collaborators.
    ///
    /// The defaults are fixed for the lifetime of the store; every
    /// participant record is seeded from them.
    pub fn new(defaults: AudioParams, membership: M, sink: S) -> Self {
        let (event_sender, event_receiver) = unbounded();
        Self {
            defaults,
            overrides: HashMap::new(),
            membership,
            sink,
            event_sender,
            event_receiver,
        }
    }

    /// Returns the configured defaults.
    pub fn defaults(&self) -> &AudioParams {
        &self.defaults
    }

    /// Returns true if `id` currently has an override record.
    pub fn has_overrides(&self, id: ParticipantId) -> bool {
        self.overrides.contains_key(&id)
    }

    /// Returns the ids of every participant with an override record.
    /// Order is not significant.
    pub fn overridden_participants(&self) -> Vec<ParticipantId> {
        self.overrides.keys().copied().collect()
    }

    pub fn membership(&self) -> &M {
        &self.membership
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    // ---- lifecycle ----

    /// Seeds a full defaults record for `id`, replacing any existing record.
    ///
    /// Called on each participant join. The sink is not touched: seeding
    /// mirrors what the host already applies to a fresh participant.
    pub fn seed_participant(&mut self, id: ParticipantId) {
        log::debug!("seeding default audio record for {id}");
        self.overrides.insert(id, self.defaults);
    }

    /// Drops the override record for `id`. No-op when absent.
    pub fn remove_participant(&mut self, id: ParticipantId) {
        if self.overrides.remove(&id).is_some() {
            log::debug!("removed audio record for departed {id}");
        }
    }

    /// Seeds records for every participant the session currently holds,
    /// the local observer included.
    ///
    /// Used when the local observer joins a session that already has other
    /// participants present: no per-join notification was observed locally
    /// for them, so their records are seeded retroactively here.
    pub fn seed_connected(&mut self) {
        let ids = self.membership.participant_ids();
        log::info!("seeding audio records for {} connected participants", ids.len());
        for id in ids {
            self.seed_participant(id);
        }
    }

    /// Join notification. The local observer's own join seeds the whole
    /// session; a remote join seeds just the new participant.
    pub fn on_participant_joined(&mut self, id: ParticipantId) {
        if id == self.membership.local_id() {
            self.seed_connected();
        } else {
            self.seed_participant(id);
        }
    }

    /// Leave notification. The local observer's own departure is ignored:
    /// there is no point tearing down the local table while leaving.
    pub fn on_participant_left(&mut self, id: ParticipantId) {
        if id == self.membership.local_id() {
            return;
        }
        self.remove_participant(id);
    }

    /// Returns a sender the host adapter can queue session events into.
    pub fn event_sender(&self) -> Sender<SessionEvent> {
        self.event_sender.clone()
    }

    /// Drains queued session events and dispatches them to the join/leave
    /// handlers. Returns the number of events handled. Call once per frame.
    pub fn pump_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                SessionEvent::ParticipantJoined(id) => self.on_participant_joined(id),
                SessionEvent::ParticipantLeft(id) => self.on_participant_left(id),
            }
            handled += 1;
        }
        handled
    }

    // ---- effective values ----

    /// Effective voice gain for `id` in decibels: the override when present,
    /// the configured default otherwise. Total over any id.
    pub fn voice_gain(&self, id: ParticipantId) -> f32 {
        self.overrides.get(&id).map_or(self.defaults.voice.gain, |p| p.voice.gain)
    }

    pub fn voice_distance_near(&self, id: ParticipantId) -> f32 {
        self.overrides
            .get(&id)
            .map_or(self.defaults.voice.distance_near, |p| p.voice.distance_near)
    }

    pub fn voice_distance_far(&self, id: ParticipantId) -> f32 {
        self.overrides
            .get(&id)
            .map_or(self.defaults.voice.distance_far, |p| p.voice.distance_far)
    }

    pub fn voice_volumetric_radius(&self, id: ParticipantId) -> f32 {
        self.overrides
            .get(&id)
            .map_or(self.defaults.voice.volumetric_radius, |p| p.voice.volumetric_radius)
    }

    pub fn voice_lowpass(&self, id: ParticipantId) -> bool {
        self.overrides.get(&id).map_or(self.defaults.voice.lowpass, |p| p.voice.lowpass)
    }

    pub fn avatar_audio_gain(&self, id: ParticipantId) -> f32 {
        self.overrides.get(&id).map_or(self.defaults.avatar.gain, |p| p.avatar.gain)
    }

    pub fn avatar_audio_far_radius(&self, id: ParticipantId) -> f32 {
        self.overrides
            .get(&id)
            .map_or(self.defaults.avatar.far_radius, |p| p.avatar.far_radius)
    }

    pub fn avatar_audio_near_radius(&self, id: ParticipantId) -> f32 {
        self.overrides
            .get(&id)
            .map_or(self.defaults.avatar.near_radius, |p| p.avatar.near_radius)
    }

    pub fn avatar_audio_volumetric_radius(&self, id: ParticipantId) -> f32 {
        self.overrides
            .get(&id)
            .map_or(self.defaults.avatar.volumetric_radius, |p| p.avatar.volumetric_radius)
    }

    pub fn avatar_audio_force_spatial(&self, id: ParticipantId) -> bool {
        self.overrides
            .get(&id)
            .map_or(self.defaults.avatar.force_spatial, |p| p.avatar.force_spatial)
    }

    pub fn avatar_audio_custom_curve(&self, id: ParticipantId) -> bool {
        self.overrides
            .get(&id)
            .map_or(self.defaults.avatar.custom_curve, |p| p.avatar.custom_curve)
    }

    // ---- overrides ----

    /// Resolves `id` against the session and returns its record, seeding a
    /// fresh one from the defaults when absent. `None` means the participant
    /// is no longer connected and the pending write must be dropped.
    fn live_record_mut(&mut self, id: ParticipantId) -> Option<&mut AudioParams> {
        if !self.membership.is_connected(id) {
            log::warn!("{id} is not connected; dropping audio override write");
            return None;
        }
        Some(self.overrides.entry(id).or_insert(self.defaults))
    }

    /// Overrides the voice gain for `id` and pushes it to the sink.
    ///
    /// Returns whether the write was applied; `false` means the participant
    /// could not be resolved and nothing changed.
    pub fn set_voice_gain(&mut self, id: ParticipantId, gain: f32) -> bool {
        let Some(record) = self.live_record_mut(id) else {
            return false;
        };
        record.voice.gain = gain;
        self.sink.set_voice_gain(id, gain);
        true
    }

    pub fn set_voice_distance_near(&mut self, id: ParticipantId, near: f32) -> bool {
        let Some(record) = self.live_record_mut(id) else {
            return false;
        };
        record.voice.distance_near = near;
        self.sink.set_voice_distance_near(id, near);
        true
    }

    pub fn set_voice_distance_far(&mut self, id: ParticipantId, far: f32) -> bool {
        let Some(record) = self.live_record_mut(id) else {
            return false;
        };
        record.voice.distance_far = far;
        self.sink.set_voice_distance_far(id, far);
        true
    }

    pub fn set_voice_volumetric_radius(&mut self, id: ParticipantId, radius: f32) -> bool {
        let Some(record) = self.live_record_mut(id) else {
            return false;
        };
        record.voice.volumetric_radius = radius;
        self.sink.set_voice_volumetric_radius(id, radius);
        true
    }

    pub fn set_voice_lowpass(&mut self, id: ParticipantId, enabled: bool) -> bool {
        let Some(record) = self.live_record_mut(id) else {
            return false;
        };
        record.voice.lowpass = enabled;
        self.sink.set_voice_lowpass(id, enabled);
        true
    }

    pub fn set_avatar_audio_gain(&mut self, id: ParticipantId, gain: f32) -> bool {
        let Some(record) = self.live_record_mut(id) else {
            return false;
        };
        record.avatar.gain = gain;
        self.sink.set_avatar_audio_gain(id, gain);
        true
    }

    pub fn set_avatar_audio_far_radius(&mut self, id: ParticipantId, radius: f32) -> bool {
        let Some(record) = self.live_record_mut(id) else {
            return false;
        };
        record.avatar.far_radius = radius;
        self.sink.set_avatar_audio_far_radius(id, radius);
        true
    }

    pub fn set_avatar_audio_near_radius(&mut self, id: ParticipantId, radius: f32) -> bool {
        let Some(record) = self.live_record_mut(id) else {
            return false;
        };
        record.avatar.near_radius = radius;
        self.sink.set_avatar_audio_near_radius(id, radius);
        true
    }

    pub fn set_avatar_audio_volumetric_radius(&mut self, id: ParticipantId, radius: f32) -> bool {
        let Some(record) = self.live_record_mut(id) else {
            return false;
        };
        record.avatar.volumetric_radius = radius;
        self.sink.set_avatar_audio_volumetric_radius(id, radius);
        true
    }

    pub fn set_avatar_audio_force_spatial(&mut self, id: ParticipantId, enabled: bool) -> bool {
        let Some(record) = self.live_record_mut(id) else {
            return false;
        };
        record.avatar.force_spatial = enabled;
        self.sink.set_avatar_audio_force_spatial(id, enabled);
        true
    }

    pub fn set_avatar_audio_custom_curve(&mut self, id: ParticipantId, enabled: bool) -> bool {
        let Some(record) = self.live_record_mut(id) else {
            return false;
        };
        record.avatar.custom_curve = enabled;
        self.sink.set_avatar_audio_custom_curve(id, enabled);
        true
    }

    // ---- resets ----

    /// Re-applies the configured voice defaults for `id` through the guarded
    /// setter path, so the sink receives them too.
    ///
    /// Returns whether the reset was applied.
    pub fn reset_voice(&mut self, id: ParticipantId) -> bool {
        if !self.membership.is_connected(id) {
            log::warn!("{id} is not connected; dropping voice reset");
            return false;
        }
        let defaults = self.defaults.voice;
        self.set_voice_gain(id, defaults.gain);
        self.set_voice_distance_near(id, defaults.distance_near);
        self.set_voice_distance_far(id, defaults.distance_far);
        self.set_voice_volumetric_radius(id, defaults.volumetric_radius);
        self.set_voice_lowpass(id, defaults.lowpass);
        true
    }

    /// Re-applies the configured avatar audio defaults for `id` through the
    /// guarded setter path.
    pub fn reset_avatar_audio(&mut self, id: ParticipantId) -> bool {
        if !self.membership.is_connected(id) {
            log::warn!("{id} is not connected; dropping avatar audio reset");
            return false;
        }
        let defaults = self.defaults.avatar;
        self.set_avatar_audio_gain(id, defaults.gain);
        self.set_avatar_audio_far_radius(id, defaults.far_radius);
        self.set_avatar_audio_near_radius(id, defaults.near_radius);
        self.set_avatar_audio_volumetric_radius(id, defaults.volumetric_radius);
        self.set_avatar_audio_force_spatial(id, defaults.force_spatial);
        self.set_avatar_audio_custom_curve(id, defaults.custom_curve);
        true
    }

    /// Re-applies every configured default for `id`.
    pub fn reset_participant(&mut self, id: ParticipantId) -> bool {
        self.reset_voice(id) && self.reset_avatar_audio(id)
    }
}

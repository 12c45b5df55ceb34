//! In-memory session simulation driving the override store end to end.

use anyhow::Result;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use voicefall_core::{
    AudioParams, LateJoinSync, ParticipantAudioSink, ParticipantId, SessionEvent,
    SessionMembership, SyncedObject, VoiceFallStore,
};

/// Simulated session membership. The demo keeps a clone and mutates the
/// connected set to script joins and leaves; the store sees the same set
/// through its own clone.
#[derive(Clone)]
pub struct SimSession {
    local: ParticipantId,
    connected: Rc<RefCell<BTreeSet<ParticipantId>>>,
}

impl SimSession {
    pub fn new(local: u32, others: &[u32]) -> Self {
        let mut connected = BTreeSet::new();
        connected.insert(ParticipantId::new(local));
        for &raw in others {
            connected.insert(ParticipantId::new(raw));
        }
        Self {
            local: ParticipantId::new(local),
            connected: Rc::new(RefCell::new(connected)),
        }
    }

    pub fn join(&self, raw: u32) {
        self.connected.borrow_mut().insert(ParticipantId::new(raw));
    }

    pub fn leave(&self, raw: u32) {
        self.connected.borrow_mut().remove(&ParticipantId::new(raw));
    }
}

impl SessionMembership for SimSession {
    fn local_id(&self) -> ParticipantId {
        self.local
    }

    fn participant_ids(&self) -> Vec<ParticipantId> {
        self.connected.borrow().iter().copied().collect()
    }

    fn is_connected(&self, id: ParticipantId) -> bool {
        self.connected.borrow().contains(&id)
    }
}

/// Sink standing in for the host audio pipeline; logs every value it is
/// handed instead of configuring real voice channels.
pub struct LoggingSink;

impl ParticipantAudioSink for LoggingSink {
    fn set_voice_gain(&mut self, id: ParticipantId, gain: f32) {
        log::info!("pipeline: {id} voice gain -> {gain} dB");
    }
    fn set_voice_distance_near(&mut self, id: ParticipantId, near: f32) {
        log::info!("pipeline: {id} voice near -> {near} m");
    }
    fn set_voice_distance_far(&mut self, id: ParticipantId, far: f32) {
        log::info!("pipeline: {id} voice far -> {far} m");
    }
    fn set_voice_volumetric_radius(&mut self, id: ParticipantId, radius: f32) {
        log::info!("pipeline: {id} voice volumetric -> {radius} m");
    }
    fn set_voice_lowpass(&mut self, id: ParticipantId, enabled: bool) {
        log::info!("pipeline: {id} voice lowpass -> {enabled}");
    }
    fn set_avatar_audio_gain(&mut self, id: ParticipantId, gain: f32) {
        log::info!("pipeline: {id} avatar gain -> {gain} dB");
    }
    fn set_avatar_audio_far_radius(&mut self, id: ParticipantId, radius: f32) {
        log::info!("pipeline: {id} avatar far -> {radius} m");
    }
    fn set_avatar_audio_near_radius(&mut self, id: ParticipantId, radius: f32) {
        log::info!("pipeline: {id} avatar near -> {radius} m");
    }
    fn set_avatar_audio_volumetric_radius(&mut self, id: ParticipantId, radius: f32) {
        log::info!("pipeline: {id} avatar volumetric -> {radius} m");
    }
    fn set_avatar_audio_force_spatial(&mut self, id: ParticipantId, enabled: bool) {
        log::info!("pipeline: {id} avatar force-spatial -> {enabled}");
    }
    fn set_avatar_audio_custom_curve(&mut self, id: ParticipantId, enabled: bool) {
        log::info!("pipeline: {id} avatar custom-curve -> {enabled}");
    }
}

/// Simulated owner-authoritative synced object.
pub struct SimSyncedObject {
    local: ParticipantId,
    owner: ParticipantId,
}

impl SimSyncedObject {
    pub fn new(local: u32, owner: u32) -> Self {
        Self {
            local: ParticipantId::new(local),
            owner: ParticipantId::new(owner),
        }
    }
}

impl SyncedObject for SimSyncedObject {
    fn is_local_owner(&self) -> bool {
        self.owner == self.local
    }

    fn take_ownership(&mut self) -> voicefall_core::error::Result<()> {
        log::info!("ownership transferred {} -> {}", self.owner, self.local);
        self.owner = self.local;
        Ok(())
    }

    fn request_serialization(&mut self) -> voicefall_core::error::Result<()> {
        log::info!("synced state re-broadcast requested by {}", self.owner);
        Ok(())
    }
}

pub fn run_session_demo() -> Result<()> {
    log::info!("=== Joining a session with participants already present ===");
    let local = ParticipantId::new(1);
    let session = SimSession::new(1, &[2, 3]);
    let mut store = VoiceFallStore::new(AudioParams::default(), session.clone(), LoggingSink);

    // the host fires the local observer's own join last, after 2 and 3
    store.on_participant_joined(local);
    log::info!(
        "seeded {} participants, voice far for 2 is {} m",
        store.overridden_participants().len(),
        store.voice_distance_far(ParticipantId::new(2))
    );

    log::info!("=== A participant joins through the event queue ===");
    let events = store.event_sender();
    session.join(4);
    events.send(SessionEvent::ParticipantJoined(ParticipantId::new(4)))?;
    let handled = store.pump_events();
    log::info!("handled {handled} queued session events");

    log::info!("=== Overriding per-participant audio ===");
    let dj = ParticipantId::new(2);
    // participant 2 is DJing: full-range voice, no distance filtering
    store.set_voice_gain(dj, 24.0);
    store.set_voice_distance_far(dj, 100.0);
    store.set_voice_lowpass(dj, false);
    // participant 3 is loud, pull their voice range in
    store.set_voice_distance_far(ParticipantId::new(3), 10.0);

    // a write to a participant who was never in the session is dropped
    let applied = store.set_voice_gain(ParticipantId::new(9), 24.0);
    log::info!("write for absent participant applied: {applied}");

    log::info!(
        "effective voice: dj far {} m (lowpass {}), participant 3 far {} m",
        store.voice_distance_far(dj),
        store.voice_lowpass(dj),
        store.voice_distance_far(ParticipantId::new(3))
    );

    log::info!("=== Departure falls back to defaults ===");
    session.leave(3);
    events.send(SessionEvent::ParticipantLeft(ParticipantId::new(3)))?;
    store.pump_events();
    log::info!(
        "participant 3 voice far back to {} m",
        store.voice_distance_far(ParticipantId::new(3))
    );

    log::info!("=== Resetting the DJ ===");
    store.reset_voice(dj);
    log::info!(
        "dj voice far {} m, lowpass {}",
        store.voice_distance_far(dj),
        store.voice_lowpass(dj)
    );

    log::info!("=== Late-joiner resync ===");
    // participant 2 owns the synced object; claim it locally and broadcast
    let mut sync = LateJoinSync::new(SimSyncedObject::new(1, 2));
    sync.serialize_as_owner()?;
    // as owner, every subsequent join triggers a re-broadcast
    sync.on_participant_joined(ParticipantId::new(5))?;

    Ok(())
}

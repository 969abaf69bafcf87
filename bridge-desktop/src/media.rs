//! Silent media service implementation

use bridge_traits::{
    assets::{AssetKind, AssetRef},
    error::{BridgeError, Result},
    media::{MediaHandle, MediaService},
};
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::{debug, info};

/// Observable state of one silent player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub asset: AssetRef,
    pub looping: bool,
    pub playing: bool,
    /// Number of successful `start` calls.
    pub starts: u32,
}

/// Media service that keeps player bookkeeping but never touches an audio
/// device.
#[derive(Debug, Default)]
pub struct SilentMediaService {
    sessions: Mutex<HashMap<MediaHandle, SessionSnapshot>>,
}

impl SilentMediaService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a live session, `None` once it has been released.
    pub fn session(&self, handle: MediaHandle) -> Option<SessionSnapshot> {
        self.sessions.lock().get(&handle).cloned()
    }

    /// Number of sessions that have been created and not yet released.
    pub fn active_sessions(&self) -> usize {
        self.sessions.lock().len()
    }

    fn with_session<T>(
        &self,
        handle: MediaHandle,
        update: impl FnOnce(&mut SessionSnapshot) -> T,
    ) -> Result<T> {
        let mut sessions = self.sessions.lock();
        let session = sessions
            .get_mut(&handle)
            .ok_or(BridgeError::UnknownHandle(handle))?;
        Ok(update(session))
    }
}

impl MediaService for SilentMediaService {
    fn create(&self, asset: &AssetRef) -> Result<MediaHandle> {
        if asset.kind() != AssetKind::Audio {
            return Err(BridgeError::OperationFailed(format!(
                "{} is not an audio asset",
                asset
            )));
        }

        let handle = MediaHandle::new();
        self.sessions.lock().insert(
            handle,
            SessionSnapshot {
                asset: asset.clone(),
                looping: false,
                playing: false,
                starts: 0,
            },
        );
        info!(%handle, asset = %asset, "Created silent player");
        Ok(handle)
    }

    fn set_looping(&self, handle: MediaHandle, looping: bool) -> Result<()> {
        self.with_session(handle, |session| session.looping = looping)
    }

    fn start(&self, handle: MediaHandle) -> Result<()> {
        self.with_session(handle, |session| {
            session.playing = true;
            session.starts += 1;
        })?;
        debug!(%handle, "Silent player started");
        Ok(())
    }

    fn pause(&self, handle: MediaHandle) -> Result<()> {
        self.with_session(handle, |session| session.playing = false)?;
        debug!(%handle, "Silent player paused");
        Ok(())
    }

    fn release(&self, handle: MediaHandle) -> Result<()> {
        self.sessions
            .lock()
            .remove(&handle)
            .ok_or(BridgeError::UnknownHandle(handle))?;
        info!(%handle, "Released silent player");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let service = SilentMediaService::new();
        let handle = service.create(&AssetRef::audio("cavadov")).unwrap();

        service.set_looping(handle, true).unwrap();
        service.start(handle).unwrap();

        let session = service.session(handle).unwrap();
        assert!(session.looping);
        assert!(session.playing);
        assert_eq!(session.starts, 1);

        service.pause(handle).unwrap();
        assert!(!service.session(handle).unwrap().playing);

        service.release(handle).unwrap();
        assert_eq!(service.active_sessions(), 0);
        assert!(service.session(handle).is_none());
    }

    #[test]
    fn test_rejects_non_audio_assets() {
        let service = SilentMediaService::new();
        let result = service.create(&AssetRef::image("perrito"));
        assert!(matches!(result, Err(BridgeError::OperationFailed(_))));
    }

    #[test]
    fn test_released_handle_is_unknown() {
        let service = SilentMediaService::new();
        let handle = service.create(&AssetRef::audio("cavadov")).unwrap();
        service.release(handle).unwrap();

        assert!(matches!(
            service.start(handle),
            Err(BridgeError::UnknownHandle(h)) if h == handle
        ));
        assert!(matches!(
            service.release(handle),
            Err(BridgeError::UnknownHandle(_))
        ));
    }
}

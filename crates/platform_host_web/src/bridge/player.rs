use platform_host::PlayerEventSink;

use super::interop::{self, PlayerBinding};

pub(crate) fn player_create(
    mount_id: &str,
    video_id: &str,
    events: PlayerEventSink,
) -> Result<PlayerBinding, String> {
    if mount_id.trim().is_empty() {
        return Err("player mount id must not be empty".to_string());
    }
    interop::player_create(mount_id, video_id, events)
}

use crate::app::App;
use crate::audio::AudioOutput;
use crate::mpris::MprisHandle;
use crate::transport::TransportController;

/// Publish the controller's current state to the desktop.
pub fn update_mpris<A: AudioOutput>(
    mpris: &MprisHandle,
    app: &App,
    transport: &TransportController<A>,
) {
    let track = transport.track();
    let index = track.and_then(|t| app.position_of(&t.id));
    mpris.set_track_metadata(index, track);
    mpris.set_playback(transport.status());
    mpris.set_loop(transport.is_looping());
    mpris.set_volume(transport.volume());
}

// Application state for HTTP handlers
use crate::application::track_my_fish_service::TrackMyFishService;

#[derive(Clone)]
pub struct AppState {
    pub service: TrackMyFishService,
}

use crate::cli::Args;
use crate::game::models::GameSettings;
use crate::map::divisions::Divisions;
use crate::storage::interface::ISessionStorage;
use crate::storage::sessions::HashMapSessionsStorage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext<SS: ISessionStorage> {
    pub sessions: SS,
    pub divisions: Arc<Divisions>,
    pub settings: GameSettings,
}

pub struct RequestContext {
    pub session_id: String,
}

pub fn init(args: &Args, divisions: Arc<Divisions>) -> AppContext<HashMapSessionsStorage> {
    let settings = GameSettings {
        rounds_per_game: args.rounds_per_game,
        sampling_radius_km: args.sampling_radius_km,
    };
    tracing::info!(
        rounds_per_game = settings.rounds_per_game,
        sampling_radius_km = settings.sampling_radius_km,
        "Initialized app context."
    );
    AppContext {
        sessions: HashMapSessionsStorage::default(),
        divisions,
        settings,
    }
}

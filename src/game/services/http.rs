use crate::app_context::{AppContext, RequestContext};
use crate::game::errors::{GameError, GameErrorCode};
use crate::game::models::{GameSession, GuessOutcome};
use crate::game::services::requests::CreateSessionRequest;
use crate::game::services::responses::{
    DivisionsResponse, GuessResponse, NextRoundResponse, SelectDivisionResponse, SessionResponse,
};
use crate::storage::interface::ISessionStorage;

pub struct DivisionsHttpHandler<SS: ISessionStorage> {
    app_context: AppContext<SS>,
}

impl<SS> DivisionsHttpHandler<SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>) -> Self {
        Self { app_context }
    }

    pub fn list(&self) -> DivisionsResponse {
        DivisionsResponse {
            error: false,
            divisions: self.app_context.divisions.names(),
        }
    }
}

pub struct CreateSessionHttpHandler<SS: ISessionStorage> {
    app_context: AppContext<SS>,
}

impl<SS> CreateSessionHttpHandler<SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>) -> Self {
        Self { app_context }
    }

    pub async fn create(&self, request: CreateSessionRequest) -> SessionResponse {
        let total_rounds = request
            .total_rounds
            .unwrap_or(self.app_context.settings.rounds_per_game);
        let session = match GameSession::start(
            self.app_context.divisions.clone(),
            self.app_context.settings.sampling_radius_km,
            total_rounds,
            &mut rand::thread_rng(),
        ) {
            Ok(session) => session,
            Err(error) => {
                tracing::warn!(total_rounds, "Refusing to start a session: {error}");
                return SessionResponse {
                    error: true,
                    error_code: Some(error.code()),
                    session: None,
                };
            }
        };
        let session_id = self.app_context.sessions.create(session).await;
        match self.app_context.sessions.view(&session_id).await {
            Ok(view) => SessionResponse {
                error: false,
                error_code: None,
                session: Some(view),
            },
            Err(error) => SessionResponse {
                error: true,
                error_code: Some(error.code()),
                session: None,
            },
        }
    }
}

pub struct SessionHttpHandler<'a, SS: ISessionStorage> {
    app_context: AppContext<SS>,
    request_context: &'a RequestContext,
}

impl<'a, SS> SessionHttpHandler<'a, SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn view(&self) -> SessionResponse {
        if !self
            .app_context
            .sessions
            .exists(&self.request_context.session_id)
            .await
        {
            return SessionResponse {
                error: true,
                error_code: Some(GameErrorCode::SessionNotFound),
                session: None,
            };
        }
        match self
            .app_context
            .sessions
            .view(&self.request_context.session_id)
            .await
        {
            Ok(view) => SessionResponse {
                error: false,
                error_code: None,
                session: Some(view),
            },
            Err(error) => SessionResponse {
                error: true,
                error_code: Some(error.code()),
                session: None,
            },
        }
    }

    pub async fn select_division(&self, division: String) -> SelectDivisionResponse {
        match self
            .app_context
            .sessions
            .select_division(&self.request_context.session_id, &division)
            .await
        {
            Ok(()) => SelectDivisionResponse {
                error: false,
                error_code: None,
            },
            Err(error) => {
                self.log_rejection(&error);
                SelectDivisionResponse {
                    error: true,
                    error_code: Some(error.code()),
                }
            }
        }
    }

    pub async fn submit_guess(&self, division: String) -> GuessResponse {
        let result = self
            .app_context
            .sessions
            .submit_guess(&self.request_context.session_id, &division)
            .await;
        self.guess_response(result).await
    }

    pub async fn reveal(&self) -> GuessResponse {
        let result = self
            .app_context
            .sessions
            .reveal(&self.request_context.session_id)
            .await;
        self.guess_response(result).await
    }

    pub async fn next_round(&self) -> NextRoundResponse {
        let progress = match self
            .app_context
            .sessions
            .next_round(&self.request_context.session_id)
            .await
        {
            Ok(progress) => progress,
            Err(error) => {
                self.log_rejection(&error);
                return NextRoundResponse {
                    error: true,
                    error_code: Some(error.code()),
                    progress: None,
                    session: None,
                };
            }
        };
        NextRoundResponse {
            error: false,
            error_code: None,
            progress: Some(progress),
            session: self
                .app_context
                .sessions
                .view(&self.request_context.session_id)
                .await
                .ok(),
        }
    }

    async fn guess_response(
        &self,
        result: Result<GuessOutcome, GameError>,
    ) -> GuessResponse {
        match result {
            Ok(outcome) => GuessResponse {
                error: false,
                error_code: None,
                outcome: Some(outcome),
                session: self
                    .app_context
                    .sessions
                    .view(&self.request_context.session_id)
                    .await
                    .ok(),
            },
            Err(error) => {
                self.log_rejection(&error);
                GuessResponse {
                    error: true,
                    error_code: Some(error.code()),
                    outcome: None,
                    session: None,
                }
            }
        }
    }

    fn log_rejection(&self, error: &GameError) {
        tracing::warn!(
            session_id = %self.request_context.session_id,
            "Rejected a session action: {error}"
        );
    }
}

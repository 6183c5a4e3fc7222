use axum::{
    Router,
    routing::{get, post},
};
use registration_adapters::http::{
    AppState,
    routes::{confirm, register},
};
use registration_core::{Clock, ConfirmationTokenStore, EmailClient, UserStore};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The registration service: user signup plus email confirmation.
pub struct RegistrationService {
    router: Router,
}

impl RegistrationService {
    /// Create a new RegistrationService with the provided stores, email
    /// client and clock.
    ///
    /// Stores are expected to implement Clone via a shared pool or Arc, so
    /// cloning the state per request stays cheap.
    pub fn new<U, T, E, C>(
        user_store: U,
        token_store: T,
        email_client: E,
        clock: C,
        confirmation_url: String,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
        T: ConfirmationTokenStore + Clone + 'static,
        E: EmailClient + Clone + 'static,
        C: Clock + Clone + 'static,
    {
        let state = AppState::new(user_store, token_store, email_client, clock, confirmation_url);

        let router = Router::new()
            .route("/register", post(register::<U, T, E, C>))
            .route("/confirm", get(confirm::<U, T, E, C>))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be nested into another
    /// application.
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the registration service as a standalone server.
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Registration service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}

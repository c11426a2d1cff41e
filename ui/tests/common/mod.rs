use egui_kittest::Harness;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a, T = State> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }

    /// The mock server, for mounting endpoints beyond the user listing.
    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }
}

impl<'a> TestCtx<'a, State> {
    #[allow(unused)]
    pub async fn new(app: impl FnMut(&mut egui::Ui, &mut State) + 'a) -> Self {
        let (mock_server, state) = setup_test_state(serde_json::json!([])).await;
        let harness = Harness::new_ui_state(app, state);

        Self {
            mock_server,
            harness,
        }
    }
}

impl<'a> TestCtx<'a, RosterApp> {
    /// Full app over a listing endpoint that returns no users.
    #[allow(unused)]
    pub async fn new_app() -> Self {
        Self::new_app_with_users(serde_json::json!([])).await
    }

    /// Full app over a listing endpoint that returns the given users.
    #[allow(unused)]
    pub async fn new_app_with_users(users: serde_json::Value) -> Self {
        let (mock_server, state) = setup_test_state(users).await;
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    /// Full app over a listing endpoint that fails with the given status.
    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(status_code).set_body_string("listing failed"))
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }
}

async fn setup_test_state(users: serde_json::Value) -> (MockServer, State) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let state = State::test(base_url);

    (mock_server, state)
}

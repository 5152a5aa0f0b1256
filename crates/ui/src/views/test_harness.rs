use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use olymp_core::model::ParticipantSession;
use olymp_core::time::fixed_clock;
use services::api::CompetitionApi;
use services::{
    AppServices, GradingService, RegistrationService, ResultsService, SessionService, TaskService,
};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{CabinetView, HomeView, Notice, RegisterView, TasksView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
    initial_session: ParticipantSession,
}

impl UiApp for TestApp {
    fn initial_session(&self) -> ParticipantSession {
        self.initial_session.clone()
    }

    fn session_service(&self) -> SessionService {
        self.services.session_service()
    }

    fn registration_service(&self) -> Arc<RegistrationService> {
        self.services.registration_service()
    }

    fn task_service(&self) -> Arc<TaskService> {
        self.services.task_service()
    }

    fn grading_service(&self) -> Arc<GradingService> {
        self.services.grading_service()
    }

    fn results_service(&self) -> Arc<ResultsService> {
        self.services.results_service()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Tasks,
    Register,
    Cabinet,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    // In the real app the layout provides both shared signals.
    use_context_provider(|| Signal::new(props.app.initial_session.clone()));
    use_context_provider(|| Signal::new(None::<Notice>));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Tasks => rsx! { TasksView {} },
        ViewKind::Register => rsx! { RegisterView {} },
        ViewKind::Cabinet => rsx! { CabinetView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    view: ViewKind,
    initial_session: ParticipantSession,
    api: Arc<dyn CompetitionApi>,
) -> ViewHarness {
    let storage = Storage::in_memory();
    let services = AppServices::assemble(api, &storage, fixed_clock());

    let app = Arc::new(TestApp {
        services,
        initial_session,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom }
}

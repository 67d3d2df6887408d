use std::path::PathBuf;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use ei_core::QUESTION_BANK;
use ei_core::time::fixed_clock;
use render::PdfRenderer;
use services::{
    AppServices, AssessmentFlow, Clock, ReportService, SubmissionService,
    report_service::DEFAULT_RENDER_TIMEOUT,
};
use storage::repository::{InMemoryRepository, Storage};

use crate::context::{AssessmentState, UiApp, build_app_context};
use crate::views::{AssessmentView, ResultsView};

#[derive(Clone)]
struct TestApp {
    services: Arc<AppServices>,
    report_dir: PathBuf,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        self.services.clock()
    }

    fn report_dir(&self) -> PathBuf {
        self.report_dir.clone()
    }

    fn submissions(&self) -> Arc<SubmissionService> {
        self.services.submissions()
    }

    fn reports(&self) -> Arc<ReportService> {
        self.services.reports()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Assessment,
    Results,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    flow: AssessmentFlow,
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
    use_context_provider(|| props.view);
    let flow = props.flow.clone();
    use_context_provider(|| AssessmentState {
        flow: Signal::new(flow),
    });
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
        ViewKind::Assessment => rsx! { AssessmentView {} },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub sheet: Arc<InMemoryRepository>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
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

/// A fresh wizard over the production question bank.
pub fn fresh_flow() -> AssessmentFlow {
    AssessmentFlow::new(&QUESTION_BANK)
}

pub fn setup_view_harness(view: ViewKind, flow: AssessmentFlow) -> ViewHarness {
    let sheet = Arc::new(InMemoryRepository::new());
    let storage = Storage::from_sheet(sheet.clone());
    let services = AppServices::new(
        fixed_clock(),
        &storage,
        Arc::new(PdfRenderer::new()),
        DEFAULT_RENDER_TIMEOUT,
    );

    let app = Arc::new(TestApp {
        services: Arc::new(services),
        report_dir: std::env::temp_dir(),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, flow });

    ViewHarness { dom, sheet }
}

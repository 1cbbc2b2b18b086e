//! Application state and composition.

use std::sync::Arc;

use merchmagic_domain::{product_catalog, ProductTemplate};

use crate::entities::{LogoSlot, MockupStore};
use crate::infrastructure::{
    clock::SystemClock,
    config::{EngineConfig, DEFAULT_GENERATION_CONCURRENCY},
    gemini::GeminiClient,
    ports::{ClockPort, ImageGenPort, PreferenceStore},
    preferences::FilePreferenceStore,
};
use crate::use_cases::{
    self,
    editor::{EditMockup, EditorSessions, EditorView},
    export::{ExportMockup, ExportSuite},
    preferences::ThemePreference,
    suite::{BatchRun, GenerateSuite, RetryMockup, UpdateDraft},
};

/// Main application state.
///
/// Holds the shared entities and use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub entities: Entities,
    pub use_cases: UseCases,
}

/// Shared state owned by the app.
pub struct Entities {
    pub mockups: Arc<MockupStore>,
    pub logo: Arc<LogoSlot>,
    pub editor_sessions: Arc<EditorSessions>,
}

/// Container for all use cases.
pub struct UseCases {
    pub suite: use_cases::SuiteUseCases,
    pub editor: use_cases::EditorUseCases,
    pub export: use_cases::ExportUseCases,
    pub preferences: use_cases::PreferenceUseCases,
}

impl App {
    /// Wire the app against the configured image service and preference file.
    pub fn new(config: &EngineConfig) -> Self {
        let image_gen: Arc<dyn ImageGenPort> = Arc::new(GeminiClient::new(
            &config.gemini_base_url,
            &config.gemini_model,
            &config.gemini_api_key,
            config.image_timeout,
        ));
        let preferences: Arc<dyn PreferenceStore> = match &config.preferences_path {
            Some(path) => Arc::new(FilePreferenceStore::open(path.clone())),
            None => Arc::new(FilePreferenceStore::from_project_dirs()),
        };

        Self::builder(image_gen)
            .preferences(preferences)
            .concurrency(config.generation_concurrency)
            .build()
    }

    pub fn builder(image_gen: Arc<dyn ImageGenPort>) -> AppBuilder {
        AppBuilder {
            image_gen,
            clock: Arc::new(SystemClock::new()),
            preferences: None,
            concurrency: DEFAULT_GENERATION_CONCURRENCY,
            catalog: product_catalog(),
        }
    }

    /// Start a batch and drop editor state left over from the previous one.
    pub fn begin_batch(&self) -> Option<BatchRun> {
        let run = self.use_cases.suite.generate.begin()?;
        let current = self.entities.mockups.snapshot().ids();
        self.entities
            .editor_sessions
            .retain(|id| current.contains(&id));
        Some(run)
    }
}

pub struct AppBuilder {
    image_gen: Arc<dyn ImageGenPort>,
    clock: Arc<dyn ClockPort>,
    preferences: Option<Arc<dyn PreferenceStore>>,
    concurrency: usize,
    catalog: Vec<ProductTemplate>,
}

impl AppBuilder {
    pub fn clock(mut self, clock: Arc<dyn ClockPort>) -> Self {
        self.clock = clock;
        self
    }

    pub fn preferences(mut self, preferences: Arc<dyn PreferenceStore>) -> Self {
        self.preferences = Some(preferences);
        self
    }

    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn catalog(mut self, catalog: Vec<ProductTemplate>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn build(self) -> App {
        let preferences = self
            .preferences
            .unwrap_or_else(|| Arc::new(FilePreferenceStore::from_project_dirs()));

        let mockups = Arc::new(MockupStore::new());
        let logo = Arc::new(LogoSlot::new());
        let editor_sessions = Arc::new(EditorSessions::new());

        let suite = use_cases::SuiteUseCases::new(
            Arc::new(
                GenerateSuite::new(
                    mockups.clone(),
                    logo.clone(),
                    self.image_gen.clone(),
                    self.concurrency,
                )
                .with_catalog(self.catalog),
            ),
            Arc::new(RetryMockup::new(
                mockups.clone(),
                logo.clone(),
                self.image_gen.clone(),
            )),
            Arc::new(UpdateDraft::new(mockups.clone())),
        );

        let editor = use_cases::EditorUseCases::new(
            Arc::new(EditMockup::new(
                mockups.clone(),
                editor_sessions.clone(),
                self.image_gen,
            )),
            Arc::new(EditorView::new(mockups.clone(), editor_sessions.clone())),
        );

        let export = use_cases::ExportUseCases::new(
            Arc::new(ExportSuite::new(mockups.clone(), self.clock.clone())),
            Arc::new(ExportMockup::new(
                mockups.clone(),
                editor_sessions.clone(),
                self.clock,
            )),
        );

        let preferences =
            use_cases::PreferenceUseCases::new(Arc::new(ThemePreference::new(preferences)));

        App {
            entities: Entities {
                mockups,
                logo,
                editor_sessions,
            },
            use_cases: UseCases {
                suite,
                editor,
                export,
                preferences,
            },
        }
    }
}

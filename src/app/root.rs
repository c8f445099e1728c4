use {
    eframe::{
        Frame, Storage,
        egui::{Context, Key, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{
        mem,
        sync::{
            Arc,
            mpsc::{Receiver, TryRecvError},
        },
        time::Duration,
    },
};

use crate::{
    Cli,
    app::{AppState, DetailsWindow, LoadingState, PhaseView, RunningState},
    config::{SIMULATION, SimulationMode, SourceKind, ViewMode},
    data::{LoadedTokens, RemoteIndexSource, spawn_detail_fetch, spawn_token_load},
    engine::TickerEngine,
    ui::{FlashTiming, HighlightTracker, UI_CONFIG, render_loading},
    utils::AppInstant,
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Only the two selectors persist across sessions. Market data never does.
    pub(crate) view_mode: ViewMode,
    pub(crate) sim_mode: SimulationMode,
    #[serde(skip)]
    pub(crate) engine: Option<TickerEngine>,
    #[serde(skip)]
    pub(crate) highlights: HighlightTracker,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    pub(crate) data_rx: Option<Receiver<LoadedTokens>>,
    #[serde(skip)]
    pub(crate) source_kind: SourceKind,
    #[serde(skip)]
    pub(crate) source_name: &'static str,
    #[serde(skip)]
    pub(crate) seed: Option<u64>,
    #[serde(skip)]
    pub(crate) detail_source: Option<Arc<RemoteIndexSource>>,
    #[serde(skip)]
    pub(crate) details: Option<DetailsWindow>,
    #[serde(skip)]
    pub(crate) banner_until: Option<AppInstant>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            sim_mode: ViewMode::default().default_simulation(),
            engine: None,
            highlights: HighlightTracker::default(),
            state: AppState::default(),
            data_rx: None,
            source_kind: SourceKind::default(),
            source_name: "",
            seed: None,
            detail_source: None,
            details: None,
            banner_until: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        // CLI beats persisted state. A view given on the command line brings its own market mode.
        if let Some(view) = args.view {
            app.view_mode = view;
            app.sim_mode = view.default_simulation();
        }
        if let Some(mode) = args.mode {
            app.sim_mode = mode;
        }

        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("Starting in {} view, {} market", app.view_mode, app.sim_mode);
        }

        app.highlights = HighlightTracker::new(FlashTiming::for_view(app.view_mode));
        app.source_kind = args.source.source;
        app.seed = args.source.seed;
        app.detail_source = match args.source.source {
            SourceKind::Remote => Some(Arc::new(RemoteIndexSource::new(
                args.source.index_url.clone(),
                args.source.detail_url.clone(),
            ))),
            SourceKind::Synthetic => None,
        };
        app.state = AppState::Loading(LoadingState::default());
        app.data_rx = Some(spawn_token_load(args.source));

        app
    }

    pub(crate) fn set_view_mode(&mut self, view: ViewMode, now: AppInstant) {
        if view == self.view_mode {
            return;
        }
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("View {} -> {}", self.view_mode, view);
        }
        self.view_mode = view;
        self.highlights.set_timing(FlashTiming::for_view(view));
        self.set_sim_mode(view.default_simulation(), now);
    }

    pub(crate) fn set_sim_mode(&mut self, mode: SimulationMode, now: AppInstant) {
        #[cfg(debug_assertions)]
        if DF.log_selection && mode != self.sim_mode {
            log::info!("Market {} -> {}", self.sim_mode, mode);
        }
        self.sim_mode = mode;
        if let Some(engine) = &mut self.engine {
            engine.set_mode(mode, now);
        }
    }

    pub(crate) fn toggle_pause(&mut self, now: AppInstant) {
        if let Some(engine) = &mut self.engine {
            let paused = !engine.is_paused();
            engine.set_paused(paused, now);
        }
    }

    pub(crate) fn is_paused(&self) -> bool {
        self.engine.as_ref().is_some_and(|e| e.is_paused())
    }

    /// Open the details window for `id`, fetching remote details when the tokens came from the index.
    pub(crate) fn open_details(&mut self, id: String) {
        if self.details.as_ref().is_some_and(|d| d.id == id) {
            return;
        }
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("Details opened for {}", id);
        }
        let request = self
            .detail_source
            .as_ref()
            .map(|source| spawn_detail_fetch(Arc::clone(source), id.clone()));
        self.details = Some(DetailsWindow { id, request });
    }

    pub(crate) fn banner_visible(&self, now: AppInstant) -> bool {
        self.banner_until.is_some_and(|until| now < until)
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context, now: AppInstant) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (pause, view, mode, close) = ctx.input(|i| {
            (
                i.key_pressed(Key::Space),
                i.key_pressed(Key::V),
                i.key_pressed(Key::M),
                i.key_pressed(Key::Escape),
            )
        });
        if pause {
            self.toggle_pause(now);
        }
        if view {
            let next = match self.view_mode {
                ViewMode::List => ViewMode::Grid,
                ViewMode::Grid => ViewMode::List,
            };
            self.set_view_mode(next, now);
        }
        if mode {
            let next = match self.sim_mode {
                SimulationMode::Burst => SimulationMode::Jitter,
                SimulationMode::Jitter => SimulationMode::Burst,
            };
            self.set_sim_mode(next, now);
        }
        if close {
            self.details = None;
        }
    }

    pub(crate) fn tick_loading_state(&mut self, ctx: &Context, state: &mut LoadingState) -> AppState {
        if let Some(next_state) = self.finalize_load_if_ready() {
            ctx.request_repaint();
            return next_state;
        }
        render_loading(ctx, state, self.source_kind);
        ctx.request_repaint_after(SIMULATION.repaint_interval);
        AppState::Loading(state.clone())
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        let now = AppInstant::now();
        self.handle_global_shortcuts(ctx, now);

        if let Some(engine) = &mut self.engine {
            for id in engine.tick(now) {
                if let Some(token) = engine.get(&id) {
                    self.highlights.observe(token, now);
                }
            }
        }
        self.highlights.prune(now);

        self.render_top_panel(ctx, now);
        if self.banner_visible(now) {
            self.render_warning_banner(ctx);
        }
        self.render_status_panel(ctx);
        self.render_central_panel(ctx, now);
        self.render_details_window(ctx);

        self.schedule_repaint(ctx, now);
    }

    fn finalize_load_if_ready(&mut self) -> Option<AppState> {
        let rx = self.data_rx.as_ref()?;
        let loaded = match rx.try_recv() {
            Ok(loaded) => loaded,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                log::error!("Token loader exited without a result");
                LoadedTokens {
                    tokens: Vec::new(),
                    source: "none",
                    elapsed_ms: 0,
                }
            }
        };
        self.data_rx = None;
        self.start_engine(loaded);
        Some(AppState::Running(RunningState))
    }

    fn start_engine(&mut self, loaded: LoadedTokens) {
        #[cfg(debug_assertions)]
        if DF.log_source {
            log::info!(
                "{} tokens ready from {} source in {}ms",
                loaded.tokens.len(),
                loaded.source,
                loaded.elapsed_ms
            );
        }

        let now = AppInstant::now();
        let engine = TickerEngine::new(loaded.tokens, self.sim_mode, now, self.seed);
        for token in engine.tokens() {
            self.highlights.observe(token, now);
        }
        self.source_name = loaded.source;
        self.engine = Some(engine);
        self.banner_until =
            Some(now + Duration::from_millis(UI_CONFIG.layout.banner_duration_ms));
    }

    /// Repaint fast while anything animates, otherwise sleep until the next scheduled mutation.
    fn schedule_repaint(&self, ctx: &Context, now: AppInstant) {
        let fetching = self
            .details
            .as_ref()
            .and_then(|d| d.request.as_ref())
            .is_some_and(|r| r.ready().is_none());
        let animating = self.highlights.is_animating(now) || self.banner_visible(now) || fetching;

        let wait = if animating {
            SIMULATION.repaint_interval
        } else {
            self.engine
                .as_ref()
                .and_then(|e| e.next_deadline())
                .map(|deadline| deadline.saturating_duration_since(now))
                .unwrap_or(Duration::from_secs(1))
                .max(SIMULATION.repaint_interval)
        };
        ctx.request_repaint_after(wait);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("💾 SAVE [App]: view = {}, market = {}", self.view_mode, self.sim_mode);
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.side_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

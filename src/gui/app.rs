// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{mpsc, Arc, Mutex, PoisonError},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    error::IngestError,
    ingest::{DataCache, LoadOutcome, ResultSet, Snapshot},
    sort::{self, SortState},
    specs,
};

use super::{
    actions,
    capture::{CaptureSession, ScrollFrame},
    components::{action_bar, tabs},
    pages::Page,
    router,
};

pub type LoadResult = Result<Snapshot, IngestError>;

/// What a background worker hands back to the UI thread.
pub enum WorkerMsg {
    Load(LoadResult),
    /// Finished without data (e.g. refresh rejected); status already set.
    Idle,
}

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Radio Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub cache: DataCache,

    // one sort state per table
    pub sorts: HashMap<ResultSet, SortState>,
    // sorted row indices, valid for (cache generation, sort state)
    row_ix_cache: HashMap<ResultSet, (u64, SortState, Arc<Vec<usize>>)>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub loading: usize,
    load_tx: mpsc::Sender<WorkerMsg>,
    load_rx: mpsc::Receiver<WorkerMsg>,

    // in-flight PDF capture, bound to the page it started on
    pub capture: Option<CaptureSession>,
}

impl App {
    pub fn new(ctx: &egui::Context, state: AppState) -> Self {
        let (load_tx, load_rx) = mpsc::channel();

        let sorts = ResultSet::ALL
            .into_iter()
            .map(|set| (set, specs::schema_for(set).initial_state()))
            .collect();

        let mut app = Self {
            state,
            cache: DataCache::new(),
            sorts,
            row_ix_cache: HashMap::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            loading: 0,
            load_tx,
            load_rx,
            capture: None,
        };

        logf!("Init: source={:?} page={}", app.state.options.data.source, app.current_page().title());
        actions::spawn_load(&mut app, ctx, None);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_at(self.current_index()) }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub(crate) fn load_sender(&self) -> mpsc::Sender<WorkerMsg> {
        self.load_tx.clone()
    }

    pub fn sort_state(&self, set: ResultSet) -> SortState {
        self.sorts
            .get(&set)
            .cloned()
            .unwrap_or_else(|| specs::schema_for(set).initial_state())
    }

    /// Header click on `key` of `set`'s table.
    pub fn click_header(&mut self, set: ResultSet, key: &str) {
        let schema = specs::schema_for(set);
        let next = schema.next_state(&self.sort_state(set), key);
        logd!("UI: Sort {} → {} {}", set.file(), next.key, next.direction.label());
        self.sorts.insert(set, next);
    }

    /// Sorted row order for `set`, recomputed only when data or sort changed.
    pub fn row_ix(&mut self, set: ResultSet) -> Arc<Vec<usize>> {
        let generation = self.cache.generation();
        let state = self.sort_state(set);

        if let Some((g, s, ix)) = self.row_ix_cache.get(&set) {
            if *g == generation && *s == state {
                return Arc::clone(ix);
            }
        }

        let ix = Arc::new(sort::sort_indices(self.cache.records(set), specs::schema_for(set), &state));
        self.row_ix_cache.insert(set, (generation, state, Arc::clone(&ix)));
        ix
    }

    /// Drain finished loads into the cache.
    fn poll_loads(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.load_rx.try_recv() {
            self.loading = self.loading.saturating_sub(1);
            let WorkerMsg::Load(result) = msg else { continue };
            let outcome = self.cache.apply(result);
            let msg = match outcome {
                LoadOutcome::Loaded => {
                    self.row_ix_cache.clear();
                    self.abandon_capture(ctx, "data reloaded");
                    match self.cache.snapshot() {
                        Some(snap) => format!("Data loaded at {}", snap.loaded_at.format("%H:%M:%S")),
                        None => s!("Data loaded"),
                    }
                }
                LoadOutcome::FirstLoadFailed => {
                    format!("Error loading data: {}", self.cache.last_error().unwrap_or("unknown"))
                }
                LoadOutcome::RefreshFailed => format!(
                    "Refresh failed, showing previous data: {}",
                    self.cache.last_error().unwrap_or("unknown")
                ),
            };
            self.status(msg);
        }
    }

    /// Abandon a capture that no longer belongs to the visible page.
    pub fn abandon_capture(&mut self, ctx: &egui::Context, why: &str) {
        if let Some(session) = self.capture.take() {
            session.cancel.cancel();
            session.restore(ctx);
            logf!("Export: Abandoned region={} ({why})", session.region.name());
            self.status(format!("Export cancelled ({why})"));
        }
    }

    fn feed_screenshots(&mut self, ctx: &egui::Context) {
        if self.capture.is_none() {
            return;
        }
        let shots: Vec<(egui::UserData, Arc<egui::ColorImage>)> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Screenshot { user_data, image, .. } => {
                        Some((user_data.clone(), Arc::clone(image)))
                    }
                    _ => None,
                })
                .collect()
        });

        for (tag, shot) in shots {
            let Some(session) = self.capture.as_mut() else { break };
            if !session.accepts(&tag) {
                logd!("Capture: Dropped screenshot from an earlier session");
                continue;
            }
            if let Some(bitmap) = session.on_screenshot(&shot) {
                if let Some(session) = self.capture.take() {
                    session.restore(ctx);
                    actions::finish_export(self, session, bitmap);
                }
            }
        }
    }

    fn draw_page(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let idx = self.current_index();
        let page = self.current_page();

        if self.cache.is_loaded() || self.loading == 0 {
            let mut area = egui::ScrollArea::vertical()
                .id_salt(("page_scroll", idx))
                .auto_shrink([false, false]);

            let wanted = self
                .capture
                .as_ref()
                .filter(|c| c.page_index == idx)
                .and_then(CaptureSession::wanted_offset);
            if let Some(offset) = wanted {
                area = area.vertical_scroll_offset(offset);
            }

            let out = area.show(ui, |ui| page.draw(ui, self));

            if let Some(session) = self.capture.as_mut() {
                session.after_draw(
                    ctx,
                    ScrollFrame {
                        viewport: out.inner_rect,
                        content_height: out.content_size.y,
                        offset: out.state.offset.y,
                    },
                );
            }
        } else {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loads(ctx);
        self.feed_screenshots(ctx);

        // a capture only survives on the page it started on
        if self.capture.as_ref().is_some_and(|c| c.page_index != self.current_index()) {
            self.abandon_capture(ctx, "page changed");
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.loading > 0 || self.capture.is_some() {
                    ui.spinner();
                }
                ui.label(self.status_text());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            tabs::draw(ui, self);
            ui.separator();
            action_bar::draw(ui, self, ctx);
            ui.separator();
            self.draw_page(ui, ctx);
        });

        if self.loading > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}

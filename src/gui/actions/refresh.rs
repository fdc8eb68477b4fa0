// src/gui/actions/refresh.rs
use std::{thread, time::Duration};

use eframe::egui;

use crate::{
    config::consts::REFETCH_DELAY_SECS,
    gui::{app::{App, WorkerMsg}, progress::GuiProgress},
    ingest::{self, refresh},
};

/// Load every result set on a worker thread; the app applies the result.
/// With `delay`, the worker sleeps first.
pub fn spawn_load(app: &mut App, ctx: &egui::Context, delay: Option<Duration>) {
    let opts = app.state.options.data.clone();
    let tx = app.load_sender();
    let status = app.status.clone();
    let ctx = ctx.clone();

    app.loading += 1;
    thread::spawn(move || {
        if let Some(d) = delay {
            thread::sleep(d);
        }
        let mut prog = GuiProgress::new(status, ctx.clone());
        let result = ingest::source_for(&opts)
            .and_then(|source| ingest::load_all(source.as_ref(), Some(&mut prog)));
        let _ = tx.send(WorkerMsg::Load(result));
        ctx.request_repaint();
    });
}

/// Dispatch the upstream workflow, then reload once after the fixed delay.
pub fn refresh(app: &mut App, ctx: &egui::Context) {
    logf!("Refresh: Begin");
    app.status("Requesting data update…");

    let opts = app.state.options.refresh.clone();
    let data = app.state.options.data.clone();
    let tx = app.load_sender();
    let status = app.status.clone();
    let ctx = ctx.clone();

    app.loading += 1;
    thread::spawn(move || {
        let set_status = |msg: String| {
            *status.lock().unwrap_or_else(std::sync::PoisonError::into_inner) = msg;
            ctx.request_repaint();
        };

        match refresh::trigger(&opts) {
            Ok(msg) => {
                set_status(format!("{msg} Reloading in {REFETCH_DELAY_SECS}s…"));
                thread::sleep(Duration::from_secs(REFETCH_DELAY_SECS));

                let mut prog = GuiProgress::new(status.clone(), ctx.clone());
                let result = ingest::source_for(&data)
                    .and_then(|source| ingest::load_all(source.as_ref(), Some(&mut prog)));
                let _ = tx.send(WorkerMsg::Load(result));
                ctx.request_repaint();
            }
            Err(e) => {
                loge!("Refresh: {e}");
                set_status(e.to_string());
                let _ = tx.send(WorkerMsg::Idle);
            }
        }
    });
}

extern crate termcolor;
extern crate tokio;

use crate::{
    context::Context,
    read::{read_line, read_reader, read_writer},
    write::{write_result, write_summary, write_table, Terminal},
};
use cf_tracker::{
    catalog::{Catalog, TagFilter},
    config::tracker::FAILURE_ALERT,
    tracker::Report,
};
use std::{io::Write, path::Path};
use termcolor::{StandardStream, WriteColor};
use tokio::{
    select, signal,
    time::{interval, MissedTickBehavior},
};

pub fn load_catalog_from(stdout: &mut StandardStream, ctx: &mut Context, path: &Path) {
    match Catalog::load(path) {
        Ok(v) => {
            write_ok!(
                stdout,
                "Success",
                "Loaded {} problems from {}",
                v.len(),
                path.display()
            );
            ctx.catalog = v;
        }
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
}

pub fn load_catalog(stdout: &mut StandardStream, ctx: &mut Context) {
    let path = read_line(stdout, b"Catalog path: ");
    if path.trim().is_empty() {
        write_error!(stdout, "Error", "No catalog path given");
    } else {
        load_catalog_from(stdout, ctx, Path::new(path.trim()));
    }
}

pub fn filter(stdout: &mut StandardStream, ctx: &mut Context) {
    let tags: Vec<&str> = ctx.catalog.tags().into_iter().collect();
    if !tags.is_empty() {
        write_info!(stdout, "Tags", "{}", tags.join(", "));
    }
    write_info!(stdout, "Filter", "{}", ctx.filter);
    ctx.filter = TagFilter::parse(read_line(stdout, b"Tags (empty for all): ").as_str());
    write_ok!(
        stdout,
        "Success",
        "Showing {} of {} problems ({})",
        ctx.catalog.filter(&ctx.filter).len(),
        ctx.catalog.len(),
        ctx.filter
    );
}

/// Runs one cycle; the baseline is only advanced on success.
async fn refresh(stdout: &mut StandardStream, ctx: &mut Context) -> Option<Report> {
    let state = match ctx.state.as_mut() {
        Some(v) => v,
        None => {
            write_error!(stdout, "Error", "Not logged in");
            return None;
        }
    };
    let view = ctx.catalog.filter(&ctx.filter);
    let handle = state.handle().to_string();
    let report = state
        .refresh(
            &ctx.session,
            &view,
            &mut Terminal {
                stdout: &mut *stdout,
                template: &ctx.template,
                handle: handle.as_str(),
                bell: ctx.profile.bell,
            },
        )
        .await;
    if let Some(e) = &report.error {
        write_warn!(stdout, "Warning", "refresh: {}", e);
        if state.failures() >= FAILURE_ALERT {
            write_error!(
                stdout,
                "Error",
                "{} refreshes failed in a row, no new solves can be reported",
                state.failures()
            );
        }
    }
    Some(report)
}

pub async fn status(stdout: &mut StandardStream, ctx: &mut Context) {
    if let Some(report) = refresh(stdout, ctx).await {
        let view = ctx.catalog.filter(&ctx.filter);
        write_table(stdout, &view, &report);
        write_summary(stdout, &view, &report);
    }
}

pub async fn track(stdout: &mut StandardStream, ctx: &mut Context) {
    let handle = match &ctx.state {
        Some(s) => s.handle().to_string(),
        None => {
            write_error!(stdout, "Error", "Not logged in");
            return;
        }
    };
    if ctx.catalog.is_empty() {
        write_warn!(stdout, "Warning", "No catalog loaded, nothing will be announced");
    }
    write_info!(
        stdout,
        "Info",
        "Tracking {} every {}s, press Ctrl-C to stop",
        handle,
        ctx.profile.interval().as_secs()
    );
    let mut ticker = interval(ctx.profile.interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let stop = signal::ctrl_c();
    tokio::pin!(stop);
    loop {
        select! {
            _ = ticker.tick() => {
                if let Some(report) = refresh(stdout, ctx).await {
                    if report.is_ok() {
                        let view = ctx.catalog.filter(&ctx.filter);
                        write_summary(stdout, &view, &report);
                    }
                }
            }
            _ = &mut stop => {
                write_info!(stdout, "Info", "Stopped tracking {}", handle);
                break;
            }
        }
        let _ = stdout.reset();
    }
}

pub fn save_state(stdout: &mut StandardStream, ctx: &mut Context) {
    match &ctx.state {
        Some(s) => {
            if let Some(w) = read_writer(stdout) {
                write_result(stdout, s.save(w), "Written state to file");
            }
        }
        None => write_error!(stdout, "Error", "Not logged in"),
    }
}

pub fn load_state(stdout: &mut StandardStream, ctx: &mut Context) {
    match ctx.state.as_mut() {
        Some(s) => {
            if let Some(r) = read_reader(stdout) {
                write_result(stdout, s.load(r), "Loaded state from file");
            }
        }
        None => write_error!(stdout, "Error", "Not logged in"),
    }
}

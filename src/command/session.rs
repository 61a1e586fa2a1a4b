extern crate futures;
extern crate termcolor;

use crate::{context::Context, read::read_or, write::write_user};
use cf_tracker::{
    judge::Submission,
    profile,
    tracker::{SolvedSets, State},
};
use futures::future::join;
use std::io::Write;
use termcolor::StandardStream;

fn write_latest(stdout: &mut StandardStream, submissions: &[Submission]) {
    let latest = match submissions.iter().max_by_key(|s| (s.creation_time_seconds, s.id)) {
        Some(v) => v,
        None => return,
    };
    let key = latest
        .key()
        .map(|k| k.to_string())
        .unwrap_or_else(|| latest.problem.name.clone());
    match latest.verdict {
        Some(v) => write_info!(stdout, "Latest", "{} {}", key, v),
        None => write_info!(stdout, "Latest", "{} in queue", key),
    }
}

pub async fn login_handle(stdout: &mut StandardStream, ctx: &mut Context, handle: &str) {
    write_info!(stdout, "Info", "Looking up {}...", handle);
    let (info, status) = join(
        ctx.session.user_info(handle),
        ctx.session.user_status(handle),
    )
    .await;
    match info {
        Ok(user) => {
            write_user(stdout, &user);
            match status {
                Ok(v) => {
                    let sets = SolvedSets::from_submissions(&v);
                    write_info!(
                        stdout,
                        "Solved",
                        "{} problems, {} attempted",
                        sets.solved.len(),
                        sets.attempted.len()
                    );
                    write_latest(stdout, &v);
                }
                Err(e) => write_warn!(stdout, "Warning", "submissions: {}", e),
            }
            write_ok!(stdout, "Success", "Logged in as {}", user.handle);
            ctx.state = Some(State::new(user.handle.as_str()));
            ctx.user = Some(user);
        }
        Err(e) if e.is_api() => write_error!(
            stdout,
            "Error",
            "Codeforces refused {}: {}",
            handle,
            e.description().unwrap_or("no reason given")
        ),
        Err(e) => write_error!(stdout, "Error", "login: {}", e),
    }
}

pub async fn login(stdout: &mut StandardStream, ctx: &mut Context) {
    let default = ctx
        .state
        .as_ref()
        .map(|s| s.handle().to_string())
        .or_else(|| ctx.profile.handle.clone());
    let handle = read_or(stdout, "Handle", default.as_deref());
    if handle.is_empty() {
        write_error!(stdout, "Error", "No handle given");
        return;
    }
    login_handle(stdout, ctx, handle.as_str()).await;
}

pub fn logout(stdout: &mut StandardStream, ctx: &mut Context) {
    match ctx.state.take() {
        Some(s) => {
            ctx.user = None;
            write_ok!(stdout, "Success", "Logged out {}", s.handle());
        }
        None => write_error!(stdout, "Error", "Not logged in"),
    }
}

pub fn show_profile(stdout: &mut StandardStream, ctx: &mut Context) {
    if let Err(e) = profile::to_writer(&mut *stdout, &ctx.profile) {
        write_error!(stdout, "Error", "{}", e);
    }
}

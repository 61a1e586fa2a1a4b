extern crate termcolor;

use cf_tracker::{
    catalog::View,
    error::Error,
    judge::User,
    tracker::{Notification, Notifier, Report, Status, Template},
};
use std::io::Write;
use termcolor::{Color, StandardStream};

pub fn write_result<E: Error>(stdout: &mut StandardStream, result: Result<(), E>, success: &str) {
    match result {
        Ok(_) => write_ok!(stdout, "Success", "{}", success),
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
}

pub fn write_user(stdout: &mut StandardStream, user: &User) {
    write_info!(stdout, "Handle", "{}", user.handle);
    if let Some(name) = user.full_name() {
        write_info!(stdout, "Name", "{}", name);
    }
    if let Some(rank) = &user.rank {
        write_info!(
            stdout,
            "Rank",
            "{} (max {})",
            rank,
            user.max_rank.as_deref().unwrap_or(rank.as_str())
        );
    }
    if let Some(rating) = user.rating {
        write_info!(
            stdout,
            "Rating",
            "{} (max {})",
            rating,
            user.max_rating.unwrap_or(rating)
        );
    }
    if let Some(location) = user.location() {
        write_info!(stdout, "From", "{}", location);
    }
    if let Some(org) = user.organization.as_deref().filter(|x| !x.is_empty()) {
        write_info!(stdout, "Org", "{}", org);
    }
    if let Some(photo) = &user.title_photo {
        write_info!(stdout, "Avatar", "{}", photo);
    }
}

pub fn write_table(stdout: &mut StandardStream, view: &View<'_>, report: &Report) {
    for row in view.iter() {
        let (color, mark) = match report.sets.status(&row.key) {
            Status::Solved => (Color::Green, "Solved"),
            Status::Attempted => (Color::Yellow, "Tried"),
            Status::Unattempted => (Color::White, "-"),
        };
        write_color!(
            stdout,
            color,
            mark,
            "{:<9} {:<40} {:>6} {:>6}  {}",
            row.key.to_string(),
            row.title,
            row.level,
            row.difficulty,
            row.tags.join(", ")
        );
    }
}

pub fn write_summary(stdout: &mut StandardStream, view: &View<'_>, report: &Report) {
    let solved = view
        .iter()
        .filter(|r| report.sets.solved.contains(&r.key))
        .count();
    let attempted = view
        .iter()
        .filter(|r| report.sets.status(&r.key) == Status::Attempted)
        .count();
    write_info!(
        stdout,
        "Summary",
        "{} solved, {} tried, {} shown; {} solved overall, {} new",
        solved,
        attempted,
        view.len(),
        report.sets.solved.len(),
        report.new_solves.len()
    );
}

/// Prints notifications as they are raised.
pub struct Terminal<'a> {
    pub stdout: &'a mut StandardStream,
    pub template: &'a Template,
    pub handle: &'a str,
    pub bell: bool,
}
impl Notifier for Terminal<'_> {
    fn notify(&mut self, notification: &Notification) {
        match self.template.render(self.handle, notification) {
            Ok(text) => write_ok!(self.stdout, "Solved", "{}", text),
            Err(e) => {
                write_error!(self.stdout, "Error", "{}", e);
                write_ok!(self.stdout, "Solved", "{}", notification.title);
            }
        }
        if self.bell {
            let _ = self.stdout.write_all(b"\x07");
            let _ = self.stdout.flush();
        }
    }
}

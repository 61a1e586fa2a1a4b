extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use cf_tracker::{
    error::BoxedError,
    profile::{self, Profile},
};
use clap::{crate_description, crate_name, value_parser, Arg, Command};
use pretty_env_logger::init_timed;
use std::{fs::File, io::Write, path::PathBuf};
use termcolor::{ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod register;
    pub mod session;
    pub mod track;
}
mod context;
mod read;
mod write;

use command::{
    register::{register, registrations},
    session::{login, login_handle, logout, show_profile},
    track::{filter, load_catalog, load_catalog_from, load_state, save_state, status, track},
};
use context::Context;
use read::read_command;

const HELP: &[(&str, &str)] = &[
    ("login", "look up a handle and start a session"),
    ("logout", "forget the handle and its solved baseline"),
    ("catalog", "load the problem catalog"),
    ("filter", "choose the tags shown"),
    ("status", "refresh once and show the catalog"),
    ("track", "refresh until Ctrl-C, announcing new solves"),
    ("save_state", "write the solved baseline to a file"),
    ("load_state", "read the solved baseline from a file"),
    ("register", "register a hackathon team"),
    ("registrations", "list registered teams"),
    ("profile", "print the active profile"),
    ("exit", "quit"),
];

fn load_profile(stdout: &mut StandardStream, path: Option<&PathBuf>) -> Profile {
    let path = match path {
        Some(v) => v,
        None => return Profile::default(),
    };
    let loaded = File::open(path)
        .map_err(BoxedError::from)
        .and_then(profile::from_reader);
    match loaded {
        Ok(v) => v,
        Err(e) => {
            write_error!(stdout, "Error", "Error load {}: {}", path.display(), e);
            Profile::default()
        }
    }
}

#[tokio::main]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let app = Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(
            Arg::new("profile")
                .help("Path to profile")
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();
    let profile = load_profile(&mut stdout, app.get_one::<PathBuf>("profile"));
    let mut ctx = match Context::new(profile) {
        Ok(v) => v,
        Err(e) => {
            write_error!(&mut stdout, "Error", "{}", e);
            let _ = stdout.reset();
            return;
        }
    };
    if let Some(path) = ctx.profile.catalog.clone() {
        load_catalog_from(&mut stdout, &mut ctx, &path);
    }
    if let Some(handle) = ctx.profile.handle.clone() {
        login_handle(&mut stdout, &mut ctx, handle.as_str()).await;
    }
    let _ = stdout.reset();
    while let Some(line) = read_command(&mut stdout, b"cf-tracker> ") {
        match line.trim() {
            "" => continue,
            "login" => login(&mut stdout, &mut ctx).await,
            "logout" => logout(&mut stdout, &mut ctx),
            "profile" => show_profile(&mut stdout, &mut ctx),
            "catalog" => load_catalog(&mut stdout, &mut ctx),
            "filter" => filter(&mut stdout, &mut ctx),
            "status" => status(&mut stdout, &mut ctx).await,
            "track" => track(&mut stdout, &mut ctx).await,
            "save_state" => save_state(&mut stdout, &mut ctx),
            "load_state" => load_state(&mut stdout, &mut ctx),
            "register" => register(&mut stdout, &mut ctx),
            "registrations" => registrations(&mut stdout, &mut ctx),
            "help" => {
                for (name, about) in HELP {
                    write_info!(&mut stdout, name, "{}", about);
                }
            }
            "exit" => break,
            unknown => write_error!(
                &mut stdout,
                "Error",
                r#"cf-tracker: unknown command "{}""#,
                unknown
            ),
        }
        let _ = stdout.reset();
    }
    let _ = stdout.reset();
}

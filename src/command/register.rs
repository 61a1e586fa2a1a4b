extern crate termcolor;

use crate::{
    context::Context,
    read::{read_field, read_yes},
};
use cf_tracker::{
    config::registration::{EMAIL_LEN, NAME_LEN, PHONE_LEN, UNI_ID_LEN},
    registration::{Error, Form, Member, Registry},
};
use std::io::Write;
use termcolor::{StandardStream, WriteColor};

fn read_member(stdout: &mut StandardStream, id: usize) -> Member {
    Member {
        name: read_field(stdout, format!("Member {} Name", id).as_str(), NAME_LEN),
        phone: read_field(
            stdout,
            format!("Member {} Phone Number", id).as_str(),
            PHONE_LEN,
        ),
        uni_id: read_field(
            stdout,
            format!("Member {} University ID", id).as_str(),
            UNI_ID_LEN,
        ),
    }
}

pub fn register(stdout: &mut StandardStream, ctx: &mut Context) {
    let mut form = Form::new();
    write_info!(stdout, "Team", "Team Information");
    form.team_name = read_field(stdout, "Team Name", NAME_LEN);
    form.leader.name = read_field(stdout, "Team Leader Name", NAME_LEN);
    form.leader.email = read_field(stdout, "Team Leader Email", EMAIL_LEN);
    form.leader.phone = read_field(stdout, "Team Leader Phone Number", PHONE_LEN);
    form.leader.uni_id = read_field(stdout, "Team Leader University ID", UNI_ID_LEN);
    while read_yes(stdout, b"Add a team member? [y/N]: ") {
        if form.is_full() {
            write_warn!(stdout, "Warning", "{}", Error::Full);
            break;
        }
        let id = form.members().len() + 1;
        let member = read_member(stdout, id);
        if let Err(e) = form.add_member(member) {
            write_warn!(stdout, "Warning", "{}", e);
        }
        let _ = stdout.reset();
    }
    let team = match form.validate() {
        Ok(v) => v,
        Err(e) => {
            write_error!(stdout, "Error", "{}", e);
            return;
        }
    };
    match Registry::new(&ctx.profile.registrations).register(&team) {
        Ok(_) => write_ok!(stdout, "Success", "Team {} registered successfully!", team.name),
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
}

pub fn registrations(stdout: &mut StandardStream, ctx: &mut Context) {
    let registry = Registry::new(&ctx.profile.registrations);
    let names = registry.init().and_then(|_| registry.team_names());
    match names {
        Ok(v) if v.is_empty() => write_info!(stdout, "Info", "No team registered yet"),
        Ok(v) => {
            for (i, name) in v.iter().enumerate() {
                write_info!(stdout, "Team", "{:>3}. {}", i + 1, name);
            }
            write_ok!(stdout, "Total", "{} teams", v.len());
        }
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
}

pub mod logging;
pub mod session;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const CMD_INSPECT: &str = "inspect";
pub const CMD_CHECK: &str = "check";

pub const ARG_PAYLOAD: &str = "payload";
pub const ARG_PAYLOAD_FILE: &str = "payload-file";
pub const ARG_ROLE: &str = "role";
pub const ARG_USER_ID: &str = "user-id";

fn payload_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_PAYLOAD)
                .long(ARG_PAYLOAD)
                .help("Login payload as a JSON object (read from stdin when omitted)")
                .conflicts_with(ARG_PAYLOAD_FILE),
        )
        .arg(
            Arg::new(ARG_PAYLOAD_FILE)
                .long(ARG_PAYLOAD_FILE)
                .help("Path to a file holding the login payload")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("gatekeep")
        .about("Client-held user session and role-based visibility checks")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(payload_args(
            Command::new(CMD_INSPECT).about("Install a login payload and print the session"),
        ))
        .subcommand(
            payload_args(
                Command::new(CMD_CHECK).about("Install a login payload and evaluate a role"),
            )
            .arg(
                Arg::new(ARG_ROLE)
                    .short('r')
                    .long(ARG_ROLE)
                    .help("Required role: public, owner, owner_or_admin, admin")
                    .required(true),
            )
            .arg(
                Arg::new(ARG_USER_ID)
                    .short('u')
                    .long(ARG_USER_ID)
                    .help("Owner id of the resource; parsed as JSON when possible"),
            ),
        );

    let command = session::with_args(command);
    logging::with_args(command)
}

use std::time::Duration;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use curlexec::{DispatchConfig, curl::{COOKIE_PREFIX, HEADER_PREFIX}, execute, parse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CurlCommand {
    Method,
    Url,
    Data,
    Header,
    Cookie,
}

impl CurlCommand {
    fn matches(&self, key: &str) -> bool {
        match self {
            CurlCommand::Method => key == "method",
            CurlCommand::Url => key == "url",
            CurlCommand::Data => key == "data",
            CurlCommand::Header => key.starts_with(HEADER_PREFIX),
            CurlCommand::Cookie => key.starts_with(COOKIE_PREFIX),
        }
    }
}

fn cli() -> Command {
    let command_arg = Arg::new("command")
        .help("The input curl command string")
        .required(true)
        .index(1);

    Command::new("curlexec")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A CLI tool to parse and execute curl commands")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log parsing and dispatch details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Parses a curl command and prints its options")
                .arg(command_arg.clone())
                .arg(
                    Arg::new("part")
                        .short('p')
                        .long("part")
                        .value_name("PART")
                        .help("Only print one part of the command (method, url, data, header, cookie)")
                        .required(false)
                        .value_parser(clap::value_parser!(CurlCommand)),
                ),
        )
        .subcommand(
            Command::new("exec")
                .about("Parses a curl command and sends the request")
                .arg(command_arg)
                .arg(
                    Arg::new("timeout")
                        .short('t')
                        .long("timeout")
                        .value_name("SECS")
                        .help("Give up on the request after this many seconds")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("include")
                        .short('i')
                        .long("include")
                        .help("Print response headers before the body")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default();
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn run_parse(matches: &ArgMatches) -> anyhow::Result<()> {
    let command = matches
        .get_one::<String>("command")
        .context("missing curl command")?;
    let part = matches.get_one::<CurlCommand>("part");

    let options = parse(command)?;
    for (key, value) in options.to_option_map() {
        if part.is_none_or(|part| part.matches(&key)) {
            println!("{key}:{value}");
        }
    }
    Ok(())
}

fn run_exec(matches: &ArgMatches) -> anyhow::Result<()> {
    let command = matches
        .get_one::<String>("command")
        .context("missing curl command")?;
    let config = DispatchConfig {
        timeout: matches
            .get_one::<u64>("timeout")
            .map(|secs| Duration::from_secs(*secs)),
    };

    let mut response = execute(command, &config)?;
    println!("{:?} {}", response.version(), response.status());
    if matches.get_flag("include") {
        for (name, value) in response.headers() {
            println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
        }
        println!();
    }
    let body = response
        .body_mut()
        .read_to_string()
        .context("failed to read response body")?;
    println!("{body}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("parse", sub_matches)) => run_parse(sub_matches),
        Some(("exec", sub_matches)) => run_exec(sub_matches),
        _ => {
            cli().print_help()?;
            println!();
            Ok(())
        }
    }
}

use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use holekit::{HoleKit, HoleKitConfig};
use holekit::utils::logger::Logger;
use holekit::commands::{CommandFactory, HoleKitCommandFactory};

fn main() {
    let matches = ClapCommand::new("holekit")
        .version("0.1")
        .author("Maurice Schilpp")
        .about("Query hole masks and sample patches for image completion")
        .arg(
            Arg::new("input")
                .help("Mask image (hole pixels at or above the threshold)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file overriding the default settings")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("cross")
                .long("cross")
                .help("Follow --direction from this valid pixel across the hole")
                .value_name("ROW,COL")
                .required(false),
        )
        .arg(
            Arg::new("direction")
                .long("direction")
                .help("Direction for --cross (DX along columns, DY along rows)")
                .value_name("DX,DY")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .help("Draw random patches: hole, valid or patch")
                .value_name("MODE")
                .required(false),
        )
        .arg(
            Arg::new("enumerate")
                .long("enumerate")
                .help("List every fully valid patch")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("radius")
                .long("radius")
                .help("Patch radius; patches are (2R+1)x(2R+1)")
                .value_name("R")
                .default_value("0")
                .required(false),
        )
        .arg(
            Arg::new("search")
                .long("search")
                .help("Search region for patch sampling and enumeration")
                .value_name("ROW,COL,W,H")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("attempts")
                .long("attempts")
                .help("Give up after this many random draws instead of enumerating")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .help("Number of patches to draw")
                .value_name("N")
                .default_value("1")
                .required(false),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for the random generator")
                .value_name("SEED")
                .required(false),
        )
        .arg(
            Arg::new("overlay")
                .long("overlay")
                .help("Write a hole overlay (or composite with --image) to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("image")
                .long("image")
                .help("Source image to composite with the mask for --overlay")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    if let Err(e) = Logger::init_global_logger("holekit-global.log", matches.get_flag("verbose")) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let config = match matches.get_one::<String>("config") {
        Some(path) => match HoleKitConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => HoleKitConfig::default(),
    };

    let kit = match HoleKit::new(Some("holekit.log"), config) {
        Ok(kit) => kit,
        Err(e) => {
            eprintln!("Error initializing holekit: {}", e);
            process::exit(1);
        }
    };

    let factory = HoleKitCommandFactory::new();

    let command_result = factory.create_command(&matches, &kit);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}

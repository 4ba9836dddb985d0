use std::path::Path;
use std::process::ExitCode;

use env_logger::{Env, Target};
use screen_locate::args::{Args, Command, print_help};
use screen_locate::screen::dump_monitors;
use screen_locate::{DefaultLogSink, MatchResult, ScreenSource, XcapScreen, find_image};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format_timestamp_secs()
        .init();

    let args = match Args::parse() {
        Ok(Command::Search(args)) => args,
        Ok(Command::Help) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("Screen Locate v{}", env!("APP_VERSION_DISPLAY"));
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("❌ {msg}");
            print_help();
            return ExitCode::from(2);
        }
    };

    let params = match args.search_params() {
        Ok(params) => params,
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::from(2);
        }
    };

    let screen = XcapScreen::new();
    if args.dump_screens
        && let Err(e) = dump_monitors(&screen, Path::new("."))
    {
        log::error!("❌ Debug screenshots failed: {e}");
    }

    match find_image(&screen, &args.template, &params, &DefaultLogSink) {
        Some(found) => {
            println!(
                "\nFOUND at ({},{}) size=({}×{}) on monitor {}",
                found.x, found.y, found.width, found.height, found.monitor_index
            );
            print_monitor_summary(&screen, &found);
            ExitCode::SUCCESS
        }
        None => {
            println!("❌ No match found");
            ExitCode::from(1)
        }
    }
}

fn print_monitor_summary(screen: &XcapScreen, found: &MatchResult) {
    let Ok(monitors) = screen.list_monitors() else {
        return;
    };
    for monitor in monitors {
        let tag = if monitor.index == found.monitor_index {
            "👈 HERE"
        } else {
            ""
        };
        println!("Monitor {} → {} {}", monitor.index, monitor.bounds_label(), tag);
    }
    let (cx, cy) = found.center();
    println!("Center point: ({cx},{cy})");
}

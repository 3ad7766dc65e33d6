use std::process::exit;
// External Crate Imports (only those needed directly in main.rs)
use clap::Parser;
use eframe::egui;

// Internal Crate Imports
use length_converter::{cli, Args, LengthConverter, INITIAL_HEIGHT, INITIAL_WIDTH, PROGRAM_TITLE};

// Application Entry Point
fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    if args.list_rules {
        for line in cli::rule_lines() {
            println!("{}", line);
        }
        return Ok(());
    }

    // --- Headless conversion, no window ---
    if let Some(value) = args.value.as_deref() {
        match cli::conversion_lines(value, args.rule.as_deref()) {
            Ok(lines) => {
                for line in lines {
                    println!("{}", line);
                }
                return Ok(());
            }
            Err(e) => {
                log::warn!("Headless conversion failed: {}", e);
                eprintln!("{}", e);
                exit(1)
            }
        }
    }

    log::info!("Starting {}", PROGRAM_TITLE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([INITIAL_WIDTH, INITIAL_HEIGHT])
            .with_title(PROGRAM_TITLE), // Set window title here
        ..Default::default()
    };

    let restore = !args.no_restore;
    eframe::run_native(
        PROGRAM_TITLE, // Used for window title if not set in viewport
        options,
        Box::new(move |_cc| Ok(Box::new(LengthConverter::new(restore)))), // Create the app instance
    )
}

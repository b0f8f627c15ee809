//! Command-line interface for chroma_scan
//!
//! Names the color at a point of an image file

use chroma_scan::color::reference;
use chroma_scan::{logger, AnalysisResult, ImageAnalyzer, PointOfInterest, SamplePoint, ScanConfig};
use chroma_scan::image_loader::load_image;
use std::{env, path::Path, process};

fn main() {
    logger::init_with_default("warn");

    let args: Vec<String> = env::args().collect();

    let mut point = None;
    let mut window = None;
    let mut config_path = None;
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--point" => {
                let x = args.get(i + 1).and_then(|v| v.parse::<f64>().ok());
                let y = args.get(i + 2).and_then(|v| v.parse::<f64>().ok());
                match (x, y) {
                    (Some(x), Some(y)) => point = Some(SamplePoint::new(x, y)),
                    _ => {
                        eprintln!("Error: --point expects two numbers");
                        process::exit(1);
                    }
                }
                i += 2;
            }
            "--window" => {
                match args.get(i + 1).and_then(|v| v.parse::<u32>().ok()) {
                    Some(size) => window = Some(size),
                    None => {
                        eprintln!("Error: --window expects a positive integer");
                        process::exit(1);
                    }
                }
                i += 1;
            }
            "--config" => {
                match args.get(i + 1) {
                    Some(path) => config_path = Some(path.clone()),
                    None => {
                        eprintln!("Error: --config expects a file path");
                        process::exit(1);
                    }
                }
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let image_path = Path::new(&image_path_str);

    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    let config = match config_path {
        Some(path) => match ScanConfig::from_json_file(Path::new(&path)) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Error: {}", error);
                process::exit(1);
            }
        },
        None => ScanConfig::default(),
    };

    let analyzer = match ImageAnalyzer::new(window.unwrap_or(config.sampling.still_window)) {
        Ok(analyzer) => analyzer,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    };

    let poi = match point {
        Some(point) => PointOfInterest::Point(point),
        None => PointOfInterest::Center,
    };

    match load_image(image_path).and_then(|image| analyzer.analyze(&image, poi)) {
        Ok(result) => print_result(&result),
        Err(error) => {
            eprintln!("Analysis failed: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Name the color at a point of an image file.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --point X Y      Sample around pixel (X, Y) instead of the image center");
    eprintln!("  --window N       Side of the sampled square in pixels (default: 20)");
    eprintln!("  --config FILE    Load scan configuration from a JSON file");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photo.jpg", program_name);
    eprintln!("  {} --point 120 340 photo.png", program_name);
    eprintln!("  {} --window 40 --config scan.json photo.jpg", program_name);
}

fn print_result(result: &AnalysisResult) {
    // Print JSON to stdout for programmatic use
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            println!("{} {}", result.color.name, result.color.hex);
        }
    }

    let closest = reference::nearest(result.color.color);

    // Print summary to stderr for human reading
    eprintln!();
    eprintln!("Color Summary:");
    eprintln!("  Name: {}", result.color.name);
    eprintln!("  Hex Color: {}", result.color.hex);
    eprintln!(
        "  Sampled: {} pixels around ({:.0}, {:.0})",
        result.pixel_count, result.point.x, result.point.y
    );
    eprintln!(
        "  Closest Standard Color: {} ({}, ΔE={:.1})",
        closest.color.name, closest.section, closest.delta_e
    );
}

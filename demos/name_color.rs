//! Name an RGB triple or a hex code
//!
//! Usage: name_color 34 139 34
//!        name_color "#228B22"

use chroma_scan::color::{conversion, reference};
use chroma_scan::{describe, ColorSample};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let sample = match parse_color(&args) {
        Ok(sample) => sample,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Usage: name_color <R> <G> <B> | <#RRGGBB>");
            process::exit(1);
        }
    };

    let named = describe(sample);
    let hsb = sample.to_hsb();
    let closest = reference::nearest(sample);

    println!("{}", named.name);
    println!("  Hex: {}", named.hex);
    println!(
        "  HSB: {:.0}°, {:.0}%, {:.0}%",
        hsb.hue * 360.0,
        hsb.saturation * 100.0,
        hsb.brightness * 100.0
    );
    println!(
        "  Closest standard color: {} {} ({}, ΔE={:.1})",
        closest.color.name,
        closest.color.hex(),
        closest.section,
        closest.delta_e
    );
}

fn parse_color(args: &[String]) -> Result<ColorSample, String> {
    match args {
        [hex] => conversion::parse_hex(hex).map_err(|e| e.to_string()),
        [r, g, b] => {
            let channel = |value: &String| {
                value
                    .parse::<u8>()
                    .map_err(|_| format!("'{}' is not a channel value between 0 and 255", value))
            };
            Ok(ColorSample::from_u8(channel(r)?, channel(g)?, channel(b)?))
        }
        _ => Err("expected one hex code or three channel values".to_string()),
    }
}

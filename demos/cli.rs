//! Command-line interface for dominant_colors
//!
//! Basic CLI tool for testing dominant-color extraction

use std::{env, path::Path, process};

use dominant_colors::{color, DominantColorExtractor, Histogram};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut count = 5usize;
    let mut background = None;
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-n" => {
                i += 1;
                count = match args.get(i).and_then(|v| v.parse().ok()) {
                    Some(value) => value,
                    None => {
                        eprintln!("Error: --count requires a number");
                        process::exit(1);
                    }
                };
            }
            "--background" | "-b" => {
                i += 1;
                background = match args.get(i) {
                    Some(hex) => Some(color::from_hex(hex)),
                    None => {
                        eprintln!("Error: --background requires a hex color");
                        process::exit(1);
                    }
                };
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with('-') => {
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

    let histogram = match Histogram::from_file(image_path, background) {
        Ok(histogram) => histogram,
        Err(error) => {
            eprintln!("Extraction failed: {}", error);
            process::exit(1);
        }
    };

    let colors = DominantColorExtractor::new().extract(&histogram, count);
    let hex_colors: Vec<String> = colors.iter().map(|c| color::to_hex(*c, true)).collect();

    // JSON to stdout for programmatic use
    match serde_json::to_string(&hex_colors) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        }
    }

    // Summary to stderr for human reading
    eprintln!();
    eprintln!("Dominant Color Summary:");
    eprintln!("  Distinct colors: {}", histogram.len());
    for (hex, packed) in hex_colors.iter().zip(&colors) {
        let pixels = histogram.color_count(*packed).unwrap_or(0);
        eprintln!("  {}  ({} px)", hex, pixels);
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Extract the dominant colors of an image file.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --count, -n N        Number of colors to extract (default: 5)");
    eprintln!("  --background, -b HEX Composite translucent pixels against HEX");
    eprintln!("  --help, -h           Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photo.jpg", program_name);
    eprintln!("  {} --count 3 photo.png", program_name);
    eprintln!("  {} --background '#FFFFFF' logo.png", program_name);
}

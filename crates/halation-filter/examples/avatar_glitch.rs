//! Avatar glitch filter demo.
//!
//! Runs the full glitch chain (grayscale, speckle noise, dimming, then
//! chromatic ghosting with a blurred red plane) over an avatar and writes
//! the result as a PNG.
//!
//! Run with: `cargo run --example avatar_glitch [input.png]`
//!
//! Without an argument a synthetic 128x128 avatar is generated.

use std::fs;

use rhizome_halation_color::Argb;
use rhizome_halation_filter::{
    ChannelShift, blue_mask, compose_rgb, gaussian_blur, grayscale, green_mask, multiply, noise,
    red_mask,
};
use rhizome_halation_pixmap::{Pixmap, decode, encode_png};

fn main() {
    let avatar = match std::env::args().nth(1) {
        Some(path) => {
            println!("Reading {}", path);
            let bytes = match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    eprintln!("Failed to read {}: {}", path, e);
                    return;
                }
            };
            match decode(&bytes) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Failed to decode {}: {}", path, e);
                    return;
                }
            }
        }
        None => {
            println!("Generating synthetic avatar...");
            synthetic_avatar(128)
        }
    };
    println!(
        "Avatar: {}x{} pixels",
        avatar.width(),
        avatar.height()
    );

    let mut rng = rand::rng();

    // Desaturate, speckle every pixel lightly, dim to 75%.
    let gray = multiply(
        &noise(&grayscale(&avatar), 0.15, 0.0, 1.0, &mut rng),
        0.75,
        0.75,
        0.75,
    );

    // Ghost the channel planes apart; only the red plane is blurred.
    let red = gaussian_blur(&red_mask(&gray), 5, 2.5).expect("blur parameters are valid");
    let green = green_mask(&gray);
    let blue = blue_mask(&gray);
    let glitched = compose_rgb(
        &red,
        ChannelShift::new(-2, 0),
        &green,
        ChannelShift::new(2, -1),
        &blue,
        ChannelShift::new(2, -1),
    )
    .expect("plane dimensions and shifts are valid");

    let output_path = "avatar_glitch_output.png";
    match encode_png(&glitched) {
        Ok(bytes) => match fs::write(output_path, bytes) {
            Ok(()) => println!("Wrote {}", output_path),
            Err(e) => eprintln!("Failed to write {}: {}", output_path, e),
        },
        Err(e) => eprintln!("Failed to encode PNG: {}", e),
    }
}

/// A gradient disc on a dark field, colorful enough to show the ghosting.
fn synthetic_avatar(size: u32) -> Pixmap {
    let mut p = Pixmap::filled(size, size, Argb::opaque(24, 24, 32)).expect("size is nonzero");
    let center = size as f32 / 2.0;
    let radius = size as f32 * 0.4;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            if (dx * dx + dy * dy).sqrt() < radius {
                let r = (x * 255 / size) as u8;
                let g = (y * 255 / size) as u8;
                let b = 200u8;
                p.set(x, y, Argb::opaque(r, g, b));
            }
        }
    }
    p
}

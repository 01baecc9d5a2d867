use anyhow::{Context, Result};
use std::path::Path;
use tray_icon::Icon;

pub const ICON_FILE: &str = "tray.rgba";
const ICON_SIZE: u32 = 32;
const HONEY: [u8; 4] = [251, 161, 18, 255];

/// Loads the raw RGBA tray icon, or draws the built-in one when the asset
/// is missing or malformed.
pub fn load_icon(path: &Path) -> Result<Icon> {
    let data = match read_rgba(path) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Using built-in tray icon: {:#}", e);
            draw_hexagon(ICON_SIZE)
        }
    };
    Icon::from_rgba(data, ICON_SIZE, ICON_SIZE).context("Invalid tray icon data")
}

fn read_rgba(path: &Path) -> Result<Vec<u8>> {
    let data = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
    let expected = (ICON_SIZE * ICON_SIZE * 4) as usize;
    if data.len() != expected {
        anyhow::bail!("{:?} is {} bytes, expected {}", path, data.len(), expected);
    }
    Ok(data)
}

/// Pointy-top hexagon filling the icon, transparent elsewhere.
fn draw_hexagon(size: u32) -> Vec<u8> {
    let mut data = vec![0u8; (size * size * 4) as usize];
    let center = (size as f32 - 1.0) / 2.0;
    let radius = size as f32 / 2.0 - 1.0;
    let half_width = radius * 3f32.sqrt() / 2.0;

    for y in 0..size {
        for x in 0..size {
            let dx = (x as f32 - center).abs();
            let dy = (y as f32 - center).abs();
            if dx > half_width || dy > radius - dx / 3f32.sqrt() {
                continue;
            }

            let idx = ((y * size + x) * 4) as usize;
            data[idx..idx + 4].copy_from_slice(&HONEY);
        }
    }
    data
}

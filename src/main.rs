use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::info;

use kerfbox::{generate, init_logging, render, validate_inputs, CutConfig, RawBoxInputs};
use kerfbox_core::{parse_length, MeasurementSystem, INCH_TO_MM};
use kerfbox_geom::WallDecorInput;

const OUTPUT_PATH: &str = "output.svg";

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let raw = match std::env::args().nth(1) {
        // replay a saved parameter file
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("failed to read parameter file {}", path))?;
            serde_json::from_str::<RawBoxInputs>(&text)
                .with_context(|| format!("failed to parse parameter file {}", path))?
        }
        None => prompt_inputs()?,
    };

    let cfg = CutConfig::default();
    let params = validate_inputs(&raw, &cfg)?;
    let layout = generate(&params, &cfg)?;
    let svg = render(&layout, &cfg);

    fs::write(OUTPUT_PATH, svg).with_context(|| format!("failed to write {}", OUTPUT_PATH))?;
    info!(path = OUTPUT_PATH, panels = layout.panels.len(), "drawing written");
    println!("Wrote {}", OUTPUT_PATH);
    Ok(())
}

fn prompt_inputs() -> anyhow::Result<RawBoxInputs> {
    println!("Laser-cut box generator (kerf-aware, one 12x18in sheet)");

    let mut raw = RawBoxInputs {
        length_in: prompt_inches("Length (in)")?,
        width_in: prompt_inches("Width  (in)")?,
        height_in: prompt_inches("Height (in)")?,
        ..Default::default()
    };

    for (name, slot) in [
        ("front", &mut raw.front),
        ("back", &mut raw.back),
        ("left", &mut raw.left),
        ("right", &mut raw.right),
    ] {
        *slot = prompt_wall(name)?;
    }

    raw.num_dividers = prompt_u32("Dividers (0/1/2)")?;
    if raw.num_dividers >= 1 {
        raw.divider_pos1_in = Some(prompt_inches("Divider 1 position from left inner wall (in)")?);
    }
    if raw.num_dividers >= 2 {
        raw.divider_pos2_in = Some(prompt_inches("Divider 2 position from left inner wall (in)")?);
    }

    Ok(raw)
}

fn prompt_wall(name: &str) -> anyhow::Result<WallDecorInput> {
    let mut decor = WallDecorInput {
        text: prompt_bool(&format!("Text on the {} wall?", name))?,
        ..Default::default()
    };
    if decor.text {
        decor.text_content = prompt_line(&format!("{} wall text content", name))?;
    } else {
        decor.fractal = prompt_bool(&format!("Fractal on the {} wall?", name))?;
    }
    Ok(decor)
}

fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    print!("{}: ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_inches(prompt: &str) -> anyhow::Result<f64> {
    loop {
        let line = prompt_line(prompt)?;
        // decimal or fractional inches, e.g. "6", "5.5", "5 1/8"
        match parse_length(&line, MeasurementSystem::Imperial) {
            Ok(mm) if mm > 0.0 => return Ok(mm / INCH_TO_MM),
            Ok(_) => println!("Input must be a positive number. Please try again."),
            Err(e) => println!("{}. Please try again.", e),
        }
    }
}

fn prompt_bool(prompt: &str) -> anyhow::Result<bool> {
    loop {
        let line = prompt_line(&format!("{} (y/n)", prompt))?;
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" | "true" | "1" => return Ok(true),
            "n" | "no" | "false" | "0" => return Ok(false),
            _ => println!("Input must be y or n. Please try again."),
        }
    }
}

fn prompt_u32(prompt: &str) -> anyhow::Result<u32> {
    loop {
        let line = prompt_line(prompt)?;
        match line.trim().parse::<u32>() {
            Ok(n) => return Ok(n),
            Err(_) => println!("Input must be a whole number. Please try again."),
        }
    }
}

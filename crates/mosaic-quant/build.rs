use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

const TABLE_SIZE: usize = 4096;

/// IEC 61966-2-1 decode: encoded sRGB channel to linear light.
fn decode(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 encode: linear light to encoded sRGB channel.
fn encode(v: f64) -> f64 {
    if v <= 0.0031308 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

fn write_table(out: &mut impl Write, name: &str, f: fn(f64) -> f64) -> io::Result<()> {
    writeln!(out, "static {name}: [f32; TABLE_LEN] = [")?;
    for i in 0..TABLE_SIZE {
        let x = i as f64 / (TABLE_SIZE - 1) as f64;
        write!(out, "{:.9},", f(x) as f32)?;
        if i % 8 == 7 {
            writeln!(out)?;
        }
    }
    writeln!(out, "];")
}

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    let mut file = File::create(Path::new(&out_dir).join("gamma_tables.rs"))?;

    writeln!(file, "const TABLE_LEN: usize = {TABLE_SIZE};")?;

    write_table(&mut file, "DECODE", decode)?;
    write_table(&mut file, "ENCODE", encode)?;

    println!("cargo::rerun-if-changed=build.rs");
    Ok(())
}

#[macro_use]
extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate surface;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use clap::Arg;

use surface::errors::{Result, ResultExt};
use surface::math::SincField;
use surface::{Surface, SurfaceSpec};

fn start_app() -> Result<()> {
    env_logger::try_init()?;

    let matches = clap::App::new("Surface.")
        .version(crate_version!())
        .author("Marius C. <marius@reinfer.io>")
        .about("Renders sin(r)/r as an isometric SVG surface.")
        .arg(Arg::with_name("width")
            .long("width")
            .value_name("u32")
            .takes_value(true))
        .arg(Arg::with_name("height")
            .long("height")
            .value_name("u32")
            .takes_value(true))
        .arg(Arg::with_name("cells")
            .long("cells")
            .value_name("usize")
            .takes_value(true))
        .arg(Arg::with_name("xyrange")
            .long("xyrange")
            .value_name("f64")
            .takes_value(true))
        .arg(Arg::with_name("output")
            .long("output")
            .short("o")
            .value_name("path")
            .help("Write the SVG to a file instead of stdout.")
            .takes_value(true))
        .get_matches();

    let mut spec = SurfaceSpec::default();
    if matches.is_present("width") {
        spec.width = value_t!(matches, "width", u32)?;
    }
    if matches.is_present("height") {
        spec.height = value_t!(matches, "height", u32)?;
    }
    if matches.is_present("cells") {
        spec.cells = value_t!(matches, "cells", usize)?;
    }
    if matches.is_present("xyrange") {
        spec.xyrange = value_t!(matches, "xyrange", f64)?;
    }

    info!("Rendering surface with params {:?}", spec);
    let surface = Surface::new(spec, SincField)?;

    let num_polygons = match matches.value_of("output") {
        Some(path) => {
            let file = File::create(path)
                .chain_err(|| format!("Could not create output file {:?}", path))?;
            surface.write_svg(&mut BufWriter::new(file))?
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            surface.write_svg(&mut writer)?
        }
    };
    info!("Wrote {} polygons", num_polygons);
    Ok(())
}

fn main() {
    if let Err(err) = start_app() {
        let stderr = io::stderr();
        let mut stderr = stderr.lock();
        let _ = writeln!(stderr, "error: {}", err);
        for cause in err.iter().skip(1) {
            let _ = writeln!(stderr, "caused by: {}", cause);
        }
        process::exit(1);
    }
}

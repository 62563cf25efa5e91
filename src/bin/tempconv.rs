extern crate env_logger;
#[macro_use]
extern crate log;
extern crate surface;

use std::process;

use surface::errors::Result;
use surface::tempconv::{c_to_f, BOILING_C, FREEZING_C};

fn run() -> Result<()> {
    env_logger::try_init()?;

    let boiling_f = c_to_f(BOILING_C);
    debug!("Boiling point is {} ({})", BOILING_C, boiling_f);

    println!("{}", (BOILING_C - FREEZING_C).degrees());
    println!("{}", (boiling_f - c_to_f(FREEZING_C)).degrees());
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

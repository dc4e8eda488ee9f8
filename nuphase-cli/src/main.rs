use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use nuphase::prelude::*;
use nuphase_link_spidev::{Spidev, SpidevOption};
use tracing_subscriber::EnvFilter;

fn parse_variant(name: &str) -> Result<BoardVariant, String> {
    BoardVariant::from_name(name).ok_or_else(|| {
        format!(
            "unknown variant `{}`, expected one of: {}",
            name,
            BoardVariant::ALL.map(|v| v.name).join(", ")
        )
    })
}

/// Initializes the attached nuphase boards and prints their identity.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// A slave board is attached.
    #[arg(long)]
    dual_board: bool,
    /// Board revision.
    #[arg(long, default_value = "beacon", value_parser = parse_variant)]
    variant: BoardVariant,
    /// Maximum SPI clock speed in Hz.
    #[arg(long, default_value_t = 10_000_000)]
    clock_hz: u32,
    /// spidev device of the master board.
    #[arg(long, default_value = "/dev/spidev1.0")]
    master: PathBuf,
    /// spidev device of the slave board.
    #[arg(long, default_value = "/dev/spidev2.0")]
    slave: PathBuf,
    /// Sysfs GPIO enabling the bus drivers.
    #[arg(long, default_value_t = 60)]
    bus_enable_gpio: u32,
    /// Leave the bus enable GPIO untouched.
    #[arg(long)]
    no_bus_enable: bool,
    /// Run against emulated boards instead of spidev.
    #[arg(long)]
    emulate: bool,
    /// Log debug messages.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn controller_option(&self) -> ControllerOption {
        ControllerOption {
            variant: self.variant,
            dual_board: self.dual_board,
        }
    }

    fn spidev_option(&self) -> SpidevOption {
        SpidevOption {
            master_path: self.master.clone(),
            slave_path: self.slave.clone(),
            clock_hz: self.clock_hz,
            bus_enable_gpio: (!self.no_bus_enable).then_some(self.bus_enable_gpio),
            ..Default::default()
        }
    }
}

fn run<L: Link>(link: L, option: ControllerOption) -> Result<Vec<String>> {
    let mut cnt = Controller::open_with_option(link, option)?;
    let status = cnt.data_manager_status()?;
    tracing::debug!("Data manager status: {:?}", status);
    let lines = cnt.identify()?.iter().map(ToString::to_string).collect();
    cnt.close()?;
    Ok(lines)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    let option = args.controller_option();
    let lines = if args.emulate {
        run(Nop::new(), option)?
    } else {
        run(Spidev::new(args.spidev_option()), option)?
    };
    lines.iter().for_each(|line| println!("{line}"));
    Ok(())
}

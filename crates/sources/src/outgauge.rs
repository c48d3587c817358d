//! OutGauge UDP packet fields
//!
//! BeamNG.drive emits the same OutGauge packet, so both sources use this table.

use simtelemetry_types::ChannelOption;

pub static OUTGAUGE_OPTIONS: &[ChannelOption] = &[
    ChannelOption::new("Time", "Time"),
    ChannelOption::new("Car", "Car"),
    ChannelOption::new("Flags", "Flags"),
    ChannelOption::new("Gear", "Gear"),
    ChannelOption::new("Player ID", "PLID"),
    ChannelOption::new("Speed", "Speed"),
    ChannelOption::new("RPM", "RPM"),
    ChannelOption::new("Turbo", "Turbo"),
    ChannelOption::new("Engine temperature", "EngTemp"),
    ChannelOption::new("Fuel", "Fuel"),
    ChannelOption::new("Oil pressure", "OilPressure"),
    ChannelOption::new("Oil temperature", "OilTemp"),
    ChannelOption::new("Dash lights", "DashLights"),
    ChannelOption::new("Show lights", "ShowLights"),
    ChannelOption::new("Throttle", "Throttle"),
    ChannelOption::new("Brake", "Brake"),
    ChannelOption::new("Clutch", "Clutch"),
    ChannelOption::new("Display 1", "Display1"),
    ChannelOption::new("Display 2", "Display2"),
    ChannelOption::new("ID", "ID"),
];

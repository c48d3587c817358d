//! Assetto Corsa Competizione shared memory channels (physics and graphics pages)

use simtelemetry_types::ChannelOption;

pub static ACC_OPTIONS: &[ChannelOption] = &[
    ChannelOption::new("Speed (km/h)", "SpeedKmh"),
    ChannelOption::new("RPM", "Rpms"),
    ChannelOption::new("Gear", "Gear"),
    ChannelOption::new("Throttle", "Gas"),
    ChannelOption::new("Brake", "Brake"),
    ChannelOption::new("Clutch", "Clutch"),
    ChannelOption::new("Steer angle", "SteerAngle"),
    ChannelOption::new("Fuel", "Fuel"),
    ChannelOption::new("Fuel per lap", "FuelXLap"),
    ChannelOption::new("TC", "TC"),
    ChannelOption::new("ABS", "Abs"),
    ChannelOption::new("Turbo boost", "TurboBoost"),
    ChannelOption::new("Tyre core temp FL", "TyreCoreTemperatureFL"),
    ChannelOption::new("Tyre core temp FR", "TyreCoreTemperatureFR"),
    ChannelOption::new("Tyre core temp RL", "TyreCoreTemperatureRL"),
    ChannelOption::new("Tyre core temp RR", "TyreCoreTemperatureRR"),
    ChannelOption::new("Tyre pressure FL", "WheelsPressureFL"),
    ChannelOption::new("Tyre pressure FR", "WheelsPressureFR"),
    ChannelOption::new("Tyre pressure RL", "WheelsPressureRL"),
    ChannelOption::new("Tyre pressure RR", "WheelsPressureRR"),
    ChannelOption::new("Brake temp FL", "BrakeTempFL"),
    ChannelOption::new("Brake temp FR", "BrakeTempFR"),
    ChannelOption::new("Brake temp RL", "BrakeTempRL"),
    ChannelOption::new("Brake temp RR", "BrakeTempRR"),
    ChannelOption::new("G-force lateral", "AccGLat"),
    ChannelOption::new("G-force longitudinal", "AccGLon"),
    ChannelOption::new("Current lap time", "ICurrentTime"),
    ChannelOption::new("Last lap time", "ILastTime"),
    ChannelOption::new("Best lap time", "IBestTime"),
    ChannelOption::new("Delta", "IDeltaLapTime"),
    ChannelOption::new("Completed laps", "CompletedLaps"),
    ChannelOption::new("Position", "Position"),
    ChannelOption::new("Track position", "NormalizedCarPosition"),
];

//! DiRT Rally 2.0 UDP telemetry channels (extradata=3 packet)

use simtelemetry_types::ChannelOption;

pub static DIRT_RALLY_OPTIONS: &[ChannelOption] = &[
    ChannelOption::new("Time", "Time"),
    ChannelOption::new("Lap time", "LapTime"),
    ChannelOption::new("Lap distance", "LapDistance"),
    ChannelOption::new("Total distance", "TotalDistance"),
    ChannelOption::new("Position X", "X"),
    ChannelOption::new("Position Y", "Y"),
    ChannelOption::new("Position Z", "Z"),
    ChannelOption::new("Speed", "Speed"),
    ChannelOption::new("Velocity X", "VelocityX"),
    ChannelOption::new("Velocity Y", "VelocityY"),
    ChannelOption::new("Velocity Z", "VelocityZ"),
    ChannelOption::new("Suspension position RL", "SuspensionPositionRL"),
    ChannelOption::new("Suspension position RR", "SuspensionPositionRR"),
    ChannelOption::new("Suspension position FL", "SuspensionPositionFL"),
    ChannelOption::new("Suspension position FR", "SuspensionPositionFR"),
    ChannelOption::new("Wheel speed RL", "WheelSpeedRL"),
    ChannelOption::new("Wheel speed RR", "WheelSpeedRR"),
    ChannelOption::new("Wheel speed FL", "WheelSpeedFL"),
    ChannelOption::new("Wheel speed FR", "WheelSpeedFR"),
    ChannelOption::new("Throttle", "Throttle"),
    ChannelOption::new("Steer", "Steer"),
    ChannelOption::new("Brake", "Brake"),
    ChannelOption::new("Clutch", "Clutch"),
    ChannelOption::new("Gear", "Gear"),
    ChannelOption::new("G-force lateral", "GForceLat"),
    ChannelOption::new("G-force longitudinal", "GForceLon"),
    ChannelOption::new("Lap", "Lap"),
    ChannelOption::new("RPM", "RPM"),
    ChannelOption::new("Brake temperature RL", "BrakeTempRL"),
    ChannelOption::new("Brake temperature RR", "BrakeTempRR"),
    ChannelOption::new("Brake temperature FL", "BrakeTempFL"),
    ChannelOption::new("Brake temperature FR", "BrakeTempFR"),
    ChannelOption::new("Total laps", "TotalLaps"),
    ChannelOption::new("Track length", "TrackLength"),
    ChannelOption::new("Max RPM", "MaxRPM"),
    ChannelOption::new("Idle RPM", "IdleRPM"),
    ChannelOption::new("Max gears", "MaxGears"),
];

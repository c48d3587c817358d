//! Forza "Data Out" UDP telemetry channels
//!
//! Horizon 5 sends the "dash" packet layout. Motorsport (2023) extends the
//! same layout with tire wear and track ordinal, so it gets its own table.

use simtelemetry_types::ChannelOption;

pub static FORZA_HORIZON_OPTIONS: &[ChannelOption] = &[
    ChannelOption::new("Race on", "IsRaceOn"),
    ChannelOption::new("Timestamp (ms)", "TimestampMS"),
    ChannelOption::new("Engine max RPM", "EngineMaxRpm"),
    ChannelOption::new("Engine idle RPM", "EngineIdleRpm"),
    ChannelOption::new("Engine RPM", "CurrentEngineRpm"),
    ChannelOption::new("Acceleration X", "AccelerationX"),
    ChannelOption::new("Acceleration Y", "AccelerationY"),
    ChannelOption::new("Acceleration Z", "AccelerationZ"),
    ChannelOption::new("Velocity X", "VelocityX"),
    ChannelOption::new("Velocity Y", "VelocityY"),
    ChannelOption::new("Velocity Z", "VelocityZ"),
    ChannelOption::new("Yaw", "Yaw"),
    ChannelOption::new("Pitch", "Pitch"),
    ChannelOption::new("Roll", "Roll"),
    ChannelOption::new("Speed", "Speed"),
    ChannelOption::new("Power", "Power"),
    ChannelOption::new("Torque", "Torque"),
    ChannelOption::new("Tire temp FL", "TireTempFrontLeft"),
    ChannelOption::new("Tire temp FR", "TireTempFrontRight"),
    ChannelOption::new("Tire temp RL", "TireTempRearLeft"),
    ChannelOption::new("Tire temp RR", "TireTempRearRight"),
    ChannelOption::new("Boost", "Boost"),
    ChannelOption::new("Fuel", "Fuel"),
    ChannelOption::new("Distance traveled", "DistanceTraveled"),
    ChannelOption::new("Best lap", "BestLap"),
    ChannelOption::new("Last lap", "LastLap"),
    ChannelOption::new("Current lap", "CurrentLap"),
    ChannelOption::new("Current race time", "CurrentRaceTime"),
    ChannelOption::new("Lap number", "LapNumber"),
    ChannelOption::new("Race position", "RacePosition"),
    ChannelOption::new("Throttle", "Accel"),
    ChannelOption::new("Brake", "Brake"),
    ChannelOption::new("Clutch", "Clutch"),
    ChannelOption::new("Handbrake", "HandBrake"),
    ChannelOption::new("Gear", "Gear"),
    ChannelOption::new("Steer", "Steer"),
    ChannelOption::new("Car ordinal", "CarOrdinal"),
    ChannelOption::new("Car class", "CarClass"),
    ChannelOption::new("Performance index", "CarPerformanceIndex"),
    ChannelOption::new("Drivetrain", "DrivetrainType"),
    ChannelOption::new("Cylinders", "NumCylinders"),
];

pub static MOTORSPORT_2023_OPTIONS: &[ChannelOption] = &[
    ChannelOption::new("Race on", "IsRaceOn"),
    ChannelOption::new("Timestamp (ms)", "TimestampMS"),
    ChannelOption::new("Engine max RPM", "EngineMaxRpm"),
    ChannelOption::new("Engine idle RPM", "EngineIdleRpm"),
    ChannelOption::new("Engine RPM", "CurrentEngineRpm"),
    ChannelOption::new("Acceleration X", "AccelerationX"),
    ChannelOption::new("Acceleration Y", "AccelerationY"),
    ChannelOption::new("Acceleration Z", "AccelerationZ"),
    ChannelOption::new("Velocity X", "VelocityX"),
    ChannelOption::new("Velocity Y", "VelocityY"),
    ChannelOption::new("Velocity Z", "VelocityZ"),
    ChannelOption::new("Speed", "Speed"),
    ChannelOption::new("Power", "Power"),
    ChannelOption::new("Torque", "Torque"),
    ChannelOption::new("Tire temp FL", "TireTempFrontLeft"),
    ChannelOption::new("Tire temp FR", "TireTempFrontRight"),
    ChannelOption::new("Tire temp RL", "TireTempRearLeft"),
    ChannelOption::new("Tire temp RR", "TireTempRearRight"),
    ChannelOption::new("Tire wear FL", "TireWearFrontLeft"),
    ChannelOption::new("Tire wear FR", "TireWearFrontRight"),
    ChannelOption::new("Tire wear RL", "TireWearRearLeft"),
    ChannelOption::new("Tire wear RR", "TireWearRearRight"),
    ChannelOption::new("Boost", "Boost"),
    ChannelOption::new("Fuel", "Fuel"),
    ChannelOption::new("Distance traveled", "DistanceTraveled"),
    ChannelOption::new("Best lap", "BestLap"),
    ChannelOption::new("Last lap", "LastLap"),
    ChannelOption::new("Current lap", "CurrentLap"),
    ChannelOption::new("Current race time", "CurrentRaceTime"),
    ChannelOption::new("Lap number", "LapNumber"),
    ChannelOption::new("Race position", "RacePosition"),
    ChannelOption::new("Throttle", "Accel"),
    ChannelOption::new("Brake", "Brake"),
    ChannelOption::new("Clutch", "Clutch"),
    ChannelOption::new("Handbrake", "HandBrake"),
    ChannelOption::new("Gear", "Gear"),
    ChannelOption::new("Steer", "Steer"),
    ChannelOption::new("Car ordinal", "CarOrdinal"),
    ChannelOption::new("Car class", "CarClass"),
    ChannelOption::new("Performance index", "CarPerformanceIndex"),
    ChannelOption::new("Track ordinal", "TrackOrdinal"),
];

//! iRacing shared memory telemetry variables

use simtelemetry_types::ChannelOption;

pub static IRACING_OPTIONS: &[ChannelOption] = &[
    ChannelOption::new("Session time", "SessionTime"),
    ChannelOption::new("Speed", "Speed"),
    ChannelOption::new("RPM", "RPM"),
    ChannelOption::new("Gear", "Gear"),
    ChannelOption::new("Throttle", "Throttle"),
    ChannelOption::new("Brake", "Brake"),
    ChannelOption::new("Clutch", "Clutch"),
    ChannelOption::new("Steering wheel angle", "SteeringWheelAngle"),
    ChannelOption::new("Fuel level", "FuelLevel"),
    ChannelOption::new("Fuel level (%)", "FuelLevelPct"),
    ChannelOption::new("Fuel use per hour", "FuelUsePerHour"),
    ChannelOption::new("Lap", "Lap"),
    ChannelOption::new("Lap distance (%)", "LapDistPct"),
    ChannelOption::new("Current lap time", "LapCurrentLapTime"),
    ChannelOption::new("Last lap time", "LapLastLapTime"),
    ChannelOption::new("Best lap time", "LapBestLapTime"),
    ChannelOption::new("Delta to best lap", "LapDeltaToBestLap"),
    ChannelOption::new("Lateral acceleration", "LatAccel"),
    ChannelOption::new("Longitudinal acceleration", "LongAccel"),
    ChannelOption::new("Vertical acceleration", "VertAccel"),
    ChannelOption::new("Yaw rate", "YawRate"),
    ChannelOption::new("Oil temperature", "OilTemp"),
    ChannelOption::new("Oil pressure", "OilPress"),
    ChannelOption::new("Water temperature", "WaterTemp"),
    ChannelOption::new("Voltage", "Voltage"),
    ChannelOption::new("Track temperature", "TrackTemp"),
    ChannelOption::new("Position", "PlayerCarPosition"),
    ChannelOption::new("Incidents", "PlayerCarMyIncidentCount"),
];

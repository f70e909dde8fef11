// Front-end wiring constants

// Canvas the animation mounts on by default
pub const CANVAS_ID: &str = "spiderWeb";

// Prefix of canvas attributes read into `FieldConfig` overrides
pub const DATA_ATTR_PREFIX: &str = "data-";

// How often the frame loop reports its rate (seconds)
pub const FPS_LOG_INTERVAL_SEC: f32 = 5.0;

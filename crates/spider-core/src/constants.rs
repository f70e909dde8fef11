// Default tuning for the particle field. `FieldConfig::default()` reads these.

// Population: one particle per this many square surface pixels
pub const AREA_PER_PARTICLE: f32 = 7500.0;

// Connection threshold, compared against *squared* distance (~141.4 px)
pub const CONNECT_DISTANCE_SQ: f32 = 20_000.0;
pub const LINE_WIDTH: f32 = 1.0;

// Pointer interaction radius in surface pixels
pub const POINTER_RADIUS: f32 = 150.0;

// Particle spawn ranges: value = min + rand * span
pub const MIN_SIZE: f32 = 1.0;
pub const SIZE_SPAN: f32 = 5.0;
pub const MIN_DENSITY: f32 = 1.0;
pub const DENSITY_SPAN: f32 = 100.0;
pub const MIN_ALPHA: f32 = 0.75;

// Full velocity span per axis; components land in [-MAX_SPEED/2, MAX_SPEED/2)
pub const MAX_SPEED: f32 = 0.25;

// Gray used for both dots and lines
pub const PARTICLE_RGB: [u8; 3] = [150, 150, 150];

// `ConnectionStrategy::Auto` switches to the bucket grid above this count
pub const GRID_AUTO_THRESHOLD: usize = 600;

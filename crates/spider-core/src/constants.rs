// Default tuning for the web effect. Every value here is overridable through
// `SpiderConfig`; these are the values the component ships with.

// Web simulation
pub const DEFAULT_POINT_COUNT: usize = 100;
pub const MAX_POINT_COUNT: usize = 10_000; // beyond this a frame cannot finish in time
pub const DEFAULT_SPEED_FACTOR: f32 = 0.03; // velocity added per frame toward the cursor
pub const DEFAULT_VELOCITY_DAMPING: f32 = 0.92; // applied after force accumulation
pub const DEFAULT_CONNECT_DISTANCE: f32 = 100.0; // px, strict upper bound for a line

// Points closer to the cursor than this receive no attraction force
pub const ATTRACTION_EPSILON: f32 = 1e-4;

// Above this many points connections are found through the spatial grid
pub const BRUTE_FORCE_MAX_POINTS: usize = 256;

// Cursor spring (unit mass)
pub const DEFAULT_SPRING_STIFFNESS: f32 = 80.0;
pub const DEFAULT_SPRING_DAMPING: f32 = 10.0;
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_FRAME_SEC: f32 = 0.1; // longer gaps (hidden tab) are clamped
pub const SPRING_REST_DELTA: f32 = 0.01; // px
pub const SPRING_REST_SPEED: f32 = 0.01; // px per second

// Orbiting glyph
pub const DEFAULT_ORBIT_STEP_RAD: f64 = 0.1; // per timer tick
pub const DEFAULT_ORBIT_PERIOD_MS: u32 = 16;
pub const DEFAULT_ORBIT_RADIUS: f32 = 40.0; // before the first pointer move
pub const DEFAULT_ORBIT_RADIUS_MIN: f32 = 20.0;
pub const DEFAULT_ORBIT_RADIUS_MAX: f32 = 80.0;
pub const DEFAULT_RADIUS_SPEED_MULTIPLIER: f32 = 4.0;

// Drawing
pub const DEFAULT_POINT_RADIUS: f32 = 2.0;
pub const DEFAULT_LINE_WIDTH: f32 = 0.5;
pub const DEFAULT_POINT_COLOR: &str = "white";
pub const DEFAULT_LINE_COLOR: &str = "white";
pub const DEFAULT_GLYPH: &str = "🐜";

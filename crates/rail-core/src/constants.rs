// Tuned layout and interaction constants shared by the web front-end and the sim.
//
// The reveal bias and the stack early-offset/speed pair are hand-tuned values;
// they are kept here verbatim rather than derived.

// Proximity scaling
pub const MIN_SCALE: f64 = 0.90; // element at or beyond half a viewport from center
pub const MAX_SCALE: f64 = 1.12; // element exactly centered
pub const PROXIMITY_ROOT_MARGIN: f64 = 0.40; // horizontal, fraction of viewport width

// Word reveal
pub const REVEAL_BIAS: f64 = 0.05; // added after the distance falloff, gives a non-zero floor
pub const REVEAL_MIN_THRESHOLD_PX: f64 = 160.0;
pub const REVEAL_MIN_TOLERANCE_PX: f64 = 12.0;
pub const REVEAL_TOLERANCE_RATIO: f64 = 0.04; // of heading width

// Services stack
pub const STACK_EARLY_OFFSET_PX: f64 = 140.0;
pub const STACK_SPEED: f64 = 1.18;
pub const STACK_ROW_HEIGHT_PX: f64 = 132.0;
pub const STACK_GAP_PX: f64 = 20.0;
pub const STACK_SAFETY_MARGIN_PX: f64 = 4.0;
pub const STACK_BOTTOM_PAD_PX: f64 = 68.0;
pub const STACK_START_OFFSET_PX: f64 = 60.0; // above the container top, past one row
pub const STACK_SLIDE_X_PX: f64 = 28.0; // cards slide in from the left by this much

// Case-card tilt
pub const TILT_MAX_DEG: f64 = 5.0;
pub const TILT_SCALE: f64 = 1.02;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;

// Gestures
pub const WHEEL_LINE_PX: f64 = 16.0; // DOM_DELTA_LINE to pixels
pub const TOUCH_SCROLL_GAIN: f64 = 2.2;
pub const TOUCH_DEAD_ZONE_PX: f64 = 10.0;
pub const SWIPE_MIN_DISTANCE_PX: f64 = 40.0;
pub const SWIPE_MAX_DURATION_MS: u64 = 600;

// Timers
pub const TOUCH_HINT_SHOW_MS: i32 = 1200;
pub const TOUCH_HINT_HIDE_MS: i32 = 6200; // from load, not from showing
pub const LOADER_START_DELAY_MS: i32 = 900;
pub const LOADER_SLIDE_DELAY_MS: i32 = 700; // after the logo settles
pub const LOADER_FALLBACK_MS: i32 = 3900; // after the start delay
pub const CASE_HOVER_TOUCH_CLEAR_MS: i32 = 1800;
pub const RESIZE_DEBOUNCE_MS: i32 = 250;

// Layout switch
pub const MOBILE_BREAKPOINT_PX: f64 = 900.0;

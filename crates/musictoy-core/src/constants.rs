// Grid and timing constants shared by the core and the web front-end.

// Grid cell geometry (rectangular layout, canvas pixels)
pub const SQR_WIDTH: f32 = 20.0;
pub const SQR_HEIGHT: f32 = 20.0;
pub const SQR_OUTER_TRIM: f32 = 2.0; // coloured border inset
pub const SQR_INNER_TRIM: f32 = 4.0; // black fill inset for "off" cells

// Sequence length
pub const NUM_COLS: usize = 32;
pub const STEPS_PER_BEAT: usize = 4;
pub const NUM_BEATS: usize = NUM_COLS / STEPS_PER_BEAT;

// Radial layout, proportional to the ellipse axes
pub const ELLIPSE_BOTTOM: f32 = 0.4; // inner ring
pub const ELLIPSE_TOP: f32 = 0.9; // outer ring
pub const ELLIPSE_AXIS_DIVISOR: f32 = 2.25; // canvas size / divisor = ellipse axes

// Hit testing and stroke width shared with drawing
pub const STROKE_WIDTH: f32 = 2.0;

// Transport buttons along the bottom edge
pub const TRANSPORT_WIDTH: f32 = 60.0;
pub const TRANSPORT_HEIGHT: f32 = 25.0;
pub const TRANSPORT_BOTTOM_MARGIN: f32 = 30.0;
pub const TRANSPORT_GAP: f32 = 20.0;
pub const TRANSPORT_FONT: &str = "14pt Arial";

// Hash codec: 4 bits per printable character starting at 'a'
pub const HASH_BASE: u8 = b'a';
pub const HASH_BITS_PER_CHAR: usize = 4;

// Default tempo
pub const DEFAULT_BPM: f64 = 137.0;
pub const DEFAULT_BEATS_PER_BAR: u32 = 4;
pub const DEFAULT_NOTE_VAL: u32 = 4;

// DOM wiring and frame-loop tuning for the web front-end

// Hosts on which the debug overlay is allowed
pub const DEV_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

// Clef icon elements; ids double as the icon names understood by the core
pub const CLEF_ICON_IDS: [&str; 2] = ["treble-clef", "bass-clef"];

// Scrub bar
pub const SCRUB_CELL_CLASS: &str = "scrub-measure";
pub const SCRUB_CURRENT_CLASS: &str = "scrub-measure current";
pub const SCRUB_PX_PER_SEC_DEFAULT: f64 = 40.0;

// Exponential smoothing factor for the measured frame rate
pub const FPS_SMOOTHING: f64 = 0.1;

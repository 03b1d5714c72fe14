//! Well-known resource prefixes, event names and attribute suffixes
//!
//! The suffix strings are the de facto wire format: REST serialization and
//! persistence depend on them staying unchanged.

// ─────────────────────────────────────────────────────────────────────────────
// Resource Prefixes
// ─────────────────────────────────────────────────────────────────────────────

pub const SENSORS: &str = "/sensors";
pub const LIGHTS: &str = "/lights";
pub const GROUPS: &str = "/groups";
pub const CONFIG: &str = "/config";

/// All resource prefixes
pub const PREFIXES: [&str; 4] = [SENSORS, LIGHTS, GROUPS, CONFIG];

/// Resolve a prefix string to its static counterpart
pub fn prefix_from_str(prefix: &str) -> Option<&'static str> {
    PREFIXES.into_iter().find(|p| *p == prefix)
}

// ─────────────────────────────────────────────────────────────────────────────
// Events
// ─────────────────────────────────────────────────────────────────────────────

pub const EVENT_ADDED: &str = "event/added";
pub const EVENT_DELETED: &str = "event/deleted";
pub const EVENT_VALID_GROUP: &str = "event/validgroup";
pub const EVENT_CHECK_GROUP_ANY_ON: &str = "event/checkgroupanyon";

/// Placeholder for a suffix that could not be resolved
pub const INVALID_SUFFIX: &str = "invalid/suffix";

// ─────────────────────────────────────────────────────────────────────────────
// Identity
// ─────────────────────────────────────────────────────────────────────────────

pub const ATTR_NAME: &str = "attr/name";
pub const ATTR_MANUFACTURER_NAME: &str = "attr/manufacturername";
pub const ATTR_MODEL_ID: &str = "attr/modelid";
pub const ATTR_TYPE: &str = "attr/type";
pub const ATTR_CLASS: &str = "attr/class";
pub const ATTR_UNIQUE_ID: &str = "attr/uniqueid";
pub const ATTR_SW_VERSION: &str = "attr/swversion";

pub const ACTION_SCENE: &str = "action/scene";

// ─────────────────────────────────────────────────────────────────────────────
// State
// ─────────────────────────────────────────────────────────────────────────────

pub const STATE_ALARM: &str = "state/alarm";
pub const STATE_ALERT: &str = "state/alert";
pub const STATE_ALL_ON: &str = "state/all_on";
pub const STATE_ANY_ON: &str = "state/any_on";
pub const STATE_BRI: &str = "state/bri";
pub const STATE_BUTTON_EVENT: &str = "state/buttonevent";
pub const STATE_CARBON_MONOXIDE: &str = "state/carbonmonoxide";
pub const STATE_COLOR_MODE: &str = "state/colormode";
pub const STATE_CONSUMPTION: &str = "state/consumption";
pub const STATE_CURRENT: &str = "state/current";
pub const STATE_CT: &str = "state/ct";
pub const STATE_DARK: &str = "state/dark";
pub const STATE_DAYLIGHT: &str = "state/daylight";
pub const STATE_EFFECT: &str = "state/effect";
pub const STATE_FIRE: &str = "state/fire";
pub const STATE_FLAG: &str = "state/flag";
pub const STATE_HUE: &str = "state/hue";
pub const STATE_HUMIDITY: &str = "state/humidity";
pub const STATE_LAST_UPDATED: &str = "state/lastupdated";
pub const STATE_LIGHT_LEVEL: &str = "state/lightlevel";
pub const STATE_LOW_BATTERY: &str = "state/lowbattery";
pub const STATE_LUX: &str = "state/lux";
pub const STATE_ON: &str = "state/on";
pub const STATE_OPEN: &str = "state/open";
pub const STATE_ORIENTATION_X: &str = "state/orientation_x";
pub const STATE_ORIENTATION_Y: &str = "state/orientation_y";
pub const STATE_ORIENTATION_Z: &str = "state/orientation_z";
pub const STATE_PRESENCE: &str = "state/presence";
pub const STATE_PRESSURE: &str = "state/pressure";
pub const STATE_POWER: &str = "state/power";
pub const STATE_REACHABLE: &str = "state/reachable";
pub const STATE_SAT: &str = "state/sat";
pub const STATE_SPEED: &str = "state/speed";
pub const STATE_STATUS: &str = "state/status";
pub const STATE_TAMPERED: &str = "state/tampered";
pub const STATE_TEMPERATURE: &str = "state/temperature";
pub const STATE_TILT_ANGLE: &str = "state/tiltangle";
pub const STATE_VALVE: &str = "state/valve";
pub const STATE_VIBRATION: &str = "state/vibration";
pub const STATE_VIBRATION_STRENGTH: &str = "state/vibrationstrength";
pub const STATE_VOLTAGE: &str = "state/voltage";
pub const STATE_WATER: &str = "state/water";
pub const STATE_X: &str = "state/x";
pub const STATE_Y: &str = "state/y";

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

pub const CONFIG_ALERT: &str = "config/alert";
pub const CONFIG_BATTERY: &str = "config/battery";
pub const CONFIG_COLOR_CAPABILITIES: &str = "config/colorcapabilities";
pub const CONFIG_CT_MIN: &str = "config/ctmin";
pub const CONFIG_CT_MAX: &str = "config/ctmax";
pub const CONFIG_CONFIGURED: &str = "config/configured";
pub const CONFIG_DELAY: &str = "config/delay";
pub const CONFIG_DISPLAY_FLIPPED: &str = "config/displayflipped";
pub const CONFIG_DURATION: &str = "config/duration";
pub const CONFIG_GROUP: &str = "config/group";
pub const CONFIG_HEAT_SETPOINT: &str = "config/heatsetpoint";
pub const CONFIG_HOST_FLAGS: &str = "config/hostflags";
pub const CONFIG_ID: &str = "config/id";
pub const CONFIG_LAT: &str = "config/lat";
pub const CONFIG_LED_INDICATION: &str = "config/ledindication";
pub const CONFIG_LOCAL_TIME: &str = "config/localtime";
pub const CONFIG_LOCKED: &str = "config/locked";
pub const CONFIG_LONG: &str = "config/long";
pub const CONFIG_LEVEL_MIN: &str = "config/levelmin";
pub const CONFIG_MODE: &str = "config/mode";
pub const CONFIG_OFFSET: &str = "config/offset";
pub const CONFIG_ON: &str = "config/on";
pub const CONFIG_PENDING: &str = "config/pending";
pub const CONFIG_POWERUP: &str = "config/powerup";
pub const CONFIG_POWER_ON_CT: &str = "config/poweronct";
pub const CONFIG_POWER_ON_LEVEL: &str = "config/poweronlevel";
pub const CONFIG_REACHABLE: &str = "config/reachable";
pub const CONFIG_SCHEDULER: &str = "config/scheduler";
pub const CONFIG_SCHEDULER_ON: &str = "config/scheduleron";
pub const CONFIG_SENSITIVITY: &str = "config/sensitivity";
pub const CONFIG_SENSITIVITY_MAX: &str = "config/sensitivitymax";
pub const CONFIG_SUNRISE_OFFSET: &str = "config/sunriseoffset";
pub const CONFIG_SUNSET_OFFSET: &str = "config/sunsetoffset";
pub const CONFIG_TEMPERATURE: &str = "config/temperature";
pub const CONFIG_THOLD_DARK: &str = "config/tholddark";
pub const CONFIG_THOLD_OFFSET: &str = "config/tholdoffset";
pub const CONFIG_URL: &str = "config/url";
pub const CONFIG_USERTEST: &str = "config/usertest";
pub const CONFIG_WINDOW_COVERING_TYPE: &str = "config/windowcoveringtype";

// Ubisys J1 window covering controller
pub const CONFIG_UBISYS_J1_MODE: &str = "config/ubisys_j1_mode";
pub const CONFIG_UBISYS_J1_WINDOW_COVERING_TYPE: &str = "config/ubisys_j1_windowcoveringtype";
pub const CONFIG_UBISYS_J1_CONFIGURATION_AND_STATUS: &str =
    "config/ubisys_j1_configurationandstatus";
pub const CONFIG_UBISYS_J1_INSTALLED_OPEN_LIMIT_LIFT: &str =
    "config/ubisys_j1_installedopenlimitlift";
pub const CONFIG_UBISYS_J1_INSTALLED_CLOSED_LIMIT_LIFT: &str =
    "config/ubisys_j1_installedclosedlimitlift";
pub const CONFIG_UBISYS_J1_INSTALLED_OPEN_LIMIT_TILT: &str =
    "config/ubisys_j1_installedopenlimittilt";
pub const CONFIG_UBISYS_J1_INSTALLED_CLOSED_LIMIT_TILT: &str =
    "config/ubisys_j1_installedclosedlimittilt";
pub const CONFIG_UBISYS_J1_TURNAROUND_GUARD_TIME: &str = "config/ubisys_j1_turnaroundguardtime";
pub const CONFIG_UBISYS_J1_LIFT_TO_TILT_TRANSITION_STEPS: &str =
    "config/ubisys_j1_lifttotilttransitionsteps";
pub const CONFIG_UBISYS_J1_TOTAL_STEPS: &str = "config/ubisys_j1_totalsteps";
pub const CONFIG_UBISYS_J1_LIFT_TO_TILT_TRANSITION_STEPS2: &str =
    "config/ubisys_j1_lifttotilttransitionsteps2";
pub const CONFIG_UBISYS_J1_TOTAL_STEPS2: &str = "config/ubisys_j1_totalsteps2";
pub const CONFIG_UBISYS_J1_ADDITIONAL_STEPS: &str = "config/ubisys_j1_additionalsteps";
pub const CONFIG_UBISYS_J1_INACTIVE_POWER_THRESHOLD: &str =
    "config/ubisys_j1_inactivepowerthreshold";
pub const CONFIG_UBISYS_J1_STARTUP_STEPS: &str = "config/ubisys_j1_startupsteps";

//! analysis::tables
//!
//! Static classification tables.
//!
//! The tables are plain data: the classifiers take them (compiled into a
//! [`RuleSet`](super::matcher::RuleSet)) as explicit parameters, so a table
//! can be swapped or extended without touching the matching code.
//!
//! Patterns are matched case-insensitively against lower-cased text.
//! Within one rule the first matching pattern decides membership; the
//! order of rules only fixes the order buckets are reported in.
//!
//! Some patterns are intentionally broad (`\blive\b` for Mentra Live,
//! `\brecord\w*\b` for the camera) and match unrelated prose. They are kept
//! as-is so counts stay comparable across runs.

use super::testability::TestabilityTag;

/// A tag bound to an ordered list of regular expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    pub tag: &'static str,
    pub patterns: &'static [&'static str],
}

/// Bucket for issues matching no topical category.
pub const OTHER_TAG: &str = "other";

/// Bucket for issues matching no hardware model.
pub const UNSPECIFIED_TAG: &str = "unspecified";

/// Topical bug categories, in report order.
pub const TOPICAL_CATEGORIES: &[RuleSpec] = &[
    RuleSpec {
        tag: "bluetooth_pairing",
        patterns: &[
            r"\bpair\w*\b",
            r"\bbluetooth\b",
            r"\bble\b.*\bconnect\b",
            r"\bdisconnect\b",
            r"\bglasses\b.*\bpair\b",
            r"\bpairing\b",
        ],
    },
    RuleSpec {
        tag: "translation_language",
        patterns: &[
            r"\btranslat\w+\b",
            r"\blanguage\b",
            r"\bwelsh\b",
            r"\bchinese\b",
            r"\benglish\b",
            r"\bhang\w*\b.*\btranslat\w+\b",
            r"\bspeech\b.*\bprocess\w*\b",
        ],
    },
    RuleSpec {
        tag: "streaming_media",
        patterns: &[
            r"\bstream\w*\b",
            r"\brtmp\b",
            r"\blive\b.*\bstream\b",
            r"\bvideo\b.*\bstream\b",
            r"\brecord\w*\b.*\bstream\b",
            r"\bmedia\b.*\bstream\b",
        ],
    },
    RuleSpec {
        tag: "permissions_android",
        patterns: &[
            r"\bpermission\w*\b",
            r"\bandroid\b.*\bpermission\b",
            r"\bmicrophone\b.*\bpermission\b",
            r"\blocation\b.*\bpermission\b",
            r"\bnotification\w*\b.*\bpermission\b",
        ],
    },
    RuleSpec {
        tag: "ios_specific",
        patterns: &[
            r"\bios\b",
            r"\biphone\b",
            r"\bmic\b.*\bios\b",
            r"\bapple\b",
            r"\bios\b.*\bfail\w*\b",
            r"\bios\b.*\bcrash\b",
        ],
    },
    RuleSpec {
        tag: "app_crashes",
        patterns: &[
            r"\bcrash\w*\b",
            r"\bexception\b",
            r"\bfail\w*\b.*\bapp\b",
            r"\bclose\w*\b.*\bapp\b",
            r"\bhang\w*\b",
            r"\bfreez\w*\b",
            r"\bsoftexception\b",
        ],
    },
    RuleSpec {
        tag: "ui_navigation",
        patterns: &[
            r"\bpage\b",
            r"\bnavigat\w*\b",
            r"\bui\b",
            r"\bmenu\b",
            r"\bbutton\b",
            r"\bsettings\b.*\breset\b",
            r"\bscreen\b.*\bblank\b",
        ],
    },
    RuleSpec {
        tag: "cloud_sync",
        patterns: &[
            r"\bcloud\b",
            r"\bsync\b",
            r"\bserver\b",
            r"\bapi\b",
            r"\bwebsocket\b",
            r"\bdatabase\b",
            r"\bclient\b.*\bserver\b",
        ],
    },
    RuleSpec {
        tag: "hardware_integration",
        patterns: &[
            r"\bhardware\b",
            r"\bsensor\w*\b",
            r"\bcalibrat\w*\b",
            r"\bfirmware\b",
            r"\bglasses\b.*\bstop\b",
        ],
    },
    RuleSpec {
        tag: "performance",
        patterns: &[
            r"\bslow\b",
            r"\bperformance\b",
            r"\btimeout\b",
            r"\bmemory\b",
            r"\bbattery\b",
            r"\blag\w*\b",
            r"\bunreliable\b",
        ],
    },
    RuleSpec {
        tag: "wifi_connectivity",
        patterns: &[
            r"\bwifi\b",
            r"\bhotspot\b",
            r"\bpassword\b.*\bwifi\b",
            r"\bnetwork\b.*\bconnect\b",
            r"\bwifi\b.*\bconnect\b",
        ],
    },
    RuleSpec {
        tag: "developer_console",
        patterns: &[
            r"\bdev\b.*\bconsole\b",
            r"\bupload\b.*\bimage\b",
            r"\bicon\b.*\bupload\b",
            r"\bdeveloper\b.*\bconsole\b",
            r"\bauth\w*\b.*\bconsole\b",
        ],
    },
    RuleSpec {
        tag: "error_handling",
        patterns: &[
            r"\berror\b.*\bmessage\b",
            r"\bfeedback\b.*\bmissing\b",
            r"\bretry\b.*\binfinite\b",
            r"\bwebview\b.*\berror\b",
            r"\berror\b.*\bhandling\b",
        ],
    },
    RuleSpec {
        tag: "audio_processing",
        patterns: &[
            r"\baudio\b",
            r"\bmicrophone\b",
            r"\bmic\b",
            r"\bspeech\b",
            r"\bplayback\b",
            r"\bsound\b",
            r"\bvoice\b",
        ],
    },
    RuleSpec {
        tag: "gallery_media",
        patterns: &[
            r"\bgallery\b",
            r"\bmedia\b.*\btransfer\b",
            r"\bphoto\b.*\bsync\b",
            r"\bgallery\b.*\bsync\b",
            r"\bmedia\b.*\bgallery\b",
        ],
    },
    RuleSpec {
        tag: "state_synchronization",
        patterns: &[
            r"\bstate\b.*\bsync\b",
            r"\bclient\b.*\bcloud\b.*\bstate\b",
            r"\bapp\b.*\bstate\b",
            r"\bboot\b.*\bscreen\b.*\bdeleted\b",
        ],
    },
    RuleSpec {
        tag: "ble_communication",
        patterns: &[
            r"\bble\b",
            r"\bphoto\b.*\brequest\b",
            r"\back\b.*\bissue\b",
            r"\bble\b.*\btransfer\b",
            r"\bble\b.*\bcrash\b",
        ],
    },
    RuleSpec {
        tag: "camera_functionality",
        patterns: &[
            r"\bcamera\b",
            r"\brotation\b.*\bhardcoded\b",
            r"\bphoto\b.*\btaking\b",
            r"\brecord\w*\b",
            r"\bcamera\b.*\brotation\b",
        ],
    },
];

/// Hardware models, in report order.
pub const HARDWARE_MODELS: &[RuleSpec] = &[
    RuleSpec {
        tag: "even_realities_g1",
        patterns: &[r"\bg1\b", r"\beven\b.*\brealities\b", r"\bg1\b.*\bglasses\b"],
    },
    RuleSpec {
        tag: "mentra_live",
        patterns: &[r"\bmentra\b.*\blive\b", r"\blive\b"],
    },
    RuleSpec {
        tag: "mentra_mach1",
        patterns: &[r"\bmach\s*1\b", r"\bmentra\b.*\bmach\b"],
    },
    RuleSpec {
        tag: "vuzix_z100",
        patterns: &[r"\bvuzix\b", r"\bz100\b", r"\bz\s*100\b"],
    },
];

/// Platform predicate: mentions Android.
pub const ANDROID_PATTERN: &str = r"\bandroid\b";

/// Platform predicate: mentions iOS or iPhone.
pub const IOS_PATTERN: &str = r"\bios\b|\biphone\b";

/// Testing strategy needed to catch each topical category.
pub const TESTABILITY_MAP: &[(&str, TestabilityTag)] = &[
    ("bluetooth_pairing", TestabilityTag::DeviceMatrix),
    ("translation_language", TestabilityTag::ManualWorkflow),
    ("streaming_media", TestabilityTag::EnvironmentDependent),
    ("permissions_android", TestabilityTag::DeviceMatrix),
    ("ios_specific", TestabilityTag::DeviceMatrix),
    ("app_crashes", TestabilityTag::Automated),
    ("ui_navigation", TestabilityTag::Automated),
    ("cloud_sync", TestabilityTag::Automated),
    ("hardware_integration", TestabilityTag::EnvironmentDependent),
    ("performance", TestabilityTag::EnvironmentDependent),
    ("wifi_connectivity", TestabilityTag::EnvironmentDependent),
    ("developer_console", TestabilityTag::Automated),
    ("error_handling", TestabilityTag::Automated),
    ("audio_processing", TestabilityTag::DeviceMatrix),
    ("gallery_media", TestabilityTag::ManualWorkflow),
    ("state_synchronization", TestabilityTag::Automated),
    ("ble_communication", TestabilityTag::DeviceMatrix),
    ("camera_functionality", TestabilityTag::DeviceMatrix),
];

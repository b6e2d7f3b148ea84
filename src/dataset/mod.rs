//! Compiled-in catalog datasets
//!
//! The heritage-site, archive, and event collections the views render.
//! Declaration order is load-bearing: the stores preserve it and the
//! filter engine never re-sorts.

mod archives;
mod events;
mod sites;

pub use archives::archive_items;
pub use events::calendar_events;
pub use sites::heritage_sites;

/// Filter options offered for archive item kinds, "All" first.
pub const ARCHIVE_KINDS: [&str; 6] = [
    "All",
    "Manuscript",
    "Mural",
    "Artifact",
    "Document",
    "Artwork",
];

/// Filter options offered for centuries, "All" first.
pub const CENTURIES: [&str; 7] = [
    "All",
    "15th Century",
    "16th Century",
    "17th Century",
    "18th Century",
    "19th Century",
    "Modern Recreation",
];

/// Filter options offered for holding monasteries, "All" first.
pub const MONASTERIES: [&str; 8] = [
    "All",
    "Rumtek Monastery",
    "Pemayangtse Monastery",
    "Enchey Monastery",
    "Tashiding Monastery",
    "Dubdi Monastery",
    "Phensang Monastery",
    "Multiple Locations",
];

/// Filter options offered for event kinds, "All" first.
pub const EVENT_KINDS: [&str; 6] = ["All", "Festival", "Religious", "Cultural", "Retreat", "Tour"];

/// Filter options offered for site regions, "All" first.
pub const REGIONS: [&str; 5] = [
    "All",
    "East Sikkim",
    "West Sikkim",
    "North Sikkim",
    "South Sikkim",
];

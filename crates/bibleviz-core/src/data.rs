// crates/bibleviz-core/src/data.rs
//! Static tables shared by the ancestry and journeys maps.
//!
//! Everything here is fixed for the lifetime of the process: the genealogy
//! point table with its manual edge overrides, the legend, the layer ids the
//! basemap styles define and the default camera framing.

use crate::common::{Bounds, Point};
use crate::genealogy::EdgeOverrides;
use once_cell::sync::Lazy;

/// Feature property holding the comma-joined group names of a person.
pub const GROUP_PROPERTY_NAME: &str = "groupLabel";

/// Group label attached to every synthesized genealogy line.
pub const GENEALOGY_GROUP_LABEL: &str = "Tribe of Judah,Genealogy of Jesus";

/// Cache key of the genealogy line set.
pub const GENEALOGY_DATASET: &str = "judah-jesus-genealogy";

/// Legend group that reveals the genealogy lines.
pub const GENEALOGY_VISIBLE_GROUP: &str = "Tribe of Judah";

pub const SHOW_OPACITY: f64 = 1.0;
pub const HIDE_OPACITY: f64 = 0.2;

pub const POINTS_LAYER_ID: &str = "father-points";
pub const LINES_LAYER_ID: &str = "father-lines";
pub const GENEALOGY_LAYER_ID: &str = "genealogy-lines";
pub const GENEALOGY_SOURCE_ID: &str = "genealogy-lines-source";
pub const LABEL_LAYER_IDS: [&str; 3] = [
    "labels-top-level",
    "labels-mid-level",
    "labels-bottom-level",
];

/// Source layer the searchable person points come from.
pub const PEOPLE_SOURCE_LAYER: &str = "bible_genes_json_2";

/// Framing used for the "all" filter and whenever a group has no features.
pub const INITIAL_MAP_BOUNDS: Bounds = Bounds::new(
    Point::new(-23.642578125, -24.00632619875111),
    Point::new(23.917236328125, 23.372513822359466),
);

/// Base URL of the person detail pages linked from the popup.
pub const PERSON_DETAILS_URL: &str = "https://theographic.netlify.app/person/";

const fn p(lng: f64, lat: f64) -> Point {
    Point::new(lng, lat)
}

/// Anchor points of the Judah / Jesus genealogy, in table order.
#[rustfmt::skip]
pub const JUDAH_JESUS_POINTS: [Point; 84] = [
    p(23.8608, -0.3938), p(6.2762, -4.424), p(12.2444, -2.6098), p(1.112, -3.1458),
    p(23.9148, 0.97), p(20.4832, 0.9942), p(22.9098, -1.4676), p(23.5296, -1.0954),
    p(20.8556, 0.4062), p(21.2846, -0.2034), p(13.048, -0.3482), p(13.494, 0.6868),
    p(23.912, 0.2868), p(21.7408, -0.7756), p(22.23, -1.2534), p(11.7828, -3.9872),
    p(12.6234, -1.4078), p(11.273, -5.6906), p(23.4662, 3.8416), p(17.652, 6.2292),
    p(20.1028, 1.591), p(21.1102, 10.0884), p(19.529, 12.8028), p(13.8152, 20.3572),
    p(13.8662, 11.3228), p(18.7156, 3.3212), p(19.6552, 2.2328), p(21.8002, 8.7164),
    p(4.1726, 22.8074), p(16.6668, 18.349), p(20.3434, 11.4436), p(6.284, 20.098),
    p(11.5428, 21.0962), p(22.3954, 7.3198), p(17.8716, 15.6954), p(23.2904, 4.5504),
    p(8.8628, 18.339), p(23.7484, 2.4296), p(18.1526, 3.8786), p(15.0776, 20.1568),
    p(21.4664, 9.4052), p(14.7772, 3.1912), p(11.129, 16.0448), p(15.321, 7.7294),
    p(19.9402, 12.1208), p(12.4316, 14.2496), p(3.805, 21.7692), p(20.7348, 10.7672),
    p(12.7724, 13.6218), p(14.184, 10.5526), p(17.4044, 4.3082), p(2.6434, 22.736),
    p(8.3116, 18.8868), p(23.6192, 3.1342), p(23.0934, 5.2596), p(6.877, 22.4988),
    p(18.2818, 14.9326), p(17.0688, 17.3762), p(9.4812, 17.782), p(22.1102, 8.021),
    p(5.567, 22.7216), p(19.1132, 13.4946), p(10.4202, 21.4672), p(12.0122, 14.8744),
    p(16.2846, 5.5798), p(12.6818, 20.7436), p(10.6434, 16.615), p(4.9874, 20.9482),
    p(11.581, 15.4674), p(7.2792, 19.5282), p(22.6564, 6.614), p(9.2838, 21.8396),
    p(17.4674, 16.5032), p(16.3692, 19.3408), p(16.4022, 20.8218), p(8.1096, 22.1922),
    p(13.142, 12.4762), p(18.6966, 14.202), p(19.1928, 2.8008), p(14.5876, 9.3766),
    p(10.105, 17.2408), p(22.8746, 5.9684), p(23.8466, 1.7292), p(13.9938, 1.7844),
];

/// Edges the nearest-neighbour pass produces but that are not parent links.
pub static EXCLUDE_LINES: Lazy<EdgeOverrides> = Lazy::new(|| {
    EdgeOverrides::from_pairs([
        ("Nathan-Menan", [p(17.4044, 4.3082), p(18.7156, 3.3212)]),
        ("Nathan-Absalom", [p(17.4044, 4.3082), p(17.652, 6.2292)]),
        ("Jesse-Boaz", [p(14.7772, 3.1912), p(13.494, 0.6868)]),
        ("Joseph-Mary", [p(15.0776, 20.1568), p(16.3692, 19.3408)]),
        ("Abiud-Pedaiah", [p(4.1726, 22.8074), p(3.805, 21.7692)]),
    ])
});

/// Parent links the nearest-neighbour pass misses.
pub static INCLUDE_LINES: Lazy<EdgeOverrides> = Lazy::new(|| {
    EdgeOverrides::from_pairs([
        ("Jesse-David", [p(14.7772, 3.1912), p(16.2846, 5.5798)]),
        ("Jacob-Judah", [p(-6.011, -3.4138), p(1.112, -3.1458)]),
        ("Absalom-Tamar", [p(17.652, 6.2292), p(18.4886, 6.675)]),
    ])
});

/// One entry of the ancestry legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct LegendOption {
    /// Group id matched against `groupLabel`, or `"all"`.
    pub id: &'static str,
    /// Short label shown on the legend button.
    pub text: &'static str,
    #[serde(rename = "defaultChecked")]
    pub default_checked: bool,
}

const fn opt(id: &'static str, text: &'static str) -> LegendOption {
    LegendOption {
        id,
        text,
        default_checked: false,
    }
}

pub const LEGEND_OPTIONS: [LegendOption; 14] = [
    LegendOption {
        id: "all",
        text: "ALL",
        default_checked: true,
    },
    opt("Genealogy of Jesus", "Jesus"),
    opt("Tribe of Judah", "Judah"),
    opt("Tribe of Levi", "Levi"),
    opt("Tribe of Joseph", "Joseph"),
    opt("Tribe of Benjamin", "Benjamin"),
    opt("Tribe of Reuben", "Reuben"),
    opt("Tribe of Simeon", "Simeon"),
    opt("Tribe of Issachar", "Issachar"),
    opt("Tribe of Naphtali", "Naphtali"),
    opt("Tribe of Asher", "Asher"),
    opt("Tribe of Zebulun", "Zebulun"),
    opt("Tribe of Gad", "Gad"),
    opt("Tribe of Dan", "Dan"),
];

// Journeys map

pub const ANCIENT_STYLE: &str = "mapbox://styles/bibleviz/cjh46bcmp2udj2sq5ifg79zkh";
pub const MODERN_STYLE: &str = "mapbox://styles/bibleviz/ckasadcu90f1w1jn0jip45knz";
pub const JOURNEY_PLACES_LAYER_ID: &str = "journey-places";
pub const VERSE_BASE_URL: &str = "https://www.blueletterbible.org/kjv/act/";

//! Heritage site collection: 30 monasteries, sacred lakes, and historic
//! sites across Sikkim.

use crate::geo::GeoPoint;
use crate::record::SiteRecord;
use crate::types::RecordId;

/// Build one site, applying the display defaults the views expect for
/// fields the source data does not attribute individually.
fn site(
    id: &str,
    name: &str,
    lat: f64,
    lon: f64,
    info: &str,
    speciality: &str,
    festival: &str,
) -> SiteRecord {
    SiteRecord {
        id: RecordId::from(id),
        name: name.to_string(),
        position: GeoPoint::from_dataset(lat, lon),
        region: "Sikkim".to_string(),
        century: "17th Century".to_string(),
        info: info.to_string(),
        speciality: speciality.to_string(),
        festival: festival.to_string(),
        festivals: vec![festival.to_string()],
        rating: 4.6,
        visitors: "1.2k+ monthly".to_string(),
        featured: false,
    }
}

/// The full heritage-site collection, in declaration order.
pub fn heritage_sites() -> Vec<SiteRecord> {
    vec![
        site(
            "rumtek-monastery",
            "Rumtek Monastery",
            27.338,
            88.555,
            "One of Sikkim's largest monasteries, seat of the Karmapa Lama.",
            "Kagyupa sect architecture",
            "Losar",
        ),
        site(
            "tashiding-monastery",
            "Tashiding Monastery",
            27.319,
            88.411,
            "Built in the 17th century, considered one of the holiest monasteries.",
            "Sacred chorten",
            "Bumchu Festival",
        ),
        site(
            "pemayangtse-monastery",
            "Pemayangtse Monastery",
            27.287,
            88.255,
            "Famous for its wooden sculptures and close to Rabdentse ruins.",
            "Three-storey wooden architecture",
            "Cham Dance",
        ),
        site(
            "enchey-monastery",
            "Enchey Monastery",
            27.341,
            88.613,
            "18th-century monastery dedicated to Guru Padmasambhava.",
            "Gompa with murals",
            "Detor Cham",
        ),
        site(
            "phodong-monastery",
            "Phodong Monastery",
            27.444,
            88.606,
            "Important Kagyu monastery, rebuilt in the 18th century.",
            "Rich murals",
            "Phodong Cham",
        ),
        site(
            "ralong-monastery",
            "Ralong Monastery",
            27.287,
            88.454,
            "Monastery known for its annual Pang Lhabsol and religious dances.",
            "Kagyupa lineage rituals",
            "Pang Lhabsol",
        ),
        site(
            "lingdum-ranka-monastery",
            "Lingdum (Ranka) Monastery",
            27.285,
            88.692,
            "Modern monastery with expansive courtyard near Gangtok.",
            "Contemporary monastic campus",
            "Cham Dance",
        ),
        site(
            "phensang-monastery",
            "Phensang Monastery",
            27.382,
            88.613,
            "Historic Nyingma monastery overlooking forested hills.",
            "Nyingma traditions",
            "Phensang Tsehchu",
        ),
        site(
            "tsuklakhang-palace-monastery",
            "Tsuklakhang Palace Monastery",
            27.332,
            88.612,
            "Royal chapel of the former Chogyals inside the palace complex.",
            "Royal rituals and relics",
            "Losoong & Namsoong",
        ),
        site(
            "khecheopalri-lake",
            "Khecheopalri Lake (Sacred Lake)",
            27.362,
            88.240,
            "Revered wish-fulfilling lake surrounded by forests.",
            "Pilgrimage lake, birds said to keep it clean",
            "Maghe Purne",
        ),
        site(
            "gurudongmar-lake",
            "Gurudongmar Lake (Sacred Lake)",
            28.025,
            88.711,
            "High-altitude sacred lake associated with Guru Padmasambhava.",
            "Turquoise glacial waters",
            "Local offerings",
        ),
        site(
            "rabdentse-ruins",
            "Rabdentse Ruins",
            27.289,
            88.232,
            "Archaeological remains of the second capital of Sikkim.",
            "Historic chortens and palace base",
            "Heritage walks",
        ),
        site(
            "yuksom-norbugang",
            "Yuksom (Norbugang Coronation Throne)",
            27.374,
            88.220,
            "Site where the first Chogyal was crowned by three lamas.",
            "Stone throne & chorten",
            "Historical commemorations",
        ),
        site(
            "rumtek-old-monastery",
            "Rumtek Old Monastery (Lingshi)",
            27.332,
            88.555,
            "Original Rumtek complex close to the newer monastery.",
            "Antique murals",
            "Losar",
        ),
        site(
            "zang-dhok-palri-monastery",
            "Zang Dhok Palri (Ralang Palchen) Monastery",
            27.290,
            88.458,
            "Seat of the 12th Gyaltsab Rinpoche near Ralang.",
            "Kagyud seat",
            "Cham Festival",
        ),
        site(
            "do-drul-chorten",
            "Do-drul Chorten",
            27.320,
            88.612,
            "Prominent stupa with 108 prayer wheels in Gangtok.",
            "Chorten complex",
            "Circumambulation rituals",
        ),
        site(
            "namchi-char-dham",
            "Namchi Char Dham (Siddhesvara Dham)",
            27.159,
            88.355,
            "Pilgrimage complex with replicas of four Hindu Dhams.",
            "Syncretic pilgrimage site",
            "Festive fairs",
        ),
        site(
            "samdruptse-guru-statue",
            "Samdruptse (Guru Statue)",
            27.175,
            88.365,
            "Gigantic statue of Guru Padmasambhava near Namchi.",
            "Hilltop statue",
            "Offerings & prayers",
        ),
        site(
            "sanga-choeling-monastery",
            "Sanga Choeling Monastery",
            27.312,
            88.245,
            "One of the oldest monasteries, above Pelling ridge.",
            "Ancient Nyingma architecture",
            "Losar & Cham",
        ),
        site(
            "dubdi-monastery",
            "Dubdi (Yuksom) Monastery",
            27.375,
            88.213,
            "First monastery of Sikkim established in 1701.",
            "Historic Nyingma seat",
            "Religious ceremonies",
        ),
        site(
            "tsechu-bermoik-monastery",
            "Tsechu Bermoik Monastery",
            27.241,
            88.450,
            "Small but serene monastery in South Sikkim.",
            "Local traditions",
            "Annual Tsechu",
        ),
        site(
            "kabi-longstok",
            "Kabi Longstok (Sacred Treaty Site)",
            27.425,
            88.592,
            "Site commemorating the blood brotherhood treaty.",
            "Historical significance",
            "Cultural programs",
        ),
        site(
            "rinchenpong-monastery",
            "Rinchenpong Monastery",
            27.315,
            88.157,
            "Monastery known for its unique reclining Buddha.",
            "Reclining Buddha statue",
            "Local Cham",
        ),
        site(
            "hee-bermiok-chaya-monastery",
            "Hee Bermiok Chaya Monastery",
            27.316,
            88.168,
            "Quiet monastery overlooking terraced hills.",
            "Countryside gompa",
            "Community rituals",
        ),
        site(
            "kunzang-dechen-odsal-ling",
            "Kunzang Dechen Odsal Ling Monastery (K.D.O.L.)",
            27.239,
            88.610,
            "Monastery on Rumtek-Gangtok road dedicated to Nyingma lineage.",
            "Prayer wheel corridor",
            "Nyingma ceremonies",
        ),
        site(
            "lachen-monastery",
            "Lachen Monastery",
            27.723,
            88.557,
            "Gompa serving the northern village of Lachen.",
            "Colorful murals",
            "Local Cham",
        ),
        site(
            "lachung-monastery",
            "Lachung Monastery",
            27.693,
            88.743,
            "Monastery amidst apple orchards and high valleys.",
            "Himalayan setting",
            "Saga Dawa",
        ),
        site(
            "ralang-hot-springs",
            "Ralang Hot Springs (Religious site)",
            27.212,
            88.406,
            "Pilgrim-frequented hot springs near Ralang.",
            "Thermal springs",
            "Seasonal fairs",
        ),
        site(
            "namgyal-institute",
            "Namgyal Institute of Tibetology",
            27.317,
            88.613,
            "Museum and research center preserving Tibetan-Buddhist heritage.",
            "Rare manuscripts & thangkas",
            "Cultural exhibitions",
        ),
        site(
            "buddha-park",
            "Buddha Park (Tathagata Tsal)",
            27.186,
            88.372,
            "Park featuring a towering statue of Buddha at Ravangla.",
            "Pilgrimage and panoramic views",
            "Buddha Jayanti",
        ),
    ]
}

//! Bundled volcano entries shipped with the app.

use volcano_types::{EntryId, EruptionEvent, GeographicData, VolcanoEntry, VolcanoStatus};

/// Bundled photo asset names per entry: `<stem>1` through `<stem>5`.
const PHOTOS_PER_ENTRY: u32 = 5;

/// Static content of one bundled entry.
struct Seed {
    id: i64,
    name: &'static str,
    overview: &'static str,
    mythology: &'static str,
    altitude: &'static str,
    last_eruption: &'static str,
    volcano_type: &'static str,
    latitude: &'static str,
    longitude: &'static str,
    country: &'static str,
    /// `(year, vei, description)`, oldest first.
    timeline: &'static [(&'static str, &'static str, &'static str)],
    /// Fascinating facts; the first `quick_fact_count` double as quick facts.
    facts: &'static [&'static str],
    quick_fact_count: usize,
    photo_stem: &'static str,
}

const SEEDS: [Seed; 8] = [
    Seed {
        id: 0,
        name: "Mount Vesuvius",
        overview: "Mount Vesuvius is best known for its eruption in AD 79 that destroyed the Roman cities of Pompeii and Herculaneum. It is the only volcano on mainland Europe to have erupted in the last hundred years.",
        mythology: "The Romans believed Vesuvius was sacred to Hercules, and the ancient city at its base was named Herculaneum in his honor.",
        altitude: "1281m",
        last_eruption: "1944",
        volcano_type: "Stratovolcano",
        latitude: "40.8214°",
        longitude: "14.4260°",
        country: "Italy",
        timeline: &[
            (
                "AD 79",
                "VEI 5",
                "Catastrophic Plinian eruption that buried Pompeii",
            ),
            ("1631", "VEI 4", "Major eruption killed 4,000 people"),
            ("1906", "VEI 4", "Violent eruption with lava fountains"),
            ("1944", "VEI 3", "Most recent eruption during WWII"),
        ],
        facts: &[
            "Destroyed Pompeii and Herculaneum in AD 79",
            "Over 3 million people live in its danger zone",
            "Has erupted more than 50 times since AD 79",
            "Part of the Campanian volcanic arc",
            "Considered one of the most dangerous volcanoes in the world",
        ],
        quick_fact_count: 3,
        photo_stem: "vesuvius",
    },
    Seed {
        id: 1,
        name: "Mount Fuji",
        overview: "Mount Fuji is Japan's highest mountain and an iconic symbol of the nation. It last erupted in 1707-1708 during the Edo period. The volcano has been worshipped as a sacred mountain and is a UNESCO World Heritage Site.",
        mythology: "In Japanese mythology, Mount Fuji is home to the fire goddess Kagutsuchi. Legends say the mountain appeared overnight in 286 BC after an earthquake.",
        altitude: "3776m",
        last_eruption: "1707–1708",
        volcano_type: "Stratovolcano",
        latitude: "35.3606°",
        longitude: "138.7274°",
        country: "Japan",
        timeline: &[
            ("864–866", "VEI 4", "Jogan eruption created lava flows"),
            ("1707–1708", "VEI 5", "Hōei eruption, most recent activity"),
        ],
        facts: &[
            "Japan's highest peak at 3,776 meters",
            "Visible from Tokyo on clear days (100km away)",
            "Sacred mountain in Shinto religion",
            "Climbed by over 300,000 people annually",
            "Featured in countless artworks, including Hokusai's famous prints",
        ],
        quick_fact_count: 5,
        photo_stem: "fuji",
    },
    Seed {
        id: 2,
        name: "Krakatoa",
        overview: "Krakatoa is infamous for its catastrophic 1883 eruption, one of the deadliest and most destructive volcanic events in recorded history. The explosion was heard 3,000 miles away and created tsunamis that killed over 36,000 people.",
        mythology: "Local legends speak of a divine battle between two mountains, Krakatoa and nearby Rajabasa, that ended in a catastrophic explosion.",
        altitude: "813m",
        last_eruption: "2020",
        volcano_type: "Caldera",
        latitude: "-6.1020°",
        longitude: "105.4230°",
        country: "Indonesia",
        timeline: &[
            ("1883", "VEI 6", "Catastrophic eruption heard worldwide"),
            ("1927", "VEI 2", "Birth of Anak Krakatau"),
            ("2018", "VEI 3", "Major eruption and tsunami"),
            ("2020", "VEI 2", "Recent volcanic activity"),
        ],
        facts: &[
            "1883 eruption was one of the loudest sounds in history",
            "The explosion was heard in Australia, 3,000 miles away",
            "Generated tsunamis up to 40 meters high",
            "Lowered global temperatures by 1.2°C for a year",
            "Anak Krakatau (\"Child of Krakatoa\") emerged in 1927",
        ],
        quick_fact_count: 5,
        photo_stem: "krakatoa",
    },
    Seed {
        id: 3,
        name: "Mauna Loa",
        overview: "Mauna Loa is the world's largest active volcano by volume and area. It makes up about half of the Big Island of Hawaii and has erupted 33 times since 1843. Its lava flows are typically fluid and relatively non-explosive.",
        mythology: "In Hawaiian mythology, Mauna Loa is home to Pele, the goddess of fire and volcanoes, who is said to create land by flowing lava.",
        altitude: "4169m",
        last_eruption: "2022",
        volcano_type: "Shield Volcano",
        latitude: "19.4750°",
        longitude: "-155.6082°",
        country: "United States (Hawaii)",
        timeline: &[
            ("1950", "VEI 3", "Largest eruption in modern times"),
            ("1984", "VEI 2", "Three-week eruption threatening Hilo"),
            ("2022", "VEI 2", "First eruption in 38 years"),
        ],
        facts: &[
            "Largest volcano on Earth by volume (75,000 km³)",
            "Makes up 51% of the Big Island of Hawaii",
            "Summit is 4,169 meters above sea level",
            "Base is about 5,000 meters below sea level",
            "Has erupted an average of once every 6 years since 1843",
        ],
        quick_fact_count: 5,
        photo_stem: "maunaloa",
    },
    Seed {
        id: 4,
        name: "Mount Etna",
        overview: "Mount Etna is Europe's most active volcano and one of the world's most active. It has been erupting for approximately 500,000 years and has produced more lava than any other volcano in the world.",
        mythology: "Greek mythology places the forge of Hephaestus, god of fire and metalworking, beneath Mount Etna. The giant Typhon was also said to be trapped underneath.",
        altitude: "3357m",
        last_eruption: "2024",
        volcano_type: "Stratovolcano",
        latitude: "37.7510°",
        longitude: "14.9934°",
        country: "Italy (Sicily)",
        timeline: &[
            (
                "1669",
                "VEI 3",
                "Most destructive eruption, destroyed Catania",
            ),
            ("2002", "VEI 2", "Major eruption with lava fountains"),
            ("2021", "VEI 2", "Spectacular paroxysmal eruptions"),
            ("2024", "VEI 2", "Ongoing volcanic activity"),
        ],
        facts: &[
            "Europe's highest and most active volcano",
            "Has four distinct summit craters",
            "Produces spectacular lava fountains regularly",
            "UNESCO World Heritage Site since 2013",
            "Ancient Greeks believed it was the forge of Hephaestus",
        ],
        quick_fact_count: 5,
        photo_stem: "etna",
    },
    Seed {
        id: 5,
        name: "Eyjafjallajokull",
        overview: "This Icelandic volcano became world-famous in 2010 when its eruption produced a massive ash cloud that disrupted air travel across Europe for six days, affecting 10 million travelers.",
        mythology: "Icelandic sagas speak of fire and ice being in constant battle, with volcanoes representing the primordial fire beneath the frozen land.",
        altitude: "1651m",
        last_eruption: "2010",
        volcano_type: "Stratovolcano",
        latitude: "63.6333°",
        longitude: "-19.6333°",
        country: "Iceland",
        timeline: &[
            ("920", "VEI 4", "Large eruption in medieval times"),
            ("1821–1823", "VEI 2", "Extended eruption period"),
            ("2010", "VEI 4", "Famous ash cloud eruption"),
        ],
        facts: &[
            "Name means \"island mountain glacier\"",
            "2010 eruption disrupted European air travel for a week",
            "Covered by an ice cap about 100 km²",
            "One of Iceland's smaller ice caps",
            "Ash cloud reached heights of 9 km",
        ],
        quick_fact_count: 5,
        photo_stem: "eyjafjallajokull",
    },
    Seed {
        id: 6,
        name: "Mount St. Helens",
        overview: "Mount St. Helens is best known for its catastrophic eruption on May 18, 1980, which was the deadliest and most economically destructive volcanic event in U.S. history. The eruption reduced the mountain's height by 400 meters.",
        mythology: "Native American legends tell of a battle between two warrior gods that created the mountain and its destructive power.",
        altitude: "2549m",
        last_eruption: "2008",
        volcano_type: "Stratovolcano",
        latitude: "46.1914°",
        longitude: "-122.1956°",
        country: "United States (Washington)",
        timeline: &[
            ("1800", "VEI 5", "Major eruption in modern era"),
            ("1980", "VEI 5", "Catastrophic lateral blast"),
            ("2004–2008", "VEI 2", "Dome-building eruptions"),
        ],
        facts: &[
            "1980 eruption killed 57 people",
            "Lost 400 meters of elevation in the eruption",
            "Lateral blast traveled at 300 mph",
            "Destroyed 250 homes and 47 bridges",
            "Most active volcano in the Cascade Range",
        ],
        quick_fact_count: 5,
        photo_stem: "sthelens",
    },
    Seed {
        id: 7,
        name: "Popocatepetl",
        overview: "Known affectionately as \"El Popo,\" this volcano has been continuously active since 1994. It is one of Mexico's most active volcanoes and lies just 70 km from Mexico City, home to over 20 million people.",
        mythology: "Aztec legend tells of the warrior Popocatépetl and his love Iztaccíhuatl, who were transformed into mountains by the gods.",
        altitude: "5426m",
        last_eruption: "2024",
        volcano_type: "Stratovolcano",
        latitude: "19.0225°",
        longitude: "-98.6278°",
        country: "Mexico",
        timeline: &[
            ("1519", "VEI 3", "Eruption witnessed by Cortés"),
            ("1947", "VEI 3", "Major 20th century eruption"),
            ("2000", "VEI 3", "Large eruption forcing evacuations"),
            ("2024", "VEI 2", "Ongoing activity with ash emissions"),
        ],
        facts: &[
            "Second-highest peak in Mexico",
            "Name means \"smoking mountain\" in Nahuatl",
            "Over 25 million people live within its threat zone",
            "Has had over 20 major eruptions since 1519",
            "Continuously monitored by scientists",
        ],
        quick_fact_count: 5,
        photo_stem: "popocatepetl",
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Helper to build a [`VolcanoEntry`] from its bundled content.
fn entry(seed: &Seed) -> VolcanoEntry {
    let quick_facts = seed
        .facts
        .get(..seed.quick_fact_count)
        .unwrap_or(seed.facts);
    VolcanoEntry {
        id: EntryId(seed.id),
        name: seed.name.to_owned(),
        overview: seed.overview.to_owned(),
        mythology: seed.mythology.to_owned(),
        is_favorite: false,
        status: VolcanoStatus {
            is_active: true,
            altitude: seed.altitude.to_owned(),
            last_eruption: seed.last_eruption.to_owned(),
            volcano_type: seed.volcano_type.to_owned(),
        },
        geographic: GeographicData {
            latitude: seed.latitude.to_owned(),
            longitude: seed.longitude.to_owned(),
            country: seed.country.to_owned(),
        },
        quick_facts: owned(quick_facts),
        eruption_timeline: seed
            .timeline
            .iter()
            .map(|&(year, vei, description)| EruptionEvent {
                year: year.to_owned(),
                vei: vei.to_owned(),
                description: description.to_owned(),
            })
            .collect(),
        historical_overview: seed.overview.to_owned(),
        fascinating_facts: owned(seed.facts),
        photos: (1..=PHOTOS_PER_ENTRY)
            .map(|n| format!("{}{n}", seed.photo_stem))
            .collect(),
        user_photos: Vec::new(),
    }
}

/// The eight volcanoes of a fresh install, ids `0..=7`.
pub fn starting_catalog() -> Vec<VolcanoEntry> {
    SEEDS.iter().map(entry).collect()
}

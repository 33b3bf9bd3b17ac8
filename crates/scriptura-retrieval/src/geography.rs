//! Biblical geography index.
//!
//! A curated location table with an optional JSON overlay, searched by a
//! weighted name/alias/description score.

use std::path::Path;

use serde::Deserialize;

use scriptura_core::IndexError;

/// Latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One biblical location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub modern_country: Option<String>,
    #[serde(default, rename = "approximate_coordinates")]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub primary_scriptures: Vec<String>,
}

impl Location {
    #[allow(clippy::too_many_arguments)]
    fn curated(
        name: &str,
        region: &str,
        aliases: &[&str],
        modern_country: &str,
        coordinates: Option<(f64, f64)>,
        description: &str,
        events: &[&str],
        scriptures: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            region: Some(region.to_string()),
            aliases: aliases.iter().map(|s| s.to_string()).collect(),
            modern_country: Some(modern_country.to_string()),
            coordinates: coordinates.map(|(lat, lng)| Coordinates { lat, lng }),
            description: Some(description.to_string()),
            events: events.iter().map(|s| s.to_string()).collect(),
            primary_scriptures: scriptures.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub struct LocationIndex {
    locations: Vec<Location>,
}

impl LocationIndex {
    /// The curated table alone.
    pub fn curated() -> Self {
        Self {
            locations: curated_locations(),
        }
    }

    /// Curated table extended by a JSON overlay (an array of location
    /// objects). Overlay entries win on name collision.
    pub fn with_overlay(path: &Path) -> Result<Self, IndexError> {
        let mut locations = curated_locations();
        if let Ok(bytes) = std::fs::read(path) {
            let overlay: Vec<Location> =
                serde_json::from_slice(&bytes).map_err(|e| IndexError::MalformedIndex {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
            for loc in overlay {
                locations.retain(|l| !l.name.eq_ignore_ascii_case(&loc.name));
                locations.push(loc);
            }
        }
        Ok(Self { locations })
    }

    /// Top scored matches for a query, best first.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Location> {
        let mut scored: Vec<(i32, &Location)> = self
            .locations
            .iter()
            .map(|loc| (score(loc, query), loc))
            .filter(|(s, _)| *s > 0)
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().take(limit).map(|(_, l)| l).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(name))
    }
}

fn score(location: &Location, query: &str) -> i32 {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return 0;
    }
    let name = location.name.to_lowercase();
    let tokens: Vec<&str> = q.split(|c: char| !c.is_alphanumeric()).filter(|s| !s.is_empty()).collect();

    let mut score = 0;

    if name == q {
        score += 5;
    } else if name.contains(&q) || q.contains(&name) {
        score += 3;
    }
    if tokens.contains(&name.as_str()) {
        score += 2;
    }

    for alias in &location.aliases {
        let alias = alias.to_lowercase();
        if alias.is_empty() {
            continue;
        }
        if alias == q {
            score += 4;
            break;
        }
        if alias.contains(&q) || q.contains(&alias) {
            score += 3;
            break;
        }
        if tokens.contains(&alias.as_str()) {
            score += 2;
            break;
        }
    }

    if let Some(description) = &location.description {
        if description.to_lowercase().contains(&q) {
            score += 1;
        }
    }
    if let Some(country) = &location.modern_country {
        if country.to_lowercase().contains(&q) {
            score += 2;
        }
    }
    if let Some(region) = &location.region {
        if region.to_lowercase().contains(&q) {
            score += 1;
        }
    }

    score
}

fn curated_locations() -> Vec<Location> {
    vec![
        Location::curated(
            "Jericho",
            "Jordan Valley",
            &["City of Palms"],
            "West Bank",
            Some((31.87, 35.44)),
            "One of the oldest inhabited cities in the world, first city taken in the conquest of Canaan.",
            &[
                "Walls fell after Israel marched around the city (Joshua 6)",
                "Rahab sheltered the Israelite spies (Joshua 2)",
                "Jesus healed blind Bartimaeus near the city (Mark 10:46)",
                "Zacchaeus met Jesus here (Luke 19)",
            ],
            &["Joshua 6:20", "Luke 19:1-10", "Hebrews 11:30"],
        ),
        Location::curated(
            "Jerusalem",
            "Judean Hills",
            &["Zion", "City of David", "Salem"],
            "Israel",
            Some((31.78, 35.22)),
            "Capital of the united monarchy and site of the temple; the center of Israel's worship.",
            &[
                "David brought the ark to the city (2 Samuel 6)",
                "Solomon built the first temple (1 Kings 6)",
                "Jesus was crucified and rose outside its walls",
                "The Spirit came at Pentecost (Acts 2)",
            ],
            &["Psalm 122:6", "2 Chronicles 6:6", "Luke 24:47"],
        ),
        Location::curated(
            "Bethlehem",
            "Judea",
            &["Ephrath", "City of David"],
            "West Bank",
            Some((31.70, 35.20)),
            "Hometown of David and birthplace of Jesus, fulfilling Micah's prophecy.",
            &[
                "Ruth gleaned in nearby fields (Ruth 2)",
                "Samuel anointed David (1 Samuel 16)",
                "Jesus was born here (Matthew 2; Luke 2)",
            ],
            &["Micah 5:2", "Matthew 2:1", "Luke 2:4"],
        ),
        Location::curated(
            "Nazareth",
            "Galilee",
            &[],
            "Israel",
            Some((32.70, 35.30)),
            "Galilean hill town where Jesus was raised; 'can anything good come from Nazareth?'",
            &[
                "The annunciation to Mary (Luke 1:26)",
                "Jesus read Isaiah in the synagogue and was rejected (Luke 4)",
            ],
            &["Luke 1:26", "Luke 4:16-30", "John 1:46"],
        ),
        Location::curated(
            "Capernaum",
            "Sea of Galilee",
            &[],
            "Israel",
            Some((32.88, 35.58)),
            "Fishing town on the north shore of the Sea of Galilee; base of Jesus' Galilean ministry.",
            &[
                "Jesus healed the centurion's servant (Matthew 8)",
                "A paralytic was lowered through the roof (Mark 2)",
                "Peter's house stood here",
            ],
            &["Matthew 4:13", "Mark 2:1-12"],
        ),
        Location::curated(
            "Edom",
            "Seir",
            &["Idumea", "Mount Seir"],
            "Jordan",
            Some((30.73, 35.61)),
            "Mountainous land south of the Dead Sea, settled by the descendants of Esau.",
            &[
                "Esau settled in the hill country of Seir (Genesis 36)",
                "Edom refused Israel passage (Numbers 20)",
                "Obadiah prophesied against Edom",
            ],
            &["Genesis 36:8", "Numbers 20:14-21", "Obadiah 1"],
        ),
        Location::curated(
            "Babylon",
            "Mesopotamia",
            &["Babel", "Shinar"],
            "Iraq",
            Some((32.54, 44.42)),
            "Imperial city on the Euphrates; the place of Judah's exile and a byword for worldly power.",
            &[
                "The tower of Babel (Genesis 11)",
                "Nebuchadnezzar carried Judah into exile (2 Kings 25)",
                "Daniel served in the royal court",
            ],
            &["Genesis 11:1-9", "2 Kings 25:11", "Jeremiah 29:10"],
        ),
        Location::curated(
            "Nineveh",
            "Assyria",
            &[],
            "Iraq",
            Some((36.36, 43.15)),
            "Capital of the Assyrian empire; the city that repented at Jonah's preaching.",
            &[
                "Jonah preached and the city repented (Jonah 3)",
                "Nahum prophesied its fall",
            ],
            &["Jonah 3:5", "Nahum 1:1"],
        ),
        Location::curated(
            "Galilee",
            "Northern Israel",
            &["Galilee of the Gentiles"],
            "Israel",
            Some((32.80, 35.50)),
            "Northern region around the lake where most of Jesus' ministry unfolded.",
            &[
                "Jesus called the first disciples by the lake (Matthew 4)",
                "The sermon on the mount was delivered nearby",
            ],
            &["Isaiah 9:1", "Matthew 4:23"],
        ),
        Location::curated(
            "Mount Sinai",
            "Sinai Peninsula",
            &["Horeb", "Mountain of God"],
            "Egypt",
            Some((28.54, 33.97)),
            "The mountain of the covenant where Israel received the law.",
            &[
                "Moses met God in the burning bush (Exodus 3)",
                "The ten commandments were given (Exodus 20)",
                "Elijah heard the still small voice (1 Kings 19)",
            ],
            &["Exodus 19:20", "Exodus 20:1-17", "1 Kings 19:8-12"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_name_scores_highest() {
        let index = LocationIndex::curated();
        let hits = index.search("Jericho", 5);
        assert_eq!(hits[0].name, "Jericho");
    }

    #[test]
    fn aliases_match() {
        let index = LocationIndex::curated();
        let hits = index.search("where is Zion", 5);
        assert_eq!(hits[0].name, "Jerusalem");
    }

    #[test]
    fn phrase_queries_match_by_token() {
        let index = LocationIndex::curated();
        let hits = index.search("where is present day edom", 5);
        assert_eq!(hits[0].name, "Edom");
    }

    #[test]
    fn unknown_places_return_nothing() {
        let index = LocationIndex::curated();
        assert!(index.search("atlantis", 5).is_empty());
    }
}

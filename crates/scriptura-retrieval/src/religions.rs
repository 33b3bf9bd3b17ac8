//! World-religions summary index.
//!
//! Religion summaries grouped by family, with a comparison-oriented
//! answer builder. Content is a curated table; the answer always frames
//! the comparison explicitly rather than editorializing.

use std::collections::HashMap;

/// One religion summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Religion {
    pub name: &'static str,
    pub family: &'static str,
    pub summary: &'static str,
    pub key_concepts: &'static [&'static str],
}

const RELIGIONS: &[Religion] = &[
    Religion {
        name: "Islam",
        family: "Abrahamic",
        summary: "Monotheistic faith founded on the revelation of the Quran to Muhammad; submission to Allah expressed through the Five Pillars.",
        key_concepts: &["Tawhid (oneness of God)", "Quran", "Five Pillars", "Prophethood"],
    },
    Religion {
        name: "Judaism",
        family: "Abrahamic",
        summary: "Covenant faith of Israel centered on the Torah, the one God of Abraham, and life under the commandments.",
        key_concepts: &["Torah", "Covenant", "Shema", "Halakhah"],
    },
    Religion {
        name: "Hinduism",
        family: "Dharmic",
        summary: "A family of Indian traditions oriented around dharma, karma, and liberation (moksha) from the cycle of rebirth.",
        key_concepts: &["Dharma", "Karma", "Samsara", "Moksha", "Vedas"],
    },
    Religion {
        name: "Buddhism",
        family: "Dharmic",
        summary: "Path taught by Siddhartha Gautama for release from suffering through the Four Noble Truths and the Eightfold Path.",
        key_concepts: &["Four Noble Truths", "Eightfold Path", "Nirvana", "Anatta"],
    },
    Religion {
        name: "Sikhism",
        family: "Dharmic",
        summary: "Monotheistic faith founded by Guru Nanak in Punjab; devotion to one God, honest labor, and service.",
        key_concepts: &["Waheguru", "Guru Granth Sahib", "Seva", "Khalsa"],
    },
    Religion {
        name: "Taoism",
        family: "East Asian",
        summary: "Chinese tradition of living in harmony with the Tao, the underlying way of nature.",
        key_concepts: &["Tao", "Wu wei", "Yin and yang"],
    },
    Religion {
        name: "Confucianism",
        family: "East Asian",
        summary: "Ethical tradition of Confucius emphasizing virtue, filial piety, and social harmony.",
        key_concepts: &["Ren (benevolence)", "Li (propriety)", "Filial piety"],
    },
    Religion {
        name: "Shinto",
        family: "East Asian",
        summary: "Indigenous Japanese tradition honoring kami through shrine ritual and purification.",
        key_concepts: &["Kami", "Shrines", "Purification"],
    },
    Religion {
        name: "Mormonism",
        family: "Modern",
        summary: "Restorationist movement founded by Joseph Smith; adds the Book of Mormon and continuing prophetic authority to its canon.",
        key_concepts: &["Book of Mormon", "Restoration", "Latter-day prophets"],
    },
    Religion {
        name: "Jehovah's Witnesses",
        family: "Modern",
        summary: "Restorationist movement teaching a non-trinitarian view of God and an imminent earthly kingdom.",
        key_concepts: &["Jehovah", "Kingdom hall", "New World Translation"],
    },
    Religion {
        name: "Secular Humanism",
        family: "Modern",
        summary: "Non-theistic life stance grounding ethics and meaning in human reason and flourishing.",
        key_concepts: &["Reason", "Ethics without revelation", "Human flourishing"],
    },
];

const CORE_CHRISTIAN_CLAIMS: &[&str] = &[
    "Jesus Christ is the eternal Son of God, fully God and fully man (John 1:1, 14).",
    "Salvation is by grace through faith, not by works (Ephesians 2:8-9).",
    "Scripture is the authoritative Word of God (2 Timothy 3:16).",
];

pub struct ReligionIndex {
    by_key: HashMap<String, &'static Religion>,
}

impl ReligionIndex {
    pub fn new() -> Self {
        let mut by_key = HashMap::new();
        for religion in RELIGIONS {
            by_key.insert(religion.name.to_lowercase(), religion);
        }
        // Common adjective/adherent forms.
        for (alias, name) in [
            ("muslim", "Islam"),
            ("islamic", "Islam"),
            ("jewish", "Judaism"),
            ("hindu", "Hinduism"),
            ("buddhist", "Buddhism"),
            ("sikh", "Sikhism"),
            ("mormon", "Mormonism"),
            ("lds", "Mormonism"),
            ("jehovah", "Jehovah's Witnesses"),
            ("humanism", "Secular Humanism"),
        ] {
            if let Some(religion) = RELIGIONS.iter().find(|r| r.name == name) {
                by_key.insert(alias.to_string(), religion);
            }
        }
        Self { by_key }
    }

    pub fn list(&self) -> Vec<&'static str> {
        RELIGIONS.iter().map(|r| r.name).collect()
    }

    /// Every religion mentioned in a text, deduplicated.
    pub fn find_in(&self, text: &str) -> Vec<&'static Religion> {
        let lower = text.to_lowercase();
        let mut found: Vec<&'static Religion> = Vec::new();
        for (key, religion) in &self.by_key {
            if lower.contains(key) && !found.iter().any(|r| r.name == religion.name) {
                found.push(religion);
            }
        }
        found.sort_by_key(|r| r.name);
        found
    }

    /// A comparison overview for the first religion found in the query.
    pub fn apologetic_overview(&self, query: &str) -> Option<(String, &'static Religion)> {
        let found = self.find_in(query);
        let top = *found.first()?;

        let mut answer = format!("Overview of {} ({})\n\n", top.name, top.family);
        answer.push_str(&format!("Summary: {}\n", top.summary));
        if !top.key_concepts.is_empty() {
            answer.push_str(&format!("Key Concepts: {}\n\n", top.key_concepts.join(", ")));
        }

        answer.push_str(
            "Christian Apologetics Perspective (concise)\n\
             - We seek truth with humility and respect (1 Peter 3:15).\n\
             - We compare every belief with the Gospel of Christ.\n\n\
             Core Christian Claims:\n",
        );
        for claim in CORE_CHRISTIAN_CLAIMS {
            answer.push_str(&format!("• {claim}\n"));
        }

        answer.push_str(&format!(
            "\nPoints of Contrast with {}:\n\
             • View of Jesus: Christianity confesses Jesus as Lord and God; {} holds a different view.\n\
             • Way of Salvation: Christianity teaches grace through faith in Christ; alternative systems often emphasize law, ritual, knowledge, or practice.\n\
             • Authority: Christianity roots truth in the Bible and the risen Christ; other sources vary by tradition.\n\n\
             Invitation: Explore the life, death, and resurrection of Jesus (John 3:16; Romans 10:9), and weigh every claim in light of Scripture and truth.",
            top.name, top.name
        ));

        Some((answer, top))
    }
}

impl Default for ReligionIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_religions_by_name_and_alias() {
        let index = ReligionIndex::new();
        let found = index.find_in("what does Islam teach about prayer");
        assert_eq!(found[0].name, "Islam");
        let found = index.find_in("what do mormons believe");
        assert_eq!(found[0].name, "Mormonism");
    }

    #[test]
    fn overview_names_the_religion_and_family() {
        let index = ReligionIndex::new();
        let (answer, religion) = index.apologetic_overview("compare christianity to Buddhism").unwrap();
        assert_eq!(religion.name, "Buddhism");
        assert!(answer.contains("Overview of Buddhism (Dharmic)"));
        assert!(answer.contains("Points of Contrast with Buddhism"));
    }

    #[test]
    fn no_religion_mentioned_means_none() {
        let index = ReligionIndex::new();
        assert!(index.apologetic_overview("what is grace").is_none());
    }
}

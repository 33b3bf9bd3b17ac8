//! Feast-day knowledge index.
//!
//! Static table of the appointed times with keyword routing. Calendar
//! math ("what feast is today") belongs to the caller; this index
//! answers knowledge questions about the feasts themselves.

use scriptura_core::AnswerKind;

/// One appointed time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feast {
    pub id: &'static str,
    pub english_name: &'static str,
    pub hebrew_name: &'static str,
    pub themes: &'static [&'static str],
    pub observance: &'static str,
    pub ot_refs: &'static [&'static str],
    pub nt_refs: &'static [&'static str],
    pub category: &'static str,
    pub pilgrimage: bool,
}

const FEASTS: &[Feast] = &[
    Feast {
        id: "passover",
        english_name: "Passover",
        hebrew_name: "Pesach",
        themes: &["Redemption", "Deliverance from Egypt", "The Lamb"],
        observance: "A memorial meal of lamb, unleavened bread, and bitter herbs recalling the exodus from Egypt.",
        ot_refs: &["Exodus 12:1-14", "Leviticus 23:4-5", "Deuteronomy 16:1-8"],
        nt_refs: &["Luke 22:14-20", "1 Corinthians 5:7"],
        category: "spring",
        pilgrimage: true,
    },
    Feast {
        id: "unleavened_bread",
        english_name: "Unleavened Bread",
        hebrew_name: "Chag HaMatzot",
        themes: &["Separation from leaven", "Haste of the exodus"],
        observance: "Seven days of eating unleavened bread immediately following Passover.",
        ot_refs: &["Exodus 12:15-20", "Leviticus 23:6-8"],
        nt_refs: &["1 Corinthians 5:6-8"],
        category: "spring",
        pilgrimage: false,
    },
    Feast {
        id: "firstfruits",
        english_name: "Firstfruits",
        hebrew_name: "Bikkurim",
        themes: &["First of the harvest", "Gratitude", "Resurrection pattern"],
        observance: "The first sheaf of the barley harvest waved before the LORD.",
        ot_refs: &["Leviticus 23:9-14"],
        nt_refs: &["1 Corinthians 15:20-23"],
        category: "spring",
        pilgrimage: false,
    },
    Feast {
        id: "weeks",
        english_name: "Weeks (Pentecost)",
        hebrew_name: "Shavuot",
        themes: &["Wheat harvest", "Giving of the Torah", "Outpouring of the Spirit"],
        observance: "Fifty days counted from Firstfruits; two leavened loaves offered.",
        ot_refs: &["Leviticus 23:15-22", "Deuteronomy 16:9-12"],
        nt_refs: &["Acts 2:1-4"],
        category: "spring",
        pilgrimage: true,
    },
    Feast {
        id: "trumpets",
        english_name: "Trumpets",
        hebrew_name: "Yom Teruah",
        themes: &["Awakening blast", "New year", "Gathering"],
        observance: "A day of trumpet blasts and solemn rest on the first of the seventh month.",
        ot_refs: &["Leviticus 23:23-25", "Numbers 29:1-6"],
        nt_refs: &["1 Thessalonians 4:16"],
        category: "fall",
        pilgrimage: false,
    },
    Feast {
        id: "atonement",
        english_name: "Day of Atonement",
        hebrew_name: "Yom Kippur",
        themes: &["Atonement", "Repentance", "The scapegoat"],
        observance: "A solemn fast; the one day the high priest entered the Most Holy Place.",
        ot_refs: &["Leviticus 16", "Leviticus 23:26-32"],
        nt_refs: &["Hebrews 9:11-14"],
        category: "fall",
        pilgrimage: false,
    },
    Feast {
        id: "tabernacles",
        english_name: "Tabernacles",
        hebrew_name: "Sukkot",
        themes: &["Ingathering", "Dwelling with God", "Wilderness journey"],
        observance: "Seven days dwelling in booths, remembering the wilderness years.",
        ot_refs: &["Leviticus 23:33-43", "Deuteronomy 16:13-15"],
        nt_refs: &["John 7:2, 37-39", "Revelation 21:3"],
        category: "fall",
        pilgrimage: true,
    },
    Feast {
        id: "purim",
        english_name: "Purim",
        hebrew_name: "Purim",
        themes: &["Deliverance in exile", "Providence"],
        observance: "Reading of Esther, feasting, and gifts to the poor.",
        ot_refs: &["Esther 9:20-28"],
        nt_refs: &[],
        category: "post-exilic",
        pilgrimage: false,
    },
    Feast {
        id: "hanukkah",
        english_name: "Hanukkah (Dedication)",
        hebrew_name: "Chanukah",
        themes: &["Rededication of the temple", "Light"],
        observance: "Eight days of lights commemorating the Maccabean cleansing of the temple.",
        ot_refs: &["1 Maccabees 4:52-59"],
        nt_refs: &["John 10:22-23"],
        category: "second-temple",
        pilgrimage: false,
    },
    Feast {
        id: "sabbath",
        english_name: "Sabbath",
        hebrew_name: "Shabbat",
        themes: &["Rest", "Creation", "Covenant sign"],
        observance: "The weekly day of rest, remembering creation and redemption.",
        ot_refs: &["Genesis 2:2-3", "Exodus 20:8-11"],
        nt_refs: &["Mark 2:27-28", "Hebrews 4:9-10"],
        category: "weekly",
        pilgrimage: false,
    },
    Feast {
        id: "new_moons",
        english_name: "New Moon",
        hebrew_name: "Rosh Chodesh",
        themes: &["Beginnings", "Marking sacred time"],
        observance: "Trumpets and offerings marking the start of each Hebrew month.",
        ot_refs: &["Numbers 10:10", "Psalm 81:3"],
        nt_refs: &["Colossians 2:16-17"],
        category: "monthly",
        pilgrimage: false,
    },
];

/// Keyword -> feast id routing.
const KEYWORD_MAP: &[(&str, &str)] = &[
    ("passover", "passover"),
    ("pesach", "passover"),
    ("unleavened", "unleavened_bread"),
    ("matzot", "unleavened_bread"),
    ("firstfruits", "firstfruits"),
    ("bikkurim", "firstfruits"),
    ("pentecost", "weeks"),
    ("shavuot", "weeks"),
    ("weeks", "weeks"),
    ("trumpets", "trumpets"),
    ("yom teruah", "trumpets"),
    ("rosh hashana", "trumpets"),
    ("atonement", "atonement"),
    ("yom kippur", "atonement"),
    ("tabernacles", "tabernacles"),
    ("sukkot", "tabernacles"),
    ("booths", "tabernacles"),
    ("purim", "purim"),
    ("hanukkah", "hanukkah"),
    ("chanukah", "hanukkah"),
    ("dedication", "hanukkah"),
    ("sabbath", "sabbath"),
    ("shabbat", "sabbath"),
    ("new moon", "new_moons"),
    ("rosh chodesh", "new_moons"),
];

const GENERAL_KEYWORDS: &[&str] = &[
    "feast",
    "holiday",
    "hebrew calendar",
    "biblical calendar",
    "appointed time",
    "moedim",
];

const OVERVIEW: &str = "The Biblical feast days (moedim, \"appointed times\") are sacred \
calendar events established in Leviticus 23 and throughout the Torah. They serve as memorial \
markers of redemptive acts, agricultural celebrations tied to the land, prophetic patterns, \
communal worship gatherings, and teaching tools about covenant relationship. The spring \
feasts center on redemption and firstfruits; the fall feasts on repentance and ingathering.";

#[derive(Default)]
pub struct FeastIndex;

impl FeastIndex {
    pub fn new() -> Self {
        Self
    }

    /// Whether a query is about feast days at all.
    pub fn is_feast_query(&self, query: &str) -> bool {
        let lower = query.to_lowercase();
        KEYWORD_MAP.iter().any(|(kw, _)| lower.contains(kw))
            || GENERAL_KEYWORDS.iter().any(|kw| lower.contains(kw))
    }

    /// Answer a feast-day query, or `None` when nothing matches.
    pub fn answer(&self, query: &str) -> Option<String> {
        let lower = query.to_lowercase();

        for (keyword, id) in KEYWORD_MAP {
            if lower.contains(keyword) {
                let feast = FEASTS.iter().find(|f| f.id == *id)?;
                return Some(format_feast(feast));
            }
        }

        if GENERAL_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            let mut answer = format!("{OVERVIEW}\n\nThe major Biblical feasts include:\n\n");
            for feast in FEASTS.iter().take(8) {
                answer.push_str(&format!(
                    "• **{}** ({}): {}\n",
                    feast.english_name,
                    feast.hebrew_name,
                    feast.themes.join(", ")
                ));
            }
            answer.push_str("\nWould you like to know more about a specific feast day?");
            return Some(answer);
        }

        None
    }

    /// The metadata kind feast answers carry.
    pub fn answer_kind(&self) -> AnswerKind {
        AnswerKind::FeastDay
    }
}

fn format_feast(feast: &Feast) -> String {
    let mut out = format!("**{}** ({})\n\n", feast.english_name, feast.hebrew_name);

    if !feast.themes.is_empty() {
        out.push_str(&format!("**Themes:** {}\n\n", feast.themes.join(", ")));
    }
    out.push_str(&format!("**Observance:** {}\n\n", feast.observance));

    if !feast.ot_refs.is_empty() {
        out.push_str("**Primary Scripture References:**\n");
        for r in feast.ot_refs {
            out.push_str(&format!("• {r}\n"));
        }
        out.push('\n');
    }
    if !feast.nt_refs.is_empty() {
        out.push_str("**New Testament Fulfillment:**\n");
        for r in feast.nt_refs {
            out.push_str(&format!("• {r}\n"));
        }
        out.push('\n');
    }
    if feast.pilgrimage {
        out.push_str(
            "**Note:** This is one of the three pilgrimage festivals where Israelites were \
             commanded to appear before the LORD in Jerusalem (see Deuteronomy 16).\n",
        );
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_routes_to_feast() {
        let index = FeastIndex::new();
        let answer = index.answer("tell me about yom kippur").unwrap();
        assert!(answer.contains("Day of Atonement"));
        assert!(answer.contains("Leviticus 16"));
    }

    #[test]
    fn pilgrimage_feasts_carry_the_note() {
        let index = FeastIndex::new();
        let answer = index.answer("what is sukkot").unwrap();
        assert!(answer.contains("pilgrimage festivals"));
        let answer = index.answer("what is purim").unwrap();
        assert!(!answer.contains("pilgrimage festivals"));
    }

    #[test]
    fn generic_feast_query_gets_overview() {
        let index = FeastIndex::new();
        let answer = index.answer("what are the appointed times").unwrap();
        assert!(answer.contains("moedim"));
        assert!(answer.contains("Passover"));
    }

    #[test]
    fn unrelated_query_is_none() {
        let index = FeastIndex::new();
        assert!(!index.is_feast_query("who is Paul"));
        assert!(index.answer("who is Paul").is_none());
    }
}

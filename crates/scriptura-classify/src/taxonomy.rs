//! The question taxonomy as data.
//!
//! Every (category, subcategory, pattern) triple lives in one flat rule
//! table evaluated uniformly — adding a category is a data change, not
//! new control flow.

use std::sync::LazyLock;

use regex::Regex;

use scriptura_core::Category;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect("taxonomy regex is valid"));
    };
}

/// One taxonomy rule: a subcategory with its trigger patterns.
pub struct TaxonomyRule {
    pub category: Category,
    pub subcategory: &'static str,
    pub patterns: &'static [&'static LazyLock<Regex>],
    pub examples: &'static [&'static str],
}

// ── Scripture ──────────────────────────────────────────────────────────
pattern!(WHO_1, r"(?i)^who (?:is|was|were|are)\b");
pattern!(WHO_2, r"(?i)\bwho (?:wrote|authored|penned)\b");
pattern!(WHO_3, r"(?i)^identify\b.*person");

pattern!(DEF_1, r"(?i)^what (?:is|was|are|were)\b");
pattern!(DEF_2, r"(?i)^define\b");
pattern!(DEF_3, r"(?i)^definition of\b");
pattern!(DEF_4, r"(?i)^meaning of\b");
pattern!(DEF_5, r"(?i)\bwhat does .* mean\b");

pattern!(WHERE_1, r"(?i)^where (?:is|was|were|are)\b");
pattern!(WHERE_2, r"(?i)^locate\b");
pattern!(WHERE_3, r"(?i)\bgeography of\b");
pattern!(WHERE_4, r"(?i)\bwhere did .* happen\b");

pattern!(WHEN_1, r"(?i)^when (?:did|was|were|is)\b");
pattern!(WHEN_2, r"(?i)\btimeline of\b");
pattern!(WHEN_3, r"(?i)\bdate of\b");
pattern!(WHEN_4, r"(?i)\bwhat year\b");

pattern!(WHY_1, r"(?i)^why (?:did|does|is|was)\b");
pattern!(WHY_2, r"(?i)\breason (?:for|behind)\b");
pattern!(WHY_3, r"(?i)\bwhat caused\b");
pattern!(WHY_4, r"(?i)\bcausation\b");

pattern!(INTERP_1, r"(?i)\binterpret\b");
pattern!(INTERP_2, r"(?i)\bexplain\b.*(?:verse|passage|chapter|scripture)\b");
pattern!(INTERP_3, r"(?i)\bwhat does .* mean\?$");
pattern!(INTERP_4, r"(?i)\bexegesis of\b");
pattern!(INTERP_5, r"(?i)\bmeaning of .* verse\b");
pattern!(INTERP_6, r"(?i)\bbreak down\b");

pattern!(LANG_1, r"(?i)\b(?:greek|hebrew|aramaic|original language)\b");
pattern!(LANG_2, r"(?i)\bwhat (?:is|does) the (?:greek|hebrew)\b");
pattern!(LANG_3, r"(?i)\b(?:lxx|septuagint) (?:phrasing|wording|translation)\b");
pattern!(LANG_4, r"(?i)\bstrong'?s\b");
pattern!(LANG_5, r"(?i)\bmorphology\b");
pattern!(LANG_6, r"(?i)\bword study\b");

pattern!(XREF_1, r"(?i)\bcross[- ]?ref(?:erence)?s?\b");
pattern!(XREF_2, r"(?i)\brelated (?:verses|passages)\b");
pattern!(XREF_3, r"(?i)\bshow (?:me )?(?:all )?verses (?:about|on)\b");
pattern!(XREF_4, r"(?i)\bwhere (?:else|in scripture)\b");
pattern!(XREF_5, r"(?i)\bparallel passages\b");
pattern!(XREF_6, r"(?i)\bconnect(?:ed|ing) verses\b");

pattern!(CMP_1, r"(?i)\bcompare (?:translations|versions)\b");
pattern!(CMP_2, r"(?i)\b(?:kjv|niv|esv|nasb|nlt|web|asv) vs (?:kjv|niv|esv|nasb|nlt|web|asv)\b");
pattern!(CMP_3, r"(?i)\b(?:kjv|niv|esv|nasb|nlt) and (?:lxx|septuagint|masoretic|wlc)\b");
pattern!(CMP_4, r"(?i)\bdifferences? between\b.*\b(?:translations?|versions?)\b");
pattern!(CMP_5, r"(?i)\bside[- ]?by[- ]?side\b");

// ── Theology ───────────────────────────────────────────────────────────
pattern!(DOC_1, r"(?i)\b(?:doctrine|doctrinal|systematic theology)\b");
pattern!(DOC_2, r"(?i)\bwhat (?:is|does) (?:the bible|scripture) (?:say|teach) about\b");
pattern!(DOC_3, r"(?i)\b(?:trinity|atonement|justification|sanctification|glorification)\b");
pattern!(DOC_4, r"(?i)\b(?:election|predestination|free will)\b");

pattern!(CHR_1, r"(?i)\b(?:christology|nature of christ|deity of christ)\b");
pattern!(CHR_2, r"(?i)\b(?:was|is) jesus (?:god|divine|human|man)\b");
pattern!(CHR_3, r"(?i)\bhypostatic union\b");
pattern!(CHR_4, r"(?i)\bfirstborn of (?:all )?creation\b");

pattern!(PNE_1, r"(?i)\bholy spirit\b");
pattern!(PNE_2, r"(?i)\bpneumatology\b");
pattern!(PNE_3, r"(?i)\bblasphemy (?:of|against) (?:the )?holy spirit\b");
pattern!(PNE_4, r"(?i)\btongues\b");
pattern!(PNE_5, r"(?i)\bgifts of the spirit\b");

pattern!(SOT_1, r"(?i)\bsalvation\b");
pattern!(SOT_2, r"(?i)\bhow (?:do|does|can) (?:someone|people|one) (?:get|be) saved\b");
pattern!(SOT_3, r"(?i)\blose salvation\b");
pattern!(SOT_4, r"(?i)\beternal security\b");
pattern!(SOT_5, r"(?i)\bonce saved always saved\b");

pattern!(ECC_1, r"(?i)\bchurch\b");
pattern!(ECC_2, r"(?i)\becclesia\b");
pattern!(ECC_3, r"(?i)\bwomen (?:pastors?|elders?|teachers?)\b");
pattern!(ECC_4, r"(?i)\bpastor(?:al)?|elder(?:ship)?\b");

pattern!(ESC_1, r"(?i)\bend times\b");
pattern!(ESC_2, r"(?i)\beschatology\b");
pattern!(ESC_3, r"(?i)\b(?:rapture|tribulation|millennium|second coming)\b");
pattern!(ESC_4, r"(?i)\b(?:pre|mid|post)[- ]?trib(?:ulation)?\b");
pattern!(ESC_5, r"(?i)\bman of lawlessness\b");
pattern!(ESC_6, r"(?i)\bantichrist\b");

// ── History ────────────────────────────────────────────────────────────
pattern!(EARLY_1, r"(?i)\bearly church\b");
pattern!(EARLY_2, r"(?i)\bapostolic fathers\b");
pattern!(EARLY_3, r"(?i)\bchurch fathers\b");
pattern!(EARLY_4, r"(?i)\bwhat did (?:the )?early (?:church|christians) believe\b");
pattern!(EARLY_5, r"(?i)\b(?:nicene|chalcedon|constantinople) (?:council|creed)\b");

pattern!(JEW_1, r"(?i)\bjewish (?:background|context|customs?|tradition)\b");
pattern!(JEW_2, r"(?i)\bsynagogue\b");
pattern!(JEW_3, r"(?i)\b(?:pharisees?|sadducees?|essenes?)\b");
pattern!(JEW_4, r"(?i)\b(?:passover|tabernacles|pentecost)\b");
pattern!(JEW_5, r"(?i)\bsecond temple\b");

pattern!(ANE_1, r"(?i)\b(?:assyria|babylon|egypt|persia|rome)\b");
pattern!(ANE_2, r"(?i)\bcanaanite\b");
pattern!(ANE_3, r"(?i)\bancient near east\b");
pattern!(ANE_4, r"(?i)\b(?:mesopotamia|levant)\b");

pattern!(MSS_1, r"(?i)\b(?:manuscript|codex|papyri)\b");
pattern!(MSS_2, r"(?i)\b(?:sinaiticus|vaticanus|alexandrinus)\b");
pattern!(MSS_3, r"(?i)\btextual (?:criticism|variant|history)\b");
pattern!(MSS_4, r"(?i)\blonger ending of mark\b");

// ── Apologetics ────────────────────────────────────────────────────────
pattern!(REL_1, r"(?i)\b(?:is|are) (?:the )?bible (?:reliable|trustworthy|accurate)\b");
pattern!(REL_2, r"(?i)\bcontradiction(?:s)?\b");
pattern!(REL_3, r"(?i)\berror(?:s)? in (?:the )?bible\b");
pattern!(REL_4, r"(?i)\bdid jesus (?:really )?rise\b");
pattern!(REL_5, r"(?i)\bresurrection (?:evidence|proof)\b");

pattern!(MOR_1, r"(?i)\bwhy did god (?:allow|command|permit)\b");
pattern!(MOR_2, r"(?i)\b(?:slavery|genocide|killing) in (?:the )?bible\b");
pattern!(MOR_3, r"(?i)\bconquest of canaan\b");
pattern!(MOR_4, r"(?i)\bold testament violence\b");

pattern!(SCI_1, r"(?i)\b(?:science|evolution|big bang|age of earth)\b");
pattern!(SCI_2, r"(?i)\bcan (?:a )?christian believe in evolution\b");
pattern!(SCI_3, r"(?i)\bdoes (?:the )?bible contradict science\b");
pattern!(SCI_4, r"(?i)\bgenesis (?:creation|days)\b");

// ── Practical Christian life ───────────────────────────────────────────
pattern!(LIFE_1, r"(?i)\bshould (?:christians?|i|we)\b");
pattern!(LIFE_2, r"(?i)\b(?:is|are) .* (?:a )?sin\b");
pattern!(LIFE_3, r"(?i)\b(?:alcohol|drinking|gambling|smoking)\b");
pattern!(LIFE_4, r"(?i)\bchristian living\b");

pattern!(REL8_1, r"(?i)\b(?:marriage|divorce|dating|singleness)\b");
pattern!(REL8_2, r"(?i)\bhow (?:should|do) i (?:forgive|love)\b");
pattern!(REL8_3, r"(?i)\brelationship(?:s)?\b");

pattern!(GROW_1, r"(?i)\bhow (?:do|can) i (?:overcome|grow|read|pray)\b");
pattern!(GROW_2, r"(?i)\bspiritual (?:growth|discipline|formation)\b");
pattern!(GROW_3, r"(?i)\btemptation\b");
pattern!(GROW_4, r"(?i)\bhow (?:should|do) i read (?:the )?bible\b");

// ── Pastoral ───────────────────────────────────────────────────────────
pattern!(EMO_1, r"(?i)\b(?:depression|anxiety|fear|worry|grief|suffering)\b");
pattern!(EMO_2, r"(?i)\bhow can i trust god\b");
pattern!(EMO_3, r"(?i)\bwhy (?:does|did) god allow (?:this|suffering)\b");

pattern!(GUID_1, r"(?i)\bhow (?:do|can) i know god'?s will\b");
pattern!(GUID_2, r"(?i)\b(?:calling|vocation|direction)\b");
pattern!(GUID_3, r"(?i)\bwhat should i do\b");

// ── Comparative religion ───────────────────────────────────────────────
pattern!(OTH_1, r"(?i)\b(?:islam|muslim|judaism|hindu|buddhism|mormon|jehovah)\b");
pattern!(OTH_2, r"(?i)\bwhat do(?:es)? .* teach\b");
pattern!(OTH_3, r"(?i)\b(?:christianity|christian) vs\b");
pattern!(OTH_4, r"(?i)\bcompare (?:christianity|christian faith) (?:to|with)\b");

pattern!(CULT_1, r"(?i)\b(?:cult(?:s)?|heresy|heresies|gnosticism)\b");
pattern!(CULT_2, r"(?i)\b(?:jehovah'?s witnesses?|mormon(?:s|ism)?|lds)\b");

// ── Paul ───────────────────────────────────────────────────────────────
pattern!(PAUL_1, r"(?i)\bdid paul\b");
pattern!(PAUL_2, r"(?i)\bwhy did paul\b");
pattern!(PAUL_3, r"(?i)\bwas paul\b");
pattern!(PAUL_4, r"(?i)\bpaul'?s (?:journeys?|missions?|letters?|epistles?|ministry)\b");
pattern!(PAUL_5, r"(?i)\bthorn in (?:the )?flesh\b");

/// The full taxonomy, in scan order. Ties keep the first rule found.
pub static RULES: &[TaxonomyRule] = &[
    TaxonomyRule {
        category: Category::Scripture,
        subcategory: "who",
        patterns: &[&WHO_1, &WHO_2, &WHO_3],
        examples: &["Who is Paul?", "Who wrote Hebrews?", "Who are the Pharisees?"],
    },
    TaxonomyRule {
        category: Category::Scripture,
        subcategory: "what_definition",
        patterns: &[&DEF_1, &DEF_2, &DEF_3, &DEF_4, &DEF_5],
        examples: &["What is justification?", "What is the Kingdom of God?"],
    },
    TaxonomyRule {
        category: Category::Scripture,
        subcategory: "where",
        patterns: &[&WHERE_1, &WHERE_2, &WHERE_3, &WHERE_4],
        examples: &["Where is Zion?", "Where did Paul write Romans?"],
    },
    TaxonomyRule {
        category: Category::Scripture,
        subcategory: "when",
        patterns: &[&WHEN_1, &WHEN_2, &WHEN_3, &WHEN_4],
        examples: &["When was Jesus crucified?", "When did Israel enter Canaan?"],
    },
    TaxonomyRule {
        category: Category::Scripture,
        subcategory: "why",
        patterns: &[&WHY_1, &WHY_2, &WHY_3, &WHY_4],
        examples: &["Why did God allow Job to suffer?", "Why did Paul circumcise Timothy?"],
    },
    TaxonomyRule {
        category: Category::Scripture,
        subcategory: "interpretation",
        patterns: &[&INTERP_1, &INTERP_2, &INTERP_3, &INTERP_4, &INTERP_5, &INTERP_6],
        examples: &["What does Romans 9 mean?", "Explain 1 Corinthians 14"],
    },
    TaxonomyRule {
        category: Category::Scripture,
        subcategory: "language",
        patterns: &[&LANG_1, &LANG_2, &LANG_3, &LANG_4, &LANG_5, &LANG_6],
        examples: &["What is the Greek for love?", "Hebrew word ruach"],
    },
    TaxonomyRule {
        category: Category::Scripture,
        subcategory: "cross_reference",
        patterns: &[&XREF_1, &XREF_2, &XREF_3, &XREF_4, &XREF_5, &XREF_6],
        examples: &["What verses connect to John 3:16?", "Show verses about repentance"],
    },
    TaxonomyRule {
        category: Category::Scripture,
        subcategory: "compare_translations",
        patterns: &[&CMP_1, &CMP_2, &CMP_3, &CMP_4, &CMP_5],
        examples: &["Compare KJV vs LXX", "Compare translations"],
    },
    TaxonomyRule {
        category: Category::Theology,
        subcategory: "doctrine",
        patterns: &[&DOC_1, &DOC_2, &DOC_3, &DOC_4],
        examples: &["What is the Trinity?", "Explain justification"],
    },
    TaxonomyRule {
        category: Category::Theology,
        subcategory: "christology",
        patterns: &[&CHR_1, &CHR_2, &CHR_3, &CHR_4],
        examples: &["Was Jesus God or man?", "Deity of Christ"],
    },
    TaxonomyRule {
        category: Category::Theology,
        subcategory: "pneumatology",
        patterns: &[&PNE_1, &PNE_2, &PNE_3, &PNE_4, &PNE_5],
        examples: &["What is blasphemy of the Holy Spirit?", "Are tongues for today?"],
    },
    TaxonomyRule {
        category: Category::Theology,
        subcategory: "soteriology",
        patterns: &[&SOT_1, &SOT_2, &SOT_3, &SOT_4, &SOT_5],
        examples: &["How does someone get saved?", "Can a believer lose salvation?"],
    },
    TaxonomyRule {
        category: Category::Theology,
        subcategory: "ecclesiology",
        patterns: &[&ECC_1, &ECC_2, &ECC_3, &ECC_4],
        examples: &["What is the church?", "Should women be pastors?"],
    },
    TaxonomyRule {
        category: Category::Theology,
        subcategory: "eschatology",
        patterns: &[&ESC_1, &ESC_2, &ESC_3, &ESC_4, &ESC_5, &ESC_6],
        examples: &["What is the millennium?", "Who is the man of lawlessness?"],
    },
    TaxonomyRule {
        category: Category::History,
        subcategory: "early_church",
        patterns: &[&EARLY_1, &EARLY_2, &EARLY_3, &EARLY_4, &EARLY_5],
        examples: &["What did early church believe?", "Apostolic Fathers"],
    },
    TaxonomyRule {
        category: Category::History,
        subcategory: "jewish_background",
        patterns: &[&JEW_1, &JEW_2, &JEW_3, &JEW_4, &JEW_5],
        examples: &["Jewish background", "Synagogue customs"],
    },
    TaxonomyRule {
        category: Category::History,
        subcategory: "ancient_near_east",
        patterns: &[&ANE_1, &ANE_2, &ANE_3, &ANE_4],
        examples: &["Canaanite religions", "Assyria relationship to Israel"],
    },
    TaxonomyRule {
        category: Category::History,
        subcategory: "manuscript_history",
        patterns: &[&MSS_1, &MSS_2, &MSS_3, &MSS_4],
        examples: &["What is Codex Sinaiticus?", "Manuscript support"],
    },
    TaxonomyRule {
        category: Category::Apologetics,
        subcategory: "reliability",
        patterns: &[&REL_1, &REL_2, &REL_3, &REL_4, &REL_5],
        examples: &["Is the Bible reliable?", "Why are there contradictions?"],
    },
    TaxonomyRule {
        category: Category::Apologetics,
        subcategory: "moral_objections",
        patterns: &[&MOR_1, &MOR_2, &MOR_3, &MOR_4],
        examples: &["Why did God allow slavery?", "God command conquest of Canaan"],
    },
    TaxonomyRule {
        category: Category::Apologetics,
        subcategory: "science",
        patterns: &[&SCI_1, &SCI_2, &SCI_3, &SCI_4],
        examples: &["Bible and science", "Can Christians believe in evolution?"],
    },
    TaxonomyRule {
        category: Category::Practical,
        subcategory: "lifestyle",
        patterns: &[&LIFE_1, &LIFE_2, &LIFE_3, &LIFE_4],
        examples: &["Should Christians drink alcohol?", "Is gambling a sin?"],
    },
    TaxonomyRule {
        category: Category::Practical,
        subcategory: "relationships",
        patterns: &[&REL8_1, &REL8_2, &REL8_3],
        examples: &["What does Bible say about marriage?", "How should I forgive?"],
    },
    TaxonomyRule {
        category: Category::Practical,
        subcategory: "spiritual_growth",
        patterns: &[&GROW_1, &GROW_2, &GROW_3, &GROW_4],
        examples: &["How do I overcome temptation?", "How should I read the Bible?"],
    },
    TaxonomyRule {
        category: Category::Pastoral,
        subcategory: "emotional",
        patterns: &[&EMO_1, &EMO_2, &EMO_3],
        examples: &["What does Bible say about depression?", "Trust God in suffering"],
    },
    TaxonomyRule {
        category: Category::Pastoral,
        subcategory: "guidance",
        patterns: &[&GUID_1, &GUID_2, &GUID_3],
        examples: &["How do I know God's will?", "What should I do if discouraged?"],
    },
    TaxonomyRule {
        category: Category::ComparativeReligion,
        subcategory: "other_religions",
        patterns: &[&OTH_1, &OTH_2, &OTH_3, &OTH_4],
        examples: &["Islam vs Christianity", "What do Mormons believe?"],
    },
    TaxonomyRule {
        category: Category::ComparativeReligion,
        subcategory: "cults",
        patterns: &[&CULT_1, &CULT_2],
        examples: &["What do Jehovah's Witnesses believe?", "What is Gnosticism?"],
    },
    TaxonomyRule {
        category: Category::Paul,
        subcategory: "general",
        patterns: &[&PAUL_1, &PAUL_2, &PAUL_3, &PAUL_4, &PAUL_5],
        examples: &["Did Paul contradict Jesus?", "Paul's thorn in flesh"],
    },
];

/// Subcategories whose matches are suppressed when a competing signal is
/// present, to keep biographical questions out of doctrinal rules.
pub static NEGATIVE_KEYWORDS: &[(&str, &[&str])] = &[
    ("soteriology", &["paul", "who is", "biographical", "history of"]),
    ("cross_reference", &["who is", "when did", "where is"]),
];

/// Surface forms too ambiguous to classify; they must short-circuit to a
/// clarification prompt before the taxonomy scan runs.
pattern!(AMB_1, r"(?i)^explain this$");
pattern!(AMB_2, r"(?i)^what does this mean\??$");
pattern!(AMB_3, r"(?i)^tell me about$");
pattern!(AMB_4, r"(?i)^show me$");
pattern!(AMB_5, r"(?i)^this verse$");

pub static AMBIGUOUS_PATTERNS: &[&LazyLock<Regex>] = &[&AMB_1, &AMB_2, &AMB_3, &AMB_4, &AMB_5];

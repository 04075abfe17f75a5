//! Built-in sample content for the demo pages.
//!
//! The catalogue is static; report cards are generated from a fixed seed so
//! every run shows the same cards.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const DEFAULT_SEED: u64 = 42;

/// A named piece of sample content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub name: &'static str,
    pub text: &'static str,
    pub is_html: bool,
}

pub static SAMPLES: Lazy<Vec<Sample>> = Lazy::new(|| {
    vec![
        Sample {
            name: "Plain paragraph",
            text: "Long text is clipped to a fixed number of rows and finished with an \
                   ellipsis and a link that expands it in place. The cut point is found by \
                   measuring candidate prefixes with the same font and width as the visible \
                   text, so the ellipsis lands exactly at the end of the last row no matter \
                   how the window is resized. Click expand to read everything, collapse to \
                   fold it back.",
            is_html: false,
        },
        Sample {
            name: "Rich text",
            text: "<p>Markup is cut by <b>visible characters</b>, never inside a tag, and \
                   every element left open at the cut is <i>closed again</i> so the shown \
                   fragment stays well formed. Entities such as &amp;, &lt; and &hellip; \
                   count as one character.</p><p>Links like <a href=\"#\">this one</a>, \
                   <code>inline code</code> and <s>struck text</s> keep their styling right \
                   up to the cut.</p>",
            is_html: true,
        },
        Sample {
            name: "Mixed scripts",
            text: "多字节文本按字符截断，不会把一个字拆开。Multibyte text is cut on \
                   character boundaries, so no glyph is ever split in half. Ελληνικά, \
                   русский и עברית work the same way.",
            is_html: false,
        },
    ]
});

/// HTML shown on the About page.
pub const ABOUT_HTML: &str = "<h3>About</h3>\
<p>This demo hosts a text-ellipsis widget for <b>egui</b>. Given some content and a \
row budget it shows the longest prefix that fits, followed by an ellipsis mark and an \
<i>expand</i> link.</p>\
<ul><li>Plain text is cut on character boundaries.</li>\
<li>HTML is cut by visible characters; open tags are closed after the cut and void \
elements such as <code>&lt;br&gt;</code> are never closed.</li>\
<li>Changing the content, the labels, the rows or the window width measures again \
after a short delay.</li></ul>\
<p>Set <code>RUST_LOG=rellipsis=debug</code> to watch every measuring pass.</p>";

const TOPICS: &[&str] = &[
    "Quarterly summary",
    "Incident review",
    "Release notes",
    "Design proposal",
    "Customer feedback",
    "Capacity plan",
];

const WORDS: &[&str] = &[
    "latency", "throughput", "rollout", "migration", "cache", "budget", "review", "service",
    "cluster", "regression", "baseline", "dashboard", "customer", "schedule", "storage",
    "release", "incident", "follow-up", "owner", "estimate", "improved", "reduced", "stable",
];

const EMPHASIS: &[&str] = &["b", "i", "code", "u"];

/// One generated report card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCard {
    pub title: String,
    pub body: String,
    pub is_html: bool,
    pub rows: u32,
}

/// Generates report cards from a seeded generator.
pub struct ReportGenerator {
    seed: u64,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self { seed: DEFAULT_SEED }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates `count` cards; every other card uses HTML.
    pub fn generate(&self, count: usize) -> Vec<ReportCard> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..count)
            .map(|index| {
                let topic = TOPICS.choose(&mut rng).copied().unwrap_or("Report");
                let is_html = index % 2 == 1;
                let sentences = rng.gen_range(3..=9);
                let body = (0..sentences)
                    .map(|_| sentence(&mut rng, is_html))
                    .collect::<Vec<_>>()
                    .join(" ");
                ReportCard {
                    title: format!("{} #{}", topic, index + 1),
                    body: if is_html { format!("<p>{}</p>", body) } else { body },
                    is_html,
                    rows: rng.gen_range(1..=4),
                }
            })
            .collect()
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn sentence(rng: &mut StdRng, is_html: bool) -> String {
    let len = rng.gen_range(6..=14);
    let mut words: Vec<String> = (0..len)
        .map(|_| WORDS.choose(rng).copied().unwrap_or("word").to_string())
        .collect();

    if is_html && rng.gen_bool(0.5) {
        let at = rng.gen_range(0..words.len());
        let tag = EMPHASIS.choose(rng).copied().unwrap_or("b");
        words[at] = format!("<{tag}>{}</{tag}>", words[at]);
    }

    let mut text = words.join(" ");
    if let Some(first) = text.get(..1) {
        text.replace_range(..1, &first.to_uppercase());
    }
    text.push('.');
    text
}

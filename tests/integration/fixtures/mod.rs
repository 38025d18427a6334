// Test fixtures with Tesserae-style texts and expected outputs
// WHY: Golden-file testing requires deterministic input/output pairs for validation

#![allow(dead_code)]

/// Minimal two-paragraph document with citation markers
pub const SIMPLE_TEXT: &str = "<Author 1.1.0> Word1 word2.\nWord3 word4.\n\n<Author 1.2.0> Word5.\n";

/// Expected normalized text for SIMPLE_TEXT
pub const SIMPLE_NORMALIZED: &str = "Word1 word2.\nWord3 word4.\n\nWord5.";

/// Prose document in the one-citation-per-section layout, no paragraph breaks
pub const PROSE_TEXT: &str = "<ach. tat. 1.1.0>\tΣιδὼν ἐπὶ θαλάσσῃ πόλις. Ἀσσυρίων ἡ θάλασσα.
<ach. tat. 1.1.1>\tμήτηρ Φοινίκων ἡ πόλις· Θηβαίων ὁ δῆμος πατήρ.
";

/// Expected sentences for PROSE_TEXT, one per line
pub const PROSE_SENTENCES: &str = "Σιδὼν ἐπὶ θαλάσσῃ πόλις.
Ἀσσυρίων ἡ θάλασσα.
μήτηρ Φοινίκων ἡ πόλις· Θηβαίων ὁ δῆμος πατήρ.";

/// Verse document with book breaks marked by blank lines, like the Homeric poems
pub const VERSE_TEXT: &str = "<hom. il. 1.1> μῆνιν ἄειδε θεὰ Πηληϊάδεω Ἀχιλῆος
<hom. il. 1.2> οὐλομένην, ἣ μυρί’ Ἀχαιοῖς ἄλγε’ ἔθηκε.

<hom. il. 2.1> ἄλλοι μέν ῥα θεοί τε καὶ ἀνέρες ἱπποκορυσταὶ
<hom. il. 2.2> εὗδον παννύχιοι.


";

/// Expected lines for VERSE_TEXT
pub const VERSE_LINES: &str = "μῆνιν ἄειδε θεὰ Πηληϊάδεω Ἀχιλῆος
οὐλομένην, ἣ μυρί’ Ἀχαιοῖς ἄλγε’ ἔθηκε.
ἄλλοι μέν ῥα θεοί τε καὶ ἀνέρες ἱπποκορυσταὶ
εὗδον παννύχιοι.";

/// Generate a large document for memory and throughput checks
pub fn generate_large_text(sections: usize) -> String {
    let mut result = String::new();
    for i in 1..=sections {
        result.push_str(&format!("<gen. 1.{i}> Sententia numero {i} hic est.\n"));
    }
    result
}

//! Bundled fallback catalog, used when no external source answers.

use crate::record::Record;

/// Hero names shipped with the app, in display order.
pub const FALLBACK_HEROES: &[&str] = &[
    "Aamon", "Akai", "Aldous", "Alice", "Alpha", "Alucard", "Angela", "Argus", "Argus_old", "Atlas",
    "Aurora", "Badang", "Balmond", "Bane", "Barats", "Baxia", "Belerick", "Beatrix", "Bruno", "Brody",
    "Carmilla", "Chang'e", "Chou", "Claude", "Cyclops", "Diggie", "Eudora", "Esmeralda", "Fanny", "Faramis",
    "Floryn", "Freya", "Gatotkaca", "Gusion", "Guinevere", "Hanabi", "Harith", "Hayabusa", "Helcurt", "Hylos",
    "Irithel", "Ishizu", "Jawhead", "Johnson", "Kadita", "Kagura", "Karina", "Karrie", "Khufra", "Khaleed",
    "Kimmy", "Lancelot", "Lapu-Lapu", "Layla", "Lesley", "Lylia", "Lunox", "Martis", "Minotaur", "Miya",
    "Natan", "Nana", "Natalia", "Odette", "Pharsa", "Roger", "Saber", "Selena", "Silvanna", "Sun",
    "Thamuz", "Uranus", "Vexana", "Valir", "Wanwan", "X.Borg", "Yve", "Yin", "Zilong", "Zip",
];

/// The fallback list as records with placeholder images.
pub fn fallback_catalog(placeholder: &str, wiki_base: &str) -> Vec<Record> {
    FALLBACK_HEROES
        .iter()
        .map(|name| Record::named(*name, placeholder, wiki_base))
        .collect()
}

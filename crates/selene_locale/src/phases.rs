//! Phase names per language, keyed by the engine's canonical tags.

use selene_phase::PhaseName;

use crate::language::Language;

/// Phase names indexed by `[language][phase]`, both in enum order.
#[rustfmt::skip]
const PHASE_NAMES: [[&str; 8]; 8] = [
    // en
    ["New Moon", "Waxing Crescent", "First Quarter", "Waxing Gibbous",
     "Full Moon", "Waning Gibbous", "Last Quarter", "Waning Crescent"],
    // es
    ["Luna Nueva", "Luna Creciente", "Cuarto Creciente", "Gibosa Creciente",
     "Luna Llena", "Gibosa Menguante", "Cuarto Menguante", "Luna Menguante"],
    // fr
    ["Nouvelle Lune", "Premier Croissant", "Premier Quartier", "Gibbeuse Croissante",
     "Pleine Lune", "Gibbeuse Décroissante", "Dernier Quartier", "Dernier Croissant"],
    // de
    ["Neumond", "Zunehmende Sichel", "Erstes Viertel", "Zunehmender Mond",
     "Vollmond", "Abnehmender Mond", "Letztes Viertel", "Abnehmende Sichel"],
    // hi
    ["अमावस्या", "शुक्ल पक्ष प्रारंभ", "प्रथम चरण", "शुक्ल पक्ष",
     "पूर्णिमा", "कृष्ण पक्ष", "अंतिम चरण", "कृष्ण पक्ष अंत"],
    // zh
    ["新月", "娥眉月", "上弦月", "盈凸月",
     "满月", "亏凸月", "下弦月", "残月"],
    // ja
    ["新月", "三日月", "上弦の月", "十三夜月",
     "満月", "寝待月", "下弦の月", "有明月"],
    // it
    ["Luna Nuova", "Luna Crescente", "Primo Quarto", "Gibbosa Crescente",
     "Luna Piena", "Gibbosa Calante", "Ultimo Quarto", "Luna Calante"],
];

/// Display name of a phase in `language`.
pub fn phase_name(phase: PhaseName, language: Language) -> &'static str {
    PHASE_NAMES[language.index()][phase.index() as usize]
}

/// Translate a canonical phase tag such as `"Full Moon"`.
///
/// Unknown tags are returned unchanged.
pub fn translate_phase_tag(tag: &str, language: Language) -> String {
    match PhaseName::from_tag(tag) {
        Some(phase) => phase_name(phase, language).to_string(),
        None => tag.to_string(),
    }
}

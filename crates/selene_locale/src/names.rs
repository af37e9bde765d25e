//! Month, weekday and full-moon names per language.
//!
//! Month indices are zero-based (0 = January), matching
//! `selene_phase::month_moon_data`. Weekday 0 is Sunday.

use crate::language::Language;

#[rustfmt::skip]
const MONTH_NAMES: [[&str; 12]; 8] = [
    ["January", "February", "March", "April", "May", "June",
     "July", "August", "September", "October", "November", "December"],
    ["Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio",
     "Julio", "Agosto", "Septiembre", "Octubre", "Noviembre", "Diciembre"],
    ["Janvier", "Février", "Mars", "Avril", "Mai", "Juin",
     "Juillet", "Août", "Septembre", "Octobre", "Novembre", "Décembre"],
    ["Januar", "Februar", "März", "April", "Mai", "Juni",
     "Juli", "August", "September", "Oktober", "November", "Dezember"],
    ["जनवरी", "फरवरी", "मार्च", "अप्रैल", "मई", "जून",
     "जुलाई", "अगस्त", "सितंबर", "अक्टूबर", "नवंबर", "दिसंबर"],
    ["一月", "二月", "三月", "四月", "五月", "六月",
     "七月", "八月", "九月", "十月", "十一月", "十二月"],
    ["1月", "2月", "3月", "4月", "5月", "6月",
     "7月", "8月", "9月", "10月", "11月", "12月"],
    ["Gennaio", "Febbraio", "Marzo", "Aprile", "Maggio", "Giugno",
     "Luglio", "Agosto", "Settembre", "Ottobre", "Novembre", "Dicembre"],
];

#[rustfmt::skip]
const WEEKDAY_ABBREVS: [[&str; 7]; 8] = [
    ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    ["Do", "Lu", "Ma", "Mi", "Ju", "Vi", "Sá"],
    ["Di", "Lu", "Ma", "Me", "Je", "Ve", "Sa"],
    ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    ["रवि", "सोम", "मंगल", "बुध", "गुरु", "शुक्र", "शनि"],
    ["日", "一", "二", "三", "四", "五", "六"],
    ["日", "月", "火", "水", "木", "金", "土"],
    ["Do", "Lu", "Ma", "Me", "Gi", "Ve", "Sa"],
];

// Traditional North American names for the full moon of each month.
#[rustfmt::skip]
const FULL_MOON_NAMES: [[&str; 12]; 8] = [
    ["Wolf Moon", "Snow Moon", "Worm Moon", "Pink Moon",
     "Flower Moon", "Strawberry Moon", "Buck Moon", "Sturgeon Moon",
     "Harvest Moon", "Hunter's Moon", "Beaver Moon", "Cold Moon"],
    ["Luna del Lobo", "Luna de Nieve", "Luna del Gusano", "Luna Rosa",
     "Luna de las Flores", "Luna de Fresa", "Luna del Ciervo", "Luna del Esturión",
     "Luna de la Cosecha", "Luna del Cazador", "Luna del Castor", "Luna Fría"],
    ["Lune du Loup", "Lune des Neiges", "Lune du Ver", "Lune Rose",
     "Lune des Fleurs", "Lune de Fraise", "Lune du Cerf", "Lune de l'Esturgeon",
     "Lune des Moissons", "Lune du Chasseur", "Lune du Castor", "Lune Froide"],
    ["Wolfsmond", "Schneemond", "Wurmmond", "Rosa Mond",
     "Blumenmond", "Erdbeermond", "Hirschmond", "Störmond",
     "Erntemond", "Jägermond", "Bibermond", "Kalter Mond"],
    ["भेड़िया चंद्रमा", "बर्फ चंद्रमा", "कीड़ा चंद्रमा", "गुलाबी चंद्रमा",
     "फूल चंद्रमा", "स्ट्रॉबेरी चंद्रमा", "हिरण चंद्रमा", "स्टर्जन चंद्रमा",
     "फसल चंद्रमा", "शिकारी चंद्रमा", "बीवर चंद्रमा", "ठंडा चंद्रमा"],
    ["狼月", "雪月", "虫月", "粉月",
     "花月", "草莓月", "鹿月", "鲟鱼月",
     "收获月", "猎月", "海狸月", "寒月"],
    ["ウルフムーン", "スノームーン", "ワームムーン", "ピンクムーン",
     "フラワームーン", "ストロベリームーン", "バックムーン", "スタージョンムーン",
     "ハーベストムーン", "ハンターズムーン", "ビーバームーン", "コールドムーン"],
    ["Luna del Lupo", "Luna della Neve", "Luna del Verme", "Luna Rosa",
     "Luna dei Fiori", "Luna della Fragola", "Luna del Cervo", "Luna dello Storione",
     "Luna del Raccolto", "Luna del Cacciatore", "Luna del Castoro", "Luna Fredda"],
];

/// Month name for a zero-based month index.
pub fn month_name(language: Language, month_index: u32) -> Option<&'static str> {
    MONTH_NAMES[language.index()]
        .get(month_index as usize)
        .copied()
}

/// Two-or-three letter weekday label, 0 = Sunday.
pub fn weekday_abbrev(language: Language, weekday: u32) -> Option<&'static str> {
    WEEKDAY_ABBREVS[language.index()]
        .get(weekday as usize)
        .copied()
}

/// Folk name of the full moon falling in a zero-based month.
pub fn full_moon_name(language: Language, month_index: u32) -> Option<&'static str> {
    FULL_MOON_NAMES[language.index()]
        .get(month_index as usize)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::ALL_LANGUAGES;

    #[test]
    fn english_tables() {
        assert_eq!(month_name(Language::En, 0), Some("January"));
        assert_eq!(month_name(Language::En, 11), Some("December"));
        assert_eq!(weekday_abbrev(Language::En, 0), Some("Su"));
        assert_eq!(full_moon_name(Language::En, 9), Some("Hunter's Moon"));
    }

    #[test]
    fn localized_full_moons() {
        assert_eq!(full_moon_name(Language::De, 0), Some("Wolfsmond"));
        assert_eq!(full_moon_name(Language::It, 11), Some("Luna Fredda"));
    }

    #[test]
    fn out_of_range_is_none() {
        assert_eq!(month_name(Language::Fr, 12), None);
        assert_eq!(weekday_abbrev(Language::Fr, 7), None);
        assert_eq!(full_moon_name(Language::Fr, 12), None);
    }

    #[test]
    fn all_tables_complete() {
        for l in ALL_LANGUAGES {
            for m in 0..12 {
                assert!(month_name(l, m).is_some_and(|s| !s.is_empty()));
                assert!(full_moon_name(l, m).is_some_and(|s| !s.is_empty()));
            }
            for d in 0..7 {
                assert!(weekday_abbrev(l, d).is_some_and(|s| !s.is_empty()));
            }
        }
    }
}

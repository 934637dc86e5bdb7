// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;

// a-z without q, x, z.
pub static DEFAULT_LETTERS: &str = "abcdefghijklmnoprstuvwy";

pub trait AlphabetProvider {
    // letters used to fill squares not covered by any word.
    fn letters(&self, language_code: &str) -> &str;
}

pub struct StaticAlphabetProvider<'a> {
    languages: &'a [(&'a str, &'a str)],
    fallback: &'a str,
}

impl<'a> StaticAlphabetProvider<'a> {
    pub const fn new(languages: &'a [(&'a str, &'a str)], fallback: &'a str) -> Self {
        Self {
            languages,
            fallback,
        }
    }

    pub fn knows(&self, language_code: &str) -> bool {
        self.languages
            .iter()
            .any(|(code, _)| code.eq_ignore_ascii_case(language_code))
    }
}

impl AlphabetProvider for StaticAlphabetProvider<'_> {
    fn letters(&self, language_code: &str) -> &str {
        match self
            .languages
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(language_code))
        {
            Some((_, letters)) => letters,
            None => {
                log::warn!(
                    "language {:?} not recognized, falling back to {:?}",
                    language_code,
                    self.fallback
                );
                self.fallback
            }
        }
    }
}

// ISO 639-1 codes.
pub static LANGUAGE_ALPHABETS: StaticAlphabetProvider = StaticAlphabetProvider::new(
    &[
        ("EN", DEFAULT_LETTERS),
        ("ES", DEFAULT_LETTERS),
        ("FR", "abcdefghijklmnoprstuvwyéàèùâêîôûçëïü"),
        ("IT", "abcdefghijklmnoprstuvwyàèéìòóù"),
        ("DE", "abcdefghijklmnoprstuvwyäöüß"),
        (
            "JA",
            "アカサタナイキシチニウクスツヌエケセテネオコソトノハマヤラワヒミリヰフムユルンヘメレヱホモヨロヲガザダバパギジヂビピグズヅブプゲゼデベペゴゾドボポ",
        ),
        (
            "ZH",
            "安吧爸八百北不大岛的弟地东都对多儿二方港哥个关贵国过海好很会家见叫姐京九可老李零六吗妈么没美妹们明名哪那南你您朋七起千去人认日三上谁什生师识十是四他她台天湾万王我五西息系先香想小谢姓休学也一亿英友月再张这中字",
        ),
        (
            "HI",
            "अआएईऍऎऐइओऑऒऊऔउबभचछडढफफ़गघग़हजझकखख़लळऌऴॡमनङञणऩॐपक़रऋॠऱसशषटतठदथधड़ढ़वयय़ज़",
        ),
        ("ID", DEFAULT_LETTERS),
        ("NL", "abcdefghijklmnoprstuvwyáéíóúàèëïöüĳ"),
        ("PL", "abcdefghijklmnoprstuvwyąćęłńóśżź"),
        ("PT", "abcdefghijklmnoprstuvwyàáâãçéêíóôõú"),
        ("RU", "абвгдеёжзийклмнопрстуфхцчшщъыьэюя"),
        (
            "KO",
            "ㄱㄴㄷㄹㅁㅂㅅㅇㅈㅊㅋㅌㅍㅎㅏㅓㅗㅜㅡㅣㅑㅕㅛㅠㄲㄸㅃㅆㅉㄳㄵㄶㄺㄻㄼㄽㄾㄿㅀㅄㅐㅒㅔㅖㅢㅘㅙㅚㅝㅞㅟ",
        ),
    ],
    DEFAULT_LETTERS,
);

// picks are uniform over chars, not bytes. combining marks count as their own letter.
#[derive(Clone, Debug)]
pub struct FillAlphabet {
    letters: Box<[char]>,
}

impl FillAlphabet {
    pub fn new(letters: &str) -> Self {
        Self {
            letters: letters.chars().collect(),
        }
    }

    pub fn from_provider(provider: &dyn AlphabetProvider, language_code: &str) -> Self {
        Self::new(provider.letters(language_code))
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline(always)]
    pub fn pick(&self, rng: &mut dyn RngCore) -> char {
        self.letters[rng.random_range(0..self.letters.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_letters() {
        assert_eq!(DEFAULT_LETTERS.chars().count(), 23);
        for c in ['q', 'x', 'z'] {
            assert!(!DEFAULT_LETTERS.contains(c));
        }
    }

    #[test]
    fn test_known_language() {
        assert!(LANGUAGE_ALPHABETS.knows("fr"));
        assert!(LANGUAGE_ALPHABETS.letters("FR").contains('ç'));
        assert_eq!(LANGUAGE_ALPHABETS.letters("EN"), DEFAULT_LETTERS);
    }

    #[test]
    fn test_unknown_language_falls_back() {
        assert!(!LANGUAGE_ALPHABETS.knows("XX"));
        assert_eq!(LANGUAGE_ALPHABETS.letters("XX"), DEFAULT_LETTERS);
    }

    #[test]
    fn test_pick_counts_chars() {
        let letters = LANGUAGE_ALPHABETS.letters("RU");
        let alphabet = FillAlphabet::from_provider(&LANGUAGE_ALPHABETS, "RU");
        assert_eq!(alphabet.len(), 33);
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(letters.contains(alphabet.pick(&mut rng)));
        }
    }
}

//! 合成文本生成
//!
//! 城市名、单词、公司名和句子的来源。默认使用 fake crate 的英文词库，
//! 也可以切换到内置的小词表。

use std::str::FromStr;

use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::{Sentence, Word};
use fixture_shared::FixtureError;
use rand::Rng;

/// 合成文本提供者
///
/// 所有方法都从传入的随机源取值，相同种子得到相同文本
pub trait SyntheticTextProvider {
    fn city<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    fn word<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    fn company<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    fn sentence<R: Rng + ?Sized>(&self, rng: &mut R) -> String;
}

/// 基于 fake crate 的文本提供者
#[derive(Debug, Clone, Copy, Default)]
pub struct FakerTextProvider;

impl SyntheticTextProvider for FakerTextProvider {
    fn city<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        CityName().fake_with_rng(rng)
    }

    fn word<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        Word().fake_with_rng(rng)
    }

    fn company<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        CompanyName().fake_with_rng(rng)
    }

    fn sentence<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        Sentence(4..10).fake_with_rng(rng)
    }
}

const CITIES: &[&str] = &[
    "Jakarta",
    "Surabaya",
    "Bandung",
    "Medan",
    "Semarang",
    "Makassar",
    "Palembang",
    "Denpasar",
    "Balikpapan",
    "Pontianak",
    "Manado",
    "Jayapura",
    "Kupang",
    "Ambon",
    "Padang",
    "Pekanbaru",
    "Yogyakarta",
    "Mataram",
];

const WORDS: &[&str] = &[
    "bridge", "harbor", "canal", "school", "clinic", "market", "tower", "station", "reservoir",
    "terminal", "village", "corridor", "plaza", "depot", "garden", "levee", "ring", "river",
    "north", "south", "central", "upper", "lower", "new",
];

const COMPANY_STEMS: &[&str] = &[
    "Wijaya", "Adhi", "Hutama", "Nusantara", "Samudra", "Cipta", "Bangun", "Karya", "Mitra",
    "Sentosa", "Persada", "Jaya",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "Construction",
    "Engineering",
    "Group",
    "Contractors",
    "Infrastructure",
    "Holdings",
];

/// 内置词表文本提供者
///
/// 词汇固定且与本地地名相关，不依赖外部词库
#[derive(Debug, Clone, Copy, Default)]
pub struct WordListTextProvider;

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, words: &[&'a str]) -> &'a str {
    words[rng.random_range(0..words.len())]
}

impl SyntheticTextProvider for WordListTextProvider {
    fn city<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick(rng, CITIES).to_string()
    }

    fn word<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick(rng, WORDS).to_string()
    }

    fn company<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let first = pick(rng, COMPANY_STEMS);
        let second = pick(rng, COMPANY_STEMS);
        let suffix = pick(rng, COMPANY_SUFFIXES);
        if first == second {
            format!("PT {} {}", first, suffix)
        } else {
            format!("PT {} {} {}", first, second, suffix)
        }
    }

    fn sentence<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let len = rng.random_range(4..10);
        let words: Vec<&str> = (0..len).map(|_| pick(rng, WORDS)).collect();
        format!("{}.", capitalize(&words.join(" ")))
    }
}

/// 首字母大写，其余字符保持不变
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 文本提供者种类（对应配置项 dataset.text_provider）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextProviderKind {
    #[default]
    Faker,
    WordList,
}

impl FromStr for TextProviderKind {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "faker" | "fake" => Ok(Self::Faker),
            "word_list" | "wordlist" => Ok(Self::WordList),
            other => Err(FixtureError::invalid_argument(
                "dataset.text_provider",
                format!("不支持的文本生成器: {}，支持: faker, word_list", other),
            )),
        }
    }
}

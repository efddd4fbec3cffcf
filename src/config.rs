//! 词表构造参数。

use crate::{error::ConfigError, utok, MAX_KMER_SIZE};
use std::collections::HashSet;

/// 默认碱基字母表，`\n` 作为填充符参与枚举。
pub const DEFAULT_ALPHABET: &str = "ATGC\n";
/// 默认特殊词：空格、mask、pad、begin、separator、end。
pub const DEFAULT_SPECIAL_TOKENS: &str = " MPBSE";
/// 默认 k-mer 长度。
pub const DEFAULT_KMER_SIZE: usize = 4;

/// k-mer 分词器的不可变配置。
///
/// 字母表和特殊词都是有序的字符序列，顺序决定词序号。
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct KmerConfig {
    kmer_size: usize,
    alphabet: Box<[char]>,
    special_tokens: Box<[char]>,
}

impl Default for KmerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_KMER_SIZE)
    }
}

impl KmerConfig {
    /// 使用默认字母表和特殊词。
    pub fn new(kmer_size: usize) -> Self {
        Self {
            kmer_size,
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            special_tokens: DEFAULT_SPECIAL_TOKENS.chars().collect(),
        }
    }

    pub fn with_alphabet(mut self, alphabet: impl IntoIterator<Item = char>) -> Self {
        self.alphabet = alphabet.into_iter().collect();
        self
    }

    pub fn with_special_tokens(mut self, special: impl IntoIterator<Item = char>) -> Self {
        self.special_tokens = special.into_iter().collect();
        self
    }

    #[inline]
    pub fn kmer_size(&self) -> usize {
        self.kmer_size
    }

    #[inline]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    #[inline]
    pub fn special_tokens(&self) -> &[char] {
        &self.special_tokens
    }

    #[inline]
    pub fn is_special(&self, c: char) -> bool {
        self.special_tokens.contains(&c)
    }

    /// 检查配置是否能构造出合法的词表。
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.kmer_size {
            0 => return Err(ConfigError::ZeroKmerSize),
            k if k > MAX_KMER_SIZE => return Err(ConfigError::KmerTooLarge(k)),
            _ => {}
        }
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        let mut alphabet = HashSet::with_capacity(self.alphabet.len());
        for &c in &*self.alphabet {
            if !alphabet.insert(c) {
                return Err(ConfigError::DuplicateSymbol(c));
            }
        }
        let mut special = HashSet::with_capacity(self.special_tokens.len());
        for &c in &*self.special_tokens {
            if alphabet.contains(&c) {
                return Err(ConfigError::Overlap(c));
            }
            if !special.insert(c) {
                return Err(ConfigError::DuplicateSymbol(c));
            }
        }
        // 词序号必须能用 utok 表示，且不能与 UNK_TOKEN 重合
        match self.checked_vocab_size() {
            Some(size) if size <= utok::MAX as usize => Ok(()),
            _ => Err(ConfigError::VocabTooLarge),
        }
    }

    /// 词表的精确大小：特殊词数 + Σ_{k=1..K} |alphabet|^k，不含空串。
    ///
    /// 溢出时饱和为 `usize::MAX`，[`KmerConfig::validate`] 会拒绝这样的配置。
    pub fn vocab_size(&self) -> usize {
        self.checked_vocab_size().unwrap_or(usize::MAX)
    }

    fn checked_vocab_size(&self) -> Option<usize> {
        let n = self.alphabet.len();
        let mut power = 1usize;
        let mut total = self.special_tokens.len();
        for _ in 0..self.kmer_size {
            power = power.checked_mul(n)?;
            total = total.checked_add(power)?;
        }
        Some(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocab_size() {
        // 6 + 5 + 25 + 125 + 625
        assert_eq!(KmerConfig::default().vocab_size(), 786);
        // 6 + Σ 5^k, k = 1..6
        assert_eq!(KmerConfig::new(6).vocab_size(), 6 + 19530);
    }

    #[test]
    fn rejects_bad_configs() {
        assert_eq!(
            KmerConfig::new(7).validate(),
            Err(ConfigError::KmerTooLarge(7))
        );
        assert_eq!(KmerConfig::new(0).validate(), Err(ConfigError::ZeroKmerSize));
        assert_eq!(
            KmerConfig::new(2).with_alphabet([]).validate(),
            Err(ConfigError::EmptyAlphabet)
        );
        assert_eq!(
            KmerConfig::new(2).with_alphabet("ATGCA".chars()).validate(),
            Err(ConfigError::DuplicateSymbol('A'))
        );
        assert_eq!(
            KmerConfig::new(2).with_special_tokens("MM".chars()).validate(),
            Err(ConfigError::DuplicateSymbol('M'))
        );
        assert_eq!(
            KmerConfig::new(2).with_special_tokens(" A".chars()).validate(),
            Err(ConfigError::Overlap('A'))
        );
        assert_eq!(KmerConfig::new(6).validate(), Ok(()));
    }

    #[test]
    fn rejects_oversized_vocab() {
        // 41^1 + ... + 41^6 超过 u32::MAX
        let config = KmerConfig::new(6)
            .with_alphabet((0x21u8..0x21 + 41).map(char::from))
            .with_special_tokens([]);
        assert!(config.vocab_size() > utok::MAX as usize);
        assert_eq!(config.validate(), Err(ConfigError::VocabTooLarge));

        // 2000^6 溢出 u64
        let config = KmerConfig::new(6)
            .with_alphabet((0x100u32..0x100 + 2000).filter_map(char::from_u32))
            .with_special_tokens([]);
        assert_eq!(config.vocab_size(), usize::MAX);
        assert_eq!(config.validate(), Err(ConfigError::VocabTooLarge));

        // 40^1 + ... + 40^6 仍在范围内
        let config = KmerConfig::new(6)
            .with_alphabet((0x21u8..0x21 + 40).map(char::from))
            .with_special_tokens([]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn special_membership() {
        let config = KmerConfig::default();
        assert!("MPBSE ".chars().all(|c| config.is_special(c)));
        assert!(!DEFAULT_ALPHABET.chars().any(|c| config.is_special(c)));
    }
}

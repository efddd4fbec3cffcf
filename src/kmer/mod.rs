//! k-mer 分词：枚举全部不超过 K 的字母表串作为词表，按 K 个字符贪心切分。

mod builder;
mod sliding;

use crate::{
    config::KmerConfig,
    error::{ConfigError, PersistError},
    progress::Progress,
    utok,
    vocab::Vocab,
    Method, UNK_TOKEN,
};
use tracing::warn;

pub use builder::build_vocab;
pub use sliding::{join_windows, verify_overlaps, Overlap};

pub struct Kmer {
    config: KmerConfig,
    vocab: Vocab,
}

impl Kmer {
    pub fn new(config: KmerConfig) -> Result<Self, ConfigError> {
        Self::with_progress(config, &mut ())
    }

    pub fn with_progress(
        config: KmerConfig,
        progress: &mut impl Progress,
    ) -> Result<Self, ConfigError> {
        let vocab = build_vocab(&config, progress)?;
        Ok(Self { config, vocab })
    }

    /// 使用已有的词表，例如从文件读取的词表。
    ///
    /// 词表必须与 `config` 构造出的词表完全一致，否则切分结果与词表不匹配。
    pub fn from_vocab(config: KmerConfig, vocab: Vocab) -> Result<Self, PersistError> {
        let expected = build_vocab(&config, &mut ())?;
        if expected.len() != vocab.len() {
            return Err(PersistError::Mismatch(format!(
                "expected {} tokens, found {}",
                expected.len(),
                vocab.len(),
            )));
        }
        if let Some(((want, id), (found, _))) =
            expected.iter().zip(vocab.iter()).find(|(a, b)| a != b)
        {
            return Err(PersistError::Mismatch(format!(
                "token {id} should be {want:?}, found {found:?}"
            )));
        }
        Ok(Self { config, vocab })
    }

    #[inline]
    pub fn config(&self) -> &KmerConfig {
        &self.config
    }

    #[inline]
    pub fn vocab(&self) -> &Vocab {
        &self.vocab
    }

    /// 以 K 个字符为窗口、步长为 1 的重叠切分。短于 K 的文本不产生任何窗口。
    pub fn sliding<'t>(&self, text: &'t str) -> Vec<&'t str> {
        sliding::windows(text, self.config.kmer_size())
    }

    /// [`Kmer::sliding`] 的逆操作。
    pub fn join_sliding(&self, pieces: &[&str]) -> String {
        sliding::join_windows(pieces)
    }
}

impl Method for Kmer {
    #[inline]
    fn unk_token(&self) -> utok {
        UNK_TOKEN
    }
    #[inline]
    fn vocab_size(&self) -> usize {
        self.vocab.len()
    }
    #[inline]
    fn internal_special(&self) -> impl IntoIterator<Item = (&str, utok)> {
        // 特殊词总是占据词表的开头
        self.vocab.iter().take(self.config.special_tokens().len())
    }
    fn split<'t>(&self, text: &'t str) -> impl IntoIterator<Item = &'t str> {
        let k = self.config.kmer_size();
        let mut pieces = Vec::with_capacity(text.len().div_ceil(k));
        let mut text = text;
        while !text.is_empty() {
            let end = text.char_indices().nth(k).map_or(text.len(), |(i, _)| i);
            let (piece, tail) = text.split_at(end);
            pieces.push(piece);
            text = tail;
        }
        pieces
    }
    #[inline]
    fn find_piece(&self, piece: &str) -> Option<utok> {
        self.vocab.id(piece)
    }
    fn encode(&self, text: &str) -> impl IntoIterator<Item = utok> + '_ {
        self.split(text)
            .into_iter()
            .map(|piece| {
                self.vocab.id(piece).unwrap_or_else(|| {
                    warn!("unknown token {piece:?}");
                    UNK_TOKEN
                })
            })
            .collect::<Vec<_>>()
    }
    #[inline]
    fn decode(&self, token: utok) -> Option<&str> {
        self.vocab.token(token)
    }
}

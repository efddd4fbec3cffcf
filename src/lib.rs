#![deny(warnings)]

mod config;
mod error;
mod kmer;
mod persist;
mod progress;
mod tokeneer;
mod vocab;

pub use config::{KmerConfig, DEFAULT_ALPHABET, DEFAULT_KMER_SIZE, DEFAULT_SPECIAL_TOKENS};
pub use error::{ConfigError, DecodeError, PersistError};
pub use kmer::{build_vocab, join_windows, verify_overlaps, Kmer, Overlap};
pub use persist::{load_vocab, read_vocab, save_vocab, write_vocab};
pub use progress::Progress;
pub use tokeneer::Tokeneer;
pub use vocab::Vocab;

/// `utok` for token id.
#[allow(non_camel_case_types)]
pub type utok = u32;

/// 词表中不存在的片段编码为此值，它不属于任何词表。
pub const UNK_TOKEN: utok = utok::MAX;

/// 支持的最大 k-mer 长度，5 个字符的字母表在 k = 6 时已有 19530 个词。
pub const MAX_KMER_SIZE: usize = 6;

/// 分词算法。
pub trait Method {
    fn unk_token(&self) -> utok;
    fn vocab_size(&self) -> usize;
    /// 不可再分的特殊词及其词序号。
    fn internal_special(&self) -> impl IntoIterator<Item = (&str, utok)>;
    /// 切分不含特殊词的文本，片段首尾相接覆盖整个文本。
    fn split<'t>(&self, text: &'t str) -> impl IntoIterator<Item = &'t str>;
    fn find_piece(&self, piece: &str) -> Option<utok>;
    /// 编码不含特殊词的文本，不在词表中的片段编码为 [`Method::unk_token`]。
    fn encode(&self, text: &str) -> impl IntoIterator<Item = utok> + '_;
    fn decode(&self, token: utok) -> Option<&str>;
}

//! 分词器的错误类型。

use crate::utok;
use std::path::PathBuf;
use thiserror::Error;

/// 配置无效，只在构造词表时产生。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("kmer size {0} exceeds the supported maximum of {max}", max = crate::MAX_KMER_SIZE)]
    KmerTooLarge(usize),

    #[error("kmer size must be at least 1")]
    ZeroKmerSize,

    #[error("vocab size exceeds the maximum of {max} tokens", max = crate::utok::MAX)]
    VocabTooLarge,

    #[error("alphabet is empty")]
    EmptyAlphabet,

    #[error("symbol {0:?} appears more than once")]
    DuplicateSymbol(char),

    #[error("symbol {0:?} is both an alphabet symbol and a special token")]
    Overlap(char),
}

/// 解码时遇到词表之外的 token。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("token {id} at position {position} is out of range (vocab size {vocab_size})")]
    OutOfRange {
        id: utok,
        position: usize,
        vocab_size: usize,
    },
}

/// 保存或读取持久化词表失败。
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),

    #[error("line {line}: malformed entry {content:?}")]
    Malformed { line: usize, content: String },

    #[error("line {line}: expected id {expected}, found {found}")]
    UnexpectedId {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: duplicate token {token:?}")]
    Duplicate { line: usize, token: String },

    #[error("vocab does not match config: {0}")]
    Mismatch(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

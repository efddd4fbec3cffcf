use crate::{
    config::KmerConfig,
    error::ConfigError,
    progress::Progress,
    vocab::{CollectedVocab, Vocab},
};
use tracing::{debug, info};

/// 按配置枚举全部词，构造词表。
///
/// 词序为：特殊词按配置顺序，然后长度 1 到 K 的全部字母表串，同一长度内按里程表顺序。
pub fn build_vocab(
    config: &KmerConfig,
    progress: &mut impl Progress,
) -> Result<Vocab, ConfigError> {
    config.validate()?;

    let alphabet = config.alphabet();
    let special = config.special_tokens();
    let size = config.vocab_size();
    // 每个字符的 utf-8 长度可能不同，按最长字符估计缓存容量
    let max_char = alphabet.iter().map(|c| c.len_utf8()).max().unwrap_or(1);
    let mut total_len = special.iter().map(|c| c.len_utf8()).sum::<usize>();
    let mut power = 1;
    for k in 1..=config.kmer_size() {
        power *= alphabet.len();
        total_len += power * k * max_char;
    }

    let mut vocab = CollectedVocab::with_capacity(size, total_len);
    let mut count = 0;
    let mut emit = |vocab: &mut CollectedVocab, piece: &str| {
        let pushed = vocab.push(piece);
        debug_assert!(pushed.is_some(), "duplicate piece {piece:?}");
        count += 1;
        progress.update(count, count == size);
    };

    let mut buf = [0u8; 4];
    for &c in special {
        emit(&mut vocab, &*c.encode_utf8(&mut buf));
    }

    let mut piece = String::with_capacity(config.kmer_size() * max_char);
    for k in 1..=config.kmer_size() {
        let before = vocab.len();
        let mut odometer = Odometer::new(alphabet.len(), k);
        loop {
            piece.clear();
            piece.extend(odometer.digits().iter().map(|&d| alphabet[d]));
            emit(&mut vocab, &piece);
            if !odometer.advance() {
                break;
            }
        }
        debug!("enumerated {} pieces of length {k}", vocab.len() - before);
    }

    assert_eq!(vocab.len(), size, "vocab size mismatch with config");
    info!(
        "built kmer vocab: k = {}, alphabet = {}, special = {}, size = {size}",
        config.kmer_size(),
        alphabet.len(),
        special.len(),
    );
    Ok(vocab.finish())
}

/// 以字母表大小为进制的 k 位计数器，最右位变化最快。
struct Odometer {
    base: usize,
    digits: Vec<usize>,
}

impl Odometer {
    fn new(base: usize, len: usize) -> Self {
        Self {
            base,
            digits: vec![0; len],
        }
    }

    #[inline]
    fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// 从最低位开始加一并向左进位。所有位都溢出时返回 `false`。
    fn advance(&mut self) -> bool {
        for d in self.digits.iter_mut().rev() {
            if *d + 1 < self.base {
                *d += 1;
                return true;
            }
            *d = 0;
        }
        false
    }
}

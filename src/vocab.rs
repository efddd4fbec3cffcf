//! 这个模块提供双向词表：词序号到词的顺序表，以及词到词序号的前缀树。
//!
//! 两个方向只能通过 [`CollectedVocab::push`] 同时写入，构造完成后不可变，因此不会失去同步。

use crate::utok;
use patricia_tree::PatriciaMap;
use std::fmt;

/// 不可变的双向词表。
pub struct Vocab {
    /// 保存所有词的字符串内容，按词序首尾相接
    text: Box<str>,
    /// 按 token 顺序保存 (偏移, 长度)
    slices: Box<[(u32, u32)]>,
    /// 词到词序号的前缀树
    trie: PatriciaMap<utok>,
}

impl Vocab {
    #[inline]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// token id -> piece
    #[inline]
    pub fn token(&self, token: utok) -> Option<&str> {
        let &(off, len) = self.slices.get(token as usize)?;
        Some(&self.text[off as usize..][..len as usize])
    }

    /// piece -> token id
    #[inline]
    pub fn id(&self, piece: &str) -> Option<utok> {
        if piece.is_empty() {
            return None;
        }
        self.trie.get(piece).copied()
    }

    /// 按词序号顺序遍历 `(piece, id)`。
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, utok)> + '_ {
        self.slices
            .iter()
            .enumerate()
            .map(|(i, &(off, len))| (&self.text[off as usize..][..len as usize], i as utok))
    }
}

impl PartialEq for Vocab {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl Eq for Vocab {}

impl fmt::Debug for Vocab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vocab")
            .field("len", &self.len())
            .field("bytes", &self.text.len())
            .finish()
    }
}

/// 按词序收集词表。
pub(crate) struct CollectedVocab {
    text: String,
    slices: Vec<(u32, u32)>,
    trie: PatriciaMap<utok>,
}

impl CollectedVocab {
    /// `capacity` 为词数，`total_len` 为全部词的字节数。
    pub fn with_capacity(capacity: usize, total_len: usize) -> Self {
        Self {
            text: String::with_capacity(total_len),
            slices: Vec::with_capacity(capacity),
            trie: PatriciaMap::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// 追加一个词并分配下一个词序号。词为空或已存在时返回 `None`，词表不变。
    pub fn push(&mut self, piece: &str) -> Option<utok> {
        if piece.is_empty() || self.trie.get(piece).is_some() {
            return None;
        }
        let id = self.slices.len() as utok;
        let off = self.text.len();
        self.text.push_str(piece);
        self.slices.push((off as u32, piece.len() as u32));
        self.trie.insert(piece, id);
        Some(id)
    }

    pub fn finish(self) -> Vocab {
        Vocab {
            text: self.text.into_boxed_str(),
            slices: self.slices.into_boxed_slice(),
            trie: self.trie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bidirectional() {
        let mut collected = CollectedVocab::with_capacity(3, 6);
        assert_eq!(collected.push("A"), Some(0));
        assert_eq!(collected.push("AT"), Some(1));
        assert_eq!(collected.push("ATG"), Some(2));
        assert_eq!(collected.push("AT"), None);
        assert_eq!(collected.push(""), None);
        let vocab = collected.finish();

        assert_eq!(vocab.len(), 3);
        for (piece, id) in vocab.iter() {
            assert_eq!(vocab.id(piece), Some(id));
            assert_eq!(vocab.token(id), Some(piece));
        }
        assert_eq!(vocab.token(3), None);
        assert_eq!(vocab.id("ATGC"), None);
        assert_eq!(vocab.id(""), None);
    }
}

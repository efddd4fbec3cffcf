use crate::{error::DecodeError, utok, Method};
use regex::Regex;
use std::collections::HashMap;

/// 分词器：先按特殊词切开文本，特殊词单独成词，其余部分交给分词算法。
pub struct Tokeneer<M> {
    method: M,
    special: HashMap<String, utok>,
    special_regex: Option<Regex>,
}

impl<M: Method> Tokeneer<M> {
    pub fn new(method: M) -> Self {
        let special = method
            .internal_special()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<HashMap<_, _>>();
        let special_regex = build_pattern(special.keys());
        Self {
            method,
            special,
            special_regex,
        }
    }

    /// 贪心切分。片段按顺序首尾相接，恰好覆盖 `text`。
    pub fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut ans = Vec::new();
        let mut start = 0;
        if let Some(regex) = &self.special_regex {
            for m in regex.find_iter(text) {
                ans.extend(self.method.split(&text[start..m.start()]));
                ans.push(m.as_str());
                start = m.end();
            }
        }
        ans.extend(self.method.split(&text[start..]));
        ans
    }

    /// 编码任意文本。不在词表中的片段编码为 `unk_token`，不会中断编码。
    pub fn encode(&self, text: &str) -> Vec<utok> {
        let mut ans = Vec::new();
        let mut start = 0;
        if let Some(regex) = &self.special_regex {
            for m in regex.find_iter(text) {
                ans.extend(self.method.encode(&text[start..m.start()]));
                ans.push(self.special[m.as_str()]);
                start = m.end();
            }
        }
        ans.extend(self.method.encode(&text[start..]));
        ans
    }

    /// 解码，任何越界的 token（包括 `unk_token`）都是错误。
    pub fn decode(&self, tokens: &[utok]) -> Result<String, DecodeError> {
        let mut ans = String::new();
        for piece in self.ids_to_tokens(tokens)? {
            ans.push_str(piece);
        }
        Ok(ans)
    }

    pub fn tokens_to_ids(&self, pieces: &[&str]) -> Vec<utok> {
        pieces
            .iter()
            .map(|piece| {
                self.method
                    .find_piece(piece)
                    .unwrap_or_else(|| self.method.unk_token())
            })
            .collect()
    }

    pub fn ids_to_tokens(&self, tokens: &[utok]) -> Result<Vec<&str>, DecodeError> {
        tokens
            .iter()
            .enumerate()
            .map(|(position, &id)| {
                self.method.decode(id).ok_or(DecodeError::OutOfRange {
                    id,
                    position,
                    vocab_size: self.method.vocab_size(),
                })
            })
            .collect()
    }
}

impl<M> Tokeneer<M> {
    #[inline]
    pub fn internal(&self) -> &M {
        &self.method
    }
}

fn build_pattern<'a>(text: impl IntoIterator<Item = &'a String>) -> Option<Regex> {
    let pattern = text
        .into_iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    if pattern.is_empty() {
        None
    } else {
        // 所有片段都已转义
        Some(Regex::new(&pattern).unwrap())
    }
}

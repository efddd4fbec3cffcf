/// 相邻两个重叠窗口的校验结果。
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Overlap<'a> {
    pub first: &'a str,
    pub second: &'a str,
    /// `first` 去掉首字符后是否等于 `second` 去掉末字符
    pub matched: bool,
}

pub(super) fn windows(text: &str, k: usize) -> Vec<&str> {
    let mut bounds = text.char_indices().map(|(i, _)| i).collect::<Vec<_>>();
    bounds.push(text.len());
    bounds
        .windows(k + 1)
        .map(|w| &text[w[0]..w[k]])
        .collect()
}

/// 由重叠窗口还原序列：取每个窗口的首字符，再接上最后一个窗口的其余部分。
///
/// 空输入还原为空串。
pub fn join_windows(pieces: &[&str]) -> String {
    let Some((last, init)) = pieces.split_last() else {
        return String::new();
    };
    let mut ans = String::with_capacity(init.len() + last.len());
    ans.extend(init.iter().filter_map(|piece| piece.chars().next()));
    ans.push_str(last);
    ans
}

/// 校验一串重叠窗口是否首尾相接，例如 `ATGC` 与 `TGCA`。
pub fn verify_overlaps<'a>(pieces: &[&'a str]) -> Vec<Overlap<'a>> {
    pieces
        .windows(2)
        .map(|w| {
            let (first, second) = (w[0], w[1]);
            let tail = first.char_indices().nth(1).map_or("", |(i, _)| &first[i..]);
            let head = second
                .char_indices()
                .last()
                .map_or("", |(i, _)| &second[..i]);
            Overlap {
                first,
                second,
                matched: tail == head,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_windows() {
        assert_eq!(windows("ATGCA", 4), ["ATGC", "TGCA"]);
        assert_eq!(windows("ATGC", 4), ["ATGC"]);
        assert!(windows("ATG", 4).is_empty());
        assert!(windows("", 1).is_empty());
    }

    #[test]
    fn join_restores_text() {
        for (text, k) in [("GATTACA", 3), ("ATGC", 4), ("ATGCA", 1), ("AéTG\nC", 2)] {
            assert_eq!(join_windows(&windows(text, k)), text);
        }
        assert_eq!(join_windows(&["ATG"]), "ATG");
        assert_eq!(join_windows(&[]), "");
    }

    #[test]
    fn verify_windows() {
        let pieces = windows("ATGCAT", 3);
        assert!(verify_overlaps(&pieces).iter().all(|o| o.matched));

        let report = verify_overlaps(&["ATGC", "GGCA"]);
        assert_eq!(
            report,
            [Overlap {
                first: "ATGC",
                second: "GGCA",
                matched: false,
            }]
        );
        assert!(verify_overlaps(&["ATGC"]).is_empty());
    }
}

//! 构造词表时的进度通知。

/// 进度接收者。每产生一个词调用一次 `update`，`count` 单调递增，最后一次调用 `done` 为真。
///
/// 通知只用于观察，不影响构造顺序和结果。
pub trait Progress {
    fn update(&mut self, count: usize, done: bool);
}

impl Progress for () {
    #[inline]
    fn update(&mut self, _count: usize, _done: bool) {}
}

impl<F: FnMut(usize, bool)> Progress for F {
    #[inline]
    fn update(&mut self, count: usize, done: bool) {
        self(count, done)
    }
}

impl Progress for indicatif::ProgressBar {
    fn update(&mut self, count: usize, done: bool) {
        self.set_position(count as u64);
        if done {
            self.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Kmer, KmerConfig};
    use indicatif::ProgressBar;

    #[test]
    fn progress_bar() {
        let config = KmerConfig::new(3);
        let mut bar = ProgressBar::hidden();
        bar.set_length(config.vocab_size() as u64);
        let kmer = Kmer::with_progress(config, &mut bar).unwrap();
        assert_eq!(bar.position(), kmer.vocab().len() as u64);
        assert!(bar.is_finished());
    }
}

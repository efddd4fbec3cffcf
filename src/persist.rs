//! 词表的文本持久化格式。
//!
//! 每个词一行：`"<piece>" <id>`。词中的换行符写作字母 `n`，词序号从 1 开始。

use crate::{
    error::PersistError,
    vocab::{CollectedVocab, Vocab},
};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};
use tracing::info;

pub fn write_vocab(vocab: &Vocab, mut writer: impl Write) -> std::io::Result<()> {
    for (piece, id) in vocab.iter() {
        let piece = piece.replace(['\n', '\r'], "n");
        writeln!(writer, "\"{piece}\" {}", id as usize + 1)?;
    }
    writer.flush()
}

/// 保存词表，覆盖已存在的文件。
pub fn save_vocab(vocab: &Vocab, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let path = path.as_ref();
    let io_err = |err| PersistError::Io {
        path: path.to_path_buf(),
        err,
    };
    let file = File::create(path).map_err(io_err)?;
    write_vocab(vocab, BufWriter::new(file)).map_err(io_err)?;
    info!("saved {} tokens to {}", vocab.len(), path.display());
    Ok(())
}

/// 解析持久化的词表。
///
/// 词序号必须从 1 开始连续递增；词中的 `n` 还原为换行符，因此字母表本身不能包含 `n`。
pub fn read_vocab(reader: impl BufRead) -> Result<Vocab, PersistError> {
    let mut vocab = CollectedVocab::with_capacity(0, 0);
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let malformed = || PersistError::Malformed {
            line: i + 1,
            content: line.clone(),
        };
        // 词本身可能是空格，因此从右侧找分隔符
        let sep = memchr::memrchr(b' ', line.as_bytes()).ok_or_else(malformed)?;
        let piece = line[..sep]
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .filter(|s| !s.is_empty())
            .ok_or_else(malformed)?;
        let id = line[sep + 1..]
            .parse::<usize>()
            .map_err(|_| malformed())?;

        let expected = vocab.len() + 1;
        if id != expected {
            return Err(PersistError::UnexpectedId {
                line: i + 1,
                expected,
                found: id,
            });
        }
        let piece = piece.replace('n', "\n");
        if vocab.push(&piece).is_none() {
            return Err(PersistError::Duplicate {
                line: i + 1,
                token: piece,
            });
        }
    }
    Ok(vocab.finish())
}

pub fn load_vocab(path: impl AsRef<Path>) -> Result<Vocab, PersistError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| PersistError::Io {
        path: path.to_path_buf(),
        err,
    })?;
    let vocab = read_vocab(BufReader::new(file))?;
    info!("loaded {} tokens from {}", vocab.len(), path.display());
    Ok(vocab)
}

//! # Leitura do Corpus Anotado
//!
//! O corpus chega em formato de duas colunas, um token por linha:
//!
//! ```text
//! قال O
//! الرئيس O
//! بشار PER
//! ```
//!
//! Linhas em branco separam sentenças e são ignoradas. Uma linha sem os
//! dois campos é rejeitada com erro descritivo, nunca descartada em
//! silêncio, para que um corpus corrompido não produza um dataset
//! parcialmente vazio sem ninguém perceber.

use std::fs;
use std::path::Path;

use crate::datum::Datum;
use crate::error::{ArnerError, Result};

/// Lê um corpus anotado de um arquivo.
pub fn read_corpus_file(path: impl AsRef<Path>) -> Result<Vec<Datum>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ArnerError::CorpusRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_corpus_str(&content)
}

/// Lê um corpus anotado de uma string em memória, no mesmo formato do arquivo.
pub fn read_corpus_str(content: &str) -> Result<Vec<Datum>> {
    let mut data = Vec::new();

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        // Divide em sequências de espaço em branco; colunas extras são
        // ignoradas (apenas PALAVRA e LABEL importam).
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some(word), Some(label)) => data.push(Datum::new(word, label)),
            _ => {
                return Err(ArnerError::MalformedLine {
                    line_number: index + 1,
                    content: line.to_string(),
                })
            }
        }
    }

    Ok(data)
}

/// Corpus árabe de exemplo, no formato de duas colunas.
///
/// Usado em testes e na documentação; cobre uma sentença com nome próprio
/// precedido de título e uma segunda sentença com localização.
pub fn sample_corpus() -> &'static str {
    "\
قال O
الرئيس O
بشار PER
الأسد PER
اليوم O

اعلنت O
حكومة O
دمشق LOC
عن O
خطة O
جديدة O
"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_word_and_label_per_line() {
        let data = read_corpus_str("قال O\nبشار PER\n").unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].word, "قال");
        assert_eq!(data[0].label, "O");
        assert_eq!(data[1].word, "بشار");
        assert_eq!(data[1].label, "PER");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let data = read_corpus_str("قال O\n\n   \nبشار PER").unwrap();
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let data = read_corpus_str("بشار PER extra colunas").unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].label, "PER");
    }

    #[test]
    fn test_malformed_line_is_rejected_with_line_number() {
        let err = read_corpus_str("قال O\nسوريا\n").unwrap_err();
        match err {
            ArnerError::MalformedLine {
                line_number,
                content,
            } => {
                assert_eq!(line_number, 2);
                assert_eq!(content, "سوريا");
            }
            other => panic!("erro inesperado: {other}"),
        }
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", sample_corpus()).unwrap();

        let data = read_corpus_file(&path).unwrap();
        assert_eq!(data.len(), 11);
        assert_eq!(data[2].word, "بشار");
        assert_eq!(data[2].label, "PER");
    }

    #[test]
    fn test_missing_file_error() {
        let err = read_corpus_file("/nao/existe/train.txt").unwrap_err();
        assert!(matches!(err, ArnerError::CorpusRead { .. }));
    }
}

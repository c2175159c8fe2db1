//! # Erros do Crate
//!
//! Taxonomia de falhas da preparação de dataset:
//! - léxico ilegível: fatal na inicialização (sem ele as features de
//!   membership ficariam silenciosamente inconsistentes);
//! - linha de corpus mal formada: rejeitada com descrição, nunca
//!   descartada em silêncio;
//! - falhas de serialização: tratadas por registro no escritor.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Erros que podem ocorrer durante a preparação do dataset.
#[derive(Debug, Error)]
pub enum ArnerError {
    /// O recurso do léxico não pôde ser lido na inicialização.
    #[error("falha ao carregar o léxico em {path}: {source}")]
    Lexicon {
        /// Caminho do arquivo de léxico.
        path: PathBuf,
        source: io::Error,
    },

    /// O arquivo de corpus não pôde ser lido.
    #[error("falha ao ler o corpus em {path}: {source}")]
    CorpusRead {
        /// Caminho do arquivo de corpus.
        path: PathBuf,
        source: io::Error,
    },

    /// Linha do corpus sem os dois campos `PALAVRA LABEL` exigidos.
    #[error("linha {line_number} do corpus mal formada (esperado `PALAVRA LABEL`): {content:?}")]
    MalformedLine {
        /// Número da linha no arquivo, começando em 1.
        line_number: usize,
        /// Conteúdo bruto da linha rejeitada.
        content: String,
    },

    /// Falha ao converter um registro para JSON.
    #[error("falha ao serializar registro: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Palavra serializada com base64 inválido.
    #[error("palavra com codificação base64 inválida: {0}")]
    WordDecode(#[from] base64::DecodeError),

    /// Palavra decodificada não é UTF-8 válido.
    #[error("palavra decodificada não é UTF-8 válido: {0}")]
    WordEncoding(#[from] std::string::FromUtf8Error),

    /// Erro de E/S na escrita da saída.
    #[error("erro de E/S: {0}")]
    Io(#[from] io::Error),
}

/// Alias de `Result` para as operações do crate.
pub type Result<T> = std::result::Result<T, ArnerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_line_message() {
        let err = ArnerError::MalformedLine {
            line_number: 7,
            content: "سوريا".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("linha 7"));
        assert!(msg.contains("سوريا"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArnerError>();
    }
}

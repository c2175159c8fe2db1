//! # arner-core — Preparação de Datasets para NER em Árabe
//!
//! Este crate converte corpora anotados (palavra, label) em registros com
//! features linguísticas engenheiradas, nas duas visões que um modelo de
//! sequência discriminativo (treinado e decodificado com Viterbi) precisa.
//!
//! ## Arquitetura do Sistema
//!
//! O dado flui por um pipeline linear:
//!
//! 1.  **Leitura** ([`corpus`]): o corpus de duas colunas vira uma
//!     sequência ordenada de registros [`Datum`].
//! 2.  **Léxico** ([`lexicon`]): conjunto somente-leitura de nomes
//!     conhecidos, injetado no motor (sem estado global de processo).
//! 3.  **Features** ([`features`]): para cada posição, o motor calcula a
//!     sequência ordenada de features ortográficas, morfológicas e de
//!     contexto do token.
//! 4.  **Expansão** ([`expand`]):
//!     *   **Visão de treino**: um registro por token, condicionado ao
//!         label anterior *verdadeiro*.
//!     *   **Visão de decodificação**: o Viterbi precisa pontuar todas as
//!         transições, então cada posição é expandida para *todos* os
//!         labels anteriores possíveis — `1 + (N-1) * L` registros.
//! 5.  **Serialização** ([`serializer`]): um objeto JSON por linha, com a
//!     palavra em base64 para sobreviver a canais ASCII.
//!
//! O treinamento de pesos e a busca de Viterbi em si ficam fora deste
//! crate: o consumidor recebe os registros enriquecidos prontos.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use arner_core::corpus::read_corpus_str;
//! use arner_core::{expand_train, DecodeExpansion, FeatureEngine, Lexicon};
//!
//! let lexicon = Lexicon::from_lines(["بشار"]);
//! let engine = FeatureEngine::new(lexicon);
//!
//! let data = read_corpus_str("قال O\nالرئيس O\nبشار PER").unwrap();
//!
//! // Visão de treino: um registro por token, label anterior verdadeiro
//! let train = expand_train(&engine, &data);
//! assert_eq!(train.len(), 3);
//! assert_eq!(train[2].previous_label.as_deref(), Some("O"));
//!
//! // Visão de decodificação: um registro por (posição, label possível)
//! let decode = DecodeExpansion::new(&engine, &data);
//! assert_eq!(decode.expected_len(), 1 + 2 * 2);
//! ```

pub mod corpus;
pub mod datum;
pub mod error;
pub mod expand;
pub mod features;
pub mod lexicon;
pub mod pipeline;
pub mod serializer;

pub use datum::{Datum, OUTSIDE_LABEL};
pub use error::{ArnerError, Result};
pub use expand::{
    expand_test, expand_test_batch, expand_train, expand_train_batch, DecodeExpansion,
};
pub use features::FeatureEngine;
pub use lexicon::Lexicon;
pub use pipeline::DatasetPipeline;
pub use serializer::{parse_line, write_datums, WriteReport};

//! # Pipeline de Preparação de Dataset
//!
//! Orquestra os estágios para arquivos inteiros:
//! leitura do corpus → expansão (treino ou decodificação) → serialização.

use std::path::Path;

use crate::corpus;
use crate::datum::Datum;
use crate::error::Result;
use crate::expand;
use crate::features::FeatureEngine;
use crate::lexicon::Lexicon;
use crate::serializer::{self, WriteReport};

/// O pipeline de preparação.
///
/// Constrói o motor de features uma vez (léxico injetado, padrões
/// compilados) e o reaproveita para quantos corpora forem necessários.
pub struct DatasetPipeline {
    engine: FeatureEngine,
}

impl DatasetPipeline {
    /// Cria o pipeline com um léxico já carregado.
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            engine: FeatureEngine::new(lexicon),
        }
    }

    /// Cria o pipeline carregando o léxico do arquivo dado.
    ///
    /// Léxico ilegível aborta aqui, antes de qualquer feature ser calculada.
    pub fn from_lexicon_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Lexicon::from_path(path)?))
    }

    /// Acesso ao motor, para expansões em memória fora do fluxo de arquivos.
    pub fn engine(&self) -> &FeatureEngine {
        &self.engine
    }

    /// Prepara a visão de treino: lê o corpus, expande com o label anterior
    /// verdadeiro e escreve `<out_base>.json`.
    pub fn prepare_train(
        &self,
        corpus_path: impl AsRef<Path>,
        out_base: impl AsRef<Path>,
    ) -> Result<WriteReport> {
        let data = corpus::read_corpus_file(corpus_path)?;
        tracing::info!(records = data.len(), "corpus de treino lido");

        let enriched = expand::expand_train(&self.engine, &data);
        self.write(&enriched, out_base)
    }

    /// Prepara a visão de decodificação: expande cada posição para todos os
    /// labels anteriores possíveis e escreve `<out_base>.json`.
    pub fn prepare_test(
        &self,
        corpus_path: impl AsRef<Path>,
        out_base: impl AsRef<Path>,
    ) -> Result<WriteReport> {
        let data = corpus::read_corpus_file(corpus_path)?;
        let expansion = expand::DecodeExpansion::new(&self.engine, &data);
        tracing::info!(
            records = data.len(),
            labels = expansion.distinct_labels().len(),
            expanded = expansion.expected_len(),
            "corpus de decodificação lido"
        );

        let enriched: Vec<_> = expansion.collect();
        self.write(&enriched, out_base)
    }

    fn write(&self, enriched: &[Datum], out_base: impl AsRef<Path>) -> Result<WriteReport> {
        let report = serializer::write_datums(enriched, out_base)?;
        if report.skipped > 0 {
            tracing::warn!(skipped = report.skipped, "registros pulados na escrita");
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::sample_corpus;
    use crate::serializer::output_path;
    use std::io::Write;

    fn write_fixtures(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
        let corpus_path = dir.join("corpus.txt");
        let mut corpus_file = std::fs::File::create(&corpus_path).unwrap();
        write!(corpus_file, "{}", sample_corpus()).unwrap();

        let lexicon_path = dir.join("names.txt");
        let mut lexicon_file = std::fs::File::create(&lexicon_path).unwrap();
        writeln!(lexicon_file, "بشار").unwrap();

        (corpus_path, lexicon_path)
    }

    #[test]
    fn test_prepare_train_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let (corpus_path, lexicon_path) = write_fixtures(dir.path());

        let pipeline = DatasetPipeline::from_lexicon_path(&lexicon_path).unwrap();
        let out_base = dir.path().join("train");
        let report = pipeline.prepare_train(&corpus_path, &out_base).unwrap();

        // 11 tokens no corpus de exemplo, um registro por token
        assert_eq!(report.written, 11);
        assert_eq!(report.skipped, 0);

        let content = std::fs::read_to_string(output_path(&out_base)).unwrap();
        assert_eq!(content.lines().count(), 11);
    }

    #[test]
    fn test_prepare_test_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let (corpus_path, lexicon_path) = write_fixtures(dir.path());

        let pipeline = DatasetPipeline::from_lexicon_path(&lexicon_path).unwrap();
        let out_base = dir.path().join("test");
        let report = pipeline.prepare_test(&corpus_path, &out_base).unwrap();

        // N=11, labels distintos O/PER/LOC => L=3: 1 + 10*3 registros
        assert_eq!(report.written, 31);

        let content = std::fs::read_to_string(output_path(&out_base)).unwrap();
        assert_eq!(content.lines().count(), 31);
    }

    #[test]
    fn test_missing_lexicon_aborts_pipeline_construction() {
        assert!(DatasetPipeline::from_lexicon_path("/nao/existe.txt").is_err());
    }
}

//! # Serialização dos Registros Enriquecidos
//!
//! Escreve um objeto JSON autocontido por linha, no contrato de arquivo
//! que o treinador/decodificador consome. A palavra vai codificada em
//! base64 para que texto árabe sobreviva a canais que só transportam
//! ASCII; os nomes das features viram chaves do objeto `_features`,
//! prefixadas com `_`, com a própria string de feature como valor.
//!
//! Falha de conversão de um registro individual não derruba o arquivo:
//! o registro é registrado no log e pulado, e o total de pulados volta
//! ao chamador no [`WriteReport`]. Erros de E/S continuam abortando.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::datum::Datum;
use crate::error::Result;

/// Sufixo fixo que identifica a saída estruturada.
pub const OUTPUT_EXTENSION: &str = ".json";

/// Resultado da escrita: quantos registros entraram no arquivo e quantos
/// foram pulados por falha de serialização.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub written: usize,
    pub skipped: usize,
}

/// Uma linha do arquivo de saída. Os nomes de campo com `_` são o
/// contrato consumido pelo modelo, não estética nossa.
#[derive(Debug, Serialize, Deserialize)]
struct SerializedDatum {
    #[serde(rename = "_label")]
    label: String,
    /// Palavra codificada em base64 (bytes UTF-8 do token).
    #[serde(rename = "_word")]
    word: String,
    #[serde(rename = "_prevLabel")]
    previous_label: Option<String>,
    /// Mapa `"_" + feature` → feature.
    #[serde(rename = "_features")]
    features: BTreeMap<String, String>,
}

impl SerializedDatum {
    fn from_datum(datum: &Datum) -> Self {
        let features = datum
            .features
            .iter()
            .map(|feature| (format!("_{feature}"), feature.clone()))
            .collect();
        Self {
            label: datum.label.clone(),
            word: STANDARD.encode(datum.word.as_bytes()),
            previous_label: datum.previous_label.clone(),
            features,
        }
    }
}

/// Caminho final da saída: nome dado pelo chamador + [`OUTPUT_EXTENSION`].
pub fn output_path(base_path: &Path) -> PathBuf {
    let mut path = base_path.as_os_str().to_os_string();
    path.push(OUTPUT_EXTENSION);
    PathBuf::from(path)
}

/// Escreve os registros em `<base_path>.json`, um objeto JSON por linha.
pub fn write_datums(data: &[Datum], base_path: impl AsRef<Path>) -> Result<WriteReport> {
    let path = output_path(base_path.as_ref());
    let mut writer = BufWriter::new(File::create(&path)?);
    let mut report = WriteReport::default();

    for (index, datum) in data.iter().enumerate() {
        match serde_json::to_string(&SerializedDatum::from_datum(datum)) {
            Ok(line) => {
                writeln!(writer, "{line}")?;
                report.written += 1;
            }
            Err(err) => {
                tracing::warn!(index, word = %datum.word, %err, "registro pulado na serialização");
                report.skipped += 1;
            }
        }
    }

    writer.flush()?;
    Ok(report)
}

/// Decodifica uma linha serializada de volta para um [`Datum`].
///
/// Recupera label, label anterior e a palavra original exata (após
/// decodificar o base64). A ordem das features não é preservada: no
/// arquivo elas são um mapa, não uma sequência.
pub fn parse_line(line: &str) -> Result<Datum> {
    let raw: SerializedDatum = serde_json::from_str(line)?;
    let bytes = STANDARD.decode(raw.word.as_bytes())?;
    let word = String::from_utf8(bytes)?;

    let mut datum = Datum::new(word, raw.label);
    datum.previous_label = raw.previous_label;
    datum.features = raw.features.into_values().collect();
    Ok(datum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::read_corpus_str;
    use crate::expand::expand_train;
    use crate::features::FeatureEngine;
    use crate::lexicon::Lexicon;

    fn enriched_records() -> Vec<Datum> {
        let engine = FeatureEngine::new(Lexicon::from_lines(["بشار"]));
        let data = read_corpus_str("قال O\nالرئيس O\nبشار PER").unwrap();
        expand_train(&engine, &data)
    }

    #[test]
    fn test_output_path_appends_fixed_extension() {
        let path = output_path(Path::new("/tmp/train"));
        assert_eq!(path, PathBuf::from("/tmp/train.json"));
    }

    #[test]
    fn test_writes_one_json_object_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("train");
        let records = enriched_records();

        let report = write_datums(&records, &base).unwrap();
        assert_eq!(report.written, records.len());
        assert_eq!(report.skipped, 0);

        let content = std::fs::read_to_string(output_path(&base)).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), records.len());

        // Cada linha é um objeto autocontido com os campos do contrato
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert!(value.get("_label").is_some());
        assert!(value.get("_word").is_some());
        assert!(value.get("_prevLabel").is_some());
        assert!(value.get("_features").is_some());
    }

    #[test]
    fn test_feature_keys_carry_disambiguating_prefix() {
        let records = enriched_records();
        let line = serde_json::to_string(&SerializedDatum::from_datum(&records[0])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        let features = value.get("_features").unwrap().as_object().unwrap();
        for (key, val) in features {
            let feature = val.as_str().unwrap();
            assert_eq!(key, &format!("_{feature}"));
        }
    }

    #[test]
    fn test_round_trip_recovers_original_fields() {
        let records = enriched_records();
        for record in &records {
            let line = serde_json::to_string(&SerializedDatum::from_datum(record)).unwrap();
            let recovered = parse_line(&line).unwrap();

            assert_eq!(recovered.word, record.word);
            assert_eq!(recovered.label, record.label);
            assert_eq!(recovered.previous_label, record.previous_label);
        }
    }

    #[test]
    fn test_word_is_ascii_safe_in_file() {
        let records = enriched_records();
        let line = serde_json::to_string(&SerializedDatum::from_datum(&records[2])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        let encoded = value.get("_word").unwrap().as_str().unwrap();
        assert!(encoded.is_ascii());
        assert_ne!(encoded, "بشار");
    }

    #[test]
    fn test_parse_line_rejects_invalid_base64() {
        let line = r#"{"_label":"O","_word":"não-base64!","_prevLabel":"O","_features":{}}"#;
        assert!(parse_line(line).is_err());
    }
}
